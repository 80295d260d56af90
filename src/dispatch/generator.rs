//! Backup source descriptors: diesel generator and diesel water heater.

use std::collections::HashMap;

/// Resource carriers a backup source consumes or produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Diesel,
    Electricity,
    Heat,
}

/// A diesel backup generator producing electricity.
///
/// Immutable once constructed; built from configuration and reused across
/// the run. Rated capacity is a per-run sizing parameter supplied alongside
/// the descriptor, not a field of it.
#[derive(Debug, Clone)]
pub struct DieselGenerator {
    /// Generator name.
    pub name: String,
    /// Fuel burned per kWh of electrical output (litres).
    pub fuel_consumption: f32,
    /// Fraction of rated capacity below which the unit still burns fuel as
    /// if loaded to this fraction (0.0 to 1.0).
    pub minimum_load: f32,
}

impl DieselGenerator {
    /// Creates a new diesel generator descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `fuel_consumption` is not positive or `minimum_load` is
    /// outside `[0.0, 1.0]`.
    pub fn new(name: String, fuel_consumption: f32, minimum_load: f32) -> Self {
        assert!(fuel_consumption > 0.0, "fuel_consumption must be > 0");
        assert!(
            (0.0..=1.0).contains(&minimum_load),
            "minimum_load must be in [0.0, 1.0]"
        );

        Self {
            name,
            fuel_consumption,
            minimum_load,
        }
    }
}

/// A diesel water heater producing heat, optionally drawing electricity.
///
/// Input consumption is keyed by resource and expressed per kWh of heat
/// output.
#[derive(Debug, Clone)]
pub struct DieselWaterHeater {
    /// Heater name.
    pub name: String,
    /// Input consumed per kWh of heat produced, keyed by resource.
    pub input_consumption: HashMap<ResourceKind, f32>,
    /// Rated thermal output (kW).
    pub maximum_output_kw: f32,
    /// Minimum dispatchable fraction of rated output (0.0 to 1.0).
    pub minimum_load: f32,
}

impl DieselWaterHeater {
    /// Creates a new diesel water heater descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `fuel_consumption` or `maximum_output_kw` is not positive,
    /// `electric_power` is negative, or `minimum_load` is outside
    /// `[0.0, 1.0]`.
    pub fn new(
        name: String,
        fuel_consumption: f32,
        electric_power: f32,
        maximum_output_kw: f32,
        minimum_load: f32,
    ) -> Self {
        assert!(fuel_consumption > 0.0, "fuel_consumption must be > 0");
        assert!(electric_power >= 0.0, "electric_power must be >= 0");
        assert!(maximum_output_kw > 0.0, "maximum_output_kw must be > 0");
        assert!(
            (0.0..=1.0).contains(&minimum_load),
            "minimum_load must be in [0.0, 1.0]"
        );

        let mut input_consumption = HashMap::new();
        input_consumption.insert(ResourceKind::Diesel, fuel_consumption);
        input_consumption.insert(ResourceKind::Electricity, electric_power);

        Self {
            name,
            input_consumption,
            maximum_output_kw,
            minimum_load,
        }
    }

    /// Fuel burned per kWh of heat output (litres).
    pub fn fuel_consumption(&self) -> f32 {
        self.input_consumption
            .get(&ResourceKind::Diesel)
            .copied()
            .unwrap_or(0.0)
    }

    /// Electricity drawn per kWh of heat output (kWh).
    pub fn electricity_consumption(&self) -> f32 {
        self.input_consumption
            .get(&ResourceKind::Electricity)
            .copied()
            .unwrap_or(0.0)
    }
}

/// Dispatchable backup source, one variant per output resource kind.
#[derive(Debug, Clone)]
pub enum BackupSource {
    /// Electricity-producing diesel generator.
    Electric(DieselGenerator),
    /// Heat-producing diesel water heater.
    Heat(DieselWaterHeater),
}

impl BackupSource {
    /// Source name.
    pub fn name(&self) -> &str {
        match self {
            BackupSource::Electric(g) => &g.name,
            BackupSource::Heat(h) => &h.name,
        }
    }

    /// Fuel burned per kWh of output (litres).
    pub fn fuel_consumption(&self) -> f32 {
        match self {
            BackupSource::Electric(g) => g.fuel_consumption,
            BackupSource::Heat(h) => h.fuel_consumption(),
        }
    }

    /// Minimum dispatchable fraction of rated capacity.
    pub fn minimum_load(&self) -> f32 {
        match self {
            BackupSource::Electric(g) => g.minimum_load,
            BackupSource::Heat(h) => h.minimum_load,
        }
    }

    /// Resource kind the source produces.
    pub fn output_kind(&self) -> ResourceKind {
        match self {
            BackupSource::Electric(_) => ResourceKind::Electricity,
            BackupSource::Heat(_) => ResourceKind::Heat,
        }
    }
}
