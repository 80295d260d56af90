//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::dispatch::types::HOURS_PER_YEAR;

/// Top-level scenario configuration parsed from TOML.
///
/// Every section except `[generator]` has defaults matching the baseline
/// scenario. The generator section and its `fuel_consumption` and
/// `minimum_load` fields are required: a scenario that omits them fails
/// parsing before any simulation starts. Load from TOML with
/// [`ScenarioConfig::from_toml_file`] or use [`ScenarioConfig::baseline`]
/// for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Simulation horizon and sizing parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Reliability target after backup is applied.
    #[serde(default)]
    pub reliability: ReliabilityConfig,
    /// Backup source parameters.
    pub generator: GeneratorConfig,
    /// Synthetic deficit-profile parameters.
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Simulation horizon and sizing parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of years to simulate (must be > 0).
    pub years: usize,
    /// Master random seed for synthetic profiles.
    pub seed: u64,
    /// Rated backup capacity for this run (kW, must be > 0).
    pub capacity_kw: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            years: 1,
            seed: 42,
            capacity_kw: 10.0,
        }
    }
}

impl SimulationConfig {
    /// Total number of simulated hours across all years.
    pub fn total_hours(&self) -> usize {
        HOURS_PER_YEAR * self.years
    }
}

/// Reliability target after backup is applied.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReliabilityConfig {
    /// Desired fraction of blackout hours once backup runs (0.0 to 1.0).
    pub target: f32,
}

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self { target: 0.05 }
    }
}

/// Backup source parameters.
///
/// `fuel_consumption` and `minimum_load` carry no serde defaults: omitting
/// either from a scenario file is a configuration error.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Source name.
    #[serde(default = "GeneratorConfig::default_name")]
    pub name: String,
    /// Source kind: `"electric"` or `"water_heater"`.
    #[serde(default = "GeneratorConfig::default_kind")]
    pub kind: String,
    /// Fuel burned per kWh produced (litres, must be > 0).
    pub fuel_consumption: f32,
    /// Minimum dispatchable fraction of rated capacity (0.0 to 1.0).
    pub minimum_load: f32,
    /// Electricity drawn per kWh of heat output (water heater only).
    #[serde(default)]
    pub electric_power: f32,
    /// Rated thermal output (kW, water heater only).
    #[serde(default)]
    pub maximum_output_kw: f32,
}

impl GeneratorConfig {
    fn default_name() -> String {
        "diesel_backup".to_string()
    }

    fn default_kind() -> String {
        "electric".to_string()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            kind: Self::default_kind(),
            fuel_consumption: 0.4,
            minimum_load: 0.3,
            electric_power: 0.0,
            maximum_output_kw: 0.0,
        }
    }
}

/// Synthetic deficit-profile parameters.
///
/// The profile stands in for the upstream generation/storage model: a
/// daily demand sinusoid with Gaussian noise minus a firm supply level,
/// floored at zero, gives the unmet-energy series.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    /// Mean demand (kW).
    pub base_kw: f32,
    /// Sinusoidal amplitude (kW).
    pub amp_kw: f32,
    /// Phase offset (radians).
    pub phase_rad: f32,
    /// Gaussian noise standard deviation (kW).
    pub noise_std: f32,
    /// Firm supply available without backup (kW).
    pub supply_kw: f32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            base_kw: 2.0,
            amp_kw: 1.5,
            phase_rad: 1.2,
            noise_std: 0.2,
            supply_kw: 3.0,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"generator.minimum_load"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario.
    pub fn baseline() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            reliability: ReliabilityConfig::default(),
            generator: GeneratorConfig::default(),
            profile: ProfileConfig::default(),
        }
    }

    /// Returns the full-coverage preset: every deficit hour must be covered.
    pub fn full_coverage() -> Self {
        Self {
            simulation: SimulationConfig {
                capacity_kw: 16.0,
                ..SimulationConfig::default()
            },
            reliability: ReliabilityConfig { target: 0.0 },
            generator: GeneratorConfig {
                name: "full_coverage_diesel".to_string(),
                minimum_load: 0.35,
                ..GeneratorConfig::default()
            },
            profile: ProfileConfig::default(),
        }
    }

    /// Returns the light-duty preset: the target sits above any realistic
    /// blackout rate, so the sentinel threshold keeps backup off.
    pub fn light_duty() -> Self {
        Self {
            simulation: SimulationConfig {
                capacity_kw: 4.0,
                ..SimulationConfig::default()
            },
            reliability: ReliabilityConfig { target: 0.9 },
            generator: GeneratorConfig {
                name: "standby_diesel".to_string(),
                ..GeneratorConfig::default()
            },
            profile: ProfileConfig::default(),
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "full_coverage", "light_duty"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "full_coverage" => Ok(Self::full_coverage()),
            "light_duty" => Ok(Self::light_duty()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid, contains unknown
    /// fields, or omits a required generator field.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let s = &self.simulation;
        if s.years == 0 {
            errors.push(ConfigError {
                field: "simulation.years".into(),
                message: "must be > 0".into(),
            });
        }
        if s.capacity_kw <= 0.0 {
            errors.push(ConfigError {
                field: "simulation.capacity_kw".into(),
                message: "must be > 0".into(),
            });
        }

        let r = &self.reliability;
        if !(0.0..=1.0).contains(&r.target) {
            errors.push(ConfigError {
                field: "reliability.target".into(),
                message: "must be in [0.0, 1.0]".into(),
            });
        }

        let g = &self.generator;
        if g.kind != "electric" && g.kind != "water_heater" {
            errors.push(ConfigError {
                field: "generator.kind".into(),
                message: format!(
                    "must be \"electric\" or \"water_heater\", got \"{}\"",
                    g.kind
                ),
            });
        }
        if g.fuel_consumption <= 0.0 {
            errors.push(ConfigError {
                field: "generator.fuel_consumption".into(),
                message: "must be > 0".into(),
            });
        }
        if !(0.0..=1.0).contains(&g.minimum_load) {
            errors.push(ConfigError {
                field: "generator.minimum_load".into(),
                message: "must be in [0.0, 1.0]".into(),
            });
        }
        if g.electric_power < 0.0 {
            errors.push(ConfigError {
                field: "generator.electric_power".into(),
                message: "must be >= 0".into(),
            });
        }
        if g.kind == "water_heater" && g.maximum_output_kw <= 0.0 {
            errors.push(ConfigError {
                field: "generator.maximum_output_kw".into(),
                message: "must be > 0 for a water heater".into(),
            });
        }

        let p = &self.profile;
        if p.base_kw < 0.0 {
            errors.push(ConfigError {
                field: "profile.base_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if p.amp_kw < 0.0 {
            errors.push(ConfigError {
                field: "profile.amp_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if p.noise_std < 0.0 {
            errors.push(ConfigError {
                field: "profile.noise_std".into(),
                message: "must be >= 0".into(),
            });
        }
        if p.supply_kw < 0.0 {
            errors.push(ConfigError {
                field: "profile.supply_kw".into(),
                message: "must be >= 0".into(),
            });
        }

        errors
    }
}
