//! Fuel consumption under a minimum-load operating floor.

use super::generator::BackupSource;
use super::types::DispatchSchedule;

/// Computes the hourly fuel use of a dispatched backup source.
///
/// Any hour the source runs it is credited with at least its minimum-load
/// fuel draw, even when the energy actually needed is smaller. The load
/// factor is the raw `energy / capacity` ratio and is not clamped above
/// 1.0 when the deficit outruns rated capacity.
pub fn fuel_usage(
    capacity_kw: f32,
    source: &BackupSource,
    schedule: &DispatchSchedule,
) -> Vec<f32> {
    let minimum_load = source.minimum_load();
    let consumption = source.fuel_consumption();

    schedule
        .backup_energy_kwh
        .iter()
        .zip(&schedule.backup_active)
        .map(|(&energy_kwh, &active)| {
            if active != 1.0 {
                return 0.0;
            }
            let load_factor = energy_kwh / capacity_kw;
            let effective_load = if load_factor > minimum_load {
                load_factor
            } else {
                minimum_load
            };
            effective_load * capacity_kw * consumption
        })
        .collect()
}
