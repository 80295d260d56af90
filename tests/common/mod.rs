//! Shared test fixtures for integration tests.

use offgrid_sim::config::{ProfileConfig, ScenarioConfig};
use offgrid_sim::dispatch::generator::{BackupSource, DieselGenerator};
use offgrid_sim::profiles::DeficitProfile;

/// Default scenario (baseline preset).
pub fn default_scenario() -> ScenarioConfig {
    ScenarioConfig::baseline()
}

/// Default electric backup source (0.4 l/kWh, 30% minimum load).
pub fn default_source() -> BackupSource {
    BackupSource::Electric(DieselGenerator::new("test_diesel".to_string(), 0.4, 0.3))
}

/// One synthetic year from the baseline profile parameters.
pub fn default_profile(seed: u64) -> DeficitProfile {
    DeficitProfile::synthetic(&ProfileConfig::default(), 8760, seed)
}

/// Small hand-built profile with a 40% blackout rate.
pub fn small_profile() -> DeficitProfile {
    DeficitProfile {
        unmet_energy_kwh: vec![0.0, 0.0, 5.0, 10.0, 0.0],
        blackouts: vec![0.0, 0.0, 1.0, 1.0, 0.0],
    }
}
