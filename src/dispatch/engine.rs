//! Orchestration of the calibrate, dispatch, and fuel chain.

use crate::profiles::DeficitProfile;

use super::fuel::fuel_usage;
use super::generator::BackupSource;
use super::schedule::build_dispatch;
use super::threshold::find_deficit_threshold;
use super::types::{DispatchOutcome, InvalidInputError};

/// Runs the full backup-dispatch chain for one sizing candidate.
///
/// Data flows one way: the calibrated threshold drives the dispatch series,
/// which drive the fuel series. The chain is a pure function of its inputs
/// and touches no shared state, so callers may invoke it repeatedly across
/// candidate capacities, including concurrently.
///
/// # Errors
///
/// Returns an `InvalidInputError` if the profile series are empty or
/// misaligned.
pub fn run_backup_dispatch(
    profile: &DeficitProfile,
    target: f32,
    capacity_kw: f32,
    source: &BackupSource,
) -> Result<DispatchOutcome, InvalidInputError> {
    let threshold_kwh =
        find_deficit_threshold(&profile.unmet_energy_kwh, &profile.blackouts, target)?;
    let schedule = build_dispatch(&profile.unmet_energy_kwh, threshold_kwh);
    let fuel_usage_litres = fuel_usage(capacity_kw, source, &schedule);

    Ok(DispatchOutcome {
        threshold_kwh,
        schedule,
        fuel_usage_litres,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::generator::DieselGenerator;

    fn test_source() -> BackupSource {
        BackupSource::Electric(DieselGenerator::new("test_diesel".to_string(), 0.4, 0.3))
    }

    fn test_profile() -> DeficitProfile {
        DeficitProfile {
            unmet_energy_kwh: vec![0.0, 0.0, 5.0, 10.0, 0.0],
            blackouts: vec![0.0, 0.0, 1.0, 1.0, 0.0],
        }
    }

    #[test]
    fn chain_produces_aligned_series() {
        let outcome = run_backup_dispatch(&test_profile(), 0.0, 10.0, &test_source())
            .expect("dispatch should succeed");
        assert_eq!(outcome.schedule.len(), 5);
        assert_eq!(outcome.fuel_usage_litres.len(), 5);
    }

    #[test]
    fn covered_hours_follow_threshold() {
        let outcome = run_backup_dispatch(&test_profile(), 0.0, 10.0, &test_source())
            .expect("dispatch should succeed");
        assert!((outcome.threshold_kwh - 2.0).abs() < 1e-6);
        assert_eq!(outcome.schedule.backup_active, vec![0.0, 0.0, 1.0, 1.0, 0.0]);
        assert_eq!(
            outcome.schedule.backup_energy_kwh,
            vec![0.0, 0.0, 5.0, 10.0, 0.0]
        );
    }

    #[test]
    fn fuel_only_on_active_hours() {
        let outcome = run_backup_dispatch(&test_profile(), 0.0, 10.0, &test_source())
            .expect("dispatch should succeed");
        for h in 0..outcome.schedule.len() {
            if outcome.schedule.backup_active[h] == 0.0 {
                assert_eq!(outcome.fuel_usage_litres[h], 0.0);
            } else {
                assert!(outcome.fuel_usage_litres[h] > 0.0);
            }
        }
    }

    #[test]
    fn misaligned_profile_propagates_error() {
        let profile = DeficitProfile {
            unmet_energy_kwh: vec![1.0, 2.0],
            blackouts: vec![1.0],
        };
        assert!(run_backup_dispatch(&profile, 0.0, 10.0, &test_source()).is_err());
    }
}
