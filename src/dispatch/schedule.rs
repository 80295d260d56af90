//! Backup dispatch series construction from a calibrated threshold.

use super::types::DispatchSchedule;

/// Builds the hourly backup-energy and on/off series for a threshold.
///
/// The comparison is `>=`, not `>`: an hour whose deficit exactly equals
/// the threshold is covered, which matters at the boundary the percentile
/// calibration produces.
pub fn build_dispatch(unmet_energy: &[f32], threshold: f32) -> DispatchSchedule {
    let mut backup_energy_kwh = Vec::with_capacity(unmet_energy.len());
    let mut backup_active = Vec::with_capacity(unmet_energy.len());

    for &deficit in unmet_energy {
        if deficit >= threshold {
            backup_energy_kwh.push(deficit);
            backup_active.push(1.0);
        } else {
            backup_energy_kwh.push(0.0);
            backup_active.push(0.0);
        }
    }

    DispatchSchedule {
        backup_energy_kwh,
        backup_active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_lengths_match_input() {
        let schedule = build_dispatch(&[0.0, 1.0, 2.0, 3.0], 1.5);
        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule.backup_active.len(), 4);
    }

    #[test]
    fn deficit_equal_to_threshold_is_covered() {
        let schedule = build_dispatch(&[1.0, 2.0, 3.0], 2.0);
        assert_eq!(schedule.backup_active, vec![0.0, 1.0, 1.0]);
        assert_eq!(schedule.backup_energy_kwh, vec![0.0, 2.0, 3.0]);
    }

    #[test]
    fn sentinel_threshold_disables_backup() {
        let unmet = [0.0, 4.0, 8.0];
        let schedule = build_dispatch(&unmet, 9.0);
        assert!(schedule.backup_active.iter().all(|&a| a == 0.0));
        assert!(schedule.backup_energy_kwh.iter().all(|&e| e == 0.0));
    }

    #[test]
    fn energy_matches_deficit_on_active_hours() {
        let unmet = [0.5, 2.5, 0.0, 6.0];
        let schedule = build_dispatch(&unmet, 1.0);
        for h in 0..unmet.len() {
            if schedule.backup_active[h] == 1.0 {
                assert_eq!(schedule.backup_energy_kwh[h], unmet[h]);
            } else {
                assert_eq!(schedule.backup_energy_kwh[h], 0.0);
            }
        }
    }
}
