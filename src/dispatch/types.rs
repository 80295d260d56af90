//! Core dispatch types: hourly series containers and input validation.

use std::fmt;

/// Number of hours in one simulated year.
pub const HOURS_PER_YEAR: usize = 8760;

/// Invalid hourly-series input passed to the calibrator or dispatch builder.
///
/// Not recoverable locally: the caller aborts the run for the offending
/// configuration.
#[derive(Debug, Clone)]
pub struct InvalidInputError {
    /// Human-readable description of the violated precondition.
    pub message: String,
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input: {}", self.message)
    }
}

/// Checks that the unmet-energy and blackout series are non-empty and aligned.
///
/// # Errors
///
/// Returns an `InvalidInputError` if either series is empty or the lengths
/// differ.
pub fn ensure_aligned(unmet_energy: &[f32], blackouts: &[f32]) -> Result<(), InvalidInputError> {
    if unmet_energy.is_empty() || blackouts.is_empty() {
        return Err(InvalidInputError {
            message: "hourly series must be non-empty".to_string(),
        });
    }
    if unmet_energy.len() != blackouts.len() {
        return Err(InvalidInputError {
            message: format!(
                "series length mismatch: {} unmet-energy hours vs {} blackout hours",
                unmet_energy.len(),
                blackouts.len()
            ),
        });
    }
    Ok(())
}

/// Aligned hourly dispatch series produced by the schedule builder.
///
/// Invariant: `backup_energy_kwh[h] > 0.0` only for hours where
/// `backup_active[h] == 1.0`.
#[derive(Debug, Clone)]
pub struct DispatchSchedule {
    /// Energy supplied by the backup source each hour (kWh).
    pub backup_energy_kwh: Vec<f32>,
    /// On/off indicator per hour (1.0 when the backup source runs).
    pub backup_active: Vec<f32>,
}

impl DispatchSchedule {
    /// Number of hours in the schedule.
    pub fn len(&self) -> usize {
        self.backup_energy_kwh.len()
    }

    /// Returns `true` when the schedule covers zero hours.
    pub fn is_empty(&self) -> bool {
        self.backup_energy_kwh.is_empty()
    }
}

/// Complete record of one backup-dispatch run.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Calibrated deficit level at which the backup source switches on (kWh).
    pub threshold_kwh: f32,
    /// Hourly backup energy and activation series.
    pub schedule: DispatchSchedule,
    /// Hourly fuel consumption (litres).
    pub fuel_usage_litres: Vec<f32>,
}
