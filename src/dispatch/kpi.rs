//! Post-hoc key-results computation from a dispatch run.

use std::fmt;

use super::types::DispatchOutcome;

/// Aggregate key results derived from a complete backup-dispatch run.
///
/// Computed post-hoc from the outcome series to keep hourly data and
/// reported metrics consistent.
#[derive(Debug, Clone)]
pub struct BackupKpiReport {
    /// Fraction of hours with a blackout before backup is applied.
    pub blackout_rate_before: f32,
    /// Fraction of hours still in blackout after backup coverage.
    pub blackout_rate_after: f32,
    /// Number of hours the backup source ran.
    pub backup_hours: usize,
    /// Total energy supplied by backup (kWh).
    pub total_backup_kwh: f32,
    /// Average daily backup energy (kWh per day).
    pub average_daily_backup_kwh: f32,
    /// Total fuel consumed (litres).
    pub total_fuel_litres: f32,
    /// Mean raw load factor over hours the source ran.
    pub mean_load_factor: f32,
    /// Largest hourly backup output (kW).
    pub peak_backup_kw: f32,
}

impl BackupKpiReport {
    /// Computes all key results from an outcome and the blackout series the
    /// run consumed.
    ///
    /// # Arguments
    ///
    /// * `outcome` - Complete dispatch outcome
    /// * `blackouts` - Blackout indicator series aligned with the outcome
    /// * `capacity_kw` - Rated backup capacity for load-factor calculation
    pub fn from_outcome(outcome: &DispatchOutcome, blackouts: &[f32], capacity_kw: f32) -> Self {
        let n = outcome.schedule.len();
        if n == 0 {
            return Self {
                blackout_rate_before: 0.0,
                blackout_rate_after: 0.0,
                backup_hours: 0,
                total_backup_kwh: 0.0,
                average_daily_backup_kwh: 0.0,
                total_fuel_litres: 0.0,
                mean_load_factor: 0.0,
                peak_backup_kw: 0.0,
            };
        }

        let mut blackout_hours_before = 0.0_f32;
        let mut blackout_hours_after = 0.0_f32;
        let mut backup_hours = 0_usize;
        let mut total_backup_kwh = 0.0_f32;
        let mut total_fuel_litres = 0.0_f32;
        let mut load_factor_sum = 0.0_f32;
        let mut peak_backup_kw = 0.0_f32;

        for h in 0..n {
            let active = outcome.schedule.backup_active[h];
            let energy_kwh = outcome.schedule.backup_energy_kwh[h];

            blackout_hours_before += blackouts[h];
            blackout_hours_after += blackouts[h] * (1.0 - active);

            if active == 1.0 {
                backup_hours += 1;
                load_factor_sum += energy_kwh / capacity_kw;
            }

            total_backup_kwh += energy_kwh;
            total_fuel_litres += outcome.fuel_usage_litres[h];
            peak_backup_kw = peak_backup_kw.max(energy_kwh);
        }

        let days = n as f32 / 24.0;
        let mean_load_factor = if backup_hours > 0 {
            load_factor_sum / backup_hours as f32
        } else {
            0.0
        };

        Self {
            blackout_rate_before: blackout_hours_before / n as f32,
            blackout_rate_after: blackout_hours_after / n as f32,
            backup_hours,
            total_backup_kwh,
            average_daily_backup_kwh: total_backup_kwh / days,
            total_fuel_litres,
            mean_load_factor,
            peak_backup_kw,
        }
    }
}

impl fmt::Display for BackupKpiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Backup Dispatch Report ---")?;
        writeln!(
            f,
            "Blackout rate (no backup):   {:.4}",
            self.blackout_rate_before
        )?;
        writeln!(
            f,
            "Blackout rate (with backup): {:.4}",
            self.blackout_rate_after
        )?;
        writeln!(f, "Backup runtime:              {} h", self.backup_hours)?;
        writeln!(
            f,
            "Backup energy:               {:.2} kWh total ({:.2} kWh/day)",
            self.total_backup_kwh, self.average_daily_backup_kwh
        )?;
        writeln!(
            f,
            "Fuel consumed:               {:.2} litres",
            self.total_fuel_litres
        )?;
        writeln!(
            f,
            "Mean load factor:            {:.3}",
            self.mean_load_factor
        )?;
        write!(
            f,
            "Peak backup output:          {:.2} kW",
            self.peak_backup_kw
        )
    }
}
