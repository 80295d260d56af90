//! Hourly deficit profiles: CSV ingestion and synthetic generation.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::ProfileConfig;

/// Error raised while loading or validating a deficit profile.
#[derive(Debug)]
pub struct ProfileError {
    /// Human-readable description of the failure.
    pub message: String,
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "profile error: {}", self.message)
    }
}

/// Aligned unmet-energy and blackout series for one simulation horizon.
///
/// Supplied by the upstream load/generation/storage model; index position is
/// the sole ordering key and the two series are always the same length.
#[derive(Debug, Clone)]
pub struct DeficitProfile {
    /// Demand not met by the primary generation/storage mix (kWh per hour).
    pub unmet_energy_kwh: Vec<f32>,
    /// 1.0 for each hour demand was not met absent backup.
    pub blackouts: Vec<f32>,
}

impl DeficitProfile {
    /// Number of hours in the profile.
    pub fn len(&self) -> usize {
        self.unmet_energy_kwh.len()
    }

    /// Returns `true` when the profile covers zero hours.
    pub fn is_empty(&self) -> bool {
        self.unmet_energy_kwh.is_empty()
    }

    /// Loads a profile from a two-column CSV file (`unmet_kwh,blackout`).
    ///
    /// # Errors
    ///
    /// Returns a `ProfileError` if the file cannot be read or a row fails
    /// to parse or validate.
    pub fn from_csv_file(path: &Path) -> Result<Self, ProfileError> {
        let file = File::open(path).map_err(|e| ProfileError {
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_reader(file)
    }

    /// Reads a profile from any CSV reader with `unmet_kwh,blackout` rows.
    ///
    /// Unmet energy must be non-negative and the blackout indicator must be
    /// exactly 0 or 1.
    ///
    /// # Errors
    ///
    /// Returns a `ProfileError` on malformed rows, out-of-range values, or
    /// an empty profile.
    pub fn from_reader(reader: impl Read) -> Result<Self, ProfileError> {
        let mut rdr = csv::ReaderBuilder::new().from_reader(reader);

        let mut unmet_energy_kwh = Vec::new();
        let mut blackouts = Vec::new();

        for (i, record) in rdr.records().enumerate() {
            let row = i + 2; // 1-based, after the header
            let record = record.map_err(|e| ProfileError {
                message: format!("row {row}: {e}"),
            })?;
            if record.len() < 2 {
                return Err(ProfileError {
                    message: format!("row {row}: expected 2 columns, got {}", record.len()),
                });
            }

            let unmet: f32 = record[0].trim().parse().map_err(|_| ProfileError {
                message: format!("row {row}: unmet_kwh \"{}\" is not a number", &record[0]),
            })?;
            if unmet < 0.0 {
                return Err(ProfileError {
                    message: format!("row {row}: unmet_kwh must be >= 0, got {unmet}"),
                });
            }

            let blackout: f32 = record[1].trim().parse().map_err(|_| ProfileError {
                message: format!("row {row}: blackout \"{}\" is not a number", &record[1]),
            })?;
            if blackout != 0.0 && blackout != 1.0 {
                return Err(ProfileError {
                    message: format!("row {row}: blackout must be 0 or 1, got {blackout}"),
                });
            }

            unmet_energy_kwh.push(unmet);
            blackouts.push(blackout);
        }

        if unmet_energy_kwh.is_empty() {
            return Err(ProfileError {
                message: "profile contains no hourly rows".to_string(),
            });
        }

        Ok(Self {
            unmet_energy_kwh,
            blackouts,
        })
    }

    /// Generates a deterministic synthetic profile.
    ///
    /// Demand follows a daily sinusoid with Gaussian noise; whatever exceeds
    /// the firm supply level becomes unmet energy, and any hour with a
    /// nonzero deficit is a blackout hour. Identical parameters and seed
    /// reproduce the identical profile.
    pub fn synthetic(cfg: &ProfileConfig, hours: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut unmet_energy_kwh = Vec::with_capacity(hours);
        let mut blackouts = Vec::with_capacity(hours);

        for t in 0..hours {
            let day_pos = (t % 24) as f32 / 24.0;
            let angle = 2.0 * std::f32::consts::PI * day_pos + cfg.phase_rad;
            let demand_kw =
                cfg.base_kw + cfg.amp_kw * angle.sin() + gaussian_noise(&mut rng, cfg.noise_std);

            let deficit = (demand_kw - cfg.supply_kw).max(0.0);
            unmet_energy_kwh.push(deficit);
            blackouts.push(if deficit > 0.0 { 1.0 } else { 0.0 });
        }

        Self {
            unmet_energy_kwh,
            blackouts,
        }
    }
}

/// Gaussian noise via the Box-Muller transform.
fn gaussian_noise(rng: &mut StdRng, std_dev: f32) -> f32 {
    if std_dev <= 0.0 {
        return 0.0;
    }

    let u1: f32 = rng.random::<f32>().clamp(1e-6, 1.0);
    let u2: f32 = rng.random::<f32>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos();
    z0 * std_dev
}
