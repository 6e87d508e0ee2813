//! Configuration management for cell parameters.
//!
//! Every constant the cell model depends on lives here with its reference
//! value as the default. Sections may be omitted from `config.toml`; missing
//! ones fall back to [`Default`].
//!
//! ## Example `config.toml`
//!
//! ```toml
//! seed = 42
//!
//! [metabolism]
//! rate = 0.1
//!
//! [division]
//! energy_threshold = 0.7
//! maturity_age = 100.0
//!
//! [environment]
//! nutrient_channels = 0
//! chemical_channels = 2
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Energy burned every tick regardless of production.
pub const METABOLISM_RATE: f32 = 0.1;
/// Energy a cell must exceed before it may divide.
pub const ENERGY_THRESHOLD: f32 = 0.7;
/// Age a cell must exceed before it may divide.
pub const MATURITY_AGE: f32 = 100.0;
/// Divisor applied to `survival_time * energy_level`.
pub const FITNESS_SCALE: f32 = 100.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MetabolismConfig {
    pub rate: f32,
}

impl Default for MetabolismConfig {
    fn default() -> Self {
        Self {
            rate: METABOLISM_RATE,
        }
    }
}

/// Gate on [`crate::cell::Cell::should_divide`]. Both comparisons are strict.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DivisionConfig {
    pub energy_threshold: f32,
    pub maturity_age: f32,
}

impl Default for DivisionConfig {
    fn default() -> Self {
        Self {
            energy_threshold: ENERGY_THRESHOLD,
            maturity_age: MATURITY_AGE,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FitnessConfig {
    pub scale: f32,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        Self {
            scale: FITNESS_SCALE,
        }
    }
}

/// Channel counts of every [`protocell_data::EnvironmentReading`] in a deployment.
///
/// The metabolism and homeostasis input widths are derived from these, so
/// both networks always agree on the reading layout. The default layout has
/// no nutrient channel and two chemical channels, giving widths 4 and 6.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub nutrient_channels: usize,
    pub chemical_channels: usize,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            nutrient_channels: 0,
            chemical_channels: 2,
        }
    }
}

impl EnvironmentConfig {
    /// nutrients, temperature, chemicals, energy
    #[must_use]
    pub fn metabolism_inputs(&self) -> usize {
        self.nutrient_channels + self.chemical_channels + 2
    }

    /// energy, temperature, chemicals, age, survival time
    #[must_use]
    pub fn homeostasis_inputs(&self) -> usize {
        self.chemical_channels + 4
    }
}

/// Root configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub metabolism: MetabolismConfig,
    pub division: DivisionConfig,
    pub fitness: FitnessConfig,
    pub environment: EnvironmentConfig,
    /// Seeds network initialisation in [`crate::cell::Cell::with_config`].
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.metabolism.rate),
            "Metabolism rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.division.energy_threshold),
            "Division energy threshold must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.division.maturity_age.is_finite() && self.division.maturity_age >= 0.0,
            "Maturity age must be non-negative"
        );
        anyhow::ensure!(
            self.fitness.scale.is_finite() && self.fitness.scale > 0.0,
            "Fitness scale must be positive"
        );
        anyhow::ensure!(
            self.environment.nutrient_channels + self.environment.chemical_channels > 0,
            "At least one nutrient or chemical channel is required"
        );
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        tracing::info!(path = %path.display(), fingerprint = %config.fingerprint(), "Loaded config");
        Ok(config)
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.metabolism).as_bytes());
        hasher.update(format!("{:?}", self.division).as_bytes());
        hasher.update(format!("{:?}", self.fitness).as_bytes());
        hasher.update(format!("{:?}", self.environment).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.metabolism.rate, 0.1);
        assert_eq!(config.division.energy_threshold, 0.7);
        assert_eq!(config.division.maturity_age, 100.0);
    }

    #[test]
    fn test_default_widths() {
        let env = EnvironmentConfig::default();
        assert_eq!(env.metabolism_inputs(), 4);
        assert_eq!(env.homeostasis_inputs(), 6);
    }

    #[test]
    fn test_one_of_each_layout() {
        let env = EnvironmentConfig {
            nutrient_channels: 1,
            chemical_channels: 1,
        };
        assert_eq!(env.metabolism_inputs(), 4);
        assert_eq!(env.homeostasis_inputs(), 5);
        let config = AppConfig {
            environment: env,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_metabolism_rate() {
        let config = AppConfig {
            metabolism: MetabolismConfig { rate: 1.5 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_channels_rejected() {
        let config = AppConfig {
            environment: EnvironmentConfig {
                nutrient_channels: 0,
                chemical_channels: 0,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml("seed = 7\n[division]\nmaturity_age = 10.0\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.division.maturity_age, 10.0);
        assert_eq!(config.division.energy_threshold, ENERGY_THRESHOLD);
        assert_eq!(config.metabolism.rate, METABOLISM_RATE);
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        assert!(AppConfig::from_toml("[fitness]\nscale = 0.0\n").is_err());
    }

    #[test]
    fn test_fingerprint_ignores_seed() {
        let a = AppConfig::default();
        let b = AppConfig {
            seed: Some(1),
            ..Default::default()
        };
        let c = AppConfig {
            metabolism: MetabolismConfig { rate: 0.2 },
            ..Default::default()
        };
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }
}
