//! Simulation configuration parameters.

use crate::model::INITIAL_INFECTIONS;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Upper bound of the day loop when the config does not set one.
const DEFAULT_DAYS: usize = 150;

/// Simulation configuration parameters.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of agents in the population.
    pub population: usize,

    /// Transmission distance in unit-square coordinates.
    pub infection_radius: f64,

    /// Probability of transmission per exposure.
    pub infection_probability: f64,

    /// Upper bound on the number of simulated days.
    #[serde(default = "default_days")]
    pub days: usize,

    /// Seed for the random number generator.
    ///
    /// When absent the generator is seeded from the operating system and
    /// each run produces a different trajectory.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_days() -> usize {
    DEFAULT_DAYS
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// Performs validation on all parameters before returning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        Self::from_toml(&contents)
    }

    /// Parse and validate a [`Config`] from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;
        config.validate().context("failed to validate config")?;
        Ok(config)
    }

    /// Check all parameters against their valid ranges.
    pub fn validate(&self) -> Result<()> {
        check_num(self.population, INITIAL_INFECTIONS..).context("invalid population size")?;
        check_num(self.infection_radius, 0.0..).context("invalid infection radius")?;
        check_num(self.infection_probability, 0.0..=1.0)
            .context("invalid infection probability")?;
        check_num(self.days, 1..).context("invalid number of days")?;
        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
