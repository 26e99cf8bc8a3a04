//! Configuration Module
//!
//! Sizing and sweep cadence for an owning process, optionally loaded from
//! environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Environment variable holding the initial map capacity
pub const ENV_INITIAL_CAPACITY: &str = "EXPIRY_INITIAL_CAPACITY";
/// Environment variable holding the sweep interval in milliseconds
pub const ENV_SWEEP_INTERVAL_MS: &str = "EXPIRY_SWEEP_INTERVAL_MS";

/// Store and sweeper configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of entries to reserve room for up front
    pub initial_capacity: usize,
    /// Interval between sweeps when a sweeper task is spawned
    pub sweep_interval: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `EXPIRY_INITIAL_CAPACITY` - Initial map capacity (default: 0)
    /// - `EXPIRY_SWEEP_INTERVAL_MS` - Sweep interval in milliseconds (default: 1000)
    ///
    /// Unset variables fall back to the defaults; set but malformed ones are errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let initial_capacity =
            parse_var(&lookup, ENV_INITIAL_CAPACITY)?.unwrap_or(defaults.initial_capacity);
        let sweep_interval = parse_var::<u64, _>(&lookup, ENV_SWEEP_INTERVAL_MS)?
            .map(Duration::from_millis)
            .unwrap_or(defaults.sweep_interval);

        if sweep_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(Self {
            initial_capacity,
            sweep_interval,
        })
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            sweep_interval: Duration::from_secs(1),
        }
    }
}
