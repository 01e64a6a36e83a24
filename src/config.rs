/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*             Constants               */
/***************************************/
pub const CONFIG_PATH: &str = "config.toml";

pub const DEFAULT_FSM_DIVISOR: u32 = 500;
pub const DEFAULT_SCAN_DIVISOR: u32 = 2;
pub const DEFAULT_N_FLOORS: u16 = 256;
pub const DEFAULT_REFERENCE_PERIOD_US: u64 = 1000;

/***************************************/
/*               Errors                */
/***************************************/
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {domain} clock divisor {value}: must be a positive 32-bit value")]
    InvalidDivisor { domain: &'static str, value: i64 },

    #[error("Invalid number of floors {0}: must be between 1 and 256")]
    InvalidFloors(u16),

    #[error("Initial floor {initial_floor} is outside 0..{n_floors}")]
    InvalidInitialFloor { initial_floor: u8, n_floors: u16 },

    #[error("Reference clock period must be non-zero")]
    InvalidPeriod,
}

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub elevator: ElevatorConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Divisors are read signed so that negative values reach validation
/// instead of failing as a type mismatch.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ClockConfig {
    pub fsm_divisor: i64,
    pub scan_divisor: i64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ElevatorConfig {
    pub n_floors: u16,
    #[serde(default)]
    pub initial_floor: u8,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub reference_period_us: u64,
    #[serde(default)]
    pub run_ticks: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            fsm_divisor: DEFAULT_FSM_DIVISOR as i64,
            scan_divisor: DEFAULT_SCAN_DIVISOR as i64,
        }
    }
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            n_floors: DEFAULT_N_FLOORS,
            initial_floor: 0,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            reference_period_us: DEFAULT_REFERENCE_PERIOD_US,
            run_ticks: 0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clock: ClockConfig::default(),
            elevator: ElevatorConfig::default(),
            runtime: RuntimeConfig::default(),
        }
    }
}

impl ClockConfig {
    pub fn fsm_divisor(&self) -> Result<u32, ConfigError> {
        checked_divisor("fsm", self.fsm_divisor)
    }

    pub fn scan_divisor(&self) -> Result<u32, ConfigError> {
        checked_divisor("scan", self.scan_divisor)
    }
}

impl Config {
    /// Rejects any configuration the board cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clock.fsm_divisor()?;
        self.clock.scan_divisor()?;

        let n_floors = self.elevator.n_floors;
        if n_floors == 0 || n_floors > 256 {
            return Err(ConfigError::InvalidFloors(n_floors));
        }
        if u16::from(self.elevator.initial_floor) >= n_floors {
            return Err(ConfigError::InvalidInitialFloor {
                initial_floor: self.elevator.initial_floor,
                n_floors,
            });
        }

        if self.runtime.reference_period_us == 0 {
            return Err(ConfigError::InvalidPeriod);
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(CONFIG_PATH)
}

pub fn load_config_from<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

/***************************************/
/*          Private helpers            */
/***************************************/
fn checked_divisor(domain: &'static str, value: i64) -> Result<u32, ConfigError> {
    match u32::try_from(value) {
        Ok(divisor) if divisor > 0 => Ok(divisor),
        _ => Err(ConfigError::InvalidDivisor { domain, value }),
    }
}
