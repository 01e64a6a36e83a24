use crate::config::ConfigError;
use crate::shared::Step;

/**
 * Derives a slow clock from the reference tick stream.
 *
 * The output level toggles once every `divisor` reference ticks, so the
 * output period is `2 * divisor` reference periods. Every instance owns its
 * own counter; the FSM and scan domains each get one.
 *
 * # Fields
 * - `domain`:      Name of the clock domain, used in errors and logs.
 * - `divisor`:     Reference ticks between two output toggles. Never zero.
 * - `counter`:     Reference ticks seen since the last toggle, in `[0, divisor)`.
 * - `level`:       Current output level.
 */
#[derive(Debug, Clone)]
pub struct ClockDivider {
    domain: &'static str,
    divisor: u32,
    counter: u32,
    level: bool,
}

/// Divider output after one reference tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockOutput {
    pub level: bool,
    /// Set on the reference tick where the level goes from low to high.
    pub rising: bool,
}

impl ClockDivider {
    pub fn new(domain: &'static str, divisor: u32) -> Result<ClockDivider, ConfigError> {
        if divisor == 0 {
            return Err(ConfigError::InvalidDivisor { domain, value: 0 });
        }

        Ok(ClockDivider {
            domain,
            divisor,
            counter: 0,
            level: false,
        })
    }

    pub fn step(&mut self, step: Step<()>) -> ClockOutput {
        match step {
            // Output holds its last level through reset
            Step::Reset => {
                self.counter = 0;
                ClockOutput {
                    level: self.level,
                    rising: false,
                }
            }
            Step::Advance(()) => {
                if self.counter == self.divisor - 1 {
                    self.counter = 0;
                    self.level = !self.level;
                    ClockOutput {
                        level: self.level,
                        rising: self.level,
                    }
                } else {
                    self.counter += 1;
                    ClockOutput {
                        level: self.level,
                        rising: false,
                    }
                }
            }
        }
    }

    pub fn level(&self) -> bool {
        self.level
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    pub fn domain(&self) -> &'static str {
        self.domain
    }
}
