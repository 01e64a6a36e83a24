use crate::clock::ClockDivider;
use crate::config::{ClockConfig, ConfigError};
use crate::display::{GlyphDecoder, Tdm4, TdmOutput};
use crate::elevator::FloorController;
use crate::shared::structs::DIGIT_ENABLE_ACTIVE_LOW;
use crate::shared::{
    floor_channels, BoardOutputs, FloorValue, ResetTriggers, Step, SwitchBank, HEARTBEAT_LED,
};
use log::debug;

/// Logical resets after combining the physical triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResetFanIn {
    /// Gates both clock dividers.
    pub clock: bool,
    /// Gates the elevator FSM.
    pub fsm: bool,
    /// Gates the display multiplexer.
    pub scan: bool,
}

impl From<&ResetTriggers> for ResetFanIn {
    fn from(triggers: &ResetTriggers) -> Self {
        ResetFanIn {
            clock: triggers.master || triggers.clock,
            fsm: triggers.fsm || triggers.master,
            scan: triggers.scan || triggers.master,
        }
    }
}

/**
 * Top level of the board.
 *
 * Splits the reference clock into the FSM and scan domains, feeds the floor
 * into the display multiplexer and drives the output pins. Within one
 * reference tick every component works from the floor registered on the
 * previous tick.
 *
 * # Fields
 * - `fsm_clock`:   Divider producing the FSM clock. Its level is the heartbeat indicator.
 * - `scan_clock`:  Divider producing the display scan clock.
 * - `fsm`:         Source of the floor value. The only writer of it.
 * - `tdm`:         Display multiplexer.
 * - `decoder`:     Glyph table for the segment lines.
 * - `display`:     Multiplexer output latched on the last scan tick.
 */
pub struct Board<F: FloorController, D: GlyphDecoder> {
    fsm_clock: ClockDivider,
    scan_clock: ClockDivider,
    fsm: F,
    tdm: Tdm4,
    decoder: D,
    display: TdmOutput,
}

impl<F: FloorController, D: GlyphDecoder> Board<F, D> {
    pub fn new(config: &ClockConfig, fsm: F, decoder: D) -> Result<Board<F, D>, ConfigError> {
        let fsm_clock = ClockDivider::new("fsm", config.fsm_divisor()?)?;
        let scan_clock = ClockDivider::new("scan", config.scan_divisor()?)?;
        let tdm = Tdm4::new();
        let display = tdm.current(&floor_channels(fsm.floor()));

        for divider in [&fsm_clock, &scan_clock] {
            debug!(
                "{} clock: reference / {} (period {} ticks)",
                divider.domain(),
                divider.divisor(),
                2 * u64::from(divider.divisor())
            );
        }

        Ok(Board {
            fsm_clock,
            scan_clock,
            fsm,
            tdm,
            decoder,
            display,
        })
    }

    /// Advances the board by one reference tick.
    pub fn tick(&mut self, switches: &SwitchBank, triggers: &ResetTriggers) -> BoardOutputs {
        let resets = ResetFanIn::from(triggers);
        let channels = floor_channels(self.fsm.floor());

        let clock_step = if resets.clock {
            Step::Reset
        } else {
            Step::Advance(())
        };
        let fsm_clock = self.fsm_clock.step(clock_step);
        let scan_clock = self.scan_clock.step(clock_step);

        if resets.fsm {
            self.fsm.step(Step::Reset);
        } else if fsm_clock.rising {
            self.fsm.step(Step::Advance(switches.fsm_inputs()));
        }

        if resets.scan {
            self.tdm.step(Step::Reset);
            self.display = self.tdm.current(&channels);
        } else if scan_clock.rising {
            if let Some(out) = self.tdm.step(Step::Advance(channels)) {
                self.display = out;
            }
        }

        self.outputs()
    }

    /// Applies the asserted resets right away, between reference ticks.
    /// Domains whose reset is not asserted are left untouched.
    pub fn apply_reset(&mut self, triggers: &ResetTriggers) -> BoardOutputs {
        let resets = ResetFanIn::from(triggers);

        if resets.clock {
            self.fsm_clock.step(Step::Reset);
            self.scan_clock.step(Step::Reset);
        }
        if resets.fsm {
            self.fsm.step(Step::Reset);
        }
        if resets.scan {
            self.tdm.step(Step::Reset);
            self.display = self.tdm.current(&floor_channels(self.fsm.floor()));
        }

        self.outputs()
    }

    /// Pin levels as currently driven.
    pub fn outputs(&self) -> BoardOutputs {
        let indicators = if self.fsm_clock.level() {
            1 << HEARTBEAT_LED
        } else {
            0
        };

        let select = self.display.select.bits();
        let digit_enables = if DIGIT_ENABLE_ACTIVE_LOW {
            select
        } else {
            !select & 0x0F
        };

        BoardOutputs {
            indicators,
            segments: self.decoder.decode(self.display.value),
            digit_enables,
        }
    }

    pub fn floor(&self) -> FloorValue {
        self.fsm.floor()
    }

    pub fn display(&self) -> TdmOutput {
        self.display
    }

    pub fn fsm_clock(&self) -> &ClockDivider {
        &self.fsm_clock
    }

    pub fn scan_clock(&self) -> &ClockDivider {
        &self.scan_clock
    }

    pub fn tdm(&self) -> &Tdm4 {
        &self.tdm
    }
}
