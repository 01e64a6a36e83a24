/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*         Board constants             */
/***************************************/
// Number of physical digits on the display. Fixed by the board.
pub const DISPLAY_CHANNELS: usize = 4;

// Indicator driven by the FSM clock. All other indicators are held low.
pub const HEARTBEAT_LED: u8 = 15;

// Segment lines and digit enables are both active-low on the target display.
pub const SEGMENT_ACTIVE_LOW: bool = true;
pub const DIGIT_ENABLE_ACTIVE_LOW: bool = true;

// Switch bank layout
pub const SWITCH_STOP: u16 = 1 << 0;
pub const SWITCH_UP_DOWN: u16 = 1 << 1;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Update applied to a stateful component on one tick of its clock.
///
/// `Reset` takes priority over everything else: a component receiving it
/// returns to its initial state without looking at any other input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T> {
    Reset,
    Advance(T),
}

/// Current floor as produced by the elevator FSM.
pub type FloorValue = u8;

/// A 4-bit value. Anything wider is masked on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Nibble(u8);

impl Nibble {
    pub const ZERO: Nibble = Nibble(0);

    pub fn new(value: u8) -> Nibble {
        Nibble(value & 0x0F)
    }

    /// Bits 7-4 of the floor.
    pub fn high(floor: FloorValue) -> Nibble {
        Nibble(floor >> 4)
    }

    /// Bits 3-0 of the floor.
    pub fn low(floor: FloorValue) -> Nibble {
        Nibble(floor & 0x0F)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

/// Display channels in scan order `{D3, D2, D1, D0}`.
pub type ChannelSet = [Nibble; DISPLAY_CHANNELS];

/// Splits a floor across the display channels. Digits 1 and 0 are unused
/// and stay at zero.
pub fn floor_channels(floor: FloorValue) -> ChannelSet {
    [Nibble::high(floor), Nibble::low(floor), Nibble::ZERO, Nibble::ZERO]
}

/// One-cold digit select code. Exactly one of the four low bits is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectCode(u8);

impl SelectCode {
    pub fn for_index(index: usize) -> SelectCode {
        SelectCode(!(1u8 << (index % DISPLAY_CHANNELS)) & 0x0F)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Position of the asserted (low) bit.
    pub fn active_index(self) -> usize {
        (!self.0 & 0x0F).trailing_zeros() as usize
    }
}

impl fmt::Display for SelectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Inputs the elevator FSM consumes on each of its clock ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsmInputs {
    pub stop: bool,
    pub direction: Direction,
}

/// The 16-bit switch bank. Only the stop and direction switches are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchBank(pub u16);

impl SwitchBank {
    pub fn stop(&self) -> bool {
        self.0 & SWITCH_STOP != 0
    }

    pub fn direction(&self) -> Direction {
        if self.0 & SWITCH_UP_DOWN != 0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn fsm_inputs(&self) -> FsmInputs {
        FsmInputs {
            stop: self.stop(),
            direction: self.direction(),
        }
    }
}

/// Physical reset buttons. Each is active-high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResetTriggers {
    pub master: bool,
    pub clock: bool,
    pub fsm: bool,
    pub scan: bool,
}

impl ResetTriggers {
    pub fn any(&self) -> bool {
        self.master || self.clock || self.fsm || self.scan
    }
}

/// Everything the board drives, bit-for-bit as seen on the pins.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOutputs {
    pub indicators: u16,
    pub segments: u8,
    pub digit_enables: u8,
}
