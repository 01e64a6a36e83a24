use crate::shared::{ChannelSet, Nibble, SelectCode, Step, DISPLAY_CHANNELS};

/// Channel index selected after reset.
pub const START_INDEX: usize = 0;

/// One channel value together with the digit it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TdmOutput {
    pub select: SelectCode,
    pub value: Nibble,
}

/**
 * Four-channel time-division multiplexer.
 *
 * Presents one channel per scan tick, in the fixed order 0, 1, 2, 3, 0, ...
 * together with a one-cold select code for that channel. Sampling four
 * consecutive outputs yields every channel exactly once.
 *
 * # Fields
 * - `index`:   Channel presented on the next scan tick, always below `DISPLAY_CHANNELS`.
 */
#[derive(Debug, Clone)]
pub struct Tdm4 {
    index: usize,
}

impl Tdm4 {
    pub fn new() -> Tdm4 {
        Tdm4 { index: START_INDEX }
    }

    /// Emits the current channel and moves to the next one. Reset only
    /// rewinds the index and emits nothing.
    pub fn step(&mut self, step: Step<ChannelSet>) -> Option<TdmOutput> {
        match step {
            Step::Reset => {
                self.index = START_INDEX;
                None
            }
            Step::Advance(channels) => {
                let out = self.current(&channels);
                self.index = (self.index + 1) % DISPLAY_CHANNELS;
                Some(out)
            }
        }
    }

    /// What the next scan tick would emit, without advancing.
    pub fn current(&self, channels: &ChannelSet) -> TdmOutput {
        TdmOutput {
            select: SelectCode::for_index(self.index),
            value: channels[self.index],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for Tdm4 {
    fn default() -> Self {
        Tdm4::new()
    }
}
