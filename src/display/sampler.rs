use crate::display::GlyphDecoder;
use crate::shared::structs::DIGIT_ENABLE_ACTIVE_LOW;
use crate::shared::{BoardOutputs, FloorValue, Nibble, DISPLAY_CHANNELS};
use std::collections::HashMap;
use std::fmt;

/**
 * Rebuilds the four displayed digits from the multiplexed pins, the way the
 * eye does with persistence of vision.
 *
 * Each sample latches the glyph on the one enabled digit. Samples where the
 * digit enables are not one-cold, or the segments are not a known glyph,
 * are ignored.
 *
 * # Fields
 * - `glyphs`:  Reverse glyph table, segment pattern to nibble.
 * - `digits`:  Last value seen on each digit position, `None` until sampled.
 */
#[derive(Debug, Clone)]
pub struct DisplaySampler {
    glyphs: HashMap<u8, Nibble>,
    digits: [Option<Nibble>; DISPLAY_CHANNELS],
}

impl DisplaySampler {
    pub fn new<D: GlyphDecoder>(decoder: &D) -> DisplaySampler {
        let glyphs = (0..16u8)
            .map(Nibble::new)
            .map(|nibble| (decoder.decode(nibble), nibble))
            .collect();

        DisplaySampler {
            glyphs,
            digits: [None; DISPLAY_CHANNELS],
        }
    }

    /// Returns true if a digit changed.
    pub fn sample(&mut self, outputs: &BoardOutputs) -> bool {
        let enabled = if DIGIT_ENABLE_ACTIVE_LOW {
            !outputs.digit_enables & 0x0F
        } else {
            outputs.digit_enables & 0x0F
        };
        if enabled.count_ones() != 1 {
            return false;
        }

        let position = enabled.trailing_zeros() as usize;
        let value = match self.glyphs.get(&outputs.segments) {
            Some(value) => *value,
            None => return false,
        };

        let changed = self.digits[position] != Some(value);
        self.digits[position] = Some(value);
        changed
    }

    pub fn digits(&self) -> [Option<Nibble>; DISPLAY_CHANNELS] {
        self.digits
    }

    /// Floor shown on the two leading digits, once both have been seen.
    pub fn floor(&self) -> Option<FloorValue> {
        match (self.digits[0], self.digits[1]) {
            (Some(high), Some(low)) => Some((high.value() << 4) | low.value()),
            _ => None,
        }
    }
}

impl fmt::Display for DisplaySampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits.iter() {
            match digit {
                Some(value) => write!(f, "{}", value)?,
                None => write!(f, "-")?,
            }
        }
        Ok(())
    }
}
