use crate::shared::structs::SEGMENT_ACTIVE_LOW;
use crate::shared::Nibble;

/// Maps a nibble to a 7-bit segment pattern. Must be total and deterministic.
pub trait GlyphDecoder {
    fn decode(&self, nibble: Nibble) -> u8;
}

// Lit segments per hex digit, bit order gfedcba (bit 0 = segment a)
const HEX_GLYPHS: [u8; 16] = [
    0x3F, 0x06, 0x5B, 0x4F, // 0 1 2 3
    0x66, 0x6D, 0x7D, 0x07, // 4 5 6 7
    0x7F, 0x6F, 0x77, 0x7C, // 8 9 A b
    0x39, 0x5E, 0x79, 0x71, // C d E F
];

const SEGMENT_MASK: u8 = 0x7F;

/// Hexadecimal glyphs 0-F for a common-anode display.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexDecoder;

impl GlyphDecoder for HexDecoder {
    fn decode(&self, nibble: Nibble) -> u8 {
        let lit = HEX_GLYPHS[nibble.value() as usize];
        if SEGMENT_ACTIVE_LOW {
            !lit & SEGMENT_MASK
        } else {
            lit
        }
    }
}
