/*
 * Unit tests for the shared signal types
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_select_code_is_one_cold
 * - test_floor_channels_split
 * - test_switch_bank_ignores_unused_bits
 * - test_nibble_masks_input
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod structs_tests {
    use crate::shared::{floor_channels, Direction, Nibble, SelectCode, SwitchBank};

    #[test]
    fn test_select_code_is_one_cold() {
        // Purpose: Verify that every scan index maps to a code with exactly one low bit

        for index in 0..4 {
            // Act
            let code = SelectCode::for_index(index);

            // Assert
            assert_eq!(code.bits().count_ones(), 3);
            assert_eq!(code.bits() & 0xF0, 0);
            assert_eq!(code.active_index(), index);
        }
        assert_eq!(SelectCode::for_index(0).bits(), 0b1110);
        assert_eq!(SelectCode::for_index(3).bits(), 0b0111);
        assert_eq!(SelectCode::for_index(2).to_string(), "1011");
    }

    #[test]
    fn test_floor_channels_split() {
        // Purpose: Verify that the floor is split into high and low nibble with the unused digits zeroed

        // Act
        let channels = floor_channels(0x3A);

        // Assert
        assert_eq!(channels, [Nibble::new(0x3), Nibble::new(0xA), Nibble::ZERO, Nibble::ZERO]);
        assert_eq!(Nibble::high(0xF0).value(), 0xF);
        assert_eq!(Nibble::low(0xF0).value(), 0x0);
    }

    #[test]
    fn test_switch_bank_ignores_unused_bits() {
        // Purpose: Verify that only bit 0 (stop) and bit 1 (direction) are read

        // Arrange
        let quiet = SwitchBank(0xFFFC);
        let up_and_stop = SwitchBank(0x0003);

        // Assert
        assert!(!quiet.stop());
        assert_eq!(quiet.direction(), Direction::Down);
        assert!(up_and_stop.stop());
        assert_eq!(up_and_stop.direction(), Direction::Up);
    }

    #[test]
    fn test_nibble_masks_input() {
        assert_eq!(Nibble::new(0xAB).value(), 0xB);
        assert_eq!(Nibble::new(0xC).to_string(), "C");
    }
}
