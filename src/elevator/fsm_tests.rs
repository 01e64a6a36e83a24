/*
 * Unit tests for the elevator FSM
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_fsm_init
 * - test_fsm_moves_one_floor_per_tick
 * - test_fsm_stop_holds_floor
 * - test_fsm_saturates_at_ends
 * - test_fsm_reset_overrides_inputs
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod fsm_tests {
    use crate::config::ElevatorConfig;
    use crate::elevator::{ElevatorFSM, FloorController};
    use crate::shared::Direction::{Down, Up};
    use crate::shared::{FsmInputs, Step};

    fn setup_fsm(n_floors: u16, initial_floor: u8) -> ElevatorFSM {
        // Default configuration
        let config = ElevatorConfig {
            n_floors,
            initial_floor,
        };
        ElevatorFSM::new(&config)
    }

    const GO_UP: Step<FsmInputs> = Step::Advance(FsmInputs { stop: false, direction: Up });
    const GO_DOWN: Step<FsmInputs> = Step::Advance(FsmInputs { stop: false, direction: Down });

    #[test]
    fn test_fsm_init() {
        // Purpose: Verify that the FSM starts at the configured initial floor

        // Arrange
        let fsm = setup_fsm(16, 5);

        // Assert
        assert_eq!(fsm.floor(), 5);
    }

    #[test]
    fn test_fsm_moves_one_floor_per_tick() {
        // Purpose: Verify that consecutive floors never differ by more than one

        // Arrange
        let mut fsm = setup_fsm(256, 0);
        let mut last = fsm.floor();

        // Act & Assert
        for tick in 0..600 {
            let step = if (tick / 100) % 2 == 0 { GO_UP } else { GO_DOWN };
            let floor = fsm.step(step);
            assert!((floor as i16 - last as i16).abs() <= 1);
            last = floor;
        }
        assert_eq!(fsm.step(GO_UP), 1);
    }

    #[test]
    fn test_fsm_stop_holds_floor() {
        // Arrange
        let mut fsm = setup_fsm(8, 3);

        // Act
        let floors: Vec<u8> = (0..5)
            .map(|_| fsm.step(Step::Advance(FsmInputs { stop: true, direction: Up })))
            .collect();

        // Assert
        assert_eq!(floors, vec![3; 5]);
    }

    #[test]
    fn test_fsm_saturates_at_ends() {
        // Purpose: Verify that the car waits at the top and bottom floor

        // Arrange
        let mut fsm = setup_fsm(4, 2);

        // Act
        let up: Vec<u8> = (0..3).map(|_| fsm.step(GO_UP)).collect();
        let down: Vec<u8> = (0..5).map(|_| fsm.step(GO_DOWN)).collect();

        // Assert
        assert_eq!(up, vec![3, 3, 3]);
        assert_eq!(down, vec![2, 1, 0, 0, 0]);

        // The full 8-bit range is reachable
        let mut fsm = setup_fsm(256, 254);
        assert_eq!(fsm.step(GO_UP), 255);
        assert_eq!(fsm.step(GO_UP), 255);
    }

    #[test]
    fn test_fsm_reset_overrides_inputs() {
        // Arrange
        let mut fsm = setup_fsm(16, 1);
        fsm.step(GO_UP);
        fsm.step(GO_UP);
        assert_eq!(fsm.floor(), 3);

        // Act
        let floor = fsm.step(Step::Reset);

        // Assert
        assert_eq!(floor, 1);
        assert_eq!(fsm.step(Step::Reset), 1);
    }
}
