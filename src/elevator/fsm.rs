use crate::config::ElevatorConfig;
use crate::shared::{Direction, FloorValue, FsmInputs, Step};
use log::debug;

/// Anything that can drive the floor shown on the display.
///
/// The board only relies on this contract: reset returns to a fixed initial
/// floor, `stop` holds the floor, and a single step never moves more than one
/// floor.
pub trait FloorController {
    fn step(&mut self, step: Step<FsmInputs>) -> FloorValue;
    fn floor(&self) -> FloorValue;
}

/**
 * Moves the car one floor per FSM clock tick.
 *
 * The car travels in the direction given by the direction switch until it
 * reaches the top or bottom floor, where it waits. The stop switch holds it
 * in place.
 *
 * # Fields
 * - `floor`:           Current floor.
 * - `initial_floor`:   Floor the car returns to on reset.
 * - `top_floor`:       Highest reachable floor (`n_floors - 1`).
 */
#[derive(Debug, Clone)]
pub struct ElevatorFSM {
    floor: FloorValue,
    initial_floor: FloorValue,
    top_floor: FloorValue,
}

impl ElevatorFSM {
    pub fn new(config: &ElevatorConfig) -> ElevatorFSM {
        // n_floors is validated to 1..=256 when the config is loaded
        let top_floor = config.n_floors.clamp(1, 256) - 1;

        ElevatorFSM {
            floor: config.initial_floor,
            initial_floor: config.initial_floor,
            top_floor: top_floor as FloorValue,
        }
    }

    fn next_floor(&self, inputs: FsmInputs) -> FloorValue {
        if inputs.stop {
            return self.floor;
        }

        match inputs.direction {
            Direction::Up if self.floor < self.top_floor => self.floor + 1,
            Direction::Down if self.floor > 0 => self.floor - 1,
            _ => self.floor,
        }
    }
}

impl FloorController for ElevatorFSM {
    fn step(&mut self, step: Step<FsmInputs>) -> FloorValue {
        match step {
            Step::Reset => {
                self.floor = self.initial_floor;
            }
            Step::Advance(inputs) => {
                let next = self.next_floor(inputs);
                if next != self.floor {
                    debug!("Floor {} -> {} ({:?})", self.floor, next, inputs.direction);
                    self.floor = next;
                }
            }
        }
        self.floor
    }

    fn floor(&self) -> FloorValue {
        self.floor
    }
}
