use crate::board::Board;
use crate::display::GlyphDecoder;
use crate::elevator::FloorController;
use crate::shared::{BoardOutputs, ResetTriggers, SwitchBank};
use crossbeam_channel as cbc;
use log::{debug, error, info, trace};
use std::time::Instant;

/// Changes on the board's physical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInput {
    Switches(SwitchBank),
    Resets(ResetTriggers),
}

/**
 * Runs a board in real time.
 *
 * Every message on the reference channel is one reference tick. Panel
 * inputs are levels and stay in effect until replaced; asserted resets are
 * applied as soon as they arrive, without waiting for the next tick.
 *
 * # Fields
 * - `board`:           The board being clocked.
 * - `reference_rx`:    Reference clock, usually `crossbeam_channel::tick`.
 * - `panel_rx`:        Switch and reset button changes.
 * - `outputs_tx`:      Receives the pin levels every time they change.
 * - `terminate_rx`:    Stops the runner.
 * - `run_ticks`:       Number of reference ticks to run, 0 for no limit.
 */
pub struct BoardRunner<F: FloorController, D: GlyphDecoder> {
    board: Board<F, D>,
    reference_rx: cbc::Receiver<Instant>,
    panel_rx: cbc::Receiver<PanelInput>,
    outputs_tx: cbc::Sender<BoardOutputs>,
    terminate_rx: cbc::Receiver<()>,
    run_ticks: u64,

    switches: SwitchBank,
    resets: ResetTriggers,
    ticks: u64,
    last_outputs: Option<BoardOutputs>,
}

impl<F: FloorController, D: GlyphDecoder> BoardRunner<F, D> {
    pub fn new(
        board: Board<F, D>,
        reference_rx: cbc::Receiver<Instant>,
        panel_rx: cbc::Receiver<PanelInput>,
        outputs_tx: cbc::Sender<BoardOutputs>,
        terminate_rx: cbc::Receiver<()>,
        run_ticks: u64,
    ) -> BoardRunner<F, D> {
        BoardRunner {
            board,
            reference_rx,
            panel_rx,
            outputs_tx,
            terminate_rx,
            run_ticks,
            switches: SwitchBank::default(),
            resets: ResetTriggers::default(),
            ticks: 0,
            last_outputs: None,
        }
    }

    /// Runs until terminated, the tick limit is reached or the reference
    /// clock goes away. Returns the board and the number of ticks run.
    pub fn run(mut self) -> (Board<F, D>, u64) {
        let outputs = self.board.outputs();
        self.publish(outputs);

        loop {
            cbc::select! {
                recv(self.reference_rx) -> tick => {
                    match tick {
                        Ok(_) => {
                            let outputs = self.board.tick(&self.switches, &self.resets);
                            self.ticks += 1;
                            self.publish(outputs);

                            if self.run_ticks > 0 && self.ticks >= self.run_ticks {
                                info!("Stopping after {} reference ticks", self.ticks);
                                break;
                            }
                        }
                        Err(e) => {
                            error!("Reference clock disconnected: {}", e);
                            break;
                        }
                    }
                }
                recv(self.panel_rx) -> input => {
                    match input {
                        Ok(input) => self.handle_input(input),
                        Err(_) => {
                            debug!("Panel disconnected, holding last inputs");
                            self.panel_rx = cbc::never();
                        }
                    }
                }
                recv(self.terminate_rx) -> _ => {
                    info!("Board terminated after {} reference ticks", self.ticks);
                    break;
                }
            }
        }

        (self.board, self.ticks)
    }

    fn handle_input(&mut self, input: PanelInput) {
        match input {
            PanelInput::Switches(switches) => {
                debug!("Switches: {:#06x}", switches.0);
                self.switches = switches;
            }
            PanelInput::Resets(resets) => {
                if resets.any() {
                    info!("Reset asserted: {:?}", resets);
                    let outputs = self.board.apply_reset(&resets);
                    self.publish(outputs);
                } else if self.resets.any() {
                    info!("Reset released");
                }
                self.resets = resets;
            }
        }
    }

    fn publish(&mut self, outputs: BoardOutputs) {
        if self.last_outputs == Some(outputs) {
            return;
        }
        self.last_outputs = Some(outputs);

        if log::log_enabled!(log::Level::Trace) {
            match serde_json::to_string(&outputs) {
                Ok(json) => trace!("{}", json),
                Err(e) => error!("Failed to serialize outputs: {}", e),
            }
        }
        let _ = self.outputs_tx.send(outputs);
    }
}
