/* 3rd party libraries */
use crossbeam_channel as cbc;
use env_logger::Env;
use log::info;
use std::thread::Builder;
use std::time::Duration;

/* Custom libraries */
use board::{Board, BoardRunner, PanelInput};
use display::{DisplaySampler, HexDecoder};
use elevator::ElevatorFSM;
use shared::structs::SWITCH_UP_DOWN;
use shared::{BoardOutputs, ResetTriggers, SwitchBank};

/* Modules */
mod board;
mod clock;
mod config;
mod display;
mod elevator;
mod shared;

/* Main */
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Load the configuration
    let config = unwrap_or_exit!(config::load_config(), "Failed to load configuration");
    info!(
        "Reference period {} us, FSM divisor {}, scan divisor {}",
        config.runtime.reference_period_us, config.clock.fsm_divisor, config.clock.scan_divisor
    );

    // Initialize channels
    let reference_rx = cbc::tick(Duration::from_micros(config.runtime.reference_period_us));
    let (panel_tx, panel_rx) = cbc::unbounded::<PanelInput>();
    let (outputs_tx, outputs_rx) = cbc::unbounded::<BoardOutputs>();
    let (_terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Build the board
    let elevator_fsm = ElevatorFSM::new(&config.elevator);
    let board = unwrap_or_exit!(
        Board::new(&config.clock, elevator_fsm, HexDecoder),
        "Invalid clock configuration"
    );
    let runner = BoardRunner::new(
        board,
        reference_rx,
        panel_rx,
        outputs_tx,
        terminate_rx,
        config.runtime.run_ticks,
    );

    let board_thread = Builder::new()
        .name("board".into())
        .spawn(move || runner.run());
    let board_thread = unwrap_or_exit!(board_thread, "Failed to start board thread");

    // Watch the display the way a person would and report what it shows
    let display_thread = Builder::new().name("display".into()).spawn(move || {
        let mut sampler = DisplaySampler::new(&HexDecoder);
        let mut shown = None;
        for outputs in outputs_rx.iter() {
            if sampler.sample(&outputs) && sampler.floor() != shown {
                shown = sampler.floor();
                if let Some(floor) = shown {
                    info!("Display {} (floor {})", sampler, floor);
                }
            }
        }
    });
    let display_thread = unwrap_or_exit!(display_thread, "Failed to start display thread");

    // Power-up: pulse the master reset, then travel upwards
    let _ = panel_tx.send(PanelInput::Resets(ResetTriggers {
        master: true,
        ..Default::default()
    }));
    let _ = panel_tx.send(PanelInput::Resets(ResetTriggers::default()));
    let _ = panel_tx.send(PanelInput::Switches(SwitchBank(SWITCH_UP_DOWN)));

    if let Ok((board, ticks)) = board_thread.join() {
        info!("Ran {} reference ticks, final floor {}", ticks, board.floor());
    }
    let _ = display_thread.join();
}
