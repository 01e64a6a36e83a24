pub mod macros;
pub mod structs;
pub mod structs_tests;

pub use structs::floor_channels;
pub use structs::BoardOutputs;
pub use structs::ChannelSet;
pub use structs::Direction;
pub use structs::FloorValue;
pub use structs::FsmInputs;
pub use structs::Nibble;
pub use structs::ResetTriggers;
pub use structs::SelectCode;
pub use structs::Step;
pub use structs::SwitchBank;
pub use structs::{DISPLAY_CHANNELS, HEARTBEAT_LED};
