pub mod runner;
pub mod top;

pub use runner::BoardRunner;
pub use runner::PanelInput;
pub use top::Board;
pub use top::ResetFanIn;
