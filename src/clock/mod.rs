pub mod divider;

pub use divider::ClockDivider;
pub use divider::ClockOutput;
