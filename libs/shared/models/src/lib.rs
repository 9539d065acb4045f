pub mod booking;
pub mod schedule;

pub use booking::*;
pub use schedule::*;
