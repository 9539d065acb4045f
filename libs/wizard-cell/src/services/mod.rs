pub mod controller;

pub use controller::{BookingWizard, DEFAULT_CLOSE_DELAY};
