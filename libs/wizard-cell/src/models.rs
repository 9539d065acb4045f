// libs/wizard-cell/src/models.rs
use tracing::{error, info};

use availability_cell::AvailabilityError;
use booking_cell::models::ConfirmationError;
use shared_models::{ContactDetails, ScheduleSelection};

/// The three wizard steps. Each variant carries only what that step needs,
/// so a confirmation without a completed schedule is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardStep {
    DateTime,
    Details {
        schedule: ScheduleSelection,
    },
    Confirmation {
        schedule: ScheduleSelection,
        details: ContactDetails,
    },
}

impl WizardStep {
    pub const TOTAL: u8 = 3;

    pub fn number(&self) -> u8 {
        match self {
            WizardStep::DateTime => 1,
            WizardStep::Details { .. } => 2,
            WizardStep::Confirmation { .. } => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::DateTime => "Pick a date & time",
            WizardStep::Details { .. } => "Your details",
            WizardStep::Confirmation { .. } => "Confirm booking",
        }
    }

    pub fn progress_percent(&self) -> u8 {
        (self.number() as u16 * 100 / Self::TOTAL as u16) as u8
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum WizardError {
    #[error("'{action}' is not valid on step {step}")]
    InvalidTransition { step: u8, action: &'static str },

    #[error(transparent)]
    Availability(#[from] AvailabilityError),

    #[error(transparent)]
    Confirmation(#[from] ConfirmationError),
}

/// The toast mechanism is an opaque collaborator; the wizard only signals
/// through this seam.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// Default notifier: routes signals into the log stream.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!("Notification: {}", message);
    }

    fn failure(&self, message: &str) {
        error!("Notification: {}", message);
    }
}
