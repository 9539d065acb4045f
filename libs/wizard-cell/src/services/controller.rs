// libs/wizard-cell/src/services/controller.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use availability_cell::AvailabilityService;
use booking_cell::models::GuestDetailsRequest;
use booking_cell::services::ConfirmationService;
use shared_models::{BookingDraft, BookingRecord, ContactDetails, ScheduleSelection};
use shared_storage::{BookingRepository, LocalStore};

use crate::models::{Notifier, TracingNotifier, WizardError, WizardStep};

/// How long the success screen stays up before the wizard navigates away.
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(1500);

/// Linear three-step booking wizard. Steps only ever move one position at a
/// time; closing resets to step 1 and clears the accumulated draft.
pub struct BookingWizard {
    step: WizardStep,
    draft: BookingDraft,
    repository: BookingRepository,
    confirmation: ConfirmationService,
    notifier: Arc<dyn Notifier>,
    on_close: Arc<dyn Fn() + Send + Sync>,
    close_delay: Duration,
    open: Arc<AtomicBool>,
}

impl BookingWizard {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self {
            step: WizardStep::DateTime,
            draft: BookingDraft::default(),
            repository: BookingRepository::new(Arc::clone(&store)),
            confirmation: ConfirmationService::new(store),
            notifier: Arc::new(TracingNotifier),
            on_close: Arc::new(|| {}),
            close_delay: DEFAULT_CLOSE_DELAY,
            open: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Navigate-away callback, invoked once per close.
    pub fn with_on_close(mut self, on_close: Arc<dyn Fn() + Send + Sync>) -> Self {
        self.on_close = on_close;
        self
    }

    pub fn with_close_delay(mut self, close_delay: Duration) -> Self {
        self.close_delay = close_delay;
        self
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    pub fn step_number(&self) -> u8 {
        self.step.number()
    }

    pub fn progress_percent(&self) -> u8 {
        self.step.progress_percent()
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Activate step 1: load the availability snapshot and re-apply any
    /// selection carried in the draft, so a date chosen before navigating
    /// away comes back pre-selected.
    pub async fn date_time_step(&self) -> Result<AvailabilityService, WizardError> {
        let mut service = AvailabilityService::load(&self.repository).await?;
        if let Some(selection) = self.draft.schedule() {
            service.restore_selection(&selection);
        }
        Ok(service)
    }

    /// The step-2 form, pre-filled from the accumulated draft.
    pub fn details_prefill(&self) -> GuestDetailsRequest {
        GuestDetailsRequest::from_draft(&self.draft)
    }

    pub fn complete_date_time(&mut self, selection: ScheduleSelection) -> Result<(), WizardError> {
        if !matches!(self.step, WizardStep::DateTime) {
            return Err(self.invalid("complete date/time"));
        }

        debug!(date = %selection.date, time = %selection.time, "Date/time step completed");
        self.draft.apply_schedule(&selection);
        self.step = WizardStep::Details { schedule: selection };
        Ok(())
    }

    pub fn complete_details(&mut self, details: ContactDetails) -> Result<(), WizardError> {
        match std::mem::replace(&mut self.step, WizardStep::DateTime) {
            WizardStep::Details { schedule } => {
                debug!(customer = %details.customer_name, "Details step completed");
                self.draft.apply_details(&details);
                self.step = WizardStep::Confirmation { schedule, details };
                Ok(())
            }
            other => {
                self.step = other;
                Err(self.invalid("complete details"))
            }
        }
    }

    /// Move one step back. The draft keeps everything already entered.
    pub fn back(&mut self) -> Result<(), WizardError> {
        match std::mem::replace(&mut self.step, WizardStep::DateTime) {
            WizardStep::DateTime => Err(self.invalid("back")),
            WizardStep::Details { .. } => Ok(()),
            WizardStep::Confirmation { schedule, .. } => {
                self.step = WizardStep::Details { schedule };
                Ok(())
            }
        }
    }

    /// Human-formatted summary for the confirmation screen.
    pub fn summary(&self) -> Result<booking_cell::models::BookingSummary, WizardError> {
        match &self.step {
            WizardStep::Confirmation { schedule, details } => {
                Ok(self.confirmation.summary(schedule, details))
            }
            _ => Err(self.invalid("summary")),
        }
    }

    /// Persist the booking, signal the outcome, and schedule the delayed
    /// close. On storage failure the wizard stays on the confirmation step
    /// so the user can retry.
    pub async fn confirm(&mut self) -> Result<BookingRecord, WizardError> {
        let (schedule, details) = match &self.step {
            WizardStep::Confirmation { schedule, details } => (schedule.clone(), details.clone()),
            _ => return Err(self.invalid("confirm")),
        };

        match self.confirmation.confirm(&schedule, &details).await {
            Ok(record) => {
                self.notifier
                    .success("Booking confirmed! See you on the field.");
                self.schedule_close();
                Ok(record)
            }
            Err(e) => {
                self.notifier
                    .failure("Could not save your booking. Please try again.");
                Err(e.into())
            }
        }
    }

    /// Close now: reset to step 1, clear the draft, and fire the
    /// navigate-away callback once.
    pub fn close(&mut self) {
        if self.open.swap(false, Ordering::SeqCst) {
            info!(step = self.step.number(), "Wizard closed");
            (self.on_close)();
        }
        self.reset();
    }

    /// Bring a closed wizard back to its initial state for a new booking.
    pub fn reopen(&mut self) {
        self.reset();
        // Fresh flag so a timer left over from the previous session cannot
        // close the new one.
        self.open = Arc::new(AtomicBool::new(true));
    }

    fn reset(&mut self) {
        self.step = WizardStep::DateTime;
        self.draft = BookingDraft::default();
    }

    /// Fire the navigate-away callback after the fixed delay. A no-op if
    /// the wizard was already closed by then.
    fn schedule_close(&self) {
        let open = Arc::clone(&self.open);
        let on_close = Arc::clone(&self.on_close);
        let close_delay = self.close_delay;

        tokio::spawn(async move {
            tokio::time::sleep(close_delay).await;
            if open.swap(false, Ordering::SeqCst) {
                on_close();
            }
        });
    }

    fn invalid(&self, action: &'static str) -> WizardError {
        WizardError::InvalidTransition {
            step: self.step.number(),
            action,
        }
    }
}
