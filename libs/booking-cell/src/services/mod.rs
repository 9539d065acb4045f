pub mod confirmation;
pub mod details;

pub use confirmation::ConfirmationService;
pub use details::DetailsForm;
