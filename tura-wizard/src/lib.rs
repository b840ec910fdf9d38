pub mod autocomplete;
pub mod client;
pub mod controller;
pub mod customize;
pub mod draft;
pub mod submit;

pub use autocomplete::{CityAutocomplete, CityDirectory};
pub use client::HttpWizardBackend;
pub use controller::{QuoteWizard, WizardError, WizardStep};
pub use customize::{CatalogProvider, CustomizeSelection};
pub use draft::QuoteDraft;
pub use submit::ItineraryGenerator;

/// Error type the wizard's provider traits return; the controller wraps it
/// into a surfaced message.
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;
