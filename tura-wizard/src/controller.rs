use crate::autocomplete::CityAutocomplete;
use crate::customize::{CatalogProvider, CustomizeSelection};
use crate::draft::QuoteDraft;
use crate::submit::{self, ItineraryGenerator};
use tura_catalog::{filter_for_trip, TripFilter};
use tura_core::session::SessionContext;
use tura_shared::models::catalog::CatalogItems;
use tura_shared::models::quote::ItineraryRef;

/// The wizard's five states. Customize is visited only when the operator
/// opts into it on the preferences step; Generating is terminal on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Destinations,
    Preferences,
    Customize,
    CustomerInfo,
    Generating,
}

impl WizardStep {
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Destinations => "DESTINATIONS",
            WizardStep::Preferences => "PREFERENCES",
            WizardStep::Customize => "CUSTOMIZE",
            WizardStep::CustomerInfo => "CUSTOMER_INFO",
            WizardStep::Generating => "GENERATING",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Please add at least one destination and select a start date")]
    MissingDestinations,

    #[error("Please provide customer name and email address")]
    MissingContact,

    #[error("Invalid step transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("A generation request is already in flight")]
    AlreadyGenerating,

    #[error("{0}")]
    Generation(String),
}

/// Controller for the quote wizard.
///
/// Holds the draft, the branch decision (customization opted in or not) and
/// the customize-step catalog/selection. All transitions run through
/// [`QuoteWizard::next`], [`QuoteWizard::back`] and [`QuoteWizard::generate`];
/// a failed validation leaves the step unchanged and surfaces the error.
pub struct QuoteWizard {
    session: SessionContext,
    season: String,
    step: WizardStep,
    wants_customization: bool,
    draft: QuoteDraft,
    autocomplete: CityAutocomplete,
    options: CatalogItems,
    selection: CustomizeSelection,
}

impl QuoteWizard {
    pub fn new(session: SessionContext, season: impl Into<String>) -> Self {
        Self {
            session,
            season: season.into(),
            step: WizardStep::Destinations,
            wants_customization: false,
            draft: QuoteDraft::default(),
            autocomplete: CityAutocomplete::new(),
            options: CatalogItems::default(),
            selection: CustomizeSelection::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &QuoteDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut QuoteDraft {
        &mut self.draft
    }

    pub fn autocomplete(&mut self) -> &mut CityAutocomplete {
        &mut self.autocomplete
    }

    pub fn set_customization(&mut self, wanted: bool) {
        self.wants_customization = wanted;
    }

    pub fn wants_customization(&self) -> bool {
        self.wants_customization
    }

    /// Catalog narrowed to the trip, available once Customize was entered.
    pub fn options(&self) -> &CatalogItems {
        &self.options
    }

    pub fn selection(&self) -> &CustomizeSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut CustomizeSelection {
        &mut self.selection
    }

    /// Forward transition. Entering Customize fetches the organization's
    /// season catalog; a fetch failure still advances with an empty option
    /// list since customization is advisory.
    pub async fn next(
        &mut self,
        catalog: &dyn CatalogProvider,
    ) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::Destinations => {
                if !self.draft.has_destinations() {
                    return Err(WizardError::MissingDestinations);
                }
                self.step = WizardStep::Preferences;
            }
            WizardStep::Preferences => {
                if self.wants_customization {
                    self.load_options(catalog).await;
                    self.step = WizardStep::Customize;
                } else {
                    self.step = WizardStep::CustomerInfo;
                }
            }
            WizardStep::Customize => {
                self.step = WizardStep::CustomerInfo;
            }
            WizardStep::CustomerInfo => {
                // Leaving CustomerInfo submits; use generate().
                return Err(WizardError::InvalidTransition {
                    from: WizardStep::CustomerInfo.label(),
                    to: WizardStep::Generating.label(),
                });
            }
            WizardStep::Generating => return Err(WizardError::AlreadyGenerating),
        }
        Ok(self.step)
    }

    /// Backward transition. The path back from CustomerInfo depends on the
    /// branch taken, not on the linear predecessor.
    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Destinations => WizardStep::Destinations,
            WizardStep::Preferences => WizardStep::Destinations,
            WizardStep::Customize => WizardStep::Preferences,
            WizardStep::CustomerInfo => {
                if self.wants_customization {
                    WizardStep::Customize
                } else {
                    WizardStep::Preferences
                }
            }
            // Locked while the generation request is in flight.
            WizardStep::Generating => WizardStep::Generating,
        };
        self.step
    }

    /// Submit from CustomerInfo: validates contact fields, locks the wizard
    /// into Generating and issues the one generation request. Any failure,
    /// including a success response without an itinerary identifier, returns
    /// the wizard to CustomerInfo with a surfaced message.
    pub async fn generate(
        &mut self,
        generator: &dyn ItineraryGenerator,
    ) -> Result<ItineraryRef, WizardError> {
        match self.step {
            WizardStep::CustomerInfo => {}
            WizardStep::Generating => return Err(WizardError::AlreadyGenerating),
            other => {
                return Err(WizardError::InvalidTransition {
                    from: other.label(),
                    to: WizardStep::Generating.label(),
                })
            }
        }

        if !self.draft.has_contact() {
            return Err(WizardError::MissingContact);
        }

        let request = submit::build_request(
            &self.session,
            &self.draft,
            self.wants_customization,
            &self.selection,
        )?;

        self.step = WizardStep::Generating;

        let response = match generator
            .generate(self.session.organization_id, &request)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                self.step = WizardStep::CustomerInfo;
                return Err(WizardError::Generation(e.to_string()));
            }
        };

        if let Some(message) = response.error {
            self.step = WizardStep::CustomerInfo;
            return Err(WizardError::Generation(message));
        }

        match response.itinerary_ref() {
            Some(itinerary) => Ok(itinerary),
            None => {
                self.step = WizardStep::CustomerInfo;
                Err(WizardError::Generation(
                    "No itinerary ID returned".to_string(),
                ))
            }
        }
    }

    async fn load_options(&mut self, catalog: &dyn CatalogProvider) {
        let filter = TripFilter {
            cities: self
                .draft
                .valid_cities()
                .into_iter()
                .map(|cn| cn.city.trim().to_string())
                .collect(),
            hotel_category: self.draft.hotel_category,
            tour_type: self.draft.tour_type,
        };

        match catalog
            .items(self.session.organization_id, &self.season)
            .await
        {
            Ok(items) => {
                self.options = filter_for_trip(items, &filter);
            }
            Err(e) => {
                tracing::warn!("Catalog fetch failed, customize continues empty: {}", e);
                self.options = CatalogItems::default();
            }
        }
    }
}
