use crate::draft::QuoteDraft;
use crate::BackendError;
use async_trait::async_trait;

/// A lookup is only issued once the input reaches this length; shorter text
/// just clears the suggestion list.
pub const MIN_QUERY_LEN: usize = 2;

/// Destination directory backing city autocomplete.
#[async_trait]
pub trait CityDirectory: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<String>, BackendError>;
}

/// Suggestion state for the city inputs of the destinations step.
///
/// One suggestion list exists at a time, bound to the field index currently
/// being edited. There is no request cancellation: a response that lands
/// after the operator moved to another field is dropped, but two lookups for
/// the same field race last-write-wins. Accepted inconsistency, not a
/// guaranteed ordering.
#[derive(Debug, Default)]
pub struct CityAutocomplete {
    active_field: Option<usize>,
    suggestions: Vec<String>,
}

impl CityAutocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keystroke in city field `field`.
    pub async fn on_input(&mut self, field: usize, text: &str, directory: &dyn CityDirectory) {
        self.active_field = Some(field);

        if text.chars().count() < MIN_QUERY_LEN {
            self.suggestions.clear();
            return;
        }

        match directory.search(text).await {
            Ok(cities) => {
                // A response for a field the operator already left is stale.
                if self.active_field == Some(field) {
                    self.suggestions = cities;
                }
            }
            Err(e) => {
                tracing::warn!("City lookup failed: {}", e);
                self.suggestions.clear();
            }
        }
    }

    /// Focus left the field's container.
    pub fn on_blur(&mut self) {
        self.active_field = None;
        self.suggestions.clear();
    }

    /// Suggestions for one field; empty unless that field is the active one.
    pub fn suggestions_for(&self, field: usize) -> &[String] {
        if self.active_field == Some(field) {
            &self.suggestions
        } else {
            &[]
        }
    }

    /// Operator picked a suggestion: write it into the draft and close the
    /// list.
    pub fn select(&mut self, draft: &mut QuoteDraft, field: usize, city: &str) {
        draft.set_city(field, city);
        self.on_blur();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingDirectory {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CityDirectory for CountingDirectory {
        async fn search(&self, query: &str) -> Result<Vec<String>, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![format!("{}-city", query)])
        }
    }

    struct FailingDirectory;

    #[async_trait]
    impl CityDirectory for FailingDirectory {
        async fn search(&self, _query: &str) -> Result<Vec<String>, BackendError> {
            Err("directory unavailable".into())
        }
    }

    #[tokio::test]
    async fn short_input_is_gated_without_a_lookup() {
        let directory = CountingDirectory {
            calls: AtomicUsize::new(0),
        };
        let mut ac = CityAutocomplete::new();

        ac.on_input(0, "I", &directory).await;
        assert_eq!(directory.calls.load(Ordering::SeqCst), 0);
        assert!(ac.suggestions_for(0).is_empty());

        ac.on_input(0, "Is", &directory).await;
        assert_eq!(directory.calls.load(Ordering::SeqCst), 1);
        assert_eq!(ac.suggestions_for(0), ["Is-city"]);
    }

    #[tokio::test]
    async fn suggestions_are_scoped_to_the_active_field() {
        let directory = CountingDirectory {
            calls: AtomicUsize::new(0),
        };
        let mut ac = CityAutocomplete::new();

        ac.on_input(1, "Ista", &directory).await;
        assert!(ac.suggestions_for(0).is_empty());
        assert_eq!(ac.suggestions_for(1), ["Ista-city"]);
    }

    #[tokio::test]
    async fn blur_clears_the_list() {
        let directory = CountingDirectory {
            calls: AtomicUsize::new(0),
        };
        let mut ac = CityAutocomplete::new();

        ac.on_input(0, "Ista", &directory).await;
        ac.on_blur();
        assert!(ac.suggestions_for(0).is_empty());
    }

    #[tokio::test]
    async fn lookup_failure_clears_instead_of_erroring() {
        let mut ac = CityAutocomplete::new();
        ac.on_input(0, "Ista", &FailingDirectory).await;
        assert!(ac.suggestions_for(0).is_empty());
    }

    #[tokio::test]
    async fn select_writes_city_and_closes_list() {
        let directory = CountingDirectory {
            calls: AtomicUsize::new(0),
        };
        let mut ac = CityAutocomplete::new();
        let mut draft = QuoteDraft::default();

        ac.on_input(0, "Ista", &directory).await;
        ac.select(&mut draft, 0, "Istanbul");

        assert_eq!(draft.city_nights[0].city, "Istanbul");
        assert!(ac.suggestions_for(0).is_empty());
    }
}
