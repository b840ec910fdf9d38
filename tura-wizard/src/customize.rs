use crate::BackendError;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};
use tura_shared::models::catalog::CatalogItems;
use tura_shared::models::quote::QuotePreferences;
use uuid::Uuid;

/// Source of the customize-step catalog, scoped to one organization and
/// season.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn items(
        &self,
        organization_id: Uuid,
        season: &str,
    ) -> Result<CatalogItems, BackendError>;
}

/// The operator's hotel/tour picks on the customize step.
///
/// Hotels use radio semantics (at most one per city, a new pick replaces the
/// old one); tours use checkbox semantics (any number, keyed by id, no
/// per-city exclusivity).
#[derive(Debug, Clone, Default)]
pub struct CustomizeSelection {
    hotels: BTreeMap<String, i64>,
    tours: BTreeSet<i64>,
}

impl CustomizeSelection {
    pub fn lock_hotel(&mut self, city: impl Into<String>, hotel_id: i64) {
        self.hotels.insert(city.into(), hotel_id);
    }

    pub fn unlock_hotel(&mut self, city: &str) {
        self.hotels.remove(city);
    }

    pub fn locked_hotel(&self, city: &str) -> Option<i64> {
        self.hotels.get(city).copied()
    }

    pub fn toggle_tour(&mut self, tour_id: i64) {
        if !self.tours.insert(tour_id) {
            self.tours.remove(&tour_id);
        }
    }

    pub fn is_tour_locked(&self, tour_id: i64) -> bool {
        self.tours.contains(&tour_id)
    }

    pub fn has_selection(&self) -> bool {
        !self.hotels.is_empty() || !self.tours.is_empty()
    }

    /// Locked choices as a generation-request block, or None when nothing
    /// was selected (the generation service then chooses freely).
    pub fn build_preferences(&self, locked_by_user_id: Uuid) -> Option<QuotePreferences> {
        if !self.has_selection() {
            return None;
        }
        Some(QuotePreferences {
            locked_hotels: self.hotels.clone(),
            locked_tours: self.tours.iter().copied().collect(),
            customization_notes: "Operator selected specific hotels/tours".to_string(),
            locked_at: Utc::now(),
            locked_by_user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotel_pick_replaces_previous_pick_for_city() {
        let mut selection = CustomizeSelection::default();
        selection.lock_hotel("Istanbul", 1);
        selection.lock_hotel("Istanbul", 2);
        assert_eq!(selection.locked_hotel("Istanbul"), Some(2));
    }

    #[test]
    fn tour_toggle_is_a_checkbox() {
        let mut selection = CustomizeSelection::default();
        selection.toggle_tour(7);
        selection.toggle_tour(9);
        assert!(selection.is_tour_locked(7));
        selection.toggle_tour(7);
        assert!(!selection.is_tour_locked(7));
        assert!(selection.is_tour_locked(9));
    }

    #[test]
    fn empty_selection_builds_no_preferences() {
        let selection = CustomizeSelection::default();
        assert!(selection.build_preferences(Uuid::new_v4()).is_none());
    }

    #[test]
    fn preferences_carry_locks_and_user() {
        let user = Uuid::new_v4();
        let mut selection = CustomizeSelection::default();
        selection.lock_hotel("Istanbul", 3);
        selection.toggle_tour(11);

        let prefs = selection.build_preferences(user).unwrap();
        assert_eq!(prefs.locked_hotels.get("Istanbul"), Some(&3));
        assert_eq!(prefs.locked_tours, vec![11]);
        assert_eq!(prefs.locked_by_user_id, user);
    }
}
