use tura_shared::models::catalog::{CatalogItems, HotelCategory, TourType};

/// The trip parameters the customize step narrows the catalog by.
#[derive(Debug, Clone)]
pub struct TripFilter {
    /// Cities the customer will visit, trimmed and non-empty.
    pub cities: Vec<String>,
    pub hotel_category: HotelCategory,
    pub tour_type: TourType,
}

/// Narrow an organization's season catalog to what fits one trip: hotels in
/// the visited cities matching the chosen star category, tours in those
/// cities matching the chosen operation type.
///
/// Items outside the filter are dropped, not hidden; the selection step only
/// ever sees what it may lock.
pub fn filter_for_trip(catalog: CatalogItems, filter: &TripFilter) -> CatalogItems {
    let category_label = filter.hotel_category.label();

    let hotels = catalog
        .hotels
        .into_iter()
        .filter(|h| {
            filter.cities.iter().any(|c| c == &h.location) && h.category == category_label
        })
        .collect();

    let tours = catalog
        .tours
        .into_iter()
        .filter(|t| {
            filter.cities.iter().any(|c| c == &t.location) && t.tour_type == filter.tour_type
        })
        .collect();

    CatalogItems { hotels, tours }
}
