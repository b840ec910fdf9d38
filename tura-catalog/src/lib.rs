pub mod items;
pub mod season;

pub use items::{filter_for_trip, TripFilter};
pub use season::Season;
