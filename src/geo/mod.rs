//! Locality ranking for marketplace listings.
//!
//! Free functions here run against the built-in tables; use [`Gazetteer`]
//! directly to classify against custom ones.

pub mod classifier;
pub mod data;
pub mod gazetteer;
pub mod normalize;
pub mod types;

pub use data::Country;
pub use gazetteer::Gazetteer;
pub use normalize::{normalize, same_place};
pub use types::{
    Badge, Listing, Located, LocationPriority, ParsedLocation, Priority, Ranked, UserLocale,
    NEARBY_LABEL, NEIGHBOR_SUFFIX,
};

pub fn canonicalize(country: &str) -> String {
    Gazetteer::builtin().canonicalize(country)
}

pub fn country_for_city(city: &str) -> Option<&'static str> {
    Gazetteer::builtin().country_for_city(city)
}

pub fn parse_location(raw: &str) -> ParsedLocation {
    Gazetteer::builtin().parse_location(raw)
}

pub fn classify(
    listing_location: &str,
    user_city: Option<&str>,
    user_country: Option<&str>,
) -> LocationPriority {
    Gazetteer::builtin().classify(listing_location, user_city, user_country)
}

pub fn sort_by_location<T: Located>(
    listings: Vec<T>,
    user_city: Option<&str>,
    user_country: Option<&str>,
) -> Vec<T> {
    Gazetteer::builtin().sort_by_location(listings, user_city, user_country)
}

pub fn filter_by_priority<T: Located>(
    listings: Vec<T>,
    user_city: Option<&str>,
    user_country: Option<&str>,
    max: Priority,
) -> Vec<T> {
    Gazetteer::builtin().filter_by_priority(listings, user_city, user_country, max)
}

/// Badge color token for a tier.
pub fn badge_for(priority: Priority) -> &'static str {
    priority.badge().as_str()
}
