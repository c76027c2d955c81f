//! Core types for listing locality.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label shown on listings in the viewer's own city.
pub const NEARBY_LABEL: &str = "À proximité";

/// Suffix appended to the country name for listings across a border.
pub const NEIGHBOR_SUFFIX: &str = "(pays voisin)";

/// How relevant a listing's location is to the viewer.
///
/// Variants are declared from most to least relevant, so the derived
/// ordering sorts the closest listings first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    SameCity,
    SameCountry,
    NeighboringCountry,
    Other,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::SameCity,
        Priority::SameCountry,
        Priority::NeighboringCountry,
        Priority::Other,
    ];

    /// Sort rank: 0 for same city through 3 for everything else.
    pub fn rank(self) -> u8 {
        match self {
            Self::SameCity => 0,
            Self::SameCountry => 1,
            Self::NeighboringCountry => 2,
            Self::Other => 3,
        }
    }

    /// `true` when this tier is `max` or closer.
    pub fn is_within(self, max: Priority) -> bool {
        self.rank() <= max.rank()
    }

    pub fn badge(self) -> Badge {
        match self {
            Self::SameCity => Badge::Green,
            Self::SameCountry => Badge::Blue,
            Self::NeighboringCountry => Badge::Orange,
            Self::Other => Badge::Gray,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SameCity => "same-city",
            Self::SameCountry => "same-country",
            Self::NeighboringCountry => "neighboring-country",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .ok_or_else(|| {
                format!(
                    "Unknown priority '{}'. Use same-city, same-country, neighboring-country or other.",
                    s
                )
            })
    }
}

/// Badge color token for a priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Green,
    Blue,
    Orange,
    Gray,
}

impl Badge {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-effort split of a listing location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedLocation {
    pub city: String,
    /// Canonical country name, or empty when none could be inferred.
    pub country: String,
}

/// Classification of one listing for one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationPriority {
    pub city: String,
    pub country: String,
    pub priority: Priority,
    /// Display label; absent only when nothing at all could be shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
}

impl LocationPriority {
    pub fn badge(&self) -> Badge {
        self.priority.badge()
    }
}

/// The viewer's own location, from their profile or device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLocale {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl UserLocale {
    pub fn new(city: Option<&str>, country: Option<&str>) -> Self {
        Self {
            city: non_blank(city),
            country: non_blank(country),
        }
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.country.is_none()
    }

    /// Fill fields missing here from `fallback`.
    pub fn or(self, fallback: UserLocale) -> UserLocale {
        UserLocale {
            city: self.city.or(fallback.city),
            country: self.country.or(fallback.country),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Anything that carries a seller-entered location string.
pub trait Located {
    fn location(&self) -> &str;
}

impl Located for str {
    fn location(&self) -> &str {
        self
    }
}

impl Located for String {
    fn location(&self) -> &str {
        self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> &str {
        (**self).location()
    }
}

/// A listing as exchanged with clients: its location plus any other fields,
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub location: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Located for Listing {
    fn location(&self) -> &str {
        &self.location
    }
}

/// A listing paired with its classification.
#[derive(Debug, Clone, Serialize)]
pub struct Ranked<T> {
    #[serde(flatten)]
    pub item: T,
    #[serde(flatten)]
    pub placement: LocationPriority,
    pub badge: Badge,
}

impl<T> Ranked<T> {
    pub fn new(item: T, placement: LocationPriority) -> Self {
        let badge = placement.badge();
        Self { item, placement, badge }
    }

    pub fn priority(&self) -> Priority {
        self.placement.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_matches_rank() {
        let mut tiers = vec![
            Priority::Other,
            Priority::SameCity,
            Priority::NeighboringCountry,
            Priority::SameCountry,
        ];
        tiers.sort();
        assert_eq!(tiers, Priority::ALL.to_vec());
        for pair in Priority::ALL.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_is_within() {
        assert!(Priority::SameCity.is_within(Priority::SameCountry));
        assert!(Priority::SameCountry.is_within(Priority::SameCountry));
        assert!(!Priority::NeighboringCountry.is_within(Priority::SameCountry));
        assert!(Priority::Other.is_within(Priority::Other));
    }

    #[test]
    fn test_badge_mapping() {
        assert_eq!(Priority::SameCity.badge(), Badge::Green);
        assert_eq!(Priority::SameCountry.badge(), Badge::Blue);
        assert_eq!(Priority::NeighboringCountry.badge(), Badge::Orange);
        assert_eq!(Priority::Other.badge(), Badge::Gray);
        assert_eq!(Badge::Orange.as_str(), "orange");
    }

    #[test]
    fn test_priority_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Priority::NeighboringCountry).unwrap(),
            "\"neighboring-country\""
        );
        let p: Priority = serde_json::from_str("\"same-city\"").unwrap();
        assert_eq!(p, Priority::SameCity);
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("same_country".parse::<Priority>().unwrap(), Priority::SameCountry);
        assert_eq!(" Other ".parse::<Priority>().unwrap(), Priority::Other);
        assert!("nearby".parse::<Priority>().is_err());
    }

    #[test]
    fn test_user_locale_blank_fields_dropped() {
        let locale = UserLocale::new(Some("  "), Some(" Togo "));
        assert_eq!(locale.city(), None);
        assert_eq!(locale.country(), Some("Togo"));
        assert!(UserLocale::new(None, Some("")).is_empty());
    }

    #[test]
    fn test_user_locale_or_fills_gaps() {
        let explicit = UserLocale::new(Some("Lomé"), None);
        let stored = UserLocale::new(Some("Abidjan"), Some("Côte d'Ivoire"));
        let merged = explicit.or(stored);
        assert_eq!(merged.city(), Some("Lomé"));
        assert_eq!(merged.country(), Some("Côte d'Ivoire"));
    }

    #[test]
    fn test_listing_keeps_extra_fields() {
        let raw = r#"{"id":"42","title":"Vélo","location":"Cocody, Abidjan","price":15000}"#;
        let listing: Listing = serde_json::from_str(raw).unwrap();
        assert_eq!(listing.location(), "Cocody, Abidjan");
        assert_eq!(listing.fields["price"], 15000);

        let placement = LocationPriority {
            city: "Cocody".into(),
            country: "Côte d'Ivoire".into(),
            priority: Priority::SameCity,
            distance: Some(NEARBY_LABEL.into()),
        };
        let value = serde_json::to_value(Ranked::new(listing, placement)).unwrap();
        assert_eq!(value["id"], "42");
        assert_eq!(value["priority"], "same-city");
        assert_eq!(value["badge"], "green");
        assert_eq!(value["distance"], NEARBY_LABEL);
    }
}
