//! Listing relevance by locality: parse, classify, sort, filter.
//!
//! Tier decision for one listing and one viewer:
//!   same city → same country → neighboring country → other
//!
//! City matching accepts substring containment either way, so a district
//! entered as "Cocody" still matches a viewer in "Cocody, Abidjan". Short
//! names can therefore match unrelated longer ones.

use super::gazetteer::Gazetteer;
use super::normalize::normalize;
use super::types::{
    Located, LocationPriority, ParsedLocation, Priority, Ranked, NEARBY_LABEL, NEIGHBOR_SUFFIX,
};

impl Gazetteer {
    /// Split "City, Country"-ish text into its parts. Never fails.
    ///
    /// Only the second comma segment is tried as a country; when it is not a
    /// known country it is taken as a district and dropped. Missing
    /// countries are inferred from the city when possible.
    pub fn parse_location(&self, raw: &str) -> ParsedLocation {
        let mut parts = raw.split(',').map(str::trim);
        let city = parts.next().unwrap_or("").to_string();

        let mut country = parts
            .next()
            .and_then(|segment| self.find_country(segment))
            .map(|c| c.name.to_string())
            .unwrap_or_default();

        if country.is_empty() && !city.is_empty() {
            if let Some(found) = self.country_for_city(&city) {
                country = found.to_string();
            }
        }

        ParsedLocation { city, country }
    }

    /// Classify a listing location relative to the viewer.
    ///
    /// Total and pure: every input, including empty or unparseable text,
    /// yields a result.
    pub fn classify(
        &self,
        listing_location: &str,
        user_city: Option<&str>,
        user_country: Option<&str>,
    ) -> LocationPriority {
        let ParsedLocation { city, country } = self.parse_location(listing_location);
        let country = self.canonicalize(&country);
        let user_country = self.canonicalize(user_country.unwrap_or(""));

        let city_key = normalize(&city);
        let user_city_key = normalize(user_city.unwrap_or(""));
        let country_key = normalize(&country);
        let user_country_key = normalize(&user_country);

        if cities_match(&city_key, &user_city_key) {
            return LocationPriority {
                city,
                country,
                priority: Priority::SameCity,
                distance: Some(NEARBY_LABEL.to_string()),
            };
        }

        let both_countries_known = !country_key.is_empty() && !user_country_key.is_empty();

        if both_countries_known && country_key == user_country_key {
            return LocationPriority {
                distance: Some(country.clone()),
                city,
                country,
                priority: Priority::SameCountry,
            };
        }

        if both_countries_known && self.is_neighbor(&user_country, &country) {
            return LocationPriority {
                distance: Some(format!("{} {}", country, NEIGHBOR_SUFFIX)),
                city,
                country,
                priority: Priority::NeighboringCountry,
            };
        }

        let label = if country_key.is_empty() {
            listing_location.to_string()
        } else {
            country.clone()
        };
        LocationPriority {
            city,
            country,
            priority: Priority::Other,
            // Empty input has nothing to show; anything else is echoed verbatim.
            distance: Some(label).filter(|l| !l.is_empty()),
        }
    }

    /// Classify every listing once and order them closest first.
    ///
    /// Stable: listings in the same tier keep their input order.
    pub fn rank_listings<T: Located>(
        &self,
        listings: Vec<T>,
        user_city: Option<&str>,
        user_country: Option<&str>,
    ) -> Vec<Ranked<T>> {
        self.rank_within(listings, user_city, user_country, None)
    }

    /// Like [`Gazetteer::rank_listings`], dropping listings less relevant
    /// than `max` when given.
    pub fn rank_within<T: Located>(
        &self,
        listings: Vec<T>,
        user_city: Option<&str>,
        user_country: Option<&str>,
        max: Option<Priority>,
    ) -> Vec<Ranked<T>> {
        let mut ranked: Vec<Ranked<T>> = listings
            .into_iter()
            .map(|item| {
                let placement = self.classify(item.location(), user_city, user_country);
                Ranked::new(item, placement)
            })
            .filter(|r| max.map_or(true, |max| r.priority().is_within(max)))
            .collect();
        ranked.sort_by_key(|r| r.priority().rank());
        ranked
    }

    /// Order listings closest first, keeping input order within a tier.
    pub fn sort_by_location<T: Located>(
        &self,
        listings: Vec<T>,
        user_city: Option<&str>,
        user_country: Option<&str>,
    ) -> Vec<T> {
        self.rank_listings(listings, user_city, user_country)
            .into_iter()
            .map(|r| r.item)
            .collect()
    }

    /// Keep listings at `max` relevance or closer, in input order.
    pub fn filter_by_priority<T: Located>(
        &self,
        listings: Vec<T>,
        user_city: Option<&str>,
        user_country: Option<&str>,
        max: Priority,
    ) -> Vec<T> {
        listings
            .into_iter()
            .filter(|item| {
                self.classify(item.location(), user_city, user_country)
                    .priority
                    .is_within(max)
            })
            .collect()
    }
}

fn cities_match(city: &str, user_city: &str) -> bool {
    !city.is_empty()
        && !user_city.is_empty()
        && (city == user_city || city.contains(user_city) || user_city.contains(city))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::data::Country;

    fn g() -> &'static Gazetteer {
        Gazetteer::builtin()
    }

    #[test]
    fn test_parse_city_and_country() {
        let p = g().parse_location("Dakar, Sénégal");
        assert_eq!(p.city, "Dakar");
        assert_eq!(p.country, "Sénégal");
    }

    #[test]
    fn test_parse_alias_country() {
        let p = g().parse_location("  Abidjan ,  Ivory Coast ");
        assert_eq!(p.city, "Abidjan");
        assert_eq!(p.country, "Côte d'Ivoire");
    }

    #[test]
    fn test_parse_district_falls_back_to_city_lookup() {
        let p = g().parse_location("Abidjan, Riviera 3");
        assert_eq!(p.city, "Abidjan");
        assert_eq!(p.country, "Côte d'Ivoire");
    }

    #[test]
    fn test_parse_only_second_segment_is_tried() {
        let p = g().parse_location("Riviera, Cocody, Côte d'Ivoire");
        assert_eq!(p.city, "Riviera");
        assert_eq!(p.country, "");
    }

    #[test]
    fn test_parse_city_only() {
        assert_eq!(g().parse_location("Cotonou").country, "Bénin");
        assert_eq!(g().parse_location("Gotham").country, "");
    }

    #[test]
    fn test_parse_degenerate_inputs() {
        for raw in ["", "   ", ",", ", ,", ",Togo"] {
            let p = g().parse_location(raw);
            assert_eq!(p.city, "", "city for {:?}", raw);
        }
        assert_eq!(g().parse_location(",Togo").country, "Togo");
    }

    #[test]
    fn test_same_city_across_spellings() {
        let a = g().classify("Abidjan, Côte d'Ivoire", Some("Abidjan"), Some("Ivory Coast"));
        let b = g().classify("Abidjan, Cote d Ivoire", Some("Abidjan"), Some("Ivory Coast"));
        assert_eq!(a.priority, Priority::SameCity);
        assert_eq!(a, b);
        assert_eq!(a.distance.as_deref(), Some(NEARBY_LABEL));
        assert_eq!(a.country, "Côte d'Ivoire");
    }

    #[test]
    fn test_same_city_by_containment() {
        let r = g().classify("Yopougon", Some("Yopougon Abidjan"), Some("Côte d'Ivoire"));
        assert_eq!(r.priority, Priority::SameCity);

        let r = g().classify("Cocody Riviera, Côte d'Ivoire", Some("cocody"), None);
        assert_eq!(r.priority, Priority::SameCity);
    }

    #[test]
    fn test_different_districts_are_same_country() {
        let r = g().classify("Marcory", Some("Cocody"), Some("Côte d'Ivoire"));
        assert_ne!(r.priority, Priority::SameCity);
        assert_eq!(r.priority, Priority::SameCountry);

        let r = g().classify("Cocody, Côte d'Ivoire", Some("Abidjan"), Some("Côte d'Ivoire"));
        assert_eq!(r.priority, Priority::SameCountry);
    }

    #[test]
    fn test_same_country() {
        let r = g().classify("Dakar, Sénégal", Some("Abidjan"), Some("Sénégal"));
        assert_eq!(r.priority, Priority::SameCountry);
        assert_eq!(r.distance.as_deref(), Some("Sénégal"));
        assert_eq!(r.city, "Dakar");
    }

    #[test]
    fn test_same_country_via_alias_and_city_inference() {
        let r = g().classify("Thiès", None, Some("senegal"));
        assert_eq!(r.priority, Priority::SameCountry);
        assert_eq!(r.country, "Sénégal");
    }

    #[test]
    fn test_neighboring_country() {
        let r = g().classify("Lomé, Togo", None, Some("Bénin"));
        assert_eq!(r.priority, Priority::NeighboringCountry);
        assert_eq!(r.distance.as_deref(), Some("Togo (pays voisin)"));
    }

    #[test]
    fn test_neighbor_lookup_uses_viewer_row_only() {
        const LAND: &[Country] = &[
            Country { name: "Bénin", dial_code: "+229", flag: "", cities: &["Cotonou"] },
            Country { name: "Togo", dial_code: "+228", flag: "", cities: &["Lomé"] },
        ];
        let one_way = Gazetteer::new(LAND, &[], &[("Bénin", &["Togo"])]);

        let r = one_way.classify("Lomé, Togo", None, Some("Bénin"));
        assert_eq!(r.priority, Priority::NeighboringCountry);

        let r = one_way.classify("Cotonou, Bénin", None, Some("Togo"));
        assert_eq!(r.priority, Priority::Other);
    }

    #[test]
    fn test_other_with_known_country() {
        let r = g().classify("Paris, France", Some("Abidjan"), Some("Côte d'Ivoire"));
        assert_eq!(r.priority, Priority::Other);
        assert_eq!(r.distance.as_deref(), Some("France"));
    }

    #[test]
    fn test_other_falls_back_to_raw_text() {
        let r = g().classify("???unparseable", Some("X"), Some("Y"));
        assert_eq!(r.priority, Priority::Other);
        assert_eq!(r.distance.as_deref(), Some("???unparseable"));
        assert_eq!(r.country, "");
    }

    #[test]
    fn test_empty_input_is_other() {
        let r = g().classify("", None, None);
        assert_eq!(r.priority, Priority::Other);
        assert_eq!(r.city, "");
        assert_eq!(r.country, "");
        assert_eq!(r.distance, None);
    }

    #[test]
    fn test_degenerate_inputs_never_panic() {
        let inputs = ["", " ", "\t\n", ",,,", "no commas here", "(((", "’’", "—", "Abidjan,"];
        let viewers = [
            (None, None),
            (Some(""), Some("")),
            (Some("   "), Some("  ")),
            (Some("Abidjan"), Some("Côte d'Ivoire")),
            (Some("X"), Some("Y")),
        ];
        for raw in inputs {
            for (city, country) in viewers {
                let r = g().classify(raw, city, country);
                assert!(Priority::ALL.contains(&r.priority));
                if r.priority != Priority::Other {
                    assert!(r.distance.is_some());
                }
            }
        }
    }

    #[test]
    fn test_whitespace_location_echoed_verbatim() {
        let r = g().classify("   ", Some("Abidjan"), Some("Côte d'Ivoire"));
        assert_eq!(r.priority, Priority::Other);
        assert_eq!(r.distance.as_deref(), Some("   "));
    }

    #[test]
    fn test_distinct_unmapped_characters_are_different_cities() {
        let r = g().classify("\u{E000}", Some("\u{E001}"), None);
        assert_eq!(r.priority, Priority::Other);
        let r = g().classify("\u{E000}\u{E001}", Some("\u{E001}"), None);
        assert_eq!(r.priority, Priority::SameCity);
    }

    #[test]
    fn test_blank_viewer_city_never_matches() {
        let r = g().classify("Abidjan", Some("  "), None);
        assert_eq!(r.priority, Priority::Other);
        assert_eq!(r.distance.as_deref(), Some("Côte d'Ivoire"));
    }

    #[test]
    fn test_unknown_second_segment_is_dropped() {
        let r = g().classify("Springfield, Narnia", None, Some("narnia"));
        // "Narnia" is not a known country, so parsing drops it.
        assert_eq!(r.priority, Priority::Other);
        assert_eq!(r.distance.as_deref(), Some("Springfield, Narnia"));
    }

    #[test]
    fn test_sort_is_stable_by_tier() {
        let listings = vec![
            "Paris, France",          // A: other
            "Abidjan",                // B: same city
            "Lyon, France",           // C: other
            "Abidjan, Cote d'Ivoire", // D: same city
        ];
        let sorted = g().sort_by_location(listings, Some("Abidjan"), Some("Côte d'Ivoire"));
        assert_eq!(
            sorted,
            vec!["Abidjan", "Abidjan, Cote d'Ivoire", "Paris, France", "Lyon, France"]
        );
    }

    #[test]
    fn test_sort_all_tiers() {
        let listings = vec![
            "Kinshasa, RD Congo".to_string(),
            "Accra, Ghana".to_string(),
            "Bouaké".to_string(),
            "Abidjan, Côte d'Ivoire".to_string(),
            "Korhogo".to_string(),
        ];
        let ranked = g().rank_listings(listings, Some("Abidjan"), Some("Côte d'Ivoire"));
        let order: Vec<(&str, Priority)> =
            ranked.iter().map(|r| (r.item.as_str(), r.priority())).collect();
        assert_eq!(
            order,
            vec![
                ("Abidjan, Côte d'Ivoire", Priority::SameCity),
                ("Bouaké", Priority::SameCountry),
                ("Korhogo", Priority::SameCountry),
                ("Accra, Ghana", Priority::NeighboringCountry),
                ("Kinshasa, RD Congo", Priority::Other),
            ]
        );
        assert_eq!(ranked[3].badge.as_str(), "orange");
    }

    #[test]
    fn test_sort_without_viewer_keeps_order() {
        let listings = vec!["Lomé", "Dakar", "", "Paris, France"];
        let sorted = g().sort_by_location(listings.clone(), None, None);
        assert_eq!(sorted, listings);
    }

    #[test]
    fn test_filter_by_priority() {
        let listings = vec!["Lomé, Togo", "Paris, France", "Cotonou", "Parakou, Bénin"];
        let kept = g().filter_by_priority(
            listings,
            Some("Cotonou"),
            Some("Bénin"),
            Priority::SameCountry,
        );
        assert_eq!(kept, vec!["Cotonou", "Parakou, Bénin"]);
    }

    #[test]
    fn test_rank_within_sorts_and_drops() {
        let listings = vec!["Paris, France", "Lomé, Togo", "Parakou, Bénin", "Cotonou"];
        let ranked = g().rank_within(
            listings,
            Some("Cotonou"),
            Some("Bénin"),
            Some(Priority::NeighboringCountry),
        );
        let order: Vec<&str> = ranked.iter().map(|r| r.item).collect();
        assert_eq!(order, vec!["Cotonou", "Parakou, Bénin", "Lomé, Togo"]);

        let all = g().rank_within(vec!["Paris, France", ""], None, None, None);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_filter_other_keeps_everything() {
        let listings = vec!["Lomé, Togo", "", "???"];
        let kept = g().filter_by_priority(listings.clone(), None, None, Priority::Other);
        assert_eq!(kept, listings);
    }
}
