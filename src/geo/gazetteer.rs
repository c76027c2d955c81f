//! Lookup structures over the reference tables.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::data::{Country, COUNTRIES, COUNTRY_ALIASES, NEIGHBORS};
use super::normalize::normalize;

static BUILTIN: LazyLock<Gazetteer> =
    LazyLock::new(|| Gazetteer::new(COUNTRIES, COUNTRY_ALIASES, NEIGHBORS));

/// Countries, aliases and borders, indexed by normalized key.
pub struct Gazetteer {
    countries: &'static [Country],
    /// normalized country name -> index into `countries`
    by_name: HashMap<String, usize>,
    /// normalized alias -> canonical name
    aliases: HashMap<String, &'static str>,
    /// normalized city -> index of the first country listing it
    by_city: HashMap<String, usize>,
    /// normalized country name -> normalized neighbor names
    neighbors: HashMap<String, Vec<String>>,
}

impl Gazetteer {
    pub fn new(
        countries: &'static [Country],
        aliases: &[(&'static str, &'static str)],
        neighbors: &[(&'static str, &'static [&'static str])],
    ) -> Self {
        let mut by_name = HashMap::new();
        let mut by_city = HashMap::new();
        for (idx, country) in countries.iter().enumerate() {
            by_name.entry(normalize(country.name)).or_insert(idx);
            for city in country.cities {
                by_city.entry(normalize(city)).or_insert(idx);
            }
        }

        let aliases = aliases
            .iter()
            .map(|(alias, canonical)| (normalize(alias), *canonical))
            .collect();

        let neighbors = neighbors
            .iter()
            .map(|(country, list)| {
                (normalize(country), list.iter().map(|n| normalize(n)).collect())
            })
            .collect();

        Self {
            countries,
            by_name,
            aliases,
            by_city,
            neighbors,
        }
    }

    /// The process-wide built-in tables.
    pub fn builtin() -> &'static Gazetteer {
        &BUILTIN
    }

    pub fn countries(&self) -> &'static [Country] {
        self.countries
    }

    /// Map any spelling of a country to its canonical name.
    ///
    /// Unknown names come back unchanged.
    pub fn canonicalize(&self, country: &str) -> String {
        let key = normalize(country);
        if let Some(canonical) = self.aliases.get(&key) {
            return canonical.to_string();
        }
        match self.by_name.get(&key) {
            Some(&idx) => self.countries[idx].name.to_string(),
            None => country.to_string(),
        }
    }

    /// Find a known country by any of its spellings.
    pub fn find_country(&self, country: &str) -> Option<&'static Country> {
        let canonical = self.canonicalize(country);
        self.by_name
            .get(&normalize(&canonical))
            .map(|&idx| &self.countries[idx])
    }

    pub fn is_known_country(&self, country: &str) -> bool {
        self.find_country(country).is_some()
    }

    /// Infer the country from a city name. First country in table order wins.
    pub fn country_for_city(&self, city: &str) -> Option<&'static str> {
        let key = normalize(city);
        if key.is_empty() {
            return None;
        }
        self.by_city.get(&key).map(|&idx| self.countries[idx].name)
    }

    /// Cities listed for a country, by any of its spellings.
    pub fn cities_of(&self, country: &str) -> &'static [&'static str] {
        self.find_country(country).map(|c| c.cities).unwrap_or(&[])
    }

    /// Whether `to` is listed in `from`'s border row.
    ///
    /// Directed: `is_neighbor(a, b)` never consults `b`'s row.
    pub fn is_neighbor(&self, from: &str, to: &str) -> bool {
        let to_key = normalize(to);
        self.neighbors
            .get(&normalize(from))
            .is_some_and(|row| row.iter().any(|n| *n == to_key))
    }

    /// Look up a country by phone prefix: "+225", "225" or "00225".
    ///
    /// Shared prefixes resolve to the first country in table order.
    pub fn country_by_dial_code(&self, code: &str) -> Option<&'static Country> {
        let digits = code.trim();
        let digits = digits
            .strip_prefix('+')
            .or_else(|| digits.strip_prefix("00"))
            .unwrap_or(digits);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        self.countries
            .iter()
            .find(|c| c.dial_code.trim_start_matches('+') == digits)
    }
}
