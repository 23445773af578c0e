//! Country record data model.
//!
//! Mirrors the JSON shape of the country-data provider. Records are
//! deserialized verbatim and never constructed or mutated locally;
//! optional fields default to empty so sparse payloads parse cleanly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Common and official names of a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// One entry of the currency map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Flag image references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// One country's descriptive data as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    /// Unique three-letter identifier (ISO 3166-1 alpha-3).
    pub cca3: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub capital: Vec<String>,
    /// Language code to language name.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// Currency code to currency info.
    #[serde(default)]
    pub currencies: BTreeMap<String, CurrencyInfo>,
    #[serde(default)]
    pub flags: Flags,
}

impl CountryRecord {
    /// The name shown in lists and search results.
    pub fn display_name(&self) -> &str {
        &self.name.common
    }

    /// First capital, if the provider reported any.
    pub fn primary_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    /// Population with thousands separators, e.g. `67 391 582` -> `67,391,582`.
    pub fn formatted_population(&self) -> String {
        let digits = self.population.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CountryRecord {
        serde_json::from_str(json).expect("record should deserialize")
    }

    #[test]
    fn deserializes_full_record() {
        let record = parse(
            r#"{
                "name": {"common": "France", "official": "French Republic"},
                "cca3": "FRA",
                "region": "Europe",
                "subregion": "Western Europe",
                "population": 67391582,
                "capital": ["Paris"],
                "languages": {"fra": "French"},
                "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
                "flags": {"png": "https://flagcdn.com/w320/fr.png"}
            }"#,
        );

        assert_eq!(record.display_name(), "France");
        assert_eq!(record.cca3, "FRA");
        assert_eq!(record.primary_capital(), Some("Paris"));
        assert_eq!(record.languages.get("fra").map(String::as_str), Some("French"));
        assert_eq!(
            record.currencies.get("EUR").map(|c| c.name.as_str()),
            Some("Euro")
        );
    }

    #[test]
    fn deserializes_sparse_record() {
        // Territories often come back without capital, subregion,
        // languages, or currencies.
        let record = parse(r#"{"name": {"common": "Bouvet Island"}, "cca3": "BVT"}"#);

        assert_eq!(record.primary_capital(), None);
        assert_eq!(record.subregion, None);
        assert!(record.languages.is_empty());
        assert!(record.currencies.is_empty());
        assert_eq!(record.population, 0);
    }

    #[test]
    fn unknown_provider_fields_are_ignored() {
        let record = parse(
            r#"{"name": {"common": "Japan"}, "cca3": "JPN", "area": 377930.0, "unMember": true}"#,
        );
        assert_eq!(record.cca3, "JPN");
    }

    #[test]
    fn population_formatting() {
        let mut record = CountryRecord::default();
        record.population = 0;
        assert_eq!(record.formatted_population(), "0");
        record.population = 999;
        assert_eq!(record.formatted_population(), "999");
        record.population = 1000;
        assert_eq!(record.formatted_population(), "1,000");
        record.population = 67391582;
        assert_eq!(record.formatted_population(), "67,391,582");
    }
}
