//! Core data types for the Olympic participation dataset
//!
//! - `Country`: one country and its ordered participation history
//! - `Participation`: attendance at a single Games
//! - `Snapshot`: the parsed dataset as held for the process lifetime

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Country identifier
pub type CountryId = u32;

/// Participation identifier (not guaranteed unique across countries)
pub type ParticipationId = u32;

/// One country record from the dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    /// Unique country identifier
    pub id: CountryId,
    /// Display name
    pub country: String,
    /// Participations in source order
    #[serde(default)]
    pub participations: Vec<Participation>,
}

impl Country {
    /// Create a country with no participations
    pub fn new(id: CountryId, name: impl Into<String>) -> Self {
        Self {
            id,
            country: name.into(),
            participations: Vec::new(),
        }
    }

    /// Builder method: append a participation
    pub fn participation(mut self, participation: Participation) -> Self {
        self.participations.push(participation);
        self
    }
}

/// Attendance of one country at one Olympic Games
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub id: ParticipationId,
    pub year: u32,
    /// Host city, absent in some fixtures
    #[serde(default)]
    pub city: String,
    pub medals_count: u32,
    pub athlete_count: u32,
}

impl Participation {
    pub fn new(id: ParticipationId, year: u32, medals_count: u32, athlete_count: u32) -> Self {
        Self {
            id,
            year,
            city: String::new(),
            medals_count,
            athlete_count,
        }
    }

    /// Builder method: set the host city
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }
}

/// Immutable copy of the fetched dataset
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Country records in document order
    pub countries: Vec<Country>,
    /// Where the document was read from
    pub source: String,
    /// When the load completed
    pub loaded_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(countries: Vec<Country>, source: impl Into<String>) -> Self {
        Self {
            countries,
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_fixture_shape() {
        let json = r#"[{
            "id": 1,
            "country": "Italy",
            "participations": [
                {"id": 1, "year": 2012, "city": "Londres", "medalsCount": 28, "athleteCount": 372}
            ]
        }]"#;

        let countries: Vec<Country> = serde_json::from_str(json).unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].country, "Italy");
        assert_eq!(countries[0].participations[0].medals_count, 28);
        assert_eq!(countries[0].participations[0].athlete_count, 372);
        assert_eq!(countries[0].participations[0].city, "Londres");
    }

    #[test]
    fn test_city_is_optional() {
        let json = r#"{"id": 3, "year": 2000, "medalsCount": 5, "athleteCount": 10}"#;
        let participation: Participation = serde_json::from_str(json).unwrap();
        assert!(participation.city.is_empty());
    }

    #[test]
    fn test_negative_counts_rejected() {
        let json = r#"{"id": 3, "year": 2000, "medalsCount": -1, "athleteCount": 10}"#;
        assert!(serde_json::from_str::<Participation>(json).is_err());
    }
}
