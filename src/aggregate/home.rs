//! Home view aggregations
//!
//! The distinct counts deduplicate by identifier, the pie values do not.
//! A country listing the same participation id twice counts once in
//! `count_distinct_participations` but twice in its pie slice.

use std::collections::HashSet;

use super::types::{HomeSummary, PieDatum};
use crate::dataset::{Country, CountryId};

/// Number of distinct country identifiers
pub fn count_distinct_countries(countries: &[Country]) -> usize {
    countries
        .iter()
        .map(|c| c.id)
        .collect::<HashSet<_>>()
        .len()
}

/// Number of distinct participation identifiers across all countries
pub fn count_distinct_participations(countries: &[Country]) -> usize {
    countries
        .iter()
        .flat_map(|c| c.participations.iter().map(|p| p.id))
        .collect::<HashSet<_>>()
        .len()
}

/// One pie slice per country, in input order, valued at the plain sum of
/// its medal counts
pub fn to_pie_chart_data(countries: &[Country]) -> Vec<PieDatum> {
    countries
        .iter()
        .map(|country| PieDatum {
            id: country.id,
            name: country.country.clone(),
            value: country
                .participations
                .iter()
                .map(|p| u64::from(p.medals_count))
                .sum(),
        })
        .collect()
}

/// Compute the full home view
pub fn summarize(countries: &[Country]) -> HomeSummary {
    HomeSummary {
        total_countries: count_distinct_countries(countries),
        total_participations: count_distinct_participations(countries),
        pie_chart: to_pie_chart_data(countries),
    }
}

/// Resolve a clicked pie slice label back to its country id
pub fn find_by_label(pie: &[PieDatum], name: &str) -> Option<CountryId> {
    pie.iter().find(|d| d.name == name).map(|d| d.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Participation;

    fn dataset() -> Vec<Country> {
        vec![
            Country::new(1, "Italy")
                .participation(Participation::new(1, 2012, 28, 372))
                .participation(Participation::new(2, 2016, 28, 375))
                .participation(Participation::new(3, 2020, 40, 381)),
            Country::new(2, "Spain")
                .participation(Participation::new(1, 2012, 20, 315))
                .participation(Participation::new(2, 2016, 17, 312)),
            Country::new(3, "France"),
        ]
    }

    #[test]
    fn test_count_distinct_countries() {
        assert_eq!(count_distinct_countries(&dataset()), 3);
        assert_eq!(count_distinct_countries(&[]), 0);
    }

    #[test]
    fn test_count_distinct_countries_ignores_duplicates_and_order() {
        let mut countries = dataset();
        countries.push(Country::new(1, "Italy again"));
        countries.reverse();

        assert_eq!(count_distinct_countries(&countries), 3);
    }

    #[test]
    fn test_count_distinct_participations_is_global() {
        // Ids 1 and 2 are shared between Italy and Spain
        assert_eq!(count_distinct_participations(&dataset()), 3);
    }

    #[test]
    fn test_pie_chart_one_datum_per_country() {
        let pie = to_pie_chart_data(&dataset());

        assert_eq!(pie.len(), 3);
        assert_eq!(
            pie[0],
            PieDatum {
                id: 1,
                name: "Italy".to_string(),
                value: 96
            }
        );
        assert_eq!(pie[1].value, 37);
        assert_eq!(pie[2].value, 0);
    }

    #[test]
    fn test_pie_chart_does_not_dedup() {
        let countries = vec![Country::new(1, "France")
            .participation(Participation::new(1, 2000, 5, 10))
            .participation(Participation::new(1, 2004, 3, 8))];

        assert_eq!(to_pie_chart_data(&countries)[0].value, 8);
        assert_eq!(count_distinct_participations(&countries), 1);
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(&dataset());

        assert_eq!(summary.total_countries, 3);
        assert_eq!(summary.total_participations, 3);
        assert_eq!(summary.pie_chart.len(), 3);
    }

    #[test]
    fn test_find_by_label() {
        let pie = to_pie_chart_data(&dataset());

        assert_eq!(find_by_label(&pie, "Spain"), Some(2));
        assert_eq!(find_by_label(&pie, "Atlantis"), None);
    }
}
