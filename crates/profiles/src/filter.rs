//! Filter engine over an in-memory batch of profiles.
//!
//! Every function here is pure: the derived view and the country vocabulary are
//! recomputed from the batch and the criteria whenever either changes, never
//! cached.

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FilterParseError;
use crate::models::{Gender, MAX_AGE, MIN_AGE, Profile};

/// Sentinel text meaning "no constraint on this field".
pub const ANY: &str = "any";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderFilter {
    #[default]
    Any,
    Male,
    Female,
}

impl GenderFilter {
    pub fn matches(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::Any => true,
            GenderFilter::Male => gender == Gender::Male,
            GenderFilter::Female => gender == Gender::Female,
        }
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenderFilter::Any => f.write_str(ANY),
            GenderFilter::Male => f.write_str("male"),
            GenderFilter::Female => f.write_str("female"),
        }
    }
}

impl FromStr for GenderFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            ANY => Ok(GenderFilter::Any),
            "male" => Ok(GenderFilter::Male),
            "female" => Ok(GenderFilter::Female),
            _ => Err(FilterParseError {
                kind: "gender",
                value: s.to_string(),
            }),
        }
    }
}

/// Inclusive age bounds, always within [`MIN_AGE`, `MAX_AGE`] with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAgeRange")]
pub struct AgeRange {
    min: u8,
    max: u8,
}

/// Unchecked bounds as they appear on the wire.
#[derive(Deserialize)]
struct RawAgeRange {
    min: u8,
    max: u8,
}

impl From<RawAgeRange> for AgeRange {
    fn from(raw: RawAgeRange) -> Self {
        Self::new(raw.min, raw.max)
    }
}

impl AgeRange {
    /// Clamps both ends into the allowed domain and orders them, the same way a
    /// two-thumb slider can never report an out-of-range or inverted pair.
    pub fn new(a: u8, b: u8) -> Self {
        let a = a.clamp(MIN_AGE, MAX_AGE);
        let b = b.clamp(MIN_AGE, MAX_AGE);
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn contains(&self, age: u8) -> bool {
        (self.min..=self.max).contains(&age)
    }

    pub fn is_full(&self) -> bool {
        self.min == MIN_AGE && self.max == MAX_AGE
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self {
            min: MIN_AGE,
            max: MAX_AGE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CountryFilter {
    #[default]
    Any,
    Named(String),
}

impl CountryFilter {
    pub fn matches(&self, country: &str) -> bool {
        match self {
            CountryFilter::Any => true,
            CountryFilter::Named(name) => name == country,
        }
    }
}

impl fmt::Display for CountryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryFilter::Any => f.write_str(ANY),
            CountryFilter::Named(name) => f.write_str(name),
        }
    }
}

impl FromStr for CountryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ANY) {
            Ok(CountryFilter::Any)
        } else {
            Ok(CountryFilter::Named(s.to_string()))
        }
    }
}

/// User-selected constraints narrowing the displayed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub gender: GenderFilter,
    pub age_range: AgeRange,
    pub country: CountryFilter,
}

/// Partial change to [`FilterCriteria`]; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub gender: Option<GenderFilter>,
    pub age_range: Option<AgeRange>,
    pub country: Option<CountryFilter>,
}

impl FilterUpdate {
    pub fn gender(gender: GenderFilter) -> Self {
        Self {
            gender: Some(gender),
            ..Default::default()
        }
    }

    pub fn age_range(min: u8, max: u8) -> Self {
        Self {
            age_range: Some(AgeRange::new(min, max)),
            ..Default::default()
        }
    }

    pub fn country(country: CountryFilter) -> Self {
        Self {
            country: Some(country),
            ..Default::default()
        }
    }
}

impl FilterCriteria {
    /// True when no field restricts the batch.
    pub fn is_unrestricted(&self) -> bool {
        self.gender == GenderFilter::Any
            && self.age_range.is_full()
            && self.country == CountryFilter::Any
    }

    /// Merges a partial update into these criteria.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(age_range) = update.age_range {
            self.age_range = age_range;
        }
        if let Some(country) = update.country {
            self.country = country;
        }
    }

    /// A profile passes only if the gender, age and country predicates all hold.
    pub fn matches(&self, profile: &Profile) -> bool {
        self.gender.matches(profile.gender)
            && self.age_range.contains(profile.age)
            && self.country.matches(&profile.country)
    }
}

/// Returns the profiles satisfying `criteria`, in batch order.
pub fn filter<'a>(profiles: &'a [Profile], criteria: &FilterCriteria) -> Vec<&'a Profile> {
    profiles.iter().filter(|p| criteria.matches(p)).collect()
}

/// Country vocabulary for the current batch: the sentinel first, then each
/// distinct country once, sorted lexicographically.
pub fn countries(profiles: &[Profile]) -> Vec<CountryFilter> {
    let names: BTreeSet<&str> = profiles.iter().map(|p| p.country.as_str()).collect();

    std::iter::once(CountryFilter::Any)
        .chain(names.into_iter().map(|n| CountryFilter::Named(n.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::profile;

    fn batch() -> Vec<Profile> {
        vec![
            profile("Ana", "Lima", Gender::Female, 31, "Brazil"),
            profile("Bruno", "Costa", Gender::Male, 45, "Portugal"),
            profile("Chloe", "Martin", Gender::Female, 22, "France"),
            profile("Dina", "Haddad", Gender::Female, 40, "Brazil"),
            profile("Erik", "Berg", Gender::Male, 80, "Norway"),
            profile("Fatima", "Noor", Gender::Female, 18, "Egypt"),
        ]
    }

    #[test]
    fn test_unrestricted_filter_is_identity() {
        let profiles = batch();
        let criteria = FilterCriteria::default();

        assert!(criteria.is_unrestricted());
        let result = filter(&profiles, &criteria);
        assert_eq!(result.len(), profiles.len());
        assert!(result.iter().zip(&profiles).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_gender_and_age_range() {
        let profiles = batch();
        let criteria = FilterCriteria {
            gender: GenderFilter::Female,
            age_range: AgeRange::new(25, 40),
            country: CountryFilter::Any,
        };

        let names: Vec<&str> = filter(&profiles, &criteria)
            .iter()
            .map(|p| p.full_name.as_str())
            .collect();
        assert_eq!(names, vec!["Ana Lima", "Dina Haddad"]);
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let profiles = batch();
        let mut criteria = FilterCriteria::default();
        criteria.apply(FilterUpdate::age_range(18, 18));
        assert_eq!(filter(&profiles, &criteria).len(), 1);

        criteria.apply(FilterUpdate::age_range(80, 80));
        assert_eq!(filter(&profiles, &criteria)[0].full_name, "Erik Berg");
    }

    #[test]
    fn test_country_exact_match() {
        let profiles = batch();
        let criteria = FilterCriteria {
            country: CountryFilter::Named("Brazil".to_string()),
            ..Default::default()
        };

        let result = filter(&profiles, &criteria);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.country == "Brazil"));

        let partial = FilterCriteria {
            country: CountryFilter::Named("Braz".to_string()),
            ..Default::default()
        };
        assert!(filter(&profiles, &partial).is_empty());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let profiles = batch();
        let criteria = FilterCriteria {
            gender: GenderFilter::Male,
            age_range: AgeRange::new(18, 30),
            country: CountryFilter::Any,
        };

        assert!(!criteria.is_unrestricted());
        assert!(filter(&profiles, &criteria).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let profiles = batch();
        let criteria = FilterCriteria {
            gender: GenderFilter::Female,
            ..Default::default()
        };

        let once: Vec<Profile> = filter(&profiles, &criteria).into_iter().cloned().collect();
        let twice = filter(&once, &criteria);
        assert_eq!(twice.len(), once.len());
        assert!(twice.iter().zip(&once).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_countries_sorted_with_sentinel_first() {
        let profiles = batch();
        let list = countries(&profiles);

        assert_eq!(list[0], CountryFilter::Any);
        let names: Vec<String> = list[1..].iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["Brazil", "Egypt", "France", "Norway", "Portugal"]);
    }

    #[test]
    fn test_countries_of_empty_batch() {
        assert_eq!(countries(&[]), vec![CountryFilter::Any]);
    }

    #[test]
    fn test_age_range_clamps_and_orders() {
        let range = AgeRange::new(90, 10);
        assert_eq!((range.min(), range.max()), (MIN_AGE, MAX_AGE));

        let range = AgeRange::new(40, 25);
        assert_eq!((range.min(), range.max()), (25, 40));
    }

    #[test]
    fn test_deserialized_age_range_is_clamped() {
        let range: AgeRange = serde_json::from_str(r#"{"min":90,"max":10}"#).unwrap();
        assert_eq!((range.min(), range.max()), (MIN_AGE, MAX_AGE));
        assert!(range.contains(40));

        let criteria: FilterCriteria = serde_json::from_str(
            r#"{"gender":"female","age_range":{"min":40,"max":25},"country":"Any"}"#,
        )
        .unwrap();
        assert_eq!((criteria.age_range.min(), criteria.age_range.max()), (25, 40));
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let mut criteria = FilterCriteria::default();
        criteria.apply(FilterUpdate::gender(GenderFilter::Male));
        criteria.apply(FilterUpdate::country("Norway".parse().unwrap()));

        assert_eq!(criteria.gender, GenderFilter::Male);
        assert_eq!(criteria.country, CountryFilter::Named("Norway".to_string()));
        assert!(criteria.age_range.is_full());
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!("Female".parse::<GenderFilter>().unwrap(), GenderFilter::Female);
        assert_eq!("any".parse::<GenderFilter>().unwrap(), GenderFilter::Any);
        assert!("other".parse::<GenderFilter>().is_err());
        assert_eq!("ANY".parse::<CountryFilter>().unwrap(), CountryFilter::Any);
    }
}
