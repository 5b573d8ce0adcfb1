//! Plain-text rendering of the card grid, filter panel and detail view.

use profiles::fields::ProfileSection;
use profiles::filter::{CountryFilter, FilterCriteria};
use profiles::models::Profile;

use crate::state::DerivedView;

pub const NO_MATCHES: &str =
    "No profiles match your current filters. Try adjusting your search criteria.";

/// One line per card: position, full name and phone.
pub fn cards(view: &DerivedView<'_>) -> String {
    if view.no_matches() {
        return NO_MATCHES.to_string();
    }

    view.profiles()
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:>3}. {:<32} {}", i + 1, p.full_name, p.phone))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn filter_panel(criteria: &FilterCriteria, countries: &[CountryFilter]) -> String {
    let country_choices = countries
        .iter()
        .map(|c| match c {
            CountryFilter::Any => "Any Country".to_string(),
            CountryFilter::Named(name) => name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ");

    [
        "Filter Profiles".to_string(),
        format!("  Gender: {}", criteria.gender),
        format!(
            "  Age Range: {} - {}",
            criteria.age_range.min(),
            criteria.age_range.max()
        ),
        format!("  Country: {}", criteria.country),
        format!("  Countries: {country_choices}"),
    ]
    .join("\n")
}

/// Detail view of a single profile, grouped by section.
pub fn detail(profile: &Profile) -> String {
    let mut lines = vec![
        profile.full_name.clone(),
        profile.phone.clone(),
        format!("Avatar: {}", profile.avatar),
    ];

    for section in ProfileSection::ALL {
        lines.push(String::new());
        lines.push(section.title().to_string());
        for field in section.fields() {
            lines.push(format!("  {:<12} {}", field.label(), field.value(profile)));
        }
    }

    lines.join("\n")
}
