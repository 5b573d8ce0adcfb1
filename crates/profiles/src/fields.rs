//! Copyable fields of the profile detail view.

use std::fmt;
use std::str::FromStr;

use crate::errors::FilterParseError;
use crate::models::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSection {
    Personal,
    Physical,
    About,
    Sensitive,
}

impl ProfileSection {
    pub const ALL: [ProfileSection; 4] = [
        ProfileSection::Personal,
        ProfileSection::Physical,
        ProfileSection::About,
        ProfileSection::Sensitive,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ProfileSection::Personal => "Personal Information",
            ProfileSection::Physical => "Physical",
            ProfileSection::About => "About Me",
            ProfileSection::Sensitive => "Sensitive Information",
        }
    }

    /// Fields shown under this section, in display order.
    pub fn fields(&self) -> &'static [ProfileField] {
        use ProfileField::*;
        match self {
            ProfileSection::Personal => &[
                FullName, Profession, Gender, Age, Email, Phone, Country, Address,
            ],
            ProfileSection::Physical => &[Height, Weight],
            ProfileSection::About => &[Bio],
            ProfileSection::Sensitive => &[Username, Password, CreditCard],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FullName,
    Profession,
    Gender,
    Age,
    Email,
    Phone,
    Country,
    Address,
    Height,
    Weight,
    Bio,
    Username,
    Password,
    CreditCard,
}

impl ProfileField {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FullName => "Full Name",
            ProfileField::Profession => "Profession",
            ProfileField::Gender => "Gender",
            ProfileField::Age => "Age",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Country => "Country",
            ProfileField::Address => "Address",
            ProfileField::Height => "Height",
            ProfileField::Weight => "Weight",
            ProfileField::Bio => "Bio",
            ProfileField::Username => "Username",
            ProfileField::Password => "Password",
            ProfileField::CreditCard => "Credit Card",
        }
    }

    /// Literal text written to the clipboard for this field.
    pub fn value(&self, profile: &Profile) -> String {
        match self {
            ProfileField::FullName => profile.full_name.clone(),
            ProfileField::Profession => profile.profession.clone(),
            ProfileField::Gender => profile.gender.to_string(),
            ProfileField::Age => format!("{} years old", profile.age),
            ProfileField::Email => profile.email.clone(),
            ProfileField::Phone => profile.phone.clone(),
            ProfileField::Country => profile.country.clone(),
            ProfileField::Address => profile.address.clone(),
            ProfileField::Height => profile.height.clone(),
            ProfileField::Weight => profile.weight.clone(),
            ProfileField::Bio => profile.bio.clone(),
            ProfileField::Username => profile.username.clone(),
            ProfileField::Password => profile.password.clone(),
            ProfileField::CreditCard => profile.credit_card.clone(),
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProfileField {
    type Err = FilterParseError;

    /// Accepts the label in any case, with or without spaces, dashes or underscores
    /// ("credit card", "credit-card", "creditCard").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        ProfileSection::ALL
            .iter()
            .flat_map(|section| section.fields())
            .find(|field| {
                field
                    .label()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect::<String>()
                    .to_lowercase()
                    == key
            })
            .copied()
            .ok_or_else(|| FilterParseError {
                kind: "field",
                value: s.to_string(),
            })
    }
}
