//! Structured "download profile" document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ExportError;
use crate::models::{Gender, Profile};

/// Suffix appended to the slugged full name of an exported profile.
pub const FILE_SUFFIX: &str = "_profile.json";

/// Field-keyed export of a single profile, nested by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    pub id: Uuid,
    pub avatar: String,
    pub personal: PersonalSection,
    pub contact: ContactSection,
    pub physical: PhysicalSection,
    pub about: AboutSection,
    pub sensitive: SensitiveSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalSection {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub gender: Gender,
    pub age: u8,
    pub profession: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSection {
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalSection {
    pub height: String,
    pub weight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitiveSection {
    pub username: String,
    pub password: String,
    pub credit_card: String,
}

impl From<&Profile> for ProfileDocument {
    fn from(p: &Profile) -> Self {
        Self {
            id: p.id,
            avatar: p.avatar.clone(),
            personal: PersonalSection {
                first_name: p.first_name.clone(),
                last_name: p.last_name.clone(),
                full_name: p.full_name.clone(),
                gender: p.gender,
                age: p.age,
                profession: p.profession.clone(),
                country: p.country.clone(),
            },
            contact: ContactSection {
                email: p.email.clone(),
                phone: p.phone.clone(),
                address: p.address.clone(),
            },
            physical: PhysicalSection {
                height: p.height.clone(),
                weight: p.weight.clone(),
            },
            about: AboutSection { bio: p.bio.clone() },
            sensitive: SensitiveSection {
                username: p.username.clone(),
                password: p.password.clone(),
                credit_card: p.credit_card.clone(),
            },
        }
    }
}

impl From<ProfileDocument> for Profile {
    fn from(doc: ProfileDocument) -> Self {
        Self {
            id: doc.id,
            first_name: doc.personal.first_name,
            last_name: doc.personal.last_name,
            full_name: doc.personal.full_name,
            username: doc.sensitive.username,
            email: doc.contact.email,
            phone: doc.contact.phone,
            address: doc.contact.address,
            password: doc.sensitive.password,
            gender: doc.personal.gender,
            age: doc.personal.age,
            height: doc.physical.height,
            weight: doc.physical.weight,
            profession: doc.personal.profession,
            bio: doc.about.bio,
            credit_card: doc.sensitive.credit_card,
            avatar: doc.avatar,
            country: doc.personal.country,
        }
    }
}

/// File name for an exported profile: each whitespace run in the full name
/// becomes a single underscore.
pub fn file_name(profile: &Profile) -> String {
    let slug = profile
        .full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    format!("{slug}{FILE_SUFFIX}")
}

/// Pretty-printed JSON export of a profile.
pub fn to_json(profile: &Profile) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&ProfileDocument::from(profile))?)
}
