//! Synthetic profile generation.

use std::ops::RangeInclusive;

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, CountryName, StateAbbr, StreetName, ZipCode};
use fake::faker::creditcard::en::CreditCardNumber;
use fake::faker::internet::en::{FreeEmailProvider, Password};
use fake::faker::job::en::Title as JobTitle;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::{Rng, RngCore};
use tracing::debug;
use uuid::Uuid;

use profiles::errors::GenerationError;
use profiles::models::{Gender, MAX_AGE, MIN_AGE, Profile};

use super::bio;

/// Base URL of the gendered portrait set used for avatars.
const PORTRAIT_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/faker-js/assets-person-portrait";
/// Number of portraits available per gender.
const PORTRAITS_PER_GENDER: u32 = 100;

/// Configuration for profile generation.
#[derive(Debug, Clone)]
pub struct ProfileGenConfig {
    /// Avatar edge length in pixels.
    pub avatar_size: u32,
    /// Length of the generated password.
    pub password_length: usize,
    /// Height range in centimetres.
    pub height_cm: RangeInclusive<u32>,
    /// Weight range in kilograms.
    pub weight_kg: RangeInclusive<u32>,
}

impl Default for ProfileGenConfig {
    fn default() -> Self {
        Self {
            avatar_size: 64,
            password_length: 12,
            height_cm: 150..=200,
            weight_kg: 45..=120,
        }
    }
}

/// Generates realistic-looking user profiles.
///
/// All randomness is drawn from the `rng` handed to each call, so a seeded
/// generator reproduces the same batch.
#[derive(Debug, Clone, Default)]
pub struct ProfileGenerator {
    config: ProfileGenConfig,
}

impl ProfileGenerator {
    /// Creates a new profile generator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with custom configuration.
    ///
    /// Reversed height or weight bounds are swapped so every range can be sampled.
    pub fn with_config(mut config: ProfileGenConfig) -> Self {
        config.height_cm = ordered(config.height_cm);
        config.weight_kg = ordered(config.weight_kg);
        Self { config }
    }

    pub fn config(&self) -> &ProfileGenConfig {
        &self.config
    }

    /// Generates a single profile.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<Profile, GenerationError> {
        let id = self.generate_id(rng)?;
        let gender = if rng.r#gen::<bool>() {
            Gender::Male
        } else {
            Gender::Female
        };

        let first_name: String = FirstName().fake_with_rng(rng);
        let last_name: String = LastName().fake_with_rng(rng);
        let full_name = Profile::compose_full_name(&first_name, &last_name);
        let handle = self.generate_handle(&first_name, &last_name, rng);
        let provider: String = FreeEmailProvider().fake_with_rng(rng);
        let profession: String = JobTitle().fake_with_rng(rng);
        let bio = bio::compose(Some(profession.as_str()), rng);

        Ok(Profile {
            id,
            email: format!("{handle}@{provider}"),
            username: handle,
            phone: PhoneNumber().fake_with_rng(rng),
            address: self.generate_address(rng),
            password: Password(self.config.password_length..self.config.password_length + 1)
                .fake_with_rng(rng),
            gender,
            age: rng.gen_range(MIN_AGE..=MAX_AGE),
            height: format!("{} cm", rng.gen_range(self.config.height_cm.clone())),
            weight: format!("{} kg", rng.gen_range(self.config.weight_kg.clone())),
            profession,
            bio,
            credit_card: CreditCardNumber().fake_with_rng(rng),
            avatar: self.generate_avatar(gender, rng),
            country: CountryName().fake_with_rng(rng),
            first_name,
            last_name,
            full_name,
        })
    }

    /// Generates `count` profiles, or nothing at all if any draw fails.
    pub fn generate_batch(
        &self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<Profile>, GenerationError> {
        if count == 0 {
            return Err(GenerationError::EmptyBatch);
        }

        let batch = (0..count)
            .map(|_| self.generate(rng))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Generated {} profiles", batch.len());
        Ok(batch)
    }

    /// Draws a random (v4) identifier, surfacing a failing random source.
    fn generate_id(&self, rng: &mut impl Rng) -> Result<Uuid, GenerationError> {
        let mut bytes = [0u8; 16];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| GenerationError::RandomSource(e.to_string()))?;
        Ok(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Builds a username-style handle from a name, e.g. "ana.lima42".
    fn generate_handle(&self, first_name: &str, last_name: &str, rng: &mut impl Rng) -> String {
        let normalize = |s: &str| -> String {
            s.to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect()
        };

        let suffix: u32 = rng.gen_range(1..100);
        let separators = [".", "_", ""];
        let separator = separators[rng.gen_range(0..separators.len())];

        format!(
            "{}{separator}{}{suffix}",
            normalize(first_name),
            normalize(last_name)
        )
    }

    /// Generates a single-line postal address.
    fn generate_address(&self, rng: &mut impl Rng) -> String {
        let building: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        let city: String = CityName().fake_with_rng(rng);
        let state: String = StateAbbr().fake_with_rng(rng);
        let zip: String = ZipCode().fake_with_rng(rng);

        format!("{building} {street}, {city}, {state} {zip}")
    }

    /// Picks a portrait matching the profile's gender.
    fn generate_avatar(&self, gender: Gender, rng: &mut impl Rng) -> String {
        let index = rng.gen_range(0..PORTRAITS_PER_GENDER);
        format!(
            "{PORTRAIT_BASE_URL}/{}/{}/{index}.jpg",
            gender.as_str(),
            self.config.avatar_size
        )
    }
}

fn ordered(range: RangeInclusive<u32>) -> RangeInclusive<u32> {
    let (start, end) = range.into_inner();
    start.min(end)..=start.max(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Random source whose byte fills always fail.
    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source offline"))
        }
    }

    #[test]
    fn test_generate_profile() {
        let profile_gen = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(12345);
        let profile = profile_gen.generate(&mut rng).unwrap();

        assert_eq!(
            profile.full_name,
            format!("{} {}", profile.first_name, profile.last_name)
        );
        assert!(profile.email.contains('@'));
        assert!(profile.email.starts_with(&profile.username));
        assert_eq!(profile.password.chars().count(), 12);
        assert!((MIN_AGE..=MAX_AGE).contains(&profile.age));
        assert!(profile.height.ends_with(" cm"));
        assert!(profile.weight.ends_with(" kg"));
        assert!(!profile.country.is_empty());
        assert!(!profile.bio.is_empty());
    }

    #[test]
    fn test_avatar_matches_gender() {
        let profile_gen = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(99);

        for profile in profile_gen.generate_batch(40, &mut rng).unwrap() {
            let segment = format!("/{}/64/", profile.gender.as_str());
            assert!(profile.avatar.contains(&segment), "{}", profile.avatar);
        }
    }

    #[test]
    fn test_generate_batch() {
        let profile_gen = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(12345);
        let profiles = profile_gen.generate_batch(24, &mut rng).unwrap();

        assert_eq!(profiles.len(), 24);

        // All UUIDs should be unique
        let ids: std::collections::HashSet<_> = profiles.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 24);
        assert!(profiles.iter().all(|p| p.id.get_version_num() == 4));
    }

    #[test]
    fn test_seeded_batches_are_reproducible() {
        let profile_gen = ProfileGenerator::new();
        let a = profile_gen
            .generate_batch(5, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = profile_gen
            .generate_batch(5, &mut StdRng::seed_from_u64(42))
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_ranges_hold_across_many_profiles() {
        let profile_gen = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(2024);

        for profile in profile_gen.generate_batch(500, &mut rng).unwrap() {
            assert!((18..=80).contains(&profile.age));
            let height: u32 = profile.height.trim_end_matches(" cm").parse().unwrap();
            let weight: u32 = profile.weight.trim_end_matches(" kg").parse().unwrap();
            assert!((150..=200).contains(&height));
            assert!((45..=120).contains(&weight));
        }
    }

    #[test]
    fn test_custom_config() {
        let profile_gen = ProfileGenerator::with_config(ProfileGenConfig {
            avatar_size: 256,
            password_length: 20,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(1);
        let profile = profile_gen.generate(&mut rng).unwrap();

        assert!(profile.avatar.contains("/256/"));
        assert_eq!(profile.password.chars().count(), 20);
    }

    #[test]
    fn test_reversed_ranges_are_normalised() {
        let profile_gen = ProfileGenerator::with_config(ProfileGenConfig {
            height_cm: 200..=150,
            weight_kg: 90..=90,
            ..Default::default()
        });
        assert_eq!(profile_gen.config().height_cm, 150..=200);

        let mut rng = StdRng::seed_from_u64(3);
        for profile in profile_gen.generate_batch(50, &mut rng).unwrap() {
            let height: u32 = profile.height.trim_end_matches(" cm").parse().unwrap();
            assert!((150..=200).contains(&height));
            assert_eq!(profile.weight, "90 kg");
        }
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let profile_gen = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            profile_gen.generate_batch(0, &mut rng),
            Err(GenerationError::EmptyBatch)
        ));
    }

    #[test]
    fn test_broken_random_source_fails_whole_batch() {
        let profile_gen = ProfileGenerator::new();

        let result = profile_gen.generate_batch(24, &mut BrokenRng);
        assert!(matches!(result, Err(GenerationError::RandomSource(_))));
    }
}
