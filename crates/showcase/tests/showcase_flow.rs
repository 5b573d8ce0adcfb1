//! End-to-end scenarios for the profile showcase.
//!
//! These tests drive the state container the way the front end does:
//! - Initial load and regenerate of a 24-profile batch
//! - Filtering by gender, age range and country
//! - Opening, copying from and downloading a profile

use std::collections::HashSet;

use profiles::export::{ProfileDocument, file_name};
use rand::SeedableRng;
use rand::rngs::StdRng;
use showcase::prelude::*;
use uuid::Uuid;

fn load(seed: u64) -> (Showcase, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let showcase = Showcase::new(ProfileGenerator::new(), DEFAULT_BATCH_SIZE, &mut rng)
        .expect("initial batch");
    (showcase, rng)
}

#[test]
fn batch_invariants_hold_across_regenerations() {
    let (mut showcase, mut rng) = load(1);

    for _ in 0..10 {
        let batch = showcase.batch();
        assert_eq!(batch.len(), 24);

        let ids: HashSet<Uuid> = batch.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 24);

        for profile in batch {
            assert!((18..=80).contains(&profile.age));
            assert!(matches!(profile.gender, Gender::Male | Gender::Female));
            assert_eq!(
                profile.full_name,
                format!("{} {}", profile.first_name, profile.last_name)
            );
        }

        showcase.regenerate(&mut rng).unwrap();
    }
}

#[test]
fn regenerate_shares_no_ids_with_previous_batch() {
    let (mut showcase, mut rng) = load(2);
    let before: HashSet<Uuid> = showcase.batch().iter().map(|p| p.id).collect();

    showcase.regenerate(&mut rng).unwrap();

    assert_eq!(showcase.batch().len(), 24);
    assert!(showcase.batch().iter().all(|p| !before.contains(&p.id)));
}

#[test]
fn female_between_25_and_40() {
    let (mut showcase, _) = load(3);
    showcase.update_filters(FilterUpdate::gender(GenderFilter::Female));
    showcase.update_filters(FilterUpdate::age_range(25, 40));

    let expected: Vec<Uuid> = showcase
        .batch()
        .iter()
        .filter(|p| p.gender == Gender::Female && (25..=40).contains(&p.age))
        .map(|p| p.id)
        .collect();

    let view = showcase.view();
    let actual: Vec<Uuid> = view.profiles().iter().map(|p| p.id).collect();
    assert_eq!(actual, expected);
    assert!(view.is_restricted());
    assert_eq!(view.no_matches(), expected.is_empty());
}

#[test]
fn every_listed_country_filters_to_its_profiles() {
    let (mut showcase, _) = load(4);
    let countries = showcase.countries();

    let distinct: HashSet<&str> = showcase.batch().iter().map(|p| p.country.as_str()).collect();
    assert_eq!(countries.len(), distinct.len() + 1);
    assert_eq!(countries[0], CountryFilter::Any);

    let mut total = 0;
    for country in countries.into_iter().skip(1) {
        showcase.update_filters(FilterUpdate::country(country.clone()));
        let view = showcase.view();
        assert!(!view.is_empty());
        assert!(view.profiles().iter().all(|p| country.matches(&p.country)));
        total += view.len();
    }
    assert_eq!(total, 24);

    showcase.reset_filters();
    assert_eq!(showcase.view().len(), 24);
}

#[test]
fn open_then_close_changes_nothing_else() {
    let (mut showcase, _) = load(5);
    showcase.update_filters(FilterUpdate::age_range(30, 70));
    let batch = showcase.batch().to_vec();
    let criteria = showcase.criteria().clone();

    let id = showcase.view().get(1).map(|p| p.id);
    if let Some(id) = id {
        assert!(showcase.select(id));
        assert!(showcase.modal().is_open());
    }
    showcase.close_modal();

    assert_eq!(showcase.modal(), &ModalState::Closed);
    assert_eq!(showcase.batch(), batch.as_slice());
    assert_eq!(showcase.criteria(), &criteria);
}

#[tokio::test]
async fn download_named_after_full_name() {
    let (mut showcase, _) = load(6);
    let profile = showcase.batch()[0].clone();
    showcase.select(profile.id);

    let dir = tempfile::tempdir().unwrap();
    let path = showcase.download(dir.path()).await.unwrap();

    let expected = format!("{}_profile.json", profile.full_name.replace(' ', "_"));
    assert_eq!(file_name(&profile), expected);
    assert_eq!(path.file_name().unwrap().to_str().unwrap(), expected);

    let doc: ProfileDocument =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(Profile::from(doc), profile);
    assert_eq!(showcase.modal(), &ModalState::Closed);
}

#[tokio::test]
async fn copy_then_regenerate() {
    let (mut showcase, mut rng) = load(7);
    let profile = showcase.batch()[10].clone();
    showcase.select(profile.id);

    let clipboard = MemoryClipboard::new();
    showcase
        .copy_field(ProfileField::Username, &clipboard)
        .await
        .unwrap();
    assert_eq!(clipboard.contents(), Some(profile.username.clone()));

    showcase.regenerate(&mut rng).unwrap();
    assert!(!showcase.modal().is_open());

    let toasts = showcase.drain_notifications();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].message, "Username copied to clipboard");
}
