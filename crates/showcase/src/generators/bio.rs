//! Biography composition.

use rand::Rng;
use rand::seq::SliceRandom;

/// Composes a short biography such as "film lover, founder, dog enthusiast".
///
/// Uses one to three distinct parts; when `profession` is given it may lead the
/// line instead of a template part.
pub fn compose(profession: Option<&str>, rng: &mut impl Rng) -> String {
    let templates = default_bio_templates();
    let count = rng.gen_range(1..=3);
    let mut parts: Vec<String> = templates
        .choose_multiple(rng, count)
        .map(|s| s.to_string())
        .collect();

    if let Some(profession) = profession {
        if rng.gen_bool(0.3) {
            parts.insert(0, profession.to_lowercase());
        }
    }

    parts.join(", ")
}

fn default_bio_templates() -> Vec<&'static str> {
    vec![
        "coffee fan",
        "film lover",
        "dog enthusiast",
        "cat person",
        "amateur photographer",
        "weekend hiker",
        "book collector",
        "board game addict",
        "marathon runner",
        "home cook",
        "podcast junkie",
        "founder",
        "traveler",
        "gardener",
        "music geek",
        "tea drinker",
        "open source contributor",
        "volunteer",
        "parent",
        "dreamer",
        "climber",
        "foodie",
        "vinyl collector",
        "yoga devotee",
    ]
}
