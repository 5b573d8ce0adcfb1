//! Configuration for the showcase front end.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use profiles::models::DEFAULT_BATCH_SIZE;

use crate::generators::ProfileGenConfig;

/// Runtime configuration, read from `SHOWCASE_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Number of profiles per generated batch.
    pub batch_size: usize,

    /// Seed for a reproducible random stream; `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Directory that downloaded profiles are written into.
    pub download_dir: PathBuf,

    /// External command receiving copied text on stdin, e.g. `xclip -selection clipboard`.
    /// `None` keeps copies in memory.
    pub clipboard_command: Option<String>,

    /// Avatar edge length in pixels.
    pub avatar_size: u32,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            download_dir: PathBuf::from("."),
            clipboard_command: None,
            avatar_size: 64,
        }
    }
}

impl ShowcaseConfig {
    /// Builds a configuration from the process environment, falling back to
    /// defaults for unset or unparsable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let batch_size = parse_or(&lookup, "SHOWCASE_BATCH_SIZE", defaults.batch_size);
        let batch_size = if batch_size == 0 {
            warn!("SHOWCASE_BATCH_SIZE must be positive, using {DEFAULT_BATCH_SIZE}");
            DEFAULT_BATCH_SIZE
        } else {
            batch_size
        };

        Self {
            batch_size,
            seed: lookup("SHOWCASE_SEED").and_then(|v| match v.trim().parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    warn!("Ignoring invalid SHOWCASE_SEED {v:?}");
                    None
                }
            }),
            download_dir: lookup("SHOWCASE_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.download_dir),
            clipboard_command: lookup("SHOWCASE_CLIPBOARD_CMD").filter(|c| !c.trim().is_empty()),
            avatar_size: parse_or(&lookup, "SHOWCASE_AVATAR_SIZE", defaults.avatar_size),
        }
    }

    /// Generator settings derived from this configuration.
    pub fn generator_config(&self) -> ProfileGenConfig {
        ProfileGenConfig {
            avatar_size: self.avatar_size,
            ..Default::default()
        }
    }
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {key} {raw:?}");
            default
        }),
        None => default,
    }
}
