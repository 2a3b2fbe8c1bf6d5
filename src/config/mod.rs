// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file, and the named
//! polling cadence presets that control how often the remote playback state
//! is fetched.

use std::{env, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::warn;

pub(crate) const CONFIG_NAME: &str = "spotdash";

const ENV_UPDATE_MODE: &str = "SPOTIFY_UPDATE_MODE";
const ENV_ACCESS_TOKEN: &str = "SPOTIFY_ACCESS_TOKEN";

const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_POLL_MODE: &str = "medium";

/// Interval used when the configured cadence label is not a known preset.
const FALLBACK_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Named polling cadences, each label maps to an interval in seconds.
///
/// The short labels are the historical names for the same three presets.
const POLL_PRESETS: &[(&str, u64)] = &[
    ("fast", 2),
    ("medium", 5),
    ("slow", 8),
    ("ddos", 2),
    ("ai", 5),
    ("py", 8),
];

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) poll_mode: String,
    pub(crate) access_token: Option<String>,
    pub(crate) api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            poll_mode: DEFAULT_POLL_MODE.to_string(),
            access_token: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// The polling interval selected by [`AppConfig::poll_mode`].
    pub(crate) fn poll_interval(&self) -> Duration {
        poll_interval(&self.poll_mode).unwrap_or_else(|| {
            warn!(
                "Unknown poll mode '{}', polling every {}s",
                self.poll_mode,
                FALLBACK_POLL_INTERVAL.as_secs()
            );
            FALLBACK_POLL_INTERVAL
        })
    }

    fn apply_overrides<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = var(ENV_UPDATE_MODE) {
            self.poll_mode = mode;
        }
        if let Some(token) = var(ENV_ACCESS_TOKEN) {
            self.access_token = Some(token);
        }
        self
    }
}

/// Looks up a polling cadence preset by its label, ignoring case.
pub(crate) fn poll_interval(label: &str) -> Option<Duration> {
    let label = label.trim();
    POLL_PRESETS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(label))
        .map(|(_, secs)| Duration::from_secs(*secs))
}

/// Loads the configuration file, falling back to defaults if it is missing or
/// unreadable, then applies any environment variable overrides.
pub(crate) fn load_config() -> AppConfig {
    let config: AppConfig = confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        warn!("Using default configuration: {}", e);
        AppConfig::default()
    });

    config.apply_overrides(|name| env::var(name).ok())
}
