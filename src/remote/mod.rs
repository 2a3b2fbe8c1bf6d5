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

//! Remote playback service interface.
//!
//! The dashboard only ever talks to the remote service through the
//! [`PlaybackService`] trait, which keeps the concurrent activities testable
//! without a network. [`SpotifyClient`] is the production implementation.
//!
//! All calls are blocking and must never be made while the shared state lock
//! is held.

mod spotify;

pub(crate) use spotify::SpotifyClient;

use thiserror::Error;
use tracing::{info, warn};

use crate::model::{Device, PlaybackSnapshot, SearchResult};

/// Failure of a single remote call.
#[derive(Debug, Error)]
pub(crate) enum RemoteError {
    #[error("no access token configured")]
    MissingToken,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Failure to start playback of a chosen item.
///
/// The `Display` output is shown to the user as a one-line notice.
#[derive(Debug, Error)]
pub(crate) enum PlayError {
    #[error("No active device, open Spotify somewhere first")]
    NoActiveDevice,

    #[error("Failed to play track: {0}")]
    Remote(#[from] RemoteError),
}

/// The capabilities the dashboard consumes from the remote playback service.
pub(crate) trait PlaybackService: Send + Sync {
    /// Returns the current playback snapshot, or `None` when nothing is
    /// loaded on any device.
    fn current_playback(&self) -> Result<Option<PlaybackSnapshot>, RemoteError>;

    /// Returns up to `limit` tracks matching `query`, best match first.
    fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, RemoteError>;

    /// Lists the output devices currently available to the account.
    fn list_devices(&self) -> Result<Vec<Device>, RemoteError>;

    /// Starts playback of `playable_id` on the device `device_id`.
    fn start_playback(&self, device_id: &str, playable_id: &str) -> Result<(), RemoteError>;
}

/// Starts playback of a track on the best available device.
///
/// The device flagged as active is preferred, otherwise the first listed
/// device is used.
///
/// # Errors
///
/// Returns [`PlayError::NoActiveDevice`] if the account has no devices at all,
/// or [`PlayError::Remote`] if either remote call fails.
pub(crate) fn play_track(service: &dyn PlaybackService, playable_id: &str) -> Result<(), PlayError> {
    let devices = service.list_devices()?;

    let device = devices
        .iter()
        .find(|d| d.is_active)
        .or_else(|| devices.first());

    let Some(device) = device else {
        warn!("No output device available to play {}", playable_id);
        return Err(PlayError::NoActiveDevice);
    };

    info!("Starting {} on device '{}'", playable_id, device.name);
    service.start_playback(&device.id, playable_id)?;

    Ok(())
}
