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

//! Spotify Web API backed playback service.
//!
//! A thin blocking client over the handful of Web API endpoints the dashboard
//! needs. Authentication is a pre-obtained OAuth bearer token, how that token
//! is acquired and refreshed is not this module's concern.

use std::time::Duration;

use reqwest::{
    StatusCode,
    blocking::{Client, RequestBuilder, Response},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    model::{Device, PlaybackSnapshot, SearchResult, clean_name},
    remote::{PlaybackService, RemoteError},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) struct SpotifyClient {
    http: Client,
    base_url: String,
    access_token: Option<String>,
}

impl SpotifyClient {
    /// Creates a client for the Web API rooted at `base_url`.
    ///
    /// A missing `access_token` is not an error here, every request made
    /// without one fails with [`RemoteError::MissingToken`] instead.
    pub(crate) fn new(base_url: &str, access_token: Option<String>) -> Result<Self, RemoteError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorised(&self, request: RequestBuilder) -> Result<RequestBuilder, RemoteError> {
        let token = self.access_token.as_deref().ok_or(RemoteError::MissingToken)?;
        Ok(request.bearer_auth(token))
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, RemoteError> {
        let response = self.authorised(request)?.send()?;
        check_status(response)
    }

    fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Option<T>, RemoteError> {
        let response = self.send(request)?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.text()?;
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

impl PlaybackService for SpotifyClient {
    fn current_playback(&self) -> Result<Option<PlaybackSnapshot>, RemoteError> {
        let request = self.http.get(self.url("/me/player"));
        let playback: Option<CurrentPlaybackDto> = self.get_json(request)?;

        Ok(playback.and_then(snapshot_from_dto))
    }

    fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, RemoteError> {
        let limit = limit.to_string();
        let request = self
            .http
            .get(self.url("/search"))
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())]);

        let results: Option<SearchDto> = self.get_json(request)?;
        let results = results.map(results_from_dto).unwrap_or_default();

        debug!("Search for '{}' returned {} tracks", query, results.len());

        Ok(results)
    }

    fn list_devices(&self) -> Result<Vec<Device>, RemoteError> {
        let request = self.http.get(self.url("/me/player/devices"));
        let devices: Option<DevicesDto> = self.get_json(request)?;

        Ok(devices.map(devices_from_dto).unwrap_or_default())
    }

    fn start_playback(&self, device_id: &str, playable_id: &str) -> Result<(), RemoteError> {
        let request = self
            .http
            .put(self.url("/me/player/play"))
            .query(&[("device_id", device_id)])
            .json(&serde_json::json!({ "uris": [playable_id] }));

        self.send(request)?;

        Ok(())
    }
}

/// Converts a non-success response into [`RemoteError::Api`], preferring the
/// message from the Web API's error object over the bare status text.
fn check_status(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorDto>(&body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());

    Err(RemoteError::Api {
        status: status.as_u16(),
        message,
    })
}

#[derive(Debug, Deserialize)]
struct CurrentPlaybackDto {
    device: Option<DeviceDto>,
    progress_ms: Option<u64>,
    #[serde(default)]
    is_playing: bool,
    item: Option<TrackDto>,
}

#[derive(Debug, Deserialize)]
struct TrackDto {
    name: String,
    #[serde(default)]
    duration_ms: u64,
    #[serde(default)]
    artists: Vec<ArtistDto>,
    album: Option<AlbumDto>,
    #[serde(default)]
    uri: String,
}

#[derive(Debug, Deserialize)]
struct ArtistDto {
    name: String,
}

#[derive(Debug, Deserialize)]
struct AlbumDto {
    name: String,
}

#[derive(Debug, Deserialize)]
struct DeviceDto {
    id: Option<String>,
    name: String,
    #[serde(default)]
    is_active: bool,
}

#[derive(Debug, Deserialize)]
struct DevicesDto {
    devices: Vec<DeviceDto>,
}

#[derive(Debug, Deserialize)]
struct SearchDto {
    tracks: PagingDto,
}

#[derive(Debug, Deserialize)]
struct PagingDto {
    // The search endpoint occasionally returns null entries
    items: Vec<Option<TrackDto>>,
}

#[derive(Debug, Deserialize)]
struct ErrorDto {
    error: ErrorBodyDto,
}

#[derive(Debug, Deserialize)]
struct ErrorBodyDto {
    message: String,
}

fn first_artist(track: &TrackDto) -> String {
    track
        .artists
        .first()
        .map(|a| a.name.clone())
        .unwrap_or_default()
}

fn snapshot_from_dto(playback: CurrentPlaybackDto) -> Option<PlaybackSnapshot> {
    let item = playback.item?;

    Some(PlaybackSnapshot {
        title: clean_name(&item.name),
        artist: first_artist(&item),
        album: item.album.as_ref().map(|a| clean_name(&a.name)).unwrap_or_default(),
        device: playback.device.map(|d| d.name).unwrap_or_default(),
        duration: item.duration_ms / 1000,
        elapsed: playback.progress_ms.unwrap_or(0) / 1000,
        is_playing: playback.is_playing,
    })
}

fn results_from_dto(search: SearchDto) -> Vec<SearchResult> {
    search
        .tracks
        .items
        .into_iter()
        .flatten()
        .map(|track| SearchResult {
            artist: first_artist(&track),
            title: track.name,
            playable_id: track.uri,
        })
        .collect()
}

fn devices_from_dto(devices: DevicesDto) -> Vec<Device> {
    devices
        .devices
        .into_iter()
        .filter_map(|d| {
            Some(Device {
                id: d.id?,
                name: d.name,
                is_active: d.is_active,
            })
        })
        .collect()
}
