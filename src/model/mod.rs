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

//! Domain models and core data structures.
//!
//! This module defines the values exchanged with the remote playback service:
//! point-in-time playback snapshots, search results and output devices.

/// A single point-in-time readout of what the remote service reports as
/// currently playing.
///
/// Snapshots are never mutated, a successful poll replaces the previous one
/// wholesale. `elapsed` is not guaranteed to be less than `duration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaybackSnapshot {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) album: String,
    pub(crate) device: String,
    pub(crate) duration: u64,
    pub(crate) elapsed: u64,
    pub(crate) is_playing: bool,
}

/// A track matching a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchResult {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) playable_id: String,
}

/// An output device able to receive playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Device {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) is_active: bool,
}

/// Strips parenthesised qualifiers such as "(Remastered 2011)" or
/// "(feat. Someone)" from a track or album name.
pub(crate) fn clean_name(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    let mut rest = name;

    // A group runs from an opening bracket to the first closing one, an
    // unclosed tail is kept as written
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        cleaned.push_str(rest[..open].trim_end());
        rest = &rest[open + close + 1..];
    }
    cleaned.push_str(rest);

    cleaned.trim().to_string()
}
