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

//! Raw keyboard input processing.
//!
//! The key reader thread blocks on the next terminal event indefinitely.
//! Each decoded key is applied to the search session in one critical section,
//! then any remote call the transition asks for is made with the lock
//! released and its outcome applied in a second critical section.

use std::{
    sync::{Arc, mpsc::SyncSender},
    thread,
    time::Instant,
};

use crossterm::event;
use tracing::{error, info, warn};

use crate::{
    events::AppEvent,
    input::{self, Effect, InputKey, decode_event},
    model::SearchResult,
    remote::{self, PlayError, PlaybackService},
    search::SEARCH_LIMIT,
    state::SharedState,
};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// Spawns a thread to translate raw key events into state transitions.
///
/// The thread sends [`AppEvent::ExitApplication`] when the user quits, or
/// [`AppEvent::FatalError`] if the terminal can no longer be read.
pub(crate) fn spawn_key_reader(
    state: SharedState,
    service: Arc<dyn PlaybackService>,
    event_tx: SyncSender<AppEvent>,
) {
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(e) => {
                    error!("Terminal input failed: {}", e);
                    let _ = event_tx.send(AppEvent::FatalError(format!("Failed to read terminal input: {}", e)));
                    break;
                }
            };

            let Some(key) = decode_event(&event) else {
                continue;
            };

            if handle_key(&state, service.as_ref(), key) == Flow::Exit {
                let _ = event_tx.send(AppEvent::ExitApplication);
                break;
            }
        }
    });
}

/// Applies one logical key, running any remote call it triggers.
pub(crate) fn handle_key(state: &SharedState, service: &dyn PlaybackService, key: InputKey) -> Flow {
    let effect = state.update(|s| input::transition(&mut s.session, key));

    match effect {
        None => {}

        Some(Effect::Quit) => return Flow::Exit,

        Some(Effect::Search(query)) => {
            let results = search(service, &query);
            state.update(|s| s.session.complete_submit(results));
        }

        Some(Effect::Play(playable_id)) => {
            if let Err(e) = remote::play_track(service, &playable_id) {
                match &e {
                    PlayError::NoActiveDevice => warn!("Cannot play {}: {}", playable_id, e),
                    PlayError::Remote(_) => error!("Cannot play {}: {}", playable_id, e),
                }
                state.update(|s| s.set_notice(e.to_string(), Instant::now()));
            }
        }
    }

    Flow::Continue
}

/// Runs a search, a failed search yields no results.
fn search(service: &dyn PlaybackService, query: &str) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }

    match service.search_tracks(query, SEARCH_LIMIT) {
        Ok(results) => {
            info!("Search for '{}' found {} tracks", query, results.len());
            results
        }
        Err(e) => {
            warn!("Search for '{}' failed: {}", query, e);
            vec![]
        }
    }
}
