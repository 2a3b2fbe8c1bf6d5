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

//! Periodic polling of the remote playback state.

use std::{
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

use tracing::{debug, info, warn};

use crate::{remote::PlaybackService, state::SharedState, util::ticker::Ticker};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PollOutcome {
    Updated,
    NothingPlaying,
    Failed,
}

/// Spawns the poller thread, polling once immediately and then every
/// `interval`.
pub(crate) fn spawn_poller(state: SharedState, service: Arc<dyn PlaybackService>, interval: Duration) {
    info!("Polling playback every {}s", interval.as_secs_f32());

    thread::spawn(move || {
        let mut ticker = Ticker::new(interval);
        loop {
            ticker.wait();
            poll_once(&state, service.as_ref());
        }
    });
}

/// Fetches the current playback and, if something is playing, installs it as
/// the new snapshot.
///
/// Nothing playing and remote failures both leave the previous snapshot on
/// display. A paused or muted player is a normal condition, so failures are
/// only logged.
pub(crate) fn poll_once(state: &SharedState, service: &dyn PlaybackService) -> PollOutcome {
    match service.current_playback() {
        Ok(Some(snapshot)) => {
            debug!(
                "Polled '{}' at {}s of {}s, playing: {}",
                snapshot.title, snapshot.elapsed, snapshot.duration, snapshot.is_playing
            );
            state.update(|s| s.apply_snapshot(snapshot, Instant::now()));
            PollOutcome::Updated
        }
        Ok(None) => {
            debug!("Nothing playing, keeping previous snapshot");
            PollOutcome::NothingPlaying
        }
        Err(e) => {
            warn!("Playback poll failed: {}", e);
            PollOutcome::Failed
        }
    }
}
