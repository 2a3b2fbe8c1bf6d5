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

//! The render loop and the events that drive it.
//!
//! The main thread sits in [`process_events`], receiving [`AppEvent`]s from
//! the background threads. A tick thread (see [`spawn_frame_ticker`]) sends
//! [`AppEvent::Tick`] at a fixed frame rate. On each tick the loop advances
//! the time-based state and captures a view under the lock, releases it, then
//! draws the frame.

use std::{
    io::Stdout,
    sync::mpsc::{Receiver, SyncSender, TrySendError},
    thread,
    time::{Duration, Instant},
};

use anyhow::{Result, anyhow};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::info;

use crate::{
    render::{DashboardView, draw},
    state::SharedState,
    theme::Theme,
    util::ticker::Ticker,
};

/// Interval between frames, 20 frames per second.
pub(crate) const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Capacity of the event channel. Ticks that find it full are dropped, so a
/// stalled terminal gets one catch-up frame rather than a burst.
pub(crate) const EVENT_QUEUE_DEPTH: usize = 1;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Tick,

    ExitApplication,

    FatalError(String),
}

/// Spawns a thread to send a periodic tick application event, this is the
/// frame rate for rendering the dashboard.
///
/// The thread ends when the receiving side of the channel is dropped.
pub(crate) fn spawn_frame_ticker(event_tx: SyncSender<AppEvent>) {
    thread::spawn(move || {
        let mut ticker = Ticker::new(FRAME_INTERVAL);
        loop {
            ticker.wait();
            if !send_tick(&event_tx) {
                break;
            }
        }
    });
}

/// Queues a tick unless one is already pending. Returns `false` once the
/// receiver has gone.
fn send_tick(event_tx: &SyncSender<AppEvent>) -> bool {
    !matches!(event_tx.try_send(AppEvent::Tick), Err(TrySendError::Disconnected(_)))
}

/// Runs the main application loop, rendering a frame on every tick.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error if drawing to the terminal fails, or if a background
/// thread reports a fatal error.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    event_rx: &Receiver<AppEvent>,
    state: &SharedState,
    theme: &Theme,
) -> Result<()> {
    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Tick => {
                let view = capture_frame(state, Instant::now());
                terminal.draw(|f| draw(f, &view, theme))?;
            }
            AppEvent::ExitApplication => {
                info!("Exit requested");
                break;
            }
            AppEvent::FatalError(message) => return Err(anyhow!(message)),
        }
    }

    Ok(())
}

/// Advances the clock and captures the frame's view in one critical section.
fn capture_frame(state: &SharedState, now: Instant) -> DashboardView {
    state.update(|s| {
        s.tick(now);
        DashboardView::capture(s)
    })
}
