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

//! # Spotify Now Playing Dashboard.
//!
//! A terminal dashboard showing what is currently playing on a Spotify
//! account, with a search box to find and play a different track.
//!
//! Three concurrent activities share one piece of state:
//!
//! * The **Poller** fetches the current playback snapshot on a configurable
//!   interval.
//! * The **Key Reader** blocks on keyboard input and drives the search
//!   session, making search and play calls to the remote service.
//! * The **Main Thread** renders the dashboard on every frame tick, advancing
//!   the elapsed time estimate between polls.
//!
//! ## Architecture
//!
//! All state lives behind a single mutex, held only for short in-memory
//! updates and never across a network call. The background threads report
//! exit and fatal errors to the main thread via `std::sync::mpsc` channels.
//! The terminal is restored on every exit path, including panics.

mod clock;
mod config;
mod events;
mod input;
mod logging;
mod model;
mod remote;
mod render;
mod search;
mod state;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io,
    sync::{Arc, mpsc},
    thread,
    time::{Duration, Instant},
};
use tracing::info;

use crate::{
    events::{EVENT_QUEUE_DEPTH, process_events, spawn_frame_ticker},
    remote::{PlaybackService, SpotifyClient},
    state::SharedState,
    tasks::{spawn_key_reader, spawn_poller},
    theme::Theme,
    util::term::{self, TerminalGuard},
};

/// How long the loading screen stays up before the live view starts.
const SPLASH_DURATION: Duration = Duration::from_secs(1);

/// The entry point of the application.
///
/// Sets up logging, configuration and the remote client, manages the terminal
/// lifecycle, and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    logging::init();

    let config = config::load_config();
    let poll_interval = config.poll_interval();

    let client = SpotifyClient::new(&config.api_base_url, config.access_token.clone())
        .context("Failed to initalise Spotify client")?;
    let service: Arc<dyn PlaybackService> = Arc::new(client);

    info!("Starting");

    let theme = Theme::default();
    let state = SharedState::new(Instant::now());

    term::install_panic_hook();

    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    let background = Theme::to_hex(theme.background_colour);
    let guard = TerminalGuard::enter(background.as_deref())?;

    let res = run(&state, service, poll_interval, &theme);

    drop(guard);
    info!("Stopped");

    res.context("Application error occurred")
}

/// Starts the background workers and enters the render loop.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven or a background thread
/// reports a fatal error.
fn run(
    state: &SharedState,
    service: Arc<dyn PlaybackService>,
    poll_interval: Duration,
    theme: &Theme,
) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    // Shown before the workers start, so the first poll lands on the live view
    terminal.draw(|f| render::draw_splash(f, theme)).context("Failed to draw loading screen")?;
    thread::sleep(SPLASH_DURATION);

    let (event_tx, event_rx) = mpsc::sync_channel(EVENT_QUEUE_DEPTH);

    spawn_poller(state.clone(), Arc::clone(&service), poll_interval);
    spawn_key_reader(state.clone(), service, event_tx.clone());
    spawn_frame_ticker(event_tx);

    process_events(&mut terminal, &event_rx, state, theme)
}
