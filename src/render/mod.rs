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

//! User interface rendering logic.
//!
//! This module handles the translation of the dashboard state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! 1. **Capture**: [`DashboardView::capture`] copies everything a frame needs
//!    out of the shared state. It is called with the state lock held, and
//!    does nothing else.
//! 2. **Draw**: [`draw`] lays out the playback panel (or the idle placeholder),
//!    the search panel and the notice line from the captured view, with the
//!    lock already released.

mod icons;
mod player;
mod search;
mod splash;

pub(crate) use splash::draw_splash;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::{
    search::{Mode, VISIBLE_ROWS},
    state::DashboardState,
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DashboardView {
    pub(crate) playback: Option<PlaybackPanel>,
    pub(crate) search: SearchPanel,
    pub(crate) notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlaybackPanel {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) album: String,
    pub(crate) device: String,
    /// Estimated elapsed seconds, clamped to the duration for display.
    pub(crate) elapsed: u64,
    pub(crate) duration: u64,
    pub(crate) is_playing: bool,
}

impl PlaybackPanel {
    /// Progress through the track in the range `0.0..=1.0`.
    pub(crate) fn ratio(&self) -> f64 {
        if self.duration == 0 {
            return 0.0;
        }
        (self.elapsed as f64 / self.duration as f64).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchPanel {
    pub(crate) mode: Mode,
    pub(crate) query: String,
    pub(crate) cursor: usize,
    /// The visible window of results, empty while typing.
    pub(crate) rows: Vec<SearchRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchRow {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) selected: bool,
}

impl DashboardView {
    /// Copies a consistent view of `state`.
    pub(crate) fn capture(state: &DashboardState) -> Self {
        let playback = state.clock.snapshot().map(|snapshot| PlaybackPanel {
            title: snapshot.title.clone(),
            artist: snapshot.artist.clone(),
            album: snapshot.album.clone(),
            device: snapshot.device.clone(),
            elapsed: state.clock.elapsed().min(snapshot.duration),
            duration: snapshot.duration,
            is_playing: snapshot.is_playing,
        });

        let session = &state.session;
        let rows = match session.mode() {
            Mode::Typing => vec![],
            Mode::Browsing => session
                .visible_results()
                .map(|(index, result)| SearchRow {
                    title: result.title.clone(),
                    artist: result.artist.clone(),
                    selected: index == session.selected(),
                })
                .collect(),
        };

        Self {
            playback,
            search: SearchPanel {
                mode: session.mode(),
                query: session.query().to_string(),
                cursor: session.cursor(),
                rows,
            },
            notice: state.notice().map(|n| n.message.clone()),
        }
    }
}

/// Renders the dashboard to the terminal frame.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `view` - The captured dashboard state to draw.
/// * `theme` - Colours for every panel.
pub(crate) fn draw(f: &mut Frame, view: &DashboardView, theme: &Theme) {
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(theme.background_colour)), area);

    let search_height = match view.search.mode {
        Mode::Typing => 3,
        Mode::Browsing => 3 + view.search.rows.len().clamp(1, VISIBLE_ROWS) as u16,
    };

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(player::PANEL_HEIGHT),
            Constraint::Length(search_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    match &view.playback {
        Some(panel) => panel.draw(f, outer[0], theme),
        None => player::draw_idle(f, outer[0], theme),
    }

    view.search.draw(f, outer[1], theme);

    if let Some(notice) = &view.notice {
        let line = Line::styled(format!(" {}", notice), Style::default().fg(theme.error_fg));
        f.render_widget(Paragraph::new(line), outer[2]);
    }
}
