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

//! Render the now playing panel.
//!
//! This module renders the visual representation of the current track, the
//! play/pause state, the progress gauge and the output device, or a
//! placeholder when nothing has been reported as playing yet.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    render::{
        PlaybackPanel, Render,
        icons::{ICON_ALBUM, ICON_PAUSE, ICON_PLAY, ICON_TRACK, SEPARATOR},
    },
    theme::Theme,
    util,
};

/// Borders plus the metadata, progress and device rows.
pub(super) const PANEL_HEIGHT: u16 = 5;

const GAUGE_WIDTH: u16 = 30;

const IDLE_MESSAGE: &str = "This silence feels personal. Play something, will ya?";

impl Render for PlaybackPanel {
    fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Spotify ")
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.background_colour))
            .padding(Padding::horizontal(1));

        let inner_area = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
            .split(inner_area);

        let bold = Style::default().add_modifier(Modifier::BOLD);

        let meta_line = Line::from(vec![
            Span::raw(format!("{} ", ICON_TRACK)),
            Span::styled(&self.title, bold.fg(theme.title_fg)),
            Span::raw(SEPARATOR),
            Span::styled(&self.artist, Style::default().fg(theme.artist_fg)),
            Span::raw(SEPARATOR),
            Span::raw(format!("{} ", ICON_ALBUM)),
            Span::styled(
                &self.album,
                Style::default().add_modifier(Modifier::ITALIC).fg(theme.album_fg),
            ),
        ]);
        f.render_widget(Paragraph::new(meta_line), rows[0]);

        let progress = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(GAUGE_WIDTH),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(rows[1]);

        let icon = if self.is_playing { ICON_PLAY } else { ICON_PAUSE };
        f.render_widget(
            Paragraph::new(Span::styled(icon, bold.fg(theme.accent_colour))),
            progress[0],
        );

        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(theme.accent_colour)
                    .bg(theme.gauge_track_colour),
            )
            .ratio(self.ratio())
            .label("")
            .use_unicode(true);
        f.render_widget(gauge, progress[1]);

        let time_line = Line::from(vec![
            Span::styled(util::format::format_time(self.elapsed), bold.fg(theme.elapsed_fg)),
            Span::styled(" / ", Style::default().fg(theme.muted_fg)),
            Span::styled(util::format::format_time(self.duration), bold.fg(theme.duration_fg)),
        ]);
        f.render_widget(Paragraph::new(time_line), progress[3]);

        let device = Line::styled(format!("Device: {}", self.device), Style::default().fg(theme.muted_fg));
        f.render_widget(Paragraph::new(device), rows[2]);
    }
}

/// Renders the placeholder shown until the first snapshot arrives.
pub(super) fn draw_idle(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Spotify ")
        .border_style(Style::default().fg(theme.idle_border_colour))
        .style(Style::default().bg(theme.background_colour));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)])
        .split(inner_area);

    let message = Paragraph::new(Line::styled(IDLE_MESSAGE, Style::default().fg(theme.muted_fg)))
        .alignment(Alignment::Center);
    f.render_widget(message, rows[1]);
}
