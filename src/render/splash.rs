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

//! Render the loading screen shown while the dashboard starts up.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::Theme;

const LOADING_MESSAGE: &str = "Loading Spotify...";

pub(crate) fn draw_splash(f: &mut Frame, theme: &Theme) {
    let area = f.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.search_border_colour))
        .style(Style::default().bg(theme.background_colour));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)])
        .split(inner_area);

    let message = Line::styled(
        LOADING_MESSAGE,
        Style::default().add_modifier(Modifier::BOLD).fg(theme.loading_fg),
    );
    f.render_widget(Paragraph::new(message).alignment(Alignment::Center), rows[1]);
}
