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

//! Render the search panel.
//!
//! While typing only the query line is shown, with the terminal cursor placed
//! in it. While browsing the query line is followed by the visible window of
//! results, with the selected row highlighted.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    render::{Render, SearchPanel, icons::SEARCH_PROMPT},
    search::Mode,
    theme::Theme,
};

impl Render for SearchPanel {
    fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = match self.mode {
            Mode::Typing => " Search Spotify ",
            Mode::Browsing => " Search & Play ",
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme.search_border_colour))
            .style(Style::default().bg(theme.background_colour))
            .padding(Padding::horizontal(1));

        let inner_area = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner_area);

        let prompt = Line::styled(
            format!("{}{}", SEARCH_PROMPT, self.query),
            Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour),
        );
        f.render_widget(Paragraph::new(prompt), rows[0]);

        match self.mode {
            Mode::Typing => {
                let column = SEARCH_PROMPT.len().saturating_add(self.cursor);
                let cursor_x = u16::try_from(column)
                    .ok()
                    .and_then(|column| rows[0].x.checked_add(column))
                    .filter(|x| *x < rows[0].right());
                if let Some(x) = cursor_x {
                    f.set_cursor_position((x, rows[0].y));
                }
            }
            Mode::Browsing => self.draw_results(f, rows[1], theme),
        }
    }
}

impl SearchPanel {
    fn draw_results(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        if self.rows.is_empty() {
            let empty = Line::styled("No results", Style::default().fg(theme.error_fg));
            f.render_widget(Paragraph::new(empty), area);
            return;
        }

        let rows = self.rows.iter().map(|row| {
            let style = if row.selected {
                Style::default().add_modifier(Modifier::BOLD).fg(theme.title_fg)
            } else {
                Style::default().fg(theme.muted_fg)
            };

            Row::new(vec![Cell::from(row.title.as_str()), Cell::from(row.artist.as_str())]).style(style)
        });

        let table = Table::new(rows, [Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]);
        f.render_widget(table, area);
    }
}
