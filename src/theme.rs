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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) search_border_colour: Color,
    pub(crate) idle_border_colour: Color,
    pub(crate) gauge_track_colour: Color,

    pub(crate) title_fg: Color,
    pub(crate) artist_fg: Color,
    pub(crate) album_fg: Color,
    pub(crate) elapsed_fg: Color,
    pub(crate) duration_fg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) error_fg: Color,
    pub(crate) loading_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(18, 18, 18),
            accent_colour: Color::Rgb(29, 185, 84),
            search_border_colour: Color::Rgb(0, 205, 205),
            idle_border_colour: Color::Rgb(205, 49, 49),
            gauge_track_colour: Color::Rgb(77, 77, 77),

            title_fg: Color::Rgb(255, 255, 255),
            artist_fg: Color::Rgb(29, 185, 84),
            album_fg: Color::Rgb(0, 205, 205),
            elapsed_fg: Color::Rgb(229, 229, 16),
            duration_fg: Color::Rgb(0, 205, 205),
            muted_fg: Color::Rgb(128, 128, 128),
            error_fg: Color::Rgb(205, 49, 49),
            loading_fg: Color::Rgb(30, 144, 255),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Non-RGB colours have no fixed value and yield
    /// `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
