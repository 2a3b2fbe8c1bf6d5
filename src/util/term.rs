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

//! Terminal environment and styling utilities.
//!
//! This module owns the terminal lifecycle: raw mode, the alternate screen
//! and the background colour. [`TerminalGuard`] acquires all of them and
//! restores them when dropped, and [`install_panic_hook`] restores them
//! before a panic report is printed.
//!
//! # Compatibility
//!
//! The background colour relies on the terminal emulator supporting OSC 11
//! and OSC 111. Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support
//! these sequences.

use std::{
    io::{self, Write},
    panic,
};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Sets the terminal background color using an OSC 11 escape sequence.
///
/// # Arguments
///
/// * `hex_color` - A string slice representing the color (e.g., `"#1e1e1e"`).
pub(crate) fn set_terminal_bg(hex_color: &str) {
    print!("\x1b]11;{}\x07", hex_color);
    let _ = io::stdout().flush();
}

/// Resets the terminal background to its default color.
///
/// This sends the OSC 111 escape sequence, which instructs the terminal to
/// revert the background color to the user's original configuration.
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    let _ = io::stdout().flush();
}

/// Scoped ownership of the terminal's raw mode and alternate screen.
pub(crate) struct TerminalGuard;

impl TerminalGuard {
    /// Prepares the terminal for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or if the alternate
    /// screen cannot be entered. Anything already changed is restored first.
    pub(crate) fn enter(background_hex: Option<&str>) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode, a terminal is required")?;

        // From here on dropping the guard undoes whatever succeeded
        let guard = Self;

        if let Some(hex) = background_hex {
            set_terminal_bg(hex);
        }
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Best-effort restore of the terminal to its original state.
///
/// Safe to call more than once.
pub(crate) fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    reset_terminal_bg();
}

/// Chains a panic hook that restores the terminal before the default hook
/// prints the panic message, otherwise the report is lost on the alternate
/// screen.
pub(crate) fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}
