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

//! Decoding of raw terminal key events into logical keys.
//!
//! The terminal backend already parses escape sequences such as `ESC [ A`
//! into key codes, this module narrows those down to the small alphabet the
//! input state machine understands.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputKey {
    Char(char),
    Backspace,
    Enter,
    Up,
    Down,
    /// Ctrl-C, raw mode delivers it as a key rather than a signal.
    Interrupt,
}

/// Decodes a terminal event, returning `None` for events with no meaning to
/// the dashboard (mouse, resize, key releases, unbound keys).
pub(crate) fn decode_event(event: &Event) -> Option<InputKey> {
    match event {
        Event::Key(key) => decode_key(key),
        _ => None,
    }
}

pub(crate) fn decode_key(key: &KeyEvent) -> Option<InputKey> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(InputKey::Interrupt),
            // Some terminals send backspace as Ctrl-H
            KeyCode::Char('h') => Some(InputKey::Backspace),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) if !c.is_control() => Some(InputKey::Char(c)),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_characters_decode_as_chars() {
        assert_eq!(decode_key(&key(KeyCode::Char('a'), KeyModifiers::NONE)), Some(InputKey::Char('a')));
        assert_eq!(decode_key(&key(KeyCode::Char('A'), KeyModifiers::SHIFT)), Some(InputKey::Char('A')));
        assert_eq!(decode_key(&key(KeyCode::Char(' '), KeyModifiers::NONE)), Some(InputKey::Char(' ')));
        assert_eq!(decode_key(&key(KeyCode::Char('é'), KeyModifiers::NONE)), Some(InputKey::Char('é')));
    }

    #[test]
    fn editing_and_arrow_keys_decode() {
        assert_eq!(decode_key(&key(KeyCode::Backspace, KeyModifiers::NONE)), Some(InputKey::Backspace));
        assert_eq!(decode_key(&key(KeyCode::Enter, KeyModifiers::NONE)), Some(InputKey::Enter));
        assert_eq!(decode_key(&key(KeyCode::Up, KeyModifiers::NONE)), Some(InputKey::Up));
        assert_eq!(decode_key(&key(KeyCode::Down, KeyModifiers::NONE)), Some(InputKey::Down));
    }

    #[test]
    fn control_chords() {
        assert_eq!(decode_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(InputKey::Interrupt));
        assert_eq!(decode_key(&key(KeyCode::Char('h'), KeyModifiers::CONTROL)), Some(InputKey::Backspace));
        assert_eq!(decode_key(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn unbound_keys_and_releases_are_ignored() {
        assert_eq!(decode_key(&key(KeyCode::Esc, KeyModifiers::NONE)), None);
        assert_eq!(decode_key(&key(KeyCode::Left, KeyModifiers::NONE)), None);
        assert_eq!(decode_key(&key(KeyCode::Tab, KeyModifiers::NONE)), None);

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(decode_key(&release), None);
    }

    #[test]
    fn non_key_events_are_ignored() {
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });

        assert_eq!(decode_event(&mouse), None);
        assert_eq!(decode_event(&Event::Resize(80, 24)), None);
        assert_eq!(decode_event(&Event::Key(key(KeyCode::Enter, KeyModifiers::NONE))), Some(InputKey::Enter));
    }
}
