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

//! Keyboard input state machine.
//!
//! Logical keys (see [`keys`]) drive a two-state machine over the
//! [`SearchSession`]:
//!
//! | Mode     | Key                     | Action           | Next mode |
//! |----------|-------------------------|------------------|-----------|
//! | Typing   | printable character     | append to query  | Typing    |
//! | Typing   | backspace               | delete last char | Typing    |
//! | Typing   | enter                   | search           | Browsing  |
//! | Browsing | up, down, `k`, `j`      | move selection   | Browsing  |
//! | Browsing | enter                   | play selection   | Typing    |
//! | Browsing | `b`                     | cancel           | Typing    |
//!
//! Ctrl-C quits from either mode, any other key is ignored.
//!
//! [`transition`] is a pure state mutation. Anything that needs the remote
//! service is returned as an [`Effect`] for the caller to run once the shared
//! state lock has been released.

pub(crate) mod keys;

pub(crate) use keys::{InputKey, decode_event};

use crate::search::{Direction, Mode, SearchSession};

const KEY_NAV_DOWN: char = 'j';
const KEY_NAV_UP: char = 'k';
const KEY_CANCEL: char = 'b';

/// Work requested by a transition that must happen outside the lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Effect {
    /// Search for the query, then complete the submit with the results.
    Search(String),
    /// Start playback of the playable id. The session has already been reset.
    Play(String),
    Quit,
}

/// Applies a single key to the session according to the current mode.
pub(crate) fn transition(session: &mut SearchSession, key: InputKey) -> Option<Effect> {
    if key == InputKey::Interrupt {
        return Some(Effect::Quit);
    }

    match session.mode() {
        Mode::Typing => match key {
            InputKey::Char(c) => session.append_char(c),
            InputKey::Backspace => session.backspace(),
            InputKey::Enter => return session.submit().map(Effect::Search),
            _ => {}
        },

        Mode::Browsing => match key {
            InputKey::Up | InputKey::Char(KEY_NAV_UP) => session.move_selection(Direction::Up),
            InputKey::Down | InputKey::Char(KEY_NAV_DOWN) => session.move_selection(Direction::Down),
            InputKey::Enter => return session.select_and_play().map(Effect::Play),
            InputKey::Char(KEY_CANCEL) => session.cancel(),
            _ => {}
        },
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::testing::result;

    fn feed(session: &mut SearchSession, keys: &[InputKey]) -> Vec<Effect> {
        keys.iter().filter_map(|k| transition(session, *k)).collect()
    }

    fn chars(text: &str) -> Vec<InputKey> {
        text.chars().map(InputKey::Char).collect()
    }

    fn browsing(count: usize) -> SearchSession {
        let mut session = SearchSession::new();
        session.complete_submit((0..count).map(result).collect());
        session
    }

    #[test]
    fn typing_collects_the_query() {
        let mut session = SearchSession::new();

        let mut keys = chars("abc");
        keys.push(InputKey::Backspace);
        let effects = feed(&mut session, &keys);

        assert!(effects.is_empty());
        assert_eq!(session.query(), "ab");
        assert_eq!(session.mode(), Mode::Typing);
    }

    #[test]
    fn navigation_shortcuts_are_text_while_typing() {
        let mut session = SearchSession::new();

        feed(&mut session, &chars("jkb"));
        feed(&mut session, &[InputKey::Up, InputKey::Down]);

        assert_eq!(session.query(), "jkb");
        assert_eq!(session.mode(), Mode::Typing);
    }

    #[test]
    fn enter_while_typing_requests_search() {
        let mut session = SearchSession::new();

        let mut keys = chars("daft punk");
        keys.push(InputKey::Enter);
        let effects = feed(&mut session, &keys);

        assert_eq!(effects, vec![Effect::Search("daft punk".to_string())]);
        // The mode changes once the results arrive
        assert_eq!(session.mode(), Mode::Typing);
    }

    #[test]
    fn arrows_and_shortcuts_navigate_while_browsing() {
        let mut session = browsing(8);

        feed(&mut session, &[InputKey::Down, InputKey::Char('j'), InputKey::Down]);
        assert_eq!(session.selected(), 3);

        feed(&mut session, &[InputKey::Up, InputKey::Char('k')]);
        assert_eq!(session.selected(), 1);
    }

    #[test]
    fn text_is_ignored_while_browsing() {
        let mut session = browsing(3);

        feed(&mut session, &chars("xyz"));
        feed(&mut session, &[InputKey::Backspace]);

        assert_eq!(session.query(), "");
        assert_eq!(session.mode(), Mode::Browsing);
    }

    #[test]
    fn enter_while_browsing_plays_selection() {
        let mut session = browsing(5);

        let effects = feed(&mut session, &[InputKey::Down, InputKey::Down, InputKey::Enter]);

        assert_eq!(effects, vec![Effect::Play("spotify:track:2".to_string())]);
        assert_eq!(session.mode(), Mode::Typing);
        assert!(session.results().is_empty());
    }

    #[test]
    fn enter_on_empty_results_does_nothing() {
        let mut session = browsing(0);

        let effects = feed(&mut session, &[InputKey::Enter]);

        assert!(effects.is_empty());
        assert_eq!(session.mode(), Mode::Browsing);
    }

    #[test]
    fn cancel_returns_to_typing() {
        let mut session = browsing(4);

        let effects = feed(&mut session, &[InputKey::Down, InputKey::Char('b')]);

        assert!(effects.is_empty());
        assert_eq!(session.mode(), Mode::Typing);
        assert!(session.results().is_empty());
    }

    #[test]
    fn interrupt_quits_from_either_mode() {
        assert_eq!(transition(&mut SearchSession::new(), InputKey::Interrupt), Some(Effect::Quit));
        assert_eq!(transition(&mut browsing(2), InputKey::Interrupt), Some(Effect::Quit));
    }
}
