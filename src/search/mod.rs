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

//! Search session state and result list navigation.
//!
//! A [`SearchSession`] holds the query being typed, the results of the last
//! submitted query, and the selection and viewport within those results. It
//! is pure data: the remote search and play calls are made by the input task
//! and their outcome is fed back in.
//!
//! Operations that do not apply in the current [`Mode`] are no-ops.

use tui_input::{Input, InputRequest};

use crate::model::SearchResult;

/// Maximum number of result rows shown at once.
pub(crate) const VISIBLE_ROWS: usize = 5;

/// Maximum number of results requested per search.
pub(crate) const SEARCH_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Free-text query entry.
    Typing,
    /// Navigating the results of a submitted query.
    Browsing,
}

/// Direction of a single-step selection move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub(crate) struct SearchSession {
    query: Input,
    results: Vec<SearchResult>,
    selected: usize,
    scroll_offset: usize,
    mode: Mode,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub(crate) fn new() -> Self {
        Self {
            query: Input::default(),
            results: vec![],
            selected: 0,
            scroll_offset: 0,
            mode: Mode::Typing,
        }
    }

    pub(crate) fn mode(&self) -> Mode {
        self.mode
    }

    pub(crate) fn query(&self) -> &str {
        self.query.value()
    }

    /// Cursor position within the query, in characters.
    pub(crate) fn cursor(&self) -> usize {
        self.query.visual_cursor()
    }

    pub(crate) fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// The results inside the viewport, paired with their index in the full
    /// result list.
    pub(crate) fn visible_results(&self) -> impl Iterator<Item = (usize, &SearchResult)> {
        self.results
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(VISIBLE_ROWS)
    }

    pub(crate) fn append_char(&mut self, c: char) {
        if self.mode == Mode::Typing {
            self.query.handle(InputRequest::InsertChar(c));
        }
    }

    pub(crate) fn backspace(&mut self) {
        if self.mode == Mode::Typing {
            self.query.handle(InputRequest::DeletePrevChar);
        }
    }

    /// Returns the query to search for, or `None` if not typing.
    ///
    /// The session is unchanged until [`SearchSession::complete_submit`] is
    /// called with the outcome, so the remote call can be made without
    /// holding a reference to the session.
    pub(crate) fn submit(&self) -> Option<String> {
        (self.mode == Mode::Typing).then(|| self.query.value().to_string())
    }

    /// Replaces the results wholesale and switches to browsing them.
    ///
    /// A failed search is passed in as an empty result list.
    pub(crate) fn complete_submit(&mut self, results: Vec<SearchResult>) {
        if self.mode != Mode::Typing {
            return;
        }
        self.results = results;
        self.selected = 0;
        self.scroll_offset = 0;
        self.mode = Mode::Browsing;
    }

    pub(crate) fn move_selection(&mut self, direction: Direction) {
        if self.mode != Mode::Browsing || self.results.is_empty() {
            return;
        }

        let len = self.results.len();
        self.selected = match direction {
            Direction::Up => (self.selected + len - 1) % len,
            Direction::Down => (self.selected + 1) % len,
        };
        self.scroll_offset = adjust_scroll(self.selected, self.scroll_offset, VISIBLE_ROWS, len);
    }

    /// Returns the playable id of the selected result and resets the session,
    /// or `None` (leaving the session untouched) if there is nothing to play.
    pub(crate) fn select_and_play(&mut self) -> Option<String> {
        if self.mode != Mode::Browsing {
            return None;
        }

        let playable_id = self.results.get(self.selected)?.playable_id.clone();
        self.reset();
        Some(playable_id)
    }

    pub(crate) fn cancel(&mut self) {
        if self.mode == Mode::Browsing {
            self.reset();
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Computes the scroll offset that keeps `selected` inside a window of
/// `window` rows over a list of `total` rows, moving the current `offset` by
/// the smallest amount necessary.
///
/// A single-step move past either edge of the window shifts it by exactly one
/// row. A wraparound move jumps the window to the other end of the list.
pub(crate) fn adjust_scroll(selected: usize, offset: usize, window: usize, total: usize) -> usize {
    if window == 0 || total <= window {
        return 0;
    }

    let max_offset = total - window;
    let offset = if selected < offset {
        selected
    } else if selected >= offset + window {
        selected + 1 - window
    } else {
        offset
    };

    offset.min(max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::testing::result;

    fn browsing(count: usize) -> SearchSession {
        let mut session = SearchSession::new();
        session.complete_submit((0..count).map(result).collect());
        session
    }

    fn type_text(session: &mut SearchSession, text: &str) {
        for c in text.chars() {
            session.append_char(c);
        }
    }

    fn assert_viewport(session: &SearchSession) {
        let (selected, offset) = (session.selected(), session.scroll_offset());
        assert!(selected < session.results().len());
        assert!(offset <= selected, "offset {} > selected {}", offset, selected);
        assert!(selected < offset + VISIBLE_ROWS, "selected {} beyond window at {}", selected, offset);
    }

    #[test]
    fn typing_and_backspace_edit_query() {
        let mut session = SearchSession::new();

        type_text(&mut session, "abc");
        session.backspace();

        assert_eq!(session.query(), "ab");
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn backspace_on_empty_query_is_noop() {
        let mut session = SearchSession::new();

        session.backspace();

        assert_eq!(session.query(), "");
    }

    #[test]
    fn submit_switches_to_browsing_at_top() {
        let mut session = SearchSession::new();
        type_text(&mut session, "daft punk");

        assert_eq!(session.submit().as_deref(), Some("daft punk"));
        session.complete_submit((0..3).map(result).collect());

        assert_eq!(session.mode(), Mode::Browsing);
        assert_eq!(session.selected(), 0);
        assert_eq!(session.scroll_offset(), 0);
        assert_eq!(session.visible_results().count(), 3);
        assert_eq!(session.query(), "daft punk");
    }

    #[test]
    fn editing_is_ignored_while_browsing() {
        let mut session = browsing(3);

        session.append_char('x');
        session.backspace();

        assert_eq!(session.query(), "");
        assert_eq!(session.submit(), None);
    }

    #[test]
    fn navigation_is_ignored_while_typing() {
        let mut session = SearchSession::new();

        session.move_selection(Direction::Down);
        session.cancel();

        assert_eq!(session.selected(), 0);
        assert_eq!(session.select_and_play(), None);
        assert_eq!(session.mode(), Mode::Typing);
    }

    #[test]
    fn moving_past_window_scrolls_one_row() {
        let mut session = browsing(8);
        for _ in 0..4 {
            session.move_selection(Direction::Down);
        }
        assert_eq!((session.selected(), session.scroll_offset()), (4, 0));

        session.move_selection(Direction::Down);

        assert_eq!((session.selected(), session.scroll_offset()), (5, 1));
    }

    #[test]
    fn moving_up_past_window_scrolls_one_row() {
        let mut session = browsing(8);
        for _ in 0..7 {
            session.move_selection(Direction::Down);
        }
        assert_eq!((session.selected(), session.scroll_offset()), (7, 3));

        for _ in 0..4 {
            session.move_selection(Direction::Up);
        }
        assert_eq!((session.selected(), session.scroll_offset()), (3, 3));

        session.move_selection(Direction::Up);
        assert_eq!((session.selected(), session.scroll_offset()), (2, 2));
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut session = browsing(8);

        session.move_selection(Direction::Up);
        assert_eq!((session.selected(), session.scroll_offset()), (7, 3));

        session.move_selection(Direction::Down);
        assert_eq!((session.selected(), session.scroll_offset()), (0, 0));
    }

    #[test]
    fn navigation_on_empty_results_is_noop() {
        let mut session = browsing(0);

        session.move_selection(Direction::Down);

        assert_eq!(session.selected(), 0);
        assert_eq!(session.scroll_offset(), 0);
        assert_eq!(session.select_and_play(), None);
        assert_eq!(session.mode(), Mode::Browsing);
    }

    #[test]
    fn viewport_invariant_holds_for_every_move_sequence() {
        // Every sequence of up to 10 moves, for every list length up to 12
        for len in 1..=12 {
            for bits in 0u32..(1 << 10) {
                let mut session = browsing(len);
                for step in 0..10 {
                    let direction = if bits & (1 << step) == 0 { Direction::Down } else { Direction::Up };
                    session.move_selection(direction);
                    assert_viewport(&session);
                }
            }
        }
    }

    #[test]
    fn opposite_moves_round_trip() {
        for len in 1..=12 {
            for start in 0..len {
                let mut session = browsing(len);
                for _ in 0..start {
                    session.move_selection(Direction::Down);
                }

                session.move_selection(Direction::Up);
                session.move_selection(Direction::Down);
                assert_eq!(session.selected(), start);

                session.move_selection(Direction::Down);
                session.move_selection(Direction::Up);
                assert_eq!(session.selected(), start);
            }
        }
    }

    #[test]
    fn select_and_play_yields_id_and_resets() {
        let mut session = browsing(5);
        session.move_selection(Direction::Down);
        session.move_selection(Direction::Down);

        assert_eq!(session.select_and_play().as_deref(), Some("spotify:track:2"));

        assert_eq!(session.mode(), Mode::Typing);
        assert_eq!(session.query(), "");
        assert!(session.results().is_empty());
        assert_eq!((session.selected(), session.scroll_offset()), (0, 0));
    }

    #[test]
    fn cancel_resets_without_playing() {
        let mut session = SearchSession::new();
        type_text(&mut session, "air");
        session.complete_submit((0..7).map(result).collect());
        for _ in 0..6 {
            session.move_selection(Direction::Down);
        }

        session.cancel();

        assert_eq!(session.mode(), Mode::Typing);
        assert_eq!(session.query(), "");
        assert!(session.results().is_empty());
        assert_eq!((session.selected(), session.scroll_offset()), (0, 0));
    }

    #[test]
    fn adjust_scroll_keeps_offset_inside_window() {
        assert_eq!(adjust_scroll(2, 0, 5, 8), 0);
        assert_eq!(adjust_scroll(5, 0, 5, 8), 1);
        assert_eq!(adjust_scroll(1, 2, 5, 8), 1);
        assert_eq!(adjust_scroll(7, 0, 5, 8), 3);
        assert_eq!(adjust_scroll(0, 3, 5, 8), 0);
    }

    #[test]
    fn adjust_scroll_is_zero_when_everything_fits() {
        assert_eq!(adjust_scroll(2, 1, 5, 3), 0);
        assert_eq!(adjust_scroll(4, 0, 5, 5), 0);
        assert_eq!(adjust_scroll(0, 0, 0, 0), 0);
    }

    #[test]
    fn adjust_scroll_clamps_stale_offsets() {
        // An offset left over from a longer list is pulled back into range
        assert_eq!(adjust_scroll(6, 6, 5, 8), 3);
    }
}
