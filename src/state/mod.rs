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

//! Shared dashboard state.
//!
//! The poller, the key reader and the render loop all work on a single
//! [`DashboardState`] guarded by one mutex. Access goes through
//! [`SharedState::update`], which holds the lock only for the duration of the
//! closure, so every mutation is observed by the render loop either entirely
//! or not at all.
//!
//! Closures passed to [`SharedState::update`] must not perform I/O.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

use crate::{clock::ElapsedClock, model::PlaybackSnapshot, search::SearchSession};

/// How long a notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub(crate) struct Notice {
    pub(crate) message: String,
    raised_at: Instant,
}

#[derive(Debug)]
pub(crate) struct DashboardState {
    pub(crate) clock: ElapsedClock,
    pub(crate) session: SearchSession,
    notice: Option<Notice>,
}

impl DashboardState {
    pub(crate) fn new(now: Instant) -> Self {
        Self {
            clock: ElapsedClock::new(now),
            session: SearchSession::new(),
            notice: None,
        }
    }

    /// Installs a freshly polled snapshot as the new ground truth.
    pub(crate) fn apply_snapshot(&mut self, snapshot: PlaybackSnapshot, now: Instant) {
        self.clock.reset(snapshot, now);
    }

    /// Advances time-based state: the elapsed clock and notice expiry.
    pub(crate) fn tick(&mut self, now: Instant) {
        self.clock.tick(now);

        let expired = self
            .notice
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.raised_at) >= NOTICE_TTL);
        if expired {
            self.notice = None;
        }
    }

    pub(crate) fn set_notice(&mut self, message: String, now: Instant) {
        self.notice = Some(Notice {
            message,
            raised_at: now,
        });
    }

    pub(crate) fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

/// A cloneable handle to the process-wide dashboard state.
#[derive(Clone)]
pub(crate) struct SharedState {
    inner: Arc<Mutex<DashboardState>>,
}

impl SharedState {
    pub(crate) fn new(now: Instant) -> Self {
        Self {
            inner: Arc::new(Mutex::new(DashboardState::new(now))),
        }
    }

    /// Runs `f` with exclusive access to the state.
    ///
    /// A panic in another holder poisons the lock, the state itself is still
    /// consistent enough to display so the poison is ignored.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
