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

//! Locally interpolated playback position.
//!
//! The remote service is only polled every few seconds, but the progress
//! display needs to advance smoothly in between. The [`ElapsedClock`] holds
//! the most recent snapshot and an estimated elapsed time that is advanced by
//! one second for every real second that passes while the snapshot reports
//! playback in progress.
//!
//! Every fresh snapshot hard-resets the estimate, so drift is bounded by the
//! poll interval.

use std::time::{Duration, Instant};

use crate::model::PlaybackSnapshot;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub(crate) struct ElapsedClock {
    snapshot: Option<PlaybackSnapshot>,
    estimated_elapsed: u64,
    last_tick: Instant,
}

impl ElapsedClock {
    pub(crate) fn new(now: Instant) -> Self {
        Self {
            snapshot: None,
            estimated_elapsed: 0,
            last_tick: now,
        }
    }

    /// Replaces the base snapshot and resets the estimate to the elapsed time
    /// it reports.
    pub(crate) fn reset(&mut self, snapshot: PlaybackSnapshot, now: Instant) {
        self.estimated_elapsed = snapshot.elapsed;
        self.snapshot = Some(snapshot);
        self.last_tick = now;
    }

    /// Advances the estimate by one second if at least a second has passed
    /// since the last advance and playback is in progress.
    ///
    /// While paused, or before any snapshot has arrived, the estimate is
    /// frozen and the tick reference follows `now` so that resuming does not
    /// count the paused time.
    pub(crate) fn tick(&mut self, now: Instant) {
        let playing = self.snapshot.as_ref().is_some_and(|s| s.is_playing);
        if !playing {
            self.last_tick = now;
            return;
        }

        if now.saturating_duration_since(self.last_tick) >= TICK {
            self.estimated_elapsed += 1;
            self.last_tick += TICK;

            // After a long stall resynchronise rather than catching up
            if now.saturating_duration_since(self.last_tick) >= TICK {
                self.last_tick = now;
            }
        }
    }

    pub(crate) fn snapshot(&self) -> Option<&PlaybackSnapshot> {
        self.snapshot.as_ref()
    }

    pub(crate) fn elapsed(&self) -> u64 {
        self.estimated_elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::testing::snapshot;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn two_ticks_a_second_apart_advance_by_two() {
        let t0 = Instant::now();
        let mut clock = ElapsedClock::new(t0);
        clock.reset(snapshot(30, true), t0);

        clock.tick(t0 + secs(1));
        clock.tick(t0 + secs(2));

        assert_eq!(clock.elapsed(), 32);
    }

    #[test]
    fn sub_second_ticks_do_not_advance() {
        let t0 = Instant::now();
        let mut clock = ElapsedClock::new(t0);
        clock.reset(snapshot(30, true), t0);

        for ms in (50..1000).step_by(50) {
            clock.tick(t0 + Duration::from_millis(ms));
        }
        assert_eq!(clock.elapsed(), 30);

        clock.tick(t0 + Duration::from_millis(1000));
        assert_eq!(clock.elapsed(), 31);
    }

    #[test]
    fn frame_rate_ticks_advance_once_per_second() {
        let t0 = Instant::now();
        let mut clock = ElapsedClock::new(t0);
        clock.reset(snapshot(0, true), t0);

        for frame in 1..=200 {
            clock.tick(t0 + Duration::from_millis(frame * 50));
        }

        assert_eq!(clock.elapsed(), 10);
    }

    #[test]
    fn paused_playback_is_frozen() {
        let t0 = Instant::now();
        let mut clock = ElapsedClock::new(t0);
        clock.reset(snapshot(120, false), t0);

        clock.tick(t0 + secs(1));
        clock.tick(t0 + secs(2));
        clock.tick(t0 + secs(3));

        assert_eq!(clock.elapsed(), 120);
    }

    #[test]
    fn no_snapshot_is_frozen() {
        let t0 = Instant::now();
        let mut clock = ElapsedClock::new(t0);

        clock.tick(t0 + secs(5));

        assert!(clock.snapshot().is_none());
        assert_eq!(clock.elapsed(), 0);
    }

    #[test]
    fn new_snapshot_overrides_interpolated_value() {
        let t0 = Instant::now();
        let mut clock = ElapsedClock::new(t0);
        clock.reset(snapshot(10, true), t0);
        for n in 1..=4 {
            clock.tick(t0 + secs(n));
        }
        assert_eq!(clock.elapsed(), 14);

        clock.reset(snapshot(12, true), t0 + secs(4));

        assert_eq!(clock.elapsed(), 12);
    }

    #[test]
    fn resuming_does_not_count_paused_time() {
        let t0 = Instant::now();
        let mut clock = ElapsedClock::new(t0);
        clock.reset(snapshot(50, false), t0);
        clock.tick(t0 + secs(10));

        clock.reset(snapshot(50, true), t0 + secs(10));
        clock.tick(t0 + Duration::from_millis(10_500));

        assert_eq!(clock.elapsed(), 50);
    }

    #[test]
    fn long_stall_advances_once_then_resynchronises() {
        let t0 = Instant::now();
        let mut clock = ElapsedClock::new(t0);
        clock.reset(snapshot(0, true), t0);

        clock.tick(t0 + secs(5));
        clock.tick(t0 + Duration::from_millis(5_500));

        assert_eq!(clock.elapsed(), 1);
    }

    #[test]
    fn elapsed_may_exceed_duration() {
        let t0 = Instant::now();
        let mut clock = ElapsedClock::new(t0);
        clock.reset(snapshot(429, true), t0);

        clock.tick(t0 + secs(1));

        assert_eq!(clock.elapsed(), 430);
    }
}
