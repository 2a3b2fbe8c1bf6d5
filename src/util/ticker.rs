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

//! Fixed-rate timer for background threads.
//!
//! Unlike a plain sleep at the end of each loop iteration, a [`Ticker`] keeps
//! a schedule of deadlines, so time spent doing work (a slow network call,
//! for example) does not stretch the period. Deadlines missed entirely are
//! skipped rather than fired in a burst.

use std::{
    thread,
    time::{Duration, Instant},
};

pub(crate) struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    /// Creates a ticker whose first tick is due at `start`.
    pub(crate) fn starting_at(start: Instant, interval: Duration) -> Self {
        Self {
            interval,
            next: start,
        }
    }

    /// Creates a ticker whose first tick is due immediately.
    pub(crate) fn new(interval: Duration) -> Self {
        Self::starting_at(Instant::now(), interval)
    }

    /// Blocks the calling thread until the next tick is due.
    pub(crate) fn wait(&mut self) {
        let delay = self.delay_from(Instant::now());
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    /// Returns how long to wait from `now` for the next due tick, and moves
    /// the schedule on to the tick after it.
    fn delay_from(&mut self, now: Instant) -> Duration {
        let delay = self.next.saturating_duration_since(now);

        self.next += self.interval;
        if self.next <= now {
            // Fell more than a whole period behind, restart the schedule
            self.next = now + self.interval;
        }

        delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_tick_is_immediate() {
        let t0 = Instant::now();
        let mut ticker = Ticker::starting_at(t0, ms(500));

        assert_eq!(ticker.delay_from(t0), Duration::ZERO);
    }

    #[test]
    fn work_time_does_not_stretch_the_period() {
        let t0 = Instant::now();
        let mut ticker = Ticker::starting_at(t0, ms(500));
        ticker.delay_from(t0);

        // 200ms of work after the first tick leaves 300ms to wait
        assert_eq!(ticker.delay_from(t0 + ms(200)), ms(300));
        assert_eq!(ticker.delay_from(t0 + ms(500)), ms(500));
    }

    #[test]
    fn missed_ticks_are_skipped() {
        let t0 = Instant::now();
        let mut ticker = Ticker::starting_at(t0, ms(100));
        ticker.delay_from(t0);

        assert_eq!(ticker.delay_from(t0 + ms(1_050)), Duration::ZERO);
        assert_eq!(ticker.delay_from(t0 + ms(1_050)), ms(100));
    }
}
