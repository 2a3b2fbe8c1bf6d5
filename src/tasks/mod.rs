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

//! Background activities that write to the shared state.
//!
//! Two long-running threads run beside the render loop:
//!
//! * [`poller`]: periodically fetches the current playback snapshot.
//! * [`key_reader`]: blocks on raw key events and drives the input state
//!   machine, running the remote search and play calls it requests.
//!
//! Neither is cancelled explicitly, both end when the process exits. Remote
//! calls are always made with the shared state lock released.

pub(crate) mod key_reader;
pub(crate) mod poller;

pub(crate) use key_reader::spawn_key_reader;
pub(crate) use poller::spawn_poller;
