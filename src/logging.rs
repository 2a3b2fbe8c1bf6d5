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

//! File based logging.
//!
//! The terminal belongs to the dashboard, so log output goes to a file in the
//! user's data directory instead. `RUST_LOG` overrides the default filter.

use std::{
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing_subscriber::EnvFilter;

use crate::config::CONFIG_NAME;

const DEFAULT_FILTER: &str = "info,hyper_util=warn,reqwest=warn,hyper=warn";

/// Location of the log file, if the platform has a data directory.
pub(crate) fn log_file_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(CONFIG_NAME).join(format!("{}.log", CONFIG_NAME)))
}

/// Initialise the global tracing subscriber.
///
/// Logging is silently disabled if the log file cannot be opened.
pub(crate) fn init() {
    let Some(file) = log_file_path().and_then(|path| open_log_file(&path)) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_under_app_directory() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("spotdash/spotdash.log"));
        }
    }

    #[test]
    fn default_filter_parses() {
        let filter = EnvFilter::new(DEFAULT_FILTER);
        assert!(format!("{filter:?}").contains("reqwest"));
    }
}
