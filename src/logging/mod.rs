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


//! Log file setup.
//!
//! The terminal UI owns stdout, so `tracing` output is written to a file in
//! the configured log directory through a non-blocking writer. The returned
//! guard must be held until the application exits so buffered lines are
//! flushed.
//!
//! Precedence for the filter: `RUST_LOG` env var, then the config file, then
//! `info`.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

const LOG_FILE: &str = "stopwatch.log";

/// Builds the default filter directive for the configured level.
fn filter_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

/// Installs the global subscriber, returning the writer guard.
///
/// Logging is skipped, not fatal, when no log directory is available.
pub(crate) fn init_logging(config: &AppConfig) -> Option<WorkerGuard> {
    let dir = config.log_dir()?;

    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("Warning: Could not create log directory {:?}: {}", dir, e);
        return None;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&config.log_level)));

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_thread_names(true),
        )
        .try_init()
        .ok()?;

    tracing::info!(dir = %dir.display(), "logging initialised");

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_targets_this_crate() {
        assert_eq!(filter_directive("debug"), "stopwatch=debug");
    }
}
