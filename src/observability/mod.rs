// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Log output is produced through message types that implement `Display` and
//! [`messages::StructuredLog`], so the wording of every log line lives in one
//! place and call sites only fill in fields.
//!
//! Messages are organized by subsystem:
//! * `messages::build` - site build lifecycle and asset copying
//! * `messages::server` - dev server binding, file serving and rebuilds
//! * `messages::processor` - conversion requests flowing through processors
//! * `messages::history` - history persistence and recovery
//!
//! # Usage
//!
//! ```rust
//! use humarizer::observability::messages::{build::BuildStarted, StructuredLog};
//! use std::path::Path;
//!
//! BuildStarted { out_dir: Path::new("dist") }.log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "humarizer=info";

/// Install the global `fmt` subscriber.
///
/// Honors `RUST_LOG` and falls back to [`DEFAULT_LOG_FILTER`]. Calling this
/// twice is harmless; the second installation is ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
