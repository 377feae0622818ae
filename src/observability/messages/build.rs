// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the site build.
//!
//! This module contains message types for logging events related to:
//! * Build start and completion
//! * Best-effort asset copies that were skipped
//! * Fatal build failures

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Build started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct BuildStarted<'a> {
    pub out_dir: &'a Path,
}

impl Display for BuildStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Building Ai Humarizer into '{}'", self.out_dir.display())
    }
}

impl StructuredLog for BuildStarted<'_> {
    fn log(&self) {
        tracing::info!(out_dir = %self.out_dir.display(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("build", span_name = name, out_dir = %self.out_dir.display())
    }
}

/// Build completed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use humarizer::observability::messages::build::BuildCompleted;
/// use std::path::Path;
/// use std::time::Duration;
///
/// let msg = BuildCompleted {
///     out_dir: Path::new("dist"),
///     copied: 4,
///     skipped: 1,
///     duration: Duration::from_millis(12),
/// };
///
/// assert!(msg.to_string().contains("4 assets copied"));
/// ```
pub struct BuildCompleted<'a> {
    pub out_dir: &'a Path,
    pub copied: usize,
    pub skipped: usize,
    pub duration: std::time::Duration,
}

impl Display for BuildCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Build complete in {:?}: {} assets copied, {} skipped",
            self.duration, self.copied, self.skipped
        )
    }
}

impl StructuredLog for BuildCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            out_dir = %self.out_dir.display(),
            copied = self.copied,
            skipped = self.skipped,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "build_completed",
            span_name = name,
            copied = self.copied,
            skipped = self.skipped,
            duration = ?self.duration,
        )
    }
}

/// An optional asset could not be copied and was left out of the build.
///
/// # Log Level
/// `debug!` - Missing assets are expected in fresh checkouts
pub struct AssetSkipped<'a> {
    pub source: &'a Path,
    pub reason: &'a dyn std::error::Error,
}

impl Display for AssetSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skipping asset '{}': {}", self.source.display(), self.reason)
    }
}

impl StructuredLog for AssetSkipped<'_> {
    fn log(&self) {
        tracing::debug!(source = %self.source.display(), reason = %self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("asset_skipped", span_name = name, source = %self.source.display())
    }
}

/// Build failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct BuildFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for BuildFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Build failed: {}", self.error)
    }
}

impl StructuredLog for BuildFailed<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("build_failed", span_name = name, error = %self.error)
    }
}

/// Config could not be reloaded before a dev rebuild; the previous one stays.
///
/// # Log Level
/// `warn!` - Degraded but recoverable
pub struct ConfigReloadFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for ConfigReloadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Keeping previous config, reload failed: {}", self.error)
    }
}

impl StructuredLog for ConfigReloadFailed<'_> {
    fn log(&self) {
        tracing::warn!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("config_reload_failed", span_name = name, error = %self.error)
    }
}
