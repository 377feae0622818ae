// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the dev server and file watcher.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::Path;
use tracing::Span;

/// Dev server is accepting connections.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerListening {
    pub addr: SocketAddr,
}

impl Display for ServerListening {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Dev server running at http://{}", self.addr)
    }
}

impl StructuredLog for ServerListening {
    fn log(&self) {
        tracing::info!(addr = %self.addr, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("dev_server", span_name = name, addr = %self.addr)
    }
}

/// Primary port is taken, retrying on the fallback port.
///
/// # Log Level
/// `warn!` - Degraded but recoverable
///
/// # Example
/// ```
/// use humarizer::observability::messages::server::PortInUse;
///
/// let msg = PortInUse { port: 3000, fallback: 3001 };
/// assert_eq!(msg.to_string(), "Port 3000 in use, trying 3001");
/// ```
pub struct PortInUse {
    pub port: u16,
    pub fallback: u16,
}

impl Display for PortInUse {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Port {} in use, trying {}", self.port, self.fallback)
    }
}

impl StructuredLog for PortInUse {
    fn log(&self) {
        tracing::warn!(port = self.port, fallback = self.fallback, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("port_in_use", span_name = name, port = self.port)
    }
}

/// A watched file changed and a rebuild is starting.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RebuildTriggered<'a> {
    pub path: &'a Path,
}

impl Display for RebuildTriggered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Change: {}", self.path.display())
    }
}

impl StructuredLog for RebuildTriggered<'_> {
    fn log(&self) {
        tracing::info!(path = %self.path.display(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("rebuild", span_name = name, path = %self.path.display())
    }
}

/// A request did not match any file under the output directory.
///
/// # Log Level
/// `debug!` - Routine
pub struct FileNotFound<'a> {
    pub request_path: &'a str,
}

impl Display for FileNotFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "404 {}", self.request_path)
    }
}

impl StructuredLog for FileNotFound<'_> {
    fn log(&self) {
        tracing::debug!(request_path = self.request_path, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("not_found", span_name = name, request_path = self.request_path)
    }
}

/// The file watcher reported an error; watching continues.
///
/// # Log Level
/// `warn!` - Degraded but running
pub struct WatcherError<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for WatcherError<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "File watcher error: {}", self.error)
    }
}

impl StructuredLog for WatcherError<'_> {
    fn log(&self) {
        tracing::warn!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("watcher_error", span_name = name)
    }
}
