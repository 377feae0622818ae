// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at the right level with structured fields.
//!
//! # Usage Pattern
//!
//! ```rust
//! use humarizer::observability::messages::{processor::ConversionStarted, StructuredLog};
//!
//! let msg = ConversionStarted {
//!     mode: "text",
//!     option: "casual",
//!     intensity: 0.5,
//!     input_size: 42,
//! };
//!
//! msg.log();
//! ```

pub mod build;
pub mod history;
pub mod processor;
pub mod server;

use tracing::Span;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Build a span carrying the same fields as the message.
    fn span(&self, name: &str) -> Span;
}
