// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for conversions flowing through the processors.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Conversion request accepted by the orchestrator.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConversionStarted<'a> {
    pub mode: &'a str,
    pub option: &'a str,
    pub intensity: f64,
    pub input_size: usize,
}

impl Display for ConversionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Converting {} chars ({} / {}, intensity={:.2})",
            self.input_size, self.mode, self.option, self.intensity
        )
    }
}

impl StructuredLog for ConversionStarted<'_> {
    fn log(&self) {
        tracing::info!(
            mode = self.mode,
            option = self.option,
            intensity = self.intensity,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "conversion",
            span_name = name,
            mode = self.mode,
            option = self.option,
            intensity = self.intensity,
        )
    }
}

/// Processor produced its output.
///
/// # Log Level
/// `debug!` - Per-request detail
///
/// # Example
/// ```
/// use humarizer::observability::messages::processor::ConversionCompleted;
/// use std::time::Duration;
///
/// let msg = ConversionCompleted {
///     processor: "text_casual",
///     input_size: 120,
///     output_size: 131,
///     duration: Duration::from_micros(85),
/// };
///
/// assert!(msg.to_string().starts_with("Processor 'text_casual' completed"));
/// ```
pub struct ConversionCompleted<'a> {
    pub processor: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: std::time::Duration,
}

impl Display for ConversionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' completed: input={} chars, output={} chars, duration={:?}",
            self.processor, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for ConversionCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("processor", span_name = name, processor = self.processor)
    }
}
