// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while loading configuration and compiling rule tables.

use std::path::PathBuf;
use thiserror::Error;

/// A single semantic problem found in an otherwise well-formed config.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Both listeners would try to bind the same port
    #[error("server.port and server.fallback_port are both {port}")]
    DuplicatePort { port: u16 },

    /// The history store must keep at least one entry
    #[error("history.capacity must be at least 1")]
    ZeroHistoryCapacity,

    /// The reveal delay range is inverted
    #[error("orchestrator.reveal_min_ms ({min}) must not exceed orchestrator.reveal_max_ms ({max})")]
    InvertedRevealRange { min: u64, max: u64 },

    /// A path that must name a directory is blank
    #[error("{field} must not be empty")]
    EmptyPath { field: &'static str },
}

/// Errors that can occur while loading the YAML configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("configuration validation failed:\n{}", format_errors(.0))]
    Invalid(Vec<ValidationError>),

    #[error(transparent)]
    Rules(#[from] RuleError),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Errors raised when a rule table cannot be compiled into regexes
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule pattern '{pattern}' in '{table}' failed to compile: {source}")]
    InvalidPattern {
        table: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule table '{table}' must not be empty")]
    EmptyTable { table: &'static str },
}
