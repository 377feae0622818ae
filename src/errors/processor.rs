// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for processor lookup and request parsing.

use thiserror::Error;

use crate::processors::Mode;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessorError {
    /// The option name is not offered in the given mode
    #[error("unknown {mode} option '{option}' (available: {})", available.join(", "))]
    UnknownOption {
        mode: Mode,
        option: String,
        available: Vec<&'static str>,
    },

    #[error("unknown mode '{0}' (expected 'text' or 'code')")]
    UnknownMode(String),
}
