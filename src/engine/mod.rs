// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Drives a conversion from input to revealed output.

pub mod orchestrator;
pub mod reveal;
pub mod stats;
pub mod terminal;

pub use orchestrator::{ModeView, Orchestrator, Status, Timing};
pub use reveal::reveal;
pub use stats::TextStats;
pub use terminal::TerminalView;
