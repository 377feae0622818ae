// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod processor;
mod site;
mod storage;

pub use config::{ConfigError, RuleError, ValidationError};
pub use processor::ProcessorError;
pub use site::{BuildError, ServeError};
pub use storage::StorageError;
