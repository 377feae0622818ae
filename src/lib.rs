// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // YAML config + validation
pub mod engine;     // conversion orchestrator
pub mod errors;     // error handling
pub mod history;    // persisted conversion log
pub mod observability;
pub mod processors; // text and code transforms
pub mod rules;      // rule tables
pub mod site;       // page build + dev server
pub mod traits;     // unified abstractions
