// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Humanization processors.
//!
//! [`humanize_text`] and [`humanize_code`] are the pure transforms; the
//! [`Processor`](crate::traits::Processor) implementations bind them to one tone
//! or style and the shared rule set, and [`ProcessorFactory`] builds them from
//! the mode and option names the UI works with.

pub mod code;
pub mod factory;
pub mod request;
pub mod text;

pub use code::{humanize_code, CodeProcessor};
pub use factory::ProcessorFactory;
pub use request::{CodeStyle, Intensity, Mode, Tone, TransformRequest};
pub use text::{humanize_text, TextProcessor};
