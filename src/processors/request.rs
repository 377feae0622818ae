// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ProcessorError;

/// Which family of transforms a request goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Text,
    Code,
}

impl Mode {
    /// Option names offered in this mode, in display order. The first one is
    /// selected when the mode is entered.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Mode::Text => Tone::NAMES,
            Mode::Code => CodeStyle::NAMES,
        }
    }

    pub fn default_option(self) -> &'static str {
        self.options()[0]
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Mode::Text => "Paste AI-generated text here...",
            Mode::Code => "Paste AI-generated code here...",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Text => "text",
            Mode::Code => "code",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ProcessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Mode::Text),
            "code" => Ok(Mode::Code),
            _ => Err(ProcessorError::UnknownMode(s.to_string())),
        }
    }
}

/// Rewriting style for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Casual,
    Professional,
    Story,
    Academic,
}

impl Tone {
    pub const NAMES: &'static [&'static str] = &["casual", "professional", "story", "academic"];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "casual" => Some(Tone::Casual),
            "professional" => Some(Tone::Professional),
            "story" => Some(Tone::Story),
            "academic" => Some(Tone::Academic),
            _ => None,
        }
    }
}

/// Rewriting style for code mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeStyle {
    #[default]
    Standard,
    Debug,
    Commented,
    Minified,
}

impl CodeStyle {
    pub const NAMES: &'static [&'static str] = &["standard", "debug", "commented", "minified"];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(CodeStyle::Standard),
            "debug" => Some(CodeStyle::Debug),
            "commented" => Some(CodeStyle::Commented),
            "minified" => Some(CodeStyle::Minified),
            _ => None,
        }
    }
}

/// Per-rule probability in `[0, 1]`. Out-of-range values clamp, NaN is `0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(from = "f64", into = "f64")]
pub struct Intensity(f64);

impl Intensity {
    pub const MIN: Intensity = Intensity(0.0);
    pub const MAX: Intensity = Intensity(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::MIN
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(0.5)
    }
}

impl From<f64> for Intensity {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Intensity> for f64 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * 100.0).round() as u32)
    }
}

/// One conversion request. Created per user action and consumed immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformRequest {
    pub payload: String,
    pub mode: Mode,
    pub option: String,
    pub intensity: Intensity,
}

impl TransformRequest {
    pub fn new(
        payload: impl Into<String>,
        mode: Mode,
        option: impl Into<String>,
        intensity: impl Into<Intensity>,
    ) -> Self {
        Self {
            payload: payload.into(),
            mode,
            option: option.into(),
            intensity: intensity.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_clamps() {
        assert_eq!(Intensity::new(1.7).get(), 1.0);
        assert_eq!(Intensity::new(-0.2).get(), 0.0);
        assert_eq!(Intensity::new(f64::NAN).get(), 0.0);
        assert_eq!(Intensity::new(0.35).get(), 0.35);
        assert_eq!(Intensity::new(0.35).to_string(), "35%");
    }

    #[test]
    fn test_intensity_deserializes_clamped() {
        let parsed: Intensity = serde_json::from_str("4.0").unwrap();
        assert_eq!(parsed, Intensity::MAX);
    }

    #[test]
    fn test_mode_options_and_defaults() {
        assert_eq!(Mode::Text.default_option(), "casual");
        assert_eq!(Mode::Code.default_option(), "standard");
        assert_eq!(Mode::Code.options().len(), 4);
        assert_eq!(CodeStyle::parse(Mode::Code.default_option()), Some(CodeStyle::default()));
        assert_eq!(Tone::parse(Mode::Text.default_option()), Some(Tone::default()));
        assert_eq!("CODE".parse::<Mode>().unwrap(), Mode::Code);
        assert!("binary".parse::<Mode>().is_err());
    }

    #[test]
    fn test_every_listed_option_parses() {
        for name in Tone::NAMES {
            assert!(Tone::parse(name).is_some(), "tone {}", name);
        }
        for name in CodeStyle::NAMES {
            assert!(CodeStyle::parse(name).is_some(), "style {}", name);
        }
    }
}
