//! Semantic checks on a parsed configuration.
//!
//! Parsing guarantees the shape of the config; these checks catch values that
//! are well-typed but cannot work together. Every check runs and all problems
//! are reported at once, so a user fixes the file in one pass.
//!
//! # Example
//! ```rust
//! use humarizer::config::{validate_config, Config};
//! use humarizer::errors::ValidationError;
//!
//! let mut config = Config::default();
//! config.server.fallback_port = config.server.port;
//!
//! let errors = validate_config(&config).unwrap_err();
//! assert_eq!(errors, vec![ValidationError::DuplicatePort { port: 3000 }]);
//! ```

use crate::config::Config;
use crate::errors::ValidationError;

/// Validates a configuration, accumulating every error found.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.port == config.server.fallback_port {
        errors.push(ValidationError::DuplicatePort {
            port: config.server.port,
        });
    }

    if config.history.capacity == 0 {
        errors.push(ValidationError::ZeroHistoryCapacity);
    }

    let orchestrator = &config.orchestrator;
    if orchestrator.reveal_min_ms > orchestrator.reveal_max_ms {
        errors.push(ValidationError::InvertedRevealRange {
            min: orchestrator.reveal_min_ms,
            max: orchestrator.reveal_max_ms,
        });
    }

    let paths = [
        ("build.out_dir", &config.build.out_dir),
        ("build.assets_dir", &config.build.assets_dir),
        ("build.web_dir", &config.build.web_dir),
        ("history.dir", &config.history.dir),
        ("watch.root", &config.watch.root),
    ];
    for (field, path) in paths {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyPath { field });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(validate_config(&Config::default()), Ok(()));
    }

    #[test]
    fn test_duplicate_port() {
        let mut config = Config::default();
        config.server.port = 4000;
        config.server.fallback_port = 4000;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::DuplicatePort { port: 4000 }]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut config = Config::default();
        config.history.capacity = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::ZeroHistoryCapacity]);
    }

    #[test]
    fn test_inverted_reveal_range() {
        let mut config = Config::default();
        config.orchestrator.reveal_min_ms = 9;
        config.orchestrator.reveal_max_ms = 3;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvertedRevealRange { min: 9, max: 3 }]);
    }

    #[test]
    fn test_equal_reveal_bounds_are_allowed() {
        let mut config = Config::default();
        config.orchestrator.reveal_min_ms = 0;
        config.orchestrator.reveal_max_ms = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let mut config = Config::default();
        config.server.fallback_port = config.server.port;
        config.history.capacity = 0;
        config.build.out_dir = PathBuf::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::EmptyPath { field: "build.out_dir" }));
    }
}
