#[cfg(test)]
mod integration_tests {
    use std::path::PathBuf;

    use crate::config::load_and_validate_config;
    use crate::engine::Timing;
    use crate::rules::RuleTable;

    /// The shipped defaults file matches the built-in defaults
    #[test]
    fn test_default_yaml_matches_builtin_defaults() {
        let config = load_and_validate_config("configs/humarizer.yaml").unwrap();

        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
        assert_eq!(config.build.fonts.len(), 3);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.fallback_port, 3001);
        assert_eq!(config.watch.ignore, vec!["node_modules", ".git", "target"]);
        assert_eq!(config.history.capacity, 20);
        assert_eq!(Timing::from(&config.orchestrator), Timing::default());
        assert_eq!(config.rules, RuleTable::default());
    }

    /// Rule overrides replace only the lists they name
    #[test]
    fn test_fast_casual_yaml_overrides_rules() {
        let config = load_and_validate_config("configs/fast-casual.yaml").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.history.capacity, 5);
        assert_eq!(Timing::from(&config.orchestrator), Timing::instant());
        assert_eq!(config.orchestrator.default_intensity, 0.9);

        assert_eq!(config.rules.casual_starters, vec!["So, ", "Look, "]);
        assert_eq!(config.rules.word_swaps.len(), 2);
        assert_eq!(config.rules.word_swaps[0].from, "utilize");
        assert_eq!(config.rules.story_openers, RuleTable::default().story_openers);

        let rules = config.compile_rules().unwrap();
        assert_eq!(rules.word_swaps().len(), 2);
    }
}
