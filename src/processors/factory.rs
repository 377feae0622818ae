use std::sync::Arc;

use super::{CodeProcessor, CodeStyle, Mode, TextProcessor, Tone};
use crate::errors::ProcessorError;
use crate::rules::Rules;
use crate::traits::Processor;

/// Factory for processors keyed by mode and option name
///
/// Text mode options map to tones, code mode options map to styles:
/// - "casual" / "professional" / "story" / "academic" -> TextProcessor
/// - "standard" / "debug" / "commented" / "minified" -> CodeProcessor
///
/// Unknown tone names are rejected. Unknown code style names fall back to
/// "standard".
#[derive(Clone)]
pub struct ProcessorFactory {
    rules: Arc<Rules>,
}

impl ProcessorFactory {
    pub fn new(rules: Arc<Rules>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &Arc<Rules> {
        &self.rules
    }

    pub fn create_processor(&self, mode: Mode, option: &str) -> Result<Arc<dyn Processor>, ProcessorError> {
        match mode {
            Mode::Text => {
                let tone = Tone::parse(option).ok_or_else(|| ProcessorError::UnknownOption {
                    mode,
                    option: option.to_string(),
                    available: Self::list_available_options(mode).to_vec(),
                })?;
                Ok(Arc::new(TextProcessor::new(tone, Arc::clone(&self.rules))))
            }
            Mode::Code => {
                let style = CodeStyle::parse(option).unwrap_or_default();
                Ok(Arc::new(CodeProcessor::new(style, Arc::clone(&self.rules))))
            }
        }
    }

    pub fn list_available_options(mode: Mode) -> &'static [&'static str] {
        mode.options()
    }

    pub fn is_option_available(mode: Mode, option: &str) -> bool {
        Self::list_available_options(mode).contains(&option)
    }
}

impl std::fmt::Debug for ProcessorFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorFactory")
            .field("word_swaps", &self.rules.word_swaps().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::TransformRequest;
    use crate::traits::ScriptedRandom;

    fn factory() -> ProcessorFactory {
        ProcessorFactory::new(Arc::new(Rules::builtin().unwrap()))
    }

    #[test]
    fn test_create_every_listed_processor() {
        let factory = factory();
        for mode in [Mode::Text, Mode::Code] {
            for option in ProcessorFactory::list_available_options(mode) {
                let processor = factory
                    .create_processor(mode, option)
                    .unwrap_or_else(|e| panic!("Failed to create {} {}: {}", mode, option, e));
                assert!(processor.name().starts_with(mode.as_str()));
                assert!(processor.name().ends_with(option));
            }
        }
    }

    #[test]
    fn test_unknown_tone_is_rejected() {
        let factory = factory();
        let err = factory.create_processor(Mode::Text, "minified").err().unwrap();
        assert!(err.to_string().contains("unknown text option 'minified'"));
    }

    #[test]
    fn test_unknown_code_style_falls_back_to_standard() {
        let factory = factory();
        for option in ["fancy", "casual", ""] {
            let processor = factory.create_processor(Mode::Code, option).unwrap();
            assert_eq!(processor.name(), factory.create_processor(Mode::Code, "standard").unwrap().name());
        }

        let processor = factory.create_processor(Mode::Code, "fancy").unwrap();
        let req = TransformRequest::new("const value = 1;", Mode::Code, "fancy", 1.0);
        let out = processor.process(&req, &mut ScriptedRandom::constant(0.0));
        assert_eq!(out, "// TODO: clean this up\nlet val = 1;");
    }

    #[test]
    fn test_created_processor_runs() {
        let processor = factory().create_processor(Mode::Code, "minified").unwrap();
        let req = TransformRequest::new("a();\n// gone\nb();", Mode::Code, "minified", 0.9);
        let out = processor.process(&req, &mut ScriptedRandom::constant(0.5));
        assert_eq!(out, "a();b();");
    }

    #[test]
    fn test_is_option_available() {
        assert!(ProcessorFactory::is_option_available(Mode::Text, "story"));
        assert!(!ProcessorFactory::is_option_available(Mode::Code, "story"));
    }
}
