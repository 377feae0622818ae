// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Two-mode conversion state machine.
//!
//! The orchestrator owns the current mode, option and intensity, runs the
//! selected processor, appends the result to history and then plays it back
//! through a [`ConversionView`]. The playback is cosmetic: the string returned
//! from [`Orchestrator::convert`] is always the processor's output.

use std::fmt;
use std::time::Duration;

use crate::config::OrchestratorConfig;
use crate::errors::ProcessorError;
use crate::history::{HistoryEntry, HistoryStore, KeyValueStore, HISTORY_KEY};
use crate::observability::messages::history::HistoryPersistFailed;
use crate::observability::messages::processor::ConversionStarted;
use crate::observability::messages::StructuredLog;
use crate::processors::{Intensity, Mode, ProcessorFactory, TransformRequest};
use crate::traits::{ConversionView, RandomSource, ThreadRandom};

use super::reveal::reveal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ready,
    Processing,
    Complete,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Ready => "Ready",
            Status::Processing => "Processing",
            Status::Complete => "Complete",
        };
        f.write_str(label)
    }
}

/// Delays applied around a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Pause before the processor runs.
    pub processing_delay: Duration,
    pub reveal_min: Duration,
    pub reveal_max: Duration,
    /// How long `Complete` stays up before returning to `Ready`.
    pub settle: Duration,
}

impl Timing {
    /// No pauses at all.
    pub fn instant() -> Self {
        Self {
            processing_delay: Duration::ZERO,
            reveal_min: Duration::ZERO,
            reveal_max: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(800),
            reveal_min: Duration::from_millis(1),
            reveal_max: Duration::from_millis(7),
            settle: Duration::from_millis(2000),
        }
    }
}

impl From<&OrchestratorConfig> for Timing {
    fn from(config: &OrchestratorConfig) -> Self {
        Self {
            processing_delay: Duration::from_millis(config.processing_delay_ms),
            reveal_min: Duration::from_millis(config.reveal_min_ms),
            reveal_max: Duration::from_millis(config.reveal_max_ms),
            settle: Duration::from_millis(config.settle_ms),
        }
    }
}

/// What a mode switch means for the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeView {
    pub mode: Mode,
    pub options: &'static [&'static str],
    pub selected: &'static str,
    pub placeholder: &'static str,
}

impl ModeView {
    fn of(mode: Mode) -> Self {
        Self {
            mode,
            options: ProcessorFactory::list_available_options(mode),
            selected: mode.default_option(),
            placeholder: mode.placeholder(),
        }
    }
}

pub struct Orchestrator<S: KeyValueStore> {
    factory: ProcessorFactory,
    history: HistoryStore<S>,
    rng: Box<dyn RandomSource>,
    timing: Timing,
    mode: Mode,
    option: String,
    intensity: Intensity,
    status: Status,
}

impl<S: KeyValueStore> Orchestrator<S> {
    /// Starts in text mode with the `casual` tone selected.
    pub fn new(factory: ProcessorFactory, history: HistoryStore<S>, timing: Timing) -> Self {
        Self {
            factory,
            history,
            rng: Box::new(ThreadRandom),
            timing,
            mode: Mode::Text,
            option: Mode::Text.default_option().to_string(),
            intensity: Intensity::default(),
            status: Status::Ready,
        }
    }

    /// Replaces the randomness used by transforms and reveal jitter.
    pub fn with_random(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_intensity(mut self, intensity: impl Into<Intensity>) -> Self {
        self.intensity = intensity.into();
        self
    }

    /// Switches mode and selects that mode's first option.
    pub fn set_mode(&mut self, mode: Mode) -> ModeView {
        let view = ModeView::of(mode);
        self.mode = mode;
        self.option = view.selected.to_string();
        view
    }

    /// Selects an option of the current mode.
    pub fn set_option(&mut self, option: &str) -> Result<(), ProcessorError> {
        if !ProcessorFactory::is_option_available(self.mode, option) {
            return Err(ProcessorError::UnknownOption {
                mode: self.mode,
                option: option.to_string(),
                available: ProcessorFactory::list_available_options(self.mode).to_vec(),
            });
        }
        self.option = option.to_ascii_lowercase();
        Ok(())
    }

    pub fn set_intensity(&mut self, intensity: impl Into<Intensity>) {
        self.intensity = intensity.into();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn option(&self) -> &str {
        &self.option
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryStore<S> {
        &mut self.history
    }

    /// Runs one conversion and plays it into `view`.
    ///
    /// Returns `Ok(None)` without touching the view when `input` is empty.
    /// A history write failure is logged and the conversion still completes.
    pub async fn convert<V: ConversionView + ?Sized>(
        &mut self,
        input: &str,
        view: &mut V,
    ) -> Result<Option<String>, ProcessorError> {
        if input.is_empty() {
            return Ok(None);
        }

        let processor = self.factory.create_processor(self.mode, &self.option)?;
        let request = TransformRequest::new(input, self.mode, self.option.clone(), self.intensity);

        ConversionStarted {
            mode: self.mode.as_str(),
            option: &self.option,
            intensity: self.intensity.get(),
            input_size: input.chars().count(),
        }
        .log();

        self.update_status(Status::Processing, view).await;
        view.clear_output().await;
        pause(self.timing.processing_delay).await;

        let output = processor.process(&request, self.rng.as_mut());

        if let Err(e) = self.history.save(HistoryEntry::new(&request, output.clone())) {
            HistoryPersistFailed {
                key: HISTORY_KEY,
                error: &e,
            }
            .log();
        }

        reveal(
            &output,
            view,
            self.timing.reveal_min,
            self.timing.reveal_max,
            self.rng.as_mut(),
        )
        .await;

        self.update_status(Status::Complete, view).await;
        pause(self.timing.settle).await;
        self.update_status(Status::Ready, view).await;

        Ok(Some(output))
    }

    async fn update_status<V: ConversionView + ?Sized>(&mut self, status: Status, view: &mut V) {
        self.status = status;
        view.show_status(status).await;
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
