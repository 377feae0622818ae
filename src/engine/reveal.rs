// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Duration;

use crate::traits::{ConversionView, RandomSource};

/// Streams `text` into `view` one character at a time, pausing a random
/// duration in `[min, max)` between characters.
///
/// When `max <= min` every pause is `min` and no rolls are drawn. A zero pause
/// skips the timer entirely.
pub async fn reveal<V: ConversionView + ?Sized>(
    text: &str,
    view: &mut V,
    min: Duration,
    max: Duration,
    rng: &mut dyn RandomSource,
) {
    for ch in text.chars() {
        view.append_output(ch).await;

        let pause = if max > min {
            min + (max - min).mul_f64(rng.roll())
        } else {
            min
        };
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
    }
}
