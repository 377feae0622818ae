// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, Stderr, Stdout};

use super::Status;
use crate::traits::ConversionView;

/// Plays conversions onto the terminal: output on stdout, status on stderr.
///
/// Write failures are ignored; a closed pipe only loses the animation and the
/// caller still receives the result from the orchestrator.
pub struct TerminalView {
    out: Stdout,
    err: Stderr,
    show_status: bool,
}

impl TerminalView {
    pub fn new(show_status: bool) -> Self {
        Self {
            out: tokio::io::stdout(),
            err: tokio::io::stderr(),
            show_status,
        }
    }

    /// Terminates the revealed output with a newline.
    pub async fn finish(&mut self) {
        let _ = self.out.write_all(b"\n").await;
        let _ = self.out.flush().await;
    }
}

#[async_trait]
impl ConversionView for TerminalView {
    async fn show_status(&mut self, status: Status) {
        if self.show_status {
            let line = format!("[{}]\n", status);
            let _ = self.err.write_all(line.as_bytes()).await;
        }
    }

    // Already printed characters stay on screen.
    async fn clear_output(&mut self) {}

    async fn append_output(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf);
        let _ = self.out.write_all(encoded.as_bytes()).await;
        let _ = self.out.flush().await;
    }
}
