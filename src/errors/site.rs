// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for the site build and the dev server.
//!
//! Missing assets are not errors: the builder skips them and reports them in
//! its `BuildReport`. Everything here aborts the build or the server.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("cannot create output directory '{path}': {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write '{path}': {source}")]
    WritePage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read page source '{path}': {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot embed rule table into page: {0}")]
    EmbedRules(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid listen address '{0}'")]
    InvalidAddress(String),

    #[error("file watcher failed: {0}")]
    Watch(#[from] notify::Error),

    #[error("server terminated: {0}")]
    Server(#[source] std::io::Error),

    #[error(transparent)]
    Build(#[from] BuildError),
}
