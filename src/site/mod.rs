// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Static site build and the dev server.

pub mod builder;
pub mod dev;
pub mod page;
pub mod server;
pub mod watcher;

pub use builder::{BuildReport, SiteBuilder};
pub use dev::run_dev_server;
pub use page::{render_page, rules_json, PageSources, VERSION};
pub use server::{bind_with_fallback, router, serve};
pub use watcher::{watch_tree, ChangeFilter, TreeWatcher};
