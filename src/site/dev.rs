// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dev mode: serve the build output and rebuild when sources change.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;

use super::builder::SiteBuilder;
use super::server::{bind_with_fallback, serve};
use super::watcher::{watch_tree, ChangeFilter};
use crate::config::{load_or_default, Config};
use crate::errors::{ConfigError, ServeError};
use crate::observability::messages::build::{BuildFailed, ConfigReloadFailed};
use crate::observability::messages::server::RebuildTriggered;
use crate::observability::messages::StructuredLog;

const CHANGE_QUEUE_DEPTH: usize = 64;

/// Serve until Ctrl+C. Expects the initial build to have run already.
///
/// `config_path` is the file `config` came from, if any; it is read again
/// before every rebuild. The server keeps the output directory and port it
/// started with.
pub async fn run_dev_server(
    config: &Config,
    config_path: Option<&Path>,
    builder: SiteBuilder,
) -> Result<(), ServeError> {
    let (tx, rx) = mpsc::channel(CHANGE_QUEUE_DEPTH);
    let filter = ChangeFilter::new(
        &config.watch.root,
        &config.build.out_dir,
        config.watch.ignore.clone(),
    );
    let _watcher = watch_tree(filter, tx)?;

    let out_dir = builder.out_dir().to_path_buf();
    let rebuilds = tokio::spawn(rebuild_on_change(
        rx,
        config_path.map(Path::to_path_buf),
        builder,
    ));

    let listener = bind_with_fallback(
        &config.server.host,
        config.server.port,
        config.server.fallback_port,
    )
    .await?;
    let result = serve(listener, out_dir, shutdown_signal()).await;

    rebuilds.abort();
    result
}

/// Rebuild once per batch of changes until the sender side closes.
///
/// Each rebuild reloads the config and recompiles the rule table first, so
/// edits to either show up in the next page. If the reload fails the last
/// good builder is used. Builds run one at a time on the blocking pool, and
/// a failed build is logged while the previous output keeps being served.
pub async fn rebuild_on_change(
    mut rx: mpsc::Receiver<PathBuf>,
    config_path: Option<PathBuf>,
    mut builder: SiteBuilder,
) {
    while let Some(path) = rx.recv().await {
        RebuildTriggered { path: &path }.log();

        let source = config_path.clone();
        let previous = builder.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            let site = match reload_builder(source.as_deref()) {
                Ok(site) => site,
                Err(e) => {
                    ConfigReloadFailed { error: &e }.log();
                    previous
                }
            };
            let built = site.build();
            (site, built)
        })
        .await;

        match outcome {
            Ok((site, built)) => {
                if let Err(e) = built {
                    BuildFailed { error: &e }.log();
                }
                builder = site;
            }
            Err(e) => BuildFailed { error: &e }.log(),
        }
    }
}

fn reload_builder(config_path: Option<&Path>) -> Result<SiteBuilder, ConfigError> {
    let config = load_or_default(config_path)?;
    let rules = config.compile_rules()?;
    Ok(SiteBuilder::new(config.build, Arc::new(rules)))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // no signal handler available: run until the process is killed
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::rules::Rules;
    use std::fs;
    use tempfile::TempDir;

    fn default_builder(temp: &TempDir) -> SiteBuilder {
        SiteBuilder::new(
            BuildConfig {
                out_dir: temp.path().join("dist"),
                assets_dir: temp.path().join("assets"),
                web_dir: temp.path().join("web"),
                ..Default::default()
            },
            Arc::new(Rules::builtin().unwrap()),
        )
    }

    fn write_config(temp: &TempDir, filler: &str) -> PathBuf {
        let root = temp.path().display();
        let yaml = format!(
            "build:\n  out_dir: {root}/dist\n  assets_dir: {root}/assets\n  web_dir: {root}/web\nrules:\n  casual_fillers: [\"{filler}\"]\n"
        );
        let path = temp.path().join("humarizer.yaml");
        fs::write(&path, yaml).unwrap();
        path
    }

    async fn rebuild_once(config_path: Option<PathBuf>, builder: SiteBuilder, changed: PathBuf) {
        let (tx, rx) = mpsc::channel(8);
        tx.send(changed).await.unwrap();
        drop(tx);
        rebuild_on_change(rx, config_path, builder).await;
    }

    #[tokio::test]
    async fn test_rebuild_picks_up_edited_page_source() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(&temp, " tbh");
        let web_dir = temp.path().join("web");
        fs::create_dir_all(&web_dir).unwrap();
        fs::write(web_dir.join("app.js"), "console.log('edited script');").unwrap();

        rebuild_once(Some(config_path), default_builder(&temp), web_dir.join("app.js")).await;

        let page = fs::read_to_string(temp.path().join("dist/index.html")).unwrap();
        assert!(page.contains("console.log('edited script');"));
    }

    #[tokio::test]
    async fn test_rebuild_reloads_rule_table() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(&temp, " zorp");

        rebuild_once(Some(config_path.clone()), default_builder(&temp), config_path).await;

        let page = fs::read_to_string(temp.path().join("dist/index.html")).unwrap();
        assert!(page.contains("\"casual_fillers\":[\" zorp\"]"));
    }

    #[tokio::test]
    async fn test_broken_config_keeps_previous_builder() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("humarizer.yaml");
        fs::write(&config_path, "build: [unclosed\n").unwrap();

        rebuild_once(Some(config_path.clone()), default_builder(&temp), config_path).await;

        assert!(temp.path().join("dist/index.html").is_file());
    }

    #[tokio::test]
    async fn test_every_batch_rebuilds_site() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(&temp, " tbh");
        let (tx, rx) = mpsc::channel(8);
        for name in ["a.html", "b.css", "c.js"] {
            tx.send(temp.path().join(name)).await.unwrap();
        }
        drop(tx);

        rebuild_on_change(rx, Some(config_path), default_builder(&temp)).await;

        assert!(temp.path().join("dist/index.html").is_file());
    }
}
