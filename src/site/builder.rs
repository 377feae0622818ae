// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use super::page::PageSources;
use crate::config::BuildConfig;
use crate::errors::BuildError;
use crate::observability::messages::build::{AssetSkipped, BuildCompleted, BuildStarted};
use crate::observability::messages::StructuredLog;
use crate::rules::Rules;

/// Outcome of a successful build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub index_path: PathBuf,
    /// Destination paths of copied assets.
    pub copied: Vec<PathBuf>,
    /// Source paths of assets that could not be copied.
    pub skipped: Vec<PathBuf>,
}

/// Writes `index.html` and copies the configured logos and fonts.
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    config: BuildConfig,
    rules: Arc<Rules>,
}

impl SiteBuilder {
    pub fn new(config: BuildConfig, rules: Arc<Rules>) -> Self {
        Self { config, rules }
    }

    pub fn out_dir(&self) -> &Path {
        &self.config.out_dir
    }

    /// Run a full build.
    ///
    /// Failing to create the output directory or to write the page is fatal.
    /// Individual assets are best-effort and land in [`BuildReport::skipped`].
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let started = Instant::now();
        let out_dir = &self.config.out_dir;
        BuildStarted { out_dir }.log();

        fs::create_dir_all(out_dir).map_err(|source| BuildError::CreateOutputDir {
            path: out_dir.clone(),
            source,
        })?;

        let page = PageSources::load(&self.config.web_dir)?.render(self.rules.table())?;
        let index_path = out_dir.join("index.html");
        fs::write(&index_path, page).map_err(|source| BuildError::WritePage {
            path: index_path.clone(),
            source,
        })?;

        let mut report = BuildReport {
            index_path,
            ..Default::default()
        };
        self.copy_assets("logo", &self.config.logos, &mut report);
        self.copy_assets("fonts", &self.config.fonts, &mut report);

        BuildCompleted {
            out_dir,
            copied: report.copied.len(),
            skipped: report.skipped.len(),
            duration: started.elapsed(),
        }
        .log();

        Ok(report)
    }

    fn copy_assets(&self, group: &str, names: &[String], report: &mut BuildReport) {
        let source_dir = self.config.assets_dir.join(group);
        let dest_dir = self.config.out_dir.join("assets").join(group);

        if let Err(e) = fs::create_dir_all(&dest_dir) {
            for name in names {
                let source = source_dir.join(name);
                AssetSkipped {
                    source: &source,
                    reason: &e,
                }
                .log();
                report.skipped.push(source);
            }
            return;
        }

        for name in names {
            let source = source_dir.join(name);
            let dest = dest_dir.join(name);
            match fs::copy(&source, &dest) {
                Ok(_) => report.copied.push(dest),
                Err(e) => {
                    AssetSkipped {
                        source: &source,
                        reason: &e,
                    }
                    .log();
                    report.skipped.push(source);
                }
            }
        }
    }
}
