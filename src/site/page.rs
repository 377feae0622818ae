// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Renders the single self-contained page.
//!
//! The template, stylesheet and browser script are compiled into the binary
//! and can be overridden file by file from a directory on disk, which is how
//! dev mode picks up edits without a recompile. The rule table is serialized
//! at render time and injected as a global the script reads, so the page
//! always runs on the same rules as the crate.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::errors::BuildError;
use crate::rules::RuleTable;

const TEMPLATE: &str = include_str!("../../web/index.html");
const STYLES: &str = include_str!("../../web/styles.css");
const SCRIPT: &str = include_str!("../../web/app.js");

pub const TEMPLATE_FILE: &str = "index.html";
pub const STYLES_FILE: &str = "styles.css";
pub const SCRIPT_FILE: &str = "app.js";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The three source files the page is assembled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSources {
    pub template: String,
    pub styles: String,
    pub script: String,
}

impl PageSources {
    /// The copies compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            template: TEMPLATE.to_string(),
            styles: STYLES.to_string(),
            script: SCRIPT.to_string(),
        }
    }

    /// Read each file from `dir`, keeping the embedded copy for any file
    /// that does not exist there. Other read errors are fatal.
    pub fn load(dir: &Path) -> Result<Self, BuildError> {
        Ok(Self {
            template: read_or(dir, TEMPLATE_FILE, TEMPLATE)?,
            styles: read_or(dir, STYLES_FILE, STYLES)?,
            script: read_or(dir, SCRIPT_FILE, SCRIPT)?,
        })
    }

    pub fn render(&self, table: &RuleTable) -> Result<String, BuildError> {
        let rules = rules_json(table)?;

        // rules go in last so placeholder-looking text inside them is left alone
        Ok(self
            .template
            .replace("{{styles}}", &self.styles)
            .replace("{{script}}", &self.script)
            .replace("{{version}}", VERSION)
            .replace("{{rules}}", &rules))
    }
}

fn read_or(dir: &Path, name: &str, embedded: &str) -> Result<String, BuildError> {
    let path = dir.join(name);
    match fs::read_to_string(&path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(embedded.to_string()),
        Err(source) => Err(BuildError::ReadSource { path, source }),
    }
}

/// Rule table as JSON safe to place inside a `<script>` element.
pub fn rules_json(table: &RuleTable) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(table)?.replace("</", "<\\/"))
}

/// Render with the embedded sources.
pub fn render_page(table: &RuleTable) -> Result<String, BuildError> {
    PageSources::embedded().render(table)
}
