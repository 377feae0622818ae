// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use notify_debouncer_full::{new_debouncer, DebounceEventResult, Debouncer, FileIdMap};
use tokio::sync::mpsc;

use crate::errors::ServeError;
use crate::observability::messages::server::WatcherError;
use crate::observability::messages::StructuredLog;

/// Decides which changed paths should trigger a rebuild.
#[derive(Debug, Clone)]
pub struct ChangeFilter {
    root: PathBuf,
    out_dir: PathBuf,
    ignored: Vec<String>,
}

impl ChangeFilter {
    /// `out_dir` is resolved against `root` when relative. `ignored` holds
    /// directory names skipped at any depth.
    pub fn new(root: &Path, out_dir: &Path, ignored: Vec<String>) -> Self {
        let root = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        let out_dir = if out_dir.is_absolute() {
            fs::canonicalize(out_dir).unwrap_or_else(|_| out_dir.to_path_buf())
        } else {
            root.join(out_dir)
        };
        Self {
            root,
            out_dir,
            ignored,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_relevant(&self, path: &Path) -> bool {
        if path.starts_with(&self.out_dir) {
            return false;
        }
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        !relative.components().any(|component| match component {
            Component::Normal(name) => self.ignored.iter().any(|ignored| name == ignored.as_str()),
            _ => false,
        })
    }
}

/// Only content changes count; access events are noise.
fn is_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

/// Events closer together than this arrive as one batch.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(100);

pub type TreeWatcher = Debouncer<RecommendedWatcher, FileIdMap>;

/// Watch the filter's root recursively, forwarding one relevant path per
/// debounced batch of changes to `tx`.
///
/// The returned watcher must be kept alive for events to keep flowing. When
/// the channel is full the batch is dropped; the receiver rebuilds the whole
/// site anyway.
pub fn watch_tree(filter: ChangeFilter, tx: mpsc::Sender<PathBuf>) -> Result<TreeWatcher, ServeError> {
    let root = filter.root().to_path_buf();

    let mut debouncer = new_debouncer(DEBOUNCE_WINDOW, None, move |res: DebounceEventResult| match res {
        Ok(events) => {
            let changed = events
                .iter()
                .filter(|event| is_change(&event.kind))
                .flat_map(|event| event.paths.iter())
                .find(|path| filter.is_relevant(path));
            if let Some(path) = changed {
                let _ = tx.try_send(path.clone());
            }
        }
        Err(errors) => {
            for e in &errors {
                WatcherError { error: e }.log();
            }
        }
    })?;

    debouncer.watcher().watch(&root, RecursiveMode::Recursive)?;
    debouncer.cache().add_root(&root, RecursiveMode::Recursive);
    Ok(debouncer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn filter(temp: &TempDir) -> ChangeFilter {
        let ignored = ["node_modules", ".git", "target"].map(String::from).to_vec();
        ChangeFilter::new(temp.path(), Path::new("dist"), ignored)
    }

    #[test]
    fn test_filter_ignores_output_and_vendor_dirs() {
        let temp = TempDir::new().unwrap();
        let filter = filter(&temp);
        let root = filter.root().to_path_buf();

        assert!(filter.is_relevant(&root.join("web/app.js")));
        assert!(filter.is_relevant(&root.join("humarizer.yaml")));
        assert!(filter.is_relevant(&root.join("targets/notes.md")));

        assert!(!filter.is_relevant(&root.join("dist/index.html")));
        assert!(!filter.is_relevant(&root.join("node_modules/x/index.js")));
        assert!(!filter.is_relevant(&root.join(".git/HEAD")));
        assert!(!filter.is_relevant(&root.join("sub/target/debug/out")));
    }

    #[test]
    fn test_change_kinds() {
        use notify::event::{AccessKind, CreateKind};
        assert!(is_change(&EventKind::Create(CreateKind::File)));
        assert!(!is_change(&EventKind::Access(AccessKind::Any)));
    }

    #[tokio::test]
    async fn test_watcher_forwards_relevant_changes() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("dist")).unwrap();
        let (tx, mut rx) = mpsc::channel(16);
        let _watcher = watch_tree(filter(&temp), tx).unwrap();

        fs::write(temp.path().join("dist/index.html"), "ignored").unwrap();
        fs::write(temp.path().join("page.html"), "changed").unwrap();

        let path = tokio::time::timeout(Duration::from_secs(10), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(path.file_name().unwrap(), "page.html");
    }

    #[tokio::test]
    async fn test_burst_of_writes_is_batched() {
        let temp = TempDir::new().unwrap();
        let (tx, mut rx) = mpsc::channel(16);
        let _watcher = watch_tree(filter(&temp), tx).unwrap();

        for name in ["a.html", "b.css", "c.js"] {
            fs::write(temp.path().join(name), name).unwrap();
        }

        tokio::time::timeout(Duration::from_secs(10), rx.recv())
            .await
            .unwrap()
            .unwrap();
        tokio::time::sleep(DEBOUNCE_WINDOW * 5).await;

        let mut batches = 1;
        while rx.try_recv().is_ok() {
            batches += 1;
        }
        assert!(batches < 3, "{} batches for 3 writes", batches);
    }
}
