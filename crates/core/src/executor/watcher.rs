use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Marker file, relative to the workspace root, whose changes request a rebuild
pub const MARKER_FILE: &str = ".cppbuild/rebuild";

pub fn marker_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(MARKER_FILE)
}

/// Watches the marker path and sends a trigger for every create, modify or
/// remove event on it.
///
/// The marker itself is never checked for; only its parent directory must
/// exist to be watched and is created when missing. Dropping the watcher
/// stops the triggers.
pub struct MarkerWatcher {
    _watcher: RecommendedWatcher,
}

impl MarkerWatcher {
    pub fn watch(marker: &Path, trigger: Sender<()>) -> Result<Self> {
        let parent = marker
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                Error::InvariantViolation(format!("marker path {marker:?} has no parent directory"))
            })?;
        fs::create_dir_all(parent)?;

        let target = marker.to_path_buf();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) if is_marker_event(&event, &target) => {
                debug!("Marker event {:?}, requesting rebuild", event.kind);
                // The receiver is gone once the session closed
                let _ = trigger.send(());
            }
            Ok(_) => {}
            Err(err) => warn!("Marker watch error: {}", err),
        })?;
        watcher.watch(parent, RecursiveMode::NonRecursive)?;

        debug!("Watching marker {:?}", marker);
        Ok(Self { _watcher: watcher })
    }
}

/// True for create/modify/remove events touching the marker file
pub(crate) fn is_marker_event(event: &Event, marker: &Path) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    );
    relevant
        && event
            .paths
            .iter()
            .any(|path| path == marker || path.file_name() == marker.file_name())
}
