// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::SaveError;
use crate::ui::notifications::NotificationId;
use crate::ui::viewer;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::Message),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A save task finished.
    SaveCompleted {
        result: Result<(), SaveError>,
        /// Timestamp label the success feedback shows.
        timestamp_label: String,
        /// Whether the save originated in the preview modal.
        from_preview: bool,
    },
    /// Dismiss a toast notification.
    DismissNotification(NotificationId),
    /// Periodic tick for playback polling, overlay auto-hide, and toast
    /// auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional video path to preload on startup.
    pub file_path: Option<String>,
}
