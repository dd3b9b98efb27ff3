// SPDX-License-Identifier: MPL-2.0
//! Desktop host bridge backed by the local filesystem.

use super::bridge::{BaseDirectory, HostBridge};
use crate::error::SaveError;
use std::path::PathBuf;

/// Host bridge for desktop application shells.
///
/// Resolves [`BaseDirectory::Pictures`] through the platform's standard
/// directories and performs storage calls with `tokio::fs`.
#[derive(Debug, Clone, Default)]
pub struct NativeBridge {
    /// Pictures-directory override, used by tests and portable installs.
    pictures_root: Option<PathBuf>,
}

impl NativeBridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `root` instead of the platform Pictures directory.
    #[must_use]
    pub fn with_pictures_root(root: PathBuf) -> Self {
        Self {
            pictures_root: Some(root),
        }
    }

    fn resolve(&self, path: &str, base: BaseDirectory) -> Result<PathBuf, SaveError> {
        let root = match base {
            BaseDirectory::Pictures => self
                .pictures_root
                .clone()
                .or_else(dirs::picture_dir)
                .ok_or(SaveError::PicturesUnavailable)?,
        };
        Ok(root.join(path))
    }
}

impl HostBridge for NativeBridge {
    fn is_mobile_shell(&self) -> bool {
        cfg!(any(target_os = "android", target_os = "ios"))
    }

    fn is_app_shell(&self) -> bool {
        true
    }

    async fn save_to_gallery(&self, _file_name: &str, _bytes: &[u8]) -> Result<(), SaveError> {
        // Desktop hosts have no media gallery; the dispatcher never routes
        // here unless the platform misreports itself.
        Err(SaveError::Gallery(
            "gallery storage is not available on this host".to_string(),
        ))
    }

    async fn exists(&self, path: &str, base: BaseDirectory) -> Result<bool, SaveError> {
        let full = self.resolve(path, base)?;
        tokio::fs::try_exists(&full)
            .await
            .map_err(|e| SaveError::Filesystem(e.to_string()))
    }

    async fn make_directory(
        &self,
        path: &str,
        base: BaseDirectory,
        recursive: bool,
    ) -> Result<(), SaveError> {
        let full = self.resolve(path, base)?;
        let result = if recursive {
            tokio::fs::create_dir_all(&full).await
        } else {
            tokio::fs::create_dir(&full).await
        };
        result.map_err(|e| SaveError::Filesystem(e.to_string()))
    }

    async fn write_file(
        &self,
        path: &str,
        bytes: &[u8],
        base: BaseDirectory,
    ) -> Result<(), SaveError> {
        let full = self.resolve(path, base)?;
        tokio::fs::write(&full, bytes)
            .await
            .map_err(|e| SaveError::Filesystem(e.to_string()))
    }

    fn trigger_download(&self, _file_name: &str, _bytes: &[u8]) {
        // Unreachable on desktop: is_app_shell() always routes earlier.
    }
}
