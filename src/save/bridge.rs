// SPDX-License-Identifier: MPL-2.0
//! Host bridge port definition.
//!
//! The bridge is the crate's view of the embedding host: environment
//! queries plus the storage primitives each save backend needs. The
//! desktop implementation lives in [`crate::save::native`]; mobile shells
//! and browser hosts supply their own.

use crate::error::SaveError;

/// Base directory a relative filesystem-bridge path resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDirectory {
    /// The platform's standard "Pictures" location.
    Pictures,
}

/// Port for host environment detection and storage primitives.
///
/// Bridge calls are genuinely asynchronous: each one may suspend on host
/// I/O while the UI keeps processing events. The dispatcher awaits them in
/// program order.
#[allow(async_fn_in_trait)]
pub trait HostBridge: Send + Sync {
    /// Whether the host is a mobile application shell.
    fn is_mobile_shell(&self) -> bool;

    /// Whether the host is any application shell (as opposed to a plain
    /// browser environment).
    fn is_app_shell(&self) -> bool;

    /// Writes bytes into the mobile OS media gallery under `file_name`.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] when the gallery rejects the write.
    async fn save_to_gallery(&self, file_name: &str, bytes: &[u8]) -> Result<(), SaveError>;

    /// Checks whether `path` exists under `base`.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] when the check itself fails.
    async fn exists(&self, path: &str, base: BaseDirectory) -> Result<bool, SaveError>;

    /// Creates the directory `path` under `base`, recursively when asked.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] when creation fails.
    async fn make_directory(
        &self,
        path: &str,
        base: BaseDirectory,
        recursive: bool,
    ) -> Result<(), SaveError>;

    /// Writes `bytes` to `path` under `base`, overwriting an existing file.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] when the write fails.
    async fn write_file(&self, path: &str, bytes: &[u8], base: BaseDirectory)
        -> Result<(), SaveError>;

    /// Triggers the host's native download mechanism. Fire-and-forget: the
    /// host exposes no write confirmation, so this cannot fail.
    fn trigger_download(&self, file_name: &str, bytes: &[u8]);
}
