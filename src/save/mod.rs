// SPDX-License-Identifier: MPL-2.0
//! Save dispatcher: deliver an encoded frame to platform storage.
//!
//! Three mutually exclusive backends, chosen once per save request:
//!
//! 1. **Mobile shell**: gallery media-store integration; the payload is
//!    passed as raw bytes, no storage permission required.
//! 2. **Desktop shell**: write into `Pictures/VideoCaptures/`, creating
//!    the directory first when absent. The existence check and creation are
//!    awaited in sequence before the write.
//! 3. **Browser**: the host's download mechanism; fire-and-forget, no
//!    failure channel by construction.
//!
//! Concurrent saves race independently: there is no mutual exclusion,
//! ordering guarantee, or cancellation across overlapping requests.

pub mod bridge;
pub mod native;

pub use bridge::{BaseDirectory, HostBridge};
pub use native::NativeBridge;

use crate::error::SaveError;

/// Directory created under the Pictures location for desktop saves.
pub const CAPTURES_DIR: &str = "VideoCaptures";

/// Runtime host environment, evaluated in priority order: mobile shell
/// first, then any application shell, then plain browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEnvironment {
    MobileShell,
    DesktopShell,
    Browser,
}

impl HostEnvironment {
    /// Queries the bridge once and picks the first matching environment.
    #[must_use]
    pub fn detect<B: HostBridge>(bridge: &B) -> Self {
        if bridge.is_mobile_shell() {
            Self::MobileShell
        } else if bridge.is_app_shell() {
            Self::DesktopShell
        } else {
            Self::Browser
        }
    }
}

/// Dispatches encoded frames to exactly one storage backend.
#[derive(Debug, Clone, Default)]
pub struct SaveDispatcher<B> {
    bridge: B,
}

impl<B: HostBridge> SaveDispatcher<B> {
    #[must_use]
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    /// Delivers `jpeg` under `file_name` via the backend the environment
    /// selects.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`SaveError`] unchanged; never retries. The
    /// browser path always succeeds from the dispatcher's point of view.
    pub async fn save(&self, jpeg: &[u8], file_name: &str) -> Result<(), SaveError> {
        match HostEnvironment::detect(&self.bridge) {
            HostEnvironment::MobileShell => self.bridge.save_to_gallery(file_name, jpeg).await,
            HostEnvironment::DesktopShell => {
                // The directory must exist before the write is attempted.
                if !self
                    .bridge
                    .exists(CAPTURES_DIR, BaseDirectory::Pictures)
                    .await?
                {
                    self.bridge
                        .make_directory(CAPTURES_DIR, BaseDirectory::Pictures, true)
                        .await?;
                }
                self.bridge
                    .write_file(
                        &format!("{}/{}", CAPTURES_DIR, file_name),
                        jpeg,
                        BaseDirectory::Pictures,
                    )
                    .await
            }
            HostEnvironment::Browser => {
                self.bridge.trigger_download(file_name, jpeg);
                Ok(())
            }
        }
    }

    /// The bridge backing this dispatcher.
    #[must_use]
    pub fn bridge(&self) -> &B {
        &self.bridge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// What a fixture bridge recorded, in program order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Gallery(String),
        Exists(String),
        MakeDirectory(String),
        WriteFile(String),
        Download(String),
    }

    /// Configurable environment fixture that records backend calls.
    struct FixtureBridge {
        mobile: bool,
        app_shell: bool,
        dir_exists: bool,
        fail_write: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl FixtureBridge {
        fn new(mobile: bool, app_shell: bool) -> Self {
            Self {
                mobile,
                app_shell,
                dir_exists: false,
                fail_write: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: Call) {
            self.calls.lock().expect("call log poisoned").push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().expect("call log poisoned").clone()
        }
    }

    impl HostBridge for FixtureBridge {
        fn is_mobile_shell(&self) -> bool {
            self.mobile
        }

        fn is_app_shell(&self) -> bool {
            self.app_shell
        }

        async fn save_to_gallery(&self, file_name: &str, _bytes: &[u8]) -> Result<(), SaveError> {
            self.record(Call::Gallery(file_name.to_string()));
            Ok(())
        }

        async fn exists(&self, path: &str, _base: BaseDirectory) -> Result<bool, SaveError> {
            self.record(Call::Exists(path.to_string()));
            Ok(self.dir_exists)
        }

        async fn make_directory(
            &self,
            path: &str,
            _base: BaseDirectory,
            recursive: bool,
        ) -> Result<(), SaveError> {
            assert!(recursive, "directory creation must be recursive");
            self.record(Call::MakeDirectory(path.to_string()));
            Ok(())
        }

        async fn write_file(
            &self,
            path: &str,
            _bytes: &[u8],
            _base: BaseDirectory,
        ) -> Result<(), SaveError> {
            self.record(Call::WriteFile(path.to_string()));
            if self.fail_write {
                return Err(SaveError::Filesystem("disk full".to_string()));
            }
            Ok(())
        }

        fn trigger_download(&self, file_name: &str, _bytes: &[u8]) {
            self.record(Call::Download(file_name.to_string()));
        }
    }

    #[test]
    fn environment_detection_honors_priority_order() {
        assert_eq!(
            HostEnvironment::detect(&FixtureBridge::new(true, true)),
            HostEnvironment::MobileShell
        );
        assert_eq!(
            HostEnvironment::detect(&FixtureBridge::new(false, true)),
            HostEnvironment::DesktopShell
        );
        assert_eq!(
            HostEnvironment::detect(&FixtureBridge::new(false, false)),
            HostEnvironment::Browser
        );
    }

    #[tokio::test]
    async fn mobile_shell_routes_to_the_gallery_only() {
        let dispatcher = SaveDispatcher::new(FixtureBridge::new(true, true));
        dispatcher
            .save(b"jpeg", "clip.jpg")
            .await
            .expect("gallery save should succeed");

        assert_eq!(
            dispatcher.bridge().calls(),
            vec![Call::Gallery("clip.jpg".to_string())]
        );
    }

    #[tokio::test]
    async fn desktop_shell_checks_then_creates_then_writes() {
        let dispatcher = SaveDispatcher::new(FixtureBridge::new(false, true));
        dispatcher
            .save(b"jpeg", "clip.jpg")
            .await
            .expect("filesystem save should succeed");

        assert_eq!(
            dispatcher.bridge().calls(),
            vec![
                Call::Exists(CAPTURES_DIR.to_string()),
                Call::MakeDirectory(CAPTURES_DIR.to_string()),
                Call::WriteFile("VideoCaptures/clip.jpg".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn desktop_shell_skips_creation_when_directory_exists() {
        let mut bridge = FixtureBridge::new(false, true);
        bridge.dir_exists = true;
        let dispatcher = SaveDispatcher::new(bridge);

        dispatcher
            .save(b"jpeg", "clip.jpg")
            .await
            .expect("filesystem save should succeed");

        assert_eq!(
            dispatcher.bridge().calls(),
            vec![
                Call::Exists(CAPTURES_DIR.to_string()),
                Call::WriteFile("VideoCaptures/clip.jpg".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn browser_routes_to_the_download_trigger_and_never_fails() {
        let dispatcher = SaveDispatcher::new(FixtureBridge::new(false, false));
        dispatcher
            .save(b"jpeg", "clip.jpg")
            .await
            .expect("browser save cannot fail");

        assert_eq!(
            dispatcher.bridge().calls(),
            vec![Call::Download("clip.jpg".to_string())]
        );
    }

    #[tokio::test]
    async fn backend_failure_surfaces_unchanged() {
        let mut bridge = FixtureBridge::new(false, true);
        bridge.dir_exists = true;
        bridge.fail_write = true;
        let dispatcher = SaveDispatcher::new(bridge);

        let result = dispatcher.save(b"jpeg", "clip.jpg").await;
        assert_eq!(
            result.unwrap_err(),
            SaveError::Filesystem("disk full".to_string())
        );
    }
}
