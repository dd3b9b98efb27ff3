// SPDX-License-Identifier: MPL-2.0
//! Media concerns: playback port, frame capture, transport session, and the
//! capture filename convention.

pub mod capture;
pub mod filename;
pub mod playback;
pub mod transport;

pub use capture::{capture_current_frame, CapturedFrame};
pub use playback::{PlaybackEvent, PlaybackState, PlaybackSurface, RawFrame, VideoMetadata};
pub use transport::{Transport, TransportCommand};

use std::path::Path;

/// File extensions accepted as video input, for drop validation and the
/// open-file dialog filter.
pub const VIDEO_EXTENSIONS: &[&str] = &["avi", "m4v", "mkv", "mov", "mp4", "webm"];

/// Quick extension-based check that a path looks like a supported video.
#[must_use]
pub fn is_supported_video(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            VIDEO_EXTENSIONS.iter().any(|candidate| *candidate == ext)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn recognizes_common_video_extensions() {
        assert!(is_supported_video(&PathBuf::from("clip.mp4")));
        assert!(is_supported_video(&PathBuf::from("clip.MOV")));
        assert!(is_supported_video(&PathBuf::from("/videos/a.webm")));
    }

    #[test]
    fn rejects_non_video_paths() {
        assert!(!is_supported_video(&PathBuf::from("image.png")));
        assert!(!is_supported_video(&PathBuf::from("no_extension")));
        assert!(!is_supported_video(&PathBuf::from("notes.txt")));
    }
}
