// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Capture(CaptureError),
    Save(SaveError),
    Playback(PlaybackError),
}

/// Failure modes of frame capture.
///
/// Capture never propagates beyond the immediate caller; the UI turns these
/// into a transient warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The playback surface has no valid dimensions yet (metadata not loaded).
    SurfaceUnavailable,

    /// The frame could not be encoded as JPEG.
    Encoding(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::SurfaceUnavailable => write!(f, "Video is not ready for capture"),
            CaptureError::Encoding(msg) => write!(f, "Frame encoding failed: {}", msg),
        }
    }
}

/// Failure surfaced by the save dispatcher.
///
/// One value per dispatch, never retried. The browser-download path has no
/// failure channel by construction and therefore never produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// The gallery backend rejected the write (permission, quota).
    Gallery(String),

    /// A filesystem-bridge call failed (existence check, mkdir, write).
    Filesystem(String),

    /// The platform exposes no Pictures directory to write under.
    PicturesUnavailable,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Gallery(msg) => write!(f, "Gallery save failed: {}", msg),
            SaveError::Filesystem(msg) => write!(f, "Filesystem save failed: {}", msg),
            SaveError::PicturesUnavailable => write!(f, "No Pictures directory available"),
        }
    }
}

/// Errors reported by a playback surface when opening media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The file is not a recognized video type.
    UnsupportedFormat,

    /// No playback backend is registered with the application shell.
    NoBackend,

    /// The backend failed to open or play the file.
    Backend(String),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::UnsupportedFormat => write!(f, "Unsupported video format"),
            PlaybackError::NoBackend => write!(f, "No playback backend available"),
            PlaybackError::Backend(msg) => write!(f, "Playback failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Capture(e) => write!(f, "Capture Error: {}", e),
            Error::Save(e) => write!(f, "Save Error: {}", e),
            Error::Playback(e) => write!(f, "Playback Error: {}", e),
        }
    }
}

impl From<CaptureError> for Error {
    fn from(err: CaptureError) -> Self {
        Error::Capture(err)
    }
}

impl From<SaveError> for Error {
    fn from(err: SaveError) -> Self {
        Error::Save(err)
    }
}

impl From<PlaybackError> for Error {
    fn from(err: PlaybackError) -> Self {
        Error::Playback(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
