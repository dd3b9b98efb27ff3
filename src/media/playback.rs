// SPDX-License-Identifier: MPL-2.0
//! Playback surface port definition and playback state.
//!
//! This crate performs no video decoding of its own: the playback facility
//! is an external collaborator reached through the [`PlaybackSurface`]
//! trait. The embedding host registers an adapter with the application
//! shell; none ships in-tree.
//!
//! # Design Notes
//!
//! - The surface is **stateful** - it maintains the current playback position
//! - Methods are not `async` - the Iced framework handles threading via `Task`
//! - Notifications are drained with `poll_events` from the shell's tick

use crate::error::PlaybackError;
use std::path::Path;
use std::sync::Arc;

/// Represents the current playback state of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Video is stopped (no media, at beginning, or at end).
    #[default]
    Stopped,
    /// Video is currently playing.
    Playing,
    /// Video is paused at current position.
    Paused,
}

impl PlaybackState {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the video is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the video is stopped.
    #[must_use]
    pub fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }
}

/// Notifications a playback surface fires as it progresses.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// Dimensions and duration became known.
    MetadataLoaded(VideoMetadata),
    /// The playback position advanced.
    TimeUpdated(f64),
    /// Playback started.
    Played,
    /// Playback paused.
    Paused,
    /// Playback reached the end of the video.
    Ended,
}

/// Static properties of an opened video.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoMetadata {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Total duration in seconds.
    pub duration_secs: f64,
}

impl VideoMetadata {
    #[must_use]
    pub fn new(width: u32, height: u32, duration_secs: f64) -> Self {
        Self {
            width,
            height,
            duration_secs,
        }
    }
}

/// An RGBA snapshot of the surface's current visual contents.
///
/// Uses `Arc<Vec<u8>>` to avoid expensive clones when passing frame data
/// around.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrame {
    rgba: Arc<Vec<u8>>,
    width: u32,
    height: u32,
}

impl RawFrame {
    /// Creates a frame from RGBA pixel data.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            rgba: Arc::new(rgba),
            width,
            height,
        }
    }

    /// RGBA pixel data, 4 bytes per pixel.
    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Port for the host's media-playback facility.
///
/// Mirrors the surface the original app drives: current time, duration,
/// dimensions, play/pause/seek, plus on-demand rasterization of the
/// currently displayed frame.
pub trait PlaybackSurface: Send {
    /// Opens a video file and returns its metadata.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] if the file cannot be opened or is not a
    /// playable video.
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, PlaybackError>;

    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback at the current position.
    fn pause(&mut self);

    /// Seeks to the given position in seconds. Implementations clamp to the
    /// valid range.
    fn seek(&mut self, position_secs: f64);

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Total duration in seconds, 0 while unknown.
    fn duration(&self) -> f64;

    /// Current frame dimensions, `(0, 0)` until metadata is loaded.
    fn dimensions(&self) -> (u32, u32);

    /// Whether playback is currently paused or stopped.
    fn is_paused(&self) -> bool;

    /// Rasterizes the currently displayed frame. Returns `None` while the
    /// surface has nothing to show.
    fn rasterize(&self) -> Option<RawFrame>;

    /// Drains notifications accumulated since the last poll.
    fn poll_events(&mut self) -> Vec<PlaybackEvent>;
}
