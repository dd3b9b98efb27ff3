// SPDX-License-Identifier: MPL-2.0
//! Transport session state: play/pause, seeking, and frame stepping.
//!
//! Bridges the seek bar and transport buttons to the playback surface. The
//! session mirrors the surface's reported state; it never drives playback
//! itself.

use crate::media::playback::{PlaybackEvent, PlaybackState};

/// Fixed frame-step interval in seconds.
pub const FRAME_STEP_SECS: f64 = 1.0 / 30.0;

/// Resolution of the seek bar's slider domain.
pub const SEEK_BAR_SCALE: f32 = 1000.0;

/// A step direction for frame-by-frame navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Backward,
    Forward,
}

impl StepDirection {
    fn signum(self) -> f64 {
        match self {
            Self::Backward => -1.0,
            Self::Forward => 1.0,
        }
    }
}

/// Commands the shell forwards to the playback surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportCommand {
    Play,
    Pause,
    /// Seek to an absolute position in seconds.
    Seek(f64),
    /// Pause, then seek: frame stepping always lands on a paused frame.
    StepTo(f64),
}

/// Mirror of the playback surface's externally visible state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transport {
    pub playback: PlaybackState,
    /// Current position in seconds.
    pub position: f64,
    /// Total duration in seconds, 0 while unknown.
    pub duration: f64,
}

impl Transport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a surface notification into the mirrored state.
    pub fn apply_event(&mut self, event: &PlaybackEvent) {
        match event {
            PlaybackEvent::MetadataLoaded(metadata) => {
                self.duration = metadata.duration_secs;
                self.position = 0.0;
            }
            PlaybackEvent::TimeUpdated(position) => {
                self.position = *position;
            }
            PlaybackEvent::Played => {
                self.playback = PlaybackState::Playing;
            }
            PlaybackEvent::Paused => {
                self.playback = PlaybackState::Paused;
            }
            PlaybackEvent::Ended => {
                self.playback = PlaybackState::Stopped;
            }
        }
    }

    /// Command for the play/pause toggle: play when paused, stopped, or
    /// ended; pause otherwise.
    #[must_use]
    pub fn toggle_command(&self) -> TransportCommand {
        if self.playback.is_playing() {
            TransportCommand::Pause
        } else {
            TransportCommand::Play
        }
    }

    /// Target position for a frame step, clamped to `[0, duration]`.
    /// Stepping always pauses playback first.
    #[must_use]
    pub fn step_target(&self, direction: StepDirection) -> f64 {
        (self.position + direction.signum() * FRAME_STEP_SECS).clamp(0.0, self.duration)
    }

    /// Seek bar position in the slider's `0..=SEEK_BAR_SCALE` domain.
    #[must_use]
    pub fn slider_value(&self) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        // Ratio is within [0, 1]; the product fits f32 comfortably.
        #[allow(clippy::cast_possible_truncation)]
        {
            ((self.position / self.duration).clamp(0.0, 1.0) * f64::from(SEEK_BAR_SCALE)) as f32
        }
    }

    /// Position in seconds for a slider value in `0..=SEEK_BAR_SCALE`.
    #[must_use]
    pub fn seek_seconds_for(&self, slider: f32) -> f64 {
        f64::from(slider / SEEK_BAR_SCALE) * self.duration
    }

    /// Progress label in the `position / duration` form.
    #[must_use]
    pub fn progress_label(&self) -> String {
        use crate::media::filename::format_timestamp;
        format!(
            "{}  /  {}",
            format_timestamp(self.position),
            format_timestamp(self.duration)
        )
    }
}
