// SPDX-License-Identifier: MPL-2.0
//! Viewer component: upload stage, player stage, and the preview modal.
//!
//! The component interprets raw window/input events forwarded by the
//! subscription and answers every message with an [`Effect`] the
//! application shell executes (loading media, driving the playback surface,
//! capturing and saving frames).

pub mod view;

use crate::media::capture::CapturedFrame;
use crate::media::is_supported_video;
use crate::media::playback::{PlaybackEvent, VideoMetadata};
use crate::media::transport::{StepDirection, Transport, TransportCommand};
use crate::preview::{self, gesture::TouchPoint, transform::Extent};
use iced::keyboard::{self, key::Named};
use iced::widget::image::Handle;
use iced::{mouse, touch, window};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Height reserved for the preview modal's header row.
pub const PREVIEW_HEADER_HEIGHT: f32 = 48.0;

/// Height reserved for the preview modal's footer row.
pub const PREVIEW_FOOTER_HEIGHT: f32 = 56.0;

/// Padding around the preview stage.
pub const PREVIEW_PADDING: f32 = 16.0;

/// Time threshold for double-click detection on the stage.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// Which stage of the viewer is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for a video file (drop zone).
    #[default]
    Upload,
    /// A video is loaded and the player controls are shown.
    Player,
}

/// Viewer component state.
#[derive(Debug, Default)]
pub struct State {
    phase: Phase,
    file_name: Option<String>,
    metadata: Option<VideoMetadata>,
    transport: Transport,
    preview: Option<preview::State>,
    /// Most recent rasterization of the playback surface, if any.
    video_frame: Option<Handle>,
    /// Last known window size, kept for stage geometry.
    window: Extent,
    /// Last cursor position in window coordinates.
    cursor: TouchPoint,
    drop_hover: bool,
    last_stage_click: Option<Instant>,
}

/// Messages for the viewer component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A raw window/input event routed in by the subscription.
    RawEvent(iced::Event),
    /// The drop zone's browse button was pressed.
    OpenFilePressed,
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    PlayPausePressed,
    /// The seek bar moved; value in the slider's `0..=1000` domain.
    SeekChanged(f32),
    StepBackwardPressed,
    StepForwardPressed,
    /// Capture the current frame and save it.
    CapturePressed,
    /// Capture the current frame and open the preview modal.
    PreviewPressed,
    ChangeVideoPressed,
    ThemeTogglePressed,
    ClosePreviewPressed,
    /// Save the frame shown in the preview modal.
    SavePreviewPressed,
    /// A message for the open preview cluster.
    Preview(preview::Message),
}

/// Effects the application shell executes on the component's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Open the file-picker dialog.
    PickFile,
    /// Load the given video file.
    Load(PathBuf),
    /// Forward a command to the playback surface.
    Transport(TransportCommand),
    /// Capture the current frame and dispatch a save.
    CaptureAndSave,
    /// Capture the current frame and open the preview.
    OpenPreview,
    /// Save the preview's frame.
    SavePreview,
    /// Tear down the playback surface and return to the drop zone.
    CloseVideo,
    /// Flip the theme and persist the choice.
    ToggleTheme,
    /// Show a transient warning toast.
    Warn(&'static str),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a viewer message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::RawEvent(event) => match self.map_raw_event(&event) {
                Some(mapped) => self.handle(mapped),
                None => Effect::None,
            },
            Message::OpenFilePressed => Effect::PickFile,
            Message::FileDropped(path) => {
                self.drop_hover = false;
                if self.phase != Phase::Upload {
                    return Effect::None;
                }
                if is_supported_video(&path) {
                    Effect::Load(path)
                } else {
                    Effect::Warn("Please drop a video file")
                }
            }
            Message::PlayPausePressed => Effect::Transport(self.transport.toggle_command()),
            Message::SeekChanged(slider) => {
                let seconds = self.transport.seek_seconds_for(slider);
                self.transport.position = seconds;
                Effect::Transport(TransportCommand::Seek(seconds))
            }
            Message::StepBackwardPressed => self.step(StepDirection::Backward),
            Message::StepForwardPressed => self.step(StepDirection::Forward),
            Message::CapturePressed => Effect::CaptureAndSave,
            Message::PreviewPressed => Effect::OpenPreview,
            Message::ChangeVideoPressed => {
                self.reset_to_upload();
                Effect::CloseVideo
            }
            Message::ThemeTogglePressed => Effect::ToggleTheme,
            Message::ClosePreviewPressed => {
                self.preview = None;
                Effect::None
            }
            Message::SavePreviewPressed => Effect::SavePreview,
            Message::Preview(preview_msg) => {
                if let Some(preview) = &mut self.preview {
                    preview.handle(preview_msg);
                }
                Effect::None
            }
        }
    }

    fn step(&mut self, direction: StepDirection) -> Effect {
        let target = self.transport.step_target(direction);
        self.transport.playback = crate::media::playback::PlaybackState::Paused;
        self.transport.position = target;
        Effect::Transport(TransportCommand::StepTo(target))
    }

    /// Translates a raw Iced event into a component message, honoring the
    /// preview modal's capture of input while it is open.
    fn map_raw_event(&mut self, event: &iced::Event) -> Option<Message> {
        match event {
            iced::Event::Window(window::Event::Resized(size)) => {
                self.window = Extent::new(size.width, size.height);
                let stage = self.stage_extent();
                self.preview
                    .is_some()
                    .then(|| Message::Preview(preview::Message::StageResized(stage)))
            }
            iced::Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path.clone()))
            }
            iced::Event::Window(window::Event::FileHovered(_)) => {
                self.drop_hover = true;
                None
            }
            iced::Event::Window(window::Event::FilesHoveredLeft) => {
                self.drop_hover = false;
                None
            }
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.map_key(key.as_ref())
            }
            iced::Event::Mouse(mouse_event) => self.map_mouse_event(mouse_event),
            iced::Event::Touch(touch_event) => self.map_touch_event(touch_event),
            _ => None,
        }
    }

    fn map_key(&self, key: keyboard::Key<&str>) -> Option<Message> {
        if self.phase != Phase::Player {
            return None;
        }

        if self.preview.is_some() {
            return match key {
                keyboard::Key::Named(Named::Escape) => Some(Message::ClosePreviewPressed),
                keyboard::Key::Character("+" | "=") => {
                    Some(Message::Preview(preview::Message::ZoomInPressed))
                }
                keyboard::Key::Character("-") => {
                    Some(Message::Preview(preview::Message::ZoomOutPressed))
                }
                keyboard::Key::Character("0") => {
                    Some(Message::Preview(preview::Message::FitPressed))
                }
                keyboard::Key::Character("1") => {
                    Some(Message::Preview(preview::Message::ActualSizePressed))
                }
                _ => None,
            };
        }

        match key {
            keyboard::Key::Named(Named::Space) => Some(Message::PlayPausePressed),
            keyboard::Key::Named(Named::ArrowLeft) => Some(Message::StepBackwardPressed),
            keyboard::Key::Named(Named::ArrowRight) => Some(Message::StepForwardPressed),
            keyboard::Key::Named(Named::Enter) => Some(Message::CapturePressed),
            keyboard::Key::Character("p" | "P") => Some(Message::PreviewPressed),
            _ => None,
        }
    }

    fn map_mouse_event(&mut self, event: &mouse::Event) -> Option<Message> {
        // Track the cursor even while the modal is closed so wheel zoom has
        // an anchor the moment it opens.
        if let mouse::Event::CursorMoved { position } = event {
            self.cursor = TouchPoint::new(position.x, position.y);
        }

        if self.preview.is_none() {
            return None;
        }

        match event {
            mouse::Event::CursorMoved { .. } => Some(Message::Preview(
                preview::Message::PointerMoved(self.stage_point(self.cursor)),
            )),
            mouse::Event::WheelScrolled { delta } => {
                let notches = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y,
                };
                if notches == 0.0 {
                    return None;
                }
                Some(Message::Preview(preview::Message::Wheel {
                    notches,
                    anchor: self.stage_point(self.cursor),
                }))
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let now = Instant::now();
                let is_double = self
                    .last_stage_click
                    .is_some_and(|t| now.duration_since(t) < DOUBLE_CLICK_THRESHOLD);

                if is_double {
                    self.last_stage_click = None; // Reset to avoid triple-click
                    Some(Message::Preview(preview::Message::DoubleClicked))
                } else {
                    self.last_stage_click = Some(now);
                    Some(Message::Preview(preview::Message::PointerPressed(
                        self.stage_point(self.cursor),
                    )))
                }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                Some(Message::Preview(preview::Message::PointerReleased))
            }
            _ => None,
        }
    }

    fn map_touch_event(&self, event: &touch::Event) -> Option<Message> {
        if self.preview.is_none() {
            return None;
        }

        match event {
            touch::Event::FingerPressed { id, position } => {
                Some(Message::Preview(preview::Message::FingerPressed {
                    id: id.0,
                    at: self.stage_point(TouchPoint::new(position.x, position.y)),
                }))
            }
            touch::Event::FingerMoved { id, position } => {
                Some(Message::Preview(preview::Message::FingerMoved {
                    id: id.0,
                    at: self.stage_point(TouchPoint::new(position.x, position.y)),
                }))
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                Some(Message::Preview(preview::Message::FingerLifted { id: id.0 }))
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SHELL API
    // ═══════════════════════════════════════════════════════════════════════

    /// Switches to the player stage for a freshly loaded file.
    pub fn load_started(&mut self, file_name: String) {
        self.phase = Phase::Player;
        self.file_name = Some(file_name);
        self.metadata = None;
        self.transport = Transport::new();
        self.preview = None;
        self.video_frame = None;
    }

    /// Folds a playback surface notification into the session state.
    pub fn apply_playback_event(&mut self, event: &PlaybackEvent) {
        if let PlaybackEvent::MetadataLoaded(metadata) = event {
            self.metadata = Some(*metadata);
        }
        self.transport.apply_event(event);
    }

    /// Shows the latest rasterized frame in the player area.
    pub fn set_video_frame(&mut self, frame: Option<Handle>) {
        self.video_frame = frame;
    }

    /// Opens the preview modal for a captured frame.
    pub fn open_preview(&mut self, frame: CapturedFrame) {
        self.preview = Some(preview::State::open(frame, self.stage_extent()));
    }

    fn reset_to_upload(&mut self) {
        self.phase = Phase::Upload;
        self.file_name = None;
        self.metadata = None;
        self.transport = Transport::new();
        self.preview = None;
        self.video_frame = None;
    }

    /// The preview stage's dimensions within the current window.
    #[must_use]
    pub fn stage_extent(&self) -> Extent {
        Extent::new(
            self.window.width - 2.0 * PREVIEW_PADDING,
            self.window.height - PREVIEW_HEADER_HEIGHT - PREVIEW_FOOTER_HEIGHT
                - 2.0 * PREVIEW_PADDING,
        )
    }

    /// Converts a window coordinate into stage coordinates.
    #[must_use]
    pub fn stage_point(&self, window_point: TouchPoint) -> TouchPoint {
        TouchPoint::new(
            window_point.x - PREVIEW_PADDING,
            window_point.y - PREVIEW_HEADER_HEIGHT - PREVIEW_PADDING,
        )
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn has_media(&self) -> bool {
        self.phase == Phase::Player
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&VideoMetadata> {
        self.metadata.as_ref()
    }

    #[must_use]
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    #[must_use]
    pub fn preview(&self) -> Option<&preview::State> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn preview_frame(&self) -> Option<&CapturedFrame> {
        self.preview.as_ref().map(preview::State::frame)
    }

    #[must_use]
    pub fn video_frame(&self) -> Option<&Handle> {
        self.video_frame.as_ref()
    }

    #[must_use]
    pub fn drop_hover(&self) -> bool {
        self.drop_hover
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::playback::PlaybackState;
    use crate::test_utils::assert_abs_diff_eq;
    use std::sync::Arc;

    fn sample_frame() -> CapturedFrame {
        CapturedFrame {
            jpeg_data: Arc::new(vec![0xFF, 0xD8, 0xFF, 0xD9]),
            width: 640,
            height: 480,
            timestamp: 2.0,
        }
    }

    fn player_state() -> State {
        let mut state = State::new();
        state.window = Extent::new(800.0, 650.0);
        state.load_started("clip.mp4".to_string());
        state.apply_playback_event(&PlaybackEvent::MetadataLoaded(VideoMetadata::new(
            640, 480, 10.0,
        )));
        state
    }

    #[test]
    fn starts_in_the_upload_phase() {
        let state = State::new();
        assert_eq!(state.phase(), Phase::Upload);
        assert!(!state.has_media());
    }

    #[test]
    fn dropping_a_video_loads_it() {
        let mut state = State::new();
        let effect = state.handle(Message::FileDropped(PathBuf::from("movie.mp4")));
        assert_eq!(effect, Effect::Load(PathBuf::from("movie.mp4")));
    }

    #[test]
    fn dropping_a_non_video_warns_without_state_change() {
        let mut state = State::new();
        let effect = state.handle(Message::FileDropped(PathBuf::from("image.png")));
        assert_eq!(effect, Effect::Warn("Please drop a video file"));
        assert_eq!(state.phase(), Phase::Upload);
    }

    #[test]
    fn drops_are_ignored_in_the_player_phase() {
        let mut state = player_state();
        let effect = state.handle(Message::FileDropped(PathBuf::from("other.mp4")));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn load_started_switches_to_player() {
        let state = player_state();
        assert_eq!(state.phase(), Phase::Player);
        assert_eq!(state.file_name(), Some("clip.mp4"));
        assert_abs_diff_eq!(state.transport().duration, 10.0);
    }

    #[test]
    fn play_pause_toggle_follows_transport_state() {
        let mut state = player_state();
        assert_eq!(
            state.handle(Message::PlayPausePressed),
            Effect::Transport(TransportCommand::Play)
        );

        state.apply_playback_event(&PlaybackEvent::Played);
        assert_eq!(
            state.handle(Message::PlayPausePressed),
            Effect::Transport(TransportCommand::Pause)
        );
    }

    #[test]
    fn seek_updates_position_optimistically() {
        let mut state = player_state();
        let effect = state.handle(Message::SeekChanged(500.0));

        assert_eq!(effect, Effect::Transport(TransportCommand::Seek(5.0)));
        assert_abs_diff_eq!(state.transport().position, 5.0);
    }

    #[test]
    fn stepping_pauses_and_targets_the_next_frame() {
        let mut state = player_state();
        state.apply_playback_event(&PlaybackEvent::Played);
        state.apply_playback_event(&PlaybackEvent::TimeUpdated(1.0));

        let effect = state.handle(Message::StepForwardPressed);
        match effect {
            Effect::Transport(TransportCommand::StepTo(target)) => {
                assert_abs_diff_eq!(target, 1.0 + 1.0 / 30.0, epsilon = 1e-9);
            }
            other => panic!("expected StepTo, got {other:?}"),
        }
        assert_eq!(state.transport().playback, PlaybackState::Paused);
    }

    #[test]
    fn change_video_returns_to_upload() {
        let mut state = player_state();
        let effect = state.handle(Message::ChangeVideoPressed);

        assert_eq!(effect, Effect::CloseVideo);
        assert_eq!(state.phase(), Phase::Upload);
        assert!(state.file_name().is_none());
    }

    #[test]
    fn open_preview_fits_to_the_stage() {
        let mut state = player_state();
        state.open_preview(sample_frame());

        let preview = state.preview().expect("preview should be open");
        // Stage is 768x514 for an 800x650 window; fit never exceeds 1.0.
        assert!(preview.transform().scale <= 1.0);
        assert!(state.preview_frame().is_some());
    }

    #[test]
    fn close_preview_drops_the_frame() {
        let mut state = player_state();
        state.open_preview(sample_frame());
        state.handle(Message::ClosePreviewPressed);

        assert!(state.preview().is_none());
        assert!(state.preview_frame().is_none());
    }

    #[test]
    fn keyboard_is_inert_in_the_upload_phase() {
        let state = State::new();
        let msg = state.map_key(keyboard::Key::Named(Named::Space));
        assert!(msg.is_none());
    }

    #[test]
    fn keyboard_drives_the_player() {
        let state = player_state();
        assert!(matches!(
            state.map_key(keyboard::Key::Named(Named::Space)),
            Some(Message::PlayPausePressed)
        ));
        assert!(matches!(
            state.map_key(keyboard::Key::Named(Named::ArrowLeft)),
            Some(Message::StepBackwardPressed)
        ));
        assert!(matches!(
            state.map_key(keyboard::Key::Character("p")),
            Some(Message::PreviewPressed)
        ));
        assert!(matches!(
            state.map_key(keyboard::Key::Named(Named::Enter)),
            Some(Message::CapturePressed)
        ));
    }

    #[test]
    fn keyboard_targets_the_preview_while_open() {
        let mut state = player_state();
        state.open_preview(sample_frame());

        assert!(matches!(
            state.map_key(keyboard::Key::Named(Named::Escape)),
            Some(Message::ClosePreviewPressed)
        ));
        assert!(matches!(
            state.map_key(keyboard::Key::Character("+")),
            Some(Message::Preview(preview::Message::ZoomInPressed))
        ));
        assert!(matches!(
            state.map_key(keyboard::Key::Character("0")),
            Some(Message::Preview(preview::Message::FitPressed))
        ));
        // Player shortcuts are captured by the modal.
        assert!(state.map_key(keyboard::Key::Named(Named::Space)).is_none());
    }

    #[test]
    fn stage_point_subtracts_the_chrome() {
        let state = player_state();
        let point = state.stage_point(TouchPoint::new(100.0, 100.0));
        assert_abs_diff_eq!(point.x, 100.0 - PREVIEW_PADDING);
        assert_abs_diff_eq!(point.y, 100.0 - PREVIEW_HEADER_HEIGHT - PREVIEW_PADDING);
    }

    #[test]
    fn double_click_on_the_stage_refits() {
        let mut state = player_state();
        state.open_preview(sample_frame());
        state.handle(Message::Preview(preview::Message::ZoomInPressed));
        let fitted_scale = {
            let mut fresh = preview::State::open(sample_frame(), state.stage_extent());
            fresh.handle(preview::Message::FitPressed);
            fresh.transform().scale
        };

        let press = iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        state.handle(Message::RawEvent(press.clone()));
        state.handle(Message::RawEvent(iced::Event::Mouse(
            mouse::Event::ButtonReleased(mouse::Button::Left),
        )));
        state.handle(Message::RawEvent(press));

        let preview = state.preview().expect("preview should be open");
        assert_abs_diff_eq!(preview.transform().scale, fitted_scale);
    }
}
