// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Executes the effects the viewer component requests: file loading,
//! transport commands against the playback surface, frame capture, and
//! save dispatch. Save tasks run concurrently and independently; there is
//! no serialization across overlapping requests.

use super::{App, Message};
use crate::config;
use crate::error::{CaptureError, SaveError};
use crate::media::capture::{capture_current_frame, CapturedFrame};
use crate::media::filename::{build_filename, format_timestamp};
use crate::media::playback::PlaybackEvent;
use crate::media::transport::TransportCommand;
use crate::media::VIDEO_EXTENSIONS;
use crate::ui::notifications::Notification;
use crate::ui::viewer;
use iced::widget::image::Handle;
use iced::Task;
use std::path::Path;
use std::sync::Arc;

/// Warning shown when capture is requested before playback is ready.
const NOT_READY_WARNING: &str = "Video not ready yet";

/// Processes one top-level message.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Viewer(msg) => {
            let effect = app.viewer.handle(msg);
            run_effect(app, effect)
        }
        Message::OpenFileDialogResult(Some(path)) => {
            load_video(app, &path);
            Task::none()
        }
        Message::OpenFileDialogResult(None) => Task::none(),
        Message::SaveCompleted {
            result,
            timestamp_label,
            from_preview,
        } => {
            handle_save_completed(app, result, &timestamp_label, from_preview);
            Task::none()
        }
        Message::DismissNotification(id) => {
            app.notifications.dismiss(id);
            Task::none()
        }
        Message::Tick(_) => {
            tick(app);
            Task::none()
        }
    }
}

fn run_effect(app: &mut App, effect: viewer::Effect) -> Task<Message> {
    match effect {
        viewer::Effect::None => Task::none(),
        viewer::Effect::PickFile => {
            let dialog = rfd::AsyncFileDialog::new()
                .set_title("Open Video")
                .add_filter("Video", VIDEO_EXTENSIONS);

            Task::perform(
                async move {
                    dialog
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::OpenFileDialogResult,
            )
        }
        viewer::Effect::Load(path) => {
            load_video(app, &path);
            Task::none()
        }
        viewer::Effect::Transport(command) => {
            if let Some(surface) = &mut app.surface {
                match command {
                    TransportCommand::Play => surface.play(),
                    TransportCommand::Pause => surface.pause(),
                    TransportCommand::Seek(seconds) => surface.seek(seconds),
                    TransportCommand::StepTo(seconds) => {
                        surface.pause();
                        surface.seek(seconds);
                    }
                }
            }
            Task::none()
        }
        viewer::Effect::CaptureAndSave => match capture(app) {
            Ok(frame) => save_frame_task(app, frame, false),
            Err(_) => {
                app.notifications.push(Notification::warning(NOT_READY_WARNING));
                Task::none()
            }
        },
        viewer::Effect::OpenPreview => {
            match capture(app) {
                Ok(frame) => app.viewer.open_preview(frame),
                Err(_) => app
                    .notifications
                    .push(Notification::warning(NOT_READY_WARNING)),
            }
            Task::none()
        }
        viewer::Effect::SavePreview => match app.viewer.preview_frame().cloned() {
            Some(frame) => save_frame_task(app, frame, true),
            None => Task::none(),
        },
        viewer::Effect::CloseVideo => {
            app.surface = None;
            Task::none()
        }
        viewer::Effect::ToggleTheme => {
            app.theme_mode = app.theme_mode.toggled();
            let result = config::save(&config::Config {
                theme_mode: app.theme_mode,
            });
            if let Err(error) = result {
                eprintln!("Failed to save config: {:?}", error);
            }
            Task::none()
        }
        viewer::Effect::Warn(message) => {
            app.notifications.push(Notification::warning(message));
            Task::none()
        }
    }
}

/// Opens `path` through the registered playback factory and switches the
/// viewer into the player stage.
fn load_video(app: &mut App, path: &Path) {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("video")
        .to_string();

    let Some(factory) = &app.surface_factory else {
        app.notifications
            .push(Notification::warning("No playback backend available"));
        return;
    };

    let opened = factory(path).and_then(|mut surface| {
        surface.open(path).map(|metadata| (surface, metadata))
    });

    match opened {
        Ok((surface, metadata)) => {
            app.viewer.load_started(file_name);
            app.viewer
                .apply_playback_event(&PlaybackEvent::MetadataLoaded(metadata));
            app.surface = Some(surface);
        }
        Err(error) => {
            app.notifications
                .push(Notification::error(format!("Could not load video: {error}")));
        }
    }
}

fn capture(app: &App) -> Result<CapturedFrame, CaptureError> {
    match &app.surface {
        Some(surface) => capture_current_frame(surface.as_ref()),
        None => Err(CaptureError::SurfaceUnavailable),
    }
}

/// Spawns an independent save task for a captured frame.
fn save_frame_task(app: &App, frame: CapturedFrame, from_preview: bool) -> Task<Message> {
    let base_name = app.viewer.file_name().unwrap_or("video").to_string();
    let file_name = build_filename(&base_name, frame.timestamp);
    let timestamp_label = format_timestamp(frame.timestamp);
    let dispatcher = Arc::clone(&app.dispatcher);

    Task::perform(
        async move { dispatcher.save(frame.jpeg_data.as_slice(), &file_name).await },
        move |result| Message::SaveCompleted {
            result,
            timestamp_label: timestamp_label.clone(),
            from_preview,
        },
    )
}

fn handle_save_completed(
    app: &mut App,
    result: Result<(), SaveError>,
    timestamp_label: &str,
    from_preview: bool,
) {
    match result {
        Ok(()) => {
            app.notifications.push(Notification::success(format!(
                "Saved to Pictures/VideoCaptures — {timestamp_label}"
            )));
            if !from_preview {
                app.overlay.flash(format!("Saved at {timestamp_label}"));
            }
        }
        Err(error) => {
            eprintln!("Save failed: {}", error);
            app.notifications
                .push(Notification::error("Save failed — check permissions"));
        }
    }
}

/// Periodic housekeeping: expire transient UI and poll the playback surface.
fn tick(app: &mut App) {
    app.notifications.tick();
    app.overlay.tick();

    if let Some(surface) = &mut app.surface {
        for event in surface.poll_events() {
            app.viewer.apply_playback_event(&event);
        }

        let frame = surface
            .rasterize()
            .map(|raw| Handle::from_rgba(raw.width(), raw.height(), raw.rgba().to_vec()));
        app.viewer.set_video_frame(frame);
    }
}
