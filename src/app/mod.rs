// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer, the
//! playback surface, and the save dispatcher.
//!
//! The `App` struct wires together the components and translates viewer
//! effects into side effects like save dispatch or config persistence.
//! Policy decisions (window sizing, persistence format, theme switching)
//! stay close to the main update loop so user-facing behavior is easy to
//! audit.

pub mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::error::PlaybackError;
use crate::media::playback::PlaybackSurface;
use crate::save::{NativeBridge, SaveDispatcher};
use crate::ui::notifications;
use crate::ui::overlay::OverlayFlash;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds a playback surface for a video file. Registered by the embedding
/// host; the crate ships no decoder of its own.
pub type SurfaceFactory =
    Box<dyn Fn(&Path) -> Result<Box<dyn PlaybackSurface>, PlaybackError> + Send + Sync>;

/// Root Iced application state bridging the viewer component, playback,
/// and persisted preferences.
pub struct App {
    pub(crate) viewer: viewer::State,
    pub(crate) notifications: notifications::Manager,
    pub(crate) overlay: OverlayFlash,
    pub(crate) theme_mode: ThemeMode,
    pub(crate) surface: Option<Box<dyn PlaybackSurface>>,
    pub(crate) surface_factory: Option<SurfaceFactory>,
    pub(crate) dispatcher: Arc<SaveDispatcher<NativeBridge>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_media", &self.viewer.has_media())
            .field("theme_mode", &self.theme_mode)
            .field("has_surface", &self.surface.is_some())
            .finish()
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs`: runs the shell without a playback
/// backend. Loading a file then reports a warning instead of playing.
pub fn run(flags: Flags) -> iced::Result {
    run_with_surface(flags, None)
}

/// Launches the Iced application loop with an optional playback factory
/// registered by the embedding host.
pub fn run_with_surface(flags: Flags, factory: Option<SurfaceFactory>) -> iced::Result {
    use std::cell::RefCell;

    // Wrap the one-shot boot payload in RefCell<Option<_>> to satisfy the
    // Fn trait requirement while only consuming it once (iced 0.14
    // requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some((flags, factory)));
    let boot = move || {
        let (flags, factory) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, factory)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally preloads a video path
    /// received from the launcher.
    fn new(flags: Flags, factory: Option<SurfaceFactory>) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let app = App {
            viewer: viewer::State::new(),
            notifications: notifications::Manager::new(),
            overlay: OverlayFlash::new(),
            theme_mode: config.theme_mode,
            surface: None,
            surface_factory: factory,
            dispatcher: Arc::new(SaveDispatcher::new(NativeBridge::new())),
        };

        let task = match flags.file_path {
            Some(path) => Task::done(Message::Viewer(viewer::Message::FileDropped(
                PathBuf::from(path),
            ))),
            None => Task::none(),
        };

        (app, task)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.needs_tick()),
        ])
    }

    fn title(&self) -> String {
        match self.viewer.file_name() {
            Some(name) => format!("{name} — Frame Lens"),
            None => "Frame Lens".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    /// The tick only runs while something consumes it.
    fn needs_tick(&self) -> bool {
        self.surface.is_some()
            || self.overlay.is_visible()
            || self.notifications.has_notifications()
    }
}
