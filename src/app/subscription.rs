// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (keyboard, mouse, touch, window) into the viewer
//! component and drives the periodic tick that polls playback and expires
//! transient UI.

use super::Message;
use crate::ui::viewer;
use iced::{event, mouse, time, Subscription};
use std::time::Duration;

/// Routes raw window/input events to the viewer component.
///
/// Wheel scroll is always routed (the preview zoom must win over any
/// scrollable content); other events only when nothing else captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        let route = |event: iced::Event| Some(Message::Viewer(viewer::Message::RawEvent(event)));

        match &event {
            iced::Event::Window(
                iced::window::Event::Resized(_)
                | iced::window::Event::FileDropped(_)
                | iced::window::Event::FileHovered(_)
                | iced::window::Event::FilesHoveredLeft,
            ) => route(event.clone()),
            iced::Event::Mouse(mouse::Event::WheelScrolled { .. }) => route(event.clone()),
            iced::Event::Mouse(_) | iced::Event::Touch(_) | iced::Event::Keyboard(_) => {
                match status {
                    event::Status::Ignored => route(event.clone()),
                    event::Status::Captured => None,
                }
            }
            _ => None,
        }
    })
}

/// Creates a periodic tick subscription while anything needs it: an open
/// playback surface, a visible overlay flash, or pending toasts.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
