// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the viewer with the toast notification layer.

use super::{App, Message};
use crate::ui::notifications::Manager;
use crate::ui::viewer::view::{self as viewer_view, ViewContext as ViewerViewContext};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Element, Length, Padding};

/// Renders the application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let viewer = viewer_view::view(ViewerViewContext {
        state: &app.viewer,
        overlay: &app.overlay,
        theme_label: app.theme_mode.toggle_label(),
    })
    .map(Message::Viewer);

    if app.notifications.has_notifications() {
        Stack::new()
            .push(viewer)
            .push(toast_layer(&app.notifications))
            .into()
    } else {
        viewer
    }
}

fn toast_layer(notifications: &Manager) -> Element<'_, Message> {
    let mut column = Column::new().spacing(8).align_x(alignment::Horizontal::Right);

    for notification in notifications.visible() {
        column = column.push(
            button(Text::new(notification.message().to_string()))
                .on_press(Message::DismissNotification(notification.id())),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding::new(16.0))
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .into()
}
