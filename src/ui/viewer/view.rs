// SPDX-License-Identifier: MPL-2.0
//! View rendering for the viewer component.

use super::{Message, Phase, State};
use crate::media::filename::format_timestamp;
use crate::media::transport::SEEK_BAR_SCALE;
use crate::preview;
use crate::ui::overlay::OverlayFlash;
use iced::widget::{button, slider, Column, Container, Image, Row, Stack, Text};
use iced::{alignment, Element, Length, Padding};

/// Context required to render the viewer.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub overlay: &'a OverlayFlash,
    /// Label for the theme toggle button.
    pub theme_label: &'a str,
}

/// Renders the viewer for its current phase, with the preview modal on top
/// when one is open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base: Element<'_, Message> = match ctx.state.phase() {
        Phase::Upload => upload_view(ctx.state),
        Phase::Player => player_view(&ctx),
    };

    match ctx.state.preview() {
        Some(preview) => Stack::new()
            .push(base)
            .push(preview_modal(preview))
            .into(),
        None => base,
    }
}

fn upload_view(state: &State) -> Element<'_, Message> {
    let prompt = if state.drop_hover() {
        "Drop to load the video"
    } else {
        "Drag & drop a video here"
    };

    let drop_zone = Column::new()
        .spacing(12)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(prompt).size(20))
        .push(Text::new("or"))
        .push(button(Text::new("Browse files")).on_press(Message::OpenFilePressed));

    Container::new(drop_zone)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn player_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let transport = state.transport();

    let top_bar = Row::new()
        .spacing(10)
        .padding(10)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(state.file_name().unwrap_or("(untitled)"))
                .width(Length::Fill),
        )
        .push(button(Text::new(ctx.theme_label)).on_press(Message::ThemeTogglePressed))
        .push(button(Text::new("Change video")).on_press(Message::ChangeVideoPressed));

    let video_area = video_area(state, ctx.overlay);

    let seek_row = Row::new()
        .spacing(10)
        .padding(Padding::new(10.0))
        .align_y(alignment::Vertical::Center)
        .push(Text::new(format_timestamp(transport.position)))
        .push(
            slider(
                0.0..=SEEK_BAR_SCALE,
                transport.slider_value(),
                Message::SeekChanged,
            )
            .step(1.0)
            .width(Length::Fill),
        )
        .push(Text::new(format_timestamp(transport.duration)));

    let play_label = if transport.playback.is_playing() {
        "Pause"
    } else {
        "Play"
    };

    let controls = Row::new()
        .spacing(10)
        .padding(Padding::new(10.0))
        .align_y(alignment::Vertical::Center)
        .push(button(Text::new("Previous frame")).on_press(Message::StepBackwardPressed))
        .push(button(Text::new(play_label)).on_press(Message::PlayPausePressed))
        .push(button(Text::new("Next frame")).on_press(Message::StepForwardPressed))
        .push(Text::new(transport.progress_label()).width(Length::Fill))
        .push(button(Text::new("Preview")).on_press(Message::PreviewPressed))
        .push(button(Text::new("Save frame")).on_press(Message::CapturePressed));

    Column::new()
        .push(top_bar)
        .push(video_area)
        .push(seek_row)
        .push(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn video_area<'a>(state: &'a State, overlay: &'a OverlayFlash) -> Element<'a, Message> {
    let frame: Element<'_, Message> = match state.video_frame() {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(Text::new("Waiting for playback…"))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    };

    let area = Container::new(frame)
        .width(Length::Fill)
        .height(Length::Fill);

    match overlay.message() {
        Some(message) => Stack::new()
            .push(area)
            .push(
                Container::new(Text::new(message.to_string()).size(24))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center),
            )
            .into(),
        None => area.into(),
    }
}

fn preview_modal(preview: &preview::State) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(10)
        .padding(Padding::new(8.0))
        .align_y(alignment::Vertical::Center)
        .push(Text::new("Frame preview").width(Length::Fill))
        .push(Text::new(preview.timestamp_label().to_string()))
        .push(Text::new(preview.frame().resolution_label()))
        .push(button(Text::new("−")).on_press(Message::Preview(
            preview::Message::ZoomOutPressed,
        )))
        .push(Text::new(preview.zoom_label()))
        .push(button(Text::new("+")).on_press(Message::Preview(
            preview::Message::ZoomInPressed,
        )))
        .push(button(Text::new("Fit")).on_press(Message::Preview(preview::Message::FitPressed)))
        .push(button(Text::new("1:1")).on_press(Message::Preview(
            preview::Message::ActualSizePressed,
        )))
        .push(button(Text::new("✕")).on_press(Message::ClosePreviewPressed));

    let stage = stage_view(preview);

    let footer = Row::new()
        .spacing(10)
        .padding(Padding::new(8.0))
        .align_y(alignment::Vertical::Center)
        .push(iced::widget::space::horizontal())
        .push(button(Text::new("Save frame")).on_press(Message::SavePreviewPressed));

    Container::new(
        Column::new()
            .push(header)
            .push(stage)
            .push(footer)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::widget::container::rounded_box)
    .into()
}

/// Draws the preview image where the render projection places it. The stage
/// clips the overflow; offsets past the stage edge stay in the transform
/// state even when the padding clamps at zero.
fn stage_view(preview: &preview::State) -> Element<'_, Message> {
    let layout = preview.layout();

    let image = Image::new(preview.image_handle().clone())
        .width(Length::Fixed(layout.width.max(1.0)))
        .height(Length::Fixed(layout.height.max(1.0)));

    Container::new(Container::new(image).padding(Padding {
        top: layout.top.max(0.0),
        right: 0.0,
        bottom: 0.0,
        left: layout.left.max(0.0),
    }))
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(Padding::new(super::PREVIEW_PADDING))
    .clip(true)
    .into()
}
