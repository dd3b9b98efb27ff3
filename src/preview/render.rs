// SPDX-License-Identifier: MPL-2.0
//! One-way projection from transform state to an on-screen layout.
//!
//! Kept apart from the state-update logic so the engine stays rendering-
//! agnostic and testable without a display surface.

use super::transform::PreviewTransform;

/// Where and how large the preview image should be drawn, in stage
/// coordinates (origin at the stage's top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderLayout {
    /// Displayed image width after scaling.
    pub width: f32,
    /// Displayed image height after scaling.
    pub height: f32,
    /// Left edge of the image within the stage.
    pub left: f32,
    /// Top edge of the image within the stage.
    pub top: f32,
}

impl RenderLayout {
    /// Projects the transform into a stage-space rectangle.
    #[must_use]
    pub fn project(transform: &PreviewTransform) -> Self {
        let stage = transform.stage();
        let image = transform.image();

        let width = image.width * transform.scale;
        let height = image.height * transform.scale;

        Self {
            width,
            height,
            left: stage.width / 2.0 + transform.offset_x - width / 2.0,
            top: stage.height / 2.0 + transform.offset_y - height / 2.0,
        }
    }
}
