// SPDX-License-Identifier: MPL-2.0
//! Zoom/pan transform state for the frame preview.
//!
//! The image's center is anchored to the stage center, then translated by
//! `(offset_x, offset_y)` and scaled by `scale` with the scale origin at the
//! stage center. Because both center-anchored and cursor-anchored zoom share
//! this one offset representation, `zoom_around` only ever adjusts offsets.
//!
//! All coordinates handed to this module are stage-relative (origin at the
//! stage's top-left corner). The engine carries no rendering concerns; see
//! [`crate::preview::render`] for the projection into an on-screen layout.

/// Smallest permitted zoom scale.
pub const ZOOM_MIN: f32 = 0.05;

/// Largest permitted zoom scale.
pub const ZOOM_MAX: f32 = 16.0;

/// Fraction applied per wheel notch; buttons and keyboard use twice this.
pub const ZOOM_STEP: f32 = 0.15;

/// Width/height pair for the stage or the image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// An extent with a zero or negative dimension carries no usable layout.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Mutable transform state for one open preview.
///
/// Created in a "fit" state when the preview opens, mutated by every zoom or
/// pan operation, and discarded with the preview. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewTransform {
    /// Current zoom scale, always within `[ZOOM_MIN, ZOOM_MAX]` at rest.
    pub scale: f32,
    /// Horizontal pan of the image center relative to the stage center.
    pub offset_x: f32,
    /// Vertical pan of the image center relative to the stage center.
    pub offset_y: f32,
    /// Last stage dimensions a successful fit observed.
    stage: Extent,
    /// Last image dimensions a successful fit observed.
    image: Extent,
}

impl Default for PreviewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            stage: Extent::default(),
            image: Extent::default(),
        }
    }
}

impl PreviewTransform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fits the image inside the stage without cropping and without
    /// upscaling past natural size, recentering the pan.
    ///
    /// A zero stage or image dimension (layout not settled yet) leaves the
    /// prior state untouched, including the recorded dimensions.
    pub fn fit_to_viewport(&mut self, stage: Extent, image: Extent) {
        if stage.is_empty() || image.is_empty() {
            return;
        }

        self.stage = stage;
        self.image = image;
        self.scale = (stage.width / image.width)
            .min(stage.height / image.height)
            .min(1.0);
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Re-runs the fit with the last-known stage and image dimensions.
    /// Used by double-click; a no-op until a fit has succeeded once.
    pub fn refit(&mut self) {
        let (stage, image) = (self.stage, self.image);
        self.fit_to_viewport(stage, image);
    }

    /// Records new stage dimensions without touching scale or offsets, so
    /// anchor math tracks the live layout. Empty extents are ignored.
    pub fn update_stage(&mut self, stage: Extent) {
        if !stage.is_empty() {
            self.stage = stage;
        }
    }

    /// Resets to natural size, centered.
    pub fn reset_to_actual_size(&mut self) {
        self.scale = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Zooms to `requested_scale` keeping the image point under the stage
    /// coordinate `(anchor_x, anchor_y)` visually fixed.
    ///
    /// The scale is clamped before any offset is derived from it, so offsets
    /// are never computed from an out-of-range scale.
    pub fn zoom_around(&mut self, requested_scale: f32, anchor_x: f32, anchor_y: f32) {
        let clamped = requested_scale.clamp(ZOOM_MIN, ZOOM_MAX);
        let ratio = clamped / self.scale;

        // Anchor relative to the stage center, where the image origin sits.
        let px = anchor_x - self.stage.width / 2.0;
        let py = anchor_y - self.stage.height / 2.0;

        self.offset_x = px - (px - self.offset_x) * ratio;
        self.offset_y = py - (py - self.offset_y) * ratio;
        self.scale = clamped;
    }

    /// Zooms by a fraction of the current scale, anchored at the stage center.
    pub fn zoom_by_step(&mut self, delta_fraction: f32) {
        let target = self.scale * (1.0 + delta_fraction);
        self.zoom_around(target, self.stage.width / 2.0, self.stage.height / 2.0);
    }

    /// Maps a stage coordinate to image-space pixel coordinates under the
    /// current transform.
    #[must_use]
    pub fn stage_to_image(&self, stage_x: f32, stage_y: f32) -> (f32, f32) {
        let px = stage_x - self.stage.width / 2.0;
        let py = stage_y - self.stage.height / 2.0;
        (
            (px - self.offset_x) / self.scale + self.image.width / 2.0,
            (py - self.offset_y) / self.scale + self.image.height / 2.0,
        )
    }

    /// Last stage dimensions a successful fit observed.
    #[must_use]
    pub fn stage(&self) -> Extent {
        self.stage
    }

    /// Last image dimensions a successful fit observed.
    #[must_use]
    pub fn image(&self) -> Extent {
        self.image
    }

    /// Current zoom as a rounded percentage for the zoom label.
    #[must_use]
    pub fn zoom_percent(&self) -> u32 {
        // Scale is bounded by ZOOM_MAX, far below u32 range.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (self.scale * 100.0).round() as u32
        }
    }
}
