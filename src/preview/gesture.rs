// SPDX-License-Identifier: MPL-2.0
//! Gesture tracking for the preview stage.
//!
//! Drag and pinch are mutually exclusive by construction: the tracking state
//! is a single tagged union, so a pointer sequence can never be interpreted
//! as both at once. Pinch updates are incremental: each step rescales by
//! `new_distance / previous_distance` and stores the new baseline.

use super::transform::PreviewTransform;

/// A pointer or touch position in stage coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Midpoint of two points.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Tracking state for the gesture currently in flight, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No active gesture.
    #[default]
    Idle,
    /// Single-pointer pan in progress.
    Dragging {
        /// Pointer position when the drag began.
        start: TouchPoint,
        /// Transform offsets snapshotted at drag start.
        origin_x: f32,
        origin_y: f32,
    },
    /// Two-finger pinch in progress.
    Pinching {
        /// Inter-touch distance from the previous update.
        distance: f32,
        /// Midpoint from the previous update.
        midpoint: TouchPoint,
    },
}

impl GestureState {
    /// Starts a drag, snapshotting the transform's current offsets.
    /// Replaces any gesture already in flight.
    pub fn begin_drag(&mut self, transform: &PreviewTransform, at: TouchPoint) {
        *self = Self::Dragging {
            start: at,
            origin_x: transform.offset_x,
            origin_y: transform.offset_y,
        };
    }

    /// Pans by the pointer's displacement since drag start. Ignored unless a
    /// drag is in flight.
    pub fn update_drag(&self, transform: &mut PreviewTransform, at: TouchPoint) {
        if let Self::Dragging {
            start,
            origin_x,
            origin_y,
        } = *self
        {
            transform.offset_x = origin_x + (at.x - start.x);
            transform.offset_y = origin_y + (at.y - start.y);
        }
    }

    /// Ends an in-flight drag. Leaves a pinch untouched.
    pub fn end_drag(&mut self) {
        if matches!(self, Self::Dragging { .. }) {
            *self = Self::Idle;
        }
    }

    /// Starts a pinch from two touch positions, cancelling any drag.
    pub fn begin_pinch(&mut self, a: TouchPoint, b: TouchPoint) {
        *self = Self::Pinching {
            distance: a.distance(b),
            midpoint: a.midpoint(b),
        };
    }

    /// Applies one incremental pinch step and re-baselines. Ignored unless a
    /// pinch is in flight; a degenerate baseline (coincident touches) only
    /// re-baselines.
    pub fn update_pinch(&mut self, transform: &mut PreviewTransform, a: TouchPoint, b: TouchPoint) {
        if let Self::Pinching { distance, .. } = *self {
            let new_distance = a.distance(b);
            let new_midpoint = a.midpoint(b);

            if distance > 0.0 {
                let ratio = new_distance / distance;
                transform.zoom_around(transform.scale * ratio, new_midpoint.x, new_midpoint.y);
            }

            *self = Self::Pinching {
                distance: new_distance,
                midpoint: new_midpoint,
            };
        }
    }

    /// Ends an in-flight pinch. Leaves a drag untouched.
    pub fn end_pinch(&mut self) {
        if matches!(self, Self::Pinching { .. }) {
            *self = Self::Idle;
        }
    }

    /// Clears whatever gesture is in flight.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinching { .. })
    }
}
