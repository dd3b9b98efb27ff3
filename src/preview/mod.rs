// SPDX-License-Identifier: MPL-2.0
//! Frame preview cluster - zoom, pan, and pinch managed together.
//!
//! Groups the transform engine and gesture tracking for one open preview.
//! Internal interactions (a second touch cancelling a drag, double-click
//! re-fitting with the last-known dimensions) are handled within the
//! cluster, not by the orchestrator.
//!
//! ## Composition
//!
//! - `PreviewTransform`: scale/offset state and the zoom math
//! - `GestureState`: mutually exclusive drag/pinch tracking
//! - `RenderLayout`: one-way projection consumed by the view

pub mod gesture;
pub mod render;
pub mod transform;

use crate::media::capture::CapturedFrame;
use crate::media::filename::format_timestamp;
use gesture::{GestureState, TouchPoint};
use iced::widget::image::Handle;
use render::RenderLayout;
use transform::{Extent, PreviewTransform, ZOOM_STEP};

/// Zoom fraction applied by buttons and keyboard (double the wheel step).
pub const BUTTON_ZOOM_STEP: f32 = ZOOM_STEP * 2.0;

/// Preview cluster state, created when the preview modal opens and dropped
/// when it closes.
#[derive(Debug, Clone)]
pub struct State {
    transform: PreviewTransform,
    gesture: GestureState,
    frame: CapturedFrame,
    handle: Handle,
    timestamp_label: String,
    /// Active fingers on the stage, newest last.
    touches: Vec<(u64, TouchPoint)>,
}

/// Messages for the preview cluster.
#[derive(Debug, Clone)]
pub enum Message {
    /// Zoom in by one button step, anchored at the stage center.
    ZoomInPressed,
    /// Zoom out by one button step, anchored at the stage center.
    ZoomOutPressed,
    /// Wheel zoom anchored at the cursor; positive notches zoom in.
    Wheel { notches: f32, anchor: TouchPoint },
    /// Fit the image to the stage.
    FitPressed,
    /// Show the image at natural size.
    ActualSizePressed,
    /// Primary button pressed on the stage.
    PointerPressed(TouchPoint),
    /// Pointer moved while over the stage.
    PointerMoved(TouchPoint),
    /// Primary button released.
    PointerReleased,
    /// Double-click on the stage re-fits.
    DoubleClicked,
    /// A finger touched the stage.
    FingerPressed { id: u64, at: TouchPoint },
    /// A finger moved on the stage.
    FingerMoved { id: u64, at: TouchPoint },
    /// A finger left the stage.
    FingerLifted { id: u64 },
    /// The stage was laid out or resized.
    StageResized(Extent),
}

/// Effects produced by preview operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The transform changed - view needs refresh.
    TransformChanged,
}

impl State {
    /// Opens a preview for a captured frame, fitted to the given stage.
    #[must_use]
    pub fn open(frame: CapturedFrame, stage: Extent) -> Self {
        let handle = Handle::from_bytes(frame.jpeg_data.as_ref().clone());
        let timestamp_label = format_timestamp(frame.timestamp);

        let mut transform = PreviewTransform::new();
        transform.fit_to_viewport(stage, image_extent(&frame));

        Self {
            transform,
            gesture: GestureState::default(),
            frame,
            handle,
            timestamp_label,
            touches: Vec::new(),
        }
    }

    /// Handle a cluster message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ZoomInPressed => {
                self.transform.zoom_by_step(BUTTON_ZOOM_STEP);
                Effect::TransformChanged
            }
            Message::ZoomOutPressed => {
                self.transform.zoom_by_step(-BUTTON_ZOOM_STEP);
                Effect::TransformChanged
            }
            Message::Wheel { notches, anchor } => {
                let step = if notches > 0.0 { ZOOM_STEP } else { -ZOOM_STEP };
                let target = self.transform.scale * (1.0 + step);
                self.transform.zoom_around(target, anchor.x, anchor.y);
                Effect::TransformChanged
            }
            Message::FitPressed | Message::DoubleClicked => {
                self.transform.refit();
                Effect::TransformChanged
            }
            Message::ActualSizePressed => {
                self.transform.reset_to_actual_size();
                Effect::TransformChanged
            }
            Message::PointerPressed(at) => {
                self.gesture.begin_drag(&self.transform, at);
                Effect::None
            }
            Message::PointerMoved(at) => {
                if self.gesture.is_dragging() {
                    self.gesture.update_drag(&mut self.transform, at);
                    Effect::TransformChanged
                } else {
                    Effect::None
                }
            }
            Message::PointerReleased => {
                self.gesture.end_drag();
                Effect::None
            }
            Message::FingerPressed { id, at } => {
                self.upsert_touch(id, at);
                match self.touch_pair() {
                    (Some(a), Some(b)) => self.gesture.begin_pinch(a, b),
                    (Some(a), None) => self.gesture.begin_drag(&self.transform, a),
                    _ => {}
                }
                Effect::None
            }
            Message::FingerMoved { id, at } => {
                self.upsert_touch(id, at);
                match self.touch_pair() {
                    (Some(a), Some(b)) if self.gesture.is_pinching() => {
                        self.gesture.update_pinch(&mut self.transform, a, b);
                        Effect::TransformChanged
                    }
                    (Some(a), None) if self.gesture.is_dragging() => {
                        self.gesture.update_drag(&mut self.transform, a);
                        Effect::TransformChanged
                    }
                    _ => Effect::None,
                }
            }
            Message::FingerLifted { id } => {
                self.touches.retain(|(touch_id, _)| *touch_id != id);
                self.gesture.reset();
                Effect::None
            }
            Message::StageResized(stage) => {
                self.transform.update_stage(stage);
                Effect::None
            }
        }
    }

    fn upsert_touch(&mut self, id: u64, at: TouchPoint) {
        if let Some(entry) = self.touches.iter_mut().find(|(touch_id, _)| *touch_id == id) {
            entry.1 = at;
        } else {
            self.touches.push((id, at));
        }
    }

    /// First two active touches, in arrival order.
    fn touch_pair(&self) -> (Option<TouchPoint>, Option<TouchPoint>) {
        let mut iter = self.touches.iter().map(|(_, at)| *at);
        (iter.next(), iter.next())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// The captured frame shown in this preview.
    #[must_use]
    pub fn frame(&self) -> &CapturedFrame {
        &self.frame
    }

    /// Image handle for the view.
    #[must_use]
    pub fn image_handle(&self) -> &Handle {
        &self.handle
    }

    /// Current transform state.
    #[must_use]
    pub fn transform(&self) -> &PreviewTransform {
        &self.transform
    }

    /// Projected on-screen layout for the view.
    #[must_use]
    pub fn layout(&self) -> RenderLayout {
        RenderLayout::project(&self.transform)
    }

    /// Timestamp label for the preview header.
    #[must_use]
    pub fn timestamp_label(&self) -> &str {
        &self.timestamp_label
    }

    /// Zoom label in percent.
    #[must_use]
    pub fn zoom_label(&self) -> String {
        format!("{}%", self.transform.zoom_percent())
    }

    /// Check if a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }
}

#[allow(clippy::cast_precision_loss)] // u32 to f32 for dimensions: f32 is exact up to 16M
fn image_extent(frame: &CapturedFrame) -> Extent {
    Extent::new(frame.width as f32, frame.height as f32)
}
