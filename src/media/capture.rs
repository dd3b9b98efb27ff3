// SPDX-License-Identifier: MPL-2.0
//! Frame capture: rasterize the playback surface into an encoded JPEG.

use crate::error::CaptureError;
use crate::media::playback::PlaybackSurface;
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::{DynamicImage, ImageBuffer, Rgba};
use std::io::Cursor;
use std::sync::Arc;

/// JPEG quality used for captured frames.
pub const JPEG_QUALITY: u8 = 95;

/// A frame captured from the playback surface at a capture request.
///
/// Immutable once created; handed to the save dispatcher or the preview and
/// then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedFrame {
    /// Encoded JPEG bytes (shared reference to avoid expensive clones).
    pub jpeg_data: Arc<Vec<u8>>,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Position in the source video, in seconds.
    pub timestamp: f64,
}

impl CapturedFrame {
    /// Resolution label in the `W × H` form the preview header shows.
    #[must_use]
    pub fn resolution_label(&self) -> String {
        format!("{} × {}", self.width, self.height)
    }
}

/// Captures the surface's current visual contents.
///
/// # Errors
///
/// Returns [`CaptureError::SurfaceUnavailable`] while the surface has no
/// valid dimensions (metadata not loaded) or nothing to rasterize, and
/// [`CaptureError::Encoding`] if JPEG encoding fails.
pub fn capture_current_frame(
    surface: &dyn PlaybackSurface,
) -> Result<CapturedFrame, CaptureError> {
    let (width, height) = surface.dimensions();
    if width == 0 || height == 0 {
        return Err(CaptureError::SurfaceUnavailable);
    }

    let frame = surface
        .rasterize()
        .ok_or(CaptureError::SurfaceUnavailable)?;

    let jpeg_data = encode_jpeg(frame.rgba(), frame.width(), frame.height())?;

    Ok(CapturedFrame {
        jpeg_data: Arc::new(jpeg_data),
        width: frame.width(),
        height: frame.height(),
        timestamp: surface.current_time(),
    })
}

/// Encodes RGBA pixels as JPEG. JPEG has no alpha channel, so pixels are
/// converted to RGB first.
fn encode_jpeg(rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>, CaptureError> {
    let buffer: ImageBuffer<Rgba<u8>, _> =
        ImageBuffer::from_raw(width, height, rgba.to_vec()).ok_or_else(|| {
            CaptureError::Encoding("pixel data does not match frame dimensions".to_string())
        })?;

    let rgb = DynamicImage::ImageRgba8(buffer).to_rgb8();

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut jpeg), JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| CaptureError::Encoding(e.to_string()))?;

    Ok(jpeg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaybackError;
    use crate::media::playback::{PlaybackEvent, RawFrame, VideoMetadata};
    use std::path::Path;

    /// Surface stub with controllable dimensions and contents.
    struct StubSurface {
        width: u32,
        height: u32,
        position: f64,
        has_frame: bool,
    }

    impl PlaybackSurface for StubSurface {
        fn open(&mut self, _path: &Path) -> Result<VideoMetadata, PlaybackError> {
            Ok(VideoMetadata::new(self.width, self.height, 10.0))
        }

        fn play(&mut self) {}
        fn pause(&mut self) {}
        fn seek(&mut self, position_secs: f64) {
            self.position = position_secs;
        }

        fn current_time(&self) -> f64 {
            self.position
        }

        fn duration(&self) -> f64 {
            10.0
        }

        fn dimensions(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn is_paused(&self) -> bool {
            true
        }

        fn rasterize(&self) -> Option<RawFrame> {
            if !self.has_frame {
                return None;
            }
            let pixels = vec![200u8; (self.width * self.height * 4) as usize];
            Some(RawFrame::from_rgba(self.width, self.height, pixels))
        }

        fn poll_events(&mut self) -> Vec<PlaybackEvent> {
            Vec::new()
        }
    }

    #[test]
    fn capture_produces_jpeg_with_dimensions_and_timestamp() {
        let surface = StubSurface {
            width: 8,
            height: 6,
            position: 2.5,
            has_frame: true,
        };

        let frame = capture_current_frame(&surface).expect("capture should succeed");
        assert_eq!(frame.width, 8);
        assert_eq!(frame.height, 6);
        assert_eq!(frame.timestamp, 2.5);
        // JPEG SOI marker
        assert_eq!(&frame.jpeg_data[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn capture_fails_without_dimensions() {
        let surface = StubSurface {
            width: 0,
            height: 0,
            position: 0.0,
            has_frame: true,
        };

        let result = capture_current_frame(&surface);
        assert_eq!(result.unwrap_err(), CaptureError::SurfaceUnavailable);
    }

    #[test]
    fn capture_fails_when_surface_has_nothing_to_rasterize() {
        let surface = StubSurface {
            width: 8,
            height: 6,
            position: 0.0,
            has_frame: false,
        };

        let result = capture_current_frame(&surface);
        assert_eq!(result.unwrap_err(), CaptureError::SurfaceUnavailable);
    }

    #[test]
    fn resolution_label_formats_with_separator() {
        let frame = CapturedFrame {
            jpeg_data: Arc::new(Vec::new()),
            width: 1920,
            height: 1080,
            timestamp: 0.0,
        };
        assert_eq!(frame.resolution_label(), "1920 × 1080");
    }
}
