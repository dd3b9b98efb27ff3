// SPDX-License-Identifier: MPL-2.0
//! `frame_lens` is a small video frame capture utility built with the Iced
//! GUI framework.
//!
//! Load a video, scrub or step through frames, inspect a frame with
//! pan/zoom in the preview, and save it as a JPEG to platform-appropriate
//! storage. Video decoding is delegated to a host-registered playback
//! surface; the crate itself decodes nothing.

#![doc(html_root_url = "https://docs.rs/frame_lens/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod preview;
pub mod save;
pub mod ui;

#[cfg(test)]
mod test_utils;
