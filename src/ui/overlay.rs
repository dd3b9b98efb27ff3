// SPDX-License-Identifier: MPL-2.0
//! Transient overlay flash shown over the video after a capture.

use std::time::{Duration, Instant};

/// How long a flash stays on screen.
pub const FLASH_DURATION: Duration = Duration::from_millis(900);

/// Auto-hiding message flashed over the player (e.g. `Saved at 1:15.400`).
///
/// A new flash replaces the current one and restarts the timer. Expiry is
/// driven by the shell's tick, like toast auto-dismiss.
#[derive(Debug, Default)]
pub struct OverlayFlash {
    current: Option<(String, Instant)>,
}

impl OverlayFlash {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message`, replacing any flash already visible.
    pub fn flash(&mut self, message: impl Into<String>) {
        self.current = Some((message.into(), Instant::now()));
    }

    /// Hides the flash once its display window has elapsed.
    pub fn tick(&mut self) {
        if let Some((_, shown_at)) = &self.current {
            if shown_at.elapsed() >= FLASH_DURATION {
                self.current = None;
            }
        }
    }

    /// The currently visible message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(message, _)| message.as_str())
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_overlay_is_hidden() {
        let overlay = OverlayFlash::new();
        assert!(!overlay.is_visible());
        assert!(overlay.message().is_none());
    }

    #[test]
    fn flash_shows_the_message() {
        let mut overlay = OverlayFlash::new();
        overlay.flash("Saved at 1:15.400");

        assert!(overlay.is_visible());
        assert_eq!(overlay.message(), Some("Saved at 1:15.400"));
    }

    #[test]
    fn tick_keeps_a_fresh_flash() {
        let mut overlay = OverlayFlash::new();
        overlay.flash("Saved at 0:01.000");

        overlay.tick();
        assert!(overlay.is_visible());
    }

    #[test]
    fn a_new_flash_replaces_the_previous_message() {
        let mut overlay = OverlayFlash::new();
        overlay.flash("first");
        overlay.flash("second");

        assert_eq!(overlay.message(), Some("second"));
    }
}
