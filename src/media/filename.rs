// SPDX-License-Identifier: MPL-2.0
//! Timestamp formatting and the capture filename convention.

/// Formats a position in seconds as `m:ss.mmm`.
///
/// Non-finite input renders as `0:00.000`.
#[must_use]
pub fn format_timestamp(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "0:00.000".to_string();
    }

    // Video positions are practically bounded (years of video fit in u64 ms),
    // so the cast is safe.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let minutes = total_ms / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;

    format!("{}:{:02}.{:03}", minutes, secs, millis)
}

/// Strips the final extension and replaces every character outside
/// `[A-Za-z0-9_-]` with `_`. An empty result falls back to `video`.
#[must_use]
pub fn sanitize_base_name(name: &str) -> String {
    let stem = strip_extension(name);

    let sanitized: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() {
        "video".to_string()
    } else {
        sanitized
    }
}

/// Builds the capture filename:
/// `<sanitized-base>_<timestamp with ':' and '.' replaced by '-'>.jpg`.
#[must_use]
pub fn build_filename(base_name: &str, seconds: f64) -> String {
    let safe = sanitize_base_name(base_name);
    let timestamp = format_timestamp(seconds).replace([':', '.'], "-");
    format!("{}_{}.jpg", safe, timestamp)
}

/// Drops a trailing `.ext` segment, leaving earlier dots alone.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => &name[..idx],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_timestamp_renders_minutes_seconds_millis() {
        assert_eq!(format_timestamp(75.4), "1:15.400");
        assert_eq!(format_timestamp(0.0), "0:00.000");
        assert_eq!(format_timestamp(125.456), "2:05.456");
        assert_eq!(format_timestamp(3600.0), "60:00.000");
    }

    #[test]
    fn format_timestamp_defends_against_bad_input() {
        assert_eq!(format_timestamp(f64::NAN), "0:00.000");
        assert_eq!(format_timestamp(f64::INFINITY), "0:00.000");
        assert_eq!(format_timestamp(-3.0), "0:00.000");
    }

    #[test]
    fn format_timestamp_carries_rounded_millis_into_seconds() {
        assert_eq!(format_timestamp(1.9996), "0:02.000");
    }

    #[test]
    fn sanitize_strips_extension_and_replaces_specials() {
        assert_eq!(sanitize_base_name("My Clip #1.mov"), "My_Clip__1");
        assert_eq!(sanitize_base_name("plain.mp4"), "plain");
        assert_eq!(sanitize_base_name("under_score-dash.webm"), "under_score-dash");
    }

    #[test]
    fn sanitize_only_drops_the_final_extension() {
        assert_eq!(sanitize_base_name("archive.tar.mp4"), "archive_tar");
    }

    #[test]
    fn sanitize_falls_back_for_empty_stems() {
        assert_eq!(sanitize_base_name(""), "video");
        assert_eq!(sanitize_base_name(".mp4"), "video");
    }

    #[test]
    fn build_filename_reproduces_documented_mapping() {
        assert_eq!(build_filename("My Clip #1.mov", 75.4), "My_Clip__1_1-15-400.jpg");
    }

    #[test]
    fn build_filename_at_zero() {
        assert_eq!(build_filename("clip.mp4", 0.0), "clip_0-00-000.jpg");
    }
}
