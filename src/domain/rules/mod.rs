// Domain rules - Classification, formatting and progress policies

/// Extensions counted as lesson videos, compared case-insensitively
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov", "wmv"];

/// Completion marker looked for in chapter folder names
pub const DONE_MARKER: &str = "[done]";

/// Longest single video duration accepted from a probe (one year)
pub const MAX_VIDEO_SECONDS: f64 = 365.0 * 24.0 * 3600.0;

/// Naming rules for course entries
pub struct ChapterClassifier;

impl ChapterClassifier {
    /// Check if the name carries the done marker anywhere, ignoring case
    pub fn is_done(name: &str) -> bool {
        name.to_ascii_lowercase().contains(DONE_MARKER)
    }

    /// Check if the entry is hidden by the leading-dot convention
    pub fn is_hidden(name: &str) -> bool {
        name.starts_with('.')
    }

    /// Check if the file name ends in a known video extension.
    ///
    /// Only the component after the last `.` counts, so `clip.mp4.part`
    /// is not a video while `.mp4` is.
    pub fn is_video_file(name: &str) -> bool {
        match name.rfind('.') {
            Some(dot) => {
                let ext = &name[dot + 1..];
                VIDEO_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            }
            None => false,
        }
    }
}

/// Format seconds as zero-padded `HH:MM:SS`.
///
/// Fractions are truncated. Hours widen past two digits instead of wrapping.
/// Negative and non-finite input formats as zero.
pub fn format_hms(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Completed share of `total` in percent, clamped to `[0, 100]`
pub fn percentage(completed: f64, total: f64) -> f64 {
    if !(total > 0.0) {
        return 0.0;
    }
    let ratio = (completed / total) * 100.0;
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 100.0)
    }
}

/// Round to one decimal place for display
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests;
