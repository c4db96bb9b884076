use unicode_width::UnicodeWidthChar;

pub const MISSING_DURATION: &str = "--:--";

/// `m:ss` with zero-padded seconds, `--:--` when the duration is unknown.
pub fn format_track_time(millis: Option<u64>) -> String {
    match millis {
        Some(ms) if ms > 0 => format_millis(ms),
        _ => MISSING_DURATION.to_string(),
    }
}

pub fn format_millis(millis: u64) -> String {
    let minutes = millis / 60_000;
    let seconds = (millis % 60_000) / 1000;
    format!("{minutes}:{seconds:02}")
}

/// Cuts `text` to at most `max_width` terminal columns, ending with `…` when
/// anything was removed.
pub fn truncate(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
