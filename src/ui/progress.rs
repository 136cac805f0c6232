//! Download progress formatting

/// Format bytes for human-readable display
pub fn format_size(bytes: u64) -> String {
    let kb = bytes as f64 / 1024.0;
    let mb = kb / 1024.0;
    if mb >= 1024.0 {
        format!("{:.1} GB", mb / 1024.0)
    } else if kb >= 1024.0 {
        format!("{mb:.1} MB")
    } else if kb >= 1.0 {
        format!("{kb:.1} KB")
    } else {
        format!("{bytes} B")
    }
}

/// Format a progress bar using ▓ (filled) and ░ (empty).
pub fn format_progress_bar(current: u64, total: u64, width: usize) -> String {
    let filled = if total > 0 {
        ((current as f64 / total as f64) * width as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(width);
    let empty = width.saturating_sub(filled);
    format!("{}{}", "▓".repeat(filled), "░".repeat(empty))
}

/// Render one progress readout.
///
/// With a known total this is a bar plus percentage; a response without a
/// declared length falls back to raw bytes loaded, which is not an error.
pub fn format_download_progress(current: u64, total: Option<u64>) -> String {
    match total {
        Some(total) if total > 0 => {
            let pct = (current * 100 / total).min(100);
            format!("{}  {pct:>3}%", format_progress_bar(current, total, 24))
        }
        _ => format_size(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GB");
    }

    #[test]
    fn test_progress_bar_fill() {
        let bar = format_progress_bar(50, 100, 10);
        assert_eq!(bar.chars().filter(|c| *c == '▓').count(), 5);
        assert_eq!(bar.chars().filter(|c| *c == '░').count(), 5);

        let bar = format_progress_bar(100, 100, 10);
        assert_eq!(bar.chars().filter(|c| *c == '░').count(), 0);

        let bar = format_progress_bar(0, 100, 10);
        assert_eq!(bar.chars().filter(|c| *c == '▓').count(), 0);
    }

    #[test]
    fn test_known_total_renders_percent() {
        let line = format_download_progress(512, Some(1024));
        assert!(line.contains("50%"));
        assert!(line.contains('▓'));
    }

    #[test]
    fn test_unknown_total_renders_bytes() {
        let line = format_download_progress(2048, None);
        assert_eq!(line, "2.0 KB");
        assert!(!line.contains('%'));
    }
}
