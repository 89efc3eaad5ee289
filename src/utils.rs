use chrono::{DateTime, Local};

pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Groups digits in threes: `25467` becomes `25,467`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_signed_percent(value: i32) -> String {
    format!("{:+}%", value)
}

/// Value stored in tenths, shown with one decimal.
pub fn format_tenths(tenths: u32) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}

pub fn format_clock(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M").to_string()
}

pub fn get_usage_color(percentage: f32) -> ratatui::style::Color {
    use ratatui::style::Color;

    if percentage >= 80.0 {
        Color::Red
    } else if percentage >= 70.0 {
        Color::Yellow
    } else if percentage >= 50.0 {
        Color::Cyan
    } else {
        Color::Green
    }
}

/// Cuts on character boundaries so Devanagari text never splits mid-codepoint.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

pub fn matches_filter(text: &str, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }

    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();

    text_lower.contains(&filter_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(1048576), "1.0 MiB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_247), "1,247");
        assert_eq!(format_count(1_160_000), "1,160,000");
    }

    #[test]
    fn test_signed_and_tenths() {
        assert_eq!(format_signed_percent(25), "+25%");
        assert_eq!(format_signed_percent(-15), "-15%");
        assert_eq!(format_tenths(42), "4.2");
        assert_eq!(format_tenths(923), "92.3");
    }

    #[test]
    fn test_truncate_is_char_aware() {
        assert_eq!(truncate_string("Punjab", 10), "Punjab");
        assert_eq!(truncate_string("Inappropriate Content", 10), "Inappro...");
        assert_eq!(truncate_string("पत्ती का धब्बा रोग", 6), "पत्...");
    }

    #[test]
    fn test_matches_filter() {
        assert!(matches_filter("Tamil Nadu", ""));
        assert!(matches_filter("Tamil Nadu", "nadu"));
        assert!(!matches_filter("Punjab", "gujarat"));
    }
}
