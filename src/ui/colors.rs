use ratatui::style::Color;

use crate::mock_data::admin::Severity;
use crate::mock_data::farmer::Trend;
use crate::mock_data::government::HealthBand;
use crate::mock_data::Status;
use crate::types::{NotificationLevel, Priority};

#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub border: Color,
    pub highlight: Color,
}

impl ColorScheme {
    pub fn dark() -> Self {
        Self {
            primary: Color::LightGreen,
            secondary: Color::Cyan,
            accent: Color::Magenta,
            background: Color::Reset,
            text: Color::White,
            text_secondary: Color::Gray,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
            border: Color::DarkGray,
            highlight: Color::LightGreen,
        }
    }

    pub fn light() -> Self {
        Self {
            primary: Color::Green,
            secondary: Color::Blue,
            accent: Color::Magenta,
            background: Color::White,
            text: Color::Black,
            text_secondary: Color::DarkGray,
            success: Color::Green,
            warning: Color::Rgb(255, 165, 0),
            error: Color::Red,
            info: Color::Blue,
            border: Color::DarkGray,
            highlight: Color::Green,
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn notification(&self, level: NotificationLevel) -> Color {
        match level {
            NotificationLevel::Success => self.success,
            NotificationLevel::Info => self.info,
            NotificationLevel::Error => self.error,
        }
    }
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

pub fn status_color(status: Status) -> Color {
    if status.is_settled() {
        Color::Green
    } else {
        Color::Yellow
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Warning => Color::Rgb(255, 165, 0),
        Severity::Info => Color::Blue,
    }
}

pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
    }
}

pub fn health_band_color(band: HealthBand) -> Color {
    match band {
        HealthBand::Healthy => Color::Green,
        HealthBand::Warning => Color::Yellow,
        HealthBand::Critical => Color::Red,
    }
}

/// Colour for a 0-100 score where higher is better (crop health, confidence).
pub fn score_color(score: u8) -> Color {
    match score {
        x if x >= 80 => Color::Green,
        x if x >= 60 => Color::Yellow,
        x if x >= 40 => Color::Rgb(255, 165, 0),
        _ => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_schemes() {
        let dark = ColorScheme::for_mode(true);
        assert_eq!(dark.background, Color::Reset);
        assert_eq!(dark.text, Color::White);

        let light = ColorScheme::for_mode(false);
        assert_eq!(light.background, Color::White);
        assert_eq!(light.text, Color::Black);
    }

    #[test]
    fn test_score_colors() {
        assert_eq!(score_color(92), Color::Green);
        assert_eq!(score_color(65), Color::Yellow);
        assert_eq!(score_color(10), Color::Red);
    }

    #[test]
    fn test_badge_colors() {
        assert_eq!(priority_color(Priority::High), Color::Red);
        assert_eq!(status_color(Status::Completed), Color::Green);
        assert_eq!(status_color(Status::Pending), Color::Yellow);
        assert_eq!(trend_color(Trend::Down), Color::Red);
    }
}
