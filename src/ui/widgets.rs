use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub struct ProgressBar<'a> {
    progress: f64,
    style: Style,
    background_style: Style,
    custom_text: Option<&'a str>,
}

impl<'a> ProgressBar<'a> {
    pub fn new(progress: f64) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            style: Style::default().fg(Color::Green),
            background_style: Style::default().fg(Color::DarkGray),
            custom_text: None,
        }
    }

    pub fn from_percent(percent: u16) -> Self {
        Self::new(percent as f64 / 100.0)
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn custom_text(mut self, text: &'a str) -> Self {
        self.custom_text = Some(text);
        self
    }
}

impl<'a> Widget for ProgressBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let fill_width = ((area.width as f64) * self.progress) as u16;

        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                let cell = buf.get_mut(x, y);
                if x < area.x + fill_width {
                    cell.set_style(self.style);
                    cell.set_char('█');
                } else {
                    cell.set_style(self.background_style);
                    cell.set_char('░');
                }
            }
        }

        if let Some(text) = self.custom_text {
            self.render_text_overlay(area, buf, text);
            return;
        }
        let percentage_text = format!("{}%", (self.progress * 100.0).round() as u8);
        self.render_text_overlay(area, buf, &percentage_text);
    }
}

impl<'a> ProgressBar<'a> {
    fn render_text_overlay(self, area: Rect, buf: &mut Buffer, text: &str) {
        let text_y = area.y + area.height / 2;
        let width = text.chars().count() as u16;
        let text_x = area.x + (area.width.saturating_sub(width)) / 2;
        let filled_until = area.x + ((area.width as f64 * self.progress) as u16);

        for (i, ch) in text.chars().enumerate() {
            let x = text_x + i as u16;
            if x >= area.x + area.width {
                break;
            }

            let cell = buf.get_mut(x, text_y);
            cell.set_char(ch);
            if x < filled_until {
                cell.set_fg(Color::Black);
            } else {
                cell.set_fg(Color::White);
            }
        }
    }
}

/// Bordered metric tile: a big value, its label, and an optional note.
pub struct StatCard<'a> {
    value: String,
    label: &'a str,
    note: Option<(String, Color)>,
    accent: Color,
    border: Color,
}

impl<'a> StatCard<'a> {
    pub fn new(value: impl Into<String>, label: &'a str) -> Self {
        Self {
            value: value.into(),
            label,
            note: None,
            accent: Color::Green,
            border: Color::DarkGray,
        }
    }

    pub fn note(mut self, note: impl Into<String>, color: Color) -> Self {
        self.note = Some((note.into(), color));
        self
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    pub fn border(mut self, color: Color) -> Self {
        self.border = color;
        self
    }
}

impl<'a> Widget for StatCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.value,
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(self.label),
        ];
        if let Some((note, color)) = self.note {
            lines.push(Line::from(Span::styled(note, Style::default().fg(color))));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.border)),
            )
            .render(area, buf);
    }
}

/// Inline coloured tag such as `[high]`.
pub fn badge(text: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!("[{}]", text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_clamping() {
        let bar = ProgressBar::new(1.5);
        assert!((bar.progress - 1.0).abs() < f64::EPSILON);

        let bar = ProgressBar::from_percent(80);
        assert!((bar.progress - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_bar_renders_percentage() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        ProgressBar::from_percent(50).render(area, &mut buf);
        assert_eq!(buf.get(0, 0).symbol(), "█");
        assert_eq!(buf.get(9, 0).symbol(), "░");
        // "50%" centred in ten cells starts at (10 - 3) / 2
        assert_eq!(buf.get(3, 0).symbol(), "5");
        assert_eq!(buf.get(4, 0).symbol(), "0");
        assert_eq!(buf.get(5, 0).symbol(), "%");
    }

    #[test]
    fn test_stat_card_renders_value_and_label() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        StatCard::new("7,500", "Total Farmers")
            .note("+12%", Color::Green)
            .render(area, &mut buf);
        let row: String = (1..6).map(|x| buf.get(x, 1).symbol().to_string()).collect();
        assert_eq!(row, "7,500");
    }

    #[test]
    fn test_badge_wraps_text() {
        assert_eq!(badge("high", Color::Red).content, "[high]");
    }
}
