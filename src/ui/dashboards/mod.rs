//! Role views. [`render_view`] is the single dispatch site from the shell;
//! each role module matches on the tabs it owns and reports `false` for
//! anything else, leaving the content area empty.

pub mod admin;
pub mod extension;
pub mod farmer;
pub mod government;
pub mod ngo;
pub mod profile;
pub mod startup;

use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::forms::{Form, FormId};
use crate::language::Translator;
use crate::mock_data::Activity;
use crate::shell::{AppState, InputMode};
use crate::types::{Language, Priority, Role, Tab};
use crate::utils::format_size;

use super::colors::{score_color, ColorScheme};
use super::layouts::{create_stack_layout, create_summary_layout};
use super::widgets::{ProgressBar, StatCard};

/// Everything a view needs to draw itself.
pub struct ViewContext<'a> {
    pub state: &'a AppState,
    pub tr: Translator,
    pub colors: ColorScheme,
}

impl<'a> ViewContext<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            state,
            tr: state.translator(),
            colors: ColorScheme::for_mode(state.dark_mode),
        }
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn t(&self, key: &'static str) -> &'static str {
        self.tr.t(key)
    }

    fn is_editing(&self, id: FormId) -> bool {
        self.state.input_mode == InputMode::Editing && self.state.active_form_id() == Some(id)
    }
}

/// Draws `tab` for `role`. Returns `false` when the role has no such view.
pub fn render_view(f: &mut Frame, area: Rect, ctx: &ViewContext, role: Role, tab: Tab) -> bool {
    if tab == Tab::Profile {
        profile::render(f, area, ctx);
        return true;
    }
    match role {
        Role::Farmer => farmer::render(f, area, ctx, tab),
        Role::ExtensionOfficer => extension::render(f, area, ctx, tab),
        Role::Government => government::render(f, area, ctx, tab),
        Role::Ngo => ngo::render(f, area, ctx, tab),
        Role::Startup => startup::render(f, area, ctx, tab),
        Role::Admin => admin::render(f, area, ctx, tab),
    }
}

pub(crate) fn priority_text(ctx: &ViewContext, priority: Priority) -> &'static str {
    ctx.t(match priority {
        Priority::High => "priority.high",
        Priority::Medium => "priority.medium",
        Priority::Low => "priority.low",
    })
}

pub(crate) fn panel<'a>(title: &'a str, colors: &ColorScheme) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(colors.secondary).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
}

/// Two-line greeting at the top of every role dashboard.
pub(crate) fn render_heading(
    f: &mut Frame,
    area: Rect,
    ctx: &ViewContext,
    title: &str,
    subtitle: &str,
    tag: Option<&str>,
) {
    let mut first = vec![Span::styled(
        title.to_string(),
        Style::default().fg(ctx.colors.primary).add_modifier(Modifier::BOLD),
    )];
    if let Some(tag) = tag {
        first.push(Span::raw(" "));
        first.push(super::widgets::badge(tag, ctx.colors.accent));
    }
    let lines = vec![
        Line::from(first),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(ctx.colors.text_secondary),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

pub(crate) fn render_cards(f: &mut Frame, area: Rect, ctx: &ViewContext, cards: Vec<StatCard>) {
    let cells = create_summary_layout(area, cards.len());
    for (card, cell) in cards.into_iter().zip(cells) {
        f.render_widget(card.border(ctx.colors.border), cell);
    }
}

pub(crate) fn render_activities(
    f: &mut Frame,
    area: Rect,
    ctx: &ViewContext,
    activities: &[Activity],
) {
    let items: Vec<ListItem> = activities
        .iter()
        .map(|activity| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(ctx.colors.success)),
                Span::raw(activity.text.get(ctx.language())),
                Span::styled(
                    format!("  {}", activity.time),
                    Style::default().fg(ctx.colors.text_secondary),
                ),
            ]))
        })
        .collect();
    let list = List::new(items).block(panel(ctx.t("common.recent_activities"), &ctx.colors));
    f.render_widget(list, area);
}

/// Labelled vertical bars sized to fit the panel.
pub(crate) fn render_bars(
    f: &mut Frame,
    area: Rect,
    ctx: &ViewContext,
    title: &str,
    data: &[(&str, u64)],
    color: Color,
) {
    let slots = data.len().max(1) as u16;
    let bar_width = (area.width.saturating_sub(2) / slots).saturating_sub(1).clamp(1, 12);
    let chart = BarChart::default()
        .block(panel(title, &ctx.colors))
        .data(data)
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(ctx.colors.text_secondary));
    f.render_widget(chart, area);
}

/// Rows a form needs, borders included.
pub(crate) fn form_height(id: FormId) -> u16 {
    Form::new(id).fields.len() as u16 + 4
}

/// Draws a form inline. The focused field carries a cursor while editing.
pub(crate) fn render_form(
    f: &mut Frame,
    area: Rect,
    ctx: &ViewContext,
    id: FormId,
    title_key: &'static str,
    submit_key: &'static str,
) {
    let fallback;
    let form = match ctx.state.form(id) {
        Some(form) => form,
        None => {
            fallback = Form::new(id);
            &fallback
        }
    };
    let editing = ctx.is_editing(id);

    let mut lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let focused = editing && i == form.focused;
            let marker = if focused { "▸ " } else { "  " };
            let mut value = field.display(ctx.language());
            if focused && matches!(field.kind, crate::forms::FieldKind::Text) {
                value.push('▏');
            }
            let required = if field.required { "*" } else { "" };
            let label_style = if focused {
                Style::default().fg(ctx.colors.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(ctx.colors.text_secondary)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(ctx.colors.highlight)),
                Span::styled(format!("{}{}: ", ctx.t(field.label_key), required), label_style),
                Span::styled(value, Style::default().fg(ctx.colors.text)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    let footer = if editing {
        Line::from(Span::styled(
            format!("[ {} ⏎ ]", ctx.t(submit_key)),
            Style::default().fg(ctx.colors.primary).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            ctx.t("common.edit_hint"),
            Style::default().fg(ctx.colors.text_secondary),
        ))
    };
    lines.push(footer);

    let border = if editing {
        ctx.colors.highlight
    } else {
        ctx.colors.border
    };
    let paragraph = Paragraph::new(lines).block(
        panel(ctx.t(title_key), &ctx.colors).border_style(Style::default().fg(border)),
    );
    f.render_widget(paragraph, area);
}

/// Image upload and mock analysis, shared by every view that offers it.
pub(crate) fn render_analysis(f: &mut Frame, area: Rect, ctx: &ViewContext, title_key: &'static str) {
    let analysis = &ctx.state.analysis;
    let parts = create_stack_layout(area, &[form_height(FormId::ImagePath), 3]);

    render_form(f, parts[0], ctx, FormId::ImagePath, title_key, "farmer.upload_image");

    let upload = match &analysis.image {
        Some(image) => Line::from(vec![
            Span::styled(
                format!("{}: ", ctx.t("farmer.uploaded")),
                Style::default().fg(ctx.colors.text_secondary),
            ),
            Span::styled(
                format!("{} ({})", image.file_name, format_size(image.size_bytes)),
                Style::default().fg(ctx.colors.text),
            ),
        ]),
        None => Line::from(Span::styled(
            ctx.t("farmer.image_hint"),
            Style::default().fg(ctx.colors.text_secondary),
        )),
    };
    let underline = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(ctx.colors.border));
    f.render_widget(Paragraph::new(upload).block(underline), parts[1]);

    if analysis.busy {
        let busy = Paragraph::new(Span::styled(
            ctx.t("farmer.analyzing"),
            Style::default().fg(ctx.colors.warning).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(busy, parts[2]);
        return;
    }

    let Some(result) = &analysis.result else {
        return;
    };

    let rows = create_stack_layout(parts[2], &[3, 3]);
    let health_label = format!("{} {}%", ctx.t("farmer.crop_health"), result.crop_health_score);
    let frame = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ctx.colors.border));
    let inner = frame.inner(rows[0]);
    f.render_widget(frame, rows[0]);
    f.render_widget(
        ProgressBar::from_percent(result.crop_health_score as u16)
            .style(Style::default().fg(score_color(result.crop_health_score)))
            .custom_text(&health_label),
        inner,
    );

    let summary = Line::from(vec![
        Span::styled(
            format!("{}: ", ctx.t("farmer.detected_issue")),
            Style::default().fg(ctx.colors.text_secondary),
        ),
        Span::styled(
            result.disease_label.clone(),
            Style::default().fg(ctx.colors.error).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {}: {}%", ctx.t("farmer.confidence"), result.confidence_score),
            Style::default().fg(ctx.colors.info),
        ),
    ]);
    f.render_widget(Paragraph::new(summary), rows[1]);

    let items: Vec<ListItem> = result
        .recommendations
        .iter()
        .map(|rec| ListItem::new(format!("✓ {}", rec)))
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("farmer.recommendations"), &ctx.colors)),
        rows[2],
    );
}

/// Wrapped, bordered text block.
pub(crate) fn render_text(f: &mut Frame, area: Rect, ctx: &ViewContext, title: &str, lines: Vec<Line>) {
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(title, &ctx.colors)),
        area,
    );
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use crate::shell::AppState;

    pub fn draw(state: &AppState, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| crate::ui::render_ui(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Substring check that ignores the padding cells wide glyphs leave behind.
    pub fn shows(screen: &str, needle: &str) -> bool {
        screen.replace(' ', "").contains(&needle.replace(' ', ""))
    }

    pub fn text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }
}
