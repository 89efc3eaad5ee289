//! Role picker shown while nobody is logged in.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::mock_data::{RoleCard, ROLE_CARDS};
use crate::shell::AppState;

use super::colors::ColorScheme;
use super::layouts::{create_stack_layout, create_summary_layout, create_two_row_layout};
use super::widgets::badge;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let tr = state.translator();
    let colors = ColorScheme::for_mode(state.dark_mode);
    let parts = create_stack_layout(area, &[4, 2]);

    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("🌱 {}", tr.t("app.name")),
                Style::default().fg(colors.primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   [{}]", state.language.switcher_label()),
                Style::default().fg(colors.secondary),
            ),
        ]),
        Line::from(Span::styled(
            tr.t("landing.tagline"),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            tr.t("landing.subtitle"),
            Style::default().fg(colors.text_secondary),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(colors.border)));
    f.render_widget(title, parts[0]);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                tr.t("landing.choose_role"),
                Style::default().fg(colors.secondary).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                tr.t("landing.demo_login"),
                Style::default().fg(colors.text_secondary),
            )),
        ])
        .alignment(Alignment::Center),
        parts[1],
    );

    let grid = create_stack_layout(parts[2], &[parts[2].height.saturating_sub(2)]);
    let (top, bottom) = create_two_row_layout(grid[0], 50);
    let cells: Vec<Rect> = create_summary_layout(top, 3)
        .into_iter()
        .chain(create_summary_layout(bottom, 3))
        .collect();
    let selected = state.landing_selected % ROLE_CARDS.len();
    for (i, (card, cell)) in ROLE_CARDS.iter().zip(cells).enumerate() {
        render_card(f, cell, state, &colors, card, i == selected);
    }

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} • {}", tr.t("landing.trusted_by"), tr.t("landing.footer")),
                Style::default().fg(colors.text_secondary),
            )),
            Line::from(Span::styled(
                tr.t("landing.help"),
                Style::default().fg(colors.text_secondary),
            )),
        ])
        .alignment(Alignment::Center),
        grid[1],
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    colors: &ColorScheme,
    card: &RoleCard,
    selected: bool,
) {
    let language = state.language;
    let tr = state.translator();

    let mut title = vec![Span::styled(
        card.title.get(language),
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
    )];
    if card.popular {
        title.push(Span::raw(" "));
        title.push(badge(tr.t("landing.popular"), colors.warning));
    }

    let mut lines = vec![
        Line::from(title),
        Line::from(Span::styled(
            card.description.get(language),
            Style::default().fg(colors.text_secondary),
        )),
        Line::from(""),
    ];
    lines.extend(card.features.iter().map(|feature| {
        Line::from(vec![
            Span::styled("✓ ", Style::default().fg(colors.success)),
            Span::raw(feature.get(language)),
        ])
    }));
    if selected {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("[ {} → ]", tr.t("landing.get_started")),
            Style::default().fg(colors.primary).add_modifier(Modifier::BOLD),
        )));
    }

    let border = if selected {
        Style::default().fg(colors.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.border)
    };
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(border)),
        area,
    );
}
