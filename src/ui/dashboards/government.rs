use ratatui::{
    prelude::*,
    widgets::{List, ListItem, Paragraph, Row, Table},
};

use crate::forms::FormId;
use crate::mock_data::government;
use crate::types::Tab;
use crate::ui::colors::health_band_color;
use crate::ui::layouts::{create_stack_layout, create_two_column_layout, create_two_row_layout};
use crate::ui::widgets::{badge, ProgressBar, StatCard};
use crate::utils::{format_count, format_signed_percent, format_tenths};

use super::{
    form_height, panel, render_bars, render_cards, render_form, render_heading, ViewContext,
};

pub fn render(f: &mut Frame, area: Rect, ctx: &ViewContext, tab: Tab) -> bool {
    match tab {
        Tab::Dashboard => render_dashboard(f, area, ctx),
        Tab::Analytics => render_analytics(f, area, ctx),
        Tab::Advisories => render_advisories(f, area, ctx),
        Tab::Impact => render_impact(f, area, ctx),
        _ => return false,
    }
    true
}

fn render_dashboard(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[2, 5]);
    render_heading(
        f,
        parts[0],
        ctx,
        ctx.t("gov.welcome"),
        ctx.t("gov.subtitle"),
        Some(ctx.t("gov.official")),
    );

    render_cards(
        f,
        parts[1],
        ctx,
        vec![
            StatCard::new(government::TOTAL_FARMERS, ctx.t("gov.total_farmers"))
                .accent(ctx.colors.success),
            StatCard::new(government::ACTIVE_SCHEMES.to_string(), ctx.t("gov.active_schemes"))
                .accent(ctx.colors.info),
            StatCard::new(government::ADVISORIES_ISSUED.to_string(), ctx.t("gov.advisories_issued"))
                .accent(ctx.colors.warning),
            StatCard::new(government::IMPACT_SCORE, ctx.t("gov.impact_score"))
                .accent(ctx.colors.accent),
        ],
    );

    let (top, bottom) = create_two_row_layout(parts[2], 50);
    let (adoption, health) = create_two_column_layout(top, 60);
    let (yields, sustainability) = create_two_column_layout(bottom, 60);

    let adoption_data: Vec<(&str, u64)> = government::ADOPTION
        .iter()
        .map(|stat| (stat.state, stat.adoption))
        .collect();
    render_bars(f, adoption, ctx, ctx.t("gov.crop_adoption"), &adoption_data, ctx.colors.success);
    render_crop_health(f, health, ctx);
    render_yield_trend(f, yields, ctx);
    render_sustainability(f, sustainability, ctx, "gov.sustainability");
}

fn render_crop_health(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let block = panel(ctx.t("gov.crop_health_status"), &ctx.colors);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let heights = vec![1; government::CROP_HEALTH.len()];
    let rows = create_stack_layout(inner, &heights);
    for (share, row) in government::CROP_HEALTH.iter().zip(rows) {
        let (label, bar) = create_two_column_layout(row, 40);
        f.render_widget(
            Paragraph::new(Span::styled(
                share.name.get(ctx.language()),
                Style::default().fg(health_band_color(share.band)),
            )),
            label,
        );
        f.render_widget(
            ProgressBar::from_percent(share.value).style(Style::default().fg(health_band_color(share.band))),
            bar,
        );
    }
}

fn render_yield_trend(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let data: Vec<(&str, u64)> = government::YIELD_TREND
        .iter()
        .map(|point| (point.month, point.improvement as u64))
        .collect();
    render_bars(f, area, ctx, ctx.t("gov.yield_improvement"), &data, ctx.colors.info);
}

fn render_sustainability(f: &mut Frame, area: Rect, ctx: &ViewContext, title_key: &'static str) {
    let items: Vec<ListItem> = government::SUSTAINABILITY
        .iter()
        .map(|metric| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<20}", metric.metric.get(ctx.language())),
                    Style::default().fg(ctx.colors.text),
                ),
                Span::styled(
                    format_signed_percent(metric.value),
                    Style::default().fg(ctx.colors.success).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t(title_key), &ctx.colors)),
        area,
    );
}

/// Current value of the state filter; `all` until the user picks one.
fn state_filter<'a>(ctx: &ViewContext<'a>) -> &'a str {
    ctx.state
        .form(FormId::StateFilter)
        .map(|form| form.first_value())
        .unwrap_or("all")
}

fn render_analytics(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[form_height(FormId::StateFilter), 5]);
    render_form(f, parts[0], ctx, FormId::StateFilter, "gov.regional_trends", "common.select");

    let growth_note = ctx.t("gov.from_last_month");
    let cards = government::SUMMARY
        .iter()
        .map(|card| {
            StatCard::new(format_count(card.value), ctx.t(card.title))
                .accent(ctx.colors.primary)
                .note(format!("+{}% {}", card.growth, growth_note), ctx.colors.success)
        })
        .collect();
    render_cards(f, parts[1], ctx, cards);

    let rows = government::adoption_for(state_filter(ctx)).into_iter().map(|stat| {
        Row::new(vec![
            stat.state.to_string(),
            format_count(stat.farmers),
            format!("{}%", stat.adoption),
            format!("+{}%", stat.yield_improvement),
            format!("{}/5", format_tenths(stat.satisfaction_tenths)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(14),    // State
            Constraint::Length(10), // Farmers
            Constraint::Length(12), // Adoption
            Constraint::Length(18), // Yield
            Constraint::Length(18), // Satisfaction
        ],
    )
    .header(
        Row::new(vec![
            ctx.t("gov.state"),
            ctx.t("gov.farmers"),
            ctx.t("gov.adoption"),
            ctx.t("gov.yield_improvement"),
            ctx.t("gov.satisfaction"),
        ])
        .style(Style::default().fg(ctx.colors.secondary).add_modifier(Modifier::BOLD))
        .bottom_margin(1),
    )
    .block(panel(ctx.t("gov.detailed_stats"), &ctx.colors));

    f.render_widget(table, parts[2]);
}

fn render_advisories(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[form_height(FormId::Advisory)]);
    render_form(f, parts[0], ctx, FormId::Advisory, "gov.issue_advisory", "gov.publish");

    let language = ctx.language();
    let items: Vec<ListItem> = government::ADVISORIES
        .iter()
        .map(|advisory| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        advisory.title.get(language),
                        Style::default().fg(ctx.colors.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    badge(advisory.kind.get(language), ctx.colors.info),
                ]),
                Line::from(Span::styled(
                    format!("  {} • {}: {}", advisory.date, ctx.t("gov.reach"), advisory.reach),
                    Style::default().fg(ctx.colors.text_secondary),
                )),
            ])
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("gov.recent_advisories"), &ctx.colors)),
        parts[1],
    );
}

fn render_impact(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let (left, right) = create_two_column_layout(area, 45);
    render_sustainability(f, left, ctx, "gov.environmental_impact");
    render_yield_trend(f, right, ctx);
}

#[cfg(test)]
mod tests {
    use crate::forms::FormId;
    use crate::shell::test_support::state;
    use crate::types::{Role, Tab};
    use crate::ui::dashboards::test_support::{draw, text};

    #[test]
    fn test_state_filter_narrows_table() {
        let (mut state, _rx) = state();
        state.login(Role::Government);
        state.select_tab(Tab::Analytics);

        let screen = text(&draw(&state, 120, 40));
        assert!(screen.contains("Punjab"));
        assert!(screen.contains("Karnataka"));

        state.form_mut(FormId::StateFilter).cycle_choice(false);
        let screen = text(&draw(&state, 120, 40));
        assert!(screen.contains("◂ Tamil Nadu ▸"));
        assert!(screen.contains("19,500"));
        assert!(!screen.contains("Karnataka"));
        assert!(screen.contains("3.6/5"));
    }

    #[test]
    fn test_dashboard_headline_figures() {
        let (mut state, _rx) = state();
        state.login(Role::Government);
        let screen = text(&draw(&state, 120, 40));
        assert!(screen.contains("1.16M"));
        assert!(screen.contains("[Official]"));
        assert!(screen.contains("+25%"));
    }
}
