use ratatui::{
    prelude::*,
    widgets::{List, ListItem, Paragraph, Row, Sparkline, Table},
};

use crate::forms::FormId;
use crate::mock_data::admin;
use crate::types::Tab;
use crate::ui::colors::{severity_color, status_color};
use crate::ui::layouts::{create_stack_layout, create_two_column_layout, create_two_row_layout};
use crate::ui::widgets::{badge, StatCard};
use crate::utils::{format_count, format_tenths, get_usage_color, truncate_string};

use super::{
    form_height, panel, render_activities, render_bars, render_cards, render_form, render_heading,
    ViewContext,
};

pub fn render(f: &mut Frame, area: Rect, ctx: &ViewContext, tab: Tab) -> bool {
    match tab {
        Tab::Dashboard => render_dashboard(f, area, ctx),
        Tab::Users => render_users(f, area, ctx),
        Tab::Content => render_content(f, area, ctx),
        Tab::System => render_system(f, area, ctx),
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
        ctx.t("adm.welcome"),
        ctx.t("adm.subtitle"),
        Some(ctx.t("adm.super_admin")),
    );

    render_cards(
        f,
        parts[1],
        ctx,
        vec![
            StatCard::new(admin::TOTAL_USERS, ctx.t("adm.total_users"))
                .accent(ctx.colors.info)
                .note(admin::USER_GROWTH_NOTE, ctx.colors.success),
            StatCard::new(admin::SYSTEM_UPTIME, ctx.t("adm.system_uptime")).accent(ctx.colors.success),
            StatCard::new(admin::ACTIVE_REPORTS.to_string(), ctx.t("adm.active_reports"))
                .accent(ctx.colors.warning),
            StatCard::new(admin::SERVER_HEALTH, ctx.t("adm.server_health")).accent(ctx.colors.accent),
        ],
    );

    let (top, bottom) = create_two_row_layout(parts[2], 55);
    let (growth, performance) = create_two_column_layout(top, 50);
    let (alerts, activities) = create_two_column_layout(bottom, 50);

    // totals in thousands so they fit inside the bars
    let totals: Vec<(&str, u64)> = admin::USER_GROWTH
        .iter()
        .map(|point| (point.month, point.total() / 1_000))
        .collect();
    let title = format!("{} (K)", ctx.t("adm.user_growth"));
    render_bars(f, growth, ctx, &title, &totals, ctx.colors.info);
    render_performance_sparklines(f, performance, ctx);
    render_system_alerts(f, alerts, ctx);
    render_activities(f, activities, ctx, &admin::ACTIVITIES);
}

fn render_performance_sparklines(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let block = panel(ctx.t("adm.system_performance"), &ctx.colors);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let series: [(&str, Vec<u64>); 3] = [
        ("CPU", admin::SYSTEM_PERFORMANCE.iter().map(|p| p.cpu as u64).collect()),
        ("MEM", admin::SYSTEM_PERFORMANCE.iter().map(|p| p.memory as u64).collect()),
        ("DISK", admin::SYSTEM_PERFORMANCE.iter().map(|p| p.disk as u64).collect()),
    ];
    let height = (inner.height / series.len() as u16).max(1);
    let rows = create_stack_layout(inner, &[height, height]);

    for ((name, data), row) in series.iter().zip(rows) {
        let latest = data.last().copied().unwrap_or(0);
        let color = get_usage_color(latest as f32);
        let (label, chart) = create_two_column_layout(row, 25);
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("{} {}%", name, latest),
                Style::default().fg(color),
            )),
            label,
        );
        f.render_widget(
            Sparkline::default()
                .data(data)
                .max(100)
                .style(Style::default().fg(color)),
            chart,
        );
    }
}

fn render_system_alerts(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let items: Vec<ListItem> = admin::SYSTEM_ALERTS
        .iter()
        .map(|alert| {
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(severity_color(alert.severity))),
                Span::raw(alert.alert.get(ctx.language())),
                Span::styled(
                    format!("  {}", alert.time),
                    Style::default().fg(ctx.colors.text_secondary),
                ),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("adm.system_alerts"), &ctx.colors)),
        area,
    );
}

fn render_users(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let (left, right) = create_two_column_layout(area, 50);

    let items: Vec<ListItem> = admin::USERS_BY_TYPE
        .iter()
        .map(|kind| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<20}", kind.kind.get(ctx.language())),
                    Style::default().fg(ctx.colors.text),
                ),
                Span::styled(
                    format!("{:>8}", format_count(kind.count)),
                    Style::default().fg(ctx.colors.primary).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}%", format_tenths(kind.share_tenths)),
                    Style::default().fg(ctx.colors.text_secondary),
                ),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("adm.user_statistics"), &ctx.colors)),
        left,
    );

    let parts = create_stack_layout(right, &[5, form_height(FormId::Announcement)]);
    let actions = vec![
        Line::from(Span::styled(
            ctx.t("adm.actions_list"),
            Style::default().fg(ctx.colors.text),
        )),
        Line::from(Span::styled(
            admin::USER_TYPES
                .iter()
                .map(|choice| choice.label.get(ctx.language()))
                .collect::<Vec<_>>()
                .join(" • "),
            Style::default().fg(ctx.colors.text_secondary),
        )),
    ];
    super::render_text(f, parts[0], ctx, ctx.t("adm.user_actions"), actions);
    render_form(
        f,
        parts[1],
        ctx,
        FormId::Announcement,
        "adm.create_announcement",
        "adm.create_announcement",
    );
}

fn render_content(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[5]);
    render_cards(
        f,
        parts[0],
        ctx,
        vec![
            StatCard::new(admin::PENDING_REPORTS.to_string(), ctx.t("adm.pending_reports"))
                .accent(ctx.colors.warning),
            StatCard::new(admin::REVIEWED_TODAY.to_string(), ctx.t("adm.reviewed_today"))
                .accent(ctx.colors.success),
            StatCard::new(admin::REMOVED_CONTENT.to_string(), ctx.t("adm.removed_content"))
                .accent(ctx.colors.error),
        ],
    );

    let language = ctx.language();
    let rows = admin::REPORTS.iter().map(|report| {
        Row::new(vec![
            Span::raw(truncate_string(report.kind.get(language), 24)),
            Span::raw(report.reporter),
            Span::raw(report.reported),
            badge(report.status.label().get(language), status_color(report.status)),
            Span::raw(report.date),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(18),    // Type
            Constraint::Length(12), // Reporter
            Constraint::Length(16), // Content
            Constraint::Length(12), // Status
            Constraint::Length(12), // Date
        ],
    )
    .header(
        Row::new(vec![
            ctx.t("gov.advisory_type"),
            ctx.t("adm.reporter"),
            ctx.t("adm.content"),
            ctx.t("adm.status"),
            ctx.t("ngo.date"),
        ])
        .style(Style::default().fg(ctx.colors.secondary).add_modifier(Modifier::BOLD))
        .bottom_margin(1),
    )
    .block(panel(ctx.t("adm.moderation_queue"), &ctx.colors));

    f.render_widget(table, parts[1]);
}

fn render_system(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let (top, bottom) = create_two_row_layout(area, 60);

    let rows = admin::SYSTEM_PERFORMANCE.iter().map(|point| {
        let cell = |value: u32| {
            Span::styled(
                format!("{}%", value),
                Style::default().fg(get_usage_color(value as f32)),
            )
        };
        Row::new(vec![
            Span::raw(point.time),
            cell(point.cpu),
            cell(point.memory),
            cell(point.disk),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10), // Time
            Constraint::Length(10), // CPU
            Constraint::Length(10), // Memory
            Constraint::Length(10), // Disk
        ],
    )
    .header(
        Row::new(vec![ctx.t("adm.time"), ctx.t("adm.cpu"), ctx.t("adm.memory"), ctx.t("adm.disk")])
            .style(Style::default().fg(ctx.colors.secondary).add_modifier(Modifier::BOLD))
            .bottom_margin(1),
    )
    .block(panel(ctx.t("adm.system_performance"), &ctx.colors));

    f.render_widget(table, top);
    render_system_alerts(f, bottom, ctx);
}

#[cfg(test)]
mod tests {
    use crate::shell::test_support::state;
    use crate::types::{Role, Tab};
    use crate::ui::dashboards::test_support::{draw, shows, text};

    #[test]
    fn test_content_queue() {
        let (mut state, _rx) = state();
        state.login(Role::Admin);
        state.select_tab(Tab::Content);
        let screen = text(&draw(&state, 120, 30));
        assert!(screen.contains("Inappropriate Content"));
        assert!(screen.contains("[pending]"));
        assert!(screen.contains("47"));
    }

    #[test]
    fn test_system_table_in_hindi() {
        let (mut state, _rx) = state();
        state.set_language(crate::types::Language::Hi);
        state.login(Role::Admin);
        state.select_tab(Tab::System);
        let screen = text(&draw(&state, 120, 30));
        assert!(screen.contains("08:00"));
        assert!(screen.contains("84%"));
        assert!(shows(&screen, "सिस्टम अलर्ट"));
    }
}
