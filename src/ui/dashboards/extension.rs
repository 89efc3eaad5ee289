use ratatui::{
    prelude::*,
    widgets::{List, ListItem, Row, Table},
};

use crate::forms::FormId;
use crate::mock_data::extension;
use crate::types::Tab;
use crate::ui::colors::priority_color;
use crate::ui::layouts::{create_stack_layout, create_two_column_layout};
use crate::ui::widgets::{badge, StatCard};
use crate::utils::format_count;

use super::{
    form_height, panel, priority_text, render_activities, render_cards, render_form,
    render_heading, ViewContext,
};

pub fn render(f: &mut Frame, area: Rect, ctx: &ViewContext, tab: Tab) -> bool {
    match tab {
        Tab::Dashboard => render_dashboard(f, area, ctx),
        Tab::Monitoring => render_monitoring(f, area, ctx),
        Tab::Alerts => render_alerts(f, area, ctx),
        Tab::Training => render_training(f, area, ctx),
        _ => return false,
    }
    true
}

fn render_dashboard(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[2, 5]);
    render_heading(f, parts[0], ctx, ctx.t("ext.welcome"), ctx.t("ext.subtitle"), None);

    render_cards(
        f,
        parts[1],
        ctx,
        vec![
            StatCard::new(format_count(extension::TOTAL_FARMERS), ctx.t("ext.total_farmers"))
                .accent(ctx.colors.success),
            StatCard::new(extension::ACTIVE_QUERIES.to_string(), ctx.t("ext.active_queries"))
                .accent(ctx.colors.info),
            StatCard::new(extension::ALERTS_SENT.to_string(), ctx.t("ext.alerts_sent"))
                .accent(ctx.colors.warning),
            StatCard::new(extension::TRAINING_UPLOADS.to_string(), ctx.t("ext.training_uploads"))
                .accent(ctx.colors.accent),
        ],
    );

    let (left, right) = create_two_column_layout(parts[2], 55);
    render_regional_table(f, left, ctx);
    render_activities(f, right, ctx, &extension::ACTIVITIES);
}

fn render_regional_table(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let rows = extension::REGIONAL_STATS.iter().map(|stat| {
        Row::new(vec![
            stat.region.to_string(),
            format_count(stat.farmers),
            stat.queries.to_string(),
            stat.alerts.to_string(),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),    // Region
            Constraint::Length(10), // Farmers
            Constraint::Length(10), // Queries
            Constraint::Length(10), // Alerts
        ],
    )
    .header(
        Row::new(vec![
            ctx.t("ext.region"),
            ctx.t("gov.farmers"),
            ctx.t("ext.queries"),
            ctx.t("ext.alerts"),
        ])
        .style(Style::default().fg(ctx.colors.secondary).add_modifier(Modifier::BOLD))
        .bottom_margin(1),
    )
    .block(panel(ctx.t("ext.regional_data"), &ctx.colors));

    f.render_widget(table, area);
}

fn render_monitoring(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[10]);
    let items: Vec<ListItem> = extension::QUERIES
        .iter()
        .map(|query| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        query.farmer,
                        Style::default().fg(ctx.colors.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {} • {}  ", query.region, query.time),
                        Style::default().fg(ctx.colors.text_secondary),
                    ),
                    badge(priority_text(ctx, query.priority), priority_color(query.priority)),
                ]),
                Line::from(format!("  {}", query.query.get(ctx.language()))),
                Line::from(""),
            ])
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("ext.farmer_queries"), &ctx.colors)),
        parts[0],
    );

    let form_area = create_stack_layout(parts[1], &[form_height(FormId::QueryResponse)])[0];
    render_form(f, form_area, ctx, FormId::QueryResponse, "ext.respond", "ext.respond");
}

fn render_alerts(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[form_height(FormId::RegionalAlert)]);
    render_form(f, parts[0], ctx, FormId::RegionalAlert, "ext.send_alert", "ext.send_alert");
    render_regional_table(f, parts[1], ctx);
}

fn render_training(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[form_height(FormId::TrainingUpload)]);
    render_form(
        f,
        parts[0],
        ctx,
        FormId::TrainingUpload,
        "ext.upload_training",
        "ext.upload_training",
    );

    let language = ctx.language();
    let items: Vec<ListItem> = extension::MATERIALS
        .iter()
        .map(|material| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    material.title.get(language),
                    Style::default().fg(ctx.colors.text).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                badge(material.kind.get(language), ctx.colors.info),
                Span::styled(
                    format!("  {} {}", material.views, ctx.t("ext.views")),
                    Style::default().fg(ctx.colors.text_secondary),
                ),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("ext.recent_materials"), &ctx.colors)),
        parts[1],
    );
}

#[cfg(test)]
mod tests {
    use crate::shell::test_support::state;
    use crate::types::{Role, Tab};
    use crate::ui::dashboards::test_support::{draw, text};

    #[test]
    fn test_dashboard_regional_table() {
        let (mut state, _rx) = state();
        state.login(Role::ExtensionOfficer);
        let screen = text(&draw(&state, 120, 40));
        assert!(screen.contains("Welcome, Expert"));
        assert!(screen.contains("7,500"));
        assert!(screen.contains("Maharashtra"));
        assert!(screen.contains("3,200"));
    }

    #[test]
    fn test_alert_form_reflects_typed_text() {
        let (mut state, _rx) = state();
        state.login(Role::ExtensionOfficer);
        state.select_tab(Tab::Alerts);
        state.begin_editing();
        let form = state.active_form_mut().unwrap();
        form.cycle_choice(true);
        form.focus_next();
        for c in "Hail tonight".chars() {
            form.insert_char(c);
        }
        let screen = text(&draw(&state, 100, 30));
        assert!(screen.contains("◂ Gujarat ▸"));
        assert!(screen.contains("Hail tonight▏"));
    }
}
