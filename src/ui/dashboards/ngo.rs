use ratatui::{
    prelude::*,
    widgets::{List, ListItem, Paragraph},
};

use crate::forms::FormId;
use crate::mock_data::ngo::{self, ImpactMetric, TrainingProgram};
use crate::types::Tab;
use crate::ui::colors::{score_color, status_color};
use crate::ui::layouts::{create_stack_layout, create_two_column_layout, create_two_row_layout};
use crate::ui::widgets::{badge, ProgressBar, StatCard};
use crate::utils::format_count;

use super::{
    form_height, panel, render_activities, render_cards, render_form, render_heading, ViewContext,
};

pub fn render(f: &mut Frame, area: Rect, ctx: &ViewContext, tab: Tab) -> bool {
    match tab {
        Tab::Dashboard => render_dashboard(f, area, ctx),
        Tab::Programs => render_programs(f, area, ctx),
        Tab::Resources => render_resources(f, area, ctx),
        Tab::Impact => render_impact(f, area, ctx),
        _ => return false,
    }
    true
}

fn render_dashboard(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[2, 5]);
    render_heading(f, parts[0], ctx, ctx.t("ngo.welcome"), ctx.t("ngo.subtitle"), None);

    render_cards(
        f,
        parts[1],
        ctx,
        vec![
            StatCard::new(format_count(ngo::FARMERS_ONBOARDED), ctx.t("ngo.farmers_onboarded"))
                .accent(ctx.colors.success),
            StatCard::new(ngo::TRAINING_PROGRAMS.to_string(), ctx.t("ngo.training_programs"))
                .accent(ctx.colors.info),
            StatCard::new(format_count(ngo::RESOURCES_DISTRIBUTED), ctx.t("ngo.resources_distributed"))
                .accent(ctx.colors.warning),
            StatCard::new(ngo::IMPACT_SCORE, ctx.t("ngo.impact_score")).accent(ctx.colors.accent),
        ],
    );

    let (left, right) = create_two_column_layout(parts[2], 50);
    render_impact_metrics(f, left, ctx);

    let (programs, activities) = create_two_row_layout(right, 50);
    let upcoming: Vec<&TrainingProgram> = ngo::upcoming_programs().collect();
    render_program_list(f, programs, ctx, "ngo.upcoming_programs", &upcoming);
    render_activities(f, activities, ctx, &ngo::ACTIVITIES);
}

fn render_impact_metrics(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let block = panel(ctx.t("ngo.impact_metrics"), &ctx.colors);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let heights = vec![3; ngo::IMPACT.len()];
    let rows = create_stack_layout(inner, &heights);
    for (metric, row) in ngo::IMPACT.iter().zip(rows) {
        render_metric(f, row, ctx, metric);
    }
}

fn render_metric(f: &mut Frame, area: Rect, ctx: &ViewContext, metric: &ImpactMetric) {
    let lines = create_stack_layout(area, &[1, 1]);
    let header = Line::from(vec![
        Span::styled(
            metric.metric.get(ctx.language()),
            Style::default().fg(ctx.colors.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}% / {}%", metric.value, metric.target),
            Style::default().fg(ctx.colors.text_secondary),
        ),
    ]);
    f.render_widget(Paragraph::new(header), lines[0]);

    let percent = metric.percent_of_target();
    f.render_widget(
        ProgressBar::from_percent(percent).style(Style::default().fg(score_color(percent as u8))),
        lines[1],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("{}% {}", metric.remaining(), ctx.t("ngo.to_target")),
            Style::default().fg(ctx.colors.text_secondary),
        )),
        lines[2],
    );
}

fn render_program_list(
    f: &mut Frame,
    area: Rect,
    ctx: &ViewContext,
    title_key: &'static str,
    programs: &[&TrainingProgram],
) {
    let language = ctx.language();
    let items: Vec<ListItem> = programs
        .iter()
        .map(|program| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        program.name.get(language),
                        Style::default().fg(ctx.colors.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    badge(program.status.label().get(language), status_color(program.status)),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} • {} • {} {}",
                        program.date,
                        program.location,
                        program.participants,
                        ctx.t("ngo.participants")
                    ),
                    Style::default().fg(ctx.colors.text_secondary),
                )),
            ])
        })
        .collect();
    f.render_widget(List::new(items).block(panel(ctx.t(title_key), &ctx.colors)), area);
}

fn render_programs(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[form_height(FormId::Program)]);
    render_form(f, parts[0], ctx, FormId::Program, "ngo.create_program", "ngo.schedule_program");
    let all: Vec<&TrainingProgram> = ngo::PROGRAMS.iter().collect();
    render_program_list(f, parts[1], ctx, "ngo.all_programs", &all);
}

fn render_resources(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[form_height(FormId::Distribution)]);
    render_form(
        f,
        parts[0],
        ctx,
        FormId::Distribution,
        "ngo.new_distribution",
        "ngo.schedule_distribution",
    );

    let language = ctx.language();
    let items: Vec<ListItem> = ngo::DISTRIBUTIONS
        .iter()
        .map(|distribution| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        distribution.resource.get(language),
                        Style::default().fg(ctx.colors.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    badge(distribution.status.label().get(language), status_color(distribution.status)),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} • {} {} • {}",
                        distribution.quantity,
                        distribution.beneficiaries,
                        ctx.t("ngo.beneficiaries"),
                        distribution.date
                    ),
                    Style::default().fg(ctx.colors.text_secondary),
                )),
            ])
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("ngo.distribution_history"), &ctx.colors)),
        parts[1],
    );
}

fn render_impact(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let (left, right) = create_two_column_layout(area, 60);
    render_impact_metrics(f, left, ctx);
    render_activities(f, right, ctx, &ngo::ACTIVITIES);
}

#[cfg(test)]
mod tests {
    use crate::shell::test_support::state;
    use crate::types::{Role, Tab};
    use crate::ui::dashboards::test_support::{draw, text};

    #[test]
    fn test_dashboard_lists_only_upcoming_programs() {
        let (mut state, _rx) = state();
        state.login(Role::Ngo);
        let screen = text(&draw(&state, 130, 45));
        assert!(screen.contains("Organic Farming Training [Upcoming]"));
        assert!(!screen.contains("Women Farmer Empowerment"));
        assert!(screen.contains("8% to target"));
    }

    #[test]
    fn test_programs_tab_lists_all() {
        let (mut state, _rx) = state();
        state.login(Role::Ngo);
        state.select_tab(Tab::Programs);
        let screen = text(&draw(&state, 130, 45));
        assert!(screen.contains("Women Farmer Empowerment [Completed]"));
    }
}
