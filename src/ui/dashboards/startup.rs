use ratatui::{
    prelude::*,
    widgets::{List, ListItem, Paragraph},
};

use crate::forms::FormId;
use crate::mock_data::startup;
use crate::types::Tab;
use crate::ui::colors::status_color;
use crate::ui::layouts::{create_stack_layout, create_two_column_layout, create_two_row_layout};
use crate::ui::widgets::{badge, ProgressBar, StatCard};
use crate::utils::format_tenths;

use super::{
    form_height, panel, render_analysis, render_bars, render_cards, render_form, render_heading,
    ViewContext,
};

pub fn render(f: &mut Frame, area: Rect, ctx: &ViewContext, tab: Tab) -> bool {
    match tab {
        Tab::Dashboard => render_dashboard(f, area, ctx),
        Tab::Integration => render_integration(f, area, ctx),
        Tab::Analytics => render_analytics(f, area, ctx),
        Tab::Testing => render_analysis(f, area, ctx, "st.product_testing"),
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
        ctx.t("st.welcome"),
        ctx.t("st.subtitle"),
        Some(ctx.t("st.beta")),
    );

    render_cards(
        f,
        parts[1],
        ctx,
        vec![
            StatCard::new(startup::API_INTEGRATIONS.to_string(), ctx.t("st.api_integrations"))
                .accent(ctx.colors.info),
            StatCard::new(startup::ACTIVE_USERS, ctx.t("st.active_users")).accent(ctx.colors.success),
            StatCard::new(startup::FEEDBACK_SCORE, ctx.t("st.feedback_score"))
                .accent(ctx.colors.warning),
            StatCard::new(startup::TESTING_PROGRAMS.to_string(), ctx.t("st.testing_programs"))
                .accent(ctx.colors.accent),
        ],
    );

    let (left, right) = create_two_column_layout(parts[2], 55);
    let users: Vec<(&str, u64)> = startup::USAGE
        .iter()
        .map(|point| (point.month, point.users))
        .collect();
    let title = format!("{}: {}", ctx.t("st.usage_analytics"), ctx.t("st.users"));
    render_bars(f, left, ctx, &title, &users, ctx.colors.success);

    let (feedback, integrations) = create_two_row_layout(right, 50);
    render_feedback(f, feedback, ctx);
    render_integrations(f, integrations, ctx);
}

fn render_feedback(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let block = panel(ctx.t("st.user_feedback"), &ctx.colors);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let heights = vec![1; startup::FEEDBACK.len()];
    let rows = create_stack_layout(inner, &heights);
    for (score, row) in startup::FEEDBACK.iter().zip(rows) {
        let (label, bar) = create_two_column_layout(row, 45);
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(score.category.get(ctx.language())),
                Span::styled(
                    format!(" ({} {})", score.responses, ctx.t("st.responses")),
                    Style::default().fg(ctx.colors.text_secondary),
                ),
            ])),
            label,
        );
        let text = format!("{}/5", format_tenths(score.score_tenths));
        f.render_widget(
            ProgressBar::new(score.score_tenths as f64 / 50.0)
                .style(Style::default().fg(ctx.colors.warning))
                .custom_text(&text),
            bar,
        );
    }
}

fn render_integrations(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let items: Vec<ListItem> = startup::INTEGRATIONS
        .iter()
        .map(|integration| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    integration.name,
                    Style::default().fg(ctx.colors.text).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                badge(
                    integration.status.label().get(ctx.language()),
                    status_color(integration.status),
                ),
                Span::styled(
                    format!(
                        "  {} {} • {} {}",
                        integration.calls,
                        ctx.t("st.calls"),
                        integration.uptime,
                        ctx.t("st.uptime")
                    ),
                    Style::default().fg(ctx.colors.text_secondary),
                ),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("st.active_integrations"), &ctx.colors)),
        area,
    );
}

fn render_integration(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[form_height(FormId::Integration)]);
    render_form(f, parts[0], ctx, FormId::Integration, "st.integrate_api", "st.integrate_api");

    let items: Vec<ListItem> = startup::ENDPOINTS
        .iter()
        .map(|endpoint| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<30}", endpoint.route),
                    Style::default().fg(ctx.colors.secondary),
                ),
                Span::raw(endpoint.summary.get(ctx.language())),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("st.api_documentation"), &ctx.colors)),
        parts[1],
    );
}

fn render_analytics(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let (top, bottom) = create_two_row_layout(area, 55);
    let (calls, feedback) = create_two_column_layout(top, 60);

    // values in thousands so they fit inside the bars
    let data: Vec<(&str, u64)> = startup::USAGE
        .iter()
        .map(|point| (point.month, point.api_calls / 1_000))
        .collect();
    let title = format!("{} (K)", ctx.t("st.api_calls"));
    render_bars(f, calls, ctx, &title, &data, ctx.colors.info);
    render_feedback(f, feedback, ctx);

    let language = ctx.language();
    let items: Vec<ListItem> = startup::COLLABORATIONS
        .iter()
        .map(|request| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        request.organization,
                        Style::default().fg(ctx.colors.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    badge(request.status.label().get(language), status_color(request.status)),
                ]),
                Line::from(Span::styled(
                    format!("  {} • {}", request.kind.get(language), request.date),
                    Style::default().fg(ctx.colors.text_secondary),
                )),
            ])
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("st.collaboration_requests"), &ctx.colors)),
        bottom,
    );
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use crate::shell::test_support::state;
    use crate::types::{Role, Tab};
    use crate::ui::dashboards::test_support::{draw, text};

    #[tokio::test(start_paused = true)]
    async fn test_testing_tab_shares_image_analysis() {
        let (mut state, mut rx) = state();
        state.login(Role::Startup);
        state.select_tab(Tab::Testing);

        let mut file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        file.write_all(b"jpeg").unwrap();
        state.submit_image(file.path().to_str().unwrap());
        let screen = text(&draw(&state, 110, 35));
        assert!(screen.contains("Product Testing"));
        assert!(screen.contains("Analyzing..."));

        tokio::time::sleep(Duration::from_secs(3)).await;
        state.handle_event(rx.recv().await.unwrap());
        let screen = text(&draw(&state, 110, 35));
        assert!(screen.contains("Leaf Spot Disease"));
        assert!(!screen.contains("Analyzing..."));
    }

    #[test]
    fn test_api_key_is_masked() {
        let (mut state, _rx) = state();
        state.login(Role::Startup);
        state.select_tab(Tab::Integration);
        let form = state.active_form_mut().unwrap();
        form.focus_next();
        form.focus_next();
        form.focus_next();
        for c in "s3cret".chars() {
            form.insert_char(c);
        }
        let screen = text(&draw(&state, 110, 35));
        assert!(screen.contains("••••••"));
        assert!(!screen.contains("s3cret"));
        assert!(screen.contains("GET /api/v1/farmers"));
    }
}
