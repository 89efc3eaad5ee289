use ratatui::{
    prelude::*,
    widgets::{List, ListItem, Paragraph, Wrap},
};

use crate::forms::FormId;
use crate::mock_data::farmer::{self, AlertKind, RecommendationKind};
use crate::services::recommendation::factor_key;
use crate::types::{Sender, Tab};
use crate::ui::colors::{priority_color, score_color, trend_color};
use crate::ui::layouts::{create_stack_layout, create_two_column_layout, create_two_row_layout};
use crate::ui::widgets::{badge, ProgressBar, StatCard};
use crate::utils::format_clock;

use super::{form_height, panel, priority_text, render_analysis, render_cards, render_form, render_heading, ViewContext};

pub fn render(f: &mut Frame, area: Rect, ctx: &ViewContext, tab: Tab) -> bool {
    match tab {
        Tab::Dashboard => render_dashboard(f, area, ctx),
        Tab::Analysis => render_analysis(f, area, ctx, "tab.analysis"),
        Tab::Community => render_community(f, area, ctx),
        Tab::Chatbot => render_chatbot(f, area, ctx),
        Tab::Feedback => render_feedback(f, area, ctx),
        _ => return false,
    }
    true
}

fn render_dashboard(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[2, 5]);
    let name = ctx
        .state
        .session
        .as_ref()
        .map(|s| s.display_name.as_str())
        .unwrap_or_default();
    let title = format!("{}, {}", ctx.t("common.welcome"), name);
    let subtitle = format!("{}: {}", ctx.t("farmer.todays_weather"), farmer::WEATHER_SUMMARY);
    render_heading(f, parts[0], ctx, &title, &subtitle, None);

    render_cards(
        f,
        parts[1],
        ctx,
        vec![
            StatCard::new(farmer::ACTIVE_CROPS.to_string(), ctx.t("farmer.active_crops"))
                .accent(ctx.colors.success),
            StatCard::new(farmer::NEW_ALERTS.to_string(), ctx.t("farmer.new_alerts"))
                .accent(ctx.colors.warning),
            StatCard::new(farmer::COMMUNITY_POSTS.to_string(), ctx.t("farmer.community_posts"))
                .accent(ctx.colors.info),
        ],
    );

    let (left, right) = create_two_column_layout(parts[2], 50);
    let (suggestions, prices) = create_two_row_layout(left, 55);
    let (alerts, engine) = create_two_row_layout(right, 35);

    render_suggestions(f, suggestions, ctx);
    render_market_prices(f, prices, ctx);
    render_alerts(f, alerts, ctx);
    render_engine(f, engine, ctx);
}

fn render_suggestions(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let language = ctx.language();
    let items: Vec<ListItem> = farmer::RECOMMENDATIONS
        .iter()
        .map(|rec| {
            let (icon, color) = match rec.kind {
                RecommendationKind::Crop => ("✿", ctx.colors.success),
                RecommendationKind::Fertilizer => ("◆", ctx.colors.info),
                RecommendationKind::Pest => ("⚠", ctx.colors.warning),
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{} ", icon), Style::default().fg(color)),
                    Span::styled(
                        rec.title.get(language),
                        Style::default().fg(ctx.colors.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    badge(priority_text(ctx, rec.priority), priority_color(rec.priority)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", rec.description.get(language)),
                    Style::default().fg(ctx.colors.text_secondary),
                )),
            ])
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("farmer.personalized_suggestions"), &ctx.colors)),
        area,
    );
}

fn render_market_prices(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let items: Vec<ListItem> = farmer::MARKET_PRICES
        .iter()
        .map(|price| {
            let arrow = match price.trend {
                farmer::Trend::Up => "▲",
                farmer::Trend::Down => "▼",
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", price.crop.get(ctx.language())),
                    Style::default().fg(ctx.colors.text),
                ),
                Span::raw(format!("{:<16}", price.price)),
                Span::styled(
                    format!("{} {}", arrow, price.change),
                    Style::default().fg(trend_color(price.trend)),
                ),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("farmer.market_prices"), &ctx.colors)),
        area,
    );
}

fn render_alerts(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let items: Vec<ListItem> = farmer::ALERTS
        .iter()
        .map(|alert| {
            let (icon, color) = match alert.kind {
                AlertKind::Weather => ("☂", ctx.colors.info),
                AlertKind::Pest => ("⚠", ctx.colors.warning),
                AlertKind::Market => ("₹", ctx.colors.success),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(color)),
                Span::raw(alert.message.get(ctx.language())),
                Span::styled(
                    format!("  {}", alert.time),
                    Style::default().fg(ctx.colors.text_secondary),
                ),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("farmer.recent_alerts"), &ctx.colors)),
        area,
    );
}

fn render_engine(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let block = panel(ctx.t("ai.title"), &ctx.colors);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let recs = &ctx.state.recommendations;
    let Some(batch) = recs.batch.as_ref().filter(|_| !recs.loading) else {
        let waiting = Paragraph::new(Span::styled(
            ctx.t("ai.analyzing"),
            Style::default().fg(ctx.colors.warning),
        ))
        .alignment(Alignment::Center);
        f.render_widget(waiting, inner);
        return;
    };

    let parts = create_stack_layout(inner, &[1, 1]);
    let confidence_label = format!("{} {}%", ctx.t("ai.confidence"), batch.overall_confidence);
    f.render_widget(
        ProgressBar::from_percent(batch.overall_confidence as u16)
            .style(Style::default().fg(score_color(batch.overall_confidence)))
            .custom_text(&confidence_label),
        parts[0],
    );

    let factors: Vec<&str> = crate::services::recommendation::FACTORS
        .iter()
        .map(|&(_, key)| ctx.t(key))
        .collect();
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("{}: {}", ctx.t("ai.factors"), factors.join(" • ")),
            Style::default().fg(ctx.colors.text_secondary),
        )),
        parts[1],
    );

    let mut lines = Vec::new();
    for rec in &batch.recommendations {
        lines.push(Line::from(vec![
            Span::styled(
                rec.title.clone(),
                Style::default().fg(ctx.colors.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            badge(&format!("{}%", rec.confidence), score_color(rec.confidence)),
            Span::raw(" "),
            badge(priority_text(ctx, rec.priority), priority_color(rec.priority)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", rec.description),
            Style::default().fg(ctx.colors.text_secondary),
        )));
        let rec_factors: Vec<&str> = rec.factors.iter().map(|factor| ctx.t(factor_key(factor))).collect();
        lines.push(Line::from(Span::styled(
            format!(
                "  {} • {}: {} • {}: {}",
                rec_factors.join(", "),
                ctx.t("ai.expected"),
                rec.expected_outcome,
                ctx.t("ai.implementation"),
                rec.implementation
            ),
            Style::default().fg(ctx.colors.info),
        )));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), parts[2]);
}

fn render_community(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let items: Vec<ListItem> = farmer::COMMUNITY
        .iter()
        .map(|post| {
            let mut header = vec![Span::styled(
                post.author,
                Style::default().fg(ctx.colors.text).add_modifier(Modifier::BOLD),
            )];
            if post.expert {
                header.push(Span::raw(" "));
                header.push(badge(ctx.t("farmer.expert"), ctx.colors.success));
            }
            header.push(Span::styled(
                format!("  {}", post.time),
                Style::default().fg(ctx.colors.text_secondary),
            ));
            ListItem::new(vec![
                Line::from(header),
                Line::from(format!("  {}", post.content.get(ctx.language()))),
                Line::from(Span::styled(
                    format!(
                        "  ♥ {} {} • ✉ {} {}",
                        post.likes,
                        ctx.t("farmer.likes"),
                        post.replies,
                        ctx.t("farmer.replies")
                    ),
                    Style::default().fg(ctx.colors.text_secondary),
                )),
                Line::from(""),
            ])
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel(ctx.t("tab.community"), &ctx.colors)),
        area,
    );
}

fn render_chatbot(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let input_height = form_height(FormId::ChatInput);
    let parts = create_stack_layout(area, &[area.height.saturating_sub(input_height + 1), input_height]);

    let turns = ctx.state.chat.turns();
    let transcript: Vec<Line> = if turns.is_empty() {
        vec![Line::from(Span::styled(
            ctx.t("farmer.chat_empty"),
            Style::default().fg(ctx.colors.text_secondary),
        ))]
    } else {
        turns
            .iter()
            .flat_map(|turn| {
                let (who, color) = match turn.sender {
                    Sender::User => (ctx.t("farmer.you"), ctx.colors.primary),
                    Sender::Bot => (ctx.t("farmer.assistant"), ctx.colors.secondary),
                };
                [
                    Line::from(vec![
                        Span::styled(who, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                        Span::styled(
                            format!("  {}", format_clock(&turn.timestamp)),
                            Style::default().fg(ctx.colors.text_secondary),
                        ),
                    ]),
                    Line::from(format!("  {}", turn.text)),
                ]
            })
            .collect()
    };

    // keep the newest turns in view
    let visible = parts[0].height.saturating_sub(2) as usize;
    let scroll = transcript.len().saturating_sub(visible) as u16;
    f.render_widget(
        Paragraph::new(transcript)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(panel(ctx.t("tab.chatbot"), &ctx.colors)),
        parts[0],
    );

    render_form(f, parts[1], ctx, FormId::ChatInput, "farmer.ask_question", "farmer.ask_question");

    let voice = if ctx.state.voice_listening {
        Span::styled(
            format!("🎤 {}", ctx.t("header.listening")),
            Style::default().fg(ctx.colors.error).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("🎤 v {}", ctx.t("header.voice")),
            Style::default().fg(ctx.colors.text_secondary),
        )
    };
    f.render_widget(Paragraph::new(voice), parts[2]);
}

fn render_feedback(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let parts = create_stack_layout(area, &[2, form_height(FormId::FarmerFeedback)]);
    f.render_widget(
        Paragraph::new(Span::styled(
            ctx.t("farmer.feedback_placeholder"),
            Style::default().fg(ctx.colors.text_secondary),
        )),
        parts[0],
    );
    render_form(
        f,
        parts[1],
        ctx,
        FormId::FarmerFeedback,
        "tab.feedback",
        "farmer.submit_feedback",
    );
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::shell::test_support::state;
    use crate::types::Role;
    use crate::ui::dashboards::test_support::{draw, text};

    #[tokio::test(start_paused = true)]
    async fn test_dashboard_shows_engine_after_delay() {
        let (mut state, mut rx) = state();
        state.login(Role::Farmer);

        let screen = text(&draw(&state, 140, 45));
        assert!(screen.contains("Welcome, Ram Kumar"));
        assert!(screen.contains("Analyzing your farm data..."));
        assert!(screen.contains("✿ Wheat Sowing Time"));
        assert!(screen.contains("◆ Nitrogen Fertilizer"));

        tokio::time::sleep(Duration::from_millis(2500)).await;
        state.handle_event(rx.recv().await.unwrap());
        let screen = text(&draw(&state, 140, 45));
        assert!(screen.contains("Confidence Level 91%"));
        assert!(screen.contains("Maize Sowing Recommendation"));
    }

    #[tokio::test]
    async fn test_community_marks_experts() {
        let (mut state, _rx) = state();
        state.login(Role::Farmer);
        state.select_tab(crate::types::Tab::Community);
        let screen = text(&draw(&state, 120, 30));
        assert!(screen.contains("Dr. Priya Sharma [Expert]"));
    }
}
