use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::forms::FormId;
use crate::mock_data::role_card;
use crate::ui::layouts::{create_stack_layout, create_two_column_layout};

use super::{form_height, panel, render_form, ViewContext};

pub fn render(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let (left, right) = create_two_column_layout(area, 45);
    render_details(f, left, ctx);
    render_whatsapp(f, right, ctx);
}

fn render_details(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let Some(session) = ctx.state.session.as_ref() else {
        return;
    };
    let row = |key: &'static str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{:<12}", ctx.t(key)),
                Style::default().fg(ctx.colors.text_secondary),
            ),
            Span::styled(value, Style::default().fg(ctx.colors.text)),
        ])
    };
    let lines = vec![
        row("profile.name", session.display_name.clone()),
        row("profile.phone", session.phone_number.clone()),
        row("profile.location", session.location_label.clone()),
        row(
            "profile.role",
            role_card(session.role).title.get(ctx.language()).to_string(),
        ),
        row(
            "profile.language",
            ctx.state.language.switcher_label().to_string(),
        ),
        row(
            "profile.farm",
            format!("{} • {}", session.farm_size, session.crops.join(", ")),
        ),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(ctx.t("profile.title"), &ctx.colors)),
        area,
    );
}

fn render_whatsapp(f: &mut Frame, area: Rect, ctx: &ViewContext) {
    let messaging = &ctx.state.messaging;
    let parts = create_stack_layout(area, &[3]);
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                ctx.t("whatsapp.title"),
                Style::default().fg(ctx.colors.success).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                ctx.t("whatsapp.subtitle"),
                Style::default().fg(ctx.colors.text_secondary),
            )),
        ]),
        parts[0],
    );

    if messaging.connected {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("✓ ", Style::default().fg(ctx.colors.success)),
                Span::styled(
                    ctx.t("whatsapp.connected"),
                    Style::default().fg(ctx.colors.success).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                messaging.phone.clone(),
                Style::default().fg(ctx.colors.text),
            )),
            Line::from(""),
        ];
        for key in ["whatsapp.sub_weather", "whatsapp.sub_crop", "whatsapp.sub_pest"] {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(ctx.colors.success)),
                Span::raw(ctx.t(key)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            ctx.t("whatsapp.keys"),
            Style::default().fg(ctx.colors.secondary),
        )));
        f.render_widget(
            Paragraph::new(lines).block(panel(ctx.t("whatsapp.title"), &ctx.colors)),
            parts[1],
        );
        return;
    }

    let rows = create_stack_layout(parts[1], &[form_height(FormId::PhoneNumber)]);
    render_form(f, rows[0], ctx, FormId::PhoneNumber, "whatsapp.enter_phone", "whatsapp.connect");
    if messaging.connecting {
        f.render_widget(
            Paragraph::new(Span::styled(
                ctx.t("whatsapp.connecting"),
                Style::default().fg(ctx.colors.warning).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            rows[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::forms::FormId;
    use crate::shell::test_support::state;
    use crate::types::{Role, Tab};
    use crate::ui::dashboards::test_support::{draw, text};

    #[tokio::test(start_paused = true)]
    async fn test_whatsapp_widget_states() {
        let (mut state, mut rx) = state();
        state.login(Role::Ngo);
        state.select_tab(Tab::Profile);

        let screen = text(&draw(&state, 120, 30));
        assert!(screen.contains("Ram Kumar"));
        assert!(screen.contains("NGOs & Cooperatives"));
        assert!(screen.contains("Enter your WhatsApp number"));

        for c in "9876543210".chars() {
            state.form_mut(FormId::PhoneNumber).insert_char(c);
        }
        state.connect_messaging();
        assert!(text(&draw(&state, 120, 30)).contains("Connecting..."));

        tokio::time::sleep(Duration::from_secs(1)).await;
        state.handle_event(rx.recv().await.unwrap());
        let screen = text(&draw(&state, 120, 30));
        assert!(screen.contains("Connected to WhatsApp"));
        assert!(screen.contains("Daily weather updates at 7 AM"));
    }
}
