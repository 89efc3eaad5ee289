pub mod colors;
pub mod dashboards;
pub mod landing;
pub mod layouts;
pub mod widgets;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

use crate::language::Translator;
use crate::mock_data::role_card;
use crate::services::connectivity::Banner;
use crate::shell::{tab_icon, tab_label_key, AppState, InputMode};

use colors::ColorScheme;
use dashboards::{render_view, ViewContext};
use layouts::{create_main_layout, create_stack_layout, utils::is_area_too_small};

const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 20;

pub fn render_ui(f: &mut Frame, state: &AppState) {
    let area = f.size();
    let tr = state.translator();
    let colors = ColorScheme::for_mode(state.dark_mode);

    if is_area_too_small(area, MIN_WIDTH, MIN_HEIGHT) {
        let paragraph = Paragraph::new(tr.t("common.too_small"))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(colors.warning));
        f.render_widget(paragraph, area);
        return;
    }

    let Some(session) = state.session.as_ref() else {
        // The install prompt waits for a session; only connectivity shows here.
        let banners: Vec<Line<'static>> = connectivity_line(state, &tr, &colors).into_iter().collect();
        let parts = create_stack_layout(area, &[banners.len() as u16]);
        render_banners(f, parts[0], banners);
        landing::render(f, parts[1], state);
        return;
    };

    let banners = banner_lines(state, &tr, &colors);

    let layout = create_main_layout(area, banners.len() as u16);
    render_header(f, state, layout.header_area, &tr, &colors);
    render_banners(f, layout.banner_area, banners);
    render_tab_bar(f, state, layout.nav_area, &tr, &colors);

    let ctx = ViewContext::new(state);
    if !render_view(f, layout.content_area, &ctx, session.role, state.active_tab) {
        log::debug!("no {} view for {}", state.active_tab.id(), session.role.id());
    }

    render_footer(f, state, layout.footer_area, &tr, &colors);
}

fn render_header(f: &mut Frame, state: &AppState, area: Rect, tr: &Translator, colors: &ColorScheme) {
    let Some(session) = state.session.as_ref() else {
        return;
    };
    let language = state.language;

    let mut spans = vec![
        Span::styled(
            format!("{} ", session.display_name),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("({})", role_card(session.role).title.get(language)),
            Style::default().fg(colors.text_secondary),
        ),
        Span::raw("  "),
    ];

    if state.voice_listening {
        spans.push(Span::styled(
            format!("● {}  ", tr.t("header.listening")),
            Style::default().fg(colors.error).add_modifier(Modifier::BOLD),
        ));
    }

    for candidate in crate::types::Language::ALL {
        let style = if candidate == language {
            Style::default()
                .fg(colors.background)
                .bg(colors.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text_secondary)
        };
        spans.push(Span::styled(format!(" {} ", candidate.switcher_label()), style));
    }

    let theme = if state.dark_mode {
        format!("  ☾ {}", tr.t("header.dark_mode"))
    } else {
        format!("  ☀ {}", tr.t("header.light_mode"))
    };
    spans.push(Span::styled(theme, Style::default().fg(colors.secondary)));
    spans.push(Span::styled(
        format!("  ⏻ {}", tr.t("header.logout")),
        Style::default().fg(colors.error),
    ));

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(format!(" 🌱 {} • {} ", tr.t("app.name"), tr.t("app.tagline")))
                .title_style(Style::default().fg(colors.primary).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );
    f.render_widget(header, area);
}

fn connectivity_line(state: &AppState, tr: &Translator, colors: &ColorScheme) -> Option<Line<'static>> {
    match state.connectivity.banner {
        Banner::Offline => Some(Line::from(Span::styled(
            format!("⚠ {}", tr.t("banner.offline")),
            Style::default().fg(colors.background).bg(colors.warning),
        ))),
        Banner::Restored(_) => Some(Line::from(Span::styled(
            format!("✓ {}", tr.t("banner.restored")),
            Style::default().fg(colors.background).bg(colors.success),
        ))),
        Banner::Hidden => None,
    }
}

/// One line per active banner: connectivity first, then the install prompt.
fn banner_lines(state: &AppState, tr: &Translator, colors: &ColorScheme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = connectivity_line(state, tr, colors).into_iter().collect();
    if state.install_prompt.is_some() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("⬇ {} ", tr.t("banner.install")),
                Style::default().fg(colors.text),
            ),
            Span::styled(
                format!("[{}]", tr.t("banner.install_keys")),
                Style::default().fg(colors.primary).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines
}

fn render_banners(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    if lines.is_empty() || area.height == 0 {
        return;
    }
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_tab_bar(f: &mut Frame, state: &AppState, area: Rect, tr: &Translator, colors: &ColorScheme) {
    let tabs = state.tabs();
    let titles: Vec<Line> = tabs
        .iter()
        .enumerate()
        .map(|(i, &tab)| {
            let style = if tab == state.active_tab {
                Style::default().fg(colors.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text_secondary)
            };
            Line::from(Span::styled(
                format!("{} {} {}", i + 1, tab_icon(tab), tr.t(tab_label_key(tab))),
                style,
            ))
        })
        .collect();

    let selected = tabs
        .iter()
        .position(|&tab| tab == state.active_tab)
        .unwrap_or(0);

    let bar = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        )
        .select(selected)
        .highlight_style(Style::default().fg(colors.highlight).add_modifier(Modifier::BOLD));
    f.render_widget(bar, area);
}

fn render_footer(f: &mut Frame, state: &AppState, area: Rect, tr: &Translator, colors: &ColorScheme) {
    let line = match &state.notification {
        Some(notification) => Line::from(Span::styled(
            notification.text.clone(),
            Style::default()
                .fg(colors.notification(notification.level))
                .add_modifier(Modifier::BOLD),
        )),
        None => {
            let key = match state.input_mode {
                InputMode::Editing => "help.editing",
                InputMode::Normal => "help.main",
            };
            Line::from(Span::styled(tr.t(key), Style::default().fg(colors.text_secondary)))
        }
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use crate::services::AppEvent;
    use crate::shell::test_support::state;
    use crate::types::{Language, Role, Tab};
    use crate::ui::dashboards::test_support::{draw, shows, text};

    #[test]
    fn test_admin_users_tab_in_both_languages() {
        let (mut state, _rx) = state();
        state.login(Role::Admin);
        state.select_tab(Tab::Users);
        state.notification = None;

        let screen = text(&draw(&state, 130, 40));
        assert!(screen.contains("User Statistics"));
        assert!(screen.contains("Admins (Your Team)"));
        assert!(screen.contains("Tab next"));

        state.set_language(Language::Hi);
        let screen = text(&draw(&state, 130, 40));
        assert!(shows(&screen, "उपयोगकर्ता आंकड़े"));
        assert!(!screen.contains("User Statistics"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_farmer_analysis_busy_then_result() {
        let (mut state, mut rx) = state();
        state.login(Role::Farmer);
        state.select_tab(Tab::Analysis);

        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"png").unwrap();
        state.submit_image(file.path().to_str().unwrap());
        assert!(text(&draw(&state, 120, 40)).contains("Analyzing..."));

        tokio::time::sleep(Duration::from_millis(3000)).await;
        state.handle_event(rx.recv().await.unwrap());
        let screen = text(&draw(&state, 120, 40));
        assert!(!screen.contains("Analyzing..."));
        assert!(screen.contains("Leaf Spot Disease"));
    }

    #[tokio::test]
    async fn test_header_tracks_language_and_banners() {
        let (mut state, _rx) = state();
        state.login(Role::Farmer);
        state.handle_event(AppEvent::Connectivity(false));
        state.handle_event(AppEvent::InstallAvailable(PathBuf::from("/tmp/k.desktop")));

        let screen = text(&draw(&state, 140, 40));
        assert!(screen.contains("KrishiMitra"));
        assert!(screen.contains("You are offline"));
        assert!(screen.contains("I install • L later"));

        state.toggle_language();
        let screen = text(&draw(&state, 140, 40));
        assert!(shows(&screen, "कृषिमित्र"));
        assert!(shows(&screen, "आप ऑफ़लाइन हैं"));
    }

    #[test]
    fn test_landing_hides_install_prompt() {
        let (mut state, _rx) = state();
        state.handle_event(AppEvent::Connectivity(false));
        state.handle_event(AppEvent::InstallAvailable(PathBuf::from("/tmp/k.desktop")));

        let screen = text(&draw(&state, 150, 45));
        assert!(screen.contains("You are offline"));
        assert!(!screen.contains("I install"));
        assert!(screen.contains("Choose Your Role"));

        state.login(Role::Admin);
        assert!(text(&draw(&state, 140, 40)).contains("I install • L later"));
    }

    #[test]
    fn test_notification_replaces_help_until_expired() {
        let (mut state, _rx) = state();
        state.login(Role::Admin);
        assert!(text(&draw(&state, 120, 30)).contains("Successfully logged in"));

        state.tick(Instant::now() + Duration::from_secs(5));
        let screen = text(&draw(&state, 120, 30));
        assert!(!screen.contains("Successfully logged in"));
        assert!(screen.contains("Tab next"));
    }

    #[test]
    fn test_small_terminal_shows_resize_hint() {
        let (state, _rx) = state();
        assert!(text(&draw(&state, 40, 10)).contains("Terminal too small"));
    }
}
