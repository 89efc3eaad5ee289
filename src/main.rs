mod config;
mod forms;
mod language;
mod mock_data;
mod services;
mod shell;
mod types;
mod ui;
mod utils;

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use parking_lot::Mutex;
use ratatui::{prelude::*, Terminal};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use crate::config::Cli;
use crate::services::assistant::{ScriptedRecognizer, SpeechRecognizer};
use crate::services::messaging::SystemOpener;
use crate::services::{connectivity, install, AppEvent, Services};
use crate::shell::{AppState, InputMode};
use crate::types::AppConfig;
use crate::ui::render_ui;

/// Pause before the scripted recognizer "hears" something.
const VOICE_DEMO_DELAY: Duration = Duration::from_millis(1500);

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
    #[error("Configuration Error: {0}")]
    Config(String),
    #[error("Terminal Error: {0}")]
    Terminal(String),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::try_from(cli)?;

    init_logging(config.verbose)?;
    check_system_requirements()?;
    let terminated = setup_signal_handlers()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = unbounded_channel();
    let recognizer: Option<Arc<dyn SpeechRecognizer>> = if config.voice_demo {
        Some(Arc::new(ScriptedRecognizer::new(VOICE_DEMO_DELAY)))
    } else {
        None
    };
    let services = Services::new(tx.clone(), recognizer, Arc::new(SystemOpener));

    let local = tokio::task::LocalSet::new();

    let result = local
        .run_until(async {
            let app_state = Arc::new(Mutex::new(AppState::new(&config, services)));
            if let Some(role) = config.demo_role {
                app_state.lock().login(role);
            }

            tokio::task::spawn_local(event_pump(app_state.clone(), rx));

            if let Some(host) = config.probe_host.clone() {
                tokio::task::spawn_local(connectivity::probe_loop(
                    host,
                    config.probe_interval(),
                    config.probe_timeout(),
                    tx.clone(),
                ));
            }

            if let Some(path) = install::detect() {
                let _ = tx.send(AppEvent::InstallAvailable(path));
            }

            ui_loop(&mut terminal, app_state, &config, &terminated).await
        })
        .await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("application error: {}", e);
        eprintln!("Application error: {}", e);
    }

    result.map_err(Into::into)
}

/// Applies every background result to the shared state, in arrival order.
async fn event_pump(app_state: Arc<Mutex<AppState>>, mut rx: UnboundedReceiver<AppEvent>) {
    while let Some(event) = rx.recv().await {
        app_state.lock().handle_event(event);
    }
    log::debug!("event channel closed");
}

async fn ui_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app_state: Arc<Mutex<AppState>>,
    config: &AppConfig,
    terminated: &AtomicBool,
) -> Result<(), AppError> {
    let tick = config.tick_duration();

    loop {
        {
            let mut state = app_state.lock();
            state.tick(Instant::now());
            terminal.draw(|f| render_ui(f, &state))?;
            if state.should_quit {
                return Ok(());
            }
        }

        if terminated.load(Ordering::Relaxed) {
            log::info!("SIGTERM received, shutting down");
            return Ok(());
        }

        // Keep polling short so spawned tasks get the runtime between frames.
        if event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                handle_key_event(key, &mut app_state.lock());
            }
            continue;
        }
        tokio::time::sleep(tick).await;
    }
}

fn handle_key_event(key: KeyEvent, state: &mut AppState) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return;
    }

    if state.session.is_none() {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => state.select_landing(false),
            KeyCode::Down | KeyCode::Char('j') => state.select_landing(true),
            KeyCode::Enter => state.login_selected(),
            KeyCode::Char('l') => state.toggle_language(),
            KeyCode::Char('d') => state.toggle_dark_mode(),
            KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
            _ => {}
        }
        return;
    }

    if state.input_mode == InputMode::Editing {
        handle_editing_key(key, state);
        return;
    }

    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Tab => state.cycle_tab(true),
        KeyCode::BackTab => state.cycle_tab(false),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(index) = c.to_digit(10) {
                state.select_tab_index(index as usize - 1);
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => state.begin_editing(),
        KeyCode::Char('v') => state.start_voice(),
        KeyCode::Char('l') => state.toggle_language(),
        KeyCode::Char('d') => state.toggle_dark_mode(),
        KeyCode::Char('o') => state.logout(),
        KeyCode::Char('t') => state.send_test_message(),
        KeyCode::Char('x') => state.disconnect_messaging(),
        KeyCode::Char('i') | KeyCode::Char('I') => match std::env::current_exe() {
            Ok(exec) => state.install_app(&exec),
            Err(e) => log::warn!("cannot locate executable for install: {}", e),
        },
        KeyCode::Char('L') => state.dismiss_install(),
        _ => {}
    }
}

fn handle_editing_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc => state.stop_editing(),
        KeyCode::Enter => state.submit_form(),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = state.active_form_mut() {
                form.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = state.active_form_mut() {
                form.focus_prev();
            }
        }
        KeyCode::Left | KeyCode::Right => {
            let forward = key.code == KeyCode::Right;
            if let Some(form) = state.active_form_mut() {
                form.cycle_choice(forward);
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = state.active_form_mut() {
                form.backspace();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = state.active_form_mut() {
                form.insert_char(c);
            }
        }
        _ => {}
    }
}

#[cfg(unix)]
fn setup_signal_handlers() -> Result<Arc<AtomicBool>, AppError> {
    use signal_hook::consts::SIGTERM;

    let term = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(SIGTERM, Arc::clone(&term))?;
    Ok(term)
}

#[cfg(not(unix))]
fn setup_signal_handlers() -> Result<Arc<AtomicBool>, AppError> {
    Ok(Arc::new(AtomicBool::new(false)))
}

fn check_system_requirements() -> Result<(), AppError> {
    if !atty::is(atty::Stream::Stdout) {
        return Err(AppError::Terminal(
            "KrishiMitra requires a terminal environment".to_string(),
        ));
    }

    if let Ok((width, height)) = crossterm::terminal::size() {
        if width < 80 || height < 24 {
            log::warn!(
                "terminal size {}x{} is smaller than recommended 80x24",
                width,
                height
            );
        }
    }

    Ok(())
}

/// Installs the stderr logger only under `--verbose`; otherwise log output
/// would scribble over the alternate screen.
fn init_logging(verbose: bool) -> Result<(), AppError> {
    if !verbose {
        return Ok(());
    }
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Stderr)
        .try_init()
        .map_err(|e| AppError::Config(format!("logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormId;
    use crate::shell::test_support::state;
    use crate::types::{Language, Role, Tab};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key_event(press(KeyCode::Char(c)), state);
        }
    }

    #[test]
    fn test_app_error_display() {
        let io_error = AppError::Io(io::Error::new(io::ErrorKind::NotFound, "test"));
        assert!(io_error.to_string().contains("IO Error"));

        let config_error = AppError::Config("test config error".to_string());
        assert!(config_error.to_string().contains("Configuration Error"));

        let terminal_error = AppError::Terminal("no tty".to_string());
        assert!(terminal_error.to_string().contains("Terminal Error"));
    }

    #[test]
    fn test_landing_keys() {
        let (mut state, _rx) = state();
        handle_key_event(press(KeyCode::Down), &mut state);
        handle_key_event(press(KeyCode::Down), &mut state);
        handle_key_event(press(KeyCode::Up), &mut state);
        assert_eq!(state.landing_selected, 1);

        handle_key_event(press(KeyCode::Char('l')), &mut state);
        assert_eq!(state.language, Language::Hi);

        handle_key_event(press(KeyCode::Enter), &mut state);
        assert_eq!(state.role(), Some(Role::ExtensionOfficer));
    }

    #[test]
    fn test_tab_navigation_keys() {
        let (mut state, _rx) = state();
        state.login(Role::Admin);
        handle_key_event(press(KeyCode::Tab), &mut state);
        assert_eq!(state.active_tab, Tab::Users);
        handle_key_event(press(KeyCode::BackTab), &mut state);
        handle_key_event(press(KeyCode::BackTab), &mut state);
        assert_eq!(state.active_tab, Tab::Profile);
        handle_key_event(press(KeyCode::Char('4')), &mut state);
        assert_eq!(state.active_tab, Tab::System);
        handle_key_event(press(KeyCode::Char('9')), &mut state);
        assert_eq!(state.active_tab, Tab::System);
    }

    #[test]
    fn test_editing_captures_shortcut_letters() {
        let (mut state, _rx) = state();
        state.login(Role::ExtensionOfficer);
        handle_key_event(press(KeyCode::Char('3')), &mut state);
        assert_eq!(state.active_tab, Tab::Alerts);

        handle_key_event(press(KeyCode::Char('e')), &mut state);
        assert_eq!(state.input_mode, InputMode::Editing);
        handle_key_event(press(KeyCode::Right), &mut state);
        handle_key_event(press(KeyCode::Tab), &mut state);
        type_text(&mut state, "qold");
        handle_key_event(press(KeyCode::Backspace), &mut state);

        assert!(!state.should_quit);
        assert_eq!(state.language, Language::En);
        let form = state.form(FormId::RegionalAlert).unwrap();
        assert_eq!(form.focused_field().unwrap().value(), "qol");

        handle_key_event(press(KeyCode::Esc), &mut state);
        assert_eq!(state.input_mode, InputMode::Normal);
        handle_key_event(press(KeyCode::Char('q')), &mut state);
        assert!(state.should_quit);
    }

    #[test]
    fn test_install_banner_keys() {
        let (mut state, _rx) = state();
        state.login(Role::Admin);
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("krishimitra.desktop");

        state.handle_event(AppEvent::InstallAvailable(entry.clone()));
        handle_key_event(
            KeyEvent::new(KeyCode::Char('I'), KeyModifiers::SHIFT),
            &mut state,
        );
        assert!(state.install_prompt.is_none());
        assert!(entry.exists());
        assert_eq!(state.language, Language::En);

        state.handle_event(AppEvent::InstallAvailable(entry));
        handle_key_event(
            KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT),
            &mut state,
        );
        assert!(state.install_prompt.is_none());
        assert_eq!(state.language, Language::En);
    }

    #[test]
    fn test_logging_stays_off_without_verbose() {
        init_logging(false).unwrap();
        assert_eq!(log::max_level(), log::LevelFilter::Off);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let (mut state, _rx) = state();
        handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut state,
        );
        assert!(state.should_quit);
    }

    #[tokio::test]
    async fn test_logout_key_returns_to_landing() {
        let (mut state, _rx) = state();
        state.login(Role::Farmer);
        handle_key_event(press(KeyCode::Char('o')), &mut state);
        assert!(state.session.is_none());
    }
}
