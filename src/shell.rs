//! Application state and its single update surface. Key handling, the event
//! pump and the renderer all go through [`AppState`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::forms::{form_for, Form, FormId};
use crate::language::Translator;
use crate::mock_data;
use crate::services::analysis::{self, AnalysisState};
use crate::services::assistant::{self, Conversation, VoiceError};
use crate::services::connectivity::ConnectivityState;
use crate::services::install;
use crate::services::messaging::{self, MessagingState};
use crate::services::recommendation::{self, RecommendationState};
use crate::services::{
    AppEvent, Services, TaskScope, VoiceEvent, ANALYSIS_DELAY, CONNECT_DELAY, RECOMMENDATION_DELAY,
    REPLY_DELAY,
};
use crate::types::{AppConfig, Language, Notification, NotificationLevel, Role, Session, Tab};

pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

const FARMER_TABS: [Tab; 6] = [
    Tab::Dashboard,
    Tab::Analysis,
    Tab::Community,
    Tab::Chatbot,
    Tab::Feedback,
    Tab::Profile,
];
const EXTENSION_TABS: [Tab; 5] = [
    Tab::Dashboard,
    Tab::Monitoring,
    Tab::Alerts,
    Tab::Training,
    Tab::Profile,
];
const GOVERNMENT_TABS: [Tab; 5] = [
    Tab::Dashboard,
    Tab::Analytics,
    Tab::Advisories,
    Tab::Impact,
    Tab::Profile,
];
const NGO_TABS: [Tab; 5] = [
    Tab::Dashboard,
    Tab::Programs,
    Tab::Resources,
    Tab::Impact,
    Tab::Profile,
];
const STARTUP_TABS: [Tab; 5] = [
    Tab::Dashboard,
    Tab::Integration,
    Tab::Analytics,
    Tab::Testing,
    Tab::Profile,
];
const ADMIN_TABS: [Tab; 5] = [
    Tab::Dashboard,
    Tab::Users,
    Tab::Content,
    Tab::System,
    Tab::Profile,
];

/// Ordered navigation entries for a role.
pub fn navigation_tabs(role: Role) -> &'static [Tab] {
    match role {
        Role::Farmer => &FARMER_TABS,
        Role::ExtensionOfficer => &EXTENSION_TABS,
        Role::Government => &GOVERNMENT_TABS,
        Role::Ngo => &NGO_TABS,
        Role::Startup => &STARTUP_TABS,
        Role::Admin => &ADMIN_TABS,
    }
}

pub fn tab_label_key(tab: Tab) -> &'static str {
    match tab {
        Tab::Dashboard => "tab.dashboard",
        Tab::Analysis => "tab.analysis",
        Tab::Community => "tab.community",
        Tab::Chatbot => "tab.chatbot",
        Tab::Feedback => "tab.feedback",
        Tab::Profile => "tab.profile",
        Tab::Monitoring => "tab.monitoring",
        Tab::Alerts => "tab.alerts",
        Tab::Training => "tab.training",
        Tab::Analytics => "tab.analytics",
        Tab::Advisories => "tab.advisories",
        Tab::Impact => "tab.impact",
        Tab::Programs => "tab.programs",
        Tab::Resources => "tab.resources",
        Tab::Integration => "tab.integration",
        Tab::Testing => "tab.testing",
        Tab::Users => "tab.users",
        Tab::Content => "tab.content",
        Tab::System => "tab.system",
    }
}

pub fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Dashboard => "⌂",
        Tab::Analysis | Tab::Testing => "◉",
        Tab::Community | Tab::Users => "☺",
        Tab::Chatbot => "✉",
        Tab::Feedback | Tab::Content => "✎",
        Tab::Profile => "☰",
        Tab::Monitoring | Tab::Analytics | Tab::System => "▤",
        Tab::Alerts | Tab::Advisories => "⚑",
        Tab::Training | Tab::Programs => "✦",
        Tab::Impact => "▲",
        Tab::Resources => "✚",
        Tab::Integration => "⚙",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

pub struct AppState {
    pub session: Option<Session>,
    pub active_tab: Tab,
    pub language: Language,
    pub dark_mode: bool,
    pub landing_selected: usize,
    pub chat: Conversation,
    pub voice_listening: bool,
    pub analysis: AnalysisState,
    pub recommendations: RecommendationState,
    pub messaging: MessagingState,
    pub connectivity: ConnectivityState,
    pub install_prompt: Option<PathBuf>,
    pub input_mode: InputMode,
    pub notification: Option<Notification>,
    pub should_quit: bool,
    forms: HashMap<FormId, Form>,
    view_scope: TaskScope,
    session_scope: TaskScope,
    services: Services,
}

impl AppState {
    pub fn new(config: &AppConfig, services: Services) -> Self {
        Self {
            session: None,
            active_tab: Tab::Dashboard,
            language: config.language,
            dark_mode: config.dark_mode,
            landing_selected: 0,
            chat: Conversation::default(),
            voice_listening: false,
            analysis: AnalysisState::default(),
            recommendations: RecommendationState::default(),
            messaging: MessagingState::default(),
            connectivity: ConnectivityState::default(),
            install_prompt: None,
            input_mode: InputMode::Normal,
            notification: None,
            should_quit: false,
            forms: HashMap::new(),
            view_scope: TaskScope::new(),
            session_scope: TaskScope::new(),
            services,
        }
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.language)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    /// Tabs of the current role; empty while logged out.
    /// Tabs for the current role; without one, the farmer set.
    pub fn tabs(&self) -> &'static [Tab] {
        navigation_tabs(self.role().unwrap_or(Role::Farmer))
    }

    fn notify(&mut self, level: NotificationLevel, key: &'static str) {
        let text = self.translator().t(key).to_string();
        self.notification = Some(Notification::new(level, text));
    }

    // Session

    pub fn login(&mut self, role: Role) {
        self.session = Some(mock_data::mock_user(role, self.language));
        self.active_tab = Tab::Dashboard;
        self.input_mode = InputMode::Normal;
        log::info!("logged in as {}", role.id());
        self.notify(NotificationLevel::Success, "notify.logged_in");
        self.mount_view();
    }

    pub fn logout(&mut self) {
        if self.session.is_none() {
            return;
        }
        self.teardown_view();
        let aborted = self.session_scope.reset();
        log::info!("logged out, {} session task(s) cancelled", aborted);

        self.session = None;
        self.active_tab = Tab::Dashboard;
        self.chat.clear();
        self.voice_listening = false;
        self.forms.clear();
        self.input_mode = InputMode::Normal;
        self.notify(NotificationLevel::Success, "notify.logged_out");
    }

    pub fn select_landing(&mut self, down: bool) {
        let count = mock_data::ROLE_CARDS.len();
        self.landing_selected = if down {
            (self.landing_selected + 1) % count
        } else {
            (self.landing_selected + count - 1) % count
        };
    }

    pub fn login_selected(&mut self) {
        let role = mock_data::ROLE_CARDS[self.landing_selected % mock_data::ROLE_CARDS.len()].role;
        self.login(role);
    }

    // Navigation

    pub fn select_tab(&mut self, tab: Tab) {
        if self.session.is_none() || tab == self.active_tab {
            return;
        }
        self.teardown_view();
        self.active_tab = tab;
        self.input_mode = InputMode::Normal;
        log::debug!("tab changed to {}", tab.id());
        self.mount_view();
    }

    pub fn select_tab_index(&mut self, index: usize) {
        if let Some(&tab) = self.tabs().get(index) {
            self.select_tab(tab);
        }
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let tabs = self.tabs();
        let current = tabs.iter().position(|&t| t == self.active_tab).unwrap_or(0);
        let next = if forward {
            (current + 1) % tabs.len()
        } else {
            (current + tabs.len() - 1) % tabs.len()
        };
        self.select_tab(tabs[next]);
    }

    fn teardown_view(&mut self) {
        let aborted = self.view_scope.reset();
        if aborted > 0 {
            log::debug!("view {} torn down, {} task(s) cancelled", self.active_tab.id(), aborted);
        }
        if let Some(id) = self.active_form_id() {
            if id != FormId::ChatInput {
                self.forms.remove(&id);
            }
        }
        self.analysis = AnalysisState::default();
        self.recommendations = RecommendationState::default();
        self.messaging = MessagingState::default();
    }

    fn mount_view(&mut self) {
        if self.role() == Some(Role::Farmer) && self.active_tab == Tab::Dashboard {
            self.start_recommendations();
        }
    }

    fn start_recommendations(&mut self) {
        let language = self.language;
        self.recommendations.begin();
        log::debug!("recommendation engine started ({})", language.code());
        self.services
            .schedule(&mut self.view_scope, RECOMMENDATION_DELAY, move |scope| {
                AppEvent::RecommendationsReady {
                    scope,
                    batch: recommendation::generate(language),
                }
            });
    }

    // Preferences

    pub fn set_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        self.language = language;
        if let Some(session) = self.session.as_mut() {
            session.language_preference = language;
        }
        log::info!("language set to {}", language.code());
        if self.role() == Some(Role::Farmer) && self.active_tab == Tab::Dashboard {
            self.view_scope.reset();
            self.start_recommendations();
        }
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language.toggled());
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        let key = if self.dark_mode {
            "notify.dark_on"
        } else {
            "notify.light_on"
        };
        self.notify(NotificationLevel::Info, key);
    }

    // Assistant

    pub fn submit_message(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.chat.push(crate::types::Sender::User, text);
        let reply = assistant::pick_reply(self.language, &mut rand::thread_rng());
        self.services
            .schedule(&mut self.session_scope, REPLY_DELAY, move |scope| AppEvent::BotReply {
                scope,
                text: reply.to_string(),
            });
    }

    pub fn start_voice(&mut self) {
        if self.voice_listening {
            log::debug!("voice capture already running, start ignored");
            return;
        }
        match self.services.listen(&mut self.session_scope, self.language) {
            Ok(()) => {
                self.voice_listening = true;
                log::debug!("voice capture started ({})", self.language.speech_locale());
            }
            Err(VoiceError::Unsupported) => {
                self.notify(NotificationLevel::Error, "notify.voice_unsupported")
            }
            Err(e) => {
                log::warn!("{}", e);
                self.notify(NotificationLevel::Error, "notify.voice_failed");
            }
        }
    }

    // Analysis

    pub fn submit_image(&mut self, raw_path: &str) {
        let image = match analysis::inspect_image(raw_path) {
            Ok(image) => image,
            Err(e) => {
                log::warn!("image rejected: {}", e);
                self.notify(NotificationLevel::Error, e.message_key());
                return;
            }
        };
        log::debug!("analysing {} ({} bytes)", image.file_name, image.size_bytes);
        self.analysis.begin(image);
        let language = self.language;
        self.services
            .schedule(&mut self.view_scope, ANALYSIS_DELAY, move |scope| AppEvent::AnalysisComplete {
                scope,
                result: analysis::mock_result(language),
            });
    }

    // Messaging

    pub fn connect_messaging(&mut self) {
        let phone = self
            .form(FormId::PhoneNumber)
            .map(|f| f.first_value().to_string())
            .unwrap_or_default();
        if !self.messaging.begin_connect(&phone) {
            self.notify(NotificationLevel::Error, "notify.phone_required");
            return;
        }
        self.services
            .schedule(&mut self.view_scope, CONNECT_DELAY, |scope| AppEvent::MessagingConnected { scope });
    }

    pub fn send_test_message(&mut self) {
        if !self.messaging.connected {
            return;
        }
        let url = messaging::deep_link(&self.messaging.phone, self.translator().t("whatsapp.test_message"));
        if let Err(e) = self.services.opener().open(&url) {
            log::warn!("could not open {}: {}", url, e);
        }
        self.notify(NotificationLevel::Success, "notify.test_sent");
    }

    pub fn disconnect_messaging(&mut self) {
        if !self.messaging.connected && !self.messaging.connecting {
            return;
        }
        self.view_scope.reset();
        self.messaging.disconnect();
        if let Some(form) = self.forms.get_mut(&FormId::PhoneNumber) {
            form.clear();
        }
        self.notify(NotificationLevel::Info, "notify.whatsapp_disconnected");
    }

    // Install prompt

    pub fn install_app(&mut self, exec: &Path) {
        let Some(path) = self.install_prompt.take() else {
            return;
        };
        match install::install(&path, exec) {
            Ok(outcome) => {
                log::info!("install prompt outcome: {}", outcome.label());
                self.notify(NotificationLevel::Success, "notify.install_accepted");
            }
            Err(e) => {
                log::error!("writing {} failed: {}", path.display(), e);
                self.notify(NotificationLevel::Error, "notify.install_failed");
            }
        }
    }

    pub fn dismiss_install(&mut self) {
        if self.install_prompt.take().is_some() {
            log::info!(
                "install prompt outcome: {}",
                install::InstallOutcome::Dismissed.label()
            );
        }
    }

    // Forms

    pub fn active_form_id(&self) -> Option<FormId> {
        self.role().and_then(|role| form_for(role, self.active_tab))
    }

    pub fn form(&self, id: FormId) -> Option<&Form> {
        self.forms.get(&id)
    }

    pub fn form_mut(&mut self, id: FormId) -> &mut Form {
        self.forms.entry(id).or_insert_with(|| Form::new(id))
    }

    pub fn active_form_mut(&mut self) -> Option<&mut Form> {
        let id = self.active_form_id()?;
        Some(self.form_mut(id))
    }

    pub fn begin_editing(&mut self) {
        if self.active_form_id().is_some() && !(self.active_tab == Tab::Profile && self.messaging.connected) {
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn submit_form(&mut self) {
        let Some(id) = self.active_form_id() else {
            return;
        };
        let form = self.form_mut(id).clone();
        match id {
            FormId::ChatInput => {
                self.form_mut(id).clear();
                self.submit_message(form.first_value());
                return;
            }
            FormId::PhoneNumber => {
                self.input_mode = InputMode::Normal;
                self.connect_messaging();
                return;
            }
            FormId::StateFilter => {
                self.input_mode = InputMode::Normal;
                return;
            }
            _ => {}
        }

        if let Err(label_key) = form.validate() {
            let t = self.translator();
            let text = format!("{}: {}", t.t("notify.field_required"), t.t(label_key));
            self.notification = Some(Notification::new(NotificationLevel::Error, text));
            return;
        }

        self.form_mut(id).clear();
        self.input_mode = InputMode::Normal;
        match id {
            FormId::ImagePath => self.submit_image(form.first_value()),
            _ => {
                log::debug!("form {:?} submitted", id);
                if let Some(key) = id.success_key() {
                    self.notify(NotificationLevel::Success, key);
                }
            }
        }
    }

    // Events

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AnalysisComplete { scope, result } => {
                if self.view_scope.is_current(scope) {
                    self.analysis.complete(result);
                } else {
                    log::debug!("dropping stale analysis result");
                }
            }
            AppEvent::RecommendationsReady { scope, batch } => {
                if self.view_scope.is_current(scope) {
                    self.recommendations.complete(batch);
                } else {
                    log::debug!("dropping stale recommendations");
                }
            }
            AppEvent::MessagingConnected { scope } => {
                if self.view_scope.is_current(scope) && self.messaging.connecting {
                    self.messaging.complete_connect();
                    log::info!("messaging connected");
                    self.notify(NotificationLevel::Success, "notify.whatsapp_connected");
                }
            }
            AppEvent::BotReply { scope, text } => {
                if self.session_scope.is_current(scope) {
                    self.chat.push(crate::types::Sender::Bot, text);
                }
            }
            AppEvent::Voice { scope, event } => {
                if !self.session_scope.is_current(scope) {
                    return;
                }
                match event {
                    VoiceEvent::Started => self.notify(NotificationLevel::Info, "header.listening"),
                    VoiceEvent::Transcript(text) => self.submit_message(&text),
                    VoiceEvent::Failed(reason) => {
                        log::warn!("voice capture failed: {}", reason);
                        self.notify(NotificationLevel::Error, "notify.voice_failed");
                    }
                    VoiceEvent::Ended => self.voice_listening = false,
                }
            }
            AppEvent::Connectivity(online) => {
                self.connectivity.apply(online, Instant::now());
            }
            AppEvent::InstallAvailable(path) => {
                log::debug!("install prompt available for {}", path.display());
                self.install_prompt = Some(path);
            }
        }
    }

    /// Expires transient UI (notifications, restored banner).
    pub fn tick(&mut self, now: Instant) {
        if let Some(notification) = &self.notification {
            if now.saturating_duration_since(notification.raised_at) >= NOTIFICATION_TTL {
                self.notification = None;
            }
        }
        self.connectivity.tick(now);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use tokio::sync::mpsc::UnboundedReceiver;

    use super::AppState;
    use crate::services::assistant::SpeechRecognizer;
    use crate::services::messaging::RecordingOpener;
    use crate::services::{test_support, AppEvent};
    use crate::types::AppConfig;

    pub fn state_with(
        recognizer: Option<Arc<dyn SpeechRecognizer>>,
    ) -> (AppState, UnboundedReceiver<AppEvent>, Arc<RecordingOpener>) {
        let (services, rx, opener) = test_support::services(recognizer);
        (AppState::new(&AppConfig::default(), services), rx, opener)
    }

    pub fn state() -> (AppState, UnboundedReceiver<AppEvent>) {
        let (state, rx, _) = state_with(None);
        (state, rx)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{state, state_with};
    use super::*;
    use crate::services::assistant::ScriptedRecognizer;
    use crate::services::connectivity::Banner;
    use crate::types::Sender;
    use std::io::Write;
    use std::sync::Arc;
    use tokio::time::timeout;

    fn notification_text(state: &AppState) -> &str {
        state.notification.as_ref().map(|n| n.text.as_str()).unwrap_or("")
    }

    fn image_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"png").unwrap();
        file
    }

    #[test]
    fn test_navigation_tables() {
        assert_eq!(navigation_tabs(Role::Farmer).len(), 6);
        assert_eq!(
            navigation_tabs(Role::Admin),
            &[Tab::Dashboard, Tab::Users, Tab::Content, Tab::System, Tab::Profile]
        );
        for role in Role::ALL {
            let tabs = navigation_tabs(role);
            assert_eq!(tabs[0], Tab::Dashboard);
            assert_eq!(tabs[tabs.len() - 1], Tab::Profile);
        }
    }

    #[test]
    fn test_missing_role_falls_back_to_farmer_tabs() {
        let (mut state, _rx) = state();
        assert_eq!(state.tabs(), navigation_tabs(Role::Farmer));

        state.login(Role::Ngo);
        assert_eq!(state.tabs(), navigation_tabs(Role::Ngo));
        state.cycle_tab(true);
        assert_eq!(state.active_tab, Tab::Programs);
    }

    #[test]
    fn test_login_and_logout() {
        let (mut state, _rx) = state();
        state.login(Role::Admin);
        assert_eq!(state.role(), Some(Role::Admin));
        assert_eq!(state.active_tab, Tab::Dashboard);
        assert_eq!(notification_text(&state), "Successfully logged in");

        state.select_tab(Tab::Users);
        assert_eq!(state.active_tab, Tab::Users);

        state.logout();
        assert!(state.session.is_none());
        assert_eq!(state.active_tab, Tab::Dashboard);
        assert_eq!(state.tabs(), navigation_tabs(Role::Farmer));
        assert_eq!(notification_text(&state), "Successfully logged out");
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let (mut state, _rx) = state();
        state.login(Role::Government);
        state.cycle_tab(false);
        assert_eq!(state.active_tab, Tab::Profile);
        state.cycle_tab(true);
        assert_eq!(state.active_tab, Tab::Dashboard);
        state.select_tab_index(2);
        assert_eq!(state.active_tab, Tab::Advisories);
        state.select_tab_index(9);
        assert_eq!(state.active_tab, Tab::Advisories);
    }

    #[test]
    fn test_dark_mode_round_trip() {
        let (mut state, _rx) = state();
        assert!(!state.dark_mode);
        state.toggle_dark_mode();
        assert!(state.dark_mode);
        assert_eq!(notification_text(&state), "Dark mode enabled");
        state.toggle_dark_mode();
        assert!(!state.dark_mode);
        assert_eq!(notification_text(&state), "Light mode enabled");
    }

    #[test]
    fn test_language_switch_relocalizes_notifications() {
        let (mut state, _rx) = state();
        state.set_language(Language::Hi);
        state.toggle_dark_mode();
        assert_eq!(notification_text(&state), "डार्क मोड चालू");
    }

    #[tokio::test(start_paused = true)]
    async fn test_analysis_completes_after_three_seconds() {
        let (mut state, mut rx) = state();
        state.login(Role::Farmer);
        state.select_tab(Tab::Analysis);
        let image = image_file();
        state.submit_image(image.path().to_str().unwrap());
        assert!(state.analysis.busy);
        assert!(state.analysis.image.is_some());

        assert!(timeout(Duration::from_millis(2999), rx.recv()).await.is_err());
        let event = rx.recv().await.unwrap();
        state.handle_event(event);

        assert!(!state.analysis.busy);
        let result = state.analysis.result.as_ref().unwrap();
        assert_eq!(result.crop_health_score, 85);
        assert_eq!(result.disease_label, "Leaf Spot Disease");
    }

    #[tokio::test(start_paused = true)]
    async fn test_tab_change_cancels_pending_analysis() {
        let (mut state, mut rx) = state();
        state.login(Role::Startup);
        state.select_tab(Tab::Testing);
        let image = image_file();
        state.submit_image(image.path().to_str().unwrap());
        let stale = AppEvent::AnalysisComplete {
            scope: state.view_scope.id(),
            result: analysis::mock_result(Language::En),
        };

        state.select_tab(Tab::Dashboard);
        assert!(!state.analysis.busy);
        assert!(timeout(Duration::from_secs(5), rx.recv()).await.is_err());

        state.handle_event(stale);
        assert!(state.analysis.result.is_none());
    }

    #[tokio::test]
    async fn test_non_image_is_rejected() {
        let (mut state, _rx) = state();
        state.login(Role::Farmer);
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        state.submit_image(file.path().to_str().unwrap());
        assert!(!state.analysis.busy);
        assert_eq!(notification_text(&state), "Please choose an image file");
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_reply_after_one_second() {
        let (mut state, mut rx) = state();
        state.set_language(Language::Hi);
        state.login(Role::Farmer);
        state.select_tab(Tab::Chatbot);

        state.submit_message("   ");
        assert!(state.chat.turns().is_empty());

        state.submit_message("गेहूं कब बोएं?");
        assert_eq!(state.chat.turns().len(), 1);
        assert_eq!(state.chat.turns()[0].sender, Sender::User);

        assert!(timeout(Duration::from_millis(999), rx.recv()).await.is_err());
        state.handle_event(rx.recv().await.unwrap());
        let turns = state.chat.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].sender, Sender::Bot);
        assert!(assistant::canned_replies(Language::Hi).contains(&turns[1].text.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_form_submits_and_clears() {
        let (mut state, mut rx) = state();
        state.login(Role::Farmer);
        state.select_tab(Tab::Chatbot);
        state.begin_editing();
        assert_eq!(state.input_mode, InputMode::Editing);
        for c in "hello".chars() {
            state.active_form_mut().unwrap().insert_char(c);
        }
        state.submit_form();
        assert_eq!(state.chat.turns()[0].text, "hello");
        assert_eq!(state.form(FormId::ChatInput).unwrap().first_value(), "");
        assert_eq!(state.input_mode, InputMode::Editing);

        state.handle_event(rx.recv().await.unwrap());
        assert_eq!(state.chat.turns().len(), 2);
    }

    #[tokio::test]
    async fn test_voice_unsupported() {
        let (mut state, _rx) = state();
        state.login(Role::Farmer);
        state.start_voice();
        assert!(!state.voice_listening);
        assert!(state.chat.turns().is_empty());
        let notification = state.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert_eq!(notification.text, "Voice recognition not supported");
    }

    #[tokio::test(start_paused = true)]
    async fn test_voice_transcript_becomes_message() {
        let recognizer = Arc::new(ScriptedRecognizer::new(Duration::from_millis(1500)));
        let (mut state, mut rx, _) = state_with(Some(recognizer));
        state.login(Role::Government);

        state.start_voice();
        assert!(state.voice_listening);
        state.start_voice();

        state.handle_event(rx.recv().await.unwrap());
        assert_eq!(notification_text(&state), "Listening...");
        state.handle_event(rx.recv().await.unwrap());
        assert_eq!(state.chat.turns().len(), 1);
        assert_eq!(state.chat.turns()[0].text, "When should I sow wheat?");
        state.handle_event(rx.recv().await.unwrap());
        assert!(!state.voice_listening);

        // only the bot reply is left; the second start never ran
        let next = rx.recv().await.unwrap();
        assert!(matches!(next, AppEvent::BotReply { .. }));
        state.handle_event(next);
        assert_eq!(state.chat.turns().len(), 2);
        assert!(timeout(Duration::from_secs(10), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_drops_pending_reply() {
        let (mut state, mut rx) = state();
        state.login(Role::Ngo);
        state.submit_message("hello");
        state.logout();
        assert!(state.chat.turns().is_empty());
        assert!(timeout(Duration::from_secs(2), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_messaging_flow() {
        let (mut state, mut rx, opener) = state_with(None);
        state.login(Role::ExtensionOfficer);
        state.select_tab(Tab::Profile);

        state.connect_messaging();
        assert_eq!(notification_text(&state), "Please enter a valid phone number");
        assert!(!state.messaging.connecting);

        for c in "+91 98765 43210".chars() {
            state.form_mut(FormId::PhoneNumber).insert_char(c);
        }
        state.submit_form();
        assert!(state.messaging.connecting);
        assert!(timeout(Duration::from_millis(999), rx.recv()).await.is_err());
        state.handle_event(rx.recv().await.unwrap());
        assert!(state.messaging.connected);
        assert_eq!(notification_text(&state), "Connected to WhatsApp!");

        state.send_test_message();
        assert_eq!(notification_text(&state), "Test message sent");
        let opened = opener.opened.lock().clone();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("https://wa.me/919876543210?text=Hello%20from%20KrishiMitra!%20"));

        state.disconnect_messaging();
        assert!(!state.messaging.connected);
        assert!(state.messaging.phone.is_empty());
        assert_eq!(state.form(FormId::PhoneNumber).unwrap().first_value(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_recommendations_load_on_farmer_dashboard() {
        let (mut state, mut rx) = state();
        state.login(Role::Farmer);
        assert!(state.recommendations.loading);

        assert!(timeout(Duration::from_millis(2499), rx.recv()).await.is_err());
        state.handle_event(rx.recv().await.unwrap());
        assert!(!state.recommendations.loading);
        let batch = state.recommendations.batch.as_ref().unwrap();
        assert_eq!(batch.overall_confidence, 91);
        assert_eq!(batch.language, Language::En);

        state.set_language(Language::Hi);
        assert!(state.recommendations.loading);
        state.handle_event(rx.recv().await.unwrap());
        let batch = state.recommendations.batch.as_ref().unwrap();
        assert_eq!(batch.language, Language::Hi);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reselecting_active_tab_keeps_view() {
        let (mut state, mut rx) = state();
        state.login(Role::Farmer);
        state.handle_event(rx.recv().await.unwrap());
        assert!(state.recommendations.batch.is_some());

        state.select_tab(Tab::Dashboard);
        state.select_tab_index(0);
        assert!(!state.recommendations.loading);
        assert!(state.recommendations.batch.is_some());
        assert!(timeout(Duration::from_secs(10), rx.recv()).await.is_err());
    }

    #[tokio::test]
    async fn test_required_field_notification() {
        let (mut state, _rx) = state();
        state.login(Role::ExtensionOfficer);
        state.select_tab(Tab::Alerts);
        state.begin_editing();
        state.submit_form();
        assert_eq!(notification_text(&state), "Please fill in: Alert Message");
        assert_eq!(state.input_mode, InputMode::Editing);

        let form = state.active_form_mut().unwrap();
        form.focus_next();
        for c in "Heavy rain".chars() {
            form.insert_char(c);
        }
        state.submit_form();
        assert_eq!(notification_text(&state), "Regional alert sent");
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.form(FormId::RegionalAlert).unwrap().value_of("ext.alert_message"), Some(""));
    }

    #[test]
    fn test_install_accept_and_dismiss() {
        let (mut state, _rx) = state();
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("applications").join("krishimitra.desktop");

        state.handle_event(AppEvent::InstallAvailable(entry.clone()));
        assert!(state.install_prompt.is_some());
        state.install_app(Path::new("/usr/bin/krishimitra"));
        assert!(state.install_prompt.is_none());
        assert!(entry.exists());
        assert_eq!(notification_text(&state), "App installed");

        state.handle_event(AppEvent::InstallAvailable(entry));
        state.dismiss_install();
        assert!(state.install_prompt.is_none());
    }

    #[test]
    fn test_connectivity_events_drive_banner() {
        let (mut state, _rx) = state();
        state.handle_event(AppEvent::Connectivity(false));
        assert_eq!(state.connectivity.banner, Banner::Offline);
        state.handle_event(AppEvent::Connectivity(true));
        assert!(matches!(state.connectivity.banner, Banner::Restored(_)));
    }

    #[test]
    fn test_notification_expires_on_tick() {
        let (mut state, _rx) = state();
        state.toggle_dark_mode();
        let raised = state.notification.as_ref().unwrap().raised_at;
        state.tick(raised + Duration::from_secs(1));
        assert!(state.notification.is_some());
        state.tick(raised + NOTIFICATION_TTL);
        assert!(state.notification.is_none());
    }
}
