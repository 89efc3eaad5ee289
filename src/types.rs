use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Hi];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Language::En),
            "hi" | "hindi" => Some(Language::Hi),
            _ => None,
        }
    }

    /// Locale tag handed to the speech recognizer.
    pub fn speech_locale(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Hi => "hi-IN",
        }
    }

    /// Short label shown in the header switcher.
    pub fn switcher_label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Hi => "हि",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }
}

/// A pair of literal strings, one per supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub hi: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, hi: &'static str) -> Self {
        Self { en, hi }
    }

    /// Same text in every language (names, figures, places).
    pub const fn same(text: &'static str) -> Self {
        Self { en: text, hi: text }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Hi => self.hi,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Farmer,
    ExtensionOfficer,
    Government,
    Ngo,
    Startup,
    Admin,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Farmer,
        Role::ExtensionOfficer,
        Role::Government,
        Role::Ngo,
        Role::Startup,
        Role::Admin,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::ExtensionOfficer => "extension_officer",
            Role::Government => "government",
            Role::Ngo => "ngo",
            Role::Startup => "startup",
            Role::Admin => "admin",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|role| role.id() == id.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Analysis,
    Community,
    Chatbot,
    Feedback,
    Profile,
    Monitoring,
    Alerts,
    Training,
    Analytics,
    Advisories,
    Impact,
    Programs,
    Resources,
    Integration,
    Testing,
    Users,
    Content,
    System,
}

impl Tab {
    pub fn id(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Analysis => "analysis",
            Tab::Community => "community",
            Tab::Chatbot => "chatbot",
            Tab::Feedback => "feedback",
            Tab::Profile => "profile",
            Tab::Monitoring => "monitoring",
            Tab::Alerts => "alerts",
            Tab::Training => "training",
            Tab::Analytics => "analytics",
            Tab::Advisories => "advisories",
            Tab::Impact => "impact",
            Tab::Programs => "programs",
            Tab::Resources => "resources",
            Tab::Integration => "integration",
            Tab::Testing => "testing",
            Tab::Users => "users",
            Tab::Content => "content",
            Tab::System => "system",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: u32,
    pub display_name: String,
    pub phone_number: String,
    pub role: Role,
    pub location_label: String,
    pub language_preference: Language,
    pub farm_size: String,
    pub crops: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

/// An image picked for analysis, reduced to what the terminal can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    pub path: PathBuf,
    pub file_name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub crop_health_score: u8,
    pub disease_label: String,
    pub confidence_score: u8,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiRecommendation {
    pub id: u32,
    pub category: &'static str,
    pub title: String,
    pub description: String,
    pub confidence: u8,
    pub priority: Priority,
    pub factors: Vec<&'static str>,
    pub expected_outcome: &'static str,
    pub implementation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationBatch {
    pub language: Language,
    pub overall_confidence: u8,
    pub recommendations: Vec<AiRecommendation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
    pub raised_at: Instant,
}

impl Notification {
    pub fn new(level: NotificationLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            raised_at: Instant::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub language: Language,
    pub dark_mode: bool,
    pub demo_role: Option<Role>,
    pub tick_rate_ms: u64,
    pub probe_host: Option<String>,
    pub probe_interval_secs: u64,
    pub voice_demo: bool,
    pub verbose: bool,
}
