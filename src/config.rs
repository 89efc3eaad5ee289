use std::time::Duration;

use clap::Parser;

use crate::types::{AppConfig, Language, Role};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "krishimitra")]
#[command(about = "Smart farming assistant dashboards for every role")]
pub struct Cli {
    /// Interface language (en or hi)
    #[arg(short, long, default_value = "en")]
    pub lang: String,

    /// Start in dark mode
    #[arg(short, long, default_value_t = false)]
    pub dark: bool,

    /// Skip the landing page and log in as this role (farmer, extension_officer, government, ngo, startup, admin)
    #[arg(long)]
    pub role: Option<String>,

    /// UI refresh rate in milliseconds
    #[arg(short, long, default_value_t = 50)]
    pub tick: u64,

    /// Host probed to decide whether we are online
    #[arg(long, default_value = "1.1.1.1:53")]
    pub probe_host: String,

    /// Seconds between connectivity probes
    #[arg(long, default_value_t = 10)]
    pub probe_interval: u64,

    /// Disable the connectivity probe
    #[arg(long, default_value_t = false)]
    pub no_probe: bool,

    /// Use a scripted speech recognizer for the voice assistant
    #[arg(long, default_value_t = false)]
    pub voice_demo: bool,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl TryFrom<Cli> for AppConfig {
    type Error = crate::AppError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let language = Language::from_code(&cli.lang).ok_or_else(|| {
            crate::AppError::Config(format!("unsupported language '{}'", cli.lang))
        })?;

        let demo_role = match cli.role.as_deref() {
            Some(id) => Some(
                Role::from_id(id)
                    .ok_or_else(|| crate::AppError::Config(format!("unknown role '{}'", id)))?,
            ),
            None => None,
        };

        Ok(Self {
            language,
            dark_mode: cli.dark,
            demo_role,
            tick_rate_ms: cli.tick.clamp(16, 1000),
            probe_host: if cli.no_probe { None } else { Some(cli.probe_host) },
            probe_interval_secs: cli.probe_interval.clamp(2, 300),
            voice_demo: cli.voice_demo,
            verbose: cli.verbose,
        })
    }
}

impl AppConfig {
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn probe_interval(&self) -> Duration {
        Duration::from_secs(self.probe_interval_secs)
    }

    /// Probes give up after half an interval so a slow network never stacks them.
    pub fn probe_timeout(&self) -> Duration {
        self.probe_interval() / 2
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            dark_mode: false,
            demo_role: None,
            tick_rate_ms: 50,
            probe_host: None,
            probe_interval_secs: 10,
            voice_demo: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, crate::AppError> {
        let mut argv = vec!["krishimitra"];
        argv.extend_from_slice(args);
        AppConfig::try_from(Cli::parse_from(argv))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.language, Language::En);
        assert!(!config.dark_mode);
        assert_eq!(config.demo_role, None);
        assert_eq!(config.probe_host.as_deref(), Some("1.1.1.1:53"));
    }

    #[test]
    fn test_role_and_language() {
        let config = parse(&["--lang", "hi", "--role", "admin", "--dark"]).unwrap();
        assert_eq!(config.language, Language::Hi);
        assert_eq!(config.demo_role, Some(Role::Admin));
        assert!(config.dark_mode);
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(parse(&["--lang", "fr"]).is_err());
        assert!(parse(&["--role", "wizard"]).is_err());
    }

    #[test]
    fn test_clamping() {
        let config = parse(&["--tick", "1", "--probe-interval", "100000", "--no-probe"]).unwrap();
        assert_eq!(config.tick_rate_ms, 16);
        assert_eq!(config.probe_interval_secs, 300);
        assert!(config.probe_host.is_none());
    }
}
