use std::time::{Duration, Instant};

use tokio::net::TcpStream;
use tokio::sync::mpsc::UnboundedSender;

use super::AppEvent;

/// How long the "connection restored" banner stays up.
pub const RESTORED_VISIBLE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Banner {
    #[default]
    Hidden,
    Offline,
    Restored(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityState {
    pub online: bool,
    pub banner: Banner,
}

impl Default for ConnectivityState {
    fn default() -> Self {
        Self {
            online: true,
            banner: Banner::Hidden,
        }
    }
}

impl ConnectivityState {
    /// Applies a probe result. Returns `true` when the state changed.
    pub fn apply(&mut self, online: bool, now: Instant) -> bool {
        if online == self.online {
            return false;
        }
        self.online = online;
        self.banner = if online {
            Banner::Restored(now)
        } else {
            Banner::Offline
        };
        true
    }

    pub fn tick(&mut self, now: Instant) {
        if let Banner::Restored(since) = self.banner {
            if now.saturating_duration_since(since) >= RESTORED_VISIBLE {
                self.banner = Banner::Hidden;
            }
        }
    }
}

pub async fn probe(host: &str, timeout: Duration) -> bool {
    matches!(
        tokio::time::timeout(timeout, TcpStream::connect(host)).await,
        Ok(Ok(_))
    )
}

/// Probes `host` every `interval` and reports transitions only. The first
/// report is sent when the initial probe finds the network down.
pub async fn probe_loop(
    host: String,
    interval: Duration,
    timeout: Duration,
    tx: UnboundedSender<AppEvent>,
) {
    let mut ticker = tokio::time::interval(interval);
    let mut last = true;

    loop {
        ticker.tick().await;
        let online = probe(&host, timeout).await;
        if online == last {
            continue;
        }
        last = online;
        log::info!("connectivity changed: {}", if online { "online" } else { "offline" });
        if tx.send(AppEvent::Connectivity(online)).is_err() {
            log::debug!("connectivity probe stopping, receiver gone");
            return;
        }
    }
}
