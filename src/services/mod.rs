//! Simulated back-end work. Every delayed result is produced by a spawned
//! tokio task that posts an [`AppEvent`] back to the UI; the shell applies
//! it through a single entry point.

pub mod analysis;
pub mod assistant;
pub mod connectivity;
pub mod install;
pub mod messaging;
pub mod recommendation;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::{AbortHandle, JoinHandle};

use crate::types::{AnalysisResult, Language, RecommendationBatch};
use assistant::{SpeechRecognizer, VoiceError};
use messaging::UrlOpener;

pub const ANALYSIS_DELAY: Duration = Duration::from_millis(3000);
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);
pub const RECOMMENDATION_DELAY: Duration = Duration::from_millis(2500);
pub const CONNECT_DELAY: Duration = Duration::from_millis(1000);

/// Generation of a [`TaskScope`]. Events tagged with an old generation are
/// stale and get dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(u64);

/// Owns the abort handles of tasks whose results only make sense while a
/// view (or the session) is alive.
#[derive(Debug, Default)]
pub struct TaskScope {
    generation: u64,
    handles: Vec<AbortHandle>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> ScopeId {
        ScopeId(self.generation)
    }

    pub fn is_current(&self, id: ScopeId) -> bool {
        self.generation == id.0
    }

    pub fn track(&mut self, handle: JoinHandle<()>) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle.abort_handle());
    }

    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    /// Aborts everything still running and moves to a new generation.
    /// Returns how many tasks were cut short.
    pub fn reset(&mut self) -> usize {
        let aborted = self.pending();
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        self.generation += 1;
        aborted
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceEvent {
    Started,
    Transcript(String),
    Failed(String),
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    AnalysisComplete { scope: ScopeId, result: AnalysisResult },
    BotReply { scope: ScopeId, text: String },
    RecommendationsReady { scope: ScopeId, batch: RecommendationBatch },
    MessagingConnected { scope: ScopeId },
    Voice { scope: ScopeId, event: VoiceEvent },
    Connectivity(bool),
    InstallAvailable(PathBuf),
}

/// Handles shared by every view: the event channel plus the host
/// capabilities (speech input, URL opener).
#[derive(Clone)]
pub struct Services {
    tx: UnboundedSender<AppEvent>,
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    opener: Arc<dyn UrlOpener>,
}

impl Services {
    pub fn new(
        tx: UnboundedSender<AppEvent>,
        recognizer: Option<Arc<dyn SpeechRecognizer>>,
        opener: Arc<dyn UrlOpener>,
    ) -> Self {
        Self {
            tx,
            recognizer,
            opener,
        }
    }

    pub fn opener(&self) -> &dyn UrlOpener {
        self.opener.as_ref()
    }

    /// Posts the event built by `make` once `delay` has elapsed, unless the
    /// scope is reset first.
    pub fn schedule<F>(&self, scope: &mut TaskScope, delay: Duration, make: F)
    where
        F: FnOnce(ScopeId) -> AppEvent + Send + 'static,
    {
        let id = scope.id();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(make(id)).is_err() {
                log::debug!("event channel closed before delayed result was delivered");
            }
        });
        scope.track(handle);
    }

    /// Starts one speech capture. Fails straight away when the host has no
    /// recognizer.
    pub fn listen(&self, scope: &mut TaskScope, language: Language) -> Result<(), VoiceError> {
        let recognizer = self.recognizer.clone().ok_or(VoiceError::Unsupported)?;
        let id = scope.id();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let send = |event| {
                let _ = tx.send(AppEvent::Voice { scope: id, event });
            };
            send(VoiceEvent::Started);
            match recognizer.listen(language.speech_locale()).await {
                Ok(text) => send(VoiceEvent::Transcript(text)),
                Err(e) => send(VoiceEvent::Failed(e.to_string())),
            }
            send(VoiceEvent::Ended);
        });
        scope.track(handle);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    use super::messaging::RecordingOpener;
    use super::{AppEvent, Services};
    use crate::services::assistant::SpeechRecognizer;

    pub fn services(
        recognizer: Option<Arc<dyn SpeechRecognizer>>,
    ) -> (Services, UnboundedReceiver<AppEvent>, Arc<RecordingOpener>) {
        let (tx, rx) = unbounded_channel();
        let opener = Arc::new(RecordingOpener::default());
        (Services::new(tx, recognizer, opener.clone()), rx, opener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_schedule_delivers_after_delay() {
        let (services, mut rx, _) = test_support::services(None);
        let mut scope = TaskScope::new();
        services.schedule(&mut scope, REPLY_DELAY, |scope| AppEvent::BotReply {
            scope,
            text: "hi".into(),
        });

        let early = tokio::time::timeout(Duration::from_millis(999), rx.recv()).await;
        assert!(early.is_err());
        let event = rx.recv().await;
        assert_eq!(
            event,
            Some(AppEvent::BotReply { scope: scope.id(), text: "hi".into() })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_aborts_and_bumps_generation() {
        let (services, mut rx, _) = test_support::services(None);
        let mut scope = TaskScope::new();
        let before = scope.id();
        services.schedule(&mut scope, ANALYSIS_DELAY, |scope| AppEvent::MessagingConnected { scope });
        assert_eq!(scope.pending(), 1);

        assert_eq!(scope.reset(), 1);
        assert!(!scope.is_current(before));
        assert_eq!(scope.pending(), 0);

        let late = tokio::time::timeout(ANALYSIS_DELAY * 2, rx.recv()).await;
        assert!(late.is_err());
    }

    #[tokio::test]
    async fn test_listen_without_recognizer_fails() {
        let (services, _rx, _) = test_support::services(None);
        let mut scope = TaskScope::new();
        assert!(matches!(
            services.listen(&mut scope, Language::En),
            Err(VoiceError::Unsupported)
        ));
        assert_eq!(scope.pending(), 0);
    }
}
