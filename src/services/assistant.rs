use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::Local;
use futures_util::future::BoxFuture;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::types::{ChatTurn, Language, Sender};

const REPLIES_EN: [&str; 4] = [
    "Thank you for your question. I'll help you with that.",
    "The solution to this problem is using organic fertilizers.",
    "Based on weather conditions, you should sow next week.",
    "Please upload a photo of your crop for better recommendations.",
];

const REPLIES_HI: [&str; 4] = [
    "आपकी समस्या के लिए धन्यवाद। मैं आपकी मदद करूंगा।",
    "इस समस्या का समाधान जैविक उर्वरक का उपयोग करना है।",
    "मौसम के अनुसार आपको अगले सप्ताह बुआई करनी चाहिए।",
    "कृपया अपनी फसल की तस्वीर अपलोड करें ताकि मैं बेहतर सुझाव दे सकूं।",
];

pub fn canned_replies(language: Language) -> &'static [&'static str; 4] {
    match language {
        Language::En => &REPLIES_EN,
        Language::Hi => &REPLIES_HI,
    }
}

pub fn pick_reply<R: Rng + ?Sized>(language: Language, rng: &mut R) -> &'static str {
    canned_replies(language)
        .choose(rng)
        .copied()
        .unwrap_or(REPLIES_EN[0])
}

/// Chat transcript in display order.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<ChatTurn>,
    next_id: u64,
}

impl Conversation {
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> &ChatTurn {
        self.next_id += 1;
        self.turns.push(ChatTurn {
            id: self.next_id,
            sender,
            text: text.into(),
            timestamp: Local::now(),
        });
        &self.turns[self.turns.len() - 1]
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("voice recognition not supported")]
    Unsupported,
    #[error("voice recognition failed: {0}")]
    Recognition(String),
}

/// Host speech-to-text capability. One call captures one utterance.
pub trait SpeechRecognizer: Send + Sync {
    fn listen<'a>(&'a self, locale: &'static str) -> BoxFuture<'a, Result<String, VoiceError>>;
}

/// Plays back fixed utterances, for demos without a microphone.
pub struct ScriptedRecognizer {
    delay: Duration,
    cursor: AtomicUsize,
}

const SCRIPT_EN: [&str; 3] = [
    "When should I sow wheat?",
    "How do I protect my crop from pests?",
    "What is the price of rice today?",
];

const SCRIPT_HI: [&str; 3] = [
    "गेहूं की बुआई कब करनी चाहिए?",
    "फसल को कीटों से कैसे बचाएं?",
    "आज चावल का भाव क्या है?",
];

impl ScriptedRecognizer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn listen<'a>(&'a self, locale: &'static str) -> BoxFuture<'a, Result<String, VoiceError>> {
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            let script = match locale {
                "en-US" => &SCRIPT_EN,
                "hi-IN" => &SCRIPT_HI,
                other => return Err(VoiceError::Recognition(format!("unsupported locale {other}"))),
            };
            let index = self.cursor.fetch_add(1, Ordering::Relaxed) % script.len();
            Ok(script[index].to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reply_comes_from_language_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(REPLIES_HI.contains(&pick_reply(Language::Hi, &mut rng)));
            assert!(REPLIES_EN.contains(&pick_reply(Language::En, &mut rng)));
        }
    }

    #[test]
    fn test_conversation_ids_increase() {
        let mut chat = Conversation::default();
        let first = chat.push(Sender::User, "hello").id;
        let second = chat.push(Sender::Bot, "hi").id;
        assert!(second > first);
        assert_eq!(chat.turns().len(), 2);
        chat.clear();
        assert!(chat.turns().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scripted_recognizer_cycles() {
        let recognizer = ScriptedRecognizer::new(Duration::from_millis(1500));
        let first = recognizer.listen("en-US").await.unwrap();
        let second = recognizer.listen("hi-IN").await.unwrap();
        assert_eq!(first, SCRIPT_EN[0]);
        assert_eq!(second, SCRIPT_HI[1]);
        assert!(matches!(
            recognizer.listen("fr-FR").await,
            Err(VoiceError::Recognition(_))
        ));
    }
}
