//! External collaborators
//!
//! The engine talks to two remote services: a text generator (scene
//! enhancement and narration) and a speech synthesizer (narration audio).
//! Both sit behind traits so the pipeline can run against in-memory fakes, and
//! both are optional: a missing API key just means the collaborator is absent.

use std::future::Future;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

pub mod groq;
pub mod narration;
pub mod speech;

pub use groq::GroqClient;
pub use narration::NarrationService;
pub use speech::{FishAudioClient, SpeechService};

/// Collaborator failures
#[derive(thiserror::Error, Debug)]
pub enum CollaboratorError {
    /// Transport or decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the remote service
    #[error("{service} returned status {status}: {body}")]
    Status {
        /// Which service answered
        service: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// Successful call with nothing usable in it
    #[error("{0} returned an empty response")]
    EmptyResponse(&'static str),

    /// The API key environment variable is unset or blank
    #[error("API key variable '{0}' is not set")]
    MissingApiKey(String),
}

/// Result type for collaborator calls
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Free-form text generation
pub trait TextGenerator {
    /// Send one prompt, receive the generated reply
    fn generate_text(&self, prompt: &str) -> impl Future<Output = CollaboratorResult<String>> + Send;
}

/// Text-to-speech synthesis
pub trait SpeechSynthesizer {
    /// Render `text` as audio, optionally in a specific voice
    fn synthesize_speech(
        &self,
        text: &str,
        voice_id: Option<&str>,
    ) -> impl Future<Output = CollaboratorResult<AudioReference>> + Send;

    /// Voices the synthesizer offers
    fn list_voices(&self) -> impl Future<Output = CollaboratorResult<Vec<Voice>>> + Send;
}

/// Where narration audio can be fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioReference {
    /// Hosted audio
    Url(String),
    /// Raw audio returned inline by the synthesizer
    Inline {
        /// MIME type, e.g. `audio/mp3`
        content_type: String,
        /// Encoded audio
        bytes: Vec<u8>,
    },
}

impl AudioReference {
    /// URL a player can load; inline audio becomes a base64 `data:` URL
    pub fn to_url(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Inline { content_type, bytes } => {
                format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
            }
        }
    }
}

/// A synthesizer voice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Identifier passed back as `voice_id`
    pub id: String,
    /// Display name
    pub name: String,
    /// BCP 47 language tag
    pub language: String,
}

impl Voice {
    fn new(id: &str, name: &str, language: &str) -> Self {
        Self { id: id.to_string(), name: name.to_string(), language: language.to_string() }
    }
}

/// Read an API key from the named environment variable
pub fn api_key_from_env(var: &str) -> CollaboratorResult<String> {
    match std::env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(CollaboratorError::MissingApiKey(var.to_string())),
    }
}

/// Keep error bodies log-sized
pub(crate) fn truncate_body(body: &str) -> String {
    const LIMIT: usize = 200;
    match body.char_indices().nth(LIMIT) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_audio_becomes_data_url() {
        let audio = AudioReference::Inline { content_type: "audio/mp3".to_string(), bytes: b"dream".to_vec() };
        assert_eq!(audio.to_url(), "data:audio/mp3;base64,ZHJlYW0=");
    }

    #[test]
    fn test_hosted_audio_passes_through() {
        let audio = AudioReference::Url("https://example.com/a.mp3".to_string());
        assert_eq!(audio.to_url(), "https://example.com/a.mp3");
    }

    #[test]
    fn test_missing_api_key() {
        let err = api_key_from_env("DREAM_ENGINE_TEST_UNSET_KEY").unwrap_err();
        assert!(matches!(err, CollaboratorError::MissingApiKey(ref var) if var == "DREAM_ENGINE_TEST_UNSET_KEY"));
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");
        let long = "x".repeat(300);
        assert_eq!(truncate_body(&long).len(), 203);
    }
}
