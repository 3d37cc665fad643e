//! Text-to-speech narration audio (Fish Audio by default)

use std::time::Duration;

use serde::Serialize;

use super::{
    api_key_from_env, truncate_body, AudioReference, CollaboratorError, CollaboratorResult, SpeechSynthesizer,
    Voice,
};
use crate::config::SpeechSettings;

const SERVICE: &str = "speech synthesis";

/// HTTP speech synthesizer
#[derive(Debug, Clone)]
pub struct FishAudioClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    format: String,
    temperature: f32,
    top_p: f32,
}

#[derive(Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    temperature: f32,
    top_p: f32,
    format: &'a str,
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_id: Option<&'a str>,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum VoiceListing {
    Wrapped { voices: Vec<Voice> },
    Bare(Vec<Voice>),
}

impl FishAudioClient {
    /// Build a client from settings, reading the key from `settings.api_key_env`
    pub fn from_settings(settings: &SpeechSettings) -> CollaboratorResult<Self> {
        let api_key = api_key_from_env(&settings.api_key_env)?;
        Self::new(settings, api_key)
    }

    /// Build a client with an explicit key
    pub fn new(settings: &SpeechSettings, api_key: impl Into<String>) -> CollaboratorResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: settings.model.clone(),
            format: settings.format.clone(),
            temperature: settings.temperature,
            top_p: settings.top_p,
        })
    }

    fn request<'a>(&'a self, text: &'a str, voice_id: Option<&'a str>) -> TtsRequest<'a> {
        TtsRequest {
            text,
            temperature: self.temperature,
            top_p: self.top_p,
            format: &self.format,
            model: &self.model,
            reference_id: voice_id,
        }
    }

    async fn check(response: reqwest::Response) -> CollaboratorResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(CollaboratorError::Status { service: SERVICE, status: status.as_u16(), body: truncate_body(&body) })
    }
}

impl SpeechSynthesizer for FishAudioClient {
    async fn synthesize_speech(&self, text: &str, voice_id: Option<&str>) -> CollaboratorResult<AudioReference> {
        log::debug!("Speech request: {} chars, voice={:?}", text.len(), voice_id);

        let response = self
            .http
            .post(format!("{}/tts", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&self.request(text, voice_id))
            .send()
            .await?;
        let bytes = Self::check(response).await?.bytes().await?;

        if bytes.is_empty() {
            return Err(CollaboratorError::EmptyResponse(SERVICE));
        }
        Ok(AudioReference::Inline { content_type: format!("audio/{}", self.format), bytes: bytes.to_vec() })
    }

    async fn list_voices(&self) -> CollaboratorResult<Vec<Voice>> {
        let response = self
            .http
            .get(format!("{}/voices", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let listing: VoiceListing = Self::check(response).await?.json().await?;

        Ok(match listing {
            VoiceListing::Wrapped { voices } | VoiceListing::Bare(voices) => voices,
        })
    }
}

/// Narration audio with a fallback track
///
/// Never fails: without a synthesizer, or when synthesis fails, the configured
/// fallback URL is returned instead.
pub struct SpeechService<S> {
    synthesizer: Option<S>,
    fallback_url: String,
}

impl<S: SpeechSynthesizer> SpeechService<S> {
    /// Wrap an optional synthesizer
    pub fn new(synthesizer: Option<S>, fallback_url: impl Into<String>) -> Self {
        Self { synthesizer, fallback_url: fallback_url.into() }
    }

    /// Whether a synthesizer is attached
    pub fn is_live(&self) -> bool {
        self.synthesizer.is_some()
    }

    /// URL of the narration audio for `text`
    pub async fn narrate(&self, text: &str, voice_id: Option<&str>) -> String {
        let Some(synthesizer) = &self.synthesizer else {
            return self.fallback_url.clone();
        };

        match synthesizer.synthesize_speech(text, voice_id).await {
            Ok(audio) => audio.to_url(),
            Err(e) => {
                log::warn!("Speech synthesis failed, using fallback audio: {}", e);
                self.fallback_url.clone()
            }
        }
    }

    /// Available voices, or a small built-in list when the synthesizer is unavailable
    pub async fn voices(&self) -> Vec<Voice> {
        if let Some(synthesizer) = &self.synthesizer {
            match synthesizer.list_voices().await {
                Ok(voices) => return voices,
                Err(e) => log::warn!("Voice listing failed, using built-in voices: {}", e),
            }
        }
        fallback_voices()
    }
}

fn fallback_voices() -> Vec<Voice> {
    vec![
        Voice::new("default", "Default Voice", "en-US"),
        Voice::new("dreamy", "Dreamy Narrator", "en-US"),
        Voice::new("ethereal", "Ethereal Voice", "en-US"),
    ]
}
