//! End-to-end dream processing
//!
//! ```text
//! description ─► classify ─► generate ─► (enhance) ─► SceneConfig
//!            └─► narrate ─► speak ─────────────────► summary + audio URL
//! ```

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DreamConfig;
use crate::enhance;
use crate::error::{DreamError, DreamResult};
use crate::scene::{SceneConfig, SceneLibrary, ThemeCategory};
use crate::services::{
    FishAudioClient, GroqClient, NarrationService, SpeechService, SpeechSynthesizer, TextGenerator, Voice,
};

/// Everything a client needs to show and narrate one dream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamProcessResponse {
    /// Classified theme
    pub theme: ThemeCategory,
    /// Scene to render
    pub scene_config: SceneConfig,
    /// Poetic narration text
    pub summary: String,
    /// Narration audio, hosted or inline `data:` URL
    pub narration_url: String,
    /// RFC 3339 creation time (UTC)
    pub timestamp: String,
}

/// Classify, generate, enhance, narrate and speak
///
/// Every collaborator is optional. Without them the pipeline still produces a
/// complete scene, the fallback narration and the fallback audio URL.
pub struct DreamPipeline<G, S> {
    enhancer: Option<G>,
    narration: NarrationService<G>,
    speech: SpeechService<S>,
    enhancement_enabled: bool,
    voice_id: Option<String>,
}

impl<G: TextGenerator, S: SpeechSynthesizer> DreamPipeline<G, S> {
    /// Assemble a pipeline from its parts
    pub fn new(enhancer: Option<G>, narration: NarrationService<G>, speech: SpeechService<S>) -> Self {
        Self {
            enhancer,
            narration,
            speech,
            enhancement_enabled: true,
            voice_id: None,
        }
    }

    /// Turn scene enhancement on or off
    pub fn with_enhancement(mut self, enabled: bool) -> Self {
        self.enhancement_enabled = enabled;
        self
    }

    /// Narrate in a specific synthesizer voice
    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = Some(voice_id.into());
        self
    }

    /// Scene for `description`, enhanced when a generator is available
    pub async fn generate_scene_config(&self, description: &str) -> DreamResult<(ThemeCategory, SceneConfig)> {
        let description = require_description(description)?;
        let (theme, scene) = SceneLibrary::classify_and_generate(description);
        log::info!("Generated {} base objects for {} scene", scene.objects.len(), theme);

        let scene = match (&self.enhancer, self.enhancement_enabled) {
            (Some(generator), true) => enhance::enhance(scene, theme, description, generator).await,
            _ => scene,
        };
        Ok((theme, scene))
    }

    /// Scene, narration and narration audio for `description`
    pub async fn process(&self, description: &str) -> DreamResult<DreamProcessResponse> {
        let description = require_description(description)?;
        log::info!("Processing dream: {}", preview(description));

        let (theme, scene_config) = self.generate_scene_config(description).await?;
        let summary = self.narration.generate_poetic_summary(description).await;
        log::info!("Narration ready ({} chars)", summary.len());
        let narration_url = self.speech.narrate(&summary, self.voice_id.as_deref()).await;

        Ok(DreamProcessResponse {
            theme,
            scene_config,
            summary,
            narration_url,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    /// Voices available for narration
    pub async fn voices(&self) -> Vec<Voice> {
        self.speech.voices().await
    }
}

impl DreamPipeline<GroqClient, FishAudioClient> {
    /// Pipeline backed by the HTTP collaborators named in `config`
    ///
    /// A collaborator whose API key is missing is left out and its step falls
    /// back, so this never fails.
    pub fn from_config(config: &DreamConfig) -> Self {
        let llm = &config.llm;
        let enhancer = GroqClient::from_settings(llm, llm.enhancement_max_tokens)
            .map_err(|e| log::warn!("Text generation unavailable, using fallbacks: {}", e))
            .ok();
        let narrator = enhancer.clone().map(|client| client.with_max_tokens(llm.summary_max_tokens));
        let synthesizer = FishAudioClient::from_settings(&config.speech)
            .map_err(|e| log::warn!("Speech synthesis unavailable, using fallback audio: {}", e))
            .ok();

        Self::new(
            enhancer,
            NarrationService::new(narrator),
            SpeechService::new(synthesizer, config.speech.fallback_audio_url.clone()),
        )
        .with_enhancement(config.enhancement.enabled)
    }

    /// Pipeline with no collaborators at all
    pub fn offline(config: &DreamConfig) -> Self {
        Self::new(
            None,
            NarrationService::new(None),
            SpeechService::new(None, config.speech.fallback_audio_url.clone()),
        )
    }
}

fn require_description(description: &str) -> DreamResult<&str> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        Err(DreamError::EmptyDescription)
    } else {
        Ok(trimmed)
    }
}

fn preview(description: &str) -> String {
    const PREVIEW_CHARS: usize = 80;
    let mut shown: String = description.chars().take(PREVIEW_CHARS).collect();
    if description.chars().nth(PREVIEW_CHARS).is_some() {
        shown.push_str("...");
    }
    shown
}
