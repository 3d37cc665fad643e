//! Engine and collaborator settings

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError, ConfigResult};

/// Top-level settings document
///
/// Every section falls back to its defaults when missing, so an empty file is
/// a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DreamConfig {
    /// Engine behaviour
    pub engine: EngineSettings,
    /// Scene enhancement
    pub enhancement: EnhancementSettings,
    /// Text-generation endpoint
    pub llm: LlmSettings,
    /// Speech-synthesis endpoint
    pub speech: SpeechSettings,
}

impl Config for DreamConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.llm.validate()?;
        self.speech.validate()
    }
}

/// Engine behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

/// Scene enhancement toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancementSettings {
    /// Ask the text generator for extra objects
    pub enabled: bool,
}

impl Default for EnhancementSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// OpenAI-compatible chat-completions endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// API root, without the `/chat/completions` suffix
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Token cap for enhancement replies
    pub enhancement_max_tokens: u32,
    /// Token cap for narration replies
    pub summary_max_tokens: u32,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Request timeout
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.8,
            enhancement_max_tokens: 500,
            summary_max_tokens: 200,
            api_key_env: "GROQ_API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

impl LlmSettings {
    fn validate(&self) -> ConfigResult<()> {
        non_empty("llm.base_url", &self.base_url)?;
        non_empty("llm.model", &self.model)?;
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(invalid("llm.temperature", format!("{} is outside 0..=2", self.temperature)));
        }
        if self.enhancement_max_tokens == 0 {
            return Err(invalid("llm.enhancement_max_tokens", "must be positive"));
        }
        if self.summary_max_tokens == 0 {
            return Err(invalid("llm.summary_max_tokens", "must be positive"));
        }
        Ok(())
    }
}

/// Text-to-speech endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    /// API root, without the `/tts` suffix
    pub base_url: String,
    /// Synthesis model
    pub model: String,
    /// Audio container, e.g. `mp3`
    pub format: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Played when synthesis is unavailable
    pub fallback_audio_url: String,
    /// Request timeout
    pub timeout_secs: u64,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.fish.audio/v1".to_string(),
            model: "s1".to_string(),
            format: "mp3".to_string(),
            temperature: 0.9,
            top_p: 0.9,
            api_key_env: "FISH_AUDIO_API_KEY".to_string(),
            fallback_audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3".to_string(),
            timeout_secs: 60,
        }
    }
}

impl SpeechSettings {
    fn validate(&self) -> ConfigResult<()> {
        non_empty("speech.base_url", &self.base_url)?;
        non_empty("speech.model", &self.model)?;
        non_empty("speech.format", &self.format)?;
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(invalid("speech.temperature", format!("{} is outside 0..=2", self.temperature)));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(invalid("speech.top_p", format!("{} is outside 0..=1", self.top_p)));
        }
        Ok(())
    }
}

fn non_empty(field: &'static str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        Err(invalid(field, "must not be empty"))
    } else {
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.into() }
}
