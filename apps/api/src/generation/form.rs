//! Parameter collector: the form state behind a generation request.
//!
//! Duration is clamped whenever it is adjusted or supplied; `submit` only
//! checks the topic.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Audience, GenerationRequest};

pub const MIN_DURATION: u8 = 1;
pub const MAX_DURATION: u8 = 12;
pub const DEFAULT_DURATION: u8 = 4;
pub const DEFAULT_TONE: &str = "Conversational & Deep";

pub const PRESET_TOPICS: &[&str] = &[
    "The Parables of Jesus",
    "Identity in Christ",
    "The Book of James",
    "Friendship & Dating",
    "Prayer & Spiritual Habits",
];

/// Clamps any integer to the allowed series length.
pub fn clamp_duration(value: i64) -> u8 {
    value.clamp(MIN_DURATION as i64, MAX_DURATION as i64) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationStep {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorForm {
    pub topic: String,
    pub audience: Audience,
    pub duration: u8,
    pub tone: String,
}

impl Default for GeneratorForm {
    fn default() -> Self {
        Self {
            topic: String::new(),
            audience: Audience::default(),
            duration: DEFAULT_DURATION,
            tone: DEFAULT_TONE.to_string(),
        }
    }
}

/// Raw submission body. Fields left out fall back to the form defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorParams {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub audience: Audience,
    #[serde(default = "default_duration")]
    pub duration: i64,
    #[serde(default = "default_tone")]
    pub tone: String,
    /// A preset label; when it names one of `PRESET_TOPICS` it replaces `topic`.
    #[serde(default)]
    pub preset: Option<String>,
}

fn default_duration() -> i64 {
    DEFAULT_DURATION as i64
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

impl From<GeneratorParams> for GeneratorForm {
    fn from(params: GeneratorParams) -> Self {
        let mut form = Self {
            topic: params.topic,
            audience: params.audience,
            duration: clamp_duration(params.duration),
            tone: params.tone,
        };
        if let Some(preset) = params.preset.as_deref() {
            if PRESET_TOPICS.contains(&preset) {
                form.choose_preset(preset);
            }
        }
        form
    }
}

impl GeneratorForm {
    pub fn increment_duration(&mut self) {
        self.duration = clamp_duration(self.duration as i64 + 1);
    }

    pub fn decrement_duration(&mut self) {
        self.duration = clamp_duration(self.duration as i64 - 1);
    }

    pub fn adjust_duration(&mut self, step: DurationStep) {
        match step {
            DurationStep::Increment => self.increment_duration(),
            DurationStep::Decrement => self.decrement_duration(),
        }
    }

    pub fn choose_preset(&mut self, preset: &str) {
        self.topic = preset.to_string();
    }

    /// Produces the immutable request. Blocks only on an empty topic.
    pub fn submit(self) -> Result<GenerationRequest, AppError> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(AppError::Validation("topic cannot be empty".to_string()));
        }

        Ok(GenerationRequest {
            topic: topic.to_string(),
            audience: self.audience,
            duration: self.duration,
            tone: self.tone,
        })
    }
}
