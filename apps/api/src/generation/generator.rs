//! Curriculum Generation: one request/response exchange with the model.
//!
//! Flow: build prompt → LLM call with response schema → parse → validate.
//!
//! Any failure is final: no retry, no partial document.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::generation::prompts::{CURRICULUM_PROMPT_TEMPLATE, CURRICULUM_SYSTEM};
use crate::generation::schema::{curriculum_schema, SCHEMA_VERSION};
use crate::generation::validation::validate_series;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError, MODEL};
use crate::models::{CurriculumSeries, GenerationRequest};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Reply rejected: {0}")]
    Rejected(String),
}

/// Anything that can turn a request into a curriculum document.
///
/// The live implementation calls Gemini; tests substitute a deterministic fake.
#[async_trait]
pub trait CurriculumGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest)
        -> Result<CurriculumSeries, GenerationError>;
}

/// `CurriculumGenerator` backed by the Gemini `generateContent` API.
pub struct GeminiCurriculumGenerator {
    llm: LlmClient,
    schema: Value,
    system: String,
}

impl GeminiCurriculumGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            schema: curriculum_schema(),
            system: format!("{CURRICULUM_SYSTEM} {JSON_ONLY_INSTRUCTION}"),
        }
    }
}

#[async_trait]
impl CurriculumGenerator for GeminiCurriculumGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<CurriculumSeries, GenerationError> {
        info!(
            "Requesting {}-week series on {:?} for {} (model {}, schema v{})",
            request.duration, request.topic, request.audience, MODEL, SCHEMA_VERSION
        );

        let prompt = build_curriculum_prompt(request);
        let series: CurriculumSeries = self
            .llm
            .call_json(&prompt, &self.system, &self.schema)
            .await?;

        check_reply(series, request.duration)
    }
}

/// Fills the prompt template with the four request fields.
pub fn build_curriculum_prompt(request: &GenerationRequest) -> String {
    let duration = request.duration.to_string();
    fill_template(
        CURRICULUM_PROMPT_TEMPLATE,
        &[
            ("duration", duration.as_str()),
            ("topic", request.topic.as_str()),
            ("audience", request.audience.label()),
            ("tone", request.tone.as_str()),
        ],
    )
}

/// Single left-to-right pass over `template`. Substituted values are never
/// rescanned; unknown `{name}` sequences are kept verbatim.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let value = tail.find('}').and_then(|close| {
            let name = &tail[1..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Runs validation over a parsed reply, logging every gap.
fn check_reply(
    series: CurriculumSeries,
    requested_weeks: u8,
) -> Result<CurriculumSeries, GenerationError> {
    let report = validate_series(&series, requested_weeks);

    if !report.passed {
        return Err(GenerationError::Rejected(
            report.rejection.unwrap_or_default(),
        ));
    }

    for gap in &report.gaps {
        match gap.week_index {
            Some(week) => warn!("Week {week}: {} {}", gap.field, gap.reason),
            None => warn!("Series: {} {}", gap.field, gap.reason),
        }
    }

    info!(
        "Generated series {:?} with {} weeks",
        series.title,
        series.weeks.len()
    );
    Ok(series)
}
