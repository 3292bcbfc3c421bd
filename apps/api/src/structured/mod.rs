// Structured extraction: prompt → completion → JSON extraction → schema validation.
// One pipeline for every record type; the record's `RecordSchema` drives it.

pub mod extractor;
pub mod prompt;
pub mod schema;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::llm_client::{CompletionClient, LlmError};
use crate::structured::extractor::{extract_json, ExtractionError};
use crate::structured::schema::{RecordSchema, ValidationError};

/// A record type the pipeline can produce.
pub trait StructuredRecord: DeserializeOwned {
    const SCHEMA: RecordSchema;
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Service(#[from] LlmError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Runs one completion for `prompt` and coerces the output into `T`.
///
/// Single attempt: a failure at any stage fails the whole call.
pub async fn extract_record<T: StructuredRecord>(
    client: &dyn CompletionClient,
    prompt: &str,
    temperature: f32,
) -> Result<T, PipelineError> {
    let raw = client.complete(prompt, temperature).await?;
    debug!(
        "{}: received {} chars of model output",
        T::SCHEMA.title,
        raw.len()
    );
    parse_record(&raw)
}

/// Extraction and validation only. Pure function of the model output.
pub fn parse_record<T: StructuredRecord>(raw: &str) -> Result<T, PipelineError> {
    let value = extract_json(raw)?;
    let normalized = T::SCHEMA.validate(value)?;
    serde_json::from_value(Value::Object(normalized))
        .map_err(|e| ValidationError::Malformed(e.to_string()).into())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{CompletionClient, LlmError};

    /// Completion client that replays a canned reply and records every prompt.
    pub struct FakeCompletionClient {
        reply: Result<String, String>,
        pub calls: Mutex<Vec<(String, f32)>>,
    }

    impl FakeCompletionClient {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn last_prompt(&self) -> Option<String> {
            self.calls.lock().unwrap().last().map(|(p, _)| p.clone())
        }
    }

    #[async_trait]
    impl CompletionClient for FakeCompletionClient {
        async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), temperature));
            self.reply.clone().map_err(|message| LlmError::Api {
                status: 503,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeCompletionClient;
    use super::*;
    use serde::Deserialize;

    use crate::structured::schema::{FieldKind, FieldSpec};

    #[derive(Debug, Deserialize)]
    struct Sample {
        score: f64,
        tags: Vec<String>,
    }

    impl StructuredRecord for Sample {
        const SCHEMA: RecordSchema = RecordSchema {
            title: "Sample",
            fields: &[
                FieldSpec::required("score", FieldKind::Score { min: 0.0, max: 1.0 }, "s"),
                FieldSpec::required("tags", FieldKind::StringList, "t"),
            ],
        };
    }

    #[tokio::test]
    async fn test_extract_record_end_to_end() {
        let client = FakeCompletionClient::replying("Sure:\n{\"score\": 2, \"tags\": [1, \"b\"]}");
        let sample: Sample = extract_record(&client, "prompt", 0.2).await.unwrap();
        assert_eq!(sample.score, 1.0);
        assert_eq!(sample.tags, vec!["1", "b"]);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_service_failure_is_not_retried() {
        let client = FakeCompletionClient::failing("quota exceeded");
        let err = extract_record::<Sample>(&client, "prompt", 0.2)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Service(_)));
        assert!(err.to_string().contains("quota exceeded"));
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn test_parse_record_no_json_is_extraction_error() {
        let err = parse_record::<Sample>("nothing to see").unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Extraction(ExtractionError::NoJsonObject)
        ));
    }

    #[test]
    fn test_parse_record_missing_field_is_validation_error() {
        let err = parse_record::<Sample>("{\"score\": 0.3}").unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Validation(ValidationError::MissingField("tags"))
        ));
    }
}
