//! # Telemetry Record Types
//!
//! Strongly-typed trace and metrics records mirroring the shape an LLM
//! observability pipeline ingests. Records are plain serde data: constructed
//! fresh per call, consumed by the caller, and never persisted by this crate.
//!
//! ## Core Components
//!
//! - **[`TraceRecord`]**: one recorded LLM call with identifiers, generation
//!   parameters, token usage, derived cost, latency, and outcome.
//! - **[`TokenUsage`]**: token accounting for a single generation; the total
//!   is always the sum of input and output tokens when built through
//!   [`TokenUsage::new`].
//! - **[`MetricsRecord`]**: a point-in-time counter/histogram snapshot with
//!   model/provider/environment labels.
//!
//! Structural validation happens on the JSON form (see the `validator`
//! module); [`TraceRecord::to_value`] and [`MetricsRecord::to_value`] bridge
//! the typed records into it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Token accounting for a single generation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUsage {
    /// The number of tokens in the input prompt.
    pub input_tokens: u32,

    /// The number of tokens in the generated completion.
    pub output_tokens: u32,

    /// The total number of tokens (input + output).
    pub total_tokens: u32,
}

impl TokenUsage {
    /// Creates a new `TokenUsage` from the input and output token counts.
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }
}

/// Generation request parameters recorded as trace metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    pub user_type: String,
    pub environment: String,
}

/// Outcome of a traced call.
///
/// The generator only ever emits `Success` or `Error`; `Pending` exists
/// because in-flight traces from a live pipeline carry it and the validator
/// accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceStatus {
    Success,
    Error,
    Pending,
}

/// Provider failure details attached to a trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Error class name, e.g. `RateLimitError`.
    pub error_type: String,
    /// Human-readable message.
    pub error_message: String,
    /// HTTP-like status code in `[400, 599]`.
    pub error_code: u16,
    /// Seconds to wait before retrying; only rate-limit errors carry one.
    pub retry_after: Option<u32>,
}

/// A recorded unit of work: one LLM call with timing, cost, and outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraceRecord {
    /// Unique identifier, `trace_<16 lowercase-alnum chars>`.
    pub id: String,
    /// Derived as `<model>_generation`.
    pub name: String,
    pub user_id: String,
    pub session_id: String,
    pub model: String,
    pub provider: String,
    pub metadata: GenerationParams,
    pub input: String,
    pub output: String,
    pub usage: TokenUsage,
    /// Dollar cost derived from the per-model pricing table, rounded to six
    /// decimals.
    pub cost: f64,
    pub latency_ms: u32,
    /// Epoch seconds.
    pub timestamp: f64,
    pub status: TraceStatus,
    pub error: Option<ErrorDetail>,
}

impl TraceRecord {
    /// Converts the record into its JSON form for structural validation.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Request duration histogram with named upper-bound buckets.
///
/// Bucket counts are independently randomized by the generator and are NOT
/// guaranteed to be cumulative or monotonic across buckets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DurationHistogram {
    pub count: u32,
    pub sum: f64,
    /// Keyed by upper bound: "0.1", "0.5", "1.0", "2.0", "5.0", "+Inf".
    pub buckets: BTreeMap<String, u32>,
}

/// Input/output token counters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenTotals {
    pub input: u64,
    pub output: u64,
}

/// The counter and histogram set of one metrics scrape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsSnapshot {
    pub llm_requests_total: u32,
    pub llm_request_duration_seconds: DurationHistogram,
    pub llm_tokens_total: TokenTotals,
    pub llm_cost_total: f64,
    pub llm_errors_total: u32,
    pub llm_cache_hits_total: u32,
    pub llm_cache_misses_total: u32,
}

/// Dimension labels attached to a metrics snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricsLabels {
    pub model: String,
    pub provider: String,
    pub environment: String,
}

/// A point-in-time metrics snapshot with labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsRecord {
    /// Epoch seconds.
    pub timestamp: f64,
    pub metrics: MetricsSnapshot,
    pub labels: MetricsLabels,
}

impl MetricsRecord {
    /// Converts the record into its JSON form for structural validation.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_usage_total() {
        let usage = TokenUsage::new(100, 50);
        assert_eq!(usage.input_tokens, 100);
        assert_eq!(usage.output_tokens, 50);
        assert_eq!(usage.total_tokens, 150);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(TraceStatus::Success).unwrap(),
            serde_json::json!("success")
        );
        assert_eq!(
            serde_json::to_value(TraceStatus::Pending).unwrap(),
            serde_json::json!("pending")
        );
    }

    #[test]
    fn test_trace_record_serialization_round_trip() {
        let record = TraceRecord {
            id: "trace_ab12cd34ef56gh78".to_string(),
            name: "gpt-4_generation".to_string(),
            user_id: "user_a1b2c3d4".to_string(),
            session_id: "session_abcdefghij".to_string(),
            model: "gpt-4".to_string(),
            provider: "openai".to_string(),
            metadata: GenerationParams {
                temperature: 0.7,
                max_tokens: 256,
                top_p: 0.9,
                frequency_penalty: 0.0,
                presence_penalty: 0.0,
                user_type: "developer".to_string(),
                environment: "development".to_string(),
            },
            input: "What is the weather like today?".to_string(),
            output: "I don't have access to real-time weather data.".to_string(),
            usage: TokenUsage::new(8, 12),
            cost: 0.001,
            latency_ms: 1250,
            timestamp: 1_738_060_200.0,
            status: TraceStatus::Success,
            error: None,
        };

        let serialized = serde_json::to_string(&record).unwrap();
        let deserialized: TraceRecord = serde_json::from_str(&serialized).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_trace_to_value_exposes_required_fields() {
        let record = TraceRecord {
            id: "trace_0000000000000000".to_string(),
            name: "mistral-7b_generation".to_string(),
            user_id: "user_00000000".to_string(),
            session_id: "session_aaaaaaaaaa".to_string(),
            model: "mistral-7b".to_string(),
            provider: "together".to_string(),
            metadata: GenerationParams {
                temperature: 0.2,
                max_tokens: 512,
                top_p: 1.0,
                frequency_penalty: 1.0,
                presence_penalty: 0.5,
                user_type: "analyst".to_string(),
                environment: "staging".to_string(),
            },
            input: "prompt".to_string(),
            output: "response".to_string(),
            usage: TokenUsage::new(10, 20),
            cost: 0.0,
            latency_ms: 500,
            timestamp: 1.0,
            status: TraceStatus::Error,
            error: Some(ErrorDetail {
                error_type: "RateLimitError".to_string(),
                error_message: "API rate limit exceeded".to_string(),
                error_code: 429,
                retry_after: Some(30),
            }),
        };

        let value = record.to_value().unwrap();
        for field in ["id", "name", "timestamp", "status"] {
            assert!(value.get(field).is_some(), "missing {field}");
        }
        assert_eq!(value["status"], "error");
        assert_eq!(value["usage"]["total_tokens"], 30);
        assert_eq!(value["error"]["retry_after"], 30);
    }
}
