//! # Synthetic Telemetry Generation
//!
//! Produces randomized trace and metrics records whose fields are internally
//! consistent: token totals sum, cost follows the per-model pricing table,
//! and error payloads line up with the configured status policy. Records are
//! meant to seed observability test suites, so the generator also supports
//! deliberately *breaking* consistency through typed overrides.
//!
//! ## Core Components
//!
//! - **[`TelemetryGenerator`]**: owns the RNG and produces records. Use
//!   [`TelemetryGenerator::new`] for entropy seeding (each run differs) or
//!   [`TelemetryGenerator::with_seed`] for reproducible fixtures.
//! - **[`GeneratorConfig`]**: bounds for token counts and latency, the error
//!   rate, and the status/error coupling policy.
//! - **[`TraceOverrides`]**: per-field overrides merged over a fully built
//!   base record. Overrides win unconditionally and are applied after every
//!   derived field is computed, so an override can intentionally violate
//!   internal consistency (useful for negative-path validator tests).
//!
//! ### Example: a fixed-id trace
//!
//! ```rust
//! use telemetry_fixtures::{TelemetryGenerator, TraceOverrides};
//!
//! let mut gen = TelemetryGenerator::with_seed(7);
//! let trace = gen.generate_trace_with(TraceOverrides {
//!     id: Some("fixed-id".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(trace.id, "fixed-id");
//! assert_eq!(
//!     trace.usage.total_tokens,
//!     trace.usage.input_tokens + trace.usage.output_tokens
//! );
//! ```

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::catalog::{
    model_cost, ENVIRONMENTS, ERROR_ARCHETYPES, MAX_TOKENS_CHOICES, MODELS, PROMPTS, PROVIDERS,
    RESPONSES, USER_TYPES,
};
use crate::record::{
    DurationHistogram, ErrorDetail, GenerationParams, MetricsLabels, MetricsRecord,
    MetricsSnapshot, TokenTotals, TokenUsage, TraceRecord, TraceStatus,
};

const ALNUM: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Bounds and policies for record generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub min_input_tokens: u32,
    pub max_input_tokens: u32,
    pub min_output_tokens: u32,
    pub max_output_tokens: u32,
    pub min_latency_ms: u32,
    pub max_latency_ms: u32,
    /// Probability that a trace reports `status: error` (and, independently
    /// sampled when uncoupled, that it carries an error payload).
    pub error_rate: f64,
    /// When true, the error payload is present exactly when the status is
    /// `error`. When false, payload presence is sampled independently of
    /// status, reproducing pipelines where the two fields drift apart.
    pub couple_error_to_status: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_input_tokens: 10,
            max_input_tokens: 500,
            min_output_tokens: 20,
            max_output_tokens: 800,
            min_latency_ms: 500,
            max_latency_ms: 5000,
            error_rate: 0.05,
            couple_error_to_status: true,
        }
    }
}

/// Per-field overrides merged over a generated trace, last write wins.
///
/// `error` is doubly optional: `None` keeps the generated value, `Some(None)`
/// forces the payload absent, `Some(Some(..))` replaces it.
#[derive(Debug, Clone, Default)]
pub struct TraceOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    pub model: Option<String>,
    pub provider: Option<String>,
    pub metadata: Option<GenerationParams>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub usage: Option<TokenUsage>,
    pub cost: Option<f64>,
    pub latency_ms: Option<u32>,
    pub timestamp: Option<f64>,
    pub status: Option<TraceStatus>,
    pub error: Option<Option<ErrorDetail>>,
}

impl TraceOverrides {
    /// Merges the overrides over a fully built base record.
    ///
    /// Derived fields (cost, token totals) in `base` are already computed, so
    /// replacing one side of a derivation here intentionally leaves the other
    /// untouched.
    pub fn apply(self, base: TraceRecord) -> TraceRecord {
        TraceRecord {
            id: self.id.unwrap_or(base.id),
            name: self.name.unwrap_or(base.name),
            user_id: self.user_id.unwrap_or(base.user_id),
            session_id: self.session_id.unwrap_or(base.session_id),
            model: self.model.unwrap_or(base.model),
            provider: self.provider.unwrap_or(base.provider),
            metadata: self.metadata.unwrap_or(base.metadata),
            input: self.input.unwrap_or(base.input),
            output: self.output.unwrap_or(base.output),
            usage: self.usage.unwrap_or(base.usage),
            cost: self.cost.unwrap_or(base.cost),
            latency_ms: self.latency_ms.unwrap_or(base.latency_ms),
            timestamp: self.timestamp.unwrap_or(base.timestamp),
            status: self.status.unwrap_or(base.status),
            error: self.error.unwrap_or(base.error),
        }
    }
}

/// Produces synthetic trace and metrics records.
///
/// Generation is synchronous and side-effect free apart from RNG state
/// advancement; every record is constructed fresh per call.
pub struct TelemetryGenerator {
    rng: StdRng,
    config: GeneratorConfig,
}

impl TelemetryGenerator {
    /// Creates a generator seeded from OS entropy; each run differs.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy(), GeneratorConfig::default())
    }

    /// Creates a deterministic generator for reproducible fixtures.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), GeneratorConfig::default())
    }

    /// Creates a generator with explicit bounds and policies.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self::from_rng(StdRng::from_entropy(), config)
    }

    /// Creates a deterministic generator with explicit bounds and policies.
    pub fn with_seed_and_config(seed: u64, config: GeneratorConfig) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), config)
    }

    fn from_rng(rng: StdRng, config: GeneratorConfig) -> Self {
        Self { rng, config }
    }

    /// Generates a trace identifier: `trace_<16 lowercase-alnum chars>`.
    pub fn trace_id(&mut self) -> String {
        format!("trace_{}", self.suffix(ALNUM, 16))
    }

    /// Generates a user identifier: `user_<8 lowercase-alnum chars>`.
    pub fn user_id(&mut self) -> String {
        format!("user_{}", self.suffix(ALNUM, 8))
    }

    /// Generates a session identifier: `session_<10 lowercase chars>`.
    pub fn session_id(&mut self) -> String {
        format!("session_{}", self.suffix(LOWERCASE, 10))
    }

    fn suffix(&mut self, charset: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| charset[self.rng.gen_range(0..charset.len())] as char)
            .collect()
    }

    /// Generates a fully populated trace record.
    ///
    /// Token totals, cost, and the status/error relationship are internally
    /// consistent per the generator's config.
    pub fn generate_trace(&mut self) -> TraceRecord {
        let model = *MODELS.choose(&mut self.rng).unwrap();
        let provider = *PROVIDERS.choose(&mut self.rng).unwrap();

        let usage = TokenUsage::new(
            self.rng
                .gen_range(self.config.min_input_tokens..=self.config.max_input_tokens),
            self.rng
                .gen_range(self.config.min_output_tokens..=self.config.max_output_tokens),
        );

        let pricing = model_cost(model);
        let cost = (f64::from(usage.input_tokens) * pricing.input_per_1k
            + f64::from(usage.output_tokens) * pricing.output_per_1k)
            / 1000.0;

        let status = if self.rng.gen_bool(self.config.error_rate) {
            TraceStatus::Error
        } else {
            TraceStatus::Success
        };
        let error = if self.config.couple_error_to_status {
            match status {
                TraceStatus::Error => Some(self.generate_error()),
                _ => None,
            }
        } else if self.rng.gen_bool(self.config.error_rate) {
            Some(self.generate_error())
        } else {
            None
        };

        let record = TraceRecord {
            id: self.trace_id(),
            name: format!("{model}_generation"),
            user_id: self.user_id(),
            session_id: self.session_id(),
            model: model.to_string(),
            provider: provider.to_string(),
            metadata: self.generate_params(),
            input: PROMPTS.choose(&mut self.rng).unwrap().to_string(),
            output: RESPONSES.choose(&mut self.rng).unwrap().to_string(),
            usage,
            cost: round_to(cost, 6),
            latency_ms: self
                .rng
                .gen_range(self.config.min_latency_ms..=self.config.max_latency_ms),
            timestamp: epoch_now(),
            status,
            error,
        };

        debug!(trace_id = %record.id, model = %record.model, status = ?record.status, "generated trace");
        record
    }

    /// Generates a trace record, then merges `overrides` over it.
    pub fn generate_trace_with(&mut self, overrides: TraceOverrides) -> TraceRecord {
        overrides.apply(self.generate_trace())
    }

    fn generate_params(&mut self) -> GenerationParams {
        GenerationParams {
            temperature: round_to(self.rng.gen_range(0.0..=1.0), 2),
            max_tokens: *MAX_TOKENS_CHOICES.choose(&mut self.rng).unwrap(),
            top_p: round_to(self.rng.gen_range(0.1..=1.0), 2),
            frequency_penalty: round_to(self.rng.gen_range(0.0..=2.0), 2),
            presence_penalty: round_to(self.rng.gen_range(0.0..=2.0), 2),
            user_type: USER_TYPES.choose(&mut self.rng).unwrap().to_string(),
            environment: ENVIRONMENTS.choose(&mut self.rng).unwrap().to_string(),
        }
    }

    /// Generates provider failure details from one of the error archetypes.
    pub fn generate_error(&mut self) -> ErrorDetail {
        let archetype = ERROR_ARCHETYPES.choose(&mut self.rng).unwrap();
        ErrorDetail {
            error_type: archetype.kind.to_string(),
            error_message: archetype.message.to_string(),
            error_code: self.rng.gen_range(400..=599),
            retry_after: if archetype.retryable {
                Some(self.rng.gen_range(1..=300))
            } else {
                None
            },
        }
    }

    /// Generates a metrics snapshot; `timestamp` defaults to the current time.
    ///
    /// Counter and bucket values are independently randomized within plausible
    /// bounds; no cross-field consistency is enforced.
    pub fn generate_metrics(&mut self, timestamp: Option<f64>) -> MetricsRecord {
        let timestamp = timestamp.unwrap_or_else(epoch_now);

        let buckets = [
            ("0.1", self.rng.gen_range(0..=10)),
            ("0.5", self.rng.gen_range(10..=50)),
            ("1.0", self.rng.gen_range(50..=150)),
            ("2.0", self.rng.gen_range(150..=300)),
            ("5.0", self.rng.gen_range(300..=500)),
            ("+Inf", self.rng.gen_range(500..=1000)),
        ]
        .into_iter()
        .map(|(bound, count)| (bound.to_string(), count))
        .collect();

        MetricsRecord {
            timestamp,
            metrics: MetricsSnapshot {
                llm_requests_total: self.rng.gen_range(50..=1000),
                llm_request_duration_seconds: DurationHistogram {
                    count: self.rng.gen_range(50..=1000),
                    sum: round_to(self.rng.gen_range(50.0..=500.0), 2),
                    buckets,
                },
                llm_tokens_total: TokenTotals {
                    input: self.rng.gen_range(5_000..=50_000),
                    output: self.rng.gen_range(7_500..=75_000),
                },
                llm_cost_total: round_to(self.rng.gen_range(1.0..=100.0), 2),
                llm_errors_total: self.rng.gen_range(0..=50),
                llm_cache_hits_total: self.rng.gen_range(10..=200),
                llm_cache_misses_total: self.rng.gen_range(100..=800),
            },
            labels: MetricsLabels {
                model: MODELS.choose(&mut self.rng).unwrap().to_string(),
                provider: PROVIDERS.choose(&mut self.rng).unwrap().to_string(),
                environment: ENVIRONMENTS.choose(&mut self.rng).unwrap().to_string(),
            },
        }
    }
}

impl Default for TelemetryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn epoch_now() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
