//! # Telemetry Fixtures for LLM Observability
//!
//! Synthetic trace and metrics records with internally consistent token
//! accounting, cost modeling, and latency shaping, plus structural validators
//! that gate both synthetic and real records. The crate is test support: it
//! seeds suites that exercise LLM observability pipelines without touching
//! any live service.
//!
//! ## Core Concepts
//!
//! - **Generator**: [`TelemetryGenerator`] produces [`TraceRecord`] and
//!   [`MetricsRecord`] values with fields drawn from closed catalogs and
//!   bounded ranges. Costs derive from a per-model pricing table with a
//!   default fallback for unknown models.
//! - **Overrides**: [`TraceOverrides`] merges caller values over a fully
//!   built record, last write wins, so tests can pin fields or deliberately
//!   construct inconsistent fixtures.
//! - **Validation**: [`validate_trace`] and [`validate_metrics`] check
//!   minimum structural invariants on the JSON form and short-circuit on the
//!   first violation; [`assert_within_bounds`] gates performance-sensitive
//!   assertions.
//! - **Corruption**: the [`mutate`] module introduces single targeted defects
//!   into valid records for negative-path validator tests.
//!
//! ## Getting Started
//!
//! ```rust
//! use telemetry_fixtures::{validate_trace, TelemetryGenerator};
//!
//! let mut gen = TelemetryGenerator::with_seed(42);
//! let trace = gen.generate_trace();
//!
//! assert_eq!(
//!     trace.usage.total_tokens,
//!     trace.usage.input_tokens + trace.usage.output_tokens
//! );
//! assert!(validate_trace(&trace.to_value().unwrap()).is_ok());
//! ```

pub mod catalog;
pub mod error;
pub mod generator;
pub mod mutate;
pub mod readiness;
pub mod record;
pub mod validator;

pub use error::{Result, TelemetryError};
pub use generator::{GeneratorConfig, TelemetryGenerator, TraceOverrides};
pub use record::{
    DurationHistogram, ErrorDetail, GenerationParams, MetricsLabels, MetricsRecord,
    MetricsSnapshot, TokenTotals, TokenUsage, TraceRecord, TraceStatus,
};
pub use validator::{assert_within_bounds, validate_metrics, validate_trace};
