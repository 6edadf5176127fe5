//! Structural validation for telemetry records (pure, test-focused).
//!
//! What this module provides
//! - `validate_trace` to gate trace records on minimum structural invariants
//! - `validate_metrics` to gate metrics snapshots the same way
//! - `assert_within_bounds` to gate performance-sensitive assertions
//!
//! Invariants validated
//! - Trace: `id`, `name`, `timestamp`, `status` present; `timestamp` numeric
//!   and positive; `status` one of success/error/pending; when `usage` is
//!   present, a numeric non-negative `total_tokens`
//! - Metrics: `timestamp` and `metrics` present; when present,
//!   `llm_requests_total` is a non-negative integer and `llm_cost_total` a
//!   non-negative number
//!
//! Validation operates on `serde_json::Value` so it can gate records from any
//! source, synthetic or real; typed records bridge in through `to_value()`.
//! Checks short-circuit: the first violated invariant determines the error.
//! Failures always surface to the caller, nothing is recovered locally.

use serde_json::Value;

use crate::error::{Result, TelemetryError};

const TRACE_REQUIRED_FIELDS: &[&str] = &["id", "name", "timestamp", "status"];
const TRACE_STATUSES: &[&str] = &["success", "error", "pending"];

/// Validates the minimum structure of a trace record.
pub fn validate_trace(record: &Value) -> Result<()> {
    for field in TRACE_REQUIRED_FIELDS {
        if record.get(field).is_none() {
            return Err(TelemetryError::MissingField {
                field: (*field).to_string(),
            });
        }
    }

    let timestamp = record["timestamp"]
        .as_f64()
        .ok_or(TelemetryError::WrongType {
            field: "timestamp".to_string(),
            expected: "number",
        })?;
    if timestamp <= 0.0 {
        return Err(TelemetryError::OutOfRange {
            field: "timestamp".to_string(),
            message: format!("must be positive, got {timestamp}"),
        });
    }

    let status = record["status"].as_str().ok_or(TelemetryError::WrongType {
        field: "status".to_string(),
        expected: "string",
    })?;
    if !TRACE_STATUSES.contains(&status) {
        return Err(TelemetryError::InvalidStatus {
            status: status.to_string(),
        });
    }

    if let Some(usage) = record.get("usage") {
        let total = usage
            .get("total_tokens")
            .ok_or(TelemetryError::MissingField {
                field: "usage.total_tokens".to_string(),
            })?
            .as_f64()
            .ok_or(TelemetryError::WrongType {
                field: "usage.total_tokens".to_string(),
                expected: "number",
            })?;
        if total < 0.0 {
            return Err(TelemetryError::OutOfRange {
                field: "usage.total_tokens".to_string(),
                message: format!("must be non-negative, got {total}"),
            });
        }
    }

    Ok(())
}

/// Validates the minimum structure of a metrics record.
pub fn validate_metrics(record: &Value) -> Result<()> {
    if record.get("timestamp").is_none() {
        return Err(TelemetryError::MissingField {
            field: "timestamp".to_string(),
        });
    }
    let metrics = record.get("metrics").ok_or(TelemetryError::MissingField {
        field: "metrics".to_string(),
    })?;

    if let Some(requests) = metrics.get("llm_requests_total") {
        let count = requests.as_i64().ok_or(TelemetryError::WrongType {
            field: "metrics.llm_requests_total".to_string(),
            expected: "integer",
        })?;
        if count < 0 {
            return Err(TelemetryError::OutOfRange {
                field: "metrics.llm_requests_total".to_string(),
                message: format!("must be non-negative, got {count}"),
            });
        }
    }

    if let Some(cost) = metrics.get("llm_cost_total") {
        let total = cost.as_f64().ok_or(TelemetryError::WrongType {
            field: "metrics.llm_cost_total".to_string(),
            expected: "number",
        })?;
        if total < 0.0 {
            return Err(TelemetryError::OutOfRange {
                field: "metrics.llm_cost_total".to_string(),
                message: format!("must be non-negative, got {total}"),
            });
        }
    }

    Ok(())
}

/// Fails when `duration` exceeds `max_duration`, embedding both values and
/// the operation label in the error message.
pub fn assert_within_bounds(duration: f64, max_duration: f64, operation: &str) -> Result<()> {
    if duration > max_duration {
        return Err(TelemetryError::BoundsExceeded {
            operation: operation.to_string(),
            duration,
            max_duration,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_trace() -> Value {
        json!({
            "id": "trace_ab12cd34ef56gh78",
            "name": "gpt-4_generation",
            "timestamp": 1_700_000_000.25,
            "status": "success",
            "usage": {
                "input_tokens": 8,
                "output_tokens": 12,
                "total_tokens": 20
            }
        })
    }

    #[test]
    fn valid_trace_passes() {
        assert!(validate_trace(&valid_trace()).is_ok());
    }

    #[test]
    fn trace_without_usage_passes() {
        let mut record = valid_trace();
        record.as_object_mut().unwrap().remove("usage");
        assert!(validate_trace(&record).is_ok());
    }

    #[test]
    fn pending_status_accepted() {
        let mut record = valid_trace();
        record["status"] = json!("pending");
        assert!(validate_trace(&record).is_ok());
    }

    #[test]
    fn missing_required_field_rejected() {
        for field in ["id", "name", "timestamp", "status"] {
            let mut record = valid_trace();
            record.as_object_mut().unwrap().remove(field);
            let err = validate_trace(&record).unwrap_err();
            match err {
                TelemetryError::MissingField { field: reported } => {
                    assert_eq!(reported, field)
                }
                other => panic!("expected MissingField, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_positive_timestamp_rejected() {
        for bad in [0.0, -1.0] {
            let mut record = valid_trace();
            record["timestamp"] = json!(bad);
            assert!(matches!(
                validate_trace(&record),
                Err(TelemetryError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn non_numeric_timestamp_rejected() {
        let mut record = valid_trace();
        record["timestamp"] = json!("2025-01-28T10:30:00Z");
        assert!(matches!(
            validate_trace(&record),
            Err(TelemetryError::WrongType { .. })
        ));
    }

    #[test]
    fn unknown_status_rejected() {
        let mut record = valid_trace();
        record["status"] = json!("running");
        assert!(matches!(
            validate_trace(&record),
            Err(TelemetryError::InvalidStatus { .. })
        ));
    }

    #[test]
    fn negative_total_tokens_rejected() {
        let mut record = valid_trace();
        record["usage"]["total_tokens"] = json!(-5);
        assert!(matches!(
            validate_trace(&record),
            Err(TelemetryError::OutOfRange { .. })
        ));
    }

    #[test]
    fn first_violation_wins() {
        // Both id and name are missing; required fields are checked in
        // declaration order so id is reported.
        let record = json!({ "timestamp": 1.0, "status": "success" });
        let err = validate_trace(&record).unwrap_err();
        assert!(matches!(
            err,
            TelemetryError::MissingField { ref field } if field == "id"
        ));
    }

    #[test]
    fn valid_metrics_passes() {
        let record = json!({
            "timestamp": 1_700_000_000,
            "metrics": {
                "llm_requests_total": 100,
                "llm_cost_total": 12.5
            }
        });
        assert!(validate_metrics(&record).is_ok());
    }

    #[test]
    fn metrics_missing_top_level_keys_rejected() {
        let err = validate_metrics(&json!({ "metrics": {} })).unwrap_err();
        assert!(matches!(
            err,
            TelemetryError::MissingField { ref field } if field == "timestamp"
        ));

        let err = validate_metrics(&json!({ "timestamp": 1 })).unwrap_err();
        assert!(matches!(
            err,
            TelemetryError::MissingField { ref field } if field == "metrics"
        ));
    }

    #[test]
    fn metrics_negative_counters_rejected() {
        let record = json!({
            "timestamp": 1,
            "metrics": { "llm_requests_total": -1 }
        });
        assert!(matches!(
            validate_metrics(&record),
            Err(TelemetryError::OutOfRange { .. })
        ));

        let record = json!({
            "timestamp": 1,
            "metrics": { "llm_cost_total": -0.5 }
        });
        assert!(matches!(
            validate_metrics(&record),
            Err(TelemetryError::OutOfRange { .. })
        ));
    }

    #[test]
    fn metrics_fractional_request_count_rejected() {
        let record = json!({
            "timestamp": 1,
            "metrics": { "llm_requests_total": 10.5 }
        });
        assert!(matches!(
            validate_metrics(&record),
            Err(TelemetryError::WrongType { .. })
        ));
    }

    #[test]
    fn metrics_optional_counters_may_be_absent() {
        let record = json!({ "timestamp": 1, "metrics": {} });
        assert!(validate_metrics(&record).is_ok());
    }

    #[test]
    fn within_bounds_passes_and_exceeding_fails() {
        assert!(assert_within_bounds(0.5, 1.0, "op").is_ok());
        assert!(assert_within_bounds(1.0, 1.0, "op").is_ok());

        let err = assert_within_bounds(2.0, 1.0, "op").unwrap_err();
        assert_eq!(err.to_string(), "op took 2.000s, expected <= 1s");
    }
}
