//! Mutators that corrupt otherwise valid records to trigger specific
//! validator failures.

use serde_json::{json, Value};

/// A structural defect to introduce into a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corruption {
    RemoveId,
    RemoveName,
    RemoveTimestamp,
    RemoveStatus,
    NonPositiveTimestamp,
    NonNumericTimestamp,
    UnknownStatus,
    NegativeTotalTokens,
    RemoveTotalTokens,
    RemoveMetrics,
    RemoveMetricsTimestamp,
    NegativeRequestCount,
    FractionalRequestCount,
    NegativeCostTotal,
}

/// Apply a corruption in-place. Returns true if the corruption was applied.
pub fn apply_corruption(record: &mut Value, kind: Corruption) -> bool {
    match kind {
        Corruption::RemoveId => remove_key(record, "id"),
        Corruption::RemoveName => remove_key(record, "name"),
        Corruption::RemoveTimestamp | Corruption::RemoveMetricsTimestamp => {
            remove_key(record, "timestamp")
        }
        Corruption::RemoveStatus => remove_key(record, "status"),
        Corruption::NonPositiveTimestamp => set_key(record, "timestamp", json!(0.0)),
        Corruption::NonNumericTimestamp => {
            set_key(record, "timestamp", json!("2025-01-28T10:30:00Z"))
        }
        Corruption::UnknownStatus => set_key(record, "status", json!("running")),
        Corruption::NegativeTotalTokens => match record.get_mut("usage") {
            Some(usage) => set_key(usage, "total_tokens", json!(-1)),
            None => false,
        },
        Corruption::RemoveTotalTokens => match record.get_mut("usage") {
            Some(usage) => remove_key(usage, "total_tokens"),
            None => false,
        },
        Corruption::RemoveMetrics => remove_key(record, "metrics"),
        Corruption::NegativeRequestCount => match record.get_mut("metrics") {
            Some(metrics) => set_key(metrics, "llm_requests_total", json!(-10)),
            None => false,
        },
        Corruption::FractionalRequestCount => match record.get_mut("metrics") {
            Some(metrics) => set_key(metrics, "llm_requests_total", json!(10.5)),
            None => false,
        },
        Corruption::NegativeCostTotal => match record.get_mut("metrics") {
            Some(metrics) => set_key(metrics, "llm_cost_total", json!(-0.01)),
            None => false,
        },
    }
}

fn remove_key(value: &mut Value, key: &str) -> bool {
    value
        .as_object_mut()
        .map(|map| map.remove(key).is_some())
        .unwrap_or(false)
}

fn set_key(value: &mut Value, key: &str, new_value: Value) -> bool {
    match value.as_object_mut() {
        Some(map) => {
            map.insert(key.to_string(), new_value);
            true
        }
        None => false,
    }
}
