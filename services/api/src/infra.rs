use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Accepts a JSON number or numeric string for `workExperience`; anything
/// else reads as absent so the classifier falls back to its default. The
/// endpoint must never reject a record over one malformed field.
pub(crate) fn deserialize_lenient_years<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(lenient_years))
}

fn lenient_years(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|years| years as i64)),
        Value::String(raw) => {
            let raw = raw.trim();
            raw.parse::<i64>()
                .ok()
                .or_else(|| raw.parse::<f64>().ok().map(|years| years as i64))
        }
        _ => None,
    }
}

/// Accepts a JSON string; any other shape reads as absent.
pub(crate) fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

/// Accepts a JSON array for `skills`; non-string entries are rendered as
/// text, and any non-array shape reads as absent.
pub(crate) fn deserialize_lenient_skills<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(entries)) => Some(
            entries
                .into_iter()
                .map(|entry| match entry {
                    Value::String(text) => text,
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    })
}
