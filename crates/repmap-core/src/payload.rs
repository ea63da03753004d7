//! One-time snapshot of the representative payload written by the CMS.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::sample::sample_records;
use crate::PayloadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadSource {
    /// Records supplied by the host page / CMS data layer.
    Host,
    /// The built-in sample data set.
    Sample,
}

#[derive(Debug, Clone)]
pub struct Payload {
    pub records: Vec<Value>,
    pub source: PayloadSource,
}

impl Payload {
    fn sample() -> Self {
        Self {
            records: sample_records(),
            source: PayloadSource::Sample,
        }
    }
}

/// Interprets raw payload text. Anything other than a JSON array counts as
/// "no payload" and yields the sample data set.
#[must_use]
pub fn payload_from_json(raw: Option<&str>) -> Payload {
    let Some(raw) = raw else {
        tracing::warn!("no representative payload supplied; using sample data");
        return Payload::sample();
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(records)) => Payload {
            records,
            source: PayloadSource::Host,
        },
        Ok(other) => {
            tracing::warn!(
                kind = json_kind(&other),
                "representative payload is not an array; using sample data"
            );
            Payload::sample()
        }
        Err(e) => {
            tracing::warn!(error = %e, "representative payload is not valid JSON; using sample data");
            Payload::sample()
        }
    }
}

/// Reads the payload file once. An unset path or a missing file falls back
/// to the sample data set.
///
/// # Errors
///
/// Returns [`PayloadError::Io`] if the file exists but cannot be read.
pub fn load_payload(path: Option<&Path>) -> Result<Payload, PayloadError> {
    let Some(path) = path else {
        return Ok(payload_from_json(None));
    };

    match std::fs::read_to_string(path) {
        Ok(content) => Ok(payload_from_json(Some(&content))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "payload file not found");
            Ok(payload_from_json(None))
        }
        Err(e) => Err(PayloadError::Io {
            path: path.display().to_string(),
            source: e,
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_payload_is_used_as_is() {
        let payload = payload_from_json(Some(r#"[{"id": 1}, "junk"]"#));
        assert_eq!(payload.source, PayloadSource::Host);
        assert_eq!(payload.records.len(), 2);
    }

    #[test]
    fn empty_array_is_still_host_data() {
        let payload = payload_from_json(Some("[]"));
        assert_eq!(payload.source, PayloadSource::Host);
        assert!(payload.records.is_empty());
    }

    #[test]
    fn absent_payload_falls_back_to_sample() {
        let payload = payload_from_json(None);
        assert_eq!(payload.source, PayloadSource::Sample);
        assert!(!payload.records.is_empty());
    }

    #[test]
    fn non_array_payload_falls_back_to_sample() {
        assert_eq!(
            payload_from_json(Some(r#"{"items": []}"#)).source,
            PayloadSource::Sample
        );
        assert_eq!(payload_from_json(Some("not json")).source, PayloadSource::Sample);
    }

    #[test]
    fn missing_file_falls_back_to_sample() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("does-not-exist.json");
        let payload = load_payload(Some(&path)).unwrap();
        assert_eq!(payload.source, PayloadSource::Sample);
    }

    #[test]
    fn unset_path_falls_back_to_sample() {
        assert_eq!(load_payload(None).unwrap().source, PayloadSource::Sample);
    }

    #[test]
    fn reads_payload_file() {
        let path = std::env::temp_dir().join(format!("repmap-payload-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"id": 1, "name": "A"}]"#).unwrap();
        let payload = load_payload(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(payload.source, PayloadSource::Host);
        assert_eq!(payload.records.len(), 1);
    }
}
