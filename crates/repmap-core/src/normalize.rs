//! Normalization of raw CMS representative records into [`Representative`]s.
//!
//! The CMS emits one record per (person, region) entry, so the same `id` may
//! appear several times with different region assignments. Records are
//! validated one by one (a bad record is dropped, never fatal), then grouped
//! by `id`: the first record of a group supplies the contact fields and the
//! region codes of every record in the group are unioned.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::registry::RegionRegistry;
use crate::representatives::{RegionAssignment, Representative};

pub const MAX_NAME_CHARS: usize = 200;
pub const MAX_POSITION_CHARS: usize = 200;
pub const MAX_PHONE_CHARS: usize = 50;
pub const MAX_EMAIL_CHARS: usize = 100;
pub const MAX_ACTIVITY_CHARS: usize = 100;
pub const MAX_WORKING_HOURS_CHARS: usize = 200;
pub const MAX_ADDRESS_CHARS: usize = 200;

/// Substituted when the CMS leaves the position blank.
pub const DEFAULT_POSITION: &str = "Представитель";

/// Why a raw record was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordRejection {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("id is missing or is not a finite integer")]
    InvalidId,

    #[error("name is empty")]
    EmptyName,

    #[error("field '{0}' is not a string")]
    NotAString(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRecord {
    /// Position of the record in the raw payload.
    pub index: usize,
    pub reason: RecordRejection,
}

/// A region code on a normalized representative that the registry does not
/// know. The code is kept; this is a warning only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode {
    pub representative_id: i64,
    pub code: String,
}

#[derive(Debug, Clone, Default)]
pub struct NormalizeReport {
    /// Deduplicated representatives in first-encounter order of their `id`.
    pub representatives: Vec<Representative>,
    pub dropped: Vec<DroppedRecord>,
    pub unknown_codes: Vec<UnknownCode>,
}

impl NormalizeReport {
    #[must_use]
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}

/// A raw record that passed validation, before grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidRecord {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub phone: String,
    pub email: String,
    pub region_codes: Vec<String>,
    pub activity: Option<Vec<String>>,
    pub working_hours: Option<String>,
    pub address: Option<String>,
}

/// Validates, deduplicates and sanitizes a raw payload.
///
/// Never fails: malformed records are reported in
/// [`NormalizeReport::dropped`] and unknown region codes in
/// [`NormalizeReport::unknown_codes`].
#[must_use]
pub fn normalize(raw: &[Value], registry: &RegionRegistry) -> NormalizeReport {
    let mut groups: Vec<ValidRecord> = Vec::new();
    let mut by_id: HashMap<i64, usize> = HashMap::new();
    let mut dropped = Vec::new();

    for (index, value) in raw.iter().enumerate() {
        match validate_record(value) {
            Ok(record) => {
                if let Some(&pos) = by_id.get(&record.id) {
                    groups[pos].region_codes.extend(record.region_codes);
                } else {
                    by_id.insert(record.id, groups.len());
                    groups.push(record);
                }
            }
            Err(reason) => {
                tracing::debug!(index, %reason, "dropping representative record");
                dropped.push(DroppedRecord { index, reason });
            }
        }
    }

    if !dropped.is_empty() {
        tracing::info!(
            dropped = dropped.len(),
            total = raw.len(),
            "dropped malformed representative records"
        );
    }

    let mut unknown_codes = Vec::new();
    let representatives: Vec<Representative> = groups
        .into_iter()
        .map(|record| {
            let region_id = RegionAssignment::from_codes(record.region_codes);
            for code in region_id.codes() {
                if !registry.is_known(code) {
                    tracing::warn!(
                        representative_id = record.id,
                        code = %code,
                        "representative assigned to unknown region code"
                    );
                    unknown_codes.push(UnknownCode {
                        representative_id: record.id,
                        code: code.clone(),
                    });
                }
            }
            Representative {
                id: record.id,
                name: record.name,
                position: record.position,
                phone: record.phone,
                email: record.email,
                region_id,
                activity: record.activity,
                working_hours: record.working_hours,
                address: record.address,
            }
        })
        .collect();

    tracing::debug!(
        kept = representatives.len(),
        unknown_codes = unknown_codes.len(),
        "normalized representative payload"
    );

    NormalizeReport {
        representatives,
        dropped,
        unknown_codes,
    }
}

/// Checks one raw record and sanitizes its fields.
///
/// # Errors
///
/// Returns the first [`RecordRejection`] that applies.
pub(crate) fn validate_record(value: &Value) -> Result<ValidRecord, RecordRejection> {
    let Value::Object(fields) = value else {
        return Err(RecordRejection::NotAnObject);
    };

    let id = parse_id(fields.get("id")).ok_or(RecordRejection::InvalidId)?;

    let name = require_str(fields.get("name"), "name")?;
    let name = bounded(name, MAX_NAME_CHARS);
    if name.is_empty() {
        return Err(RecordRejection::EmptyName);
    }

    let position = bounded(contact_str(fields.get("position"), "position")?, MAX_POSITION_CHARS);
    let position = if position.is_empty() {
        DEFAULT_POSITION.to_owned()
    } else {
        position
    };
    let phone = bounded(contact_str(fields.get("phone"), "phone")?, MAX_PHONE_CHARS);
    let email = sanitize_email(contact_str(fields.get("email"), "email")?);

    Ok(ValidRecord {
        id,
        name,
        position,
        phone,
        email,
        region_codes: parse_region_codes(fields.get("regionId")),
        activity: parse_activity(fields.get("activity")),
        working_hours: optional_str(fields.get("workingHours"), MAX_WORKING_HOURS_CHARS),
        address: optional_str(fields.get("address"), MAX_ADDRESS_CHARS),
    })
}

/// Splits a delimiter-joined region assignment (`;`, `,` or newline) into
/// trimmed, non-empty codes.
pub fn split_region_codes(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split([';', ',', '\n'])
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_owned)
}

/// Accepts a scalar string or an array of (possibly delimiter-joined)
/// strings. Anything else yields no codes.
pub(crate) fn parse_region_codes(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(raw)) => split_region_codes(raw).collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .flat_map(split_region_codes)
            .collect(),
        _ => Vec::new(),
    }
}

/// Ids must be integral: the CMS stores them as integers (`(int)` cast on
/// save), so a fractional id such as `1.5` can never name a stored record
/// and is rejected rather than truncated. Integral floats like `12.0` pass.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn parse_id(value: Option<&Value>) -> Option<i64> {
    let Some(Value::Number(number)) = value else {
        return None;
    };
    if let Some(id) = number.as_i64() {
        return Some(id);
    }
    // Integral floats such as `12.0` are accepted; anything with a fraction
    // or outside the i64 range is not.
    let float = number.as_f64()?;
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.is_finite() && float.fract() == 0.0 && in_range).then_some(float as i64)
}

fn require_str<'a>(value: Option<&'a Value>, field: &'static str) -> Result<&'a str, RecordRejection> {
    value
        .and_then(Value::as_str)
        .ok_or(RecordRejection::NotAString(field))
}

/// Contact fields may be absent or null and then read as `""`; a present
/// value of any other type is rejected.
fn contact_str<'a>(value: Option<&'a Value>, field: &'static str) -> Result<&'a str, RecordRejection> {
    match value {
        None | Some(Value::Null) => Ok(""),
        Some(Value::String(raw)) => Ok(raw),
        Some(_) => Err(RecordRejection::NotAString(field)),
    }
}

fn optional_str(value: Option<&Value>, max_chars: usize) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(|raw| bounded(raw, max_chars))
        .filter(|s| !s.is_empty())
}

fn parse_activity(value: Option<&Value>) -> Option<Vec<String>> {
    let Some(Value::Array(items)) = value else {
        return None;
    };
    let tags: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .map(|tag| bounded(tag, MAX_ACTIVITY_CHARS))
        .filter(|tag| !tag.is_empty())
        .collect();
    (!tags.is_empty()).then_some(tags)
}

/// Trims and caps a string at `max_chars` characters (not bytes).
pub(crate) fn bounded(raw: &str, max_chars: usize) -> String {
    let cut: String = raw.trim().chars().take(max_chars).collect();
    cut.trim_end().to_owned()
}

/// Removes every character that cannot appear in an email address, then
/// applies the length cap.
pub(crate) fn sanitize_email(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-=?^_`{|}~@.[]".contains(*c))
        .collect();
    bounded(&cleaned, MAX_EMAIL_CHARS)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
