use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::shot::{SeasonId, ShotContext, ShotOutcome, ShotRecord};
use crate::error::{ShotMapError, ShotMapResult};

/// Loosely-typed scalar as delivered by the upstream shot feed.
///
/// The feed reports numeric fields either as JSON numbers or as numeric
/// strings; anything else lands in `Other` so one odd entry never fails the
/// deserialization of a whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawValue {
    fn describe(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => format!("{text:?}"),
            Self::Other(value) => value.to_string(),
        }
    }

    pub(crate) fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            }
            Self::Number(value) if value.is_finite() && value.fract() == 0.0 => {
                Some(format!("{value:.0}"))
            }
            Self::Number(value) if value.is_finite() => Some(value.to_string()),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
            Self::Other(_) => None,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One shot entry exactly as fetched, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawShot {
    #[serde(rename = "X", default, skip_serializing_if = "Option::is_none")]
    pub x: Option<RawValue>,
    #[serde(rename = "Y", default, skip_serializing_if = "Option::is_none")]
    pub y: Option<RawValue>,
    #[serde(rename = "xG", default, skip_serializing_if = "Option::is_none")]
    pub xg: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation: Option<RawValue>,
    #[serde(rename = "shotType", default, skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<RawValue>,
}

impl RawShot {
    /// Builds a raw entry carrying the fields the pipeline reads.
    #[must_use]
    pub fn new(
        x: impl Into<RawValue>,
        y: impl Into<RawValue>,
        xg: impl Into<RawValue>,
        result: &str,
        season: &str,
    ) -> Self {
        Self {
            x: Some(x.into()),
            y: Some(y.into()),
            xg: Some(xg.into()),
            result: Some(RawValue::from(result)),
            season: Some(RawValue::from(season)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<RawValue>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_minute(mut self, minute: impl Into<RawValue>) -> Self {
        self.minute = Some(minute.into());
        self
    }
}

/// Reason a raw entry was rejected by the normalizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` is not numeric: {value}")]
    NotNumeric { field: &'static str, value: String },

    #[error("field `{field}` is not finite")]
    NonFinite { field: &'static str },

    #[error("field `{field}` = {value} is outside [0, 1]")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("field `{field}` is not a usable identifier: {value}")]
    InvalidText { field: &'static str, value: String },
}

/// Index of a dropped entry in the input batch and why it was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedRecord {
    pub index: usize,
    pub error: RecordError,
}

/// Normalizer output: validated records in input order plus the drop ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedShots {
    pub records: Vec<ShotRecord>,
    pub dropped: Vec<DroppedRecord>,
}

/// Validates a single raw entry.
pub fn normalize_shot(raw: &RawShot) -> Result<ShotRecord, RecordError> {
    let position_x = unit_interval(raw.x.as_ref(), "X")?;
    let position_y = unit_interval(raw.y.as_ref(), "Y")?;
    let expected_goals = unit_interval(raw.xg.as_ref(), "xG")?;

    let season = raw
        .season
        .as_ref()
        .ok_or(RecordError::MissingField { field: "season" })?;
    let season_id = season
        .as_text()
        .map(SeasonId::new)
        .ok_or_else(|| RecordError::InvalidText {
            field: "season",
            value: season.describe(),
        })?;

    let result = match raw.result.as_ref() {
        Some(RawValue::Text(text)) => Some(text.as_str()),
        _ => None,
    };

    Ok(ShotRecord {
        season_id,
        position_x,
        position_y,
        expected_goals,
        outcome: ShotOutcome::from_source_result(result),
        context: context_of(raw),
    })
}

/// Validates a batch, dropping malformed entries instead of failing.
pub fn normalize_shots(raw: &[RawShot]) -> NormalizedShots {
    let mut out = NormalizedShots {
        records: Vec::with_capacity(raw.len()),
        dropped: Vec::new(),
    };

    for (index, entry) in raw.iter().enumerate() {
        match normalize_shot(entry) {
            Ok(record) => out.records.push(record),
            Err(error) => {
                warn!(index, error = %error, "dropping malformed shot record");
                out.dropped.push(DroppedRecord { index, error });
            }
        }
    }

    debug!(
        input_count = raw.len(),
        kept = out.records.len(),
        dropped = out.dropped.len(),
        "normalized shot batch"
    );
    out
}

/// Parses a JSON array of shot entries.
///
/// Elements that are not shot-shaped objects are skipped; only a document that
/// is not an array at all is rejected.
pub fn parse_raw_shots(json: &str) -> ShotMapResult<Vec<RawShot>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)
        .map_err(|e| ShotMapError::InvalidData(format!("shot batch must be a json array: {e}")))?;

    let mut shots = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        // Derived struct deserializers also accept sequences; only objects are shots.
        let serde_json::Value::Object(fields) = entry else {
            warn!(index, "skipping non-object shot entry");
            continue;
        };
        match serde_json::from_value::<RawShot>(serde_json::Value::Object(fields)) {
            Ok(shot) => shots.push(shot),
            Err(err) => warn!(index, error = %err, "skipping malformed shot entry"),
        }
    }
    Ok(shots)
}

fn unit_interval(value: Option<&RawValue>, field: &'static str) -> Result<f64, RecordError> {
    let value = value.ok_or(RecordError::MissingField { field })?;
    let parsed = value.as_f64().ok_or_else(|| RecordError::NotNumeric {
        field,
        value: value.describe(),
    })?;
    if !parsed.is_finite() {
        return Err(RecordError::NonFinite { field });
    }
    if !(0.0..=1.0).contains(&parsed) {
        return Err(RecordError::OutOfRange {
            field,
            value: parsed,
        });
    }
    Ok(parsed)
}

fn context_of(raw: &RawShot) -> ShotContext {
    ShotContext {
        id: raw.id.as_ref().and_then(RawValue::as_text),
        minute: raw
            .minute
            .as_ref()
            .and_then(RawValue::as_f64)
            .filter(|m| m.is_finite() && *m >= 0.0 && *m <= f64::from(u16::MAX))
            .map(|m| m as u16),
        situation: raw.situation.as_ref().and_then(RawValue::as_text),
        shot_type: raw.shot_type.as_ref().and_then(RawValue::as_text),
    }
}

#[cfg(test)]
mod tests {
    use super::{RawValue, unit_interval};

    #[test]
    fn numeric_text_is_trimmed_before_parsing() {
        let value = RawValue::from(" 0.25 ");
        assert_eq!(unit_interval(Some(&value), "xG"), Ok(0.25));
    }

    #[test]
    fn integral_season_numbers_render_without_fraction() {
        assert_eq!(
            RawValue::Number(2023.0).as_text().as_deref(),
            Some("2023")
        );
    }

    #[test]
    fn blank_text_is_not_an_identifier() {
        assert_eq!(RawValue::from("   ").as_text(), None);
    }

    #[test]
    fn nan_text_is_rejected_as_non_finite() {
        let value = RawValue::from("NaN");
        assert!(unit_interval(Some(&value), "X").is_err());
    }
}
