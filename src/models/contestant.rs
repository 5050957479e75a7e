//! Contestant record model
//!
//! Records are persisted with the camelCase keys used by every client of the
//! shared store. Numeric fields are clamped on every write.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::ids::ContestantId;

/// Highest score a contestant can hold
pub const MAX_SCORE: f64 = 20.0;

/// One contestant's entry within a contest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestantRecord {
    pub id: ContestantId,

    #[serde(default, deserialize_with = "lenient_text")]
    pub contest_name: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub contestant_name: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub age_group: String,

    /// Always within `0..=MAX_SCORE`
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: f64,

    /// Always `>= 0`
    #[serde(default, deserialize_with = "lenient_time")]
    pub total_time_minutes: f64,
}

/// Field values supplied when adding a contestant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContestantFields {
    pub contest_name: String,
    pub contestant_name: String,
    pub age_group: String,
    pub score: f64,
    pub total_time_minutes: f64,
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContestantUpdate {
    pub contestant_name: Option<String>,
    pub age_group: Option<String>,
    pub score: Option<f64>,
    pub total_time_minutes: Option<f64>,
}

impl ContestantUpdate {
    pub fn is_empty(&self) -> bool {
        self.contestant_name.is_none()
            && self.age_group.is_none()
            && self.score.is_none()
            && self.total_time_minutes.is_none()
    }
}

/// Clamp a score into `0..=MAX_SCORE`; NaN becomes 0
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, MAX_SCORE)
    }
}

/// Clamp a duration to `>= 0`; non-finite values become 0
pub fn clamp_time(minutes: f64) -> f64 {
    if minutes.is_finite() {
        minutes.max(0.0)
    } else {
        0.0
    }
}

/// Numbers, numeric strings and anything else (as 0) are accepted
fn lenient_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Value::deserialize(deserializer).map(|v| clamp_score(lenient_number(&v)))
}

fn lenient_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Value::deserialize(deserializer).map(|v| clamp_time(lenient_number(&v)))
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(|v| match v {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

impl ContestantRecord {
    /// Build a new record from raw fields with a fresh id
    pub fn new(fields: ContestantFields) -> Self {
        Self {
            id: ContestantId::generate(),
            contest_name: fields.contest_name.trim().to_string(),
            contestant_name: fields.contestant_name.trim().to_string(),
            age_group: fields.age_group.trim().to_string(),
            score: clamp_score(fields.score),
            total_time_minutes: clamp_time(fields.total_time_minutes),
        }
    }

    /// Merge the fields present in `update`, re-validating each one
    pub fn apply(&mut self, update: &ContestantUpdate) {
        if let Some(name) = &update.contestant_name {
            self.contestant_name = name.trim().to_string();
        }
        if let Some(group) = &update.age_group {
            self.age_group = group.trim().to_string();
        }
        if let Some(score) = update.score {
            self.score = clamp_score(score);
        }
        if let Some(minutes) = update.total_time_minutes {
            self.total_time_minutes = clamp_time(minutes);
        }
    }

    /// Score as used for ranking; guards records written by older clients
    pub fn effective_score(&self) -> f64 {
        clamp_score(self.score)
    }

    pub fn is_over_time(&self, threshold_minutes: f64) -> bool {
        self.total_time_minutes > threshold_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(score: f64, minutes: f64) -> ContestantFields {
        ContestantFields {
            contest_name: "IQ Quiz Contest".into(),
            contestant_name: "  Asha  ".into(),
            age_group: " Group 2 ".into(),
            score,
            total_time_minutes: minutes,
        }
    }

    #[test]
    fn test_new_clamps_and_trims() {
        let record = ContestantRecord::new(fields(25.0, -1.0));
        assert_eq!(record.score, 20.0);
        assert_eq!(record.total_time_minutes, 0.0);
        assert_eq!(record.contestant_name, "Asha");
        assert_eq!(record.age_group, "Group 2");
    }

    #[test]
    fn test_negative_score_clamps_to_zero() {
        let record = ContestantRecord::new(fields(-5.0, 12.5));
        assert_eq!(record.score, 0.0);
        assert_eq!(record.total_time_minutes, 12.5);
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(f64::INFINITY), MAX_SCORE);
        assert_eq!(clamp_time(f64::NAN), 0.0);
        assert_eq!(clamp_time(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut record = ContestantRecord::new(fields(10.0, 15.0));
        let before = record.clone();

        record.apply(&ContestantUpdate {
            score: Some(99.0),
            ..Default::default()
        });

        assert_eq!(record.score, 20.0);
        assert_eq!(record.total_time_minutes, before.total_time_minutes);
        assert_eq!(record.contestant_name, before.contestant_name);
        assert_eq!(record.id, before.id);
    }

    #[test]
    fn test_json_layout_is_camel_case() {
        let record = ContestantRecord::new(fields(12.0, 9.0));
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("contestantName").is_some());
        assert!(value.get("totalTimeMinutes").is_some());
        assert!(value.get("ageGroup").is_some());
        assert_eq!(value["score"], 12.0);
    }

    #[test]
    fn test_update_is_empty() {
        assert!(ContestantUpdate::default().is_empty());
        let update = ContestantUpdate {
            age_group: Some("Group 1".into()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_decode_tolerates_malformed_fields() {
        let record: ContestantRecord = serde_json::from_str(
            r#"{"id": "x1", "contestantName": null, "score": "15", "totalTimeMinutes": "soon"}"#,
        )
        .unwrap();
        assert_eq!(record.score, 15.0);
        assert_eq!(record.total_time_minutes, 0.0);
        assert_eq!(record.contestant_name, "");

        let record: ContestantRecord =
            serde_json::from_str(r#"{"id": "x2", "score": 40, "totalTimeMinutes": -3}"#).unwrap();
        assert_eq!(record.score, MAX_SCORE);
        assert_eq!(record.total_time_minutes, 0.0);
    }

    #[test]
    fn test_decode_requires_id() {
        assert!(serde_json::from_str::<ContestantRecord>(r#"{"score": 3}"#).is_err());
    }
}
