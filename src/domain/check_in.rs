use chrono::{DateTime, Utc};

use crate::domain::calendar;
use crate::domain::ids::IdGenerator;
use crate::error::{ScoreViolation, ValidationError};

pub const SCORE_MIN: u8 = 1;
pub const SCORE_MAX: u8 = 10;
pub const SLEEP_HOURS_MIN: f64 = 0.0;
pub const SLEEP_HOURS_MAX: f64 = 24.0;

const ID_PREFIX: &str = "checkin";

#[derive(Debug, Clone, PartialEq)]
pub struct DailyCheckIn {
    pub id: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub mood_score: u8,
    pub energy_score: u8,
    pub sleep_hours: f64,
    pub sleep_quality: u8,
    pub notes: Option<String>,
    pub ai_insight: Option<String>,
    pub is_morning: bool,
    pub synced_to_cloud: bool,
}

impl DailyCheckIn {
    pub fn scores(&self) -> CheckInScores {
        CheckInScores {
            mood_score: Some(self.mood_score),
            energy_score: Some(self.energy_score),
            sleep_quality: Some(self.sleep_quality),
            sleep_hours: Some(self.sleep_hours),
        }
    }

    pub fn mark_synced(&mut self) {
        self.synced_to_cloud = true;
    }
}

/// Partial set of check-in measurements. Unset fields are never checked.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CheckInScores {
    pub mood_score: Option<u8>,
    pub energy_score: Option<u8>,
    pub sleep_quality: Option<u8>,
    pub sleep_hours: Option<f64>,
}

impl CheckInScores {
    /// Collects every out-of-range field. Values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        let scores = [
            ("mood_score", self.mood_score),
            ("energy_score", self.energy_score),
            ("sleep_quality", self.sleep_quality),
        ];
        for (field, score) in scores {
            if let Some(v) = score
                && !(SCORE_MIN..=SCORE_MAX).contains(&v)
            {
                violations.push(ScoreViolation {
                    field,
                    value: f64::from(v),
                    min: f64::from(SCORE_MIN),
                    max: f64::from(SCORE_MAX),
                });
            }
        }
        if let Some(h) = self.sleep_hours
            && !(SLEEP_HOURS_MIN..=SLEEP_HOURS_MAX).contains(&h)
        {
            violations.push(ScoreViolation {
                field: "sleep_hours",
                value: h,
                min: SLEEP_HOURS_MIN,
                max: SLEEP_HOURS_MAX,
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}

pub fn validate_check_in_scores(scores: &CheckInScores) -> bool {
    scores.validate().is_ok()
}

/// Input for [`create_daily_check_in`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewCheckIn {
    pub user_id: String,
    pub mood_score: u8,
    pub energy_score: u8,
    pub sleep_hours: f64,
    pub sleep_quality: u8,
    pub is_morning: bool,
    pub notes: Option<String>,
}

/// Stamps a new, unsynced check-in at the current time. Scores are taken as
/// given; run [`CheckInScores::validate`] first to reject bad input.
pub fn create_daily_check_in(ids: &impl IdGenerator, input: NewCheckIn) -> DailyCheckIn {
    DailyCheckIn {
        id: ids.new_id(ID_PREFIX),
        user_id: input.user_id,
        timestamp: calendar::now(),
        mood_score: input.mood_score,
        energy_score: input.energy_score,
        sleep_hours: input.sleep_hours,
        sleep_quality: input.sleep_quality,
        notes: input.notes,
        ai_insight: None,
        is_morning: input.is_morning,
        synced_to_cloud: false,
    }
}
