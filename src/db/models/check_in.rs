use serde::{Deserialize, Serialize};
use serde_json::Number;
use sqlx::FromRow;

use crate::db::shape::{Document, ShapeCheck};

pub const CHECKINS_COLLECTION: &str = "checkIns";
pub const CHECK_INS_TABLE: &str = "check_ins";

/// `checkIns` document. Scores are kept as raw JSON numbers so the guard
/// accepts any number; range checks happen on the domain side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckInDto {
    pub id: String,
    pub user_id: String,
    pub timestamp: String,
    pub mood_score: Number,
    pub energy_score: Number,
    pub sleep_hours: f64,
    pub sleep_quality: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<String>,
    pub is_morning: bool,
    pub synced_to_cloud: bool,
}

impl Document for CheckInDto {
    const COLLECTION: &'static str = CHECKINS_COLLECTION;

    fn required_fields(check: ShapeCheck<'_>) -> ShapeCheck<'_> {
        check
            .string("id")
            .string("user_id")
            .string("timestamp")
            .number("mood_score")
            .number("energy_score")
            .number("sleep_hours")
            .number("sleep_quality")
            .boolean("is_morning")
            .boolean("synced_to_cloud")
    }
}

pub fn is_check_in_dto(value: &serde_json::Value) -> bool {
    CheckInDto::is_valid(value)
}

/// Key for querying check-ins by user and local day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CheckInIndex {
    pub user_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
}

/// `check_ins` row; booleans are stored as 0/1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct CheckInRow {
    pub id: String,
    pub user_id: String,
    pub timestamp: String,
    pub mood_score: i64,
    pub energy_score: i64,
    pub sleep_hours: f64,
    pub sleep_quality: i64,
    pub notes: Option<String>,
    pub ai_insight: Option<String>,
    pub is_morning: i64,
    pub synced_to_cloud: i64,
}

pub const CHECK_INS_TABLE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS check_ins (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    timestamp TEXT NOT NULL,
    mood_score INTEGER NOT NULL,
    energy_score INTEGER NOT NULL,
    sleep_hours REAL NOT NULL,
    sleep_quality INTEGER NOT NULL,
    notes TEXT,
    ai_insight TEXT,
    is_morning INTEGER NOT NULL,
    synced_to_cloud INTEGER NOT NULL DEFAULT 0,
    created_at TEXT DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_check_ins_user_id ON check_ins(user_id);
CREATE INDEX IF NOT EXISTS idx_check_ins_timestamp ON check_ins(timestamp);
CREATE INDEX IF NOT EXISTS idx_check_ins_synced ON check_ins(synced_to_cloud);
"#;
