use serde::{Deserialize, Serialize};
use serde_json::Number;
use sqlx::FromRow;

use crate::db::shape::{Document, ShapeCheck};

pub const HABITS_COLLECTION: &str = "habits";
pub const HABITS_TABLE: &str = "habits";
pub const HABIT_COMPLETIONS_TABLE: &str = "habit_completions";

/// `habits` document. `completed_dates` holds full ISO-8601 timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HabitDto {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub created_at: String,
    pub completed_dates: Vec<String>,
    pub current_streak: Number,
    pub longest_streak: Number,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
}

impl Document for HabitDto {
    const COLLECTION: &'static str = HABITS_COLLECTION;

    fn required_fields(check: ShapeCheck<'_>) -> ShapeCheck<'_> {
        check
            .string("id")
            .string("user_id")
            .string("name")
            .string("icon")
            .string("color")
            .string("created_at")
            .array("completed_dates")
            .number("current_streak")
            .number("longest_streak")
            .boolean("is_active")
    }
}

pub fn is_habit_dto(value: &serde_json::Value) -> bool {
    HabitDto::is_valid(value)
}

/// `habits` row. Completions live in [`HabitCompletionRow`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct HabitRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub created_at: String,
    pub current_streak: i64,
    pub longest_streak: i64,
    pub is_active: i64,
    pub reminder_time: Option<String>,
    pub synced_to_cloud: i64,
}

/// One completed day of one habit; unique per `(habit_id, completed_date)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct HabitCompletionRow {
    pub habit_id: String,
    /// `YYYY-MM-DD`
    pub completed_date: String,
}

pub const HABITS_TABLE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS habits (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    name TEXT NOT NULL,
    icon TEXT NOT NULL,
    color TEXT NOT NULL,
    created_at TEXT NOT NULL,
    current_streak INTEGER NOT NULL DEFAULT 0,
    longest_streak INTEGER NOT NULL DEFAULT 0,
    is_active INTEGER NOT NULL DEFAULT 1,
    reminder_time TEXT,
    synced_to_cloud INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS habit_completions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    habit_id TEXT NOT NULL,
    completed_date TEXT NOT NULL,
    created_at TEXT DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (habit_id) REFERENCES habits(id) ON DELETE CASCADE,
    UNIQUE(habit_id, completed_date)
);

CREATE INDEX IF NOT EXISTS idx_habits_user_id ON habits(user_id);
CREATE INDEX IF NOT EXISTS idx_habits_is_active ON habits(is_active);
CREATE INDEX IF NOT EXISTS idx_habit_completions_habit_id ON habit_completions(habit_id);
CREATE INDEX IF NOT EXISTS idx_habit_completions_date ON habit_completions(completed_date);
"#;
