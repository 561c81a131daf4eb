//! SQL DDL for initializing the local store.
//! SQLite-first; each table's statements are owned by its model module.

use crate::db::models::ai_insight::AI_INSIGHTS_TABLE_SCHEMA;
use crate::db::models::check_in::CHECK_INS_TABLE_SCHEMA;
use crate::db::models::habit::HABITS_TABLE_SCHEMA;

/// Applied in order; `habit_completions` references `habits`.
pub const SQLITE_INIT: &[&str] = &[
    CHECK_INS_TABLE_SCHEMA,
    HABITS_TABLE_SCHEMA,
    AI_INSIGHTS_TABLE_SCHEMA,
];

/// Individual statements, since sqlx runs one statement per query.
pub fn statements() -> impl Iterator<Item = &'static str> {
    SQLITE_INIT
        .iter()
        .flat_map(|schema| schema.split(';'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
