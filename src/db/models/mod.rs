//! Storage-facing shapes: snake_case documents for the cloud store and
//! primitive-only rows for the local SQLite store.

pub mod ai_insight;
pub mod check_in;
pub mod habit;
pub mod user;

pub use ai_insight::{
    AI_INSIGHTS_COLLECTION, AI_INSIGHTS_TABLE, AiInsightDto, AiInsightRow, AiUsageDto, InsightMetadata, InsightType,
    is_ai_insight_dto,
};
pub use check_in::{
    CHECK_INS_TABLE, CHECKINS_COLLECTION, CheckInDto, CheckInIndex, CheckInRow, is_check_in_dto,
};
pub use habit::{
    HABIT_COMPLETIONS_TABLE, HABITS_COLLECTION, HABITS_TABLE, HabitCompletionRow, HabitDto,
    HabitRow, is_habit_dto,
};
pub use user::{USERS_COLLECTION, UserDto, is_user_dto};
