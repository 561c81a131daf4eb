use chrono::{DateTime, Utc};

use crate::db::models::{HabitCompletionRow, HabitDto, HabitRow};
use crate::domain::Habit;
use crate::domain::calendar::{self, parse_date_string, parse_iso, to_iso};
use crate::error::WellnessResult;
use crate::mappers::{DocumentCodec, bool_to_row, int_from_doc, int_from_row};
use serde_json::Number;

pub struct HabitMapper;

impl DocumentCodec for HabitMapper {
    type Entity = Habit;
    type Dto = HabitDto;

    fn to_dto(entity: &Habit) -> HabitDto {
        HabitDto {
            id: entity.id.clone(),
            user_id: entity.user_id.clone(),
            name: entity.name.clone(),
            icon: entity.icon.clone(),
            color: entity.color.clone(),
            created_at: to_iso(&entity.created_at),
            completed_dates: entity.completed_dates.iter().map(to_iso).collect(),
            current_streak: Number::from(entity.current_streak),
            longest_streak: Number::from(entity.longest_streak),
            is_active: entity.is_active,
            reminder_time: entity.reminder_time.clone(),
        }
    }

    fn to_domain(dto: &HabitDto) -> WellnessResult<Habit> {
        let completed_dates = dto
            .completed_dates
            .iter()
            .map(|d| parse_iso("completed_dates", d))
            .collect::<WellnessResult<Vec<_>>>()?;
        Ok(Habit {
            id: dto.id.clone(),
            user_id: dto.user_id.clone(),
            name: dto.name.clone(),
            icon: dto.icon.clone(),
            color: dto.color.clone(),
            created_at: parse_iso("created_at", &dto.created_at)?,
            completed_dates,
            current_streak: int_from_doc("current_streak", &dto.current_streak)?,
            longest_streak: int_from_doc("longest_streak", &dto.longest_streak)?,
            is_active: dto.is_active,
            reminder_time: dto.reminder_time.clone(),
        })
    }
}

impl HabitMapper {
    /// Parent row only; pair with [`Self::completed_dates_to_sqlite_rows`].
    /// New rows always start unsynced.
    pub fn to_sqlite_row(entity: &Habit) -> HabitRow {
        HabitRow {
            id: entity.id.clone(),
            user_id: entity.user_id.clone(),
            name: entity.name.clone(),
            icon: entity.icon.clone(),
            color: entity.color.clone(),
            created_at: to_iso(&entity.created_at),
            current_streak: i64::from(entity.current_streak),
            longest_streak: i64::from(entity.longest_streak),
            is_active: bool_to_row(entity.is_active),
            reminder_time: entity.reminder_time.clone(),
            synced_to_cloud: 0,
        }
    }

    /// One row per completion, keyed by local calendar day. Time of day is
    /// dropped.
    pub fn completed_dates_to_sqlite_rows(
        habit_id: &str,
        dates: &[DateTime<Utc>],
    ) -> Vec<HabitCompletionRow> {
        dates
            .iter()
            .map(|date| HabitCompletionRow {
                habit_id: habit_id.to_string(),
                completed_date: Self::format_date_string(date),
            })
            .collect()
    }

    /// Rebuilds a habit from its row and the completion rows the caller
    /// fetched for it. Each completion becomes local midnight of its day.
    pub fn from_sqlite_row(
        habit_row: &HabitRow,
        completion_rows: &[HabitCompletionRow],
    ) -> WellnessResult<Habit> {
        let completed_dates = completion_rows
            .iter()
            .map(|row| {
                parse_date_string("completed_date", &row.completed_date)
                    .map(calendar::local_midnight)
            })
            .collect::<WellnessResult<Vec<_>>>()?;
        Ok(Habit {
            id: habit_row.id.clone(),
            user_id: habit_row.user_id.clone(),
            name: habit_row.name.clone(),
            icon: habit_row.icon.clone(),
            color: habit_row.color.clone(),
            created_at: parse_iso("created_at", &habit_row.created_at)?,
            completed_dates,
            current_streak: int_from_row("current_streak", habit_row.current_streak)?,
            longest_streak: int_from_row("longest_streak", habit_row.longest_streak)?,
            is_active: habit_row.is_active != 0,
            reminder_time: habit_row.reminder_time.clone(),
        })
    }

    pub fn format_date_string(date: &DateTime<Utc>) -> String {
        calendar::format_date_string(calendar::local_day(date))
    }

    pub fn today_string() -> String {
        calendar::today_string()
    }
}
