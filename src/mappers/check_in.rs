use crate::db::models::{CheckInDto, CheckInIndex, CheckInRow};
use crate::domain::DailyCheckIn;
use crate::domain::calendar::{self, parse_iso, to_iso};
use crate::error::WellnessResult;
use crate::mappers::{DocumentCodec, bool_to_row, int_from_doc, int_from_row};
use serde_json::Number;

pub struct CheckInMapper;

impl DocumentCodec for CheckInMapper {
    type Entity = DailyCheckIn;
    type Dto = CheckInDto;

    fn to_dto(entity: &DailyCheckIn) -> CheckInDto {
        CheckInDto {
            id: entity.id.clone(),
            user_id: entity.user_id.clone(),
            timestamp: to_iso(&entity.timestamp),
            mood_score: Number::from(entity.mood_score),
            energy_score: Number::from(entity.energy_score),
            sleep_hours: entity.sleep_hours,
            sleep_quality: Number::from(entity.sleep_quality),
            notes: entity.notes.clone(),
            ai_insight: entity.ai_insight.clone(),
            is_morning: entity.is_morning,
            synced_to_cloud: entity.synced_to_cloud,
        }
    }

    fn to_domain(dto: &CheckInDto) -> WellnessResult<DailyCheckIn> {
        Ok(DailyCheckIn {
            id: dto.id.clone(),
            user_id: dto.user_id.clone(),
            timestamp: parse_iso("timestamp", &dto.timestamp)?,
            mood_score: int_from_doc("mood_score", &dto.mood_score)?,
            energy_score: int_from_doc("energy_score", &dto.energy_score)?,
            sleep_hours: dto.sleep_hours,
            sleep_quality: int_from_doc("sleep_quality", &dto.sleep_quality)?,
            notes: dto.notes.clone(),
            ai_insight: dto.ai_insight.clone(),
            is_morning: dto.is_morning,
            synced_to_cloud: dto.synced_to_cloud,
        })
    }
}

impl CheckInMapper {
    pub fn to_sqlite_row(entity: &DailyCheckIn) -> CheckInRow {
        CheckInRow {
            id: entity.id.clone(),
            user_id: entity.user_id.clone(),
            timestamp: to_iso(&entity.timestamp),
            mood_score: i64::from(entity.mood_score),
            energy_score: i64::from(entity.energy_score),
            sleep_hours: entity.sleep_hours,
            sleep_quality: i64::from(entity.sleep_quality),
            notes: entity.notes.clone(),
            ai_insight: entity.ai_insight.clone(),
            is_morning: bool_to_row(entity.is_morning),
            synced_to_cloud: bool_to_row(entity.synced_to_cloud),
        }
    }

    pub fn from_sqlite_row(row: &CheckInRow) -> WellnessResult<DailyCheckIn> {
        Ok(DailyCheckIn {
            id: row.id.clone(),
            user_id: row.user_id.clone(),
            timestamp: parse_iso("timestamp", &row.timestamp)?,
            mood_score: int_from_row("mood_score", row.mood_score)?,
            energy_score: int_from_row("energy_score", row.energy_score)?,
            sleep_hours: row.sleep_hours,
            sleep_quality: int_from_row("sleep_quality", row.sleep_quality)?,
            notes: row.notes.clone(),
            ai_insight: row.ai_insight.clone(),
            is_morning: row.is_morning != 0,
            synced_to_cloud: row.synced_to_cloud != 0,
        })
    }

    /// Local `YYYY-MM-DD` of the check-in, for grouping by day.
    pub fn date_string(entity: &DailyCheckIn) -> String {
        calendar::format_date_string(calendar::local_day(&entity.timestamp))
    }

    pub fn to_index(entity: &DailyCheckIn) -> CheckInIndex {
        CheckInIndex {
            user_id: entity.user_id.clone(),
            date: Self::date_string(entity),
        }
    }
}
