use crate::db::models::{
    AI_INSIGHTS_TABLE, AiInsightDto, AiInsightRow, CHECK_INS_TABLE, CheckInRow,
    HABIT_COMPLETIONS_TABLE, HABITS_TABLE, HabitCompletionRow, HabitRow,
};
use crate::db::schema;
use crate::domain::{DailyCheckIn, Habit};
use crate::error::WellnessResult;
use crate::mappers::{AiInsightMapper, CheckInMapper, HabitMapper};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

const CHECK_IN_COLUMNS: &str = "id, user_id, timestamp, mood_score, energy_score, sleep_hours, \
     sleep_quality, notes, ai_insight, is_morning, synced_to_cloud";

const HABIT_COLUMNS: &str = "id, user_id, name, icon, color, created_at, current_streak, \
     longest_streak, is_active, reminder_time, synced_to_cloud";

const AI_INSIGHT_COLUMNS: &str = "id, user_id, check_in_id, insight_text, insight_type, \
     created_at, model_used, tokens_used, response_time_ms";

/// Local SQLite store. Executes SQL only; every row goes through a mapper.
#[derive(Clone)]
pub struct LocalStore {
    pool: SqlitePool,
}

impl LocalStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> WellnessResult<Self> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    /// Private in-memory database on a single pinned connection.
    pub async fn in_memory() -> WellnessResult<Self> {
        let connect_opts = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_opts)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> WellnessResult<()> {
        let mut applied = 0usize;
        for stmt in schema::statements() {
            sqlx::query(stmt).execute(&self.pool).await?;
            applied += 1;
        }
        info!(statements = applied, "local schema initialized");
        Ok(())
    }

    /// Insert or replace by id.
    pub async fn upsert_check_in(&self, check_in: &DailyCheckIn) -> WellnessResult<()> {
        let row = CheckInMapper::to_sqlite_row(check_in);
        let sql = format!(
            r#"
            INSERT INTO {CHECK_INS_TABLE} ({CHECK_IN_COLUMNS})
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                user_id=excluded.user_id,
                timestamp=excluded.timestamp,
                mood_score=excluded.mood_score,
                energy_score=excluded.energy_score,
                sleep_hours=excluded.sleep_hours,
                sleep_quality=excluded.sleep_quality,
                notes=excluded.notes,
                ai_insight=excluded.ai_insight,
                is_morning=excluded.is_morning,
                synced_to_cloud=excluded.synced_to_cloud
            "#
        );
        sqlx::query(&sql)
            .bind(&row.id)
            .bind(&row.user_id)
            .bind(&row.timestamp)
            .bind(row.mood_score)
            .bind(row.energy_score)
            .bind(row.sleep_hours)
            .bind(row.sleep_quality)
            .bind(&row.notes)
            .bind(&row.ai_insight)
            .bind(row.is_morning)
            .bind(row.synced_to_cloud)
            .execute(&self.pool)
            .await?;
        debug!(id = %row.id, user_id = %row.user_id, "check-in stored");
        Ok(())
    }

    pub async fn get_check_in(&self, id: &str) -> WellnessResult<Option<DailyCheckIn>> {
        let sql = format!("SELECT {CHECK_IN_COLUMNS} FROM {CHECK_INS_TABLE} WHERE id = ?");
        let row: Option<CheckInRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(CheckInMapper::from_sqlite_row).transpose()
    }

    /// Newest first.
    pub async fn list_check_ins_for_user(&self, user_id: &str) -> WellnessResult<Vec<DailyCheckIn>> {
        let sql = format!(
            "SELECT {CHECK_IN_COLUMNS} FROM {CHECK_INS_TABLE} WHERE user_id = ? ORDER BY timestamp DESC"
        );
        let rows: Vec<CheckInRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(CheckInMapper::from_sqlite_row).collect()
    }

    /// Oldest first, so uploads replay in order.
    pub async fn list_unsynced_check_ins(&self) -> WellnessResult<Vec<DailyCheckIn>> {
        let sql = format!(
            "SELECT {CHECK_IN_COLUMNS} FROM {CHECK_INS_TABLE} WHERE synced_to_cloud = 0 ORDER BY timestamp"
        );
        let rows: Vec<CheckInRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(CheckInMapper::from_sqlite_row).collect()
    }

    /// Returns false if no such check-in exists.
    pub async fn mark_check_in_synced(&self, id: &str) -> WellnessResult<bool> {
        let sql = format!("UPDATE {CHECK_INS_TABLE} SET synced_to_cloud = 1 WHERE id = ?");
        let res = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(res.rows_affected() > 0)
    }

    /// Writes the habit row and replaces its completion rows in one
    /// transaction. Repeated calendar days collapse to one row.
    pub async fn upsert_habit(&self, habit: &Habit) -> WellnessResult<()> {
        let row = HabitMapper::to_sqlite_row(habit);
        let completions = HabitMapper::completed_dates_to_sqlite_rows(&habit.id, &habit.completed_dates);

        let upsert = format!(
            r#"
            INSERT INTO {HABITS_TABLE} ({HABIT_COLUMNS})
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                user_id=excluded.user_id,
                name=excluded.name,
                icon=excluded.icon,
                color=excluded.color,
                created_at=excluded.created_at,
                current_streak=excluded.current_streak,
                longest_streak=excluded.longest_streak,
                is_active=excluded.is_active,
                reminder_time=excluded.reminder_time,
                synced_to_cloud=excluded.synced_to_cloud
            "#
        );
        let clear = format!("DELETE FROM {HABIT_COMPLETIONS_TABLE} WHERE habit_id = ?");
        let insert = format!(
            "INSERT OR IGNORE INTO {HABIT_COMPLETIONS_TABLE} (habit_id, completed_date) VALUES (?, ?)"
        );

        let mut tx = self.pool.begin().await?;
        sqlx::query(&upsert)
            .bind(&row.id)
            .bind(&row.user_id)
            .bind(&row.name)
            .bind(&row.icon)
            .bind(&row.color)
            .bind(&row.created_at)
            .bind(row.current_streak)
            .bind(row.longest_streak)
            .bind(row.is_active)
            .bind(&row.reminder_time)
            .bind(row.synced_to_cloud)
            .execute(&mut *tx)
            .await?;

        sqlx::query(&clear).bind(&row.id).execute(&mut *tx).await?;

        for completion in &completions {
            sqlx::query(&insert)
                .bind(&completion.habit_id)
                .bind(&completion.completed_date)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        debug!(
            id = %row.id,
            completions = completions.len(),
            "habit stored"
        );
        Ok(())
    }

    pub async fn get_habit(&self, id: &str) -> WellnessResult<Option<Habit>> {
        let sql = format!("SELECT {HABIT_COLUMNS} FROM {HABITS_TABLE} WHERE id = ?");
        let row: Option<HabitRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => {
                let completions = self.load_completions(&row.id).await?;
                Ok(Some(HabitMapper::from_sqlite_row(&row, &completions)?))
            }
            None => Ok(None),
        }
    }

    pub async fn list_active_habits(&self, user_id: &str) -> WellnessResult<Vec<Habit>> {
        let sql = format!(
            "SELECT {HABIT_COLUMNS} FROM {HABITS_TABLE} WHERE user_id = ? AND is_active = 1 ORDER BY created_at"
        );
        let rows: Vec<HabitRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        let mut habits = Vec::with_capacity(rows.len());
        for row in rows {
            let completions = self.load_completions(&row.id).await?;
            habits.push(HabitMapper::from_sqlite_row(&row, &completions)?);
        }
        Ok(habits)
    }

    pub async fn mark_habit_synced(&self, id: &str) -> WellnessResult<bool> {
        let sql = format!("UPDATE {HABITS_TABLE} SET synced_to_cloud = 1 WHERE id = ?");
        let res = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(res.rows_affected() > 0)
    }

    /// Completion rows go with it through the foreign-key cascade.
    pub async fn delete_habit(&self, id: &str) -> WellnessResult<bool> {
        let sql = format!("DELETE FROM {HABITS_TABLE} WHERE id = ?");
        let res = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        debug!(id, deleted = res.rows_affected(), "habit delete");
        Ok(res.rows_affected() > 0)
    }

    async fn load_completions(&self, habit_id: &str) -> WellnessResult<Vec<HabitCompletionRow>> {
        let sql = format!(
            "SELECT habit_id, completed_date FROM {HABIT_COMPLETIONS_TABLE} \
             WHERE habit_id = ? ORDER BY completed_date"
        );
        let rows: Vec<HabitCompletionRow> = sqlx::query_as(&sql)
            .bind(habit_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn insert_ai_insight(&self, insight: &AiInsightDto) -> WellnessResult<()> {
        let row = AiInsightMapper::to_sqlite_row(insight);
        let sql = format!(
            "INSERT INTO {AI_INSIGHTS_TABLE} ({AI_INSIGHT_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"
        );
        sqlx::query(&sql)
            .bind(&row.id)
            .bind(&row.user_id)
            .bind(&row.check_in_id)
            .bind(&row.insight_text)
            .bind(&row.insight_type)
            .bind(&row.created_at)
            .bind(&row.model_used)
            .bind(row.tokens_used)
            .bind(row.response_time_ms)
            .execute(&self.pool)
            .await?;
        debug!(id = %row.id, insight_type = %row.insight_type, "insight cached");
        Ok(())
    }

    /// Newest first.
    pub async fn list_ai_insights_for_user(&self, user_id: &str) -> WellnessResult<Vec<AiInsightDto>> {
        let sql = format!(
            "SELECT {AI_INSIGHT_COLUMNS} FROM {AI_INSIGHTS_TABLE} WHERE user_id = ? ORDER BY created_at DESC"
        );
        let rows: Vec<AiInsightRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(AiInsightMapper::from_sqlite_row).collect()
    }
}
