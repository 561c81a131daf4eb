use bloom_data::db::LocalStore;
use bloom_data::db::models::{AiInsightDto, InsightMetadata, InsightType};
use bloom_data::domain::calendar;
use bloom_data::domain::{
    DailyCheckIn, Habit, IdGenerator, NewCheckIn, create_daily_check_in, create_habit,
};
use chrono::{Duration, NaiveDate};
use std::sync::atomic::{AtomicU32, Ordering};

struct SeqIds(AtomicU32);

impl SeqIds {
    fn new() -> Self {
        Self(AtomicU32::new(0))
    }
}

impl IdGenerator for SeqIds {
    fn new_id(&self, prefix: &str) -> String {
        let n = self.0.fetch_add(1, Ordering::SeqCst);
        format!("{prefix}_{n}")
    }
}

async fn store() -> LocalStore {
    let store = LocalStore::in_memory().await.expect("open in-memory store");
    store.init_schema().await.expect("init schema");
    store
}

fn check_in(ids: &SeqIds, user: &str, mood: u8) -> DailyCheckIn {
    create_daily_check_in(
        ids,
        NewCheckIn {
            user_id: user.to_string(),
            mood_score: mood,
            energy_score: 6,
            sleep_hours: 7.25,
            sleep_quality: 7,
            is_morning: true,
            notes: None,
        },
    )
}

fn habit_with_days(ids: &SeqIds, user: &str, days: &[(i32, u32, u32)]) -> Habit {
    let mut habit = create_habit(ids, user, "Meditation", "🧘", "#9C27B0", Some("07:00".into()));
    habit.completed_dates = days
        .iter()
        .map(|&(y, m, d)| calendar::local_midnight(NaiveDate::from_ymd_opt(y, m, d).unwrap()))
        .collect();
    habit
}

#[tokio::test]
async fn schema_init_is_idempotent() {
    let store = store().await;
    store.init_schema().await.expect("second init");
}

#[tokio::test]
async fn check_in_round_trips_through_sqlite() {
    let store = store().await;
    let ids = SeqIds::new();
    let mut entry = check_in(&ids, "u1", 8);
    entry.notes = Some("long walk".into());

    store.upsert_check_in(&entry).await.expect("upsert");
    let loaded = store.get_check_in(&entry.id).await.expect("get");
    assert_eq!(loaded, Some(entry));

    assert!(store.get_check_in("missing").await.expect("get").is_none());
}

#[tokio::test]
async fn upsert_replaces_existing_check_in() {
    let store = store().await;
    let ids = SeqIds::new();
    let mut entry = check_in(&ids, "u1", 3);
    store.upsert_check_in(&entry).await.expect("insert");

    entry.ai_insight = Some("Rest more.".into());
    entry.mood_score = 4;
    store.upsert_check_in(&entry).await.expect("update");

    let all = store.list_check_ins_for_user("u1").await.expect("list");
    assert_eq!(all, vec![entry]);
}

#[tokio::test]
async fn user_listing_is_newest_first_and_scoped() {
    let store = store().await;
    let ids = SeqIds::new();
    let mut older = check_in(&ids, "u1", 5);
    older.timestamp -= Duration::days(1);
    let newer = check_in(&ids, "u1", 6);
    let other = check_in(&ids, "u2", 7);
    for c in [&older, &newer, &other] {
        store.upsert_check_in(c).await.expect("upsert");
    }

    let listed: Vec<String> = store
        .list_check_ins_for_user("u1")
        .await
        .expect("list")
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(listed, vec![newer.id.clone(), older.id.clone()]);
}

#[tokio::test]
async fn sync_flag_moves_check_ins_out_of_pending() {
    let store = store().await;
    let ids = SeqIds::new();
    let a = check_in(&ids, "u1", 5);
    let b = check_in(&ids, "u1", 6);
    store.upsert_check_in(&a).await.expect("upsert a");
    store.upsert_check_in(&b).await.expect("upsert b");

    assert_eq!(store.list_unsynced_check_ins().await.expect("pending").len(), 2);
    assert!(store.mark_check_in_synced(&a.id).await.expect("mark"));
    assert!(!store.mark_check_in_synced("nope").await.expect("mark"));

    let pending = store.list_unsynced_check_ins().await.expect("pending");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, b.id);

    let synced = store.get_check_in(&a.id).await.expect("get").expect("row");
    assert!(synced.synced_to_cloud);
}

#[tokio::test]
async fn habit_round_trips_with_completions() {
    let store = store().await;
    let ids = SeqIds::new();
    let habit = habit_with_days(&ids, "u1", &[(2024, 4, 1), (2024, 4, 2), (2024, 4, 4)]);

    store.upsert_habit(&habit).await.expect("upsert");
    let loaded = store.get_habit(&habit.id).await.expect("get");
    assert_eq!(loaded, Some(habit));
}

#[tokio::test]
async fn repeated_days_collapse_to_one_completion() {
    let store = store().await;
    let ids = SeqIds::new();
    let mut habit = habit_with_days(&ids, "u1", &[(2024, 4, 1)]);
    let same_day_evening = habit.completed_dates[0] + Duration::hours(19);
    habit.completed_dates.push(same_day_evening);

    store.upsert_habit(&habit).await.expect("upsert");
    let loaded = store.get_habit(&habit.id).await.expect("get").expect("habit");
    assert_eq!(loaded.completed_dates.len(), 1);
}

#[tokio::test]
async fn upsert_habit_replaces_completions() {
    let store = store().await;
    let ids = SeqIds::new();
    let mut habit = habit_with_days(&ids, "u1", &[(2024, 4, 1), (2024, 4, 2)]);
    store.upsert_habit(&habit).await.expect("first");

    habit.completed_dates.remove(0);
    habit.name = "Evening meditation".into();
    store.upsert_habit(&habit).await.expect("second");

    let loaded = store.get_habit(&habit.id).await.expect("get").expect("habit");
    assert_eq!(loaded, habit);
}

#[tokio::test]
async fn only_active_habits_are_listed() {
    let store = store().await;
    let ids = SeqIds::new();
    let active = habit_with_days(&ids, "u1", &[]);
    let mut paused = habit_with_days(&ids, "u1", &[(2024, 4, 1)]);
    paused.is_active = false;
    let foreign = habit_with_days(&ids, "u2", &[]);
    for h in [&active, &paused, &foreign] {
        store.upsert_habit(h).await.expect("upsert");
    }

    let listed = store.list_active_habits("u1").await.expect("list");
    assert_eq!(listed, vec![active]);
}

#[tokio::test]
async fn deleting_a_habit_cascades_to_completions() {
    let store = store().await;
    let ids = SeqIds::new();
    let habit = habit_with_days(&ids, "u1", &[(2024, 4, 1), (2024, 4, 2)]);
    store.upsert_habit(&habit).await.expect("upsert");
    assert!(store.mark_habit_synced(&habit.id).await.expect("mark"));

    assert!(store.delete_habit(&habit.id).await.expect("delete"));
    assert!(!store.delete_habit(&habit.id).await.expect("delete again"));

    let (remaining,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM habit_completions WHERE habit_id = ?")
            .bind(&habit.id)
            .fetch_one(store.pool())
            .await
            .expect("count");
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn ai_insights_are_cached_per_user() {
    let store = store().await;
    let first = AiInsightDto {
        id: "insight_1".into(),
        user_id: "u1".into(),
        check_in_id: Some("checkin_0".into()),
        insight_text: "Energy is higher on mornings after 7h+ sleep.".into(),
        insight_type: InsightType::Correlation,
        created_at: "2024-04-01T08:00:00.000Z".into(),
        metadata: Some(InsightMetadata {
            model_used: Some("small".into()),
            tokens_used: Some(220),
            response_time_ms: None,
        }),
    };
    let second = AiInsightDto {
        id: "insight_2".into(),
        check_in_id: None,
        insight_type: InsightType::Weekly,
        created_at: "2024-04-07T20:00:00.000Z".into(),
        metadata: None,
        ..first.clone()
    };
    store.insert_ai_insight(&first).await.expect("insert 1");
    store.insert_ai_insight(&second).await.expect("insert 2");

    let listed = store.list_ai_insights_for_user("u1").await.expect("list");
    assert_eq!(listed, vec![second, first]);
    assert!(store.list_ai_insights_for_user("u2").await.expect("list").is_empty());
}
