use bloom_data::db::Document;
use bloom_data::db::models::{CHECKINS_COLLECTION, CheckInDto, HabitDto, UserDto};
use bloom_data::domain::{
    Habit, SubscriptionTier, TimestampIds, create_habit, create_user_profile, get_goal_by_id,
};
use bloom_data::mappers::{CheckInMapper, HabitMapper, UserMapper};
use bloom_data::{DocumentCodec, WellnessError, decode_document, encode_document};
use chrono::Duration;
use serde_json::json;

#[test]
fn user_survives_a_trip_through_json() {
    let mut user = create_user_profile("uid-42", "sam@example.com", "Sam");
    user.subscription_tier = SubscriptionTier::Premium;
    user.wellness_goals = vec!["reduce-stress".into(), "better-sleep".into()];
    user.premium_expires_at = Some(user.created_at + Duration::days(30));
    assert!(
        user.wellness_goals
            .iter()
            .all(|id| get_goal_by_id(id).is_some())
    );

    let value = encode_document::<UserMapper>(&user).expect("encode");
    assert_eq!(value["subscription_tier"], json!("premium"));
    assert_eq!(value["display_name"], json!("Sam"));
    assert!(value.get("last_check_in_date").is_none());

    let back = decode_document::<UserMapper>(&value).expect("decode");
    assert_eq!(back, user);
}

#[test]
fn check_in_document_uses_snake_case_and_native_booleans() {
    let value = json!({
        "id": "checkin_1",
        "user_id": "u1",
        "timestamp": "2024-05-01T06:30:00.000Z",
        "mood_score": 9,
        "energy_score": 8,
        "sleep_hours": 8.5,
        "sleep_quality": 9,
        "notes": "great day",
        "is_morning": false,
        "synced_to_cloud": true
    });
    assert_eq!(<CheckInDto as Document>::COLLECTION, CHECKINS_COLLECTION);

    let entity = decode_document::<CheckInMapper>(&value).expect("decode");
    assert!(entity.synced_to_cloud);
    assert!(!entity.is_morning);
    assert_eq!(entity.notes.as_deref(), Some("great day"));

    let again = encode_document::<CheckInMapper>(&entity).expect("encode");
    assert_eq!(again, value);
}

#[test]
fn decode_reports_shape_problems_with_field_names() {
    let value = json!({
        "id": "h1",
        "user_id": "u1",
        "name": "Walk",
        "icon": "🚶",
        "color": "#000",
        "created_at": "2024-01-01T00:00:00.000Z",
        "completed_dates": [],
        "current_streak": "zero",
        "is_active": true
    });
    match decode_document::<HabitMapper>(&value) {
        Err(WellnessError::Shape(e)) => {
            assert!(e.has_field("current_streak"));
            assert!(e.has_field("longest_streak"));
            assert_eq!(e.violations.len(), 2);
        }
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[test]
fn habit_with_bad_completion_timestamp_fails_loudly() {
    let mut dto = HabitMapper::to_dto(&create_habit(&TimestampIds, "u1", "Walk", "🚶", "#000", None));
    dto.completed_dates.push("2024-02-30T00:00:00Z".into());
    let err = HabitMapper::to_domain(&dto).unwrap_err();
    assert!(matches!(
        err,
        WellnessError::MalformedTimestamp {
            field: "completed_dates",
            ..
        }
    ));
}

#[test]
fn array_mappers_preserve_length_and_order() {
    let habits: Vec<Habit> = (0..5)
        .map(|i| create_habit(&TimestampIds, "u1", format!("habit {i}"), "*", "#fff", None))
        .collect();
    let dtos: Vec<HabitDto> = HabitMapper::to_dto_array(&habits);
    assert_eq!(dtos.len(), habits.len());
    for (dto, habit) in dtos.iter().zip(&habits) {
        assert_eq!(dto.id, habit.id);
    }
    assert_eq!(HabitMapper::to_domain_array(&dtos).expect("decode"), habits);

    let empty: Vec<UserDto> = UserMapper::to_dto_array(&[]);
    assert!(empty.is_empty());
    assert!(UserMapper::to_domain_array(&[]).expect("decode").is_empty());
}

fn check_in_doc(mood: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "checkin_9",
        "user_id": "u1",
        "timestamp": "2024-05-02T07:00:00.000Z",
        "mood_score": mood,
        "energy_score": 6.0,
        "sleep_hours": 7,
        "sleep_quality": 7,
        "is_morning": true,
        "synced_to_cloud": false
    })
}

#[test]
fn whole_doubles_from_the_store_decode_as_integers() {
    let entity = decode_document::<CheckInMapper>(&check_in_doc(json!(7.0))).expect("decode");
    assert_eq!(entity.mood_score, 7);
    assert_eq!(entity.energy_score, 6);
    assert_eq!(entity.sleep_hours, 7.0);

    let again = encode_document::<CheckInMapper>(&entity).expect("encode");
    assert_eq!(again["mood_score"], json!(7));
}

#[test]
fn unrepresentable_scores_pass_the_guard_but_fail_on_the_named_field() {
    for mood in [json!(-1), json!(300), json!(7.5)] {
        let value = check_in_doc(mood.clone());
        assert!(bloom_data::db::models::is_check_in_dto(&value));
        match decode_document::<CheckInMapper>(&value) {
            Err(WellnessError::Shape(e)) => {
                assert!(e.has_field("mood_score"), "mood={mood}: {e}");
                assert_eq!(e.violations.len(), 1);
            }
            other => panic!("mood={mood}: expected shape error, got {other:?}"),
        }
    }
}

#[test]
fn negative_user_streak_is_well_shaped_but_not_decodable() {
    let mut value = encode_document::<UserMapper>(&create_user_profile("u1", "a@b.c", "Ada"))
        .expect("encode");
    value["check_in_streak"] = json!(-1);
    assert!(bloom_data::db::models::is_user_dto(&value));
    let err = decode_document::<UserMapper>(&value).unwrap_err();
    assert!(matches!(err, WellnessError::Shape(ref e) if e.has_field("check_in_streak")));
}
