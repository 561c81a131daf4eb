use crate::db::models::UserDto;
use crate::domain::UserProfile;
use crate::domain::calendar::{parse_iso, parse_iso_opt, to_iso};
use crate::error::WellnessResult;
use crate::mappers::{DocumentCodec, int_from_doc};
use serde_json::Number;

/// `UserProfile` <-> `users` document. There is no local table for profiles.
pub struct UserMapper;

impl DocumentCodec for UserMapper {
    type Entity = UserProfile;
    type Dto = UserDto;

    fn to_dto(entity: &UserProfile) -> UserDto {
        UserDto {
            id: entity.id.clone(),
            email: entity.email.clone(),
            display_name: entity.display_name.clone(),
            created_at: to_iso(&entity.created_at),
            subscription_tier: entity.subscription_tier,
            wellness_goals: entity.wellness_goals.clone(),
            check_in_streak: Number::from(entity.check_in_streak),
            last_check_in_date: entity.last_check_in_date.as_ref().map(to_iso),
            premium_expires_at: entity.premium_expires_at.as_ref().map(to_iso),
        }
    }

    fn to_domain(dto: &UserDto) -> WellnessResult<UserProfile> {
        Ok(UserProfile {
            id: dto.id.clone(),
            email: dto.email.clone(),
            display_name: dto.display_name.clone(),
            created_at: parse_iso("created_at", &dto.created_at)?,
            subscription_tier: dto.subscription_tier,
            wellness_goals: dto.wellness_goals.clone(),
            check_in_streak: int_from_doc("check_in_streak", &dto.check_in_streak)?,
            last_check_in_date: parse_iso_opt(
                "last_check_in_date",
                dto.last_check_in_date.as_deref(),
            )?,
            premium_expires_at: parse_iso_opt(
                "premium_expires_at",
                dto.premium_expires_at.as_deref(),
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SubscriptionTier, create_user_profile};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn optional_timestamps_are_only_written_when_set() {
        let user = create_user_profile("u1", "a@b.c", "Ada");
        let dto = UserMapper::to_dto(&user);
        assert!(dto.last_check_in_date.is_none());
        assert!(dto.premium_expires_at.is_none());
        assert_eq!(UserMapper::to_domain(&dto).unwrap(), user);
    }

    #[test]
    fn premium_user_round_trips() {
        let created = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap() + Duration::milliseconds(6);
        let user = UserProfile {
            id: "u2".into(),
            email: "p@b.c".into(),
            display_name: "Pat".into(),
            created_at: created,
            subscription_tier: SubscriptionTier::Premium,
            wellness_goals: vec!["better-sleep".into(), "mindfulness".into()],
            check_in_streak: 12,
            last_check_in_date: Some(created + Duration::days(30)),
            premium_expires_at: Some(created + Duration::days(365)),
        };
        let dto = UserMapper::to_dto(&user);
        assert_eq!(dto.created_at, "2024-01-02T03:04:05.006Z");
        assert_eq!(dto.wellness_goals, user.wellness_goals);
        assert_eq!(UserMapper::to_domain(&dto).unwrap(), user);
    }

    #[test]
    fn bad_optional_timestamp_is_reported() {
        let mut dto = UserMapper::to_dto(&create_user_profile("u1", "a@b.c", "Ada"));
        dto.premium_expires_at = Some("soon".into());
        assert!(UserMapper::to_domain(&dto).is_err());
    }
}
