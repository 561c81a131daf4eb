use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::db::shape::{Document, ShapeCheck};
use crate::domain::SubscriptionTier;

pub const USERS_COLLECTION: &str = "users";

/// `users` document. Timestamps are ISO-8601 strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub created_at: String,
    pub subscription_tier: SubscriptionTier,
    pub wellness_goals: Vec<String>,
    pub check_in_streak: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_check_in_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_expires_at: Option<String>,
}

impl Document for UserDto {
    const COLLECTION: &'static str = USERS_COLLECTION;

    fn required_fields(check: ShapeCheck<'_>) -> ShapeCheck<'_> {
        check
            .string("id")
            .string("email")
            .string("display_name")
            .string("created_at")
            .one_of("subscription_tier", &["free", "premium"])
            .array("wellness_goals")
            .number("check_in_streak")
    }
}

pub fn is_user_dto(value: &serde_json::Value) -> bool {
    UserDto::is_valid(value)
}
