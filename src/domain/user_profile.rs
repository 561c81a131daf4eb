use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::calendar;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Premium,
}

impl SubscriptionTier {
    pub fn limits(&self) -> TierLimits {
        match self {
            SubscriptionTier::Free => FREE_TIER_LIMITS,
            SubscriptionTier::Premium => PREMIUM_TIER_LIMITS,
        }
    }
}

/// Weekly AI quotas. `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierLimits {
    pub insights_per_week: Option<u32>,
    pub chat_messages_per_week: Option<u32>,
}

impl TierLimits {
    pub fn allows_insight(&self, used: u32) -> bool {
        self.insights_per_week.is_none_or(|max| used < max)
    }

    pub fn allows_chat_message(&self, used: u32) -> bool {
        self.chat_messages_per_week.is_none_or(|max| used < max)
    }
}

pub const FREE_TIER_LIMITS: TierLimits = TierLimits {
    insights_per_week: Some(5),
    chat_messages_per_week: Some(0),
};

pub const PREMIUM_TIER_LIMITS: TierLimits = TierLimits {
    insights_per_week: None,
    chat_messages_per_week: None,
};

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub subscription_tier: SubscriptionTier,
    /// Ids from the wellness goal catalog.
    pub wellness_goals: Vec<String>,
    pub check_in_streak: u32,
    pub last_check_in_date: Option<DateTime<Utc>>,
    pub premium_expires_at: Option<DateTime<Utc>>,
}

/// New profile on the free tier with no goals and no streak.
///
/// The id is supplied by the caller because it comes from the identity provider.
pub fn create_user_profile(
    id: impl Into<String>,
    email: impl Into<String>,
    display_name: impl Into<String>,
) -> UserProfile {
    UserProfile {
        id: id.into(),
        email: email.into(),
        display_name: display_name.into(),
        created_at: calendar::now(),
        subscription_tier: SubscriptionTier::Free,
        wellness_goals: Vec::new(),
        check_in_streak: 0,
        last_check_in_date: None,
        premium_expires_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_defaults() {
        let user = create_user_profile("uid-1", "a@b.c", "Ada");
        assert_eq!(user.id, "uid-1");
        assert_eq!(user.subscription_tier, SubscriptionTier::Free);
        assert!(user.wellness_goals.is_empty());
        assert_eq!(user.check_in_streak, 0);
        assert!(user.last_check_in_date.is_none());
        assert!(user.premium_expires_at.is_none());
    }

    #[test]
    fn tier_wire_names() {
        assert_eq!(
            serde_json::to_string(&SubscriptionTier::Premium).unwrap(),
            "\"premium\""
        );
        let tier: SubscriptionTier = serde_json::from_str("\"free\"").unwrap();
        assert_eq!(tier, SubscriptionTier::Free);
        assert!(serde_json::from_str::<SubscriptionTier>("\"gold\"").is_err());
    }

    #[test]
    fn free_tier_quota() {
        let limits = SubscriptionTier::Free.limits();
        assert!(limits.allows_insight(4));
        assert!(!limits.allows_insight(5));
        assert!(!limits.allows_chat_message(0));
    }

    #[test]
    fn premium_is_unlimited() {
        let limits = SubscriptionTier::Premium.limits();
        assert!(limits.allows_insight(u32::MAX));
        assert!(limits.allows_chat_message(10_000));
    }
}
