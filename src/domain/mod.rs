//! In-memory entities and the pure helpers that operate on them.

pub mod calendar;
pub mod check_in;
pub mod habit;
pub mod ids;
pub mod user_profile;
pub mod wellness_goal;

pub use check_in::{
    CheckInScores, DailyCheckIn, NewCheckIn, create_daily_check_in, validate_check_in_scores,
};
pub use habit::{
    HABIT_TEMPLATES, Habit, HabitTemplate, Streak, calculate_streak, calculate_streak_on,
    create_habit, create_habit_from_template, is_completed_today,
};
pub use ids::{IdGenerator, TimestampIds};
pub use user_profile::{
    FREE_TIER_LIMITS, PREMIUM_TIER_LIMITS, SubscriptionTier, TierLimits, UserProfile,
    create_user_profile,
};
pub use wellness_goal::{
    GOAL_CATALOG, GoalCatalog, WELLNESS_GOALS, WellnessCategory, WellnessGoal,
    get_goal_by_id, get_goals_by_category,
};
