use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::calendar;
use crate::domain::ids::IdGenerator;

const ID_PREFIX: &str = "habit";

#[derive(Debug, Clone, PartialEq)]
pub struct Habit {
    pub id: String,
    pub user_id: String,
    pub name: String,
    /// Icon name or emoji.
    pub icon: String,
    /// Hex color, e.g. `#4CAF50`.
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub completed_dates: Vec<DateTime<Utc>>,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub is_active: bool,
    /// `HH:mm`.
    pub reminder_time: Option<String>,
}

impl Habit {
    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completed_dates
            .iter()
            .any(|d| calendar::local_day(d) == day)
    }

    /// Refreshes both streak counters from `completed_dates`.
    /// `longest_streak` never goes down.
    pub fn recompute_streaks(&mut self, today: NaiveDate) {
        let streak = calculate_streak_on(&self.completed_dates, today);
        self.current_streak = streak.current;
        self.longest_streak = self.longest_streak.max(streak.longest);
    }

    /// Records a completion at `at` unless that calendar day is already
    /// present. Returns whether anything changed.
    pub fn complete_on(&mut self, at: DateTime<Utc>, today: NaiveDate) -> bool {
        if self.is_completed_on(calendar::local_day(&at)) {
            return false;
        }
        self.completed_dates.push(at);
        self.recompute_streaks(today);
        true
    }
}

pub fn is_completed_today(habit: &Habit) -> bool {
    habit.is_completed_on(calendar::today())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
}

pub fn calculate_streak(completed_dates: &[DateTime<Utc>]) -> Streak {
    calculate_streak_on(completed_dates, calendar::today())
}

/// Streaks relative to `today`.
///
/// Dates are reduced to local calendar days and deduplicated, so several
/// completions on one day count once. The current streak is zero unless the
/// latest day is today or yesterday.
pub fn calculate_streak_on(completed_dates: &[DateTime<Utc>], today: NaiveDate) -> Streak {
    let mut days: Vec<NaiveDate> = completed_dates.iter().map(calendar::local_day).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let Some(&most_recent) = days.first() else {
        return Streak::default();
    };

    let mut current: u32 = 0;
    if (today - most_recent).num_days() <= 1 {
        current = 1;
        for pair in days.windows(2) {
            if (pair[0] - pair[1]).num_days() != 1 {
                break;
            }
            current += 1;
        }
    }

    let mut longest: u32 = 1;
    let mut run: u32 = 1;
    for pair in days.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    Streak { current, longest }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HabitTemplate {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub suggested_reminder_time: Option<&'static str>,
}

pub const HABIT_TEMPLATES: &[HabitTemplate] = &[
    HabitTemplate {
        name: "Meditation",
        icon: "🧘",
        color: "#9C27B0",
        suggested_reminder_time: Some("07:00"),
    },
    HabitTemplate {
        name: "Exercise",
        icon: "💪",
        color: "#FF5722",
        suggested_reminder_time: Some("06:00"),
    },
    HabitTemplate {
        name: "Drink Water",
        icon: "💧",
        color: "#2196F3",
        suggested_reminder_time: Some("09:00"),
    },
    HabitTemplate {
        name: "Reading",
        icon: "📚",
        color: "#795548",
        suggested_reminder_time: Some("20:00"),
    },
    HabitTemplate {
        name: "Gratitude",
        icon: "🙏",
        color: "#4CAF50",
        suggested_reminder_time: Some("21:00"),
    },
];

pub fn create_habit(
    ids: &impl IdGenerator,
    user_id: impl Into<String>,
    name: impl Into<String>,
    icon: impl Into<String>,
    color: impl Into<String>,
    reminder_time: Option<String>,
) -> Habit {
    Habit {
        id: ids.new_id(ID_PREFIX),
        user_id: user_id.into(),
        name: name.into(),
        icon: icon.into(),
        color: color.into(),
        created_at: calendar::now(),
        completed_dates: Vec::new(),
        current_streak: 0,
        longest_streak: 0,
        is_active: true,
        reminder_time,
    }
}

pub fn create_habit_from_template(
    ids: &impl IdGenerator,
    user_id: impl Into<String>,
    template: &HabitTemplate,
) -> Habit {
    create_habit(
        ids,
        user_id,
        template.name,
        template.icon,
        template.color,
        template.suggested_reminder_time.map(str::to_string),
    )
}
