use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WellnessCategory {
    MentalHealth,
    PhysicalHealth,
    Sleep,
    Productivity,
    Relationships,
    Mindfulness,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WellnessGoal {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: WellnessCategory,
}

pub const WELLNESS_GOALS: &[WellnessGoal] = &[
    WellnessGoal {
        id: "reduce-stress",
        name: "Reduce Stress",
        description: "Learn techniques to manage and reduce daily stress",
        icon: "😌",
        category: WellnessCategory::MentalHealth,
    },
    WellnessGoal {
        id: "better-sleep",
        name: "Better Sleep",
        description: "Improve sleep quality and establish healthy sleep habits",
        icon: "😴",
        category: WellnessCategory::Sleep,
    },
    WellnessGoal {
        id: "boost-energy",
        name: "Boost Energy",
        description: "Increase daily energy levels and reduce fatigue",
        icon: "⚡",
        category: WellnessCategory::PhysicalHealth,
    },
    WellnessGoal {
        id: "improve-mood",
        name: "Improve Mood",
        description: "Enhance emotional well-being and maintain positive mindset",
        icon: "😊",
        category: WellnessCategory::MentalHealth,
    },
    WellnessGoal {
        id: "build-habits",
        name: "Build Healthy Habits",
        description: "Create and maintain positive daily routines",
        icon: "✅",
        category: WellnessCategory::Productivity,
    },
    WellnessGoal {
        id: "mindfulness",
        name: "Practice Mindfulness",
        description: "Develop present-moment awareness and meditation practice",
        icon: "🧘",
        category: WellnessCategory::Mindfulness,
    },
    WellnessGoal {
        id: "work-life-balance",
        name: "Work-Life Balance",
        description: "Find harmony between professional and personal life",
        icon: "⚖️",
        category: WellnessCategory::Productivity,
    },
    WellnessGoal {
        id: "self-care",
        name: "Self-Care",
        description: "Prioritize personal well-being and self-compassion",
        icon: "💆",
        category: WellnessCategory::MentalHealth,
    },
];

/// Read-only index over a goal list, keyed by id and by category.
pub struct GoalCatalog {
    goals: &'static [WellnessGoal],
    by_id: HashMap<&'static str, usize>,
    by_category: HashMap<WellnessCategory, Vec<usize>>,
}

impl GoalCatalog {
    pub fn new(goals: &'static [WellnessGoal]) -> Self {
        let mut by_id = HashMap::with_capacity(goals.len());
        let mut by_category: HashMap<WellnessCategory, Vec<usize>> = HashMap::new();
        for (idx, goal) in goals.iter().enumerate() {
            by_id.insert(goal.id, idx);
            by_category.entry(goal.category).or_default().push(idx);
        }
        Self {
            goals,
            by_id,
            by_category,
        }
    }

    pub fn all(&self) -> &'static [WellnessGoal] {
        self.goals
    }

    pub fn get(&self, id: &str) -> Option<&'static WellnessGoal> {
        let goals = self.goals;
        self.by_id.get(id).map(|&idx| &goals[idx])
    }

    /// Goals in catalog order.
    pub fn by_category(&self, category: WellnessCategory) -> Vec<&'static WellnessGoal> {
        let goals = self.goals;
        self.by_category
            .get(&category)
            .map(|idxs| idxs.iter().map(|&idx| &goals[idx]).collect())
            .unwrap_or_default()
    }
}

pub static GOAL_CATALOG: LazyLock<GoalCatalog> = LazyLock::new(|| GoalCatalog::new(WELLNESS_GOALS));

pub fn get_goals_by_category(category: WellnessCategory) -> Vec<&'static WellnessGoal> {
    GOAL_CATALOG.by_category(category)
}

pub fn get_goal_by_id(id: &str) -> Option<&'static WellnessGoal> {
    GOAL_CATALOG.get(id)
}
