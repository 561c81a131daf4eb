use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::shape::{Document, ShapeCheck};
use crate::domain::SubscriptionTier;

pub const AI_INSIGHTS_COLLECTION: &str = "aiInsights";
pub const AI_INSIGHTS_TABLE: &str = "ai_insights";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Daily,
    Weekly,
    Correlation,
    Chat,
}

impl InsightType {
    pub const ALL: [InsightType; 4] = [
        InsightType::Daily,
        InsightType::Weekly,
        InsightType::Correlation,
        InsightType::Chat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::Daily => "daily",
            InsightType::Weekly => "weekly",
            InsightType::Correlation => "correlation",
            InsightType::Chat => "chat",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct InsightMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u32>,
}

impl InsightMetadata {
    pub fn is_empty(&self) -> bool {
        self.model_used.is_none() && self.tokens_used.is_none() && self.response_time_ms.is_none()
    }
}

/// Cached AI response, also used to count weekly usage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiInsightDto {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_id: Option<String>,
    pub insight_text: String,
    pub insight_type: InsightType,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<InsightMetadata>,
}

impl Document for AiInsightDto {
    const COLLECTION: &'static str = AI_INSIGHTS_COLLECTION;

    fn required_fields(check: ShapeCheck<'_>) -> ShapeCheck<'_> {
        check
            .string("id")
            .string("user_id")
            .string("insight_text")
            .one_of("insight_type", &["daily", "weekly", "correlation", "chat"])
            .string("created_at")
    }
}

pub fn is_ai_insight_dto(value: &serde_json::Value) -> bool {
    AiInsightDto::is_valid(value)
}

/// Per-user, per-week AI usage counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiUsageDto {
    pub user_id: String,
    /// Monday of the week, ISO-8601.
    pub week_start: String,
    pub insights_count: u32,
    pub chat_messages_count: u32,
    pub subscription_tier: SubscriptionTier,
}

impl AiUsageDto {
    pub fn can_request_insight(&self) -> bool {
        self.subscription_tier
            .limits()
            .allows_insight(self.insights_count)
    }

    pub fn can_send_chat_message(&self) -> bool {
        self.subscription_tier
            .limits()
            .allows_chat_message(self.chat_messages_count)
    }
}

/// `ai_insights` row with metadata flattened into columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct AiInsightRow {
    pub id: String,
    pub user_id: String,
    pub check_in_id: Option<String>,
    pub insight_text: String,
    pub insight_type: String,
    pub created_at: String,
    pub model_used: Option<String>,
    pub tokens_used: Option<i64>,
    pub response_time_ms: Option<i64>,
}

pub const AI_INSIGHTS_TABLE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS ai_insights (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    check_in_id TEXT,
    insight_text TEXT NOT NULL,
    insight_type TEXT NOT NULL,
    created_at TEXT NOT NULL,
    model_used TEXT,
    tokens_used INTEGER,
    response_time_ms INTEGER
);

CREATE INDEX IF NOT EXISTS idx_ai_insights_user_id ON ai_insights(user_id);
CREATE INDEX IF NOT EXISTS idx_ai_insights_check_in_id ON ai_insights(check_in_id);
CREATE INDEX IF NOT EXISTS idx_ai_insights_type ON ai_insights(insight_type);
CREATE INDEX IF NOT EXISTS idx_ai_insights_created_at ON ai_insights(created_at);
"#;
