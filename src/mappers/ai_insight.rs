use crate::db::models::{AiInsightDto, AiInsightRow, InsightMetadata, InsightType};
use crate::domain::calendar::parse_iso;
use crate::error::{ShapeError, WellnessResult};
use crate::mappers::int_from_row;

/// `aiInsights` document <-> `ai_insights` row. Metadata is nested in the
/// document and spread over three nullable columns in the row.
pub struct AiInsightMapper;

impl AiInsightMapper {
    pub fn to_sqlite_row(dto: &AiInsightDto) -> AiInsightRow {
        let meta = dto.metadata.clone().unwrap_or_default();
        AiInsightRow {
            id: dto.id.clone(),
            user_id: dto.user_id.clone(),
            check_in_id: dto.check_in_id.clone(),
            insight_text: dto.insight_text.clone(),
            insight_type: dto.insight_type.as_str().to_string(),
            created_at: dto.created_at.clone(),
            model_used: meta.model_used,
            tokens_used: meta.tokens_used.map(i64::from),
            response_time_ms: meta.response_time_ms.map(i64::from),
        }
    }

    pub fn from_sqlite_row(row: &AiInsightRow) -> WellnessResult<AiInsightDto> {
        parse_iso("created_at", &row.created_at)?;
        let insight_type = InsightType::parse(&row.insight_type).ok_or_else(|| {
            ShapeError::single("insight_type", format!("unknown type {:?}", row.insight_type))
        })?;
        let metadata = InsightMetadata {
            model_used: row.model_used.clone(),
            tokens_used: row
                .tokens_used
                .map(|v| int_from_row("tokens_used", v))
                .transpose()?,
            response_time_ms: row
                .response_time_ms
                .map(|v| int_from_row("response_time_ms", v))
                .transpose()?,
        };
        Ok(AiInsightDto {
            id: row.id.clone(),
            user_id: row.user_id.clone(),
            check_in_id: row.check_in_id.clone(),
            insight_text: row.insight_text.clone(),
            insight_type,
            created_at: row.created_at.clone(),
            metadata: (!metadata.is_empty()).then_some(metadata),
        })
    }
}
