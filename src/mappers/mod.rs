//! Stateless converters between entities and their storage shapes.
//!
//! Each entity has a document codec (cloud store, via [`DocumentCodec`]) and,
//! where a local table exists, inherent `to_sqlite_row` / `from_sqlite_row`
//! functions on its mapper. Encoding is total; decoding fails on malformed
//! timestamps or integers that do not fit the entity's field.

pub mod ai_insight;
pub mod check_in;
pub mod habit;
pub mod user;

use serde_json::{Number, Value};
use tracing::warn;

use crate::db::shape::Document;
use crate::error::{ShapeError, WellnessResult};

pub use ai_insight::AiInsightMapper;
pub use check_in::CheckInMapper;
pub use habit::HabitMapper;
pub use user::UserMapper;

pub trait DocumentCodec {
    type Entity;
    type Dto: Document;

    fn to_dto(entity: &Self::Entity) -> Self::Dto;

    fn to_domain(dto: &Self::Dto) -> WellnessResult<Self::Entity>;

    fn to_dto_array(entities: &[Self::Entity]) -> Vec<Self::Dto> {
        entities.iter().map(Self::to_dto).collect()
    }

    /// Stops at the first element that fails to decode.
    fn to_domain_array(dtos: &[Self::Dto]) -> WellnessResult<Vec<Self::Entity>> {
        dtos.iter().map(Self::to_domain).collect()
    }
}

/// Shape-checks a raw document and converts it to its entity.
pub fn decode_document<C: DocumentCodec>(value: &Value) -> WellnessResult<C::Entity> {
    let dto = <C::Dto as Document>::validate(value).inspect_err(|e| {
        warn!(
            collection = <C::Dto as Document>::COLLECTION,
            error = %e,
            "document failed shape check"
        );
    })?;
    C::to_domain(&dto)
}

pub fn encode_document<C: DocumentCodec>(entity: &C::Entity) -> WellnessResult<Value> {
    Ok(serde_json::to_value(C::to_dto(entity))?)
}

pub(crate) fn int_from_row<T: TryFrom<i64>>(field: &'static str, value: i64) -> WellnessResult<T> {
    T::try_from(value).map_err(|_| ShapeError::single(field, format!("{value} out of range")).into())
}

/// Whole number from a document field. Stores that keep every number as a
/// double hand back `7.0` for `7`, so an integral float is accepted.
pub(crate) fn int_from_doc<T: TryFrom<i64>>(
    field: &'static str,
    value: &Number,
) -> WellnessResult<T> {
    let whole = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    });
    match whole {
        Some(n) => int_from_row(field, n),
        None => Err(ShapeError::single(field, format!("{value} is not a whole number")).into()),
    }
}

pub(crate) fn bool_to_row(b: bool) -> i64 {
    if b { 1 } else { 0 }
}
