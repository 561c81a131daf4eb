//! Calendar-day and timestamp helpers shared by entities and mappers.
//!
//! Days are always taken in the evaluator's local time zone; timestamps are
//! carried as UTC and written as ISO-8601 with millisecond precision.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, SecondsFormat, SubsecRound, TimeZone, Utc};

use crate::error::{WellnessError, WellnessResult};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Current instant truncated to the precision the wire formats keep.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Calendar day of `ts` in local time.
pub fn local_day(ts: &DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

/// Start of `day` in local time, as a UTC instant.
pub fn local_midnight(day: NaiveDate) -> DateTime<Utc> {
    let naive = day.and_time(NaiveTime::MIN);
    match naive.and_local_timezone(Local).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // midnight skipped by a DST jump
        None => Utc.from_utc_datetime(&naive),
    }
}

pub fn format_date_string(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub fn today_string() -> String {
    format_date_string(today())
}

pub fn parse_date_string(field: &'static str, value: &str) -> WellnessResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DAY_FORMAT).map_err(|_| WellnessError::malformed(field, value))
}

pub fn to_iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_iso(field: &'static str, value: &str) -> WellnessResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| WellnessError::malformed(field, value))
}

pub fn parse_iso_opt(
    field: &'static str,
    value: Option<&str>,
) -> WellnessResult<Option<DateTime<Utc>>> {
    value.map(|v| parse_iso(field, v)).transpose()
}
