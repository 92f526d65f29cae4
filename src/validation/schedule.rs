//! # Schedule Validation
//!
//! Cron grammar for `buildPeriodically` and `pollSCM`. Only syntactic validity
//! matters; the parsed schedule is discarded.

use std::borrow::Cow;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid cron expression '{expression}': {reason}")]
pub struct ScheduleError {
    pub expression: String,
    pub reason: String,
}

/// Validate a cron expression
///
/// Accepts standard five-field expressions (minute first), six or seven
/// fields (seconds first, optional year) and `@hourly`-style descriptors.
///
/// Five-field expressions use standard day-of-week numbering (0-7, Sunday is
/// both 0 and 7) and are rewritten to the `cron` crate's 1-7 numbering before
/// parsing. Six and seven field expressions are passed through unchanged, so
/// their day-of-week numbers follow the crate (Sunday = 1).
///
/// Differences from the Go `robfig/cron` parser: a trailing year field is
/// accepted, and `@every <duration>` is rejected.
///
/// # Errors
///
/// Returns an error if the expression does not parse.
pub fn validate_schedule(expression: &str) -> Result<(), ScheduleError> {
    let normalized = normalize(expression.trim());

    cron::Schedule::from_str(&normalized)
        .map(|_| ())
        .map_err(|e| ScheduleError {
            expression: expression.to_string(),
            reason: e.to_string(),
        })
}

/// Five-field expressions get a leading seconds field and a renumbered
/// day-of-week field
fn normalize(expression: &str) -> Cow<'_, str> {
    if expression.starts_with('@') {
        return Cow::Borrowed(expression);
    }

    let fields: Vec<&str> = expression.split_whitespace().collect();
    match fields.as_slice() {
        [minute, hour, day_of_month, month, day_of_week] => Cow::Owned(format!(
            "0 {minute} {hour} {day_of_month} {month} {}",
            day_of_week_field(day_of_week)
        )),
        _ => Cow::Borrowed(expression),
    }
}

/// Renumber a standard day-of-week field (Sunday = 0 or 7) to Sunday = 1
///
/// Names, `*` and out-of-range numbers are left for the parser to judge.
fn day_of_week_field(field: &str) -> String {
    field
        .split(',')
        .map(day_of_week_item)
        .collect::<Vec<_>>()
        .join(",")
}

fn day_of_week_item(item: &str) -> String {
    let (base, step) = match item.split_once('/') {
        Some((base, step)) => (base, Some(step)),
        None => (item, None),
    };

    let renumbered = match base.split_once('-') {
        // `5-7` is Friday through Sunday: Friday-Saturday plus Sunday
        Some((start, "7")) if step.is_none() => format!("{}-7,1", day_number(start)),
        Some((start, "7")) => format!("{}-7", day_number(start)),
        Some((start, end)) => format!("{}-{}", day_number(start), day_number(end)),
        None => day_number(base),
    };

    match step {
        Some(step) => format!("{renumbered}/{step}"),
        None => renumbered,
    }
}

fn day_number(value: &str) -> String {
    match value.parse::<u8>() {
        Ok(7) => "1".to_string(),
        Ok(day @ 0..=6) => (day + 1).to_string(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_schedules() {
        let valid = vec![
            "0 */2 * * *",     // every two hours
            "1 1 * * 7",       // weekly, Sunday as 7
            "0 0 * * 0",       // weekly, Sunday as 0
            "0 0 * * 0-6",     // every day of the week
            "0 0 * * 1,3,5",   // Monday, Wednesday, Friday
            "0 0 * * 5-7",     // Friday through Sunday
            "0 0 * * 0-6/2",   // stepped range
            "0 0 * * 1/2",     // stepped start
            "0 0 * * MON-FRI", // names
            "*/15 * * * *",    // every 15 minutes
            "0 0 12 * * *",    // six fields, seconds first
            "0 30 9 * * MON-FRI",
            "0 0 0 1 1 * 2030", // seven fields with year
            "@daily",
            "@hourly",
            "  0 */2 * * *  ", // surrounding whitespace
        ];

        for schedule in valid {
            assert!(
                validate_schedule(schedule).is_ok(),
                "Schedule '{}' should be valid: {:?}",
                schedule,
                validate_schedule(schedule).err()
            );
        }
    }

    #[test]
    fn test_invalid_schedules() {
        let invalid = vec![
            "",
            "   ",
            "not-a-cron",
            "* * * *",       // too few fields
            "61 * * * *",    // minute out of range
            "0 25 * * *",    // hour out of range
            "0 0 * * 8",     // day of week out of range
            "H/15 * * * *",  // Jenkins hash syntax
            "@sometimes",
            "@every 1h",
        ];

        for schedule in invalid {
            assert!(
                validate_schedule(schedule).is_err(),
                "Schedule '{}' should be invalid",
                schedule
            );
        }
    }

    #[test]
    fn test_five_field_day_of_week_is_renumbered() {
        assert_eq!(normalize("0 0 * * 0"), "0 0 0 * * 1");
        assert_eq!(normalize("0 0 * * 7"), "0 0 0 * * 1");
        assert_eq!(normalize("0 0 * * 0-6"), "0 0 0 * * 1-7");
        assert_eq!(normalize("0 0 * * 1,3,5"), "0 0 0 * * 2,4,6");
        assert_eq!(normalize("0 0 * * 5-7"), "0 0 0 * * 6-7,1");
        assert_eq!(normalize("0 0 * * */2"), "0 0 0 * * */2");
        assert_eq!(normalize("0 0 * * 1-5/2"), "0 0 0 * * 2-6/2");
        assert_eq!(normalize("0 0 * * SUN"), "0 0 0 * * SUN");
    }

    #[test]
    fn test_six_field_expressions_pass_through() {
        assert_eq!(normalize("0 0 0 * * 1"), "0 0 0 * * 1");
        assert_eq!(normalize("@weekly"), "@weekly");
    }

    #[test]
    fn test_error_mentions_expression() {
        let err = validate_schedule("not-a-cron").unwrap_err();
        assert_eq!(err.expression, "not-a-cron");
        assert!(err.to_string().contains("'not-a-cron'"));
    }
}
