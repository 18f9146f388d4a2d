//! Coercion of untrusted `time` values into whole minutes.

use log::warn;
use serde_json::Value;

/// Minutes substituted when a `time` value is not numeric.
pub const DEFAULT_SUB_TASK_MINUTES: u32 = 15;

/// Coerces a raw `time` value into minutes.
///
/// Integer numbers are used as-is and fractional numbers truncate toward
/// zero. Strings are read as a base-10 integer prefix after leading
/// whitespace, so `"45"` and `"45 min"` both give 45. Anything else,
/// including a missing value, gives [`DEFAULT_SUB_TASK_MINUTES`].
///
/// Negative integers are clamped to 0 and values beyond `u32::MAX` saturate.
pub fn coerce_minutes(value: Option<&Value>) -> u32 {
    match value.and_then(parse_minutes) {
        Some(minutes) if minutes < 0 => {
            warn!("Negative sub-task time {minutes} clamped to 0");
            0
        }
        Some(minutes) => u32::try_from(minutes).unwrap_or(u32::MAX),
        None => DEFAULT_SUB_TASK_MINUTES,
    }
}

fn parse_minutes(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|_| i64::MAX))
            .or_else(|| number.as_f64().map(|float| float.trunc() as i64)),
        Value::String(text) => parse_integer_prefix(text),
        _ => None,
    }
}

/// Reads an optionally signed run of ASCII digits at the start of `text`.
fn parse_integer_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
