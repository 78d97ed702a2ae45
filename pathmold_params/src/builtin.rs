use crate::param_type::ParamType;
use chrono::{DateTime, Utc};

/// Identity converter for plain string segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrParam;

impl ParamType for StrParam {
    type Output = String;

    fn parse(&self, raw: &str) -> Option<String> {
        Some(raw.to_owned())
    }

    fn stringify(&self, value: &String) -> String {
        value.clone()
    }
}

/// Base-10 integer converter.
///
/// Parsing is lenient in the same way as most `parseInt` implementations:
/// leading whitespace is skipped and the longest leading run of digits (with
/// an optional sign) is taken, so `"12abc"` parses as `12`. Input without any
/// leading digits, or a number not fitting into [`i64`], is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntParam;

impl ParamType for IntParam {
    type Output = i64;

    fn parse(&self, raw: &str) -> Option<i64> {
        let raw = raw.trim_start();
        let sign_len = usize::from(raw.starts_with(['+', '-']));
        let digits_len = raw[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();

        if digits_len == 0 {
            return None;
        }

        raw[..sign_len + digits_len].parse().ok()
    }

    fn stringify(&self, value: &i64) -> String {
        value.to_string()
    }
}

/// Decimal floating point converter.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatParam;

impl ParamType for FloatParam {
    type Output = f64;

    fn parse(&self, raw: &str) -> Option<f64> {
        raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    fn stringify(&self, value: &f64) -> String {
        value.to_string()
    }
}

/// Timestamp converter, encoding points in time as milliseconds since the
/// Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeParam;

impl ParamType for DateTimeParam {
    type Output = DateTime<Utc>;

    fn parse(&self, raw: &str) -> Option<DateTime<Utc>> {
        let millis = raw.trim().parse::<i64>().ok()?;
        DateTime::from_timestamp_millis(millis)
    }

    fn stringify(&self, value: &DateTime<Utc>) -> String {
        value.timestamp_millis().to_string()
    }
}
