use chrono::{DateTime, Utc};
use std::fmt::Display;

/// Dynamically typed value of a single captured parameter.
///
/// This is what converters produce when they are used through the
/// [`DynParamType`](crate::DynParamType) seam, and what route templates
/// store in their match results.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Plain string value.
    Str(String),
    /// Signed integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Point in time (UTC).
    DateTime(DateTime<Utc>),
    /// Ordered sequence of values (array params and rest captures).
    List(Vec<Value>),
}

impl Value {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::DateTime(_) => "datetime",
            Self::List(_) => "list",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Check, if value is an ordered sequence.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

/// Typed view of a [`Value`].
///
/// Implemented for every output type of the built-in converters, which lets
/// them plug into route templates through [`DynParamType`](crate::DynParamType).
pub trait ParamValue: Sized {
    fn into_value(self) -> Value;

    /// Extract typed value, returning [`None`] if `value` has a different shape.
    fn from_value(value: &Value) -> Option<Self>;
}

impl ParamValue for String {
    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl ParamValue for i64 {
    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }
}

impl ParamValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }
}

impl ParamValue for DateTime<Utc> {
    fn into_value(self) -> Value {
        Value::DateTime(self)
    }

    // Serialized timestamps arrive either as epoch millis or as RFC 3339 text.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::DateTime(dt) => Some(*dt),
            Value::Int(millis) => DateTime::from_timestamp_millis(*millis),
            Value::Str(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        }
    }
}

impl<T: ParamValue> ParamValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(ParamValue::into_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_list()?.iter().map(T::from_value).collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::DateTime(dt) => serde::Serialize::serialize(dt, serializer),
            Self::List(items) => serializer.collect_seq(items),
        }
    }
}
