use crate::value::{ParamValue, Value};
use std::fmt::Debug;

/// Bidirectional converter between a raw path segment and a typed value.
///
/// # Contract
///
/// * `parse` never panics: unparseable input yields [`None`].
/// * `stringify` is total for every valid value.
/// * Both are pure, so a single converter may back any number of
///   parameters across any number of templates and threads.
pub trait ParamType: Debug + Send + Sync {
    type Output;

    fn parse(&self, raw: &str) -> Option<Self::Output>;

    fn stringify(&self, value: &Self::Output) -> String;
}

/// Object safe form of [`ParamType`], working with dynamic [`Value`]s.
///
/// Route templates keep their converters behind this trait, so parameters of
/// different types can live in one template. It is implemented for every
/// [`ParamType`] whose output is a [`ParamValue`].
pub trait DynParamType: Debug + Send + Sync {
    fn parse_value(&self, raw: &str) -> Option<Value>;

    /// Stringify dynamic value, returning [`None`] if its shape isn't
    /// accepted by this converter.
    fn stringify_value(&self, value: &Value) -> Option<String>;
}

impl<P> DynParamType for P
where
    P: ParamType,
    P::Output: ParamValue,
{
    fn parse_value(&self, raw: &str) -> Option<Value> {
        self.parse(raw).map(ParamValue::into_value)
    }

    fn stringify_value(&self, value: &Value) -> Option<String> {
        P::Output::from_value(value).map(|typed| self.stringify(&typed))
    }
}
