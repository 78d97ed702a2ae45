use crate::param_type::ParamType;
use std::borrow::Cow;

/// Converter for delimited lists of values of another converter.
///
/// `"1,2,3"` with `ArrayParam::new(IntParam)` parses into `[1, 2, 3]`. An
/// empty string parses into an empty list, and a list with any unparseable
/// element is rejected as a whole. Array converters compose, so an
/// `ArrayParam` may wrap another one with a different delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayParam<P> {
    inner: P,
    delimiter: Cow<'static, str>,
}

impl<P> ArrayParam<P> {
    pub const DEFAULT_DELIMITER: &'static str = ",";

    /// Create array converter, splitting elements on `,`.
    pub const fn new(inner: P) -> Self {
        Self {
            inner,
            delimiter: Cow::Borrowed(Self::DEFAULT_DELIMITER),
        }
    }

    /// Create array converter with custom element delimiter.
    pub fn with_delimiter(inner: P, delimiter: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            delimiter: delimiter.into(),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl<P: ParamType> ParamType for ArrayParam<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, raw: &str) -> Option<Self::Output> {
        if raw.is_empty() {
            return Some(vec![]);
        }

        raw.split(&*self.delimiter)
            .map(|item| self.inner.parse(item))
            .collect()
    }

    fn stringify(&self, value: &Self::Output) -> String {
        value
            .iter()
            .map(|item| self.inner.stringify(item))
            .collect::<Vec<_>>()
            .join(&*self.delimiter)
    }
}
