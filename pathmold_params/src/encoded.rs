use crate::param_type::ParamType;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const FRAGMENTS: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Percent-encoded string converter.
///
/// Unlike [`StrParam`](crate::StrParam), values may contain the path
/// delimiter or any other reserved character: everything except ASCII
/// alphanumerics, `-` and `_` is escaped on the way out and unescaped on the
/// way in. Segments that don't decode into valid UTF-8 are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodedParam;

impl ParamType for EncodedParam {
    type Output = String;

    fn parse(&self, raw: &str) -> Option<String> {
        percent_decode_str(raw)
            .decode_utf8()
            .ok()
            .map(|decoded| decoded.into_owned())
    }

    fn stringify(&self, value: &String) -> String {
        utf8_percent_encode(value, FRAGMENTS).to_string()
    }
}
