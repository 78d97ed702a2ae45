//! Errors of template construction and rendering.
//!
//! Matching has no error type: a path that doesn't fit a template simply
//! yields [`None`] from [`Route::match_path`](crate::Route::match_path).

use thiserror::Error;

/// Errors raised while building a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Parameter names can't be empty.
    #[error("parameter name can't be empty")]
    EmptyName,
    /// Parameter names share one flat namespace and must be unique.
    #[error("duplicate parameter name `{0}`")]
    DuplicateName(String),
    /// A literal containing the delimiter could never match a single segment.
    #[error("literal `{literal}` contains path delimiter `{delimiter}`")]
    DelimiterInLiteral { literal: String, delimiter: String },
    /// Fallback value of an optional parameter was rejected by its converter.
    #[error("fallback `{fallback}` of parameter `{name}` is rejected by its converter")]
    InvalidFallback { name: String, fallback: String },
    /// Parameter name in a parsed pattern wasn't a valid ident.
    #[error("`{0}` is not a valid parameter ident")]
    InvalidIdent(String),
    /// Parts of a parsed pattern were in an illegal order.
    #[error("{part} part can't follow {after} part")]
    SequenceViolation {
        part: &'static str,
        after: &'static str,
    },
}

/// Errors raised while rendering params into a path.
///
/// These always point at a mistake of the caller, so the offending
/// parameter name is included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// No value was provided for a required parameter.
    #[error("missing required value for `{0}`")]
    MissingValue(String),
    /// Value of a rest capture wasn't a list.
    #[error("expected array for `{0}`")]
    ExpectedSequence(String),
    /// Value had a shape the parameter's converter can't stringify.
    #[error("value of `{name}` ({kind}) is not accepted by its converter")]
    TypeMismatch { name: String, kind: &'static str },
}
