//! Parser of human-readable route patterns.
//!
//! Accepts the same syntax [`Route::pattern`] produces:
//!
//! * `:name` for a required parameter,
//! * `:name?` for an optional parameter,
//! * `*` or `*name` for a rest capture (named `rest` by default),
//! * anything else for a literal.
//!
//! Parameters of parsed templates use [`StrParam`]. Parsed templates are
//! [`Closed`], as their builder state is only known at runtime.

use crate::error::BuildError;
use crate::opts::RouteOpts;
use crate::part::{Capture, Part};
use crate::route::{check_literal, rejected, Route, DEFAULT_REST_NAME};
use crate::state::Closed;
use converters::StrParam;
use std::str::FromStr;
use std::sync::Arc;

type Result<T> = std::result::Result<T, BuildError>;

/// Parse route pattern into template, splitting it with `opts`.
///
/// Prefix and suffix are stripped from `expr` if present, so `users/:id`
/// and `/users/:id` produce the same template with default options.
///
/// ```
/// use pathmold::{parse_pattern, RouteOpts};
///
/// let route = parse_pattern("/users/:id/:tab?", RouteOpts::default()).unwrap();
///
/// assert_eq!(route.pattern(), "/users/:id/:tab?");
/// assert!(route.match_path("/users/7").is_some());
/// ```
pub fn parse_pattern(expr: &str, opts: RouteOpts) -> Result<Route<Closed>> {
    let inner = expr.strip_prefix(opts.prefix.as_str()).unwrap_or(expr);
    let inner = inner.strip_suffix(opts.suffix.as_str()).unwrap_or(inner);

    let tokens: Vec<&str> = if inner.is_empty() {
        vec![]
    } else if opts.delimiter.is_empty() {
        vec![inner]
    } else {
        inner.split(opts.delimiter.as_str()).collect()
    };

    let mut parts: Vec<Part> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let part = classify(token)?;

        if let Some(prev) = parts.last() {
            assert_order(prev, &part)?;
        }

        if let Some(name) = part.name() {
            if parts.iter().any(|p| p.name() == Some(name)) {
                return Err(rejected(BuildError::DuplicateName(name.to_owned())));
            }
        }

        if let Part::Literal(literal) = &part {
            check_literal(&opts, literal)?;
        }

        parts.push(part);
    }

    Ok(Route::from_parts(Arc::new(opts), parts.into()))
}

impl FromStr for Route<Closed> {
    type Err = BuildError;

    /// Parse route pattern with default options.
    fn from_str(s: &str) -> Result<Self> {
        parse_pattern(s, RouteOpts::default())
    }
}

fn classify(token: &str) -> Result<Part> {
    if let Some(param) = token.strip_prefix(':') {
        match param.strip_suffix('?') {
            Some(name) => Ok(Part::Optional {
                capture: capture(name)?,
                fallback: None,
            }),
            None => Ok(Part::Required(capture(param)?)),
        }
    } else if let Some(name) = token.strip_prefix('*') {
        let name = if name.is_empty() { DEFAULT_REST_NAME } else { name };
        Ok(Part::Rest(capture(name)?))
    } else {
        Ok(Part::Literal(token.to_owned()))
    }
}

fn assert_order(prev: &Part, next: &Part) -> Result<()> {
    let violation = match prev {
        Part::Rest(_) => true,
        Part::Optional { .. } => matches!(next, Part::Literal(_) | Part::Required(_)),
        Part::Literal(_) | Part::Required(_) => false,
    };

    if violation {
        Err(rejected(BuildError::SequenceViolation {
            part: next.kind(),
            after: prev.kind(),
        }))
    } else {
        Ok(())
    }
}

fn capture(name: &str) -> Result<Capture> {
    if is_valid_ident(name) {
        Ok(Capture::new(name.to_owned(), Arc::new(StrParam)))
    } else {
        Err(rejected(BuildError::InvalidIdent(name.to_owned())))
    }
}

fn is_valid_ident(name: &str) -> bool {
    name.starts_with(|ch| char::is_alphabetic(ch) || ch == '_')
        && name.chars().all(|ch| ch.is_alphanumeric() || ch == '_')
}
