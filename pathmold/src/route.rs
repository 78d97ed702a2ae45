use crate::error::BuildError;
use crate::opts::RouteOpts;
use crate::part::{Capture, Part};
use crate::state::{AcceptsOptional, Closed, Open, Optional};
use converters::DynParamType;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;

type Result<T> = std::result::Result<T, BuildError>;

/// Name of a rest capture, appended with [`Route::rest`].
pub const DEFAULT_REST_NAME: &str = "rest";

/// Immutable route template.
///
/// Templates are built incrementally: every builder method returns a new
/// template, sharing options with its predecessor, and leaves the
/// predecessor untouched and usable. The builder state `S` (see
/// [`state`](crate::state)) makes illegal sequences, like a required
/// parameter after an optional one, fail to compile.
///
/// ```
/// use pathmold::{IntParam, Route, StrParam};
///
/// # fn main() -> Result<(), pathmold::BuildError> {
/// let users = Route::new().extend(["users"])?;
/// let user = users.param("id", IntParam)?.opt("tab", StrParam)?;
///
/// assert_eq!(user.pattern(), "/users/:id/:tab?");
/// assert_eq!(users.pattern(), "/users");
///
/// let params = user.match_path("/users/42").unwrap();
/// assert_eq!(params.get_as::<i64>("id"), Some(42));
/// assert!(!params.contains("tab"));
/// # Ok(())
/// # }
/// ```
pub struct Route<S = Open> {
    opts: Arc<RouteOpts>,
    parts: Arc<[Part]>,
    state: PhantomData<fn() -> S>,
}

impl Route<Open> {
    /// Create empty template with default options.
    pub fn new() -> Self {
        Self::with_opts(RouteOpts::default())
    }

    /// Create empty template with custom options.
    pub fn with_opts(opts: RouteOpts) -> Self {
        Self::from_parts(Arc::new(opts), Vec::<Part>::new().into())
    }

    /// Create template starting with a single literal.
    pub fn starting_at(literal: impl Into<String>, opts: RouteOpts) -> Result<Self> {
        Self::with_opts(opts).extend([literal])
    }

    /// Append literal segments.
    pub fn extend<I>(&self, literals: I) -> Result<Route<Open>>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let literals = literals
            .into_iter()
            .map(|literal| {
                let literal = literal.into();
                check_literal(&self.opts, &literal)?;
                Ok(Part::Literal(literal))
            })
            .collect::<Result<Vec<_>>>()?;

        self.successor(literals)
    }

    /// Append required parameter.
    pub fn param<P>(&self, name: impl Into<String>, converter: P) -> Result<Route<Open>>
    where
        P: DynParamType + 'static,
    {
        let capture = new_capture(name.into(), converter)?;
        self.successor(vec![Part::Required(capture)])
    }
}

impl Default for Route<Open> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AcceptsOptional> Route<S> {
    /// Append optional parameter.
    ///
    /// A missing segment leaves the parameter out of match results, but a
    /// present segment that fails to parse still rejects the whole path.
    pub fn opt<P>(&self, name: impl Into<String>, converter: P) -> Result<Route<Optional>>
    where
        P: DynParamType + 'static,
    {
        let capture = new_capture(name.into(), converter)?;
        self.successor(vec![Part::Optional {
            capture,
            fallback: None,
        }])
    }

    /// Append optional parameter with a fallback value.
    ///
    /// When the segment is missing, `fallback` is parsed in its place, so the
    /// parameter is always present in match results. A present segment that
    /// fails to parse rejects the path; it never falls back. `fallback`
    /// itself has to be accepted by `converter`.
    pub fn opt_or<P>(
        &self,
        name: impl Into<String>,
        converter: P,
        fallback: impl Into<String>,
    ) -> Result<Route<Optional>>
    where
        P: DynParamType + 'static,
    {
        let capture = new_capture(name.into(), converter)?;
        let fallback = fallback.into();

        if capture.converter().parse_value(&fallback).is_none() {
            return Err(rejected(BuildError::InvalidFallback {
                name: capture.name().to_owned(),
                fallback,
            }));
        }

        self.successor(vec![Part::Optional {
            capture,
            fallback: Some(fallback),
        }])
    }

    /// Append rest capture, named [`DEFAULT_REST_NAME`].
    pub fn rest<P>(&self, converter: P) -> Result<Route<Closed>>
    where
        P: DynParamType + 'static,
    {
        self.rest_named(DEFAULT_REST_NAME, converter)
    }

    /// Append rest capture with custom name.
    ///
    /// Rest capture consumes every remaining segment, parsing each one with
    /// `converter`.
    pub fn rest_named<P>(&self, name: impl Into<String>, converter: P) -> Result<Route<Closed>>
    where
        P: DynParamType + 'static,
    {
        let capture = new_capture(name.into(), converter)?;
        self.successor(vec![Part::Rest(capture)])
    }
}

impl<S> Route<S> {
    pub(crate) fn from_parts(opts: Arc<RouteOpts>, parts: Arc<[Part]>) -> Self {
        Self {
            opts,
            parts,
            state: PhantomData,
        }
    }

    pub fn opts(&self) -> &RouteOpts {
        &self.opts
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Get names of all parameters, in template order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(Part::name)
    }

    /// Check, if template ends with a rest capture.
    pub fn has_rest(&self) -> bool {
        matches!(self.parts.last(), Some(Part::Rest(_)))
    }

    fn successor<T>(&self, appended: Vec<Part>) -> Result<Route<T>> {
        for name in appended.iter().filter_map(Part::name) {
            if self.param_names().any(|existing| existing == name) {
                return Err(rejected(BuildError::DuplicateName(name.to_owned())));
            }
        }

        let parts = self.parts.iter().cloned().chain(appended).collect();

        Ok(Route::from_parts(Arc::clone(&self.opts), parts))
    }
}

impl<S> Clone for Route<S> {
    fn clone(&self) -> Self {
        Self::from_parts(Arc::clone(&self.opts), Arc::clone(&self.parts))
    }
}

impl<S> Debug for Route<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("state", &std::any::type_name::<S>())
            .field("opts", &self.opts)
            .field("parts", &self.parts)
            .finish()
    }
}

pub(crate) fn check_literal(opts: &RouteOpts, literal: &str) -> Result<()> {
    if !opts.delimiter.is_empty() && literal.contains(opts.delimiter.as_str()) {
        Err(rejected(BuildError::DelimiterInLiteral {
            literal: literal.to_owned(),
            delimiter: opts.delimiter.clone(),
        }))
    } else {
        Ok(())
    }
}

fn new_capture<P>(name: String, converter: P) -> Result<Capture>
where
    P: DynParamType + 'static,
{
    if name.is_empty() {
        return Err(rejected(BuildError::EmptyName));
    }

    Ok(Capture::new(name, Arc::new(converter)))
}

pub(crate) fn rejected(err: BuildError) -> BuildError {
    tracing::debug!(error = %err, "route template rejected");
    err
}
