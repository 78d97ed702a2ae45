//! Builder states of a [`Route`](crate::Route).
//!
//! Each state narrows the builder methods available on a template:
//!
//! | state        | `extend` / `param` | `opt` / `opt_or` | `rest` |
//! |--------------|--------------------|------------------|--------|
//! | [`Open`]     | yes                | yes              | yes    |
//! | [`Optional`] | no                 | yes              | yes    |
//! | [`Closed`]   | no                 | no               | no     |
//!
//! Matching, rendering and pattern display work in every state.
//!
//! ```
//! use pathmold::{IntParam, Route, StrParam};
//!
//! let route = Route::new()
//!     .extend(["a"]).unwrap()
//!     .param("b", IntParam).unwrap()
//!     .opt("c", StrParam).unwrap()
//!     .opt("d", StrParam).unwrap()
//!     .rest(StrParam).unwrap();
//!
//! assert_eq!(route.pattern(), "/a/:b/:c?/:d?/*");
//! ```
//!
//! A required parameter can't follow an optional one:
//!
//! ```compile_fail
//! use pathmold::{IntParam, Route, StrParam};
//!
//! let route = Route::new().opt("a", StrParam).unwrap();
//! let _ = route.param("b", IntParam);
//! ```
//!
//! Neither can a literal:
//!
//! ```compile_fail
//! use pathmold::{Route, StrParam};
//!
//! let route = Route::new().opt("a", StrParam).unwrap();
//! let _ = route.extend(["b"]);
//! ```
//!
//! Nothing follows a rest capture:
//!
//! ```compile_fail
//! use pathmold::{Route, StrParam};
//!
//! let route = Route::new().rest(StrParam).unwrap();
//! let _ = route.param("a", StrParam);
//! ```
//!
//! ```compile_fail
//! use pathmold::{Route, StrParam};
//!
//! let route = Route::new().rest(StrParam).unwrap();
//! let _ = route.extend(["a"]);
//! ```
//!
//! ```compile_fail
//! use pathmold::{Route, StrParam};
//!
//! let route = Route::new().rest(StrParam).unwrap();
//! let _ = route.opt("a", StrParam);
//! ```
//!
//! ```compile_fail
//! use pathmold::{Route, StrParam};
//!
//! let route = Route::new().rest(StrParam).unwrap();
//! let _ = route.opt_or("a", StrParam, "x");
//! ```
//!
//! ```compile_fail
//! use pathmold::{Route, StrParam};
//!
//! let route = Route::new().rest(StrParam).unwrap();
//! let _ = route.rest_named("tail", StrParam);
//! ```
//!
//! ```compile_fail
//! use pathmold::{Route, StrParam};
//!
//! let route = Route::new().rest(StrParam).unwrap();
//! let _ = route.rest(StrParam);
//! ```
//!
//! A template parsed from a pattern is closed as well:
//!
//! ```compile_fail
//! use pathmold::{Closed, Route, StrParam};
//!
//! let route: Route<Closed> = "/a/:b".parse().unwrap();
//! let _ = route.param("c", StrParam);
//! ```

mod sealed {
    pub trait Sealed {}
}

/// Marker trait for route builder states.
pub trait RouteState: sealed::Sealed + 'static {}

/// States that still accept optional parameters and a rest capture.
pub trait AcceptsOptional: RouteState {}

/// Only literals and required parameters so far.
#[derive(Debug, Clone, Copy)]
pub enum Open {}

/// At least one optional parameter was appended.
#[derive(Debug, Clone, Copy)]
pub enum Optional {}

/// Template is complete: a rest capture was appended, or the template was
/// parsed from a pattern.
#[derive(Debug, Clone, Copy)]
pub enum Closed {}

impl sealed::Sealed for Open {}
impl sealed::Sealed for Optional {}
impl sealed::Sealed for Closed {}

impl RouteState for Open {}
impl RouteState for Optional {}
impl RouteState for Closed {}

impl AcceptsOptional for Open {}
impl AcceptsOptional for Optional {}
