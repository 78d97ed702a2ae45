//! # `pathmold`: immutable, typed path templates
//!
//! A [`Route`] is an ordered sequence of [`Part`]s (literals, required and
//! optional parameters, and a trailing rest capture), built incrementally and
//! never mutated. The same template both matches incoming paths into
//! [`Params`] and renders [`Params`] back into paths.
//!
//! ```
//! use pathmold::{params, IntParam, Route, StrParam};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let route = Route::new()
//!     .extend(["a"])?
//!     .param("b", IntParam)?
//!     .opt("c", IntParam)?
//!     .rest(StrParam)?;
//!
//! assert_eq!(route.pattern(), "/a/:b/:c?/*");
//! assert_eq!(
//!     route.match_path("/a/1/2/x/y"),
//!     Some(params! { "b" => 1, "c" => 2, "rest" => vec!["x", "y"] })
//! );
//! assert_eq!(route.match_path("/a/one"), None);
//!
//! let path = route.render(&params! { "b" => 5, "rest" => Vec::<String>::new() })?;
//! assert_eq!(path, "/a/5");
//! # Ok(())
//! # }
//! ```
//!
//! ## Builder states
//!
//! Builder methods are only available in states where they make sense (see
//! [`state`]), so a required parameter after an optional one, or anything
//! after a rest capture, is rejected by the compiler. Errors that can only
//! be detected at runtime (duplicate names, literals containing the
//! delimiter, unparseable fallbacks) are reported as [`BuildError`].
//!
//! ## Features
//!
//! * `serde` (default): [`Route::render_serialize`] and
//!   [`Route::match_into`], for rendering from and matching into plain Rust
//!   structures, and serde support for [`RouteOpts`].

mod error;
mod matcher;
mod opts;
mod params;
mod part;
mod pattern;
mod render;
mod route;
pub mod state;

#[cfg(feature = "serde")]
mod deserializer;
#[cfg(feature = "serde")]
pub mod serializer;

pub use error::{BuildError, RenderError};
pub use opts::RouteOpts;
pub use params::Params;
pub use part::{Capture, Part};
pub use pattern::parse_pattern;
pub use route::{Route, DEFAULT_REST_NAME};
pub use state::{Closed, Open, Optional};

pub use converters::*;

#[cfg(feature = "serde")]
pub use deserializer::{DeError, ValueDeserializer};
#[cfg(feature = "serde")]
pub use serializer::{to_params, ParamsSerializer, SerializeError};
#[cfg(feature = "serde")]
pub use serde;
