//! Typed path parameter converters, used by `pathmold` crate.
//!
//! A converter is a pair of pure functions between a raw path segment and a
//! typed value: `parse` (which returns [`None`] for input it can't make sense
//! of) and `stringify` (which never fails for a valid value). Converters are
//! stateless and can be freely shared between templates.
//!
//! ```
//! use pathmold_params::{ArrayParam, IntParam, ParamType};
//!
//! let ids = ArrayParam::new(IntParam);
//!
//! assert_eq!(ids.parse("1,2,3"), Some(vec![1, 2, 3]));
//! assert_eq!(ids.parse(""), Some(vec![]));
//! assert_eq!(ids.parse("1,b,3"), None);
//! assert_eq!(ids.stringify(&vec![4, 5]), "4,5");
//! ```

pub mod array;
pub mod builtin;
pub mod encoded;
pub mod param_type;
pub mod value;

pub use array::ArrayParam;
pub use builtin::{DateTimeParam, FloatParam, IntParam, StrParam};
pub use encoded::EncodedParam;
pub use param_type::{DynParamType, ParamType};
pub use value::{ParamValue, Value};

pub use chrono;
