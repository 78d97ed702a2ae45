use std::borrow::Cow;

/// Route level formatting options.
///
/// Options are fixed when a template is created and are shared, unchanged,
/// by every template derived from it.
///
/// With the `serde` feature options can be loaded from configuration, every
/// missing field falling back to its default:
///
/// ```
/// # #[cfg(feature = "serde")] {
/// let opts: pathmold::RouteOpts = serde_json::from_str(r#"{ "delimiter": "." }"#).unwrap();
///
/// assert_eq!(opts.delimiter, ".");
/// assert_eq!(opts.prefix, "/");
/// assert_eq!(opts.suffix, "");
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteOpts {
    /// Separator between path segments. Defaults to `/`.
    pub delimiter: String,
    /// Text every path has to start with. Defaults to `/`.
    pub prefix: String,
    /// Text every path has to end with. Defaults to an empty string.
    pub suffix: String,
}

impl RouteOpts {
    pub const DEFAULT_DELIMITER: &'static str = "/";
    pub const DEFAULT_PREFIX: &'static str = "/";
    pub const DEFAULT_SUFFIX: &'static str = "";

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Strip prefix and suffix from `path` and split the rest into segments.
    ///
    /// An empty remainder has no segments at all. An empty delimiter never
    /// splits, so the whole remainder is a single segment.
    pub(crate) fn segments<'p>(&self, path: &'p str) -> Option<Vec<&'p str>> {
        let inner = path
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?;

        let segments = if inner.is_empty() {
            vec![]
        } else if self.delimiter.is_empty() {
            vec![inner]
        } else {
            inner.split(self.delimiter.as_str()).collect()
        };

        Some(segments)
    }

    /// Join tokens with delimiter and wrap them in prefix and suffix.
    pub(crate) fn assemble(&self, tokens: &[Cow<'_, str>]) -> String {
        let mut output = String::with_capacity(
            self.prefix.len()
                + self.suffix.len()
                + tokens.iter().map(|t| t.len() + self.delimiter.len()).sum::<usize>(),
        );

        output.push_str(&self.prefix);
        for (idx, token) in tokens.iter().enumerate() {
            if idx > 0 {
                output.push_str(&self.delimiter);
            }
            output.push_str(token);
        }
        output.push_str(&self.suffix);

        output
    }
}

impl Default for RouteOpts {
    fn default() -> Self {
        Self {
            delimiter: Self::DEFAULT_DELIMITER.to_owned(),
            prefix: Self::DEFAULT_PREFIX.to_owned(),
            suffix: Self::DEFAULT_SUFFIX.to_owned(),
        }
    }
}
