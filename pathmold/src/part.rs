use converters::DynParamType;
use std::sync::Arc;

/// A single part of a route template.
#[derive(Debug, Clone)]
pub enum Part {
    /// Exact segment text.
    Literal(String),
    /// Parameter that has to be present and parseable.
    Required(Capture),
    /// Parameter that may be missing. When `fallback` is set, a missing
    /// segment is replaced by it before parsing.
    Optional {
        capture: Capture,
        fallback: Option<String>,
    },
    /// Capture of all remaining segments. Always the last part.
    Rest(Capture),
}

impl Part {
    /// Get parameter name (if part is a capture).
    pub fn name(&self) -> Option<&str> {
        self.capture().map(Capture::name)
    }

    pub fn capture(&self) -> Option<&Capture> {
        match self {
            Self::Literal(_) => None,
            Self::Required(capture) | Self::Optional { capture, .. } | Self::Rest(capture) => {
                Some(capture)
            }
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Required(_) => "required",
            Self::Optional { .. } => "optional",
            Self::Rest(_) => "rest",
        }
    }
}

/// Named parameter together with its converter.
#[derive(Debug, Clone)]
pub struct Capture {
    name: String,
    converter: Arc<dyn DynParamType>,
}

impl Capture {
    pub(crate) fn new(name: String, converter: Arc<dyn DynParamType>) -> Self {
        Self { name, converter }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn converter(&self) -> &dyn DynParamType {
        self.converter.as_ref()
    }
}
