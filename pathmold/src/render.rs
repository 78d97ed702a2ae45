use crate::error::RenderError;
use crate::params::Params;
use crate::part::{Capture, Part};
use crate::route::{Route, DEFAULT_REST_NAME};
use converters::Value;
use std::borrow::Cow;
use std::fmt::Display;

type Result<T> = std::result::Result<T, RenderError>;

impl<S> Route<S> {
    /// Render `params` into a path.
    ///
    /// Missing optional parameters are skipped entirely. Values of names
    /// unknown to the template are ignored.
    ///
    /// ## Errors
    ///
    /// * [`RenderError::MissingValue`] if a required parameter has no value.
    /// * [`RenderError::ExpectedSequence`] if the rest capture has no value or
    ///   its value isn't a list.
    /// * [`RenderError::TypeMismatch`] if a value can't be stringified by the
    ///   parameter's converter.
    pub fn render(&self, params: &Params) -> Result<String> {
        let mut tokens = Vec::with_capacity(self.parts().len());

        for part in self.parts() {
            match part {
                Part::Literal(literal) => tokens.push(Cow::Borrowed(literal.as_str())),
                Part::Required(capture) => {
                    let value = params
                        .get(capture.name())
                        .ok_or_else(|| RenderError::MissingValue(capture.name().to_owned()))?;
                    tokens.push(Cow::Owned(stringify(capture, value)?));
                }
                Part::Optional { capture, .. } => {
                    if let Some(value) = params.get(capture.name()) {
                        tokens.push(Cow::Owned(stringify(capture, value)?));
                    }
                }
                Part::Rest(capture) => {
                    let items = params
                        .get(capture.name())
                        .and_then(Value::as_list)
                        .ok_or_else(|| RenderError::ExpectedSequence(capture.name().to_owned()))?;

                    for item in items {
                        tokens.push(Cow::Owned(stringify(capture, item)?));
                    }
                }
            }
        }

        Ok(self.opts().assemble(&tokens))
    }

    /// Render human-readable pattern of this template, like
    /// `/users/:id/:tab?`.
    ///
    /// Required parameters are shown as `:name`, optional ones as `:name?`
    /// and the rest capture as `*` (or `*name`, if it isn't named `rest`).
    pub fn pattern(&self) -> String {
        let tokens: Vec<_> = self
            .parts()
            .iter()
            .map(|part| match part {
                Part::Literal(literal) => Cow::Borrowed(literal.as_str()),
                Part::Required(capture) => Cow::Owned(format!(":{}", capture.name())),
                Part::Optional { capture, .. } => Cow::Owned(format!(":{}?", capture.name())),
                Part::Rest(capture) if capture.name() == DEFAULT_REST_NAME => Cow::Borrowed("*"),
                Part::Rest(capture) => Cow::Owned(format!("*{}", capture.name())),
            })
            .collect();

        self.opts().assemble(&tokens)
    }
}

impl<S> Display for Route<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern())
    }
}

fn stringify(capture: &Capture, value: &Value) -> Result<String> {
    capture
        .converter()
        .stringify_value(value)
        .ok_or_else(|| RenderError::TypeMismatch {
            name: capture.name().to_owned(),
            kind: value.kind(),
        })
}
