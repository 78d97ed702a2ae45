use crate::params::Params;
use crate::part::{Capture, Part};
use crate::route::Route;
use converters::Value;

impl<S> Route<S> {
    /// Match `path` against this template.
    ///
    /// Returns extracted params, or [`None`] if the path doesn't fit the
    /// template. The reason of a rejection is reported as a `trace` event.
    ///
    /// Parts and segments are walked in lockstep:
    ///
    /// * literals must equal their segment exactly;
    /// * required parameters must have a segment, accepted by their converter;
    /// * optional parameters may lack a segment (and are then left out of the
    ///   result, or take their fallback), but a present segment must parse;
    /// * a rest capture takes every remaining segment, each of which must parse.
    ///
    /// Segments left over after the walk reject the path. An empty remainder
    /// is a single empty segment when the template starts with a literal or
    /// a required parameter, and no segments otherwise.
    pub fn match_path(&self, path: &str) -> Option<Params> {
        let Some(mut segments) = self.opts().segments(path) else {
            tracing::trace!(path, "no match: prefix or suffix mismatch");
            return None;
        };

        // An empty literal or required value renders as an empty remainder.
        if segments.is_empty()
            && matches!(
                self.parts().first(),
                Some(Part::Literal(_) | Part::Required(_))
            )
        {
            segments.push("");
        }

        let mut segments = segments.into_iter();
        let mut params = Params::new();

        for part in self.parts() {
            match part {
                Part::Literal(literal) => match segments.next() {
                    Some(segment) if segment == literal.as_str() => {}
                    Some(segment) => {
                        tracing::trace!(
                            path,
                            segment,
                            literal = literal.as_str(),
                            "no match: literal mismatch"
                        );
                        return None;
                    }
                    None => {
                        tracing::trace!(
                            path,
                            literal = literal.as_str(),
                            "no match: missing literal"
                        );
                        return None;
                    }
                },
                Part::Required(capture) => {
                    let Some(segment) = segments.next() else {
                        tracing::trace!(
                            path,
                            param = capture.name(),
                            "no match: missing required param"
                        );
                        return None;
                    };
                    params.insert(capture.name(), parse(path, capture, segment)?);
                }
                Part::Optional { capture, fallback } => {
                    if let Some(segment) = segments.next().or(fallback.as_deref()) {
                        params.insert(capture.name(), parse(path, capture, segment)?);
                    }
                }
                Part::Rest(capture) => {
                    let items = segments
                        .by_ref()
                        .map(|segment| parse(path, capture, segment))
                        .collect::<Option<Vec<_>>>()?;
                    params.insert(capture.name(), Value::List(items));
                }
            }
        }

        if let Some(segment) = segments.next() {
            tracing::trace!(path, segment, "no match: unconsumed segments");
            return None;
        }

        Some(params)
    }

    /// Check, if `path` matches this template.
    pub fn is_match(&self, path: &str) -> bool {
        self.match_path(path).is_some()
    }
}

fn parse(path: &str, capture: &Capture, segment: &str) -> Option<Value> {
    let value = capture.converter().parse_value(segment);

    if value.is_none() {
        tracing::trace!(
            path,
            segment,
            param = capture.name(),
            "no match: param rejected segment"
        );
    }

    value
}
