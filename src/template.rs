use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

use crate::error::DefinitionError;

/// A URL path template with positional `{n}` placeholders.
///
/// The template is split into literal segments once at parse time, so the
/// placeholder count is known before any substitution happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: Cow<'static, str>,
    /// Byte ranges of the literal text around each placeholder; always `arity + 1` long
    literals: Vec<Range<usize>>,
}

impl PathTemplate {
    /// Parse a template, validating its placeholders
    ///
    /// Placeholders must be written `{0}`, `{1}`, ... in order of appearance,
    /// and the path must begin with `/`. Any other use of `{` or `}` is rejected.
    pub fn parse(raw: impl Into<Cow<'static, str>>) -> Result<Self, DefinitionError> {
        let raw = raw.into();
        if !raw.starts_with('/') {
            return Err(invalid(&raw, "path must begin with '/'"));
        }

        let bytes = raw.as_bytes();
        let mut literals = Vec::new();
        let mut start = 0;
        let mut pos = 0;

        while pos < bytes.len() {
            match bytes[pos] {
                b'{' => {
                    let close = raw[pos + 1..]
                        .find('}')
                        .map(|offset| pos + 1 + offset)
                        .ok_or_else(|| {
                            invalid(&raw, format!("unclosed placeholder at byte {pos}"))
                        })?;
                    let index_text = &raw[pos + 1..close];
                    if index_text.is_empty() || !index_text.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(invalid(
                            &raw,
                            format!("placeholder '{{{index_text}}}' is not a positional index"),
                        ));
                    }
                    let expected = literals.len();
                    if index_text.parse::<usize>().ok() != Some(expected) {
                        return Err(invalid(
                            &raw,
                            format!("placeholder '{{{index_text}}}' out of order, expected '{{{expected}}}'"),
                        ));
                    }
                    literals.push(start..pos);
                    pos = close + 1;
                    start = pos;
                }
                b'}' => {
                    return Err(invalid(&raw, format!("unmatched '}}' at byte {pos}")));
                }
                _ => pos += 1,
            }
        }
        literals.push(start..raw.len());

        Ok(PathTemplate { raw, literals })
    }

    /// Number of placeholders in the template
    pub fn arity(&self) -> usize {
        self.literals.len() - 1
    }

    /// The template exactly as it was defined
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitute `values` into the placeholders in order
    ///
    /// Returns `None` without touching the values when their count differs from
    /// `arity()`. Values are inserted verbatim; no escaping or encoding is applied.
    pub fn render(&self, values: &[&dyn fmt::Display]) -> Option<String> {
        if values.len() != self.arity() {
            return None;
        }

        let mut path = String::with_capacity(self.raw.len());
        path.push_str(&self.raw[self.literals[0].clone()]);
        for (value, literal) in values.iter().zip(&self.literals[1..]) {
            path.push_str(&value.to_string());
            path.push_str(&self.raw[literal.clone()]);
        }
        Some(path)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for PathTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

fn invalid(template: &str, reason: impl Into<String>) -> DefinitionError {
    DefinitionError::InvalidTemplate {
        template: template.to_string(),
        reason: reason.into(),
    }
}
