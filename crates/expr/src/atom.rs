//! Leaf nodes wrapping a single host value.

use crate::error::XPathError;
use crate::literal::{Scalar, scalar_to_text};
use crate::render::Render;

/// A 1-based position. Negative values count back from `last()`.
///
/// Zero is accepted here and rejected when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Index(i64);

impl Index {
    pub fn new(n: i64) -> Self {
        Index(n)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Render for Index {
    fn render_into(&self, out: &mut String) -> Result<(), XPathError> {
        match self.0 {
            0 => {
                return Err(XPathError::Evaluation(
                    "position 0 is invalid, XPath positions start at 1".to_string(),
                ));
            }
            n if n > 0 => out.push_str(&n.to_string()),
            -1 => out.push_str("last()"),
            n => {
                out.push_str("last()-");
                out.push_str(&(n.unsigned_abs() - 1).to_string());
            }
        }
        Ok(())
    }
}

/// A pre-written fragment, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Raw(String);

impl Raw {
    pub fn new(text: impl Into<String>) -> Self {
        Raw(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Render for Raw {
    fn render_into(&self, out: &mut String) -> Result<(), XPathError> {
        out.push_str(&self.0);
        Ok(())
    }
}

/// Any other scalar, rendered with [`scalar_to_text`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal(Scalar);

impl Literal {
    pub fn new(value: impl Into<Scalar>) -> Self {
        Literal(value.into())
    }

    pub fn value(&self) -> &Scalar {
        &self.0
    }
}

impl Render for Literal {
    fn render_into(&self, out: &mut String) -> Result<(), XPathError> {
        out.push_str(&scalar_to_text(&self.0));
        Ok(())
    }
}
