//! Location-path steps: axis, tag, predicates and the steps that follow.

use crate::axis::Axis;
use crate::error::XPathError;
use crate::expr::Expr;
use crate::literal::Scalar;
use crate::name;
use crate::render::Render;
use crate::value::{Value, promote};
use std::ops::Div;

/// How a following step is joined to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Separator {
    /// `/`
    Child,
    /// `//`
    Descendant,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Child => "/",
            Separator::Descendant => "//",
        }
    }
}

/// One step of a location path, like `ancestor::div[@id="main"][1]`, plus
/// the steps chained after it.
///
/// The tag may also be `*`, `.`, `..` or an attribute step like `@href`.
/// Predicates render in the order they were added, each in its own brackets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ele {
    axis: Option<Axis>,
    tag: String,
    predicates: Vec<Expr>,
    successors: Vec<(Separator, Ele)>,
}

/// A step selecting `tag` on the default axis.
pub fn ele(tag: impl Into<String>) -> Ele {
    Ele::new(tag)
}

impl Ele {
    pub fn new(tag: impl Into<String>) -> Self {
        Ele {
            axis: None,
            tag: tag.into(),
            predicates: Vec::new(),
            successors: Vec::new(),
        }
    }

    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn predicates(&self) -> &[Expr] {
        &self.predicates
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Appends a predicate. Integers become positions (`-1` is `last()`),
    /// strings are inserted verbatim, and steps become sub-element tests.
    pub fn with_predicate(mut self, predicate: impl Into<Value>) -> Self {
        self.predicates.push(promote(predicate.into()));
        self
    }

    /// Joins `next` with `/`.
    pub fn child(self, next: impl Into<Ele>) -> Self {
        self.join(Separator::Child, next.into())
    }

    /// Joins `next` with `//`.
    pub fn descendant(self, next: impl Into<Ele>) -> Self {
        self.join(Separator::Descendant, next.into())
    }

    fn join(mut self, separator: Separator, next: Ele) -> Self {
        self.successors.push((separator, next));
        self
    }
}

impl Render for Ele {
    fn render_into(&self, out: &mut String) -> Result<(), XPathError> {
        if let Some(axis) = self.axis {
            out.push_str(axis.as_str());
            out.push_str("::");
        }
        name::check_element_tag(&self.tag)?;
        out.push_str(&self.tag);
        for predicate in &self.predicates {
            out.push('[');
            predicate.render_into(out)?;
            out.push(']');
        }
        for (separator, next) in &self.successors {
            out.push_str(separator.as_str());
            next.render_into(out)?;
        }
        Ok(())
    }
}

impl From<&str> for Ele {
    fn from(tag: &str) -> Self {
        Ele::new(tag)
    }
}

impl From<String> for Ele {
    fn from(tag: String) -> Self {
        Ele::new(tag)
    }
}

/// Promotes a value into a step: steps pass through, strings become bare
/// steps, anything else is rejected.
pub fn promote_to_step(value: Value) -> Result<Ele, XPathError> {
    match value {
        Value::Expr(Expr::Ele(step)) => Ok(step),
        Value::Scalar(Scalar::String(tag)) => Ok(Ele::new(tag)),
        other => {
            log::debug!("Cannot promote {} value to an element step", other.kind());
            Err(XPathError::Evaluation(format!(
                "cannot build an element step from a {} value",
                other.kind()
            )))
        }
    }
}

impl TryFrom<Value> for Ele {
    type Error = XPathError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        promote_to_step(value)
    }
}

impl<R: Into<Ele>> Div<R> for Ele {
    type Output = Ele;

    fn div(self, rhs: R) -> Ele {
        self.child(rhs)
    }
}
