//! Attribute and context-node conditions, and the comparison node they build.

use crate::error::XPathError;
use crate::expr::Expr;
use crate::function::Fun;
use crate::literal::write_condition_text;
use crate::logic::{Logic, LogicOp};
use crate::name;
use crate::render::Render;
use crate::value::Value;
use std::ops::{BitAnd, BitOr, Not};

/// The node a condition is about.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// `@name`; the name is stored without the `@`.
    Attribute(String),
    /// `.`
    Context,
}

impl Render for Target {
    fn render_into(&self, out: &mut String) -> Result<(), XPathError> {
        match self {
            Target::Attribute(name) => {
                name::check_attribute_name(name)?;
                out.push('@');
                out.push_str(name);
            }
            Target::Context => out.push('.'),
        }
        Ok(())
    }
}

/// A target plus the condition accumulated on it so far.
///
/// Every test method consumes the anchor and returns a new one whose
/// condition is the old one AND the new test, so calls chain:
/// `attr("price").gt(100).lt(200)` renders `(@price>100 and @price<200)`.
/// With no condition the anchor renders as the bare target, an existence test.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    target: Target,
    condition: Option<Box<Expr>>,
}

/// An anchor on the attribute `name` (given without `@`).
pub fn attr(name: impl Into<String>) -> Anchor {
    Anchor::new(Target::Attribute(name.into()))
}

/// An anchor on the context node.
pub fn dot() -> Anchor {
    Anchor::new(Target::Context)
}

impl Anchor {
    pub fn new(target: Target) -> Self {
        Anchor {
            target,
            condition: None,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn condition(&self) -> Option<&Expr> {
        self.condition.as_deref()
    }

    pub fn equals(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::Eq, value)
    }

    pub fn not_equals(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::Ne, value)
    }

    pub fn gt(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::Gt, value)
    }

    pub fn lt(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::Lt, value)
    }

    pub fn ge(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::Ge, value)
    }

    pub fn le(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::Le, value)
    }

    pub fn contains(self, value: impl Into<Value>) -> Self {
        let test = self.test("contains", value.into());
        self.with(test)
    }

    pub fn starts_with(self, value: impl Into<Value>) -> Self {
        let test = self.test("starts-with", value.into());
        self.with(test)
    }

    pub fn ends_with(self, value: impl Into<Value>) -> Self {
        let test = self.test("ends-with", value.into());
        self.with(test)
    }

    /// True when the target contains every value.
    pub fn all<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let fold = Logic::fold(
            LogicOp::And,
            values
                .into_iter()
                .map(|v| self.test("contains", v.into())),
        );
        self.with(fold.into())
    }

    /// True when the target contains at least one value.
    pub fn any<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let fold = Logic::fold(
            LogicOp::Or,
            values
                .into_iter()
                .map(|v| self.test("contains", v.into())),
        );
        self.with(fold.into())
    }

    /// True when the target contains none of the values.
    pub fn none<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let fold = Logic::fold(
            LogicOp::And,
            values
                .into_iter()
                .map(|v| Expr::Fun(Fun::new("not", [self.test("contains", v.into())]))),
        );
        self.with(fold.into())
    }

    /// ANDs the current condition with whatever `f` builds from a fresh
    /// anchor on the same target.
    pub fn and_with<F, R>(self, f: F) -> Self
    where
        F: FnOnce(Anchor) -> R,
        R: Into<Expr>,
    {
        self.combine(LogicOp::And, f)
    }

    /// ORs the current condition with whatever `f` builds from a fresh
    /// anchor on the same target.
    pub fn or_with<F, R>(self, f: F) -> Self
    where
        F: FnOnce(Anchor) -> R,
        R: Into<Expr>,
    {
        self.combine(LogicOp::Or, f)
    }

    fn bare(&self) -> Anchor {
        Anchor::new(self.target.clone())
    }

    fn compare(self, op: CompareOp, value: impl Into<Value>) -> Self {
        let comparison = Comparison::new(self.bare(), op, value);
        self.with(comparison.into())
    }

    fn test(&self, function: &str, value: Value) -> Expr {
        Expr::Fun(Fun::new(function, [Value::from(self.bare()), value]))
    }

    fn with(self, condition: Expr) -> Self {
        let condition = match self.condition {
            None => condition,
            Some(previous) => Expr::Logic(Logic::and(*previous, condition)),
        };
        Anchor {
            target: self.target,
            condition: Some(Box::new(condition)),
        }
    }

    fn combine<F, R>(self, op: LogicOp, f: F) -> Self
    where
        F: FnOnce(Anchor) -> R,
        R: Into<Expr>,
    {
        let other = f(self.bare()).into();
        let Anchor { target, condition } = self;
        let current = match condition {
            Some(condition) => *condition,
            None => Expr::Anchor(Anchor::new(target.clone())),
        };
        Anchor {
            target,
            condition: Some(Box::new(Logic::fold(op, [current, other]).into())),
        }
    }
}

impl Render for Anchor {
    fn render_into(&self, out: &mut String) -> Result<(), XPathError> {
        match &self.condition {
            Some(condition) => condition.render_into(out),
            None => self.target.render_into(out),
        }
    }
}

impl<R: Into<Expr>> BitAnd<R> for Anchor {
    type Output = Expr;

    fn bitand(self, rhs: R) -> Expr {
        Expr::Logic(Logic::and(self, rhs))
    }
}

impl<R: Into<Expr>> BitOr<R> for Anchor {
    type Output = Expr;

    fn bitor(self, rhs: R) -> Expr {
        Expr::Logic(Logic::or(self, rhs))
    }
}

impl Not for Anchor {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Fun(Fun::new("not", [self]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Ge => ">=",
            CompareOp::Le => "<=",
        }
    }
}

/// `left<op>right`, with the right side in condition-text form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    left: Box<Expr>,
    op: CompareOp,
    right: Box<Value>,
}

impl Comparison {
    pub fn new(left: impl Into<Expr>, op: CompareOp, right: impl Into<Value>) -> Self {
        Comparison {
            left: Box::new(left.into()),
            op,
            right: Box::new(right.into()),
        }
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }
}

impl Render for Comparison {
    fn render_into(&self, out: &mut String) -> Result<(), XPathError> {
        self.left.render_into(out)?;
        out.push_str(self.op.as_str());
        write_condition_text(&self.right, out)
    }
}
