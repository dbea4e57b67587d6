//! The expression node type and its boolean operators.
//!
//! `&` builds an AND node and `|` an OR node. Rust gives `&` higher precedence
//! than `|` and both associate to the left, so `a & b | c` renders
//! `((a and b) or c)` and `a | b & c` renders `(a or (b and c))`. Any other
//! grouping needs parentheses in the Rust source. Every AND/OR node is
//! parenthesized in the output, so the rendered text never depends on XPath's
//! own precedence.

use crate::atom::{Index, Literal, Raw};
use crate::condition::{Anchor, CompareOp, Comparison};
use crate::element::Ele;
use crate::error::XPathError;
use crate::function::Fun;
use crate::logic::Logic;
use crate::render::Render;
use crate::value::Value;
use std::ops::{BitAnd, BitOr, Not};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Index(Index),
    Raw(Raw),
    Literal(Literal),
    Anchor(Anchor),
    Comparison(Comparison),
    Fun(Fun),
    Logic(Logic),
    Ele(Ele),
}

impl Expr {
    pub fn equals(self, value: impl Into<Value>) -> Expr {
        self.compare(CompareOp::Eq, value)
    }

    pub fn not_equals(self, value: impl Into<Value>) -> Expr {
        self.compare(CompareOp::Ne, value)
    }

    pub fn gt(self, value: impl Into<Value>) -> Expr {
        self.compare(CompareOp::Gt, value)
    }

    pub fn lt(self, value: impl Into<Value>) -> Expr {
        self.compare(CompareOp::Lt, value)
    }

    pub fn ge(self, value: impl Into<Value>) -> Expr {
        self.compare(CompareOp::Ge, value)
    }

    pub fn le(self, value: impl Into<Value>) -> Expr {
        self.compare(CompareOp::Le, value)
    }

    /// Same as `self & other`, for callers that prefer method chains.
    pub fn and(self, other: impl Into<Expr>) -> Expr {
        Expr::Logic(Logic::and(self, other))
    }

    /// Same as `self | other`.
    pub fn or(self, other: impl Into<Expr>) -> Expr {
        Expr::Logic(Logic::or(self, other))
    }

    fn compare(self, op: CompareOp, value: impl Into<Value>) -> Expr {
        Expr::Comparison(Comparison::new(self, op, value))
    }
}

impl Render for Expr {
    fn render_into(&self, out: &mut String) -> Result<(), XPathError> {
        match self {
            Expr::Index(node) => node.render_into(out),
            Expr::Raw(node) => node.render_into(out),
            Expr::Literal(node) => node.render_into(out),
            Expr::Anchor(node) => node.render_into(out),
            Expr::Comparison(node) => node.render_into(out),
            Expr::Fun(node) => node.render_into(out),
            Expr::Logic(node) => node.render_into(out),
            Expr::Ele(node) => node.render_into(out),
        }
    }
}

macro_rules! expr_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Expr {
                fn from(v: $variant) -> Self {
                    Expr::$variant(v)
                }
            }
        )*
    };
}

expr_from!(Index, Raw, Literal, Anchor, Comparison, Fun, Logic, Ele);

impl<R: Into<Expr>> BitAnd<R> for Expr {
    type Output = Expr;

    fn bitand(self, rhs: R) -> Expr {
        self.and(rhs)
    }
}

impl<R: Into<Expr>> BitOr<R> for Expr {
    type Output = Expr;

    fn bitor(self, rhs: R) -> Expr {
        self.or(rhs)
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Fun(Fun::new("not", [self]))
    }
}
