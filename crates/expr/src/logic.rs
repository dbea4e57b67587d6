use crate::error::XPathError;
use crate::expr::Expr;
use crate::render::Render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogicOp {
    And,
    Or,
}

impl LogicOp {
    pub fn as_str(self) -> &'static str {
        match self {
            LogicOp::And => "and",
            LogicOp::Or => "or",
        }
    }

    /// The value of the operator applied to no operands.
    fn identity(self) -> &'static str {
        match self {
            LogicOp::And => "true()",
            LogicOp::Or => "false()",
        }
    }
}

/// An AND/OR over its operands, always wrapped in one pair of parentheses.
///
/// The `&` and `|` operators build two-operand nodes; [`Logic::fold`] builds
/// the flat form used by `all`/`any`/`none`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Logic {
    op: LogicOp,
    operands: Vec<Expr>,
}

impl Logic {
    pub fn and(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Logic {
            op: LogicOp::And,
            operands: vec![left.into(), right.into()],
        }
    }

    pub fn or(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Logic {
            op: LogicOp::Or,
            operands: vec![left.into(), right.into()],
        }
    }

    pub fn fold<I>(op: LogicOp, operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Logic {
            op,
            operands: operands.into_iter().map(Into::into).collect(),
        }
    }

    pub fn op(&self) -> LogicOp {
        self.op
    }

    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }
}

impl Render for Logic {
    fn render_into(&self, out: &mut String) -> Result<(), XPathError> {
        if self.operands.is_empty() {
            out.push_str(self.op.identity());
            return Ok(());
        }
        out.push('(');
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
                out.push_str(self.op.as_str());
                out.push(' ');
            }
            operand.render_into(out)?;
        }
        out.push(')');
        Ok(())
    }
}
