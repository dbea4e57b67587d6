//! The "any value" accepted by predicate, comparison and argument slots, and
//! its promotion into an expression node.

use crate::atom::{Index, Literal, Raw};
use crate::condition::{Anchor, Comparison};
use crate::element::Ele;
use crate::expr::Expr;
use crate::function::Fun;
use crate::literal::Scalar;
use crate::logic::Logic;

/// Either a plain host scalar or an already-built expression node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Scalar(Scalar),
    Expr(Expr),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(s) => s.kind(),
            Value::Expr(_) => "expression",
        }
    }
}

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        Value::Scalar(v)
    }
}

macro_rules! value_from_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Expr(Expr::from(v))
                }
            }
        )*
    };
}

value_from_node!(Expr, Index, Raw, Literal, Anchor, Comparison, Fun, Logic, Ele);

/// Picks the node that represents `value` in a predicate slot.
///
/// Expressions pass through; integers become positional atoms, strings become
/// raw fragments, and every other scalar becomes a generic literal.
pub fn promote(value: Value) -> Expr {
    match value {
        Value::Expr(expr) => expr,
        Value::Scalar(Scalar::Integer(n)) => Expr::Index(Index::new(n)),
        Value::Scalar(Scalar::String(s)) => Expr::Raw(Raw::new(s)),
        Value::Scalar(
            other @ (Scalar::Number(_) | Scalar::Boolean(_) | Scalar::None),
        ) => Expr::Literal(Literal::new(other)),
    }
}

impl From<Value> for Expr {
    fn from(v: Value) -> Self {
        promote(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::attr;
    use crate::render::Render;

    #[test]
    fn test_expression_passes_through() {
        let node = Expr::from(attr("id"));
        assert_eq!(promote(Value::from(node.clone())), node);
    }

    #[test]
    fn test_scalars_pick_their_atom() {
        assert!(matches!(promote(1.into()), Expr::Index(_)));
        assert!(matches!(promote("raw_string".into()), Expr::Raw(_)));
        assert!(matches!(promote(true.into()), Expr::Literal(_)));
        assert!(matches!(promote(1.5.into()), Expr::Literal(_)));
        assert!(matches!(promote(Scalar::None.into()), Expr::Literal(_)));
    }

    #[test]
    fn test_promoted_string_is_unquoted() {
        let expr = promote("@id and not(@class)".into());
        assert_eq!(expr.render().unwrap(), "@id and not(@class)");
    }
}
