//! A typed expression tree for XPath 1.0 query strings.
//!
//! Nodes are built bottom-up (atoms and conditions), combined with `&`, `|`
//! and `!`, attached to element steps as predicates, and chained into
//! location paths. [`Render::render`] turns any node into XPath text.

pub mod atom;
pub mod axis;
pub mod condition;
pub mod element;
pub mod error;
pub mod expr;
pub mod function;
pub mod literal;
pub mod logic;
mod name;
pub mod render;
pub mod value;

pub use atom::{Index, Literal, Raw};
pub use axis::Axis;
pub use condition::{Anchor, CompareOp, Comparison, Target, attr, dot};
pub use element::{Ele, Separator, ele, promote_to_step};
pub use error::XPathError;
pub use expr::Expr;
pub use function::{Fun, fun};
pub use literal::{Scalar, condition_text, scalar_to_text};
pub use logic::{Logic, LogicOp};
pub use render::Render;
pub use value::{Value, promote};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::fun;

    #[test]
    fn test_stored_query_renders_identically() {
        let query = ele("div")
            .with_predicate(attr("class").any(["a", "b"]) | fun!("position").equals(-1))
            .descendant(ele("li").with_predicate(-2));
        let json = serde_json::to_string(&query).unwrap();
        let restored: Ele = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, query);
        assert_eq!(restored.render().unwrap(), query.render().unwrap());
    }
}
