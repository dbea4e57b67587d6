//! Fluent construction of XPath 1.0 query strings.
//!
//! ```
//! use xpathkit::{A, E, Render, attr};
//!
//! let query = E::div().with_predicate(A::id().equals("main"))
//!     / "ul"
//!     / E::li().with_predicate(attr("class").contains("active"));
//! assert_eq!(
//!     query.render().unwrap(),
//!     r#"div[@id="main"]/ul/li[contains(@class,"active")]"#
//! );
//! ```
//!
//! The expression tree itself lives in `xpathkit-expr`; this crate re-exports
//! it and adds the [`E`], [`A`] and [`F`] shorthand builders.

pub mod builders;

pub use builders::{A, E, F};
pub use xpathkit_expr::{
    Anchor, Axis, CompareOp, Comparison, Ele, Expr, Fun, Index, Literal, Logic, LogicOp, Raw,
    Render, Scalar, Separator, Target, Value, XPathError, attr, condition_text, dot, ele, fun,
    promote, promote_to_step, scalar_to_text,
};
