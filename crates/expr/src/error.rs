use thiserror::Error;

/// Failures raised while building or rendering an expression tree.
///
/// `Selection` and `Modification` are never produced here. They name the
/// failures of document layers that execute a rendered query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XPathError {
    #[error("XPath evaluation error: {0}")]
    Evaluation(String),

    #[error("XPath construction error: {0}")]
    Construction(String),

    #[error("No node matched '{0}'")]
    Selection(String),

    #[error("Cannot modify node: {0}")]
    Modification(String),
}
