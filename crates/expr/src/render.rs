use crate::error::XPathError;

/// A node that can be written out as XPath text.
///
/// Rendering is pure: an unchanged tree always produces the same string, and
/// nothing is cached between calls.
pub trait Render {
    /// Appends this node's text to `out`, children first.
    fn render_into(&self, out: &mut String) -> Result<(), XPathError>;

    fn render(&self) -> Result<String, XPathError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }
}
