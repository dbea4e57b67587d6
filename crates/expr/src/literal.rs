//! Conversion of host scalars into XPath literal text.

use crate::error::XPathError;
use crate::render::Render;
use crate::value::Value;

/// A host value that has no structure of its own.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scalar {
    Integer(i64),
    Number(f64),
    Boolean(bool),
    String(String),
    /// Absence of a value. XPath has no null literal; this renders as `None`.
    None,
}

impl Scalar {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Integer(_) => "integer",
            Scalar::Number(_) => "number",
            Scalar::Boolean(_) => "boolean",
            Scalar::String(_) => "string",
            Scalar::None => "none",
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    Scalar::$variant(v.into())
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

scalar_from! {
    i8 => Integer,
    i16 => Integer,
    i32 => Integer,
    i64 => Integer,
    u8 => Integer,
    u16 => Integer,
    u32 => Integer,
    f64 => Number,
    bool => Boolean,
    char => String,
    &str => String,
    &String => String,
    String => String,
}

macro_rules! wide_unsigned_from {
    ($($ty:ty),* $(,)?) => {
        $(
            /// Values above `i64::MAX` become numbers, XPath's own double type,
            /// rather than positions.
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    match i64::try_from(v) {
                        Ok(n) => Scalar::Integer(n),
                        Err(_) => Scalar::Number(v as f64),
                    }
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

wide_unsigned_from!(u64, usize);

/// Widened through its shortest decimal text, so `0.1f32` stays `0.1`.
impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Number(v.to_string().parse().unwrap_or_else(|_| f64::from(v)))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Scalar(Scalar::from(v))
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map_or(Scalar::None, Into::into)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Value::Scalar(Scalar::from(v))
    }
}

/// Converts a scalar to its bare XPath text. Strings pass through unquoted.
pub fn scalar_to_text(value: &Scalar) -> String {
    match value {
        Scalar::Integer(n) => n.to_string(),
        Scalar::Number(n) => number_to_text(*n),
        Scalar::Boolean(b) => b.to_string(),
        Scalar::String(s) => s.clone(),
        Scalar::None => {
            log::warn!("Rendering an absent value as the literal text `None`");
            "None".to_string()
        }
    }
}

/// Integral values keep one decimal place. Non-finite values become XPath
/// expressions that evaluate to them, since XPath 1.0 has no literal for them.
fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        "(0 div 0)".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "(1 div 0)" } else { "(-1 div 0)" };
        text.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e16 {
        format!("{n:.1}")
    } else {
        n.to_string()
    }
}

/// Converts any value to the text it takes inside a condition or function
/// argument list: expressions render themselves, strings are double-quoted
/// verbatim, everything else goes through [`scalar_to_text`].
pub fn condition_text(value: &Value) -> Result<String, XPathError> {
    let mut out = String::new();
    write_condition_text(value, &mut out)?;
    Ok(out)
}

pub(crate) fn write_condition_text(value: &Value, out: &mut String) -> Result<(), XPathError> {
    match value {
        Value::Expr(expr) => expr.render_into(out),
        // Embedded quotes are not escaped; the caller owns the string's content.
        Value::Scalar(Scalar::String(s)) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
            Ok(())
        }
        Value::Scalar(other) => {
            out.push_str(&scalar_to_text(other));
            Ok(())
        }
    }
}
