use crate::error::XPathError;
use crate::expr::Expr;
use crate::literal::write_condition_text;
use crate::name;
use crate::render::Render;
use crate::value::Value;

/// A call such as `contains(@class,"item")`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fun {
    name: String,
    args: Vec<Value>,
}

impl Fun {
    pub fn new<I>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Fun {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

impl Render for Fun {
    fn render_into(&self, out: &mut String) -> Result<(), XPathError> {
        name::check_function_name(&self.name)?;
        out.push_str(&self.name);
        out.push('(');
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            write_condition_text(arg, out)?;
        }
        out.push(')');
        Ok(())
    }
}

/// Builds a function-call expression from homogeneous arguments.
///
/// Use the [`fun!`](crate::fun!) macro when arguments have mixed types.
pub fn fun<I>(name: impl Into<String>, args: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Expr::Fun(Fun::new(name, args))
}

/// Builds a function-call expression, converting each argument into a
/// [`Value`](crate::Value).
///
/// `fun!("concat", "User: ", attr("name"))` renders `concat("User: ",@name)`.
#[macro_export]
macro_rules! fun {
    ($name:expr $(, $arg:expr)* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($arg)),*];
        $crate::Expr::Fun($crate::Fun::new($name, args))
    }};
}
