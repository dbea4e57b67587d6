//! Shorthand constructors for common elements, attributes and XPath 1.0
//! functions. Each one only builds the corresponding core node.
//!
//! Rust identifiers use `_` where the XPath name has `-`, and a trailing `_`
//! where the name is a Rust keyword (`A::type_()`, `F::true_()`).

use xpathkit_expr::{Anchor, Ele, Expr, Fun, Value};

/// Element steps: `E::div()`, `E::tag("svg:path")`.
pub struct E;

/// Attribute anchors: `A::id()`, `A::named("data-testid")`.
pub struct A;

/// Function calls: `F::count(A::id())`, `F::call("my-func", args)`.
pub struct F;

macro_rules! element_builders {
    ($($fn_name:ident => $tag:literal),* $(,)?) => {
        impl E {
            $(
                #[doc = concat!("`", $tag, "`")]
                pub fn $fn_name() -> Ele {
                    Ele::new($tag)
                }
            )*
        }
    };
}

element_builders! {
    html => "html",
    head => "head",
    body => "body",
    title => "title",
    div => "div",
    span => "span",
    p => "p",
    a => "a",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
    ul => "ul",
    ol => "ol",
    li => "li",
    table => "table",
    thead => "thead",
    tbody => "tbody",
    tr => "tr",
    th => "th",
    td => "td",
    img => "img",
    form => "form",
    input => "input",
    button => "button",
    label => "label",
    select => "select",
    option => "option",
    textarea => "textarea",
    nav => "nav",
    section => "section",
    article => "article",
    header => "header",
    footer => "footer",
    main => "main",
    aside => "aside",
    iframe => "iframe",
    script => "script",
    meta => "meta",
    link => "link",
}

impl E {
    /// `*`
    pub fn any() -> Ele {
        Ele::new("*")
    }

    /// `..`
    pub fn parent() -> Ele {
        Ele::new("..")
    }

    /// `.`, the context node as a step.
    pub fn root() -> Ele {
        Ele::new(".")
    }

    pub fn tag(name: impl Into<String>) -> Ele {
        Ele::new(name)
    }
}

macro_rules! attribute_builders {
    ($($fn_name:ident => $name:literal),* $(,)?) => {
        impl A {
            $(
                #[doc = concat!("`@", $name, "`")]
                pub fn $fn_name() -> Anchor {
                    xpathkit_expr::attr($name)
                }
            )*
        }
    };
}

attribute_builders! {
    id => "id",
    class => "class",
    style => "style",
    title => "title",
    href => "href",
    src => "src",
    alt => "alt",
    name => "name",
    type_ => "type",
    value => "value",
    placeholder => "placeholder",
    disabled => "disabled",
    checked => "checked",
    selected => "selected",
    rel => "rel",
    target => "target",
    for_ => "for",
    lang => "lang",
    role => "role",
    action => "action",
    method => "method",
    width => "width",
    height => "height",
}

impl A {
    pub fn named(name: impl Into<String>) -> Anchor {
        xpathkit_expr::attr(name)
    }
}

fn call<const N: usize>(name: &str, args: [Value; N]) -> Expr {
    Expr::Fun(Fun::new(name, args))
}

macro_rules! nullary_functions {
    ($($fn_name:ident => $xpath:literal),* $(,)?) => {
        impl F {
            $(
                #[doc = concat!("`", $xpath, "()`")]
                pub fn $fn_name() -> Expr {
                    call($xpath, [])
                }
            )*
        }
    };
}

macro_rules! unary_functions {
    ($($fn_name:ident => $xpath:literal),* $(,)?) => {
        impl F {
            $(
                #[doc = concat!("`", $xpath, "(arg)`")]
                pub fn $fn_name(arg: impl Into<Value>) -> Expr {
                    call($xpath, [arg.into()])
                }
            )*
        }
    };
}

// Functions whose argument defaults to the context node when omitted.
macro_rules! context_functions {
    ($($fn_name:ident => $xpath:literal),* $(,)?) => {
        impl F {
            $(
                #[doc = concat!("`", $xpath, "()`, applied to the context node")]
                pub fn $fn_name() -> Expr {
                    call($xpath, [])
                }
            )*
        }
    };
}

macro_rules! binary_functions {
    ($($fn_name:ident => $xpath:literal),* $(,)?) => {
        impl F {
            $(
                #[doc = concat!("`", $xpath, "(first,second)`")]
                pub fn $fn_name(first: impl Into<Value>, second: impl Into<Value>) -> Expr {
                    call($xpath, [first.into(), second.into()])
                }
            )*
        }
    };
}

nullary_functions! {
    position => "position",
    last => "last",
    true_ => "true",
    false_ => "false",
    text => "text",
}

unary_functions! {
    count => "count",
    not => "not",
    id => "id",
    local_name => "local-name",
    namespace_uri => "namespace-uri",
    name => "name",
    string => "string",
    string_length => "string-length",
    normalize_space => "normalize-space",
    boolean => "boolean",
    lang => "lang",
    number => "number",
    sum => "sum",
    floor => "floor",
    ceiling => "ceiling",
    round => "round",
}

context_functions! {
    local_name_of_context => "local-name",
    namespace_uri_of_context => "namespace-uri",
    name_of_context => "name",
    string_of_context => "string",
    string_length_of_context => "string-length",
    normalize_space_of_context => "normalize-space",
    number_of_context => "number",
}

binary_functions! {
    contains => "contains",
    starts_with => "starts-with",
    ends_with => "ends-with",
    substring_before => "substring-before",
    substring_after => "substring-after",
}

impl F {
    /// `substring(s,start,length)`
    pub fn substring(
        s: impl Into<Value>,
        start: impl Into<Value>,
        length: impl Into<Value>,
    ) -> Expr {
        call("substring", [s.into(), start.into(), length.into()])
    }

    /// `translate(s,from,to)`
    pub fn translate(
        s: impl Into<Value>,
        from: impl Into<Value>,
        to: impl Into<Value>,
    ) -> Expr {
        call("translate", [s.into(), from.into(), to.into()])
    }

    pub fn concat<I>(args: I) -> Expr
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Expr::Fun(Fun::new("concat", args))
    }

    /// Any function by name, including ones outside XPath 1.0's core library.
    pub fn call<I>(name: impl Into<String>, args: I) -> Expr
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Expr::Fun(Fun::new(name, args))
    }
}
