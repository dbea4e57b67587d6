//! `nom` grammars for the names a builder emits: element tags, attribute
//! names, function names and axis names.

use crate::axis::Axis;
use crate::error::XPathError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, multispace0, satisfy},
    combinator::{all_consuming, map, opt, recognize},
    sequence::{delimited, pair, preceded, terminated},
};

pub(crate) fn check_element_tag(input: &str) -> Result<(), XPathError> {
    validate("element", input, element_tag)
}

pub(crate) fn check_attribute_name(input: &str) -> Result<(), XPathError> {
    validate("attribute", input, name_test)
}

pub(crate) fn check_function_name(input: &str) -> Result<(), XPathError> {
    validate("function", input, q_name)
}

pub(crate) fn parse_axis(input: &str) -> Result<Axis, XPathError> {
    match all_consuming(axis).parse(input) {
        Ok((_, axis)) => Ok(axis),
        Err(_) => Err(XPathError::Construction(format!("unknown axis '{input}'"))),
    }
}

fn validate<'a, P>(kind: &str, input: &'a str, parser: P) -> Result<(), XPathError>
where
    P: Parser<&'a str, Output = &'a str, Error = nom::error::Error<&'a str>>,
{
    match all_consuming(parser).parse(input) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::debug!("Rejected {} name '{}': {}", kind, input, e);
            Err(XPathError::Construction(format!(
                "invalid {kind} name '{input}'"
            )))
        }
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

fn nc_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(satisfy(is_name_start), take_while(is_name_char))).parse(input)
}

fn q_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(nc_name, opt(preceded(char(':'), nc_name)))).parse(input)
}

// `prefix:*` has to be tried before `q_name`, which would stop at the colon.
fn name_test(input: &str) -> IResult<&str, &str> {
    alt((tag("*"), recognize(pair(nc_name, tag(":*"))), q_name)).parse(input)
}

fn node_type_test(input: &str) -> IResult<&str, &str> {
    recognize(terminated(
        alt((
            tag("text"),
            tag("node"),
            tag("comment"),
            tag("processing-instruction"),
        )),
        pair(
            delimited(multispace0, char('('), multispace0),
            char(')'),
        ),
    ))
    .parse(input)
}

// `@name` is the abbreviated `attribute::name` step.
fn element_tag(input: &str) -> IResult<&str, &str> {
    alt((
        tag(".."),
        tag("."),
        node_type_test,
        recognize(preceded(char('@'), name_test)),
        name_test,
    ))
    .parse(input)
}

fn axis(input: &str) -> IResult<&str, Axis> {
    alt((
        map(tag("child"), |_| Axis::Child),
        map(tag("descendant-or-self"), |_| Axis::DescendantOrSelf),
        map(tag("descendant"), |_| Axis::Descendant),
        map(tag("attribute"), |_| Axis::Attribute),
        map(tag("namespace"), |_| Axis::Namespace),
        map(tag("parent"), |_| Axis::Parent),
        map(tag("ancestor-or-self"), |_| Axis::AncestorOrSelf),
        map(tag("ancestor"), |_| Axis::Ancestor),
        map(tag("self"), |_| Axis::SelfAxis),
        map(tag("following-sibling"), |_| Axis::FollowingSibling),
        map(tag("preceding-sibling"), |_| Axis::PrecedingSibling),
        map(tag("following"), |_| Axis::Following),
        map(tag("preceding"), |_| Axis::Preceding),
    ))
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_tags() {
        for tag in [
            "div",
            "h1",
            "my-custom-element",
            "svg:path",
            "svg:*",
            "*",
            ".",
            "..",
            "text()",
            "node()",
            "processing-instruction()",
            "_private",
            "v1.2",
            "@href",
            "@*",
            "@xml:lang",
        ] {
            assert!(check_element_tag(tag).is_ok(), "{tag} should be accepted");
        }
    }

    #[test]
    fn test_bad_element_tags() {
        for tag in ["", "1div", "div[1]", "a/b", "...", "svg:", ":path", "a b", "@", "@@id", "@.."] {
            assert!(
                matches!(check_element_tag(tag), Err(XPathError::Construction(_))),
                "{tag} should be rejected"
            );
        }
    }

    #[test]
    fn test_attribute_names() {
        assert!(check_attribute_name("data-testid").is_ok());
        assert!(check_attribute_name("xml:lang").is_ok());
        assert!(check_attribute_name("*").is_ok());
        assert!(check_attribute_name("@id").is_err());
        assert!(check_attribute_name("..").is_err());
    }

    #[test]
    fn test_function_names() {
        assert!(check_function_name("string-length").is_ok());
        assert!(check_function_name("fn:contains").is_ok());
        assert!(check_function_name("not()").is_err());
        assert!(check_function_name("").is_err());
    }
}
