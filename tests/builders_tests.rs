mod common;

use common::assert_renders;
use xpathkit::{A, E, F, dot};

#[test]
fn test_common_element_builders() {
    let cases = [
        (E::div(), "div"),
        (E::p(), "p"),
        (E::a(), "a"),
        (E::h1(), "h1"),
        (E::li(), "li"),
        (E::table(), "table"),
        (E::span(), "span"),
        (E::img(), "img"),
        (E::form(), "form"),
        (E::input(), "input"),
        (E::button(), "button"),
    ];
    for (step, expected) in cases {
        assert_eq!(step.tag(), expected);
        assert_renders(&step, expected);
    }
}

#[test]
fn test_special_element_builders() {
    assert_renders(&E::any(), "*");
    assert_renders(&E::parent(), "..");
    assert_renders(&E::root(), ".");
}

#[test]
fn test_custom_tags() {
    assert_renders(&E::tag("my-custom-element"), "my-custom-element");
    assert_renders(&E::tag("svg:path"), "svg:path");
}

#[test]
fn test_common_attribute_builders() {
    let cases = [
        (A::id(), "@id"),
        (A::style(), "@style"),
        (A::title(), "@title"),
        (A::href(), "@href"),
        (A::src(), "@src"),
        (A::alt(), "@alt"),
        (A::name(), "@name"),
        (A::type_(), "@type"),
        (A::value(), "@value"),
        (A::placeholder(), "@placeholder"),
        (A::disabled(), "@disabled"),
        (A::checked(), "@checked"),
        (A::selected(), "@selected"),
        (A::rel(), "@rel"),
        (A::target(), "@target"),
        (A::class(), "@class"),
        (A::for_(), "@for"),
    ];
    for (anchor, expected) in cases {
        assert_renders(&anchor, expected);
    }
}

#[test]
fn test_custom_attributes() {
    assert_renders(&A::named("data-testid"), "@data-testid");
    assert_renders(&A::named("xml:lang"), "@xml:lang");
}

#[test]
fn test_functions_with_no_args() {
    assert_renders(&F::position(), "position()");
    assert_renders(&F::last(), "last()");
    assert_renders(&F::true_(), "true()");
    assert_renders(&F::false_(), "false()");
}

#[test]
fn test_functions_defaulting_to_context_node() {
    let cases = [
        (F::normalize_space_of_context(), "normalize-space()"),
        (F::string_length_of_context(), "string-length()"),
        (F::string_of_context(), "string()"),
        (F::number_of_context(), "number()"),
        (F::name_of_context(), "name()"),
        (F::local_name_of_context(), "local-name()"),
        (F::namespace_uri_of_context(), "namespace-uri()"),
    ];
    for (expr, expected) in cases {
        assert_renders(&expr, expected);
    }
    assert_renders(
        &E::td().with_predicate(F::normalize_space_of_context().not_equals("")),
        r#"td[normalize-space()!=""]"#,
    );
}

#[test]
fn test_functions_with_one_arg() {
    assert_renders(&F::count(A::id()), "count(@id)");
    assert_renders(&F::normalize_space(dot()), "normalize-space(.)");
    assert_renders(&F::lang("en"), r#"lang("en")"#);
    assert_renders(&F::not(A::disabled()), "not(@disabled)");
}

#[test]
fn test_functions_with_multiple_args() {
    assert_renders(&F::contains(A::class(), "item"), r#"contains(@class,"item")"#);
    assert_renders(
        &F::substring("hello world", 1, 5),
        r#"substring("hello world",1,5)"#,
    );
    assert_renders(&F::concat(["a", "b", "c"]), r#"concat("a","b","c")"#);
    assert_renders(&F::translate(dot(), "abc", "ABC"), r#"translate(.,"abc","ABC")"#);
}

#[test]
fn test_nested_function_calls() {
    assert_renders(
        &F::string_length(F::normalize_space(dot())),
        "string-length(normalize-space(.))",
    );
    assert_renders(
        &F::not(F::contains(A::class(), "hidden")),
        r#"not(contains(@class,"hidden"))"#,
    );
}

#[test]
fn test_custom_functions() {
    assert_renders(&F::call("my-custom-func", ["some-value"]), r#"my-custom-func("some-value")"#);
    assert_renders(
        &xpathkit::fun!("another-func", A::id(), 123),
        "another-func(@id,123)",
    );
    assert_renders(&F::call("zero-arg-func", Vec::<xpathkit::Value>::new()), "zero-arg-func()");
}

#[test]
fn test_single_argument_functions_by_name() {
    let cases = [
        (F::string("test"), "string"),
        (F::string_length("test"), "string-length"),
        (F::boolean("test"), "boolean"),
        (F::number("test"), "number"),
        (F::sum("test"), "sum"),
        (F::floor("test"), "floor"),
        (F::ceiling("test"), "ceiling"),
        (F::round("test"), "round"),
    ];
    for (expr, name) in cases {
        assert_renders(&expr, &format!(r#"{name}("test")"#));
    }
}

#[test]
fn test_builders_compose_into_queries() {
    let query = E::ul().with_predicate(A::class().contains("menu"))
        / E::li().with_predicate(F::position().le(3));
    assert_renders(&query, r#"ul[contains(@class,"menu")]/li[position()<=3]"#);

    let labelled = E::input().with_predicate(
        A::id().equals("email") | A::name().all(["user", "email"]),
    );
    assert_renders(
        &labelled,
        r#"input[(@id="email" or (contains(@name,"user") and contains(@name,"email")))]"#,
    );
}
