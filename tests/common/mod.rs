// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use xpathkit::Render;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Routes library logging to the test harness; `RUST_LOG` picks the level.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Renders `node` and compares it with `expected`.
#[track_caller]
pub fn assert_renders(node: &impl Render, expected: &str) {
    match node.render() {
        Ok(text) => assert_eq!(text, expected),
        Err(e) => panic!("expected `{expected}`, rendering failed: {e}"),
    }
}
