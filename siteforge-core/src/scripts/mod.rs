//! Provides the scripts injected into every exported document.
//!
//! The behaviour of each script is modelled in Rust so that it can be tested outside of a browser, and is only
//!   serialized to script text when a document is compiled.

pub mod countdown;
pub mod watermark;

use humphrey_json::Value;

/// Compacts script source by trimming every line and dropping blank ones.
///
/// Every statement in the sources must be terminated explicitly, since lines are not otherwise rewritten.
pub fn compact(source: &str) -> String {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replaces every `@NAME@` marker in the source with its value.
pub fn fill(source: &str, values: &[(&str, String)]) -> String {
    values.iter().fold(source.to_string(), |acc, (name, value)| {
        acc.replace(&format!("@{}@", name), value)
    })
}

/// Encodes a string as a script string literal which is safe to place inside a `<script>` element.
///
/// Every `<` is written as `\u003c`, so the literal can neither close the element nor open a comment in it.
pub fn js_string(s: &str) -> String {
    Value::String(s.to_string()).serialize().replace('<', "\\u003c")
}
