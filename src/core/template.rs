//! Runtime message templates
//!
//! Messages logged with positional arguments use `{}` placeholders, filled
//! left to right. `{{` and `}}` produce literal braces.

use super::field_value::FieldValue;
use std::fmt::Write;

/// Render `template` against `args`.
///
/// Placeholders left without an argument are kept verbatim. Surplus arguments
/// are appended as ` %!(EXTRA a, b)` so they are never silently lost.
///
/// ```
/// use rust_logger_facade::core::template::render;
/// use rust_logger_facade::FieldValue;
///
/// let args = [FieldValue::from("alice"), FieldValue::from(3_i64)];
/// assert_eq!(render("{} logged in {} times", &args), "alice logged in 3 times");
/// ```
pub fn render(template: &str, args: &[FieldValue]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut args_iter = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' if chars.peek() == Some(&'}') => {
                chars.next();
                match args_iter.next() {
                    Some(arg) => {
                        let _ = write!(out, "{}", arg);
                    }
                    None => out.push_str("{}"),
                }
            }
            other => out.push(other),
        }
    }

    let extra: Vec<String> = args_iter.map(ToString::to_string).collect();
    if !extra.is_empty() {
        let _ = write!(out, " %!(EXTRA {})", extra.join(", "));
    }

    out
}
