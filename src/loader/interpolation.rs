//! `${name}` interpolation used by the default template loader.
//!
//! # Syntax
//!
//! - `${name}` - replaced with the binding's value
//! - `${layout.title}` - dotted lookup into mappings and sequences
//! - `$${escaped}` - produces literal `${escaped}` in output
//!
//! Unknown names render as the empty string and are logged.

use serde_yaml::Value;
use tracing::warn;

use super::context::TemplateContext;

/// A segment of an interpolated template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Variable reference: ${name}
    Variable(String),
}

/// Split a template into literal and variable segments.
pub fn parse_interpolation(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut literal = String::new();

    while let Some(c) = chars.next() {
        if c != '$' {
            literal.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                if chars.peek() == Some(&'{') {
                    // $${...} -> literal ${...}
                    literal.push('$');
                    for c in chars.by_ref() {
                        literal.push(c);
                        if c == '}' {
                            break;
                        }
                    }
                } else {
                    literal.push('$');
                }
            }
            Some('{') => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }

                if closed {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Variable(name.trim().to_string()));
                } else {
                    // Unterminated: keep the text as written.
                    literal.push_str("${");
                    literal.push_str(&name);
                }
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

/// Text form of a bound value.
///
/// Scalars print as-is, null prints nothing, and collections print as JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
            serde_json::to_string(value).unwrap_or_default()
        }
    }
}

/// Render a template against a context.
pub fn render_template(input: &str, context: &TemplateContext) -> String {
    let mut output = String::with_capacity(input.len());

    for segment in parse_interpolation(input) {
        match segment {
            Segment::Literal(text) => output.push_str(&text),
            Segment::Variable(name) => match context.lookup(&name) {
                Some(value) => output.push_str(&value_to_text(value)),
                None => warn!(variable = %name, "Unknown template variable"),
            },
        }
    }

    output
}
