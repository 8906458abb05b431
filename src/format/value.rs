//! Value literal rendering.
//!
//! `ctx` always carries the indentation of the line that *owns* the value:
//! the attribute line for [`RenderMode::AttributeValue`], or the enclosing
//! collection's own context for [`RenderMode::CollectionElement`]. A
//! collection opens with its kind name, puts entries two units below the
//! owner and closes one unit below it.

use tracing::trace;

use super::node::serialize_node;
use super::{FormattingContext, RenderMode};
use crate::errors::Result;
use crate::tree::Value;

/// Renders `value` as a literal.
///
/// Returns an empty string for an empty collection in
/// [`RenderMode::AttributeValue`]; the attribute writer drops such
/// attributes entirely.
///
/// # Examples
///
/// ```rust
/// use tree_snapshot::{format_value, FormattingContext, RenderMode, Value};
/// let ctx = FormattingContext::new("  ");
/// let v = Value::array(vec![Value::from(1), Value::Null]);
/// assert_eq!(
///     format_value(&v, &ctx, RenderMode::CollectionElement).unwrap(),
///     "Array [\n    1,\n    null,\n  ],"
/// );
/// assert_eq!(format_value(&Value::from(true), &ctx, RenderMode::AttributeValue).unwrap(), "true");
/// ```
pub fn format_value(value: &Value, ctx: &FormattingContext<'_>, mode: RenderMode) -> Result<String> {
    let literal = match value {
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => quote(s),
        Value::Function => "[Function]".to_string(),
        Value::Node(node) => {
            let inner = ctx.nested();
            let block = serialize_node(node, &inner)?;
            return Ok(match mode {
                RenderMode::AttributeValue => wrap_block(&block, ctx, &inner),
                RenderMode::CollectionElement => block + ",",
            });
        }
        Value::Array { kind, items } => {
            if items.is_empty() {
                return Ok(empty_collection(kind, "[]", mode));
            }
            trace!(kind = %kind, len = items.len(), "formatting array");
            let entries: Vec<_> = items.iter().map(|item| (None::<&str>, item)).collect();
            return format_collection(kind, ('[', ']'), &entries, ctx, mode);
        }
        Value::Record { kind, entries } => {
            if entries.is_empty() {
                return Ok(empty_collection(kind, "{}", mode));
            }
            trace!(kind = %kind, len = entries.len(), "formatting record");
            // OrdMap iterates in ascending key order.
            let entries: Vec<_> = entries
                .iter()
                .map(|(key, value)| (Some(key.as_str()), value))
                .collect();
            return format_collection(kind, ('{', '}'), &entries, ctx, mode);
        }
    };

    Ok(match mode {
        RenderMode::AttributeValue => literal,
        RenderMode::CollectionElement => literal + ",",
    })
}

/// Formats a number the way a JavaScript engine prints it.
///
/// # Examples
///
/// ```rust
/// use tree_snapshot::format::value::format_number;
/// assert_eq!(format_number(1.0), "1");
/// assert_eq!(format_number(-2.5), "-2.5");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

/// Strings are emitted verbatim between double quotes; nothing is escaped.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    out.push_str(s);
    out.push('"');
    out
}

fn empty_collection(kind: &str, brackets: &str, mode: RenderMode) -> String {
    match mode {
        RenderMode::AttributeValue => String::new(),
        RenderMode::CollectionElement => format!("{} {},", kind, brackets),
    }
}

fn format_collection(
    kind: &str,
    (open, close): (char, char),
    entries: &[(Option<&str>, &Value)],
    ctx: &FormattingContext<'_>,
    mode: RenderMode,
) -> Result<String> {
    let inner = ctx.nested();
    let entry_line = inner.nested();

    let mut body = String::new();
    body.push_str(kind);
    body.push(' ');
    body.push(open);
    for (key, value) in entries {
        entry_line.newline(&mut body);
        if let Some(key) = key {
            body.push_str(&quote(key));
            body.push_str(": ");
        }
        body.push_str(&format_value(value, &inner, RenderMode::CollectionElement)?);
    }
    inner.newline(&mut body);
    body.push(close);

    Ok(match mode {
        RenderMode::AttributeValue => wrap_block(&body, ctx, &inner),
        RenderMode::CollectionElement => body + ",",
    })
}

/// Places a multi-line block on its own lines inside an attribute's braces.
fn wrap_block(block: &str, owner: &FormattingContext<'_>, inner: &FormattingContext<'_>) -> String {
    let mut out = String::with_capacity(block.len() + 2 * inner.indent().len() + 2);
    inner.newline(&mut out);
    out.push_str(block);
    owner.newline(&mut out);
    out
}
