//! JSON rendering with string escaping for machine ingestion.

use tattle_context::{Context, Value};

/// Escapes `input` for inclusion in a JSON string literal.
///
/// `"` and `\` are backslash-escaped; newline, carriage return, and tab
/// become `\n`, `\r`, `\t`; any other control byte below 0x20 becomes
/// `\u00XX` with lowercase hex digits. Everything else passes through
/// unchanged, including multi-byte UTF-8 sequences. The same escaper is
/// applied to every string the JSON renderer emits: keys, the `type` and
/// `file` members, and string values alike.
pub fn escape_json(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Renders one value as a JSON-typed fragment.
fn value_to_json(value: &Value) -> String {
    match value {
        Value::Empty => "null".to_string(),
        Value::Bool(v) => {
            if *v {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        Value::I64(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::Str(v) => format!("\"{}\"", escape_json(v)),
    }
}

/// Renders `context` as a single-line JSON object.
///
/// The schema is fixed:
/// `{"type":"<name>","source":{"file":"<path>","line":<n>}[,"data":{...}]}`
/// with member order `type`, `source`, `data`. The `data` member is present
/// only when the context holds at least one entry; its values are
/// JSON-typed (numerics unquoted, booleans bare, the flag marker as `null`,
/// strings quoted and escaped).
pub fn to_json(context: &Context) -> String {
    let mut out = String::new();
    out.push('{');

    out.push_str(&format!(
        "\"type\":\"{}\"",
        escape_json(context.type_name())
    ));

    let location = context.location();
    out.push_str(&format!(
        ",\"source\":{{\"file\":\"{}\",\"line\":{}}}",
        escape_json(location.file()),
        location.line()
    ));

    if !context.is_empty() {
        out.push_str(",\"data\":{");
        let mut first = true;
        for (key, value) in context {
            if !first {
                out.push(',');
            }
            first = false;
            out.push_str(&format!(
                "\"{}\":{}",
                escape_json(key),
                value_to_json(value)
            ));
        }
        out.push('}');
    }

    out.push('}');
    out
}
