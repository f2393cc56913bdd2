//! Multi-line human-readable rendering for terminal and log output.

use tattle_context::Context;

/// Renders `context` as a multi-line human-readable report.
///
/// Produces a header line `<type_name> @<file>:<line>`, then one indented
/// line per key in sorted order: `"\n  <key>: <value>"` when the value
/// renders non-empty, or just `"\n  <key>"` for flag-style keys whose value
/// renders empty.
pub fn to_text(context: &Context) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} @{}:{}",
        context.type_name(),
        context.location().file(),
        context.location().line()
    ));

    for (key, value) in context {
        let text = value.to_text();
        if text.is_empty() {
            out.push_str(&format!("\n  {key}"));
        } else {
            out.push_str(&format!("\n  {key}: {text}"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tattle_context::SourceLocation;

    fn context_at(type_name: &'static str) -> (Context, SourceLocation) {
        let location = SourceLocation::capture();
        (Context::at(type_name, location), location)
    }

    #[test]
    fn empty_context_is_header_only() {
        let (ctx, loc) = context_at("SomeFailure");
        assert_eq!(
            to_text(&ctx),
            format!("SomeFailure @{}:{}", loc.file(), loc.line())
        );
    }

    #[test]
    fn keys_render_sorted_and_indented() {
        let (mut ctx, loc) = context_at("SomeFailure");
        ctx.set("zebra", 1u64);
        ctx.set("alpha", "first");
        let expected = format!(
            "SomeFailure @{}:{}\n  alpha: first\n  zebra: 1",
            loc.file(),
            loc.line()
        );
        assert_eq!(to_text(&ctx), expected);
    }

    #[test]
    fn flag_key_renders_without_separator() {
        let (mut ctx, _) = context_at("SomeFailure");
        ctx.set_flag("retried");
        ctx.set("empty_string", "");
        let out = to_text(&ctx);
        assert!(out.contains("\n  retried"));
        assert!(!out.contains("retried:"));
        // An empty string value also takes flag form.
        assert!(out.contains("\n  empty_string"));
        assert!(!out.contains("empty_string:"));
    }

    #[test]
    fn booleans_and_numbers_render_as_text() {
        let (mut ctx, _) = context_at("SomeFailure");
        ctx.set("on", true);
        ctx.set("count", 3u8);
        ctx.set("ratio", 0.5f64);
        let out = to_text(&ctx);
        assert!(out.contains("\n  on: true"));
        assert!(out.contains("\n  count: 3"));
        assert!(out.contains("\n  ratio: 0.5"));
    }
}
