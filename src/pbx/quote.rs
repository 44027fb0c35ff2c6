//! Token quoting for pbxproj-style output
//!
//! Project files accept a bare token only when every character is harmless to
//! the parser that reads the file back. Anything else is escaped and wrapped
//! in double quotes. The rules live here so a serializer only has to decide
//! *where* a token goes, never *how* it is spelled:
//!
//!     PRODUCT_NAME = "My App";
//!     path = Sources/main.m;     is spelled    path = "Sources/main.m";

/// Characters that never force quoting on their own.
fn is_safe(ch: char) -> bool {
    matches!(ch, '$' | '_' | '.') || ch.is_ascii_alphanumeric()
}

/// A token whose first and last characters are both `"` is trusted as
/// already quoted. Only the two end characters are inspected.
fn is_wrapped(token: &str) -> bool {
    token.starts_with('"') && token.ends_with('"')
}

/// Builds the escaped spelling of `token` and decides whether it must be
/// quote-wrapped.
///
/// Escaping replaces backslash, double quote, tab and newline with their
/// two-character sequences; every other character is copied through
/// unchanged. Quoting is forced by any character outside the safe set, or
/// by a `//` or `___` run in the escaped spelling, which a reader could
/// otherwise take for a comment start or a reserved token.
fn scan(token: &str) -> (String, bool) {
    let mut escaped = String::with_capacity(token.len() * 2 + 2);
    let mut needs_quoting = false;

    for ch in token.chars() {
        if !is_safe(ch) {
            needs_quoting = true;
        }
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }

    // The substring rules apply to the escaped spelling, not the raw token.
    if escaped.contains("//") || escaped.contains("___") {
        needs_quoting = true;
    }

    (escaped, needs_quoting)
}

/// Returns the representation of `token` suitable for a project file:
/// escaped, and wrapped in double quotes when required.
///
/// Total over every input, including the empty string, which comes back
/// empty and unquoted. Already-wrapped tokens are returned unchanged, even
/// when their interior would otherwise need escaping.
pub fn escape(token: &str) -> String {
    if is_wrapped(token) {
        return token.to_string();
    }

    let (escaped, needs_quoting) = scan(token);
    if needs_quoting {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

/// Returns true when [`escape`] would quote-wrap `token`.
///
/// Already-wrapped tokens report false, matching their passthrough in
/// [`escape`].
pub fn needs_quoting(token: &str) -> bool {
    if is_wrapped(token) {
        return false;
    }
    scan(token).1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_tokens_pass_through() {
        assert_eq!(escape("Sources"), "Sources");
        assert_eq!(escape("main.m"), "main.m");
        assert_eq!(escape("$PROJECT_DIR"), "$PROJECT_DIR");
        assert_eq!(escape("lib_foo.2.a"), "lib_foo.2.a");
    }

    #[test]
    fn space_forces_quoting() {
        assert_eq!(escape("My App"), "\"My App\"");
    }

    #[test]
    fn backslash_is_doubled_and_quoted() {
        assert_eq!(escape("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn newline_becomes_two_characters() {
        assert_eq!(escape("line1\nline2"), "\"line1\\nline2\"");
    }

    #[test]
    fn tab_becomes_two_characters() {
        assert_eq!(escape("col1\tcol2"), "\"col1\\tcol2\"");
    }

    #[test]
    fn embedded_quote_is_escaped() {
        assert_eq!(escape("say \"hi\" now"), "\"say \\\"hi\\\" now\"");
    }

    #[test]
    fn double_slash_forces_quoting() {
        assert_eq!(escape("has//comment"), "\"has//comment\"");
    }

    #[test]
    fn triple_underscore_forces_quoting() {
        // Each underscore is safe on its own; only the run forces quoting.
        assert_eq!(escape("a___b"), "\"a___b\"");
        assert_eq!(escape("a__b"), "a__b");
    }

    #[test]
    fn already_wrapped_token_is_not_rewrapped() {
        assert_eq!(escape("\"already quoted\""), "\"already quoted\"");
    }

    #[test]
    fn wrapped_check_inspects_ends_only() {
        // Malformed interiors are trusted as-is once the ends are quotes.
        assert_eq!(escape("\"a \" b\""), "\"a \" b\"");
    }

    #[test]
    fn lone_quote_counts_as_wrapped() {
        // First and last character are the same quote.
        assert_eq!(escape("\""), "\"");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(escape(""), "");
        assert!(!needs_quoting(""));
    }

    #[test]
    fn non_ascii_letters_are_unsafe() {
        assert_eq!(escape("café"), "\"café\"");
        assert_eq!(escape("日本語"), "\"日本語\"");
    }

    #[test]
    fn control_characters_copy_through() {
        assert_eq!(escape("a\u{0}b"), "\"a\u{0}b\"");
        assert_eq!(escape("bell\u{7}"), "\"bell\u{7}\"");
    }

    #[test]
    fn needs_quoting_matches_escape() {
        for token in ["Sources", "My App", "a___b", "a//b", "", "x.y.z"] {
            let wrapped = escape(token) != token;
            assert_eq!(needs_quoting(token), wrapped, "token: {:?}", token);
        }
    }

    #[test]
    fn needs_quoting_false_for_wrapped_input() {
        assert!(!needs_quoting("\"already quoted\""));
    }
}
