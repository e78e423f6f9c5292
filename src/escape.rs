// Literal escaping for the emitted language. Printable Unicode passes
// through untouched; only quotes, backslash, and control characters are
// rewritten.

/// Escape and double-quote a string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push_str(&common_escape(c)),
        }
    }
    out.push('"');
    out
}

/// Escape and single-quote a character literal. A double quote needs no
/// escape inside a character literal; a single quote does.
pub fn char_literal(c: char) -> String {
    let body = match c {
        '\\' => "\\\\".to_string(),
        '\'' => "\\'".to_string(),
        _ => common_escape(c),
    };
    format!("'{body}'")
}

fn common_escape(c: char) -> String {
    match c {
        '\t' => "\\t".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\u{0008}' => "\\b".to_string(),
        c if is_iso_control(c) => format!("\\u{:04x}", c as u32),
        c => c.to_string(),
    }
}

fn is_iso_control(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001f}' | '\u{007f}'..='\u{009f}')
}
