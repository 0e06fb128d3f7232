//! String escape codec shared by the parser and the serializer.
//!
//! Exactly seven characters are escaped: newline, tab, backslash, backspace,
//! carriage return, double quote and form feed. `\u` escapes (and `\/`) are
//! accepted by the parser but never decoded here; they stay in the text as the
//! literal backslash sequence.

/// Map a character to the letter of its two-character escape, if it has one.
fn escape_letter(ch: char) -> Option<char> {
    match ch {
        '\n' => Some('n'),
        '\t' => Some('t'),
        '\\' => Some('\\'),
        '\u{8}' => Some('b'),
        '\r' => Some('r'),
        '"' => Some('"'),
        '\u{c}' => Some('f'),
        _ => None,
    }
}

/// Inverse of [`escape_letter`].
fn unescape_letter(letter: char) -> Option<char> {
    match letter {
        'n' => Some('\n'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        'b' => Some('\u{8}'),
        'r' => Some('\r'),
        '"' => Some('"'),
        'f' => Some('\u{c}'),
        _ => None,
    }
}

/// Append `s` to `out` with every recognized control character escaped.
pub(crate) fn escape_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match escape_letter(ch) {
            Some(letter) => {
                out.push('\\');
                out.push(letter);
            }
            None => out.push(ch),
        }
    }
}

/// Replace each of the seven recognized control characters with its escape sequence.
///
/// ```
/// use smalljson_core::escape;
/// assert_eq!(escape("a\"b\n"), r#"a\"b\n"#);
/// ```
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    escape_into(s, &mut out);
    out
}

/// Replace each recognized two-character escape sequence with its control character.
///
/// Scans left to right, so `\\u` decodes to a backslash followed by `u`.
/// Unrecognized sequences such as `\u0041` or `\/` are left untouched.
///
/// ```
/// use smalljson_core::unescape;
/// assert_eq!(unescape(r"tab\there"), "tab\there");
/// assert_eq!(unescape(r"\u0041"), r"\u0041");
/// ```
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek().copied().and_then(unescape_letter) {
            Some(decoded) => {
                chars.next();
                out.push(decoded);
            }
            None => out.push('\\'),
        }
    }
    out
}
