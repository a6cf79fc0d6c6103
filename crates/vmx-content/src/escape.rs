//! Quoting of values
//!
//! Only the double quote is escaped. A backslash that is not followed by a
//! quote is an ordinary character.

/// Wrap a value in double quotes, escaping embedded quotes as `\"`.
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    quoted.push_str(&value.replace('"', "\\\""));
    quoted.push('"');
    quoted
}

/// Turn every `\"` back into `"`.
pub fn unescape(value: &str) -> String {
    value.replace("\\\"", "\"")
}

/// Byte index of the first `"` at or after `start` that is not preceded by `\`.
pub fn find_closing_quote(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    (start.max(1)..bytes.len()).find(|&i| bytes[i] == b'"' && bytes[i - 1] != b'\\')
}
