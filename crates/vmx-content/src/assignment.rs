//! `KEY=VALUE` command-line arguments

use crate::error::{Error, Result};
use crate::escape::unescape;

/// Split a `KEY=VALUE` argument into key and value.
///
/// The split happens at the first `=` and both halves are trimmed. A value
/// wrapped in double quotes has them removed and `\"` unescaped, so
/// `name="a \"b\""` and `name=a "b"` give the same value.
pub fn parse_assignment(input: &str) -> Result<(String, String)> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| Error::invalid_input(input, "expected KEY=VALUE"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(Error::invalid_input(input, "key cannot be empty"));
    }

    let value = value.trim();
    let value = match value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    {
        Some(inner) => unescape(inner),
        None => value.to_string(),
    };

    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("guestOS=linux", "guestOS", "linux")]
    #[case("  memsize = 4096 ", "memsize", "4096")]
    #[case("displayName=\"My VM\"", "displayName", "My VM")]
    #[case("note=\"say \\\"hi\\\"\"", "note", "say \"hi\"")]
    #[case("args=a=b", "args", "a=b")]
    #[case("empty=", "empty", "")]
    #[case("quotes=\"\"", "quotes", "")]
    #[case("lone=\"", "lone", "\"")]
    fn test_valid_assignments(#[case] input: &str, #[case] key: &str, #[case] value: &str) {
        let (k, v) = parse_assignment(input).unwrap();
        assert_eq!(k, key);
        assert_eq!(v, value);
    }

    #[rstest]
    #[case("no-equals")]
    #[case("=value")]
    #[case("   = value")]
    fn test_invalid_assignments(#[case] input: &str) {
        assert!(matches!(
            parse_assignment(input),
            Err(Error::InvalidInput { .. })
        ));
    }
}
