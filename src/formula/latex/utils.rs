// LaTeX escaping utilities
//
// Reserved characters are prefixed with a backslash unless the input already
// escaped them.

use memchr::memchr3;

/// Characters with a special meaning in LaTeX math mode.
pub const RESERVED_CHARS: &str = "{}_^#&$%~";

/// SIMD-accelerated check for any reserved LaTeX character.
#[inline]
pub fn contains_reserved(text: &str) -> bool {
    let bytes = text.as_bytes();
    memchr3(b'{', b'}', b'_', bytes).is_some()
        || memchr3(b'^', b'#', b'&', bytes).is_some()
        || memchr3(b'$', b'%', b'~', bytes).is_some()
}

/// Escape reserved LaTeX characters in `text`.
///
/// A reserved character directly preceded by a backslash in the input is
/// left alone, so `\%` stays `\%` instead of becoming `\\%`.
///
/// # Examples
///
/// ```
/// use omml_latex::escape_latex;
///
/// assert_eq!(escape_latex("{"), "\\{");
/// assert_eq!(escape_latex("50%"), "50\\%");
/// assert_eq!(escape_latex("\\%"), "\\%");
/// ```
pub fn escape_latex(text: &str) -> String {
    if !contains_reserved(text) {
        return text.to_string();
    }
    escape_latex_with(text, |c| RESERVED_CHARS.contains(c))
}

/// Escape with a caller-provided reserved set.
pub fn escape_latex_with(text: &str, is_reserved: impl Fn(char) -> bool) -> String {
    let mut escaped = String::with_capacity(text.len() + 8);
    let mut last = None;
    for c in text.chars() {
        if is_reserved(c) && last != Some('\\') {
            escaped.push('\\');
        }
        escaped.push(c);
        last = Some(c);
    }
    escaped
}
