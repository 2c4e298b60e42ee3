use alloc::string::{String, ToString};
use core::fmt::Write;

use structof_reflect::Reflect;
use structof_reflect::ops::ReflectRef;

/// Wraps `text` in double quotes using Go's quoting rules.
///
/// `"` and `\` are backslash-escaped, as are the bell, backspace, form feed,
/// newline, carriage return and tab characters. Other non-printable characters
/// become `\xHH` below `0x80`, `\uHHHH` below `0x10000` and `\UHHHHHHHH`
/// above. Printability follows [`char::escape_debug`], so combining marks are
/// escaped as well, where Go would keep them.
pub(crate) fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if is_printable(c) => out.push(c),
            c => {
                let code = u32::from(c);
                // Writing to a `String` cannot fail.
                let _ = match code {
                    0..0x80 => write!(out, "\\x{code:02x}"),
                    0x80..0x10000 => write!(out, "\\u{code:04x}"),
                    _ => write!(out, "\\U{code:08x}"),
                };
            }
        }
    }
    out.push('"');
    out
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    c.escape_debug().len() == 1
}

/// Returns the text form used by the `string` option.
///
/// Scalars print their plain value, records their
/// [`reflect_display`](Reflect::reflect_display). Other kinds have none.
pub(crate) fn text_form(value: &dyn Reflect) -> Option<String> {
    match value.reflect_ref() {
        ReflectRef::Scalar(scalar) => Some(scalar.scalar().to_string()),
        _ => value.reflect_display(),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{quote, text_form};

    #[test]
    fn quoting() {
        assert_eq!(quote("23"), r#""23""#);
        assert_eq!(quote("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(quote("line\n"), r#""line\n""#);
    }

    #[test]
    fn quoting_non_printable() {
        assert_eq!(quote("a\u{1}"), r#""a\x01""#);
        assert_eq!(quote("\u{7}\u{b}\u{7f}"), r#""\a\v\x7f""#);
        assert_eq!(quote("no\u{a0}break"), r#""no\u00a0break""#);
        assert_eq!(quote("\u{e0001}"), r#""\U000e0001""#);
        assert_eq!(quote("héllo ☺"), r#""héllo ☺""#);
    }

    #[test]
    fn scalar_text() {
        assert_eq!(text_form(&true).as_deref(), Some("true"));
        assert_eq!(text_form(&-7_i16).as_deref(), Some("-7"));
        assert_eq!(text_form(&'c').as_deref(), Some("c"));
        assert_eq!(text_form(&vec![1_u8]), None);
    }
}
