//! Byte classification predicates for lexing. ASCII only: non-ASCII
//! bytes never classify as identifier characters.

pub(super) fn is_binary_digit(byte: u8) -> bool {
    matches!(byte, b'0' | b'1')
}

pub(super) fn is_octal_digit(byte: u8) -> bool {
    matches!(byte, b'0'..=b'7')
}

pub(super) fn is_decimal_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

pub(super) fn is_hex_digit(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

pub(super) fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

pub(super) fn is_identifier_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

pub(super) fn is_non_newline_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\x0b' | b'\x0c' | b'\r')
}

pub(super) fn is_whitespace(byte: u8) -> bool {
    byte == b'\n' || is_non_newline_whitespace(byte)
}

/// Closing byte for a percent literal delimiter. The four bracket pairs
/// match their counterpart; any other byte terminates itself.
pub(super) fn closing_delimiter(opening: u8) -> u8 {
    match opening {
        b'(' => b')',
        b'[' => b']',
        b'{' => b'}',
        b'<' => b'>',
        other => other,
    }
}
