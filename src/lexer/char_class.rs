//! Таблица классов байтов для сканера
//!
//! Один поиск в таблице вместо цепочки сравнений в горячих циклах.

const WHITESPACE: u8 = 0b0000_0001;
const IDENTIFIER: u8 = 0b0000_0010;
const DIGIT: u8 = 0b0000_0100;
const HEX_DIGIT: u8 = 0b0000_1000;
const AT_SUFFIX: u8 = 0b0001_0000;

const CHAR_CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;

    while i < 256 {
        let c = i as u8;
        let mut flags = 0u8;

        // Пробел, табуляция, перевод строки, возврат каретки, перевод страницы
        if matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0C) {
            flags |= WHITESPACE;
        }
        if matches!(c, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$') {
            flags |= IDENTIFIER | AT_SUFFIX;
        }
        if matches!(c, b'0'..=b'9') {
            flags |= DIGIT | HEX_DIGIT;
        }
        if matches!(c, b'a'..=b'f' | b'A'..=b'F') {
            flags |= HEX_DIGIT;
        }
        if c == b'.' {
            flags |= AT_SUFFIX;
        }

        table[i] = flags;
        i += 1;
    }

    table
};

#[inline]
const fn classify_byte(c: u8) -> u8 {
    CHAR_CLASS_TABLE[c as usize]
}

#[inline]
pub(crate) const fn is_whitespace(c: u8) -> bool {
    classify_byte(c) & WHITESPACE != 0
}

/// ASCII-символ идентификатора без кавычек: `[A-Za-z0-9_$]`
#[inline]
pub(crate) const fn is_identifier_byte(c: u8) -> bool {
    classify_byte(c) & IDENTIFIER != 0
}

#[inline]
pub(crate) const fn is_digit(c: u8) -> bool {
    classify_byte(c) & DIGIT != 0
}

#[inline]
pub(crate) const fn is_hex_digit(c: u8) -> bool {
    classify_byte(c) & HEX_DIGIT != 0
}

#[inline]
pub(crate) const fn is_binary_digit(c: u8) -> bool {
    matches!(c, b'0' | b'1')
}

/// Символ суффикса `@name`: `[A-Za-z0-9_.$]`
#[inline]
pub(crate) const fn is_at_suffix_byte(c: u8) -> bool {
    classify_byte(c) & AT_SUFFIX != 0
}

/// Длина корректной UTF-8 последовательности в диапазоне U+0080..U+FFFF
///
/// Возвращает 2 или 3 для допустимой последовательности в начале `bytes` и 0
/// иначе. Суррогаты, overlong-формы и 4-байтовые символы не допускаются.
#[inline]
pub(crate) fn utf8_identifier_length(bytes: &[u8]) -> usize {
    let continuation = |i: usize| matches!(bytes.get(i), Some(0x80..=0xBF));
    match bytes.first() {
        Some(0xC2..=0xDF) if continuation(1) => 2,
        Some(0xE0) if matches!(bytes.get(1), Some(0xA0..=0xBF)) && continuation(2) => 3,
        Some(0xE1..=0xEC | 0xEE..=0xEF) if continuation(1) && continuation(2) => 3,
        Some(0xED) if matches!(bytes.get(1), Some(0x80..=0x9F)) && continuation(2) => 3,
        _ => 0,
    }
}
