//! Снятие кавычек и экранирования со строковых литералов MySQL
//!
//! Замены выполняются за один проход слева направо, поэтому результат одной
//! замены никогда не участвует в следующей: `\\n` дает `\n` из двух символов,
//! а не перевод строки.

use std::borrow::Cow;

/// Возвращает значение литерала в кавычках
///
/// `raw` содержит литерал вместе с ограничивающими кавычками. Для обратных
/// кавычек и в режиме NO_BACKSLASH_ESCAPES сворачиваются только удвоенные
/// кавычки.
pub fn unquote(raw: &[u8], no_backslash_escapes: bool) -> Cow<'_, [u8]> {
    if raw.len() < 2 {
        return Cow::Borrowed(raw);
    }
    let quote = raw[0];
    let inner = &raw[1..raw.len() - 1];

    if quote == b'`' || no_backslash_escapes {
        collapse_doubled_quotes(inner, quote)
    } else {
        unescape(inner, quote)
    }
}

fn collapse_doubled_quotes(inner: &[u8], quote: u8) -> Cow<'_, [u8]> {
    if !inner.contains(&quote) {
        return Cow::Borrowed(inner);
    }

    let mut value = Vec::with_capacity(inner.len());
    let mut i = 0;
    while i < inner.len() {
        value.push(inner[i]);
        if inner[i] == quote && inner.get(i + 1) == Some(&quote) {
            i += 2;
        } else {
            i += 1;
        }
    }
    Cow::Owned(value)
}

fn unescape(inner: &[u8], quote: u8) -> Cow<'_, [u8]> {
    if !inner.iter().any(|&b| b == b'\\' || b == quote) {
        return Cow::Borrowed(inner);
    }

    let mut value = Vec::with_capacity(inner.len());
    let mut i = 0;
    while i < inner.len() {
        let byte = inner[i];
        if byte == quote && inner.get(i + 1) == Some(&quote) {
            value.push(quote);
            i += 2;
            continue;
        }
        if byte != b'\\' {
            value.push(byte);
            i += 1;
            continue;
        }

        let Some(&escaped) = inner.get(i + 1) else {
            value.push(byte);
            break;
        };
        match escaped {
            b'0' => value.push(0),
            b'b' => value.push(0x08),
            b'n' => value.push(b'\n'),
            b'r' => value.push(b'\r'),
            b't' => value.push(b'\t'),
            b'Z' => value.push(0x1A),
            // LIKE-шаблоны: обратная косая черта сохраняется
            b'%' | b'_' => value.extend_from_slice(&[b'\\', escaped]),
            // Остальное, включая \\, \' и \", дает сам символ. Байты продолжения
            // многобайтового символа копируются следующими итерациями.
            other => value.push(other),
        }
        i += 2;
    }
    Cow::Owned(value)
}
