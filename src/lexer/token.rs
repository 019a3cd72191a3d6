//! Токены для лексера MySQL
//!
//! Токен не владеет текстом: он хранит тип и диапазон байтов исходного
//! буфера, а значение вычисляет по запросу.

use crate::lexer::token_type::TokenType;
use crate::lexer::unescape;
use std::borrow::Cow;
use std::fmt;

/// Токен с типом и положением в исходном тексте
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub token_type: TokenType,
    /// Смещение первого байта токена
    pub start: usize,
    /// Длина токена в байтах
    pub length: usize,
    /// Режим NO_BACKSLASH_ESCAPES на момент чтения токена
    no_backslash_escapes: bool,
    sql: &'a [u8],
}

impl<'a> Token<'a> {
    pub(crate) fn new(
        token_type: TokenType,
        sql: &'a [u8],
        start: usize,
        length: usize,
        no_backslash_escapes: bool,
    ) -> Self {
        Self {
            token_type,
            start,
            length,
            no_backslash_escapes,
            sql,
        }
    }

    /// Смещение байта сразу после токена
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn no_backslash_escapes(&self) -> bool {
        self.no_backslash_escapes
    }

    /// Исходные байты токена
    pub fn bytes(&self) -> &'a [u8] {
        &self.sql[self.start..self.end()]
    }

    /// Исходный текст токена
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes())
    }

    /// Значение токена в байтах
    ///
    /// Для строк и идентификаторов в кавычках снимаются кавычки и
    /// экранирование; для остальных типов возвращаются исходные байты.
    pub fn value_bytes(&self) -> Cow<'a, [u8]> {
        match self.token_type {
            TokenType::SingleQuotedText
            | TokenType::DoubleQuotedText
            | TokenType::BackTickQuotedId => {
                unescape::unquote(self.bytes(), self.no_backslash_escapes)
            }
            // N'...': префикс отбрасывается, дальше как обычная строка
            TokenType::NcharText => {
                unescape::unquote(&self.bytes()[1..], self.no_backslash_escapes)
            }
            _ => Cow::Borrowed(self.bytes()),
        }
    }

    /// Значение токена в виде строки (некорректный UTF-8 заменяется)
    pub fn value(&self) -> Cow<'a, str> {
        match self.value_bytes() {
            Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes),
            Cow::Owned(bytes) => match String::from_utf8(bytes) {
                Ok(value) => Cow::Owned(value),
                Err(err) => Cow::Owned(String::from_utf8_lossy(err.as_bytes()).into_owned()),
            },
        }
    }

    /// Отладочное имя типа токена
    pub fn name(&self) -> &'static str {
        self.token_type.name()
    }

    pub fn is_keyword(&self) -> bool {
        self.token_type.is_keyword()
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("token_type", &self.token_type)
            .field("start", &self.start)
            .field("length", &self.length)
            .field("text", &self.text())
            .finish()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}') at {}", self.token_type, self.text(), self.start)
    }
}
