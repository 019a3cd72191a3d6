//! Лексический анализатор MySQL
//!
//! Преобразует SQL текст в последовательность токенов с учетом целевой версии
//! сервера и активных режимов SQL. Сканер однопроходный, работает над байтами
//! исходного буфера и не копирует его.
//!
//! Некорректный ввод не вызывает ошибок: лексер просто перестает выдавать
//! токены и остается в этом состоянии.

use crate::common::constants::{
    INT32_MAX_DIGITS, INT64_MAX_DIGITS, JSON_SEPARATOR_MIN_VERSION,
    JSON_UNQUOTED_SEPARATOR_MIN_VERSION, MAX_KEYWORD_LENGTH, MYSQL_COMMENT_VERSION_DIGITS,
    UINT64_MAX_DIGITS,
};
use crate::common::{Error, LexerConfig, Result};
use crate::lexer::char_class::{
    is_at_suffix_byte, is_binary_digit, is_digit, is_hex_digit, is_identifier_byte,
    is_whitespace, utf8_identifier_length,
};
use crate::lexer::keywords;
use crate::lexer::sql_mode::SqlMode;
use crate::lexer::token::Token;
use crate::lexer::token_type::TokenType;
use std::collections::HashSet;

/// Лексический анализатор MySQL
pub struct Lexer<'a> {
    /// Исходный текст
    sql: &'a [u8],
    /// Версия и режимы SQL
    config: LexerConfig,
    /// Переопределенный список кодировок `_charset`
    underscore_charsets: Option<HashSet<String>>,
    /// Смещение следующего непрочитанного байта
    position: usize,
    /// Смещение начала текущего токена
    token_start: usize,
    /// Тип текущего токена
    token_type: Option<TokenType>,
    /// Внутри активного условного комментария `/*! ... */`
    in_mysql_comment: bool,
    /// Сканирование завершено (EOF уже выдан или ввод некорректен)
    halted: bool,
    /// Токен EOF был прочитан
    eof_reached: bool,
}

impl<'a> Lexer<'a> {
    /// Создает лексер с конфигурацией по умолчанию
    pub fn new(sql: &'a str) -> Self {
        Self::from_parts(sql.as_bytes(), LexerConfig::default())
    }

    /// Создает лексер для произвольных байтов с конфигурацией по умолчанию
    pub fn from_bytes(sql: &'a [u8]) -> Self {
        Self::from_parts(sql, LexerConfig::default())
    }

    /// Создает лексер с указанной конфигурацией
    pub fn with_config(sql: &'a [u8], config: LexerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(sql, config))
    }

    fn from_parts(sql: &'a [u8], config: LexerConfig) -> Self {
        let underscore_charsets = config
            .underscore_charsets
            .as_ref()
            .map(|names| names.iter().cloned().collect());
        Self {
            sql,
            config,
            underscore_charsets,
            position: 0,
            token_start: 0,
            token_type: None,
            in_mysql_comment: false,
            halted: false,
            eof_reached: false,
        }
    }

    /// Активная конфигурация
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Смещение следующего непрочитанного байта
    ///
    /// После остановки на некорректном вводе указывает на начало
    /// некорректного токена.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Весь ввод разобран и токен EOF выдан
    pub fn reached_eof(&self) -> bool {
        self.eof_reached
    }
}

// Подключаем методы из отдельных файлов
include!("lexer_methods.rs");
include!("lexer_readers.rs");
