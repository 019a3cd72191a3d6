//! mysql-lexer - лексический анализатор SQL для MySQL
//!
//! Этот крейт разбивает SQL текст на токены так, как это делает сервер MySQL
//! заданной версии с заданными режимами SQL: ключевые слова с учетом версии,
//! синонимы, функции, условные комментарии `/*!NNNNN ... */`, префиксы
//! кодировок `_charset` и значения строковых литералов.

pub mod cli;
pub mod common;
pub mod lexer;

pub use common::error::{Error, Result};
pub use common::LexerConfig;
pub use lexer::{Lexer, SqlMode, SqlModes, Token, TokenType};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
