//! Лексический анализатор MySQL
//!
//! Токены, их типы, статические таблицы ключевых слов и режимы SQL.

mod char_class;
pub mod keywords;
pub mod lexer;
pub mod sql_mode;
pub mod token;
pub mod token_type;
pub mod unescape;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use lexer::Lexer;
pub use sql_mode::{SqlMode, SqlModes};
pub use token::Token;
pub use token_type::TokenType;
