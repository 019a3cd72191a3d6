//! Общие типы и утилиты для mysql-lexer

pub mod config;
pub mod constants;
pub mod error;

pub use config::LexerConfig;
pub use constants::*;
pub use error::{Error, Result};
