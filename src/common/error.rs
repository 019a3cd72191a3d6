//! Обработка ошибок для mysql-lexer
//!
//! Сам лексер никогда не возвращает ошибок: некорректный ввод означает
//! остановку сканирования. Ошибки ниже относятся к конфигурации, отладочным
//! таблицам и строгой обертке `Lexer::tokenize`.

use thiserror::Error;

/// Основной тип ошибки для mysql-lexer
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка разбора TOML конфигурации
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Ошибка сериализации TOML конфигурации
    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Неизвестный режим SQL
    #[error("Unknown SQL mode: {name}")]
    UnknownSqlMode { name: String },

    /// Неизвестное имя типа токена
    #[error("Unknown token type: {name}")]
    UnknownTokenType { name: String },

    /// Сканирование остановилось до конца входа
    #[error("Invalid input at byte {position}: {snippet:?}")]
    InvalidInput { position: usize, snippet: String },
}

/// Тип результата для mysql-lexer
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает ошибку неизвестного режима SQL
    pub fn unknown_sql_mode(name: impl Into<String>) -> Self {
        Self::UnknownSqlMode { name: name.into() }
    }

    /// Создает ошибку неизвестного типа токена
    pub fn unknown_token_type(name: impl Into<String>) -> Self {
        Self::UnknownTokenType { name: name.into() }
    }

    /// Создает ошибку некорректного ввода с фрагментом текста после позиции
    pub fn invalid_input(sql: &[u8], position: usize) -> Self {
        let end = (position + 16).min(sql.len());
        let start = position.min(end);
        Self::InvalidInput {
            position,
            snippet: String::from_utf8_lossy(&sql[start..end]).into_owned(),
        }
    }

    /// Позиция остановки лексера, если ошибка вызвана некорректным вводом
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidInput { position, .. } => Some(*position),
            _ => None,
        }
    }
}
