//! Конфигурация для mysql-lexer
//!
//! Конфигурация задается один раз при создании лексера и дальше не меняется.

use crate::common::constants::{DEFAULT_MYSQL_VERSION, MAX_MYSQL_VERSION, MIN_MYSQL_VERSION};
use crate::common::{Error, Result};
use crate::lexer::sql_mode::{SqlMode, SqlModes};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Конфигурация лексера
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Целевая версия MySQL в формате MMmmPP (80038 = 8.0.38)
    pub mysql_version: u32,
    /// Активные режимы SQL
    pub sql_modes: SqlModes,
    /// Переопределение списка кодировок для префиксов `_charset`
    /// (имена без подчеркивания, в нижнем регистре)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underscore_charsets: Option<Vec<String>>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            mysql_version: DEFAULT_MYSQL_VERSION,
            sql_modes: SqlModes::empty(),
            underscore_charsets: None,
        }
    }
}

impl LexerConfig {
    /// Создает конфигурацию для указанной версии MySQL
    pub fn new(mysql_version: u32) -> Result<Self> {
        Self::default().with_version(mysql_version)
    }

    /// Устанавливает целевую версию MySQL
    pub fn with_version(mut self, mysql_version: u32) -> Result<Self> {
        validate_version(mysql_version)?;
        self.mysql_version = mysql_version;
        Ok(self)
    }

    /// Устанавливает набор режимов SQL
    pub fn with_sql_modes(mut self, sql_modes: impl Into<SqlModes>) -> Self {
        self.sql_modes = sql_modes.into();
        self
    }

    /// Добавляет один режим SQL
    pub fn with_sql_mode(mut self, mode: SqlMode) -> Self {
        self.sql_modes.insert(mode);
        self
    }

    /// Заменяет список кодировок, распознаваемых в префиксах `_charset`
    pub fn with_underscore_charsets<I, S>(mut self, charsets: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = Vec::new();
        for charset in charsets {
            names.push(normalize_charset(charset.as_ref())?);
        }
        self.underscore_charsets = Some(names);
        Ok(self)
    }

    /// Проверяет, активен ли режим SQL
    pub fn is_sql_mode_active(&self, mode: SqlMode) -> bool {
        self.sql_modes.contains(mode)
    }

    /// Проверяет корректность конфигурации
    pub fn validate(&self) -> Result<()> {
        validate_version(self.mysql_version)?;
        if let Some(charsets) = &self.underscore_charsets {
            for charset in charsets {
                if normalize_charset(charset)? != *charset {
                    return Err(Error::configuration(format!(
                        "charset name must be lowercase without leading underscore: {charset}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Разбирает конфигурацию из строки TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LexerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn validate_version(mysql_version: u32) -> Result<()> {
    if !(MIN_MYSQL_VERSION..=MAX_MYSQL_VERSION).contains(&mysql_version) {
        return Err(Error::configuration(format!(
            "mysql_version must be in MMmmPP form, got {mysql_version}"
        )));
    }
    Ok(())
}

fn normalize_charset(name: &str) -> Result<String> {
    let name = name.trim();
    let name = name.strip_prefix('_').unwrap_or(name);
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(Error::configuration(format!(
            "invalid charset name: {name:?}"
        )));
    }
    Ok(name.to_ascii_lowercase())
}
