//! Режимы SQL, влияющие на лексический анализ
//!
//! Из всех режимов сервера MySQL лексер учитывает только четыре. Остальные
//! режимы допускаются во входной строке `@@sql_mode`, но ни на что не влияют.

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Режим SQL, меняющий поведение лексера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SqlMode {
    /// `NOT` получает повышенный приоритет и отдельный тип токена
    HighNotPrecedence,
    /// `||` означает конкатенацию строк, а не логическое ИЛИ
    PipesAsConcat,
    /// Между именем функции и `(` допускаются пробелы
    IgnoreSpace,
    /// Обратная косая черта в строках не является экранирующим символом
    NoBackslashEscapes,
}

impl SqlMode {
    /// Все режимы в порядке объявления
    pub const ALL: [SqlMode; 4] = [
        SqlMode::HighNotPrecedence,
        SqlMode::PipesAsConcat,
        SqlMode::IgnoreSpace,
        SqlMode::NoBackslashEscapes,
    ];

    /// Имя режима в написании MySQL
    pub fn name(self) -> &'static str {
        match self {
            SqlMode::HighNotPrecedence => "HIGH_NOT_PRECEDENCE",
            SqlMode::PipesAsConcat => "PIPES_AS_CONCAT",
            SqlMode::IgnoreSpace => "IGNORE_SPACE",
            SqlMode::NoBackslashEscapes => "NO_BACKSLASH_ESCAPES",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for SqlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SqlMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        SqlMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::unknown_sql_mode(name))
    }
}

/// Режимы, которые меняют разбор токенов в MySQL, но лексером не поддерживаются
///
/// ANSI_QUOTES делает `"..."` идентификатором; здесь такие литералы остаются
/// строками.
const UNSUPPORTED_LEXICAL_MODES: &[&str] = &["ANSI_QUOTES"];

/// Режимы сервера, которые не влияют на разбор токенов
const NON_LEXICAL_MODES: &[&str] = &[
    "ALLOW_INVALID_DATES",
    "DB2",
    "ERROR_FOR_DIVISION_BY_ZERO",
    "MAXDB",
    "MSSQL",
    "MYSQL323",
    "MYSQL40",
    "NO_AUTO_CREATE_USER",
    "NO_AUTO_VALUE_ON_ZERO",
    "NO_DIR_IN_CREATE",
    "NO_ENGINE_SUBSTITUTION",
    "NO_FIELD_OPTIONS",
    "NO_KEY_OPTIONS",
    "NO_TABLE_OPTIONS",
    "NO_UNSIGNED_SUBTRACTION",
    "NO_ZERO_DATE",
    "NO_ZERO_IN_DATE",
    "ONLY_FULL_GROUP_BY",
    "ORACLE",
    "PAD_CHAR_TO_FULL_LENGTH",
    "POSTGRESQL",
    "REAL_AS_FLOAT",
    "STRICT_ALL_TABLES",
    "STRICT_TRANS_TABLES",
    "TIME_TRUNCATE_FRACTIONAL",
    "TRADITIONAL",
];

/// Причина, по которой известный режим сервера пропускается
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IgnoredMode {
    NonLexical,
    Unsupported,
}

impl IgnoredMode {
    fn classify(name: &str) -> Option<Self> {
        let known = |list: &[&str]| list.iter().any(|m| m.eq_ignore_ascii_case(name));
        if known(UNSUPPORTED_LEXICAL_MODES) {
            Some(IgnoredMode::Unsupported)
        } else if known(NON_LEXICAL_MODES) {
            Some(IgnoredMode::NonLexical)
        } else {
            None
        }
    }
}

/// Набор активных режимов SQL (битовое множество)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SqlModes(u8);

impl SqlModes {
    /// Пустой набор
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Возвращает копию набора с добавленным режимом
    pub fn with(mut self, mode: SqlMode) -> Self {
        self.insert(mode);
        self
    }

    pub fn insert(&mut self, mode: SqlMode) {
        self.0 |= mode.bit();
    }

    pub fn remove(&mut self, mode: SqlMode) {
        self.0 &= !mode.bit();
    }

    pub fn contains(self, mode: SqlMode) -> bool {
        self.0 & mode.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Активные режимы в порядке объявления
    pub fn iter(self) -> impl Iterator<Item = SqlMode> {
        SqlMode::ALL.into_iter().filter(move |mode| self.contains(*mode))
    }

    /// Собирает набор из имен режимов без учета регистра
    ///
    /// Составной режим `ANSI` раскрывается в `PIPES_AS_CONCAT` и `IGNORE_SPACE`.
    /// Известные режимы сервера, не влияющие на лексер, и неподдерживаемый
    /// ANSI_QUOTES пропускаются с предупреждением; неизвестные имена приводят
    /// к ошибке.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut modes = Self::empty();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if name.eq_ignore_ascii_case("ANSI") {
                modes.insert(SqlMode::PipesAsConcat);
                modes.insert(SqlMode::IgnoreSpace);
                continue;
            }
            match name.parse::<SqlMode>() {
                Ok(mode) => modes.insert(mode),
                Err(err) => match IgnoredMode::classify(name) {
                    Some(IgnoredMode::NonLexical) => {
                        log::warn!("Режим SQL {} не влияет на лексер и пропущен", name);
                    }
                    Some(IgnoredMode::Unsupported) => {
                        log::warn!(
                            "Режим SQL {} влияет на разбор, но не поддерживается и пропущен",
                            name
                        );
                    }
                    None => return Err(err),
                },
            }
        }
        Ok(modes)
    }

    /// Разбирает значение `@@sql_mode` вида `"A,B,C"`
    pub fn from_sql_mode_string(value: &str) -> Result<Self> {
        Self::from_names(value.split(','))
    }
}

impl From<SqlMode> for SqlModes {
    fn from(mode: SqlMode) -> Self {
        Self::empty().with(mode)
    }
}

impl FromIterator<SqlMode> for SqlModes {
    fn from_iter<T: IntoIterator<Item = SqlMode>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), SqlModes::with)
    }
}

impl TryFrom<Vec<String>> for SqlModes {
    type Error = Error;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::from_names(names)
    }
}

impl From<SqlModes> for Vec<String> {
    fn from(modes: SqlModes) -> Self {
        modes.iter().map(|mode| mode.name().to_string()).collect()
    }
}

impl fmt::Display for SqlModes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(SqlMode::name).collect();
        f.write_str(&names.join(","))
    }
}
