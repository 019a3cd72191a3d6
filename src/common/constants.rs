//! Константы для mysql-lexer

/// Версия MySQL по умолчанию (8.0.38)
pub const DEFAULT_MYSQL_VERSION: u32 = 80038;

/// Минимальная допустимая версия в формате MMmmPP
pub const MIN_MYSQL_VERSION: u32 = 10000;

/// Максимальная допустимая версия в формате MMmmPP
pub const MAX_MYSQL_VERSION: u32 = 999999;

/// Оператор `->` появился в MySQL 5.7.8
pub const JSON_SEPARATOR_MIN_VERSION: u32 = 50708;

/// Оператор `->>` появился в MySQL 5.7.13
pub const JSON_UNQUOTED_SEPARATOR_MIN_VERSION: u32 = 50713;

/// Количество цифр версии в условном комментарии `/*!NNNNN`
pub const MYSQL_COMMENT_VERSION_DIGITS: usize = 5;

/// Верхняя граница 32-битного знакового целого
pub const INT32_MAX_DIGITS: &[u8] = b"2147483647";

/// Верхняя граница 64-битного знакового целого
pub const INT64_MAX_DIGITS: &[u8] = b"9223372036854775807";

/// Верхняя граница 64-битного беззнакового целого
pub const UINT64_MAX_DIGITS: &[u8] = b"18446744073709551615";

/// Максимальная длина ключевого слова; более длинный текст не ищется в таблице
pub const MAX_KEYWORD_LENGTH: usize = 48;
