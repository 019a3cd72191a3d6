//! Статические таблицы ключевых слов MySQL
//!
//! Таблицы заполняются один раз на процесс и только читаются, поэтому
//! разделяются всеми экземплярами лексера без синхронизации.

use crate::lexer::token_type::TokenType;
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Версии появления (положительные) и удаления (отрицательные) ключевых слов
const VERSION_TABLE: &[(TokenType, i32)] = &[
    (TokenType::Account, 50707),
    (TokenType::Active, 80014),
    (TokenType::Admin, 80000),
    (TokenType::Always, 50707),
    (TokenType::Analyse, -80000),
    (TokenType::Array, 80017),
    (TokenType::AssignGtidsToAnonymousTransactions, 80023),
    (TokenType::Attribute, 80021),
    (TokenType::Authentication, 80027),
    (TokenType::Authors, -50700),
    (TokenType::Auto, 80200),
    (TokenType::Bernoulli, 80200),
    (TokenType::Buckets, 80000),
    (TokenType::Bulk, 80400),
    (TokenType::ChallengeResponse, 80027),
    (TokenType::Channel, 50706),
    (TokenType::Clone, 80000),
    (TokenType::Component, 80000),
    (TokenType::Compression, 50707),
    (TokenType::Contributors, -50700),
    (TokenType::CumeDist, 80000),
    (TokenType::DefaultAuth, 50604),
    (TokenType::Definition, 80011),
    (TokenType::DenseRank, 80000),
    (TokenType::Description, 80011),
    (TokenType::DesKeyFile, -80000),
    (TokenType::Empty, 80000),
    (TokenType::Encryption, 50711),
    (TokenType::Enforced, 80017),
    (TokenType::EngineAttribute, 80021),
    (TokenType::Except, 80000),
    (TokenType::Exclude, 80000),
    (TokenType::Expire, 50606),
    (TokenType::Export, 50606),
    (TokenType::Factor, 80027),
    (TokenType::FailedLoginAttempts, 80019),
    (TokenType::FileBlockSize, 50707),
    (TokenType::Filter, 50700),
    (TokenType::Finish, 80027),
    (TokenType::FirstValue, 80000),
    (TokenType::Following, 80000),
    (TokenType::Follows, 50700),
    (TokenType::Generate, 80032),
    (TokenType::Generated, 50707),
    (TokenType::GetMasterPublicKey, 80000),
    (TokenType::GetSourcePublicKey, 80023),
    (TokenType::Grouping, 80000),
    (TokenType::Groups, 80000),
    (TokenType::GroupReplication, 50707),
    (TokenType::Gtids, 80300),
    (TokenType::GtidOnly, 80027),
    (TokenType::Histogram, 80000),
    (TokenType::History, 80000),
    (TokenType::Inactive, 80014),
    (TokenType::Initial, 80027),
    (TokenType::Initiate, 80027),
    (TokenType::Instance, 50713),
    (TokenType::Intersect, 80031),
    (TokenType::Invisible, 80000),
    (TokenType::Json, 50708),
    (TokenType::JsonArrayagg, 80000),
    (TokenType::JsonObjectagg, 80000),
    (TokenType::JsonTable, 80000),
    (TokenType::JsonValue, 80021),
    (TokenType::Keyring, 80024),
    (TokenType::Lag, 80000),
    (TokenType::LastValue, 80000),
    (TokenType::Lateral, 80017),
    (TokenType::Lead, 80000),
    (TokenType::Locked, 80000),
    (TokenType::Log, 80200),
    (TokenType::Manual, 80400),
    (TokenType::MasterAutoPosition, 50605),
    (TokenType::MasterBind, 50602),
    (TokenType::MasterCompressionAlgorithm, 80018),
    (TokenType::MasterPublicKeyPath, 80000),
    (TokenType::MasterRetryCount, 50601),
    (TokenType::MasterSslCrl, 50603),
    (TokenType::MasterSslCrlpath, 50603),
    (TokenType::MasterTlsCiphersuites, 80018),
    (TokenType::MasterTlsVersion, 50713),
    (TokenType::MasterZstdCompressionLevel, 80018),
    (TokenType::Member, 80017),
    (TokenType::Nested, 80000),
    (TokenType::NetworkNamespace, 80017),
    (TokenType::Never, 50704),
    (TokenType::Nowait, 80000),
    (TokenType::NthValue, 80000),
    (TokenType::Ntile, 80000),
    (TokenType::Nulls, 80000),
    (TokenType::Of, 80000),
    (TokenType::Off, 80019),
    (TokenType::Oj, 80017),
    (TokenType::Old, 80014),
    (TokenType::OldPassword, -50706),
    (TokenType::Only, 50605),
    (TokenType::OptimizerCosts, 50706),
    (TokenType::Optional, 80013),
    (TokenType::Ordinality, 80000),
    (TokenType::Organization, 80011),
    (TokenType::Others, 80000),
    (TokenType::Over, 80000),
    (TokenType::Parallel, 80400),
    (TokenType::ParseGcolExpr, 50706),
    (TokenType::ParseTree, 80100),
    (TokenType::PasswordLockTime, 80019),
    (TokenType::Path, 80000),
    (TokenType::PercentRank, 80000),
    (TokenType::Persist, 80000),
    (TokenType::PersistOnly, 80000),
    (TokenType::PluginDir, 50604),
    (TokenType::Precedes, 50700),
    (TokenType::Preceding, 80000),
    (TokenType::PrivilegeChecksUser, 80018),
    (TokenType::Qualify, 80200),
    (TokenType::Random, 80018),
    (TokenType::Rank, 80000),
    (TokenType::Recursive, 80000),
    (TokenType::Redofile, -80000),
    (TokenType::Reference, 80011),
    (TokenType::Registration, 80027),
    (TokenType::Replica, 80022),
    (TokenType::Replicas, 80022),
    (TokenType::ReplicateDoDb, 50700),
    (TokenType::ReplicateDoTable, 50700),
    (TokenType::ReplicateIgnoreDb, 50700),
    (TokenType::ReplicateIgnoreTable, 50700),
    (TokenType::ReplicateRewriteDb, 50700),
    (TokenType::ReplicateWildDoTable, 50700),
    (TokenType::ReplicateWildIgnoreTable, 50700),
    (TokenType::RequireRowFormat, 80019),
    (TokenType::RequireTablePrimaryKeyCheck, 80019),
    (TokenType::Resource, 80000),
    (TokenType::Respect, 80000),
    (TokenType::Restart, 80011),
    (TokenType::Retain, 80014),
    (TokenType::Returning, 80021),
    (TokenType::Reuse, 80000),
    (TokenType::Role, 80000),
    (TokenType::Rotate, 50713),
    (TokenType::RowNumber, 80000),
    (TokenType::S3, 80400),
    (TokenType::Secondary, 80013),
    (TokenType::SecondaryEngine, 80013),
    (TokenType::SecondaryEngineAttribute, 80021),
    (TokenType::SecondaryLoad, 80013),
    (TokenType::SecondaryUnload, 80013),
    (TokenType::Skip, 80000),
    (TokenType::SourceAutoPosition, 80023),
    (TokenType::SourceBind, 80023),
    (TokenType::SourceCompressionAlgorithm, 80023),
    (TokenType::SourceConnectRetry, 80023),
    (TokenType::SourceDelay, 80023),
    (TokenType::SourceHeartbeatPeriod, 80023),
    (TokenType::SourceHost, 80023),
    (TokenType::SourceLogFile, 80023),
    (TokenType::SourceLogPos, 80023),
    (TokenType::SourcePassword, 80023),
    (TokenType::SourcePort, 80023),
    (TokenType::SourcePublicKeyPath, 80023),
    (TokenType::SourceRetryCount, 80023),
    (TokenType::SourceSsl, 80023),
    (TokenType::SourceSslCa, 80023),
    (TokenType::SourceSslCapath, 80023),
    (TokenType::SourceSslCert, 80023),
    (TokenType::SourceSslCipher, 80023),
    (TokenType::SourceSslCrl, 80023),
    (TokenType::SourceSslCrlpath, 80023),
    (TokenType::SourceSslKey, 80023),
    (TokenType::SourceSslVerifyServerCert, 80023),
    (TokenType::SourceTlsCiphersuites, 80023),
    (TokenType::SourceTlsVersion, 80023),
    (TokenType::SourceUser, 80023),
    (TokenType::SourceZstdCompressionLevel, 80023),
    (TokenType::SqlAfterMtsGaps, 50606),
    (TokenType::SqlCache, -80000),
    (TokenType::Srid, 80000),
    (TokenType::Stacked, 50700),
    (TokenType::Stored, 50707),
    (TokenType::Stream, 80019),
    (TokenType::System, 80000),
    (TokenType::Tablesample, 80200),
    (TokenType::TableRefPriority, -80000),
    (TokenType::ThreadPriority, 80000),
    (TokenType::Ties, 80000),
    (TokenType::Tls, 80021),
    (TokenType::Unbounded, 80000),
    (TokenType::Unregister, 80027),
    (TokenType::Validation, 50706),
    (TokenType::Vcpu, 80000),
    (TokenType::Virtual, 50707),
    (TokenType::Visible, 80000),
    (TokenType::Window, 80000),
    (TokenType::Xid, 50704),
    (TokenType::Zone, 80022),
];

/// Ключевые слова, которые являются функциями только перед `(`
const FUNCTION_TABLE: &[TokenType] = &[
    TokenType::Adddate,
    TokenType::BitAnd,
    TokenType::BitOr,
    TokenType::BitXor,
    TokenType::Cast,
    TokenType::Count,
    TokenType::Curdate,
    TokenType::Curtime,
    TokenType::DateAdd,
    TokenType::DateSub,
    TokenType::Extract,
    TokenType::GroupConcat,
    TokenType::Max,
    TokenType::Mid,
    TokenType::Min,
    TokenType::Now,
    TokenType::Position,
    TokenType::SessionUser,
    TokenType::Std,
    TokenType::Stddev,
    TokenType::StddevPop,
    TokenType::StddevSamp,
    TokenType::Subdate,
    TokenType::Substr,
    TokenType::Substring,
    TokenType::Sum,
    TokenType::Sysdate,
    TokenType::SystemUser,
    TokenType::Trim,
    TokenType::Variance,
    TokenType::VarPop,
    TokenType::VarSamp,
];

/// Синонимы, сворачиваемые к каноническому типу
const SYNONYM_TABLE: &[(TokenType, TokenType)] = &[
    (TokenType::Character, TokenType::Char),
    (TokenType::CurrentDate, TokenType::Curdate),
    (TokenType::CurrentTime, TokenType::Curtime),
    (TokenType::CurrentTimestamp, TokenType::Now),
    (TokenType::Dec, TokenType::Decimal),
    (TokenType::Distinctrow, TokenType::Distinct),
    (TokenType::Fields, TokenType::Columns),
    (TokenType::Float4, TokenType::Float),
    (TokenType::Float8, TokenType::Double),
    (TokenType::Int1, TokenType::Tinyint),
    (TokenType::Int2, TokenType::Smallint),
    (TokenType::Int3, TokenType::Mediumint),
    (TokenType::Int4, TokenType::Int),
    (TokenType::Int8, TokenType::Bigint),
    (TokenType::Integer, TokenType::Int),
    (TokenType::IoThread, TokenType::RelayThread),
    (TokenType::Localtime, TokenType::Now),
    (TokenType::Localtimestamp, TokenType::Now),
    (TokenType::Mid, TokenType::Substring),
    (TokenType::Middleint, TokenType::Mediumint),
    (TokenType::Ndb, TokenType::Ndbcluster),
    (TokenType::Numeric, TokenType::Decimal),
    (TokenType::Rlike, TokenType::Regexp),
    (TokenType::Schema, TokenType::Database),
    (TokenType::Schemas, TokenType::Databases),
    (TokenType::SessionUser, TokenType::User),
    (TokenType::Some, TokenType::Any),
    (TokenType::SqlTsiDay, TokenType::Day),
    (TokenType::SqlTsiHour, TokenType::Hour),
    (TokenType::SqlTsiMinute, TokenType::Minute),
    (TokenType::SqlTsiMonth, TokenType::Month),
    (TokenType::SqlTsiQuarter, TokenType::Quarter),
    (TokenType::SqlTsiSecond, TokenType::Second),
    (TokenType::SqlTsiWeek, TokenType::Week),
    (TokenType::SqlTsiYear, TokenType::Year),
    (TokenType::Stddev, TokenType::Std),
    (TokenType::StddevPop, TokenType::Std),
    (TokenType::Substr, TokenType::Substring),
    (TokenType::SystemUser, TokenType::User),
    (TokenType::Varcharacter, TokenType::Varchar),
    (TokenType::VarPop, TokenType::Variance),
];

/// Окно версий, которое не выражается одной границей
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VersionWindow {
    /// Строго между границами
    Between { after: u32, before: u32 },
    /// С версии `from` включительно до `before` исключительно
    Within { from: u32, before: u32 },
}

impl VersionWindow {
    fn contains(self, version: u32) -> bool {
        match self {
            VersionWindow::Between { after, before } => version > after && version < before,
            VersionWindow::Within { from, before } => version >= from && version < before,
        }
    }
}

const MANUAL_VERSION_WINDOWS: &[(TokenType, VersionWindow)] = &[
    (
        TokenType::MaxStatementTime,
        VersionWindow::Between {
            after: 50704,
            before: 50708,
        },
    ),
    (
        TokenType::Nonblocking,
        VersionWindow::Between {
            after: 50700,
            before: 50706,
        },
    ),
    (
        TokenType::Remote,
        VersionWindow::Within {
            from: 80003,
            before: 80014,
        },
    ),
];

/// Кодировки, допустимые в префиксах `_charset` по умолчанию
const DEFAULT_UNDERSCORE_CHARSETS: &[&str] = &[
    "armscii8", "ascii", "big5", "binary", "cp1250", "cp1251", "cp1256", "cp1257", "cp850",
    "cp852", "cp866", "cp932", "dec8", "eucjpms", "euckr", "gb18030", "gb2312", "gbk", "geostd8",
    "greek", "hebrew", "hp8", "keybcs2", "koi8r", "koi8u", "latin1", "latin2", "latin5", "latin7",
    "macce", "macroman", "sjis", "swe7", "tis620", "ucs2", "ujis", "utf16", "utf16le", "utf32",
    "utf8", "utf8mb3", "utf8mb4",
];

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenType> =
        TokenType::KEYWORDS.iter().copied().collect();
    static ref VERSIONS: HashMap<TokenType, i32> = VERSION_TABLE.iter().copied().collect();
    static ref MANUAL_VERSIONS: HashMap<TokenType, VersionWindow> =
        MANUAL_VERSION_WINDOWS.iter().copied().collect();
    static ref FUNCTIONS: HashSet<TokenType> = FUNCTION_TABLE.iter().copied().collect();
    static ref SYNONYMS: HashMap<TokenType, TokenType> = SYNONYM_TABLE.iter().copied().collect();
    static ref UNDERSCORE_CHARSETS: HashSet<&'static str> =
        DEFAULT_UNDERSCORE_CHARSETS.iter().copied().collect();
}

/// Ищет ключевое слово по тексту в верхнем регистре
pub fn lookup_keyword(upper: &str) -> Option<TokenType> {
    KEYWORDS.get(upper).copied()
}

/// Проверяет, распознается ли ключевое слово в указанной версии MySQL
///
/// Положительная граница означает "начиная с версии", отрицательная:
/// "строго до версии |v|". Ключевые слова без записи в таблицах действуют
/// во всех версиях.
pub fn is_keyword_in_version(token_type: TokenType, mysql_version: u32) -> bool {
    if let Some(window) = MANUAL_VERSIONS.get(&token_type) {
        return window.contains(mysql_version);
    }
    match VERSIONS.get(&token_type) {
        Some(&bound) if bound >= 0 => mysql_version >= bound.unsigned_abs(),
        Some(&bound) => mysql_version < bound.unsigned_abs(),
        None => true,
    }
}

/// Ключевое слово является функцией и требует `(` после себя
pub fn is_function(token_type: TokenType) -> bool {
    FUNCTIONS.contains(&token_type)
}

/// Сворачивает синоним к каноническому типу
pub fn canonical(token_type: TokenType) -> TokenType {
    SYNONYMS.get(&token_type).copied().unwrap_or(token_type)
}

/// Проверяет имя кодировки (без подчеркивания, в нижнем регистре)
pub fn is_default_underscore_charset(name: &str) -> bool {
    UNDERSCORE_CHARSETS.contains(name)
}

/// Список кодировок по умолчанию
pub fn default_underscore_charsets() -> &'static [&'static str] {
    DEFAULT_UNDERSCORE_CHARSETS
}
