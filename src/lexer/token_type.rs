//! Типы токенов MySQL
//!
//! Перечисление генерируется макросом из двух списков: служебные типы
//! (операторы, литералы, комментарии) и ключевые слова с их написанием.
//! Порядок объявления задает числовой идентификатор типа.

use crate::common::{Error, Result};
use std::fmt;

macro_rules! define_token_types {
    (
        $( $(#[$doc:meta])* $variant:ident, )*
        ;
        $( $keyword:ident => $spelling:literal, )*
    ) => {
        /// Тип токена
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum TokenType {
            $( $(#[$doc])* $variant, )*
            $( $keyword, )*
        }

        impl TokenType {
            /// Все типы в порядке идентификаторов
            pub const ALL: &'static [TokenType] = &[
                $( TokenType::$variant, )*
                $( TokenType::$keyword, )*
            ];

            /// Ключевые слова и их написание
            pub(crate) const KEYWORDS: &'static [(&'static str, TokenType)] = &[
                $( ($spelling, TokenType::$keyword), )*
            ];

            /// Отладочное имя типа
            pub fn name(self) -> &'static str {
                match self {
                    $( TokenType::$variant => stringify!($variant), )*
                    $( TokenType::$keyword => stringify!($keyword), )*
                }
            }

            /// Написание ключевого слова или `None` для служебных типов
            pub fn keyword_spelling(self) -> Option<&'static str> {
                match self {
                    $( TokenType::$keyword => Some($spelling), )*
                    _ => None,
                }
            }
        }
    };
}

define_token_types! {

    /// Пробельные символы
    Whitespace,
    /// Комментарий `-- `, `#` или `/* */`
    SqlComment,
    /// Начало условного комментария `/*!` или `/*!NNNNN`
    MysqlCommentStart,
    /// Конец условного комментария `*/`
    MysqlCommentEnd,
    /// Конец входа
    Eof,

    // === Операторы ===
    /// `=`
    EqualOperator,
    /// `:=`
    AssignOperator,
    /// `<=>`
    NullSafeEqualOperator,
    /// `>=`
    GreaterOrEqualOperator,
    /// `>`
    GreaterThanOperator,
    /// `<=`
    LessOrEqualOperator,
    /// `<`
    LessThanOperator,
    /// `!=` или `<>`
    NotEqualOperator,
    /// `+`
    PlusOperator,
    /// `-`
    MinusOperator,
    /// `*`
    MultOperator,
    /// `/`
    DivOperator,
    /// `%`
    ModOperator,
    /// `!`
    LogicalNotOperator,
    /// `~`
    BitwiseNotOperator,
    /// `<<`
    ShiftLeftOperator,
    /// `>>`
    ShiftRightOperator,
    /// `&&`
    LogicalAndOperator,
    /// `&`
    BitwiseAndOperator,
    /// `^`
    BitwiseXorOperator,
    /// `||` без режима PIPES_AS_CONCAT
    LogicalOrOperator,
    /// `|`
    BitwiseOrOperator,
    /// `||` в режиме PIPES_AS_CONCAT
    ConcatPipesSymbol,
    /// `NOT` в режиме HIGH_NOT_PRECEDENCE
    NotHighPrecedence,

    // === Разделители и символы ===
    /// `.`
    DotSymbol,
    /// `,`
    CommaSymbol,
    /// `;`
    SemicolonSymbol,
    /// `:`
    ColonSymbol,
    /// `(`
    OpenParSymbol,
    /// `)`
    CloseParSymbol,
    /// `{`
    OpenCurlySymbol,
    /// `}`
    CloseCurlySymbol,
    /// `->`
    JsonSeparatorSymbol,
    /// `->>`
    JsonUnquotedSeparatorSymbol,
    /// `@`
    AtSignSymbol,
    /// `@name`
    AtTextSuffix,
    /// `@@`
    AtAtSignSymbol,
    /// `\N`
    NullEscape,
    /// `?`
    ParamMarker,

    // === Литералы и идентификаторы ===
    /// `0x1F`, `x'1F'`
    HexNumber,
    /// `0b01`, `b'01'`
    BinNumber,
    /// Целое, помещающееся в 32 бита со знаком
    IntNumber,
    /// Целое, помещающееся в 64 бита со знаком
    LongNumber,
    /// Целое, помещающееся в 64 бита без знака
    UlonglongNumber,
    /// Число с десятичной точкой или целое вне 64 бит
    DecimalNumber,
    /// Число с экспонентой
    FloatNumber,
    /// Идентификатор без кавычек
    Identifier,
    /// Идентификатор в обратных кавычках
    BackTickQuotedId,
    /// Строка в двойных кавычках
    DoubleQuotedText,
    /// Строка в одинарных кавычках
    SingleQuotedText,
    /// Строка национальной кодировки `N'...'`
    NcharText,
    /// Префикс кодировки `_utf8mb4`
    UnderscoreCharset,
    ;
    Accessible => "ACCESSIBLE",
    Account => "ACCOUNT",
    Action => "ACTION",
    Active => "ACTIVE",
    Add => "ADD",
    Adddate => "ADDDATE",
    Admin => "ADMIN",
    After => "AFTER",
    Against => "AGAINST",
    Aggregate => "AGGREGATE",
    Algorithm => "ALGORITHM",
    All => "ALL",
    Alter => "ALTER",
    Always => "ALWAYS",
    Analyse => "ANALYSE",
    Analyze => "ANALYZE",
    And => "AND",
    Any => "ANY",
    Array => "ARRAY",
    As => "AS",
    Asc => "ASC",
    Ascii => "ASCII",
    Asensitive => "ASENSITIVE",
    AssignGtidsToAnonymousTransactions => "ASSIGN_GTIDS_TO_ANONYMOUS_TRANSACTIONS",
    At => "AT",
    Attribute => "ATTRIBUTE",
    Authentication => "AUTHENTICATION",
    Authors => "AUTHORS",
    Auto => "AUTO",
    AutoextendSize => "AUTOEXTEND_SIZE",
    AutoIncrement => "AUTO_INCREMENT",
    Avg => "AVG",
    AvgRowLength => "AVG_ROW_LENGTH",
    Backup => "BACKUP",
    Before => "BEFORE",
    Begin => "BEGIN",
    Bernoulli => "BERNOULLI",
    Between => "BETWEEN",
    Bigint => "BIGINT",
    Binary => "BINARY",
    Binlog => "BINLOG",
    Bit => "BIT",
    BitAnd => "BIT_AND",
    BitOr => "BIT_OR",
    BitXor => "BIT_XOR",
    Blob => "BLOB",
    Block => "BLOCK",
    Bool => "BOOL",
    Boolean => "BOOLEAN",
    Both => "BOTH",
    Btree => "BTREE",
    Buckets => "BUCKETS",
    Bulk => "BULK",
    By => "BY",
    Byte => "BYTE",
    Cache => "CACHE",
    Call => "CALL",
    Cascade => "CASCADE",
    Cascaded => "CASCADED",
    Case => "CASE",
    Cast => "CAST",
    CatalogName => "CATALOG_NAME",
    Chain => "CHAIN",
    ChallengeResponse => "CHALLENGE_RESPONSE",
    Change => "CHANGE",
    Changed => "CHANGED",
    Channel => "CHANNEL",
    Char => "CHAR",
    Character => "CHARACTER",
    Charset => "CHARSET",
    Check => "CHECK",
    Checksum => "CHECKSUM",
    Cipher => "CIPHER",
    ClassOrigin => "CLASS_ORIGIN",
    Client => "CLIENT",
    Clone => "CLONE",
    Close => "CLOSE",
    Coalesce => "COALESCE",
    Code => "CODE",
    Collate => "COLLATE",
    Collation => "COLLATION",
    Column => "COLUMN",
    Columns => "COLUMNS",
    ColumnFormat => "COLUMN_FORMAT",
    ColumnName => "COLUMN_NAME",
    Comment => "COMMENT",
    Commit => "COMMIT",
    Committed => "COMMITTED",
    Compact => "COMPACT",
    Completion => "COMPLETION",
    Component => "COMPONENT",
    Compressed => "COMPRESSED",
    Compression => "COMPRESSION",
    Concurrent => "CONCURRENT",
    Condition => "CONDITION",
    Connection => "CONNECTION",
    Consistent => "CONSISTENT",
    Constraint => "CONSTRAINT",
    ConstraintCatalog => "CONSTRAINT_CATALOG",
    ConstraintName => "CONSTRAINT_NAME",
    ConstraintSchema => "CONSTRAINT_SCHEMA",
    Contains => "CONTAINS",
    Context => "CONTEXT",
    Continue => "CONTINUE",
    Contributors => "CONTRIBUTORS",
    Convert => "CONVERT",
    Count => "COUNT",
    Cpu => "CPU",
    Create => "CREATE",
    Cross => "CROSS",
    Cube => "CUBE",
    CumeDist => "CUME_DIST",
    Curdate => "CURDATE",
    Current => "CURRENT",
    CurrentDate => "CURRENT_DATE",
    CurrentTime => "CURRENT_TIME",
    CurrentTimestamp => "CURRENT_TIMESTAMP",
    CurrentUser => "CURRENT_USER",
    Cursor => "CURSOR",
    CursorName => "CURSOR_NAME",
    Curtime => "CURTIME",
    Data => "DATA",
    Database => "DATABASE",
    Databases => "DATABASES",
    Datafile => "DATAFILE",
    Date => "DATE",
    Datetime => "DATETIME",
    DateAdd => "DATE_ADD",
    DateSub => "DATE_SUB",
    Day => "DAY",
    DayHour => "DAY_HOUR",
    DayMicrosecond => "DAY_MICROSECOND",
    DayMinute => "DAY_MINUTE",
    DaySecond => "DAY_SECOND",
    Deallocate => "DEALLOCATE",
    Dec => "DEC",
    Decimal => "DECIMAL",
    Declare => "DECLARE",
    Default => "DEFAULT",
    DefaultAuth => "DEFAULT_AUTH",
    Definer => "DEFINER",
    Definition => "DEFINITION",
    Delayed => "DELAYED",
    DelayKeyWrite => "DELAY_KEY_WRITE",
    Delete => "DELETE",
    DenseRank => "DENSE_RANK",
    Desc => "DESC",
    Describe => "DESCRIBE",
    Description => "DESCRIPTION",
    DesKeyFile => "DES_KEY_FILE",
    Deterministic => "DETERMINISTIC",
    Diagnostics => "DIAGNOSTICS",
    Directory => "DIRECTORY",
    Disable => "DISABLE",
    Discard => "DISCARD",
    Disk => "DISK",
    Distinct => "DISTINCT",
    Distinctrow => "DISTINCTROW",
    Div => "DIV",
    Do => "DO",
    Double => "DOUBLE",
    Drop => "DROP",
    Dual => "DUAL",
    Dumpfile => "DUMPFILE",
    Duplicate => "DUPLICATE",
    Dynamic => "DYNAMIC",
    Each => "EACH",
    Else => "ELSE",
    Elseif => "ELSEIF",
    Empty => "EMPTY",
    Enable => "ENABLE",
    Enclosed => "ENCLOSED",
    Encryption => "ENCRYPTION",
    End => "END",
    Ends => "ENDS",
    Enforced => "ENFORCED",
    Engine => "ENGINE",
    Engines => "ENGINES",
    EngineAttribute => "ENGINE_ATTRIBUTE",
    Enum => "ENUM",
    Error => "ERROR",
    Errors => "ERRORS",
    Escape => "ESCAPE",
    Escaped => "ESCAPED",
    Event => "EVENT",
    Events => "EVENTS",
    Every => "EVERY",
    Except => "EXCEPT",
    Exchange => "EXCHANGE",
    Exclude => "EXCLUDE",
    Execute => "EXECUTE",
    Exists => "EXISTS",
    Exit => "EXIT",
    Expansion => "EXPANSION",
    Expire => "EXPIRE",
    Explain => "EXPLAIN",
    Export => "EXPORT",
    Extended => "EXTENDED",
    ExtentSize => "EXTENT_SIZE",
    Extract => "EXTRACT",
    Factor => "FACTOR",
    FailedLoginAttempts => "FAILED_LOGIN_ATTEMPTS",
    False => "FALSE",
    Fast => "FAST",
    Faults => "FAULTS",
    Fetch => "FETCH",
    Fields => "FIELDS",
    File => "FILE",
    FileBlockSize => "FILE_BLOCK_SIZE",
    Filter => "FILTER",
    Finish => "FINISH",
    First => "FIRST",
    FirstValue => "FIRST_VALUE",
    Fixed => "FIXED",
    Float => "FLOAT",
    Float4 => "FLOAT4",
    Float8 => "FLOAT8",
    Flush => "FLUSH",
    Following => "FOLLOWING",
    Follows => "FOLLOWS",
    For => "FOR",
    Force => "FORCE",
    Foreign => "FOREIGN",
    Format => "FORMAT",
    Found => "FOUND",
    From => "FROM",
    Full => "FULL",
    Fulltext => "FULLTEXT",
    Function => "FUNCTION",
    General => "GENERAL",
    Generate => "GENERATE",
    Generated => "GENERATED",
    Geometry => "GEOMETRY",
    Geometrycollection => "GEOMETRYCOLLECTION",
    Get => "GET",
    GetFormat => "GET_FORMAT",
    GetMasterPublicKey => "GET_MASTER_PUBLIC_KEY",
    GetSourcePublicKey => "GET_SOURCE_PUBLIC_KEY",
    Global => "GLOBAL",
    Grant => "GRANT",
    Grants => "GRANTS",
    Group => "GROUP",
    Grouping => "GROUPING",
    Groups => "GROUPS",
    GroupConcat => "GROUP_CONCAT",
    GroupReplication => "GROUP_REPLICATION",
    Gtids => "GTIDS",
    GtidOnly => "GTID_ONLY",
    Handler => "HANDLER",
    Hash => "HASH",
    Having => "HAVING",
    Help => "HELP",
    HighPriority => "HIGH_PRIORITY",
    Histogram => "HISTOGRAM",
    History => "HISTORY",
    Host => "HOST",
    Hosts => "HOSTS",
    Hour => "HOUR",
    HourMicrosecond => "HOUR_MICROSECOND",
    HourMinute => "HOUR_MINUTE",
    HourSecond => "HOUR_SECOND",
    Identified => "IDENTIFIED",
    If => "IF",
    Ignore => "IGNORE",
    IgnoreServerIds => "IGNORE_SERVER_IDS",
    Import => "IMPORT",
    In => "IN",
    Inactive => "INACTIVE",
    Index => "INDEX",
    Indexes => "INDEXES",
    Infile => "INFILE",
    Initial => "INITIAL",
    InitialSize => "INITIAL_SIZE",
    Initiate => "INITIATE",
    Inner => "INNER",
    Inout => "INOUT",
    Insensitive => "INSENSITIVE",
    Insert => "INSERT",
    InsertMethod => "INSERT_METHOD",
    Install => "INSTALL",
    Instance => "INSTANCE",
    Int => "INT",
    Int1 => "INT1",
    Int2 => "INT2",
    Int3 => "INT3",
    Int4 => "INT4",
    Int8 => "INT8",
    Integer => "INTEGER",
    Intersect => "INTERSECT",
    Interval => "INTERVAL",
    Into => "INTO",
    Invisible => "INVISIBLE",
    Invoker => "INVOKER",
    Io => "IO",
    IoAfterGtids => "IO_AFTER_GTIDS",
    IoBeforeGtids => "IO_BEFORE_GTIDS",
    IoThread => "IO_THREAD",
    Ipc => "IPC",
    Is => "IS",
    Isolation => "ISOLATION",
    Issuer => "ISSUER",
    Iterate => "ITERATE",
    Join => "JOIN",
    Json => "JSON",
    JsonArrayagg => "JSON_ARRAYAGG",
    JsonObjectagg => "JSON_OBJECTAGG",
    JsonTable => "JSON_TABLE",
    JsonValue => "JSON_VALUE",
    Key => "KEY",
    Keyring => "KEYRING",
    Keys => "KEYS",
    KeyBlockSize => "KEY_BLOCK_SIZE",
    Kill => "KILL",
    Lag => "LAG",
    Language => "LANGUAGE",
    Last => "LAST",
    LastValue => "LAST_VALUE",
    Lateral => "LATERAL",
    Lead => "LEAD",
    Leading => "LEADING",
    Leave => "LEAVE",
    Leaves => "LEAVES",
    Left => "LEFT",
    Less => "LESS",
    Level => "LEVEL",
    Like => "LIKE",
    Limit => "LIMIT",
    Linear => "LINEAR",
    Lines => "LINES",
    Linestring => "LINESTRING",
    List => "LIST",
    Load => "LOAD",
    Local => "LOCAL",
    Localtime => "LOCALTIME",
    Localtimestamp => "LOCALTIMESTAMP",
    Lock => "LOCK",
    Locked => "LOCKED",
    Locks => "LOCKS",
    Log => "LOG",
    Logfile => "LOGFILE",
    Logs => "LOGS",
    Long => "LONG",
    Longblob => "LONGBLOB",
    Longtext => "LONGTEXT",
    Loop => "LOOP",
    LowPriority => "LOW_PRIORITY",
    Manual => "MANUAL",
    Master => "MASTER",
    MasterAutoPosition => "MASTER_AUTO_POSITION",
    MasterBind => "MASTER_BIND",
    MasterCompressionAlgorithm => "MASTER_COMPRESSION_ALGORITHM",
    MasterConnectRetry => "MASTER_CONNECT_RETRY",
    MasterDelay => "MASTER_DELAY",
    MasterHeartbeatPeriod => "MASTER_HEARTBEAT_PERIOD",
    MasterHost => "MASTER_HOST",
    MasterLogFile => "MASTER_LOG_FILE",
    MasterLogPos => "MASTER_LOG_POS",
    MasterPassword => "MASTER_PASSWORD",
    MasterPort => "MASTER_PORT",
    MasterPublicKeyPath => "MASTER_PUBLIC_KEY_PATH",
    MasterRetryCount => "MASTER_RETRY_COUNT",
    MasterServerId => "MASTER_SERVER_ID",
    MasterSsl => "MASTER_SSL",
    MasterSslCa => "MASTER_SSL_CA",
    MasterSslCapath => "MASTER_SSL_CAPATH",
    MasterSslCert => "MASTER_SSL_CERT",
    MasterSslCipher => "MASTER_SSL_CIPHER",
    MasterSslCrl => "MASTER_SSL_CRL",
    MasterSslCrlpath => "MASTER_SSL_CRLPATH",
    MasterSslKey => "MASTER_SSL_KEY",
    MasterSslVerifyServerCert => "MASTER_SSL_VERIFY_SERVER_CERT",
    MasterTlsCiphersuites => "MASTER_TLS_CIPHERSUITES",
    MasterTlsVersion => "MASTER_TLS_VERSION",
    MasterUser => "MASTER_USER",
    MasterZstdCompressionLevel => "MASTER_ZSTD_COMPRESSION_LEVEL",
    Match => "MATCH",
    Max => "MAX",
    Maxvalue => "MAXVALUE",
    MaxConnectionsPerHour => "MAX_CONNECTIONS_PER_HOUR",
    MaxQueriesPerHour => "MAX_QUERIES_PER_HOUR",
    MaxRows => "MAX_ROWS",
    MaxSize => "MAX_SIZE",
    MaxStatementTime => "MAX_STATEMENT_TIME",
    MaxUpdatesPerHour => "MAX_UPDATES_PER_HOUR",
    MaxUserConnections => "MAX_USER_CONNECTIONS",
    Medium => "MEDIUM",
    Mediumblob => "MEDIUMBLOB",
    Mediumint => "MEDIUMINT",
    Mediumtext => "MEDIUMTEXT",
    Member => "MEMBER",
    Memory => "MEMORY",
    Merge => "MERGE",
    MessageText => "MESSAGE_TEXT",
    Microsecond => "MICROSECOND",
    Mid => "MID",
    Middleint => "MIDDLEINT",
    Migrate => "MIGRATE",
    Min => "MIN",
    Minute => "MINUTE",
    MinuteMicrosecond => "MINUTE_MICROSECOND",
    MinuteSecond => "MINUTE_SECOND",
    MinRows => "MIN_ROWS",
    Mod => "MOD",
    Mode => "MODE",
    Modifies => "MODIFIES",
    Modify => "MODIFY",
    Month => "MONTH",
    Multilinestring => "MULTILINESTRING",
    Multipoint => "MULTIPOINT",
    Multipolygon => "MULTIPOLYGON",
    Mutex => "MUTEX",
    MysqlErrno => "MYSQL_ERRNO",
    Name => "NAME",
    Names => "NAMES",
    National => "NATIONAL",
    Natural => "NATURAL",
    Nchar => "NCHAR",
    Ndb => "NDB",
    Ndbcluster => "NDBCLUSTER",
    Nested => "NESTED",
    NetworkNamespace => "NETWORK_NAMESPACE",
    Never => "NEVER",
    New => "NEW",
    Next => "NEXT",
    No => "NO",
    Nodegroup => "NODEGROUP",
    Nonblocking => "NONBLOCKING",
    None => "NONE",
    Not => "NOT",
    Now => "NOW",
    Nowait => "NOWAIT",
    NoWait => "NO_WAIT",
    NoWriteToBinlog => "NO_WRITE_TO_BINLOG",
    NthValue => "NTH_VALUE",
    Ntile => "NTILE",
    Null => "NULL",
    Nulls => "NULLS",
    Number => "NUMBER",
    Numeric => "NUMERIC",
    Nvarchar => "NVARCHAR",
    Of => "OF",
    Off => "OFF",
    Offset => "OFFSET",
    Oj => "OJ",
    Old => "OLD",
    OldPassword => "OLD_PASSWORD",
    On => "ON",
    One => "ONE",
    Only => "ONLY",
    Open => "OPEN",
    Optimize => "OPTIMIZE",
    OptimizerCosts => "OPTIMIZER_COSTS",
    Option => "OPTION",
    Optional => "OPTIONAL",
    Optionally => "OPTIONALLY",
    Options => "OPTIONS",
    Or => "OR",
    Order => "ORDER",
    Ordinality => "ORDINALITY",
    Organization => "ORGANIZATION",
    Others => "OTHERS",
    Out => "OUT",
    Outer => "OUTER",
    Outfile => "OUTFILE",
    Over => "OVER",
    Owner => "OWNER",
    PackKeys => "PACK_KEYS",
    Page => "PAGE",
    Parallel => "PARALLEL",
    Parser => "PARSER",
    ParseGcolExpr => "PARSE_GCOL_EXPR",
    ParseTree => "PARSE_TREE",
    Partial => "PARTIAL",
    Partition => "PARTITION",
    Partitioning => "PARTITIONING",
    Partitions => "PARTITIONS",
    Password => "PASSWORD",
    PasswordLockTime => "PASSWORD_LOCK_TIME",
    Path => "PATH",
    PercentRank => "PERCENT_RANK",
    Persist => "PERSIST",
    PersistOnly => "PERSIST_ONLY",
    Phase => "PHASE",
    Plugin => "PLUGIN",
    Plugins => "PLUGINS",
    PluginDir => "PLUGIN_DIR",
    Point => "POINT",
    Polygon => "POLYGON",
    Port => "PORT",
    Position => "POSITION",
    Precedes => "PRECEDES",
    Preceding => "PRECEDING",
    Precision => "PRECISION",
    Prepare => "PREPARE",
    Preserve => "PRESERVE",
    Prev => "PREV",
    Primary => "PRIMARY",
    Privileges => "PRIVILEGES",
    PrivilegeChecksUser => "PRIVILEGE_CHECKS_USER",
    Procedure => "PROCEDURE",
    Process => "PROCESS",
    Processlist => "PROCESSLIST",
    Profile => "PROFILE",
    Profiles => "PROFILES",
    Proxy => "PROXY",
    Purge => "PURGE",
    Qualify => "QUALIFY",
    Quarter => "QUARTER",
    Query => "QUERY",
    Quick => "QUICK",
    Random => "RANDOM",
    Range => "RANGE",
    Rank => "RANK",
    Read => "READ",
    Reads => "READS",
    ReadOnly => "READ_ONLY",
    ReadWrite => "READ_WRITE",
    Real => "REAL",
    Rebuild => "REBUILD",
    Recover => "RECOVER",
    Recursive => "RECURSIVE",
    Redofile => "REDOFILE",
    RedoBufferSize => "REDO_BUFFER_SIZE",
    Redundant => "REDUNDANT",
    Reference => "REFERENCE",
    References => "REFERENCES",
    Regexp => "REGEXP",
    Registration => "REGISTRATION",
    Relay => "RELAY",
    Relaylog => "RELAYLOG",
    RelayLogFile => "RELAY_LOG_FILE",
    RelayLogPos => "RELAY_LOG_POS",
    RelayThread => "RELAY_THREAD",
    Release => "RELEASE",
    Reload => "RELOAD",
    Remote => "REMOTE",
    Remove => "REMOVE",
    Rename => "RENAME",
    Reorganize => "REORGANIZE",
    Repair => "REPAIR",
    Repeat => "REPEAT",
    Repeatable => "REPEATABLE",
    Replace => "REPLACE",
    Replica => "REPLICA",
    Replicas => "REPLICAS",
    ReplicateDoDb => "REPLICATE_DO_DB",
    ReplicateDoTable => "REPLICATE_DO_TABLE",
    ReplicateIgnoreDb => "REPLICATE_IGNORE_DB",
    ReplicateIgnoreTable => "REPLICATE_IGNORE_TABLE",
    ReplicateRewriteDb => "REPLICATE_REWRITE_DB",
    ReplicateWildDoTable => "REPLICATE_WILD_DO_TABLE",
    ReplicateWildIgnoreTable => "REPLICATE_WILD_IGNORE_TABLE",
    Replication => "REPLICATION",
    Require => "REQUIRE",
    RequireRowFormat => "REQUIRE_ROW_FORMAT",
    RequireTablePrimaryKeyCheck => "REQUIRE_TABLE_PRIMARY_KEY_CHECK",
    Reset => "RESET",
    Resignal => "RESIGNAL",
    Resource => "RESOURCE",
    Respect => "RESPECT",
    Restart => "RESTART",
    Restore => "RESTORE",
    Restrict => "RESTRICT",
    Resume => "RESUME",
    Retain => "RETAIN",
    Return => "RETURN",
    ReturnedSqlstate => "RETURNED_SQLSTATE",
    Returning => "RETURNING",
    Returns => "RETURNS",
    Reuse => "REUSE",
    Reverse => "REVERSE",
    Revoke => "REVOKE",
    Right => "RIGHT",
    Rlike => "RLIKE",
    Role => "ROLE",
    Rollback => "ROLLBACK",
    Rollup => "ROLLUP",
    Rotate => "ROTATE",
    Routine => "ROUTINE",
    Row => "ROW",
    Rows => "ROWS",
    RowCount => "ROW_COUNT",
    RowFormat => "ROW_FORMAT",
    RowNumber => "ROW_NUMBER",
    Rtree => "RTREE",
    S3 => "S3",
    Savepoint => "SAVEPOINT",
    Schedule => "SCHEDULE",
    Schema => "SCHEMA",
    Schemas => "SCHEMAS",
    SchemaName => "SCHEMA_NAME",
    Second => "SECOND",
    Secondary => "SECONDARY",
    SecondaryEngine => "SECONDARY_ENGINE",
    SecondaryEngineAttribute => "SECONDARY_ENGINE_ATTRIBUTE",
    SecondaryLoad => "SECONDARY_LOAD",
    SecondaryUnload => "SECONDARY_UNLOAD",
    SecondMicrosecond => "SECOND_MICROSECOND",
    Security => "SECURITY",
    Select => "SELECT",
    Sensitive => "SENSITIVE",
    Separator => "SEPARATOR",
    Serial => "SERIAL",
    Serializable => "SERIALIZABLE",
    Server => "SERVER",
    Session => "SESSION",
    SessionUser => "SESSION_USER",
    Set => "SET",
    Share => "SHARE",
    Show => "SHOW",
    Shutdown => "SHUTDOWN",
    Signal => "SIGNAL",
    Signed => "SIGNED",
    Simple => "SIMPLE",
    Skip => "SKIP",
    Slave => "SLAVE",
    Slow => "SLOW",
    Smallint => "SMALLINT",
    Snapshot => "SNAPSHOT",
    Socket => "SOCKET",
    Some => "SOME",
    Soname => "SONAME",
    Sounds => "SOUNDS",
    Source => "SOURCE",
    SourceAutoPosition => "SOURCE_AUTO_POSITION",
    SourceBind => "SOURCE_BIND",
    SourceCompressionAlgorithm => "SOURCE_COMPRESSION_ALGORITHM",
    SourceConnectRetry => "SOURCE_CONNECT_RETRY",
    SourceDelay => "SOURCE_DELAY",
    SourceHeartbeatPeriod => "SOURCE_HEARTBEAT_PERIOD",
    SourceHost => "SOURCE_HOST",
    SourceLogFile => "SOURCE_LOG_FILE",
    SourceLogPos => "SOURCE_LOG_POS",
    SourcePassword => "SOURCE_PASSWORD",
    SourcePort => "SOURCE_PORT",
    SourcePublicKeyPath => "SOURCE_PUBLIC_KEY_PATH",
    SourceRetryCount => "SOURCE_RETRY_COUNT",
    SourceSsl => "SOURCE_SSL",
    SourceSslCa => "SOURCE_SSL_CA",
    SourceSslCapath => "SOURCE_SSL_CAPATH",
    SourceSslCert => "SOURCE_SSL_CERT",
    SourceSslCipher => "SOURCE_SSL_CIPHER",
    SourceSslCrl => "SOURCE_SSL_CRL",
    SourceSslCrlpath => "SOURCE_SSL_CRLPATH",
    SourceSslKey => "SOURCE_SSL_KEY",
    SourceSslVerifyServerCert => "SOURCE_SSL_VERIFY_SERVER_CERT",
    SourceTlsCiphersuites => "SOURCE_TLS_CIPHERSUITES",
    SourceTlsVersion => "SOURCE_TLS_VERSION",
    SourceUser => "SOURCE_USER",
    SourceZstdCompressionLevel => "SOURCE_ZSTD_COMPRESSION_LEVEL",
    Spatial => "SPATIAL",
    Specific => "SPECIFIC",
    Sql => "SQL",
    Sqlexception => "SQLEXCEPTION",
    Sqlstate => "SQLSTATE",
    Sqlwarning => "SQLWARNING",
    SqlAfterGtids => "SQL_AFTER_GTIDS",
    SqlAfterMtsGaps => "SQL_AFTER_MTS_GAPS",
    SqlBeforeGtids => "SQL_BEFORE_GTIDS",
    SqlBigResult => "SQL_BIG_RESULT",
    SqlBufferResult => "SQL_BUFFER_RESULT",
    SqlCache => "SQL_CACHE",
    SqlCalcFoundRows => "SQL_CALC_FOUND_ROWS",
    SqlNoCache => "SQL_NO_CACHE",
    SqlSmallResult => "SQL_SMALL_RESULT",
    SqlThread => "SQL_THREAD",
    SqlTsiDay => "SQL_TSI_DAY",
    SqlTsiHour => "SQL_TSI_HOUR",
    SqlTsiMinute => "SQL_TSI_MINUTE",
    SqlTsiMonth => "SQL_TSI_MONTH",
    SqlTsiQuarter => "SQL_TSI_QUARTER",
    SqlTsiSecond => "SQL_TSI_SECOND",
    SqlTsiWeek => "SQL_TSI_WEEK",
    SqlTsiYear => "SQL_TSI_YEAR",
    Srid => "SRID",
    Ssl => "SSL",
    Stacked => "STACKED",
    Start => "START",
    Starting => "STARTING",
    Starts => "STARTS",
    StatsAutoRecalc => "STATS_AUTO_RECALC",
    StatsPersistent => "STATS_PERSISTENT",
    StatsSamplePages => "STATS_SAMPLE_PAGES",
    Status => "STATUS",
    Std => "STD",
    Stddev => "STDDEV",
    StddevPop => "STDDEV_POP",
    StddevSamp => "STDDEV_SAMP",
    Stop => "STOP",
    Storage => "STORAGE",
    Stored => "STORED",
    StraightJoin => "STRAIGHT_JOIN",
    Stream => "STREAM",
    String => "STRING",
    SubclassOrigin => "SUBCLASS_ORIGIN",
    Subdate => "SUBDATE",
    Subject => "SUBJECT",
    Subpartition => "SUBPARTITION",
    Subpartitions => "SUBPARTITIONS",
    Substr => "SUBSTR",
    Substring => "SUBSTRING",
    Sum => "SUM",
    Super => "SUPER",
    Suspend => "SUSPEND",
    Swaps => "SWAPS",
    Switches => "SWITCHES",
    Sysdate => "SYSDATE",
    System => "SYSTEM",
    SystemUser => "SYSTEM_USER",
    Table => "TABLE",
    Tables => "TABLES",
    Tablesample => "TABLESAMPLE",
    Tablespace => "TABLESPACE",
    TableChecksum => "TABLE_CHECKSUM",
    TableName => "TABLE_NAME",
    TableRefPriority => "TABLE_REF_PRIORITY",
    Temporary => "TEMPORARY",
    Temptable => "TEMPTABLE",
    Terminated => "TERMINATED",
    Text => "TEXT",
    Than => "THAN",
    Then => "THEN",
    ThreadPriority => "THREAD_PRIORITY",
    Ties => "TIES",
    Time => "TIME",
    Timestamp => "TIMESTAMP",
    Timestampadd => "TIMESTAMPADD",
    Timestampdiff => "TIMESTAMPDIFF",
    Tinyblob => "TINYBLOB",
    Tinyint => "TINYINT",
    Tinytext => "TINYTEXT",
    Tls => "TLS",
    To => "TO",
    Trailing => "TRAILING",
    Transaction => "TRANSACTION",
    Trigger => "TRIGGER",
    Triggers => "TRIGGERS",
    Trim => "TRIM",
    True => "TRUE",
    Truncate => "TRUNCATE",
    Type => "TYPE",
    Types => "TYPES",
    Unbounded => "UNBOUNDED",
    Uncommitted => "UNCOMMITTED",
    Undefined => "UNDEFINED",
    Undo => "UNDO",
    Undofile => "UNDOFILE",
    UndoBufferSize => "UNDO_BUFFER_SIZE",
    Unicode => "UNICODE",
    Uninstall => "UNINSTALL",
    Union => "UNION",
    Unique => "UNIQUE",
    Unknown => "UNKNOWN",
    Unlock => "UNLOCK",
    Unregister => "UNREGISTER",
    Unsigned => "UNSIGNED",
    Until => "UNTIL",
    Update => "UPDATE",
    Upgrade => "UPGRADE",
    Usage => "USAGE",
    Use => "USE",
    User => "USER",
    UserResources => "USER_RESOURCES",
    UseFrm => "USE_FRM",
    Using => "USING",
    UtcDate => "UTC_DATE",
    UtcTime => "UTC_TIME",
    UtcTimestamp => "UTC_TIMESTAMP",
    Validation => "VALIDATION",
    Value => "VALUE",
    Values => "VALUES",
    Varbinary => "VARBINARY",
    Varchar => "VARCHAR",
    Varcharacter => "VARCHARACTER",
    Variables => "VARIABLES",
    Variance => "VARIANCE",
    Varying => "VARYING",
    VarPop => "VAR_POP",
    VarSamp => "VAR_SAMP",
    Vcpu => "VCPU",
    View => "VIEW",
    Virtual => "VIRTUAL",
    Visible => "VISIBLE",
    Wait => "WAIT",
    Warnings => "WARNINGS",
    Week => "WEEK",
    WeightString => "WEIGHT_STRING",
    When => "WHEN",
    Where => "WHERE",
    While => "WHILE",
    Window => "WINDOW",
    With => "WITH",
    Without => "WITHOUT",
    Work => "WORK",
    Wrapper => "WRAPPER",
    Write => "WRITE",
    X509 => "X509",
    Xa => "XA",
    Xid => "XID",
    Xml => "XML",
    Xor => "XOR",
    Year => "YEAR",
    YearMonth => "YEAR_MONTH",
    Zerofill => "ZEROFILL",
    Zone => "ZONE",
}

impl TokenType {
    /// Числовой идентификатор типа
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Тип по числовому идентификатору
    ///
    /// Только для отладки и тестов.
    pub fn from_id(id: u16) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// Тип по отладочному имени
    ///
    /// Линейный поиск по таблице; не использовать на горячем пути.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|token_type| token_type.name() == name)
            .ok_or_else(|| Error::unknown_token_type(name))
    }

    pub fn is_keyword(self) -> bool {
        self.keyword_spelling().is_some()
    }

    /// Пробелы, комментарии и маркеры условных комментариев
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenType::Whitespace
                | TokenType::SqlComment
                | TokenType::MysqlCommentStart
                | TokenType::MysqlCommentEnd
        )
    }

    /// Строковые и числовые литералы
    pub fn is_literal(self) -> bool {
        self.is_number() || (self.is_quoted_text() && self != TokenType::BackTickQuotedId)
    }

    pub fn is_number(self) -> bool {
        matches!(
            self,
            TokenType::HexNumber
                | TokenType::BinNumber
                | TokenType::IntNumber
                | TokenType::LongNumber
                | TokenType::UlonglongNumber
                | TokenType::DecimalNumber
                | TokenType::FloatNumber
        )
    }

    /// Типы, значение которых требует снятия кавычек и экранирования
    pub fn is_quoted_text(self) -> bool {
        matches!(
            self,
            TokenType::SingleQuotedText
                | TokenType::DoubleQuotedText
                | TokenType::BackTickQuotedId
                | TokenType::NcharText
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
