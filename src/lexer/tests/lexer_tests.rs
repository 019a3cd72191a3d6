//! Тесты для лексического анализатора MySQL

use crate::common::{Error, LexerConfig};
use crate::lexer::{Lexer, SqlMode, Token, TokenType};

fn types(sql: &str) -> Vec<TokenType> {
    Lexer::new(sql)
        .drain_all()
        .iter()
        .map(|token| token.token_type)
        .collect()
}

fn types_with(sql: &str, config: LexerConfig) -> Vec<TokenType> {
    Lexer::with_config(sql.as_bytes(), config)
        .unwrap()
        .drain_all()
        .iter()
        .map(|token| token.token_type)
        .collect()
}

fn version(mysql_version: u32) -> LexerConfig {
    LexerConfig::new(mysql_version).unwrap()
}

fn mode(mode: SqlMode) -> LexerConfig {
    LexerConfig::default().with_sql_mode(mode)
}

fn texts(tokens: &[Token<'_>]) -> Vec<String> {
    tokens.iter().map(|token| token.text().into_owned()).collect()
}

#[test]
fn test_simple_select() {
    assert_eq!(
        types("SELECT a, b FROM t;"),
        vec![
            TokenType::Select,
            TokenType::Identifier,
            TokenType::CommaSymbol,
            TokenType::Identifier,
            TokenType::From,
            TokenType::Identifier,
            TokenType::SemicolonSymbol,
        ]
    );
}

#[test]
fn test_case_insensitive_keywords() {
    for sql in ["select", "SELECT", "Select", "sElEcT"] {
        assert_eq!(types(sql), vec![TokenType::Select]);
    }
}

#[test]
fn test_token_positions() {
    let tokens = Lexer::new("SELECT  col").drain_all();
    assert_eq!(tokens[0].start, 0);
    assert_eq!(tokens[0].length, 6);
    assert_eq!(tokens[1].start, 8);
    assert_eq!(tokens[1].end(), 11);
    assert_eq!(texts(&tokens), vec!["SELECT", "col"]);
}

#[test]
fn test_operators_and_punctuation() {
    assert_eq!(
        types("<=> <= <> << >= >> := != && ! ~ ^ % & | = < > + - * / , ; ( ) { } ? :"),
        vec![
            TokenType::NullSafeEqualOperator,
            TokenType::LessOrEqualOperator,
            TokenType::NotEqualOperator,
            TokenType::ShiftLeftOperator,
            TokenType::GreaterOrEqualOperator,
            TokenType::ShiftRightOperator,
            TokenType::AssignOperator,
            TokenType::NotEqualOperator,
            TokenType::LogicalAndOperator,
            TokenType::LogicalNotOperator,
            TokenType::BitwiseNotOperator,
            TokenType::BitwiseXorOperator,
            TokenType::ModOperator,
            TokenType::BitwiseAndOperator,
            TokenType::BitwiseOrOperator,
            TokenType::EqualOperator,
            TokenType::LessThanOperator,
            TokenType::GreaterThanOperator,
            TokenType::PlusOperator,
            TokenType::MinusOperator,
            TokenType::MultOperator,
            TokenType::DivOperator,
            TokenType::CommaSymbol,
            TokenType::SemicolonSymbol,
            TokenType::OpenParSymbol,
            TokenType::CloseParSymbol,
            TokenType::OpenCurlySymbol,
            TokenType::CloseCurlySymbol,
            TokenType::ParamMarker,
            TokenType::ColonSymbol,
        ]
    );
}

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(
        types("a\t\r\n\x0Cb"),
        vec![TokenType::Identifier, TokenType::Identifier]
    );
    // Вертикальная табуляция не является пробелом
    assert!(types("\x0B").is_empty());
}

#[test]
fn test_integer_magnitudes() {
    let cases = [
        ("42", TokenType::IntNumber),
        ("0", TokenType::IntNumber),
        ("2147483647", TokenType::IntNumber),
        ("2147483648", TokenType::LongNumber),
        ("9223372036854775807", TokenType::LongNumber),
        ("9223372036854775808", TokenType::UlonglongNumber),
        ("18446744073709551615", TokenType::UlonglongNumber),
        ("18446744073709551616", TokenType::DecimalNumber),
        ("123456789012345678901", TokenType::DecimalNumber),
        ("00000000002147483647", TokenType::IntNumber),
        ("0000000002147483648", TokenType::LongNumber),
    ];
    for (sql, expected) in cases {
        assert_eq!(types(sql), vec![expected], "{}", sql);
    }
}

#[test]
fn test_numeric_forms() {
    let cases = [
        ("1.5", TokenType::DecimalNumber),
        (".5", TokenType::DecimalNumber),
        ("1.", TokenType::DecimalNumber),
        ("1e10", TokenType::FloatNumber),
        ("1.5E+3", TokenType::FloatNumber),
        ("2e-5", TokenType::FloatNumber),
        ("0x1F", TokenType::HexNumber),
        ("0b101", TokenType::BinNumber),
        ("X'1F'", TokenType::HexNumber),
        ("x''", TokenType::HexNumber),
        ("b'01'", TokenType::BinNumber),
        ("B'1'", TokenType::BinNumber),
    ];
    for (sql, expected) in cases {
        assert_eq!(types(sql), vec![expected], "{}", sql);
    }
}

#[test]
fn test_number_followed_by_identifier_becomes_identifier() {
    for sql in ["1234a", "0b012", "0x1g", "12.3a", "1e", "1é"] {
        let tokens = Lexer::new(sql).drain_all();
        assert_eq!(tokens.len(), 1, "{}", sql);
        assert_eq!(tokens[0].token_type, TokenType::Identifier, "{}", sql);
        assert_eq!(tokens[0].text(), sql);
    }
}

#[test]
fn test_float_is_never_reclassified() {
    let tokens = Lexer::new("1e10a").drain_all();
    assert_eq!(texts(&tokens), vec!["1e10", "a"]);
    assert_eq!(tokens[0].token_type, TokenType::FloatNumber);
    assert_eq!(tokens[1].token_type, TokenType::Identifier);
}

#[test]
fn test_identifier_after_dot() {
    let tokens = Lexer::new("1ea10.1").drain_all();
    assert_eq!(texts(&tokens), vec!["1ea10", ".", "1"]);
    assert_eq!(
        tokens.iter().map(|t| t.token_type).collect::<Vec<_>>(),
        vec![
            TokenType::Identifier,
            TokenType::DotSymbol,
            TokenType::Identifier
        ]
    );

    assert_eq!(
        types("t.select"),
        vec![
            TokenType::Identifier,
            TokenType::DotSymbol,
            TokenType::Identifier
        ]
    );
    assert_eq!(
        types("db.1e5"),
        vec![
            TokenType::Identifier,
            TokenType::DotSymbol,
            TokenType::Identifier
        ]
    );
    assert_eq!(
        types("`t`.5"),
        vec![
            TokenType::BackTickQuotedId,
            TokenType::DotSymbol,
            TokenType::Identifier
        ]
    );
}

#[test]
fn test_invalid_quoted_numbers() {
    let mut lexer = Lexer::new("x'1G'");
    assert!(lexer.drain_all().is_empty());
    assert!(!lexer.reached_eof());

    let mut lexer = Lexer::new("b'012'");
    assert!(lexer.drain_all().is_empty());
    assert!(!lexer.reached_eof());
}

#[test]
fn test_quoted_text() {
    let tokens = Lexer::new(r#"'it''s' "say ""hi""" `a``b` 'a\'b'"#).drain_all();
    assert_eq!(
        tokens.iter().map(|t| t.token_type).collect::<Vec<_>>(),
        vec![
            TokenType::SingleQuotedText,
            TokenType::DoubleQuotedText,
            TokenType::BackTickQuotedId,
            TokenType::SingleQuotedText,
        ]
    );
    assert_eq!(tokens[0].value(), "it's");
    assert_eq!(tokens[1].value(), "say \"hi\"");
    assert_eq!(tokens[2].value(), "a`b");
    assert_eq!(tokens[3].value(), "a'b");
}

#[test]
fn test_unterminated_quotes() {
    for sql in ["'abc", "\"abc", "`abc", r"'abc\'", "'", "N'x"] {
        let mut lexer = Lexer::new(sql);
        assert!(lexer.drain_all().is_empty(), "{}", sql);
        assert!(!lexer.reached_eof(), "{}", sql);
        assert_eq!(lexer.position(), 0, "{}", sql);
    }
}

#[test]
fn test_no_backslash_escapes_scanning() {
    let config = mode(SqlMode::NoBackslashEscapes);
    let mut lexer = Lexer::with_config(br"'a\' b", config).unwrap();
    let tokens = lexer.drain_all();
    assert_eq!(texts(&tokens), vec![r"'a\'", "b"]);
    assert_eq!(tokens[0].value(), r"a\");
    assert!(lexer.reached_eof());
}

#[test]
fn test_backticks_ignore_backslash() {
    let tokens = Lexer::new(r"`a\` b").drain_all();
    assert_eq!(texts(&tokens), vec![r"`a\`", "b"]);
    assert_eq!(tokens[0].token_type, TokenType::BackTickQuotedId);
}

#[test]
fn test_nchar_text() {
    let tokens = Lexer::new("N'abc' n'x'").drain_all();
    assert_eq!(tokens[0].token_type, TokenType::NcharText);
    assert_eq!(tokens[0].value(), "abc");
    assert_eq!(tokens[1].token_type, TokenType::NcharText);
    assert_eq!(tokens[1].text(), "n'x'");
}

#[test]
fn test_utf8_identifiers() {
    let tokens = Lexer::new("SELECT café, 中文").drain_all();
    assert_eq!(texts(&tokens), vec!["SELECT", "café", ",", "中文"]);
    assert_eq!(tokens[1].token_type, TokenType::Identifier);
    assert_eq!(tokens[3].token_type, TokenType::Identifier);
}

#[test]
fn test_invalid_utf8_halts() {
    let mut lexer = Lexer::new("a 😀");
    assert_eq!(lexer.drain_all().len(), 1);
    assert!(!lexer.reached_eof());
    assert_eq!(lexer.position(), 2);

    let mut lexer = Lexer::from_bytes(b"a\xC3");
    let tokens = lexer.drain_all();
    assert_eq!(texts(&tokens), vec!["a"]);
    assert_eq!(lexer.position(), 1);

    let mut lexer = Lexer::from_bytes(b"\xFF");
    assert!(lexer.drain_all().is_empty());
}

#[test]
fn test_keyword_version_gating() {
    assert_eq!(types("LATERAL"), vec![TokenType::Lateral]);
    assert_eq!(types_with("LATERAL", version(80017)), vec![TokenType::Lateral]);
    assert_eq!(types_with("LATERAL", version(80013)), vec![TokenType::Identifier]);

    // Удаленное ключевое слово
    assert_eq!(types_with("ANALYSE", version(50700)), vec![TokenType::Analyse]);
    assert_eq!(types_with("ANALYSE", version(80000)), vec![TokenType::Identifier]);
}

#[test]
fn test_keywords_added_after_8_0() {
    let sql = "QUALIFY PARSE_TREE MANUAL PARALLEL GTIDS S3 BULK AUTO BERNOULLI TABLESAMPLE LOG";
    assert_eq!(
        types_with(sql, version(80400)),
        vec![
            TokenType::Qualify,
            TokenType::ParseTree,
            TokenType::Manual,
            TokenType::Parallel,
            TokenType::Gtids,
            TokenType::S3,
            TokenType::Bulk,
            TokenType::Auto,
            TokenType::Bernoulli,
            TokenType::Tablesample,
            TokenType::Log,
        ]
    );
    assert!(types(sql).iter().all(|&t| t == TokenType::Identifier));

    assert_eq!(types_with("PARSE_TREE", version(80100)), vec![TokenType::ParseTree]);
    assert_eq!(types_with("QUALIFY", version(80100)), vec![TokenType::Identifier]);
    assert_eq!(types_with("GTIDS", version(80300)), vec![TokenType::Gtids]);
    assert_eq!(types_with("S3", version(80300)), vec![TokenType::Identifier]);
}

#[test]
fn test_manual_version_windows() {
    assert_eq!(
        types_with("MAX_STATEMENT_TIME", version(50705)),
        vec![TokenType::MaxStatementTime]
    );
    assert_eq!(
        types_with("MAX_STATEMENT_TIME", version(50704)),
        vec![TokenType::Identifier]
    );
    assert_eq!(
        types_with("MAX_STATEMENT_TIME", version(50708)),
        vec![TokenType::Identifier]
    );
    assert_eq!(
        types_with("NONBLOCKING", version(50705)),
        vec![TokenType::Nonblocking]
    );
    assert_eq!(types("NONBLOCKING"), vec![TokenType::Identifier]);
}

#[test]
fn test_function_keywords_need_parenthesis() {
    assert_eq!(
        types("COUNT(*)"),
        vec![
            TokenType::Count,
            TokenType::OpenParSymbol,
            TokenType::MultOperator,
            TokenType::CloseParSymbol,
        ]
    );
    assert_eq!(types("count"), vec![TokenType::Identifier]);
    assert_eq!(types("COUNT (*)")[0], TokenType::Identifier);
    assert_eq!(
        types_with("COUNT (*)", mode(SqlMode::IgnoreSpace))[0],
        TokenType::Count
    );
    assert_eq!(
        types_with("COUNT\n\t(*)", mode(SqlMode::IgnoreSpace))[0],
        TokenType::Count
    );
}

#[test]
fn test_synonyms_are_collapsed() {
    let cases = [
        ("INTEGER", TokenType::Int),
        ("INT4", TokenType::Int),
        ("SCHEMA", TokenType::Database),
        ("CURRENT_TIMESTAMP", TokenType::Now),
        ("SOME", TokenType::Any),
        ("SUBSTR(x)", TokenType::Substring),
        ("MID(x)", TokenType::Substring),
    ];
    for (sql, expected) in cases {
        assert_eq!(types(sql)[0], expected, "{}", sql);
    }
    // Функция без скобок остается идентификатором, синоним не применяется
    assert_eq!(types("SUBSTR"), vec![TokenType::Identifier]);
}

#[test]
fn test_pipes_as_concat() {
    assert_eq!(
        types("a || b")[1],
        TokenType::LogicalOrOperator
    );
    assert_eq!(
        types_with("a || b", mode(SqlMode::PipesAsConcat))[1],
        TokenType::ConcatPipesSymbol
    );
}

#[test]
fn test_high_not_precedence() {
    assert_eq!(types("NOT a")[0], TokenType::Not);
    assert_eq!(
        types_with("not a", mode(SqlMode::HighNotPrecedence))[0],
        TokenType::NotHighPrecedence
    );
}

#[test]
fn test_json_operators_by_version() {
    assert_eq!(
        types("c->'$.a'"),
        vec![
            TokenType::Identifier,
            TokenType::JsonSeparatorSymbol,
            TokenType::SingleQuotedText,
        ]
    );
    assert_eq!(types("c->>'$.a'")[1], TokenType::JsonUnquotedSeparatorSymbol);

    let mut lexer = Lexer::with_config(b"c->'$.a'", version(50707)).unwrap();
    assert_eq!(lexer.drain_all().len(), 1);
    assert!(!lexer.reached_eof());
    assert_eq!(lexer.position(), 1);

    let mut lexer = Lexer::with_config(b"c->>'$'", version(50712)).unwrap();
    assert_eq!(lexer.drain_all().len(), 1);
    assert!(!lexer.reached_eof());

    assert_eq!(
        types_with("c->>'$'", version(50713))[1],
        TokenType::JsonUnquotedSeparatorSymbol
    );
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(types("-- c\nSELECT"), vec![TokenType::Select]);
    assert_eq!(types("# c\n1"), vec![TokenType::IntNumber]);
    assert_eq!(types("a--"), vec![TokenType::Identifier]);
    assert_eq!(types("/* x */ 1 /**/"), vec![TokenType::IntNumber]);
    assert_eq!(
        types("--c"),
        vec![
            TokenType::MinusOperator,
            TokenType::MinusOperator,
            TokenType::Identifier
        ]
    );
}

#[test]
fn test_unterminated_block_comment() {
    let mut lexer = Lexer::new("1 /* abc");
    assert_eq!(lexer.drain_all().len(), 1);
    assert!(!lexer.reached_eof());
    assert_eq!(lexer.position(), 2);
}

#[test]
fn test_conditional_comments() {
    let sql = "/*!50700 SELECT */ 1";
    assert_eq!(types(sql), vec![TokenType::Select, TokenType::IntNumber]);
    assert_eq!(types_with(sql, version(50700)), vec![TokenType::Select, TokenType::IntNumber]);
    assert_eq!(types_with(sql, version(50600)), vec![TokenType::IntNumber]);

    assert_eq!(types("/*! STRAIGHT_JOIN */"), vec![TokenType::StraightJoin]);
    assert_eq!(types_with("/*!80038 a */", version(80038)), vec![TokenType::Identifier]);
}

#[test]
fn test_conditional_comment_markers() {
    let mut lexer = Lexer::new("/*!50700 a*/");
    let mut scanned = Vec::new();
    while let Some(token) = lexer.scan_token() {
        scanned.push((token.token_type, token.text().into_owned()));
    }
    assert_eq!(
        scanned,
        vec![
            (TokenType::MysqlCommentStart, "/*!50700".to_string()),
            (TokenType::Whitespace, " ".to_string()),
            (TokenType::Identifier, "a".to_string()),
            (TokenType::MysqlCommentEnd, "*/".to_string()),
            (TokenType::Eof, String::new()),
        ]
    );
}

#[test]
fn test_skipped_conditional_comment_must_be_closed() {
    let mut lexer = Lexer::with_config(b"/*!50700 a", version(50600)).unwrap();
    assert!(lexer.drain_all().is_empty());
    assert!(!lexer.reached_eof());
}

#[test]
fn test_null_escape_and_backslash() {
    assert_eq!(types(r"\N"), vec![TokenType::NullEscape]);

    let mut lexer = Lexer::new(r"\x");
    assert!(lexer.drain_all().is_empty());
    assert_eq!(lexer.position(), 0);
}

#[test]
fn test_underscore_charsets() {
    assert_eq!(
        types("_utf8mb4'abc'"),
        vec![TokenType::UnderscoreCharset, TokenType::SingleQuotedText]
    );
    assert_eq!(types("_UTF8 'x'")[0], TokenType::UnderscoreCharset);
    assert_eq!(types("_binary")[0], TokenType::UnderscoreCharset);
    assert_eq!(types("_foo"), vec![TokenType::Identifier]);
    assert_eq!(types("_"), vec![TokenType::Identifier]);
}

#[test]
fn test_custom_underscore_charsets() {
    let config = LexerConfig::default()
        .with_underscore_charsets(["koi8r"])
        .unwrap();
    assert_eq!(
        types_with("_koi8r _utf8mb4", config),
        vec![TokenType::UnderscoreCharset, TokenType::Identifier]
    );
}

#[test]
fn test_at_variants() {
    let tokens = Lexer::new("@a.b @@x @'v' @").drain_all();
    assert_eq!(
        tokens.iter().map(|t| t.token_type).collect::<Vec<_>>(),
        vec![
            TokenType::AtTextSuffix,
            TokenType::AtAtSignSymbol,
            TokenType::Identifier,
            TokenType::AtSignSymbol,
            TokenType::SingleQuotedText,
            TokenType::AtSignSymbol,
        ]
    );
    assert_eq!(tokens[0].text(), "@a.b");
}

#[test]
fn test_scan_token_reconstructs_input() {
    let sql = "SELECT /* c */ `a``b`, 'x\\'y' -- end\n#h\n/*!50700 FROM*/ t\t;";
    let mut lexer = Lexer::new(sql);
    let mut rebuilt = Vec::new();
    let mut last = None;
    while let Some(token) = lexer.scan_token() {
        rebuilt.extend_from_slice(token.bytes());
        last = Some(token.token_type);
    }
    assert_eq!(rebuilt, sql.as_bytes());
    assert_eq!(last, Some(TokenType::Eof));
    assert!(lexer.reached_eof());
}

#[test]
fn test_tokenization_is_deterministic() {
    let sql = "SELECT a->>'$.x', _latin1'y' FROM `t` WHERE b <=> 0x1F /*!80000 LIMIT 1 */";
    assert_eq!(Lexer::new(sql).drain_all(), Lexer::new(sql).drain_all());
}

#[test]
fn test_eof_is_emitted_once() {
    let mut lexer = Lexer::new("a");
    assert!(lexer.advance());
    assert_eq!(lexer.current_token().unwrap().token_type, TokenType::Identifier);

    assert!(lexer.advance());
    let eof = lexer.current_token().unwrap();
    assert_eq!(eof.token_type, TokenType::Eof);
    assert_eq!(eof.start, 1);
    assert_eq!(eof.length, 0);
    assert!(lexer.reached_eof());

    assert!(!lexer.advance());
    assert!(lexer.current_token().is_none());
    assert!(!lexer.advance());
    assert!(lexer.scan_token().is_none());
}

#[test]
fn test_empty_input() {
    let mut lexer = Lexer::new("");
    assert!(lexer.advance());
    assert_eq!(lexer.current_token().unwrap().token_type, TokenType::Eof);
    assert!(!lexer.advance());

    let mut lexer = Lexer::new("  -- only a comment");
    assert!(lexer.drain_all().is_empty());
    assert!(lexer.reached_eof());
}

#[test]
fn test_halted_lexer_stays_halted() {
    let mut lexer = Lexer::new(r"SELECT \x");
    assert!(lexer.advance());
    assert!(!lexer.advance());
    assert_eq!(lexer.position(), 7);
    assert!(lexer.current_token().is_none());

    for _ in 0..3 {
        assert!(!lexer.advance());
        assert!(lexer.scan_token().is_none());
        assert_eq!(lexer.position(), 7);
    }
    assert!(lexer.drain_all().is_empty());
    assert!(!lexer.reached_eof());
}

#[test]
fn test_drain_all_returns_valid_prefix() {
    let mut lexer = Lexer::new("SELECT 1, 'abc");
    let tokens = lexer.drain_all();
    assert_eq!(texts(&tokens), vec!["SELECT", "1", ","]);
    assert!(!lexer.reached_eof());
    assert_eq!(lexer.position(), 10);
}

#[test]
fn test_tokenize_reports_invalid_input() {
    let tokens = Lexer::new("SELECT 1").tokenize().unwrap();
    assert_eq!(tokens.len(), 2);

    match Lexer::new("SELECT 'abc").tokenize() {
        Err(Error::InvalidInput { position, snippet }) => {
            assert_eq!(position, 7);
            assert_eq!(snippet, "'abc");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = LexerConfig {
        mysql_version: 5,
        ..LexerConfig::default()
    };
    assert!(Lexer::with_config(b"SELECT", config).is_err());
}
