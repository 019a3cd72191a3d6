//! CLI интерфейс для mysql-lexer
//!
//! Отладочная утилита: печатает поток токенов для SQL текста с заданной
//! версией сервера и режимами SQL.

use crate::common::LexerConfig;
use crate::lexer::{Lexer, SqlModes, Token};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// mysql-lex - лексический анализ SQL для MySQL
#[derive(Parser, Debug)]
#[command(name = "mysql-lex")]
#[command(about = "Tokenizes MySQL SQL text")]
#[command(version)]
pub struct Cli {
    /// SQL текст
    #[arg(short, long, value_name = "SQL", conflicts_with = "file")]
    pub sql: Option<String>,

    /// Файл с SQL текстом (`-` для stdin)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Целевая версия MySQL в формате MMmmPP
    #[arg(long, value_name = "VERSION")]
    pub mysql_version: Option<u32>,

    /// Режимы SQL через запятую, как в `@@sql_mode`
    #[arg(long, value_name = "MODES")]
    pub sql_mode: Option<String>,

    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Печатать также пробелы, комментарии и EOF
    #[arg(long)]
    pub raw: bool,

    /// Формат вывода
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Токен в JSON выводе
#[derive(Debug, Serialize)]
pub struct TokenDump {
    pub token_type: &'static str,
    pub start: usize,
    pub length: usize,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl From<&Token<'_>> for TokenDump {
    fn from(token: &Token<'_>) -> Self {
        Self {
            token_type: token.name(),
            start: token.start,
            length: token.length,
            text: token.text().into_owned(),
            value: token
                .token_type
                .is_quoted_text()
                .then(|| token.value().into_owned()),
        }
    }
}

/// Результат разбора в JSON выводе
#[derive(Debug, Serialize)]
pub struct LexReport {
    pub mysql_version: u32,
    pub sql_modes: SqlModes,
    pub complete: bool,
    /// Смещение некорректного токена
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped_at: Option<usize>,
    pub tokens: Vec<TokenDump>,
}

impl Cli {
    /// Инициализирует логирование; `--log-level` важнее `RUST_LOG`
    pub fn init_logging(&self) {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
        if let Some(level) = &self.log_level {
            builder.parse_filters(level);
        }
        let _ = builder.try_init();
    }

    /// Загружает конфигурацию и применяет параметры командной строки
    pub fn load_config(&self) -> anyhow::Result<LexerConfig> {
        let mut config = match &self.config {
            Some(path) => LexerConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => LexerConfig::default(),
        };

        if let Some(version) = self.mysql_version {
            config = config.with_version(version)?;
        }
        if let Some(modes) = &self.sql_mode {
            config = config.with_sql_modes(SqlModes::from_sql_mode_string(modes)?);
        }

        Ok(config)
    }

    fn read_input(&self) -> anyhow::Result<Vec<u8>> {
        if let Some(sql) = &self.sql {
            return Ok(sql.clone().into_bytes());
        }

        match &self.file {
            Some(path) if path.as_os_str() != "-" => std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display())),
            _ => {
                let mut input = Vec::new();
                io::stdin()
                    .read_to_end(&mut input)
                    .context("failed to read stdin")?;
                Ok(input)
            }
        }
    }

    /// Выполняет разбор и печатает токены
    ///
    /// Возвращает `false`, если ввод разобран не полностью.
    pub fn run(&self, out: &mut dyn Write) -> anyhow::Result<bool> {
        let config = self.load_config()?;
        let input = self.read_input()?;
        self.run_on(&input, config, out)
    }

    fn run_on(
        &self,
        input: &[u8],
        config: LexerConfig,
        out: &mut dyn Write,
    ) -> anyhow::Result<bool> {
        let mysql_version = config.mysql_version;
        let sql_modes = config.sql_modes;
        let mut lexer = Lexer::with_config(input, config)?;

        let tokens = if self.raw {
            std::iter::from_fn(|| lexer.scan_token()).collect()
        } else {
            lexer.drain_all()
        };
        let complete = lexer.reached_eof();
        let stopped_at = (!complete).then(|| lexer.position());

        match self.format {
            OutputFormat::Text => {
                for token in &tokens {
                    writeln!(
                        out,
                        "{:>6}  {:<28} {:?}",
                        token.start,
                        token.name(),
                        token.text()
                    )?;
                }
                if let Some(position) = stopped_at {
                    writeln!(out, "error: invalid input at byte {}", position)?;
                }
            }
            OutputFormat::Json => {
                let report = LexReport {
                    mysql_version,
                    sql_modes,
                    complete,
                    stopped_at,
                    tokens: tokens.iter().map(TokenDump::from).collect(),
                };
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            }
        }

        if !complete {
            log::info!(
                "Разобрано {} токенов, ввод остановлен на байте {}",
                tokens.len(),
                lexer.position()
            );
        }
        Ok(complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn run(args: &[&str]) -> (bool, String) {
        let args = std::iter::once("mysql-lex").chain(args.iter().copied());
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let complete = cli.run(&mut out).unwrap();
        (complete, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_text_output() {
        let (complete, out) = run(&["--sql", "SELECT 1"]);
        assert!(complete);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Select"));
        assert!(lines[1].contains("IntNumber"));
    }

    #[test]
    fn test_raw_output_includes_trivia() {
        let (_, out) = run(&["--sql", "a /* c */", "--raw"]);
        assert!(out.contains("Whitespace"));
        assert!(out.contains("SqlComment"));
        assert!(out.contains("Eof"));
    }

    #[test]
    fn test_json_output() {
        let (complete, out) = run(&[
            "--sql",
            "'a\\'b' || c",
            "--sql-mode",
            "ansi",
            "--format",
            "json",
        ]);
        assert!(complete);
        let report: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["complete"], true);
        assert_eq!(report["tokens"][0]["value"], "a'b");
        assert_eq!(report["tokens"][1]["token_type"], "ConcatPipesSymbol");
        assert!(report["sql_modes"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("PIPES_AS_CONCAT")));
    }

    #[test]
    fn test_incomplete_input() {
        let (complete, out) = run(&["--sql", "SELECT 'abc", "--format", "json"]);
        assert!(!complete);
        let report: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["stopped_at"], 7);

        let (complete, out) = run(&["--sql", "a->b", "--mysql-version", "50707"]);
        assert!(!complete);
        assert!(out.contains("invalid input at byte 1"));
    }

    #[test]
    fn test_config_file_and_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "mysql_version = 80013\nsql_modes = [\"HIGH_NOT_PRECEDENCE\"]").unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["mysql-lex", "--config", path, "--sql", "x"]).unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.mysql_version, 80013);

        let (_, out) = run(&["--config", path, "--sql", "LATERAL NOT"]);
        assert!(out.contains("Identifier"));
        assert!(out.contains("NotHighPrecedence"));

        let (_, out) = run(&["--config", path, "--mysql-version", "80017", "--sql", "LATERAL"]);
        assert!(out.contains("Lateral"));
    }

    #[test]
    fn test_bad_arguments() {
        assert!(Cli::try_parse_from(["mysql-lex", "--sql", "a", "--file", "b"]).is_err());

        let cli = Cli::try_parse_from(["mysql-lex", "--sql", "a", "--sql-mode", "NOPE"]).unwrap();
        assert!(cli.run(&mut Vec::new()).is_err());

        let cli = Cli::try_parse_from(["mysql-lex", "--sql", "a", "--mysql-version", "7"]).unwrap();
        assert!(cli.load_config().is_err());
    }

    #[test]
    fn test_file_input() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"SHOW TABLES;").unwrap();
        let path = file.path().to_str().unwrap();

        let (complete, out) = run(&["--file", path]);
        assert!(complete);
        assert_eq!(out.lines().count(), 3);
    }
}
