//! Главный исполняемый файл mysql-lex

use clap::Parser;
use mysql_lexer::cli::Cli;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cli.init_logging();

    let stdout = std::io::stdout();
    let complete = cli.run(&mut stdout.lock())?;

    // Неполный разбор уже отражен в выводе
    Ok(if complete {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
