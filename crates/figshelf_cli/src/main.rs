//! figshelf command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, bootstrap logging and open the data root.
//! - Dispatch each command to the core and print its outcome.
//!
//! Exit codes: 0 on success, 1 when the operation could not be carried out
//! (collision, not found, validation, parse or I/O failure), 2 on usage errors.

mod cli;
mod output;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use figshelf_core::tools::{weather_csv, word_count};
use figshelf_core::{
    default_log_level, init_logging, resolve_data_root, resolve_log_dir, CollectionService,
    FileFigureRepository,
};
use log::error;
use output::Painter;
use std::io::IsTerminal;
use std::process::ExitCode;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let painter = Painter::new(!cli.no_color && std::io::stdout().is_terminal());

    match run(cli, &painter) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            error!("event=command module=cli status=error error={err:#}");
            eprintln!("{}", painter.error(&format!("Error: {err:#}")));
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: Cli, painter: &Painter) -> anyhow::Result<u8> {
    start_logging(&cli);
    let Cli {
        data_dir, command, ..
    } = cli;

    let open = || -> anyhow::Result<CollectionService<FileFigureRepository>> {
        let root = resolve_data_root(data_dir.as_deref())
            .context("failed to resolve data directory")?;
        Ok(CollectionService::new(FileFigureRepository::open(root)?))
    };

    let outcome = match command {
        Command::Add(args) => open()?.create(&args.user, &args.to_figure()?)?,
        Command::List(args) => open()?.list(&args.user)?,
        Command::Update(args) => open()?.update(&args.user, &args.to_figure()?)?,
        Command::Read(args) => open()?.get(&args.user, &args.id)?,
        Command::Remove(args) => open()?.remove(&args.user, &args.id)?,
        Command::CountWord { file, word } => {
            let count = word_count::count_in_file(&file, &word)?;
            println!("La palabra \"{word}\" aparece {count} veces en el fichero.");
            return Ok(EXIT_SUCCESS);
        }
        Command::WeatherCsv { input, output } => {
            let rows = weather_csv::convert_file(&input, &output)?;
            println!(
                "Archivo CSV con {rows} filas guardado en: {}",
                output.display()
            );
            return Ok(EXIT_SUCCESS);
        }
    };

    println!("{}", painter.outcome(&outcome));
    Ok(if outcome.is_failure() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    })
}

/// Logging is best-effort: a broken log directory must not block the command.
fn start_logging(cli: &Cli) {
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    let result = resolve_log_dir(cli.log_dir.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|dir| init_logging(level, &dir).map_err(anyhow::Error::from));
    if let Err(err) = result {
        eprintln!("warning: file logging disabled: {err}");
    }
}
