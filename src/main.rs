use clap::Parser;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use zstruct::core::{execute, Command};
use zstruct::kernel::{
    load_settings, ConfigError, EditorContext, LanguageId, ProfileTable, StructureSettings,
};
use zstruct::models::Position;

mod logging;

/// Syntax-aware structural navigation and editing
#[derive(Parser, Debug)]
#[command(name = "zstruct")]
#[command(version)]
#[command(about = "Run structural navigation and editing commands over a source file", long_about = None)]
struct Args {
    /// Source file to operate on
    file: PathBuf,

    /// Primary cursor as ROW:COL (zero-based, column in bytes)
    #[arg(short, long, default_value = "0:0", value_parser = parse_position)]
    cursor: Position,

    /// Extra cursors as ROW:COL, added after the primary one
    #[arg(long = "add-cursor", value_parser = parse_position)]
    add_cursor: Vec<Position>,

    /// Language id or scope (javascript, rust, source.js, ...); defaults to the file extension
    #[arg(short, long)]
    language: Option<String>,

    /// JSON settings file with per-language function kinds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output a JSON report instead of the resulting text
    #[arg(short, long)]
    json: bool,

    /// Write the resulting text back to FILE
    #[arg(short, long)]
    write: bool,

    /// Commands to run in order (see `Command` names, e.g. swap-with-next-sibling)
    commands: Vec<String>,
}

fn parse_position(value: &str) -> Result<Position, String> {
    let (row, column) = value
        .split_once(':')
        .ok_or_else(|| format!("expected ROW:COL, got '{}'", value))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row in '{}'", value))?;
    let column = column
        .trim()
        .parse()
        .map_err(|_| format!("invalid column in '{}'", value))?;
    Ok(Position::new(row, column))
}

#[derive(Debug)]
enum CliError {
    Io(PathBuf, io::Error),
    Config(ConfigError),
    Json(serde_json::Error),
    UnknownLanguage(String),
    UnknownCommand(String),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::UnknownLanguage(_) | CliError::UnknownCommand(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(path, e) => write!(f, "{}: {}", path.display(), e),
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::UnknownLanguage(name) => write!(f, "unknown language '{}'", name),
            CliError::UnknownCommand(name) => write!(f, "unknown command '{}'", name),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(_, e) => Some(e),
            CliError::Config(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::UnknownLanguage(_) | CliError::UnknownCommand(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

#[derive(Serialize)]
struct SelectionReport {
    anchor: Position,
    cursor: Position,
}

#[derive(Serialize)]
struct CommandReport {
    command: &'static str,
    outcome: &'static str,
}

#[derive(Serialize)]
struct Report {
    language: Option<&'static str>,
    text: String,
    cursor: Position,
    selections: Vec<SelectionReport>,
    commands: Vec<CommandReport>,
}

fn parse_commands(names: &[String]) -> Result<Vec<Command>, CliError> {
    names
        .iter()
        .map(|name| Command::from_name(name).ok_or_else(|| CliError::UnknownCommand(name.clone())))
        .collect()
}

fn resolve_language(args: &Args) -> Result<Option<LanguageId>, CliError> {
    match args.language.as_deref() {
        Some(name) => LanguageId::from_name(name)
            .map(Some)
            .ok_or_else(|| CliError::UnknownLanguage(name.to_string())),
        None => Ok(LanguageId::from_path(&args.file)),
    }
}

fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::Io(path.to_path_buf(), e))
}

fn write_text(path: &Path, ctx: &EditorContext) -> Result<(), CliError> {
    let io_err = |e| CliError::Io(path.to_path_buf(), e);
    let file = fs::File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    ctx.buffer().write_to(&mut writer).map_err(io_err)?;
    writer.flush().map_err(io_err)
}

fn run(args: &Args) -> Result<(), CliError> {
    let commands = parse_commands(&args.commands)?;
    let language = resolve_language(args)?;

    let settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => StructureSettings::default(),
    };
    let profiles = Arc::new(ProfileTable::from_settings(&settings));

    let text = read_text(&args.file)?;
    let mut ctx = EditorContext::new(&text, language, profiles)
        .with_move_cursor_with_node(settings.move_cursor_with_node);
    ctx.set_cursor(args.cursor);
    for pos in &args.add_cursor {
        ctx.buffer_mut().add_cursor(*pos);
    }

    let mut reports = Vec::with_capacity(commands.len());
    for command in commands {
        let outcome = execute(&mut ctx, command);
        reports.push(CommandReport {
            command: command.name(),
            outcome: outcome.as_str(),
        });
    }

    if args.write {
        write_text(&args.file, &ctx)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stdout_err = |e| CliError::Io(PathBuf::from("<stdout>"), e);
    if args.json {
        let report = Report {
            language: ctx.language().map(|l| l.language_id()),
            text: ctx.text(),
            cursor: ctx.cursor_position(),
            selections: ctx
                .buffer()
                .cursors()
                .selections()
                .iter()
                .map(|s| SelectionReport {
                    anchor: s.anchor(),
                    cursor: s.cursor(),
                })
                .collect(),
            commands: reports,
        };
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out).map_err(stdout_err)?;
    } else if !args.write {
        ctx.buffer().write_to(&mut out).map_err(stdout_err)?;
    }
    out.flush().map_err(stdout_err)
}

fn main() {
    let logging = logging::init();
    let args = Args::parse();

    let code = match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("zstruct: {}", e);
            e.exit_code()
        }
    };

    drop(logging);
    std::process::exit(code);
}
