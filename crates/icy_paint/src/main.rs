#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

mod commands;
mod console;
mod options;

use options::Options;

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use icy_bitmap::{Color, EditSession};

#[derive(Parser, Debug)]
#[command(version, about = "Console editor for 24 bit BMP images", long_about = None)]
struct Args {
    /// Image to edit at startup
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    #[arg(help = "Read commands from a file instead of stdin", long, value_name = "FILE")]
    script: Option<PathBuf>,

    #[arg(help = "Initial pen width", long, value_name = "N", allow_negative_numbers = true)]
    line_width: Option<i32>,

    #[arg(help = "Initial pen color", long, value_name = "R,G,B", value_parser = parse_color)]
    color: Option<Color>,

    #[arg(help = "Store the pen settings as new defaults", long, default_value_t = false)]
    save_options: bool,

    #[arg(help = "Don't print the greeting and prompt", long, short, default_value_t = false)]
    quiet: bool,
}

/// Parses `r,g,b`, channels keep their low byte like `set draw_color`.
fn parse_color(arg: &str) -> Result<Color, String> {
    let channels = arg
        .split(',')
        .map(|c| c.trim().parse::<i32>().map(|v| v as u8).map_err(|err| format!("'{c}': {err}")))
        .collect::<Result<Vec<u8>, String>>()?;
    match channels[..] {
        [r, g, b] => Ok(Color::new(r, g, b)),
        _ => Err(format!("expected R,G,B got '{arg}'")),
    }
}

fn start_logger(log_dir: &Path) -> Option<LoggerHandle> {
    let logger = Logger::try_with_env_or_str("info")
        .map_err(|err| eprintln!("Invalid log specification: {err}"))
        .ok()?;
    logger
        .log_to_file(FileSpec::default().directory(log_dir).basename("icy_paint").suffix("log").suppress_timestamp())
        .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
        .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
        .start()
        .map_err(|err| eprintln!("Failed to start logger: {err}"))
        .ok()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // the handle has to outlive the session or the file writer stops
    let _logger = match Options::get_log_dir() {
        Some(log_dir) => start_logger(&log_dir),
        None => {
            eprintln!("Failed to create log file");
            None
        }
    };

    log::info!("Starting icy_paint {}", env!("CARGO_PKG_VERSION"));

    let mut options = Options::load_options();
    if let Some(width) = args.line_width {
        options.line_width = width;
    }
    if let Some(color) = args.color {
        options.draw_color = color;
    }
    if args.save_options {
        options.store_options();
    }

    let mut session = EditSession::with_pen(options.draw_color, options.line_width);
    if let Some(path) = &args.path {
        session.edit(path).with_context(|| format!("Can't open {}", path.display()))?;
    }

    let mut stdout = io::stdout().lock();
    if let Some(script) = &args.script {
        let file = File::open(script).with_context(|| format!("Can't read script {}", script.display()))?;
        console::run(&mut session, BufReader::new(file), &mut stdout, false)?;
    } else {
        console::run(&mut session, io::stdin().lock(), &mut stdout, !args.quiet)?;
    }

    log::info!("Shutting down.");
    Ok(())
}
