use std::{io::{self, Write}, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{Level, Log, Metadata, Record};

use monotone_triangulate::{Point, Polygon, formats, load_polygon, render};

/// Triangulate an x-monotone polygon and print its diagonals
#[derive(clap::Parser, Debug)]
#[command(name = "monotone-triangulate", version, about)]
struct Cli {
    /// Polygon file: a vertex count, then one `x y` line per vertex in counter-clockwise order
    #[arg(default_value = "input.txt", value_hint = clap::ValueHint::FilePath)]
    input: PathBuf,

    /// Reject polygons which are not simple, counter-clockwise and x-monotone without vertical edges
    #[arg(long)]
    checked: bool,

    /// Print each diagonal as a pair of vertex indices instead of coordinates
    #[arg(long)]
    indices: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) { }
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    };
    log::set_logger(&LOGGER).map_err(|e| anyhow::anyhow!("{}", e))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let polygon = load_polygon(&cli.input)
        .with_context(|| format!("failed to read polygon from {}", cli.input.display()))?;
    log::info!("loaded {} vertices from {}", polygon.len(), cli.input.display());

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.indices {
        let format = formats::IndexedDiagonalFormat::new(Vec::<[usize; 2]>::new());
        let diagonals = if cli.checked { polygon.triangulate_checked(format) } else { polygon.triangulate(format) };
        let diagonals = diagonals.context("triangulation failed")?;
        for [i, j] in diagonals {
            writeln!(out, "{} {}", i, j)?;
        }
        out.flush()?;
    } else {
        let format = formats::PointDiagonalFormat::new(Vec::<[Point; 2]>::new());
        let diagonals = if cli.checked { polygon.triangulate_checked(format) } else { polygon.triangulate(format) };
        let diagonals = diagonals.context("triangulation failed")?;
        render::write_diagonals(&mut out, diagonals)?;
    }

    Ok(())
}
