mod collect;
mod series;
mod stats;

use crate::stats::SeriesSum;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

/// Average the delta series of two-column data files row by row.
#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Data files, or directories whose immediate entries are data files.
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = match CLI::try_parse() {
        Ok(args) => args,
        Err(error) => {
            if let Err(print_error) = error.print() {
                log::error!("failed to print usage: {print_error}");
            }
            std::process::exit(if error.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(error) = run_cli(args) {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli(args: CLI) -> Result<()> {
    log::debug!("{args:#?}");

    let file_vec = collect::collect_files(&args.paths);
    if file_vec.is_empty() {
        bail!("no files provided");
    }
    log::info!("collected {} files", file_vec.len());

    let mut series_sum = SeriesSum::new();
    for file in &file_vec {
        let series = series::load_delta_series(file)
            .with_context(|| format!("failed to load {file:?}"))?;
        log::info!("loaded {file:?} ({} rows)", series.len());

        if series_sum.n_series() > 0 && series.len() != series_sum.len() {
            log::warn!(
                "incorrect file length for {file:?}: expected {}, found {}",
                series_sum.len(),
                series.len()
            );
        }
        series_sum.add(&series);
    }

    if series_sum.is_empty() {
        log::warn!("first file {:?} has no rows", file_vec[0]);
    }
    let avg_vec = series_sum.mean();

    let stdout = io::stdout();
    write_series(stdout.lock(), &avg_vec).context("failed to write averaged series")?;
    log::info!("wrote {} rows", avg_vec.len());

    Ok(())
}

fn write_series<W: Write>(writer: W, vals: &[f64]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for val in vals {
        writeln!(writer, "{val}")?;
    }
    writer.flush().context("failed to flush writer stream")?;
    Ok(())
}
