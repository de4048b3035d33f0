use clap::{Parser, Subcommand};
use vitaplot_experiment::{figure::Figure, sample::DEFAULT_SEED, style::HistogramStyle};
use vitaplot_stats::histogram::DensityHistogram;

mod dump;
mod show;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    figure: FigureArg,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Mode {
    /// Display the fitted histograms in the terminal (default)
    Show,
    /// Print the fitted parameters of every group
    Summary,
    /// Print the whole figure data as JSON
    Dump,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FigureArg {
    /// Seed of the random sample generator
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Number of histogram bins per group
    #[arg(long, global = true, default_value_t = HistogramStyle::DEFAULT_BINS, value_parser = parse_bin_count)]
    bins: usize,
}

impl FigureArg {
    pub(crate) fn build_figure(&self) -> anyhow::Result<Figure> {
        let Self { seed, bins } = *self;
        eprintln!("Generating samples (seed {seed}, {bins} bins)...");
        let figure = Figure::generate(seed, bins)?;
        eprintln!(
            "Fitted {} groups across {} panels",
            figure.series().count(),
            figure.panels.len()
        );
        Ok(figure)
    }
}

fn parse_bin_count(s: &str) -> Result<usize, String> {
    let bins = s.parse::<usize>().map_err(|e| e.to_string())?;
    if bins == 0 {
        return Err("bin count must be at least 1".to_owned());
    }
    if bins > DensityHistogram::MAX_BINS {
        return Err(format!(
            "bin count must be at most {}",
            DensityHistogram::MAX_BINS
        ));
    }
    Ok(bins)
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Show) {
        Mode::Show => show::run(&args.figure)?,
        Mode::Summary => summary::run(&args.figure)?,
        Mode::Dump => dump::run(&args.figure)?,
    }
    Ok(())
}
