use std::io::{self, Write};

use anyhow::Context as _;
use vitaplot_experiment::figure::Figure;

use crate::command::FigureArg;

pub(crate) fn run(arg: &FigureArg) -> anyhow::Result<()> {
    let figure = arg.build_figure()?;

    let mut stdout = io::stdout().lock();
    write_summary(&mut stdout, &figure)
        .and_then(|()| stdout.flush())
        .context("Failed to write summary to stdout")?;
    Ok(())
}

fn write_summary<W>(writer: &mut W, figure: &Figure) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        writer,
        "{:<12} {:<20} {:>5} {:>12} {:>12} {:>12}",
        "experiment", "group", "n", "sample mean", "fitted mean", "fitted std"
    )?;
    for (panel, series) in figure.series() {
        writeln!(
            writer,
            "{:<12} {:<20} {:>5} {:>12.4} {:>12.4} {:>12.4}",
            panel.kind.to_string(),
            series.label(),
            series.sample.len(),
            series.stats.mean,
            series.fit.mean,
            series.fit.std_dev,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use vitaplot_experiment::{sample::DEFAULT_SEED, style::HistogramStyle};

    use super::*;

    #[test]
    fn test_one_line_per_group() {
        let figure = Figure::generate(DEFAULT_SEED, HistogramStyle::DEFAULT_BINS).unwrap();
        let mut out = Vec::new();
        write_summary(&mut out, &figure).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("experiment"));
        assert!(lines[1].starts_with("viability    Low Temp "));
        assert!(lines[5].starts_with("resilience   Nutrient-rich Diet "));
        assert!(lines[1..].iter().all(|line| line.contains(" 100 ")));
    }

    #[test]
    fn test_summary_is_reproducible() {
        let render = || {
            let figure = Figure::generate(3, HistogramStyle::DEFAULT_BINS).unwrap();
            let mut out = Vec::new();
            write_summary(&mut out, &figure).unwrap();
            out
        };
        assert_eq!(render(), render());
    }
}
