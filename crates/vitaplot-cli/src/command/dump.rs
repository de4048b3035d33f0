use std::io::{self, Write as _};

use anyhow::Context as _;

use crate::command::FigureArg;

pub(crate) fn run(arg: &FigureArg) -> anyhow::Result<()> {
    let figure = arg.build_figure()?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &figure).context("Failed to write JSON to stdout")?;
    writeln!(stdout).context("Failed to write newline after JSON to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}
