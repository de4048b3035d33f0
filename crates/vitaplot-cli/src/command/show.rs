use std::io::{self, IsTerminal as _};

use anyhow::{Context as _, bail};

use crate::{command::FigureArg, tui::Runtime, view::FigureScreen};

pub(crate) fn run(arg: &FigureArg) -> anyhow::Result<()> {
    if !io::stdout().is_terminal() {
        bail!("standard output is not a terminal; use `summary` or `dump` instead");
    }

    let figure = arg.build_figure()?;
    let mut screen = FigureScreen::new(figure);
    Runtime::new()
        .run(&mut screen)
        .context("Failed to run the terminal display")?;
    Ok(())
}
