mod app;
mod cli;
mod color;
mod event;
mod tui;
mod types;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    if let Some(command) = cli_opts.command {
        return cli::run(command);
    }

    let mut app = app::App::new();
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
