/// CLI argument parsing and command handling.
use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::color;

#[derive(Parser)]
#[command(
    name = "hueflip",
    version,
    about = "Hueflip - a terminal background color switcher"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print random palette colors without entering the UI.
    Pick {
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
    },
    /// List the palette entries in order.
    Palette,
}

/// Execute a CLI command (pick or palette).
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Pick { count } => handle_pick(count),
        Command::Palette => handle_palette(),
    }
    Ok(())
}

fn handle_pick(count: usize) {
    for _ in 0..count {
        println!("{}", color::random_color());
    }
}

fn handle_palette() {
    for (index, name) in color::PALETTE.iter().enumerate() {
        println!("{index}  {name}");
    }
}
