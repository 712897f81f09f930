//! termscribe CLI entry point

use anyhow::Result;
use clap::Parser;

use termscribe::cli::{Cli, Commands, ConfigCommands};

mod commands;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { program, output } => commands::run::handle(&program, &output),
        Commands::Bounce {
            degrees,
            steps,
            canvas,
            output,
        } => commands::bounce::handle(degrees, steps, &canvas, &output),
        Commands::Plot {
            amplitude,
            period,
            offset,
            canvas,
            output,
        } => commands::plot::handle(amplitude, period, offset, &canvas, &output),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
