//! Ringtab CLI - finite ring table workbench.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            modulus,
            elements,
            output,
        } => commands::generate::run(modulus, elements, output, cli.verbose),

        Commands::Check { file } => commands::check::run(file, cli.verbose),

        Commands::Analyze {
            file,
            url,
            json,
            mock,
        } => commands::analyze::run(file, url, json, mock, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
