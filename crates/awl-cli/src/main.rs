use clap::Parser;
use colored::Colorize;

mod cli;
mod commands;
mod config;
mod input;

fn main() {
    let cli = cli::Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Err(err) = commands::run_command(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
