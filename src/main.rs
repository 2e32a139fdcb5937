mod cli;
mod config;
mod context;
mod convert;
mod design_cmd;
mod hydraulics_cmd;
mod idf_cmd;
mod logging;
mod maxima_cmd;
mod record;
mod totals_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Maxima(args) => maxima_cmd::run(args),
        Command::Idf(args) => idf_cmd::run(args),
        Command::Design(args) => design_cmd::run(args),
        Command::Totals(args) => totals_cmd::run(args),
        Command::Channel(args) => hydraulics_cmd::run_channel(args),
        Command::Conduit(args) => hydraulics_cmd::run_conduit(args),
    }
}
