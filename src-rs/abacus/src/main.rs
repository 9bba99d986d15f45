//! Command-line front end for Abacus

use std::{io, process::ExitCode};

use anstream::eprintln;
use clap::Parser;

use crate::{
    command::{CliCommand, Commands},
    config::Config,
    printer::Printer,
};

mod command;
mod config;
mod format;
mod input;
mod logging;
mod print_error;
mod printer;
mod repl;
mod response;
mod run;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();

    logging::init();

    let config = Config::from(&cli.options);
    tracing::debug!(?config, "loaded configuration");
    if !config.use_colors {
        anstream::ColorChoice::Never.write_global();
    }

    let mut stdout = anstream::stdout();
    let mut stderr = anstream::stderr();
    let mut printer = Printer::new(&config, &mut stdout, &mut stderr);

    let outcome = match cli.command {
        Commands::Eval { expression } => {
            let text = expression.join(" ");
            run::expression(&mut printer, &text)
        }
        Commands::Sci { operation, value } => run::scientific(&mut printer, &operation, value),
        Commands::Ops => printer.print_operations().map(|()| true),
        Commands::Repl => repl::run(&mut printer, io::stdin().lock()).map(|()| true),
    };

    let succeeded = outcome.unwrap_or_else(|error| {
        eprintln!("error: {error}");
        false
    });

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
