#![doc = include_str!("../README.md")]

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, Error};
use clap::Parser;

mod cli;
use cli::Cli;

fn main() -> Result<ExitCode, Error> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .init();

    let settings = cli.settings();
    log::debug!("index unit: {}, format: {:?}", settings.index, settings.format);
    let outcome = cli.subcmd.execute(&settings)?;
    write_output(&mut io::stdout().lock(), &outcome.output)?;

    if outcome.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Writes the command output, treating a closed pipe as the reader being done.
fn write_output(out: &mut impl Write, output: &str) -> Result<(), Error> {
    match out.write_all(output.as_bytes()).and_then(|()| out.flush()) {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("stdout closed early");
            Ok(())
        },
        result => result.context("failed to write output"),
    }
}
