mod cli;
mod input;
mod logger;
mod output;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use xsd_catalog::ParseOptions;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let options = ParseOptions {
        allow_dtd: cli.allow_dtd,
        nodes_limit: cli.nodes_limit.unwrap_or(u32::MAX),
    };
    let report = output::report(input::load(&cli.input, &options), &cli.names);
    for line in &report.stdout {
        println!("{line}");
    }
    for line in &report.stderr {
        eprintln!("{line}");
    }
    report.status.into()
}
