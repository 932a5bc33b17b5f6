//! esimkit command-line tool
//!
//! Usage:
//!   esimkit parse 'LPA:1$rsp.truphone.com$JQ-209U6H-6I82J5'
//!   esimkit payload --smdp rsp.truphone.com --matching-id JQ-209U6H-6I82J5
//!   esimkit link --from-code 'LPA:1$rsp.truphone.com$JQ-209U6H-6I82J5'
//!   esimkit validate eid 89049032000001000000012345678901
//!   esimkit catalog profiles.json

use anyhow::Result;
use clap::Parser;
use esimkit_cli::{run, Cli};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let output = run(&cli)?;
    println!("{}", output.text);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
