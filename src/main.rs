#![allow(dead_code)]

mod cli;
mod application;
mod domain;
mod data;
mod nlp;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the tables / JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sos_nlp_report=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
