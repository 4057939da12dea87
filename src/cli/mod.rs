// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Four commands are supported:
//   1. `report`      — POS and entity frequency tables
//   2. `tokens`      — per-message token lists as JSON lines
//   3. `annotate`    — token and entity tables for one text
//   4. `init-config` — write the effective config to a file
//
// Results go to stdout; logs go to stderr.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{AnnotateArgs, Commands, InitConfigArgs, OutputFormat, ReportArgs, TokensArgs};

use crate::application::config::AnalysisConfig;
use crate::infra::config_store::ConfigStore;
use crate::infra::table;

#[derive(Parser, Debug)]
#[command(
    name = "sos-nlp-report",
    version = "0.1.0",
    about = "Count part-of-speech tags and named entities in a column of SOS messages."
)]
pub struct Cli {
    /// JSON config file; CLI flags override its values
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route the subcommand to its use case. Never computes.
    pub fn run(self) -> Result<()> {
        let config = ConfigStore::load_or_default(self.config.as_deref())?;
        match self.command {
            Commands::Report(args)   => run_report(config, args),
            Commands::Tokens(args)   => run_tokens(config, args),
            Commands::Annotate(args) => run_annotate(config, args),
            Commands::InitConfig(args) => run_init_config(config, args),
        }
    }
}

fn run_report(config: AnalysisConfig, args: ReportArgs) -> Result<()> {
    use crate::application::report_use_case::ReportUseCase;

    let config = config.with_overrides(args.input.into());
    let report = ReportUseCase::new(config).execute()?;

    match args.format {
        OutputFormat::Table => {
            println!("{}", table::frequency_table("POS", &report.pos));
            println!("{}", table::frequency_table("NER", &report.entities));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn run_tokens(config: AnalysisConfig, args: TokensArgs) -> Result<()> {
    use crate::application::tokens_use_case::{TokenView, TokensUseCase};

    let view = if args.cleaned { TokenView::Cleaned } else { TokenView::Raw };
    let config = config.with_overrides(args.input.into());

    for message in TokensUseCase::new(config, view).execute()? {
        println!("{}", serde_json::to_string(&message)?);
    }
    Ok(())
}

fn run_annotate(config: AnalysisConfig, args: AnnotateArgs) -> Result<()> {
    use crate::application::annotate_use_case::AnnotateUseCase;

    let doc = AnnotateUseCase::new(&config)?.annotate(&args.text);
    println!("{}", table::token_table(&doc));
    if doc.ents.is_empty() {
        println!("No entities found.");
    } else {
        println!("{}", table::entity_table(&doc));
    }
    Ok(())
}

fn run_init_config(config: AnalysisConfig, args: InitConfigArgs) -> Result<()> {
    ConfigStore::save(&args.out, &config)?;
    println!("Wrote config to {}", args.out);
    Ok(())
}
