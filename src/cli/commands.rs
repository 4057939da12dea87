// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the four subcommands: `report`, `tokens`,
// `annotate` and `init-config`, and all their flags.
//
// Input flags are all optional: anything left unset falls back
// to the config file, then to the built-in defaults.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::config::InputOverrides;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print POS and entity frequency tables for a message column
    Report(ReportArgs),

    /// Print each message's tokens as one JSON line
    Tokens(TokensArgs),

    /// Annotate a single text and print its tokens and entities
    Annotate(AnnotateArgs),

    /// Write the effective config as a JSON file to edit
    InitConfig(InitConfigArgs),
}

/// Where the messages come from
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Spreadsheet file (xlsx, xls, ods)
    #[arg(long)]
    pub path: Option<String>,

    /// Header text of the message column
    #[arg(long)]
    pub column: Option<String>,

    /// Rows above the header row
    #[arg(long)]
    pub skip_rows: Option<usize>,

    /// Rows to drop from the bottom of the sheet
    #[arg(long)]
    pub skip_footer: Option<usize>,

    /// Worksheet name; the first sheet by default
    #[arg(long)]
    pub sheet: Option<String>,
}

/// The application layer never sees clap types
impl From<InputArgs> for InputOverrides {
    fn from(a: InputArgs) -> Self {
        InputOverrides {
            path:        a.path,
            column:      a.column,
            sheet:       a.sheet,
            skip_rows:   a.skip_rows,
            skip_footer: a.skip_footer,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct TokensArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the cleaned tokens instead of the raw ones
    #[arg(long)]
    pub cleaned: bool,
}

#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// Text to annotate
    #[arg(long)]
    pub text: String,
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the config
    #[arg(long, default_value = "sos-nlp-report.json")]
    pub out: String,
}
