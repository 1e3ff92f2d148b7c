pub mod completions;
pub mod generate;
pub mod init;
pub mod inspect;

use clap::{Parser, Subcommand};

/// segdisp - Segmented display glyph generator
#[derive(Parser, Debug)]
#[command(name = "segdisp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print per-segment and per-image details
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate every on/off combination of a template's segments
    Generate(generate::GenerateArgs),

    /// List the segments detected in a template
    Inspect(inspect::InspectArgs),

    /// Initialize a segdisp project (generates segdisp.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
