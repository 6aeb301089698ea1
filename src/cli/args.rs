//! CLI argument definitions using clap

use clap::Parser;
use clap_complete::Shell;

/// In-memory book catalog: title-ordered index, author relations, and recommendations
#[derive(Parser, Debug)]
#[command(name = "librarium")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging. Multiple -d options increase verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,
}
