use clap::{Parser, Subcommand};

use crate::commands::{browse, list};

#[derive(Debug, Parser)]
#[command(name = "kyc")]
#[command(
    about = "Know Your Country - browse the countries of the world",
    long_about = None
)]
pub struct Cli {
    /// Show detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 国一覧を TUI で閲覧
    #[command(about = "Browse countries interactively with search and region filter")]
    Browse(browse::Args),

    /// 国一覧をテキストで出力
    #[command(
        about = "Print the list of countries",
        after_help = "OUTPUT FORMATS:\n  (default)  table with name, region, capital and population\n  --json     JSON array in the API's field names\n  --simple   country names only"
    )]
    List(list::Args),
}
