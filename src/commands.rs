use crate::cli::Command;
use crate::country::RegionOption;
use crate::error::Result;
use clap::Args;
use std::path::PathBuf;

pub mod browse;
pub mod list;

/// 取得元の指定（browse / list 共通）
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Read countries from a saved API response instead of the network
    #[arg(long, value_name = "FILE")]
    pub from_file: Option<PathBuf>,

    /// Override the REST Countries API base URL
    #[arg(long, value_name = "URL", conflicts_with = "from_file")]
    pub base_url: Option<String>,
}

/// 初期フィルタ（browse / list 共通）
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Only show countries in this region
    #[arg(long, value_enum)]
    pub region: Option<RegionOption>,

    /// Only show countries whose name contains this text (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn query(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }

    pub fn region(&self) -> Option<crate::country::Region> {
        self.region.and_then(|r| r.region())
    }
}

pub async fn dispatch(cli: crate::cli::Cli) -> Result<()> {
    match cli.command {
        Command::Browse(args) => browse::run(args).await,
        Command::List(args) => list::run(args).await,
    }
}
