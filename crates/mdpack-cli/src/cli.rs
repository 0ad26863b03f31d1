use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mdpack",
    about = "Bundle a source tree into a single markdown document",
    version,
)]
pub struct Cli {
    /// Directory to walk
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output file; relative paths are resolved against the root
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
