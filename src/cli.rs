use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gfame")]
#[command(about = "Per-author code ownership statistics for git repositories")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Git directory to analyze (default: current directory)")]
    pub gitdir: Option<PathBuf>,

    #[arg(long, default_value = "loc", help = "Sort authors by: loc, commits, or files")]
    pub sort: String,

    #[arg(
        long,
        default_value = "",
        help = "Comma-separated list of files to exclude (escape a literal comma as \\,)"
    )]
    pub exclude_files: String,

    #[arg(short, long, help = "Treat excluded files as regular expressions")]
    pub regex: bool,

    #[arg(short = 'w', long, help = "Ignore whitespace when assigning blame")]
    pub ignore_whitespace: bool,

    #[arg(short, long, help = "Suppress the progress bar")]
    pub silent_progress: bool,

    #[arg(long, help = "Break line counts down by file extension")]
    pub bytype: bool,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON")]
    pub ndjson: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::fame::exec(self)
    }
}
