use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Strip or replace a common prefix from file and directory names"
)]
pub struct Cli {
    /// Prefix to strip (default: longest common prefix of all names)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Directory whose contents are renamed (default: current directory)
    #[arg(short, long)]
    pub source_directory: Option<PathBuf>,

    /// Include directories as rename candidates
    #[arg(short = 'd', long)]
    pub include_directories: bool,

    /// Rename without asking for confirmation
    #[arg(short = 'y', long = "yes")]
    pub assume_yes: bool,

    /// String inserted where the prefix was
    #[arg(short, long)]
    pub replacement: Option<String>,

    /// Descend into subdirectories of the source directory
    #[arg(short = 'R', long)]
    pub recursive: bool,

    /// Glob patterns for paths that are never renamed (relative to the source)
    #[arg(short, long, num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Show the proposed renames and exit
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Explicit paths to rename instead of listing a directory
    #[arg(last = true, conflicts_with_all = ["source_directory", "recursive"])]
    pub files: Vec<PathBuf>,
}
