use std::path::PathBuf;

use crate::app::error::StripError;

/// Where rename candidates come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// List the contents of a directory.
    Directory(PathBuf),
    /// Use exactly these paths.
    Files(Vec<PathBuf>),
}

/// Represents the final configuration after merging presets and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub prefix: Option<String>,
    pub replacement: String,
    pub source: Source,
    pub include_directories: bool,
    pub recursive: bool,
    pub exclude: Vec<String>,
    pub assume_yes: bool,
    pub dry_run: bool,
}

/// Represents a single rename candidate discovered during the scan.
#[derive(Debug, Clone)]
pub struct PathEntry {
    pub path: PathBuf,
    pub relative_path: String,
    pub depth: usize,
    pub is_dir: bool,
}

impl PathEntry {
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// A single proposed rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOp {
    pub from: PathBuf,
    pub to: PathBuf,
    /// Display forms, relative to the source.
    pub from_display: String,
    pub to_display: String,
    pub is_dir: bool,
}

#[derive(Debug, Default)]
pub struct RenamePlan {
    pub prefix: String,
    pub ops: Vec<RenameOp>,
    pub skipped: usize,
}

impl RenamePlan {
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct RenameReport {
    pub renamed: Vec<RenameOp>,
    pub failed: Vec<(RenameOp, StripError)>,
}

impl RenameReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// How a run ended, when it ended without a fatal error.
#[derive(Debug)]
pub enum Outcome {
    NothingToDo,
    DryRun(RenamePlan),
    Aborted,
    Completed(RenameReport),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        match self {
            Outcome::Completed(report) => report.is_success(),
            _ => true,
        }
    }
}
