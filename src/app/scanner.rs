use crate::app::error::StripError;
use crate::app::models::{PathEntry, RuntimeConfig, Source};
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Scanner {
    source: Source,
    include_directories: bool,
    recursive: bool,
    exclude_set: GlobSet,
}

impl Scanner {
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        Ok(Self {
            source: config.source.clone(),
            include_directories: config.include_directories,
            recursive: config.recursive,
            exclude_set: build_globset(&config.exclude)?,
        })
    }

    /// Lists rename candidates. Fails before yielding anything if the
    /// source cannot be read.
    pub fn scan(&self) -> Result<Vec<PathEntry>, StripError> {
        match &self.source {
            Source::Directory(root) => self.scan_directory(root),
            Source::Files(files) => self.scan_files(files),
        }
    }

    fn scan_directory(&self, root: &Path) -> Result<Vec<PathEntry>, StripError> {
        let meta = fs::metadata(root).map_err(|source| StripError::SourceUnavailable {
            path: root.to_path_buf(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(StripError::SourceUnavailable {
                path: root.to_path_buf(),
                source: std::io::Error::other("not a directory"),
            });
        }
        // read_dir surfaces permission errors up front; the walker would only log them
        fs::read_dir(root).map_err(|source| StripError::SourceUnavailable {
            path: root.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();

        // Every entry is a candidate, so all ignore filtering is off
        let exclude_set = self.exclude_set.clone();
        let filter_root = root.to_path_buf();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .max_depth(if self.recursive { None } else { Some(1) })
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                // Prune excluded directories so their contents are skipped too
                match diff_paths(entry.path(), &filter_root) {
                    Some(rel) if !rel.as_os_str().is_empty() => !exclude_set.is_match(&rel),
                    _ => true,
                }
            })
            .build();

        for result in walker {
            match result {
                Ok(entry) => {
                    if let Some(processed) = self.process_entry(root, entry.path()) {
                        entries.push(processed);
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn process_entry(&self, root: &Path, path: &Path) -> Option<PathEntry> {
        // Skip the root folder itself from the list
        if path == root {
            return None;
        }

        let relative = diff_paths(path, root)?;
        if self.exclude_set.is_match(&relative) {
            return None;
        }

        let is_dir = is_real_dir(path);
        if is_dir && !self.include_directories {
            return None;
        }

        Some(PathEntry {
            path: path.to_path_buf(),
            relative_path: relative.to_string_lossy().to_string(),
            depth: relative.components().count(),
            is_dir,
        })
    }

    fn scan_files(&self, files: &[PathBuf]) -> Result<Vec<PathEntry>, StripError> {
        let mut entries = Vec::with_capacity(files.len());

        for path in files {
            let meta =
                fs::symlink_metadata(path).map_err(|source| StripError::SourceUnavailable {
                    path: path.clone(),
                    source,
                })?;
            let is_dir = meta.is_dir();
            if is_dir && !self.include_directories {
                log::info!("Skipping directory {} (use -d to include)", path.display());
                continue;
            }
            if self.exclude_set.is_match(path) {
                continue;
            }
            entries.push(PathEntry {
                path: path.clone(),
                relative_path: path.to_string_lossy().to_string(),
                depth: normalized_depth(path),
                is_dir,
            });
        }

        Ok(entries)
    }
}

/// Depth of `path` once `.` and `..` are resolved, so `./dir` and
/// `dir/child` compare the way they sit on disk. The last component is kept
/// as given so symlinks are not followed.
fn normalized_depth(path: &Path) -> usize {
    let resolved = match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            fs::canonicalize(parent).map(|p| p.join(name))
        }
        _ => fs::canonicalize(path),
    };
    resolved
        .unwrap_or_else(|_| path.to_path_buf())
        .components()
        .count()
}

/// Symlinks are treated as files, even when they point at a directory.
fn is_real_dir(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).context(format!("Invalid glob pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}
