use crate::app::error::StripError;
use crate::app::models::{PathEntry, RenameOp, RenamePlan, RenameReport};
use crate::app::prefix;
use std::cmp::Reverse;
use std::fs;
use std::path::Path;

/// Builds the list of renames for `entries`.
///
/// Entries whose name does not start with `prefix`, or whose new name would
/// be empty or unchanged, are left alone. Deeper entries come first so a
/// directory is renamed only after everything inside it.
pub fn plan(entries: &[PathEntry], prefix: &str, replacement: &str) -> RenamePlan {
    let mut ordered: Vec<&PathEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| Reverse(e.depth));

    let mut plan = RenamePlan {
        prefix: prefix.to_string(),
        ..Default::default()
    };

    for entry in ordered {
        let Some(os_name) = entry.path.file_name() else {
            log::warn!("Skipping {}: path has no file name", entry.path.display());
            plan.skipped += 1;
            continue;
        };
        let Some(name) = os_name.to_str() else {
            log::warn!("Skipping {}: name is not valid UTF-8", entry.path.display());
            plan.skipped += 1;
            continue;
        };

        let Some(new_name) = prefix::replace(name, prefix, replacement) else {
            log::info!("Skipping {}: does not start with '{}'", entry.relative_path, prefix);
            plan.skipped += 1;
            continue;
        };

        if new_name.is_empty() {
            log::info!("Skipping {}: nothing left after the prefix", entry.relative_path);
            plan.skipped += 1;
            continue;
        }
        if new_name == name {
            plan.skipped += 1;
            continue;
        }

        plan.ops.push(RenameOp {
            from: entry.path.clone(),
            to: entry.path.with_file_name(&new_name),
            from_display: entry.relative_path.clone(),
            to_display: Path::new(&entry.relative_path)
                .with_file_name(&new_name)
                .to_string_lossy()
                .to_string(),
            is_dir: entry.is_dir,
        });
    }

    plan
}

/// Renames one path, refusing to overwrite anything.
pub fn rename_one(op: &RenameOp) -> Result<(), StripError> {
    if fs::symlink_metadata(&op.to).is_ok() {
        return Err(StripError::RenameCollision {
            from: op.from.clone(),
            to: op.to.clone(),
        });
    }
    fs::rename(&op.from, &op.to).map_err(|source| StripError::RenameIo {
        from: op.from.clone(),
        to: op.to.clone(),
        source,
    })
}

/// Runs every rename in order. A failure is recorded and the rest still run;
/// completed renames are never rolled back.
pub fn execute(plan: RenamePlan) -> RenameReport {
    let mut report = RenameReport::default();

    for op in plan.ops {
        match rename_one(&op) {
            Ok(()) => {
                log::debug!("Renamed {} -> {}", op.from.display(), op.to.display());
                report.renamed.push(op);
            }
            Err(err) => {
                log::debug!("{}", err);
                report.failed.push((op, err));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(root: &Path, rel: &str, is_dir: bool) -> PathEntry {
        PathEntry {
            path: root.join(rel),
            relative_path: rel.to_string(),
            depth: Path::new(rel).components().count(),
            is_dir,
        }
    }

    #[test]
    fn plans_strip_with_explicit_prefix() {
        let root = Path::new("/tmp/x");
        let entries = vec![entry(root, "foo_bar.txt", false)];
        let plan = plan(&entries, "foo_", "");
        assert_eq!(plan.ops.len(), 1);
        assert_eq!(plan.ops[0].to, root.join("bar.txt"));
        assert_eq!(plan.ops[0].to_display, "bar.txt");
    }

    #[test]
    fn plans_replacement() {
        let root = Path::new("/tmp/x");
        let entries = vec![entry(root, "foo_bar.txt", false)];
        let plan = plan(&entries, "foo_", "new_");
        assert_eq!(plan.ops[0].to, root.join("new_bar.txt"));
    }

    #[test]
    fn non_matching_and_empty_results_are_skipped() {
        let root = Path::new("/tmp/x");
        let entries = vec![
            entry(root, "foo_a", false),
            entry(root, "bar_b", false),
            entry(root, "foo_", false),
        ];
        let plan = plan(&entries, "foo_", "");
        assert_eq!(plan.ops.len(), 1);
        assert_eq!(plan.skipped, 2);
        assert_eq!(plan.ops[0].to_display, "a");
    }

    #[test]
    fn replacement_equal_to_prefix_is_a_no_op() {
        let root = Path::new("/tmp/x");
        let entries = vec![entry(root, "foo_a", false)];
        let plan = plan(&entries, "foo_", "foo_");
        assert!(plan.is_empty());
    }

    #[test]
    fn nested_entries_are_renamed_before_their_parent() {
        let root = Path::new("/tmp/x");
        let entries = vec![
            entry(root, "foo_dir", true),
            entry(root, "foo_dir/foo_inner", false),
        ];
        let plan = plan(&entries, "foo_", "");
        assert_eq!(plan.ops[0].from, root.join("foo_dir/foo_inner"));
        assert_eq!(plan.ops[0].to, root.join("foo_dir/inner"));
        assert_eq!(plan.ops[1].to, root.join("dir"));
    }

    #[test]
    fn executes_renames_on_disk() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("foo1.txt"), "1").unwrap();
        fs::create_dir(root.join("foo_dir")).unwrap();
        let entries = vec![entry(root, "foo1.txt", false), entry(root, "foo_dir", true)];

        let report = execute(plan(&entries, "foo", ""));

        assert!(report.is_success());
        assert_eq!(report.renamed.len(), 2);
        assert!(root.join("1.txt").is_file());
        assert!(root.join("_dir").is_dir());
        assert!(!root.join("foo1.txt").exists());
    }

    #[test]
    fn collision_is_reported_and_run_continues() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("foo_a"), "old").unwrap();
        fs::write(root.join("a"), "existing").unwrap();
        fs::write(root.join("foo_b"), "b").unwrap();
        let entries = vec![entry(root, "foo_a", false), entry(root, "foo_b", false)];

        let report = execute(plan(&entries, "foo_", ""));

        assert_eq!(report.failed.len(), 1);
        assert!(matches!(
            report.failed[0].1,
            StripError::RenameCollision { .. }
        ));
        assert_eq!(fs::read_to_string(root.join("a")).unwrap(), "existing");
        assert!(root.join("foo_a").exists());
        assert!(root.join("b").exists());
        assert_eq!(report.renamed.len(), 1);
    }

    #[test]
    fn vanished_source_is_an_io_failure() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let entries = vec![entry(root, "foo_gone", false)];

        let report = execute(plan(&entries, "foo_", ""));

        assert!(matches!(report.failed[0].1, StripError::RenameIo { .. }));
    }

    #[test]
    fn path_without_file_name_is_skipped() {
        let root = Path::new("/tmp/x");
        let entries = vec![
            PathEntry {
                path: root.join(".."),
                relative_path: "..".to_string(),
                depth: 1,
                is_dir: true,
            },
            entry(root, "foo_a", false),
        ];
        let plan = plan(&entries, "foo_", "");
        assert_eq!(plan.skipped, 1);
        assert_eq!(plan.ops.len(), 1);
        assert_eq!(plan.ops[0].to, root.join("a"));
    }
}
