use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use log::{debug, warn};
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of collecting files to annotate.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files in sorted order.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Where to look for files and what to leave out.
pub struct ScanOptions<'a> {
    pub root: &'a Path,
    /// Directories (or globs of directories) under `root`. Empty means `root`.
    pub includes: &'a [String],
    /// Globs matched against full paths, or literal paths under `root`.
    pub ignores: &'a [String],
    /// Extensions of files picked up while walking directories.
    pub extensions: &'a [String],
}

struct IgnoreSet {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(root: &Path, ignores: &[String]) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();
        for p in ignores {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => patterns.push(pattern),
                    Err(e) => warn!("Invalid ignore pattern '{}': {}", p, e),
                }
            } else {
                literal_paths.push(root.join(p));
            }
        }
        Self {
            literal_paths,
            patterns,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.literal_paths.iter().any(|p| path.starts_with(p)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Collect files to annotate.
///
/// Explicit `paths` take precedence over `includes`: files among them are
/// always kept, directories are walked. Walked files must carry one of the
/// configured extensions and must not be ignored.
pub fn scan_files(options: &ScanOptions, paths: &[PathBuf]) -> ScanResult {
    let ignore_set = IgnoreSet::new(options.root, options.ignores);
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();
    let mut skipped_count = 0;

    let dirs_to_scan: Vec<PathBuf> = if !paths.is_empty() {
        let mut dirs = Vec::new();
        for path in paths {
            let path = if path.is_absolute() {
                path.clone()
            } else {
                options.root.join(path)
            };
            if path.is_dir() {
                dirs.push(path);
            } else {
                files.insert(path);
            }
        }
        dirs
    } else if options.includes.is_empty() {
        vec![options.root.to_path_buf()]
    } else {
        include_dirs(options.root, options.includes)
    };

    for dir in dirs_to_scan {
        // Ignored directories are pruned rather than walked.
        let walker = WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !ignore_set.is_ignored(e.path()));
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    warn!("Cannot access path: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_file() && has_extension(path, options.extensions) {
                files.insert(path.to_path_buf());
            }
        }
    }

    debug!("Collected {} files to annotate", files.len());
    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

fn include_dirs(root: &Path, includes: &[String]) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    for inc in includes {
        if is_glob_pattern(inc) {
            let full_pattern = root.join(inc);
            match glob(&full_pattern.to_string_lossy()) {
                Ok(entries) => dirs.extend(entries.flatten().filter(|entry| entry.is_dir())),
                Err(e) => warn!("Invalid glob pattern '{}': {}", inc, e),
            }
        } else {
            let path = root.join(inc);
            if path.exists() {
                dirs.push(path);
            } else {
                warn!("Include path does not exist: {}", path.display());
            }
        }
    }
    dirs
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
