use std::collections::HashSet;
use std::path::PathBuf;

use crate::app::config::{
    ALLOWED_EXTENSIONS, EXCLUDE_DIRS, EXCLUDE_FILES, INCLUDE_DIRS, INCLUDE_FILES,
    OUTPUT_FILE_NAME,
};

/// The directory and file filters applied during a run.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Declared for reference only. Traversal is gated by `exclude_dirs` alone.
    pub include_dirs: HashSet<String>,
    pub exclude_dirs: HashSet<String>,
    /// File names that are relevant regardless of extension.
    pub include_files: HashSet<String>,
    /// Exact file names or glob patterns (e.g. `*.png`). Always wins.
    pub exclude_files: HashSet<String>,
    /// Extensions with their leading dot, e.g. `.ts`.
    pub allowed_extensions: HashSet<String>,
}

fn to_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            include_dirs: to_set(INCLUDE_DIRS),
            exclude_dirs: to_set(EXCLUDE_DIRS),
            include_files: to_set(INCLUDE_FILES),
            exclude_files: to_set(EXCLUDE_FILES),
            allowed_extensions: to_set(ALLOWED_EXTENSIONS),
        }
    }
}

/// Everything a single run needs: where to scan, where to write, what to keep.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub output_path: PathBuf,
    pub filters: FilterConfig,
}

impl RuntimeConfig {
    pub fn new(root: PathBuf) -> Self {
        Self {
            output_path: root.join(OUTPUT_FILE_NAME),
            filters: FilterConfig::default(),
            root,
        }
    }
}

/// A visited directory or a relevant file, in traversal order.
#[derive(Debug)]
pub struct FileEntry {
    pub path: PathBuf,
    pub relative_path: String,
    pub depth: usize,
    pub is_dir: bool,
}

/// Outcome of a best-effort text read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Normalized and trimmed file contents.
    Text(String),
    /// Description of why the file could not be read.
    Unreadable(String),
}
