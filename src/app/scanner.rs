use crate::app::models::{FileEntry, FilterConfig};
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub struct Scanner {
    root: PathBuf,
    exclude_dirs: HashSet<String>,
    include_files: HashSet<String>,
    exclude_names: HashSet<String>,
    exclude_patterns: GlobSet,
    allowed_extensions: HashSet<String>,
}

/// Immediate children of one directory, split by kind.
struct Listing {
    subdirs: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

impl Scanner {
    pub fn new(root: PathBuf, filters: &FilterConfig) -> Result<Self> {
        // Exclude entries are either exact names or globs like `*.png`.
        let (patterns, names): (Vec<String>, Vec<String>) = filters
            .exclude_files
            .iter()
            .cloned()
            .partition(|entry| is_glob(entry));

        Ok(Self {
            root,
            exclude_dirs: filters.exclude_dirs.clone(),
            include_files: filters.include_files.clone(),
            exclude_names: names.into_iter().collect(),
            exclude_patterns: build_globset(&patterns)?,
            allowed_extensions: filters.allowed_extensions.clone(),
        })
    }

    /// Walks the tree depth-first, top-down. Each directory is followed by its relevant
    /// files (sorted by name) and then its subdirectories in the order the OS lists them.
    pub fn scan(&self) -> Vec<FileEntry> {
        let mut entries = Vec::new();
        self.visit(&self.root, 0, &mut entries);
        entries
    }

    fn visit(&self, dir: &Path, depth: usize, entries: &mut Vec<FileEntry>) {
        if let Some(entry) = self.make_entry(dir, depth, true) {
            entries.push(entry);
        }

        let listing = self.list_children(dir);
        for file in &listing.files {
            if self.is_relevant_file(file) {
                if let Some(entry) = self.make_entry(file, depth + 1, false) {
                    entries.push(entry);
                }
            } else {
                log::trace!("Skipping {}", file.display());
            }
        }
        for subdir in &listing.subdirs {
            self.visit(subdir, depth + 1, entries);
        }
    }

    /// Reads one directory level. Excluded directories are pruned here, and links to
    /// directories are dropped since they are never descended.
    fn list_children(&self, dir: &Path) -> Listing {
        let mut listing = Listing {
            subdirs: Vec::new(),
            files: Vec::new(),
        };

        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .follow_links(false)
            .max_depth(Some(1))
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) if entry.depth() == 0 => continue,
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Error walking entry: {}", err);
                    continue;
                }
            };
            let Some(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                if self
                    .exclude_dirs
                    .contains(&*entry.file_name().to_string_lossy())
                {
                    log::debug!("Pruning excluded directory {}", entry.path().display());
                } else {
                    listing.subdirs.push(entry.into_path());
                }
            } else if file_type.is_symlink() && entry.path().is_dir() {
                log::trace!("Skipping linked directory {}", entry.path().display());
            } else {
                listing.files.push(entry.into_path());
            }
        }

        listing.files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        listing
    }

    /// Exclude beats include, include beats extension, anything else is dropped.
    pub fn is_relevant_file(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name() else {
            return false;
        };
        let name = file_name.to_string_lossy();

        if self.exclude_names.contains(&*name)
            || self.exclude_patterns.is_match(Path::new(file_name))
        {
            return false;
        }
        if self.include_files.contains(&*name) {
            return true;
        }

        match extension_of(&name) {
            Some(ext) => self.allowed_extensions.contains(ext),
            None => false,
        }
    }

    fn make_entry(&self, path: &Path, depth: usize, is_dir: bool) -> Option<FileEntry> {
        let relative = diff_paths(path, &self.root)?;

        Some(FileEntry {
            path: path.to_path_buf(),
            relative_path: relative.to_string_lossy().to_string(),
            depth,
            is_dir,
        })
    }
}

/// Final dot-suffix including the dot. Leading dots belong to the name, so `.env` and
/// `..js` have none.
fn extension_of(name: &str) -> Option<&str> {
    let start = name.len() - name.trim_start_matches('.').len();
    let dot = name[start..].rfind('.')? + start;
    Some(&name[dot..])
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).context(format!("Invalid glob pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}
