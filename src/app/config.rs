use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Written inside the root directory, overwritten on each run.
pub const OUTPUT_FILE_NAME: &str = "proyecto_aurorasql_resumen.txt";

pub const INCLUDE_DIRS: &[&str] = &["src", ".", ".firebase"];

pub const EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "public",
    ".git",
    "__pycache__",
    ".next",
    "out",
    ".vscode",
    ".idea",
    ".env.local",
    ".env.development.local",
    ".env.test.local",
    ".env.production.local",
    "coverage",
];

/// Important files kept even outside the usual source folders.
pub const INCLUDE_FILES: &[&str] = &[
    ".env",
    "firebase.json",
    ".firebaserc",
    "vite.config.js",
    "package.json",
    "requirements.txt",
    "Dockerfile",
    "env_vars.yaml",
];

pub const EXCLUDE_FILES: &[&str] = &[
    "package-lock.json",
    "firebase-debug.log",
    "next-env.d.ts",
    "next.config.js",
    "next.config.mjs",
    ".DS_Store",
    "*.ico",
    "*.svg",
    "*.png",
    "*.jpg",
    "*.jpeg",
    "*.gif",
    "*.webp",
    "*.bmp",
    "*.tiff",
    "*.ttf",
    "*.woff",
    "*.woff2",
    "*.eot",
    "*.otf",
    "*.map",
    "*.log",
    "*.gz",
    "*.zip",
    "*.tar.gz",
    "*.md",
    "LICENSE",
    "README.md",
    "CHANGELOG.md",
    "CONTRIBUTING.md",
];

// Frontend + backend
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".json", ".env", ".html", ".py", ".yaml", ".yml",
];

/// The root is always the directory holding the running executable.
fn program_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .context(format!("Executable path {:?} has no parent directory", exe))?;
    Ok(dir.to_path_buf())
}

pub fn resolve_config() -> Result<RuntimeConfig> {
    let root = program_dir()?;
    let config = RuntimeConfig::new(root);

    log::debug!("Root directory: {}", config.root.display());
    log::debug!(
        "Include directories declared but not applied to traversal: {:?}",
        config.filters.include_dirs
    );

    Ok(config)
}
