use crate::app::models::{FileContent, FileEntry};
use std::fs;
use std::path::Path;

const FENCE: &str = "```";

pub struct OutputGenerator;

impl OutputGenerator {
    /// Builds the ordered output buffer: one header per directory, and a header plus a
    /// content block (or error marker) per relevant file.
    pub fn generate_fragments(entries: &[FileEntry]) -> Vec<String> {
        let mut fragments = Vec::new();

        for entry in entries {
            if entry.is_dir {
                if entry.depth == 0 {
                    fragments.push("📁 ./".to_string());
                } else {
                    fragments.push(format!("\n📁 {}/", entry.relative_path));
                }
                continue;
            }

            fragments.push(format!("\n📄 {}", entry.relative_path));
            match read_contents(&entry.path) {
                FileContent::Text(content) => {
                    fragments.push(FENCE.to_string());
                    fragments.push(content);
                    fragments.push(FENCE.to_string());
                }
                FileContent::Unreadable(err) => {
                    fragments.push(format!(
                        "[❌ Error leyendo {}: {}]",
                        entry.relative_path, err
                    ));
                }
            }
        }

        fragments
    }

    pub fn render(entries: &[FileEntry]) -> String {
        Self::generate_fragments(entries).join("\n")
    }
}

/// Reads a whole file as UTF-8 text. Failures are returned as data, never raised.
pub fn read_contents(path: &Path) -> FileContent {
    match fs::read_to_string(path) {
        Ok(raw) => FileContent::Text(normalize_newlines(&raw).trim().to_string()),
        Err(e) => {
            log::debug!("Could not read {}: {}", path.display(), e);
            FileContent::Unreadable(e.to_string())
        }
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
