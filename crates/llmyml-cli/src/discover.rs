//! # File Discovery
//!
//! Finds LLM.yml files under a directory.
//!
//! A file qualifies when its name, compared case-insensitively, is
//! `LLM.<ext>` or ends in `-llm.<ext>` / `.llm.<ext>`, where `<ext>` is one
//! of `yml`, `yaml` or `json`. Hidden directories are never entered.

use std::path::{Path, PathBuf};

const EXTENSIONS: [&str; 3] = ["yml", "yaml", "json"];

/// Whether a file name looks like an LLM.yml document.
pub fn is_llm_file_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    let Some((stem, ext)) = lower.rsplit_once('.') else {
        return false;
    };
    if !EXTENSIONS.contains(&ext) {
        return false;
    }
    stem == "llm" || stem.ends_with("-llm") || stem.ends_with(".llm")
}

/// Collect LLM.yml files in `dir`, sorted by path.
///
/// The target directory and its immediate non-hidden subdirectories are
/// always searched; with `recursive`, every level below them is too.
/// Symbolic links are neither followed nor matched. Unreadable directories
/// and entries are logged and skipped.
pub fn find_llm_files(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut results = Vec::new();
    walk_for_files(dir, recursive, 0, &mut results);
    results.sort();
    results
}

fn walk_for_files(dir: &Path, recursive: bool, depth: usize, acc: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "failed to read directory during file walk"
            );
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        // `DirEntry::file_type` does not traverse symlinks.
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "failed to read file type");
                continue;
            }
        };
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if file_type.is_dir() {
            if !name.starts_with('.') && (recursive || depth == 0) {
                walk_for_files(&entry.path(), recursive, depth + 1, acc);
            }
        } else if file_type.is_file() && is_llm_file_name(&name) {
            acc.push(entry.path());
        }
    }
}
