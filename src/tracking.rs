use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Newline-separated set of file paths waiting for a check.
/// A missing file is the same as an empty list.
#[derive(Debug, Clone)]
pub struct TrackingList {
    path: PathBuf,
}

impl TrackingList {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tracked paths in first-seen order, without duplicates or blank lines
    pub fn entries(&self) -> Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };

        let mut seen = HashSet::new();
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| seen.insert(*line))
            .map(String::from)
            .collect())
    }

    /// Tracked paths that still exist on disk
    pub fn existing_entries(&self) -> Result<Vec<String>> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|entry| Path::new(entry).exists())
            .collect())
    }

    /// Append `file_path` unless it is already tracked. Returns true if appended.
    pub fn track(&self, file_path: &str) -> Result<bool> {
        if self.entries()?.iter().any(|entry| entry == file_path) {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        writeln!(file, "{}", file_path)
            .with_context(|| format!("Failed to append to {}", self.path.display()))?;

        Ok(true)
    }

    /// Whether anything was edited since the last successful run
    pub fn is_pending(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > 0)
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", self.path.display())),
        }
    }
}
