use crate::checks::CheckKind;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const STATE_FILENAME: &str = "quality-checks.json";

/// Enabled/disabled flags for quality checks, persisted at
/// `<project>/.claude/quality-checks.json`.
///
/// Every query re-reads the file: each hook invocation is its own process,
/// so there is nothing worth caching.
#[derive(Debug, Clone)]
pub struct CheckStateStore {
    path: PathBuf,
}

impl CheckStateStore {
    pub fn for_project(project_dir: &Path) -> Self {
        Self {
            path: project_dir.join(".claude").join(STATE_FILENAME),
        }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored record. Anything unreadable counts as "all enabled".
    fn load(&self) -> Map<String, Value> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Map::new(),
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                tracing::warn!(path = %self.path.display(), "check state is not an object, using defaults");
                Map::new()
            }
            Err(e) => {
                if !content.trim().is_empty() {
                    tracing::warn!(path = %self.path.display(), error = %e, "failed to parse check state, using defaults");
                }
                Map::new()
            }
        }
    }

    /// Replace the state file with `state` (write tmp, then rename)
    fn save(&self, state: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(state).context("Failed to serialize check state")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        Ok(())
    }

    fn flag(state: &Map<String, Value>, check: CheckKind) -> bool {
        state
            .get(check.name())
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    fn set(&self, check: CheckKind, enabled: bool) -> Result<()> {
        let mut state = self.load();
        state.insert(check.name().to_string(), Value::Bool(enabled));
        self.save(&state)
    }

    pub fn is_enabled(&self, check: CheckKind) -> bool {
        Self::flag(&self.load(), check)
    }

    pub fn enable(&self, check: CheckKind) -> Result<()> {
        self.set(check, true)
    }

    pub fn disable(&self, check: CheckKind) -> Result<()> {
        self.set(check, false)
    }

    /// Flip the on-disk flag and return the new value
    pub fn toggle(&self, check: CheckKind) -> Result<bool> {
        let mut state = self.load();
        let enabled = !Self::flag(&state, check);
        state.insert(check.name().to_string(), Value::Bool(enabled));
        self.save(&state)?;
        Ok(enabled)
    }
}
