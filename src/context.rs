use crate::checks::CheckKind;
use crate::config::HooksConfig;
use crate::input::HookInput;
use crate::state::CheckStateStore;
use crate::tracking::TrackingList;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const LOG_FILENAME: &str = "hooks.log";

/// Project root: `$CLAUDE_PROJECT_DIR` if set, otherwise the working directory.
pub fn resolve_project_dir() -> Result<PathBuf> {
    match std::env::var_os("CLAUDE_PROJECT_DIR") {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => std::env::current_dir().context("Failed to determine working directory"),
    }
}

/// Everything a hook needs for one invocation
#[derive(Debug)]
pub struct HookContext {
    pub input: HookInput,
    pub project_dir: PathBuf,
    pub config: HooksConfig,
    /// Hook name used as the log line tag
    hook_name: &'static str,
}

impl HookContext {
    pub fn new(
        input: HookInput,
        project_dir: PathBuf,
        config: HooksConfig,
        hook_name: &'static str,
    ) -> Self {
        Self {
            input,
            project_dir,
            config,
            hook_name,
        }
    }

    /// `.claude/debug`, partitioned per session when the session is known
    pub fn log_dir(&self) -> PathBuf {
        let base = self.project_dir.join(".claude").join("debug");
        match &self.input.session_id {
            Some(session_id) => base.join("sessions").join(session_id),
            None => base,
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join(LOG_FILENAME)
    }

    pub fn tracking(&self, kind: CheckKind) -> TrackingList {
        TrackingList::new(self.log_dir().join(kind.tracking_file()))
    }

    pub fn state(&self) -> CheckStateStore {
        CheckStateStore::for_project(&self.project_dir)
    }

    /// The edited file from the tool input, only if it is a source file
    pub fn source_file(&self) -> Option<&str> {
        self.input
            .file_path()
            .filter(|path| self.config.is_source_file(path))
    }

    /// Append a line to the hook log. Logging never fails the hook.
    pub fn log(&self, message: &str) {
        if let Err(e) = append_log(&self.log_file(), self.hook_name, message) {
            tracing::warn!(error = %e, "failed to write hook log");
        }
    }
}

fn append_log(path: &Path, hook_name: &str, message: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    writeln!(file, "[{}] [{}] {}", timestamp, hook_name, message)?;
    Ok(())
}
