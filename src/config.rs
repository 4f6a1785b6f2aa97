use crate::checks::CheckKind;
use crate::presets::{preset_names, DEFAULT_PRESET, PRESETS};
use anyhow::{bail, Context, Result};
use glob::Pattern;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "quality-hooks.yaml";

const DEFAULT_SOURCE_PATTERN: &str = "*.py";

/// Raw configuration structure (as parsed from YAML)
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct HooksConfigRaw {
    /// Built-in command prefix preset name
    preset: Option<String>,
    /// Explicit command prefix, wins over `preset`
    command_prefix: Option<Vec<String>>,
    /// Glob patterns for files that get tracked and checked
    source_patterns: Option<Vec<String>>,
    /// Per-check tool command overrides
    #[serde(default)]
    commands: CommandOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommandOverrides {
    format: Option<Vec<String>>,
    lint: Option<Vec<String>>,
    typecheck: Option<Vec<String>>,
    test: Option<Vec<String>>,
}

impl CommandOverrides {
    fn get(&self, kind: CheckKind) -> Option<&Vec<String>> {
        match kind {
            CheckKind::Format => self.format.as_ref(),
            CheckKind::Lint => self.lint.as_ref(),
            CheckKind::Typecheck => self.typecheck.as_ref(),
            CheckKind::Test => self.test.as_ref(),
        }
    }
}

/// Tool invoked for each check when not overridden
fn default_command(kind: CheckKind) -> &'static [&'static str] {
    match kind {
        CheckKind::Format => &["ruff", "format"],
        CheckKind::Lint => &["ruff", "check", "--fix"],
        CheckKind::Typecheck => &["mypy"],
        CheckKind::Test => &["pytest"],
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Resolved configuration (preset expanded, every command defined)
#[derive(Debug, Clone)]
pub struct HooksConfig {
    pub command_prefix: Vec<String>,
    source_patterns: Vec<Pattern>,
    /// Indexed like `CheckKind::ALL`
    commands: [Vec<String>; 4],
}

impl Default for HooksConfig {
    fn default() -> Self {
        let prefix = PRESETS.get(DEFAULT_PRESET).cloned().unwrap_or_default();
        Self {
            command_prefix: to_strings(&prefix),
            source_patterns: Pattern::new(DEFAULT_SOURCE_PATTERN).into_iter().collect(),
            commands: CheckKind::ALL.map(|kind| to_strings(default_command(kind))),
        }
    }
}

impl HooksConfig {
    /// Whether `file_path` is a source file that the checks care about
    pub fn is_source_file(&self, file_path: &str) -> bool {
        self.source_patterns
            .iter()
            .any(|pattern| file_matches_pattern(file_path, pattern))
    }

    /// The tool command for a check, without prefix or operands
    pub fn command(&self, kind: CheckKind) -> &[String] {
        let index = CheckKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        &self.commands[index]
    }

    /// Full argv: prefix, tool command, then operands
    pub fn command_line(&self, kind: CheckKind, operands: &[String]) -> Vec<String> {
        self.command_prefix
            .iter()
            .chain(self.command(kind))
            .chain(operands)
            .cloned()
            .collect()
    }
}

/// Check if a file path matches a glob pattern
fn file_matches_pattern(file_path: &str, pattern: &Pattern) -> bool {
    if pattern.matches(file_path) {
        return true;
    }

    // Also try matching just the filename for simple patterns
    if let Some(filename) = Path::new(file_path).file_name() {
        if pattern.matches(filename.to_string_lossy().as_ref()) {
            return true;
        }
    }

    false
}

/// Location of the optional config file for a project
pub fn config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".claude").join(CONFIG_FILENAME)
}

/// Loads and validates a quality-hooks.yaml config file.
pub fn load_config(config_path: &Path) -> Result<HooksConfig> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

    let parsed: HooksConfigRaw = if content.trim().is_empty() {
        HooksConfigRaw::default()
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?
    };

    let command_prefix = match (&parsed.command_prefix, &parsed.preset) {
        (Some(prefix), _) => prefix.clone(),
        (None, Some(name)) => match PRESETS.get(name.as_str()) {
            Some(prefix) => to_strings(prefix),
            None => bail!(
                "Invalid config at {}: unknown preset '{}' (available: {})",
                config_path.display(),
                name,
                preset_names().join(", ")
            ),
        },
        (None, None) => HooksConfig::default().command_prefix,
    };

    let source_patterns = match &parsed.source_patterns {
        Some(patterns) if patterns.is_empty() => bail!(
            "Invalid config at {}: 'source_patterns' must not be empty",
            config_path.display()
        ),
        Some(patterns) => patterns
            .iter()
            .map(|p| {
                Pattern::new(p).with_context(|| {
                    format!(
                        "Invalid config at {}: bad glob pattern '{}'",
                        config_path.display(),
                        p
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?,
        None => HooksConfig::default().source_patterns,
    };

    for kind in CheckKind::ALL {
        if parsed.commands.get(kind).is_some_and(Vec::is_empty) {
            bail!(
                "Invalid config at {}: 'commands.{}' must not be empty",
                config_path.display(),
                kind
            );
        }
    }
    let commands = CheckKind::ALL.map(|kind| match parsed.commands.get(kind) {
        Some(command) => command.clone(),
        None => to_strings(default_command(kind)),
    });

    Ok(HooksConfig {
        command_prefix,
        source_patterns,
        commands,
    })
}

/// Load the project's config, falling back to defaults when there is none
pub fn load_for_project(project_dir: &Path) -> Result<HooksConfig> {
    let path = config_path(project_dir);
    if !path.exists() {
        return Ok(HooksConfig::default());
    }
    load_config(&path)
}
