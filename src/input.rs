use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Input JSON from Claude Code hook system
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    /// Session identifier; the literal string "null" is treated as absent
    #[serde(default, deserialize_with = "session_id")]
    pub session_id: Option<String>,
    /// Arguments of the tool that triggered the hook (empty for lifecycle events)
    #[serde(default, deserialize_with = "tool_input")]
    pub tool_input: Map<String, Value>,
}

fn session_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|id| id != "null"))
}

fn tool_input<'de, D>(deserializer: D) -> std::result::Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl HookInput {
    /// Parse the raw stdin payload. Blank input means "no tool input available".
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).context("Failed to parse hook input JSON")
    }

    /// Path of the edited file, if the triggering tool carried one
    pub fn file_path(&self) -> Option<&str> {
        self.tool_input.get("file_path").and_then(Value::as_str)
    }
}
