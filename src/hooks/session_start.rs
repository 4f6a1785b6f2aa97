use crate::checks::CheckKind;
use crate::context::HookContext;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// JSON printed on SessionStart, read by Claude Code
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStartOutput {
    /// Injected into the assistant's context
    pub additional_context: String,
    /// Shown to the user; only present when some check is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,
}

/// Join names as "a", "a and b", or "a, b, and c"
fn join_natural(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

/// Manual command lines for the enabled checks
fn manual_commands(ctx: &HookContext, enabled: &[CheckKind]) -> Vec<String> {
    CheckKind::ALL
        .into_iter()
        .filter(|kind| enabled.contains(&kind.gate()))
        .map(|kind| {
            let operands = match kind {
                CheckKind::Test => vec![],
                _ => vec![".".to_string()],
            };
            ctx.config.command_line(kind, &operands).join(" ")
        })
        .collect()
}

/// Summarise which quality checks will run this session
pub fn announce(ctx: &HookContext) -> SessionStartOutput {
    let state = ctx.state();
    let (enabled, disabled): (Vec<CheckKind>, Vec<CheckKind>) = CheckKind::GATES
        .into_iter()
        .partition(|kind| state.is_enabled(*kind));

    let additional_context = if enabled.is_empty() {
        "No quality checks are currently enabled. Claude Code Hooks will not \
         check edited files this session."
            .to_string()
    } else {
        let names: Vec<&str> = enabled.iter().map(|kind| kind.name()).collect();
        let noun = if names.len() == 1 { "check" } else { "checks" };
        let mut text = format!(
            "As you edit files, Claude Code Hooks will automatically run {} {} after \
             you edit a Python file. You don't need to run these commands manually. \
             You can run them before making an edit using:\n",
            join_natural(&names),
            noun
        );
        for command in manual_commands(ctx, &enabled) {
            text.push_str(&format!("- {}\n", command));
        }
        text
    };

    let system_message = if disabled.is_empty() {
        None
    } else {
        let names: Vec<&str> = disabled.iter().map(|kind| kind.name()).collect();
        Some(format!(
            "Quality checks currently disabled: {}. Use `python-claude toggle <check>` \
             to turn them back on.",
            names.join(", ")
        ))
    };

    SessionStartOutput {
        additional_context,
        system_message,
    }
}

pub fn run(ctx: &HookContext, out: &mut dyn Write) -> Result<i32> {
    let output = announce(ctx);
    let json = serde_json::to_string(&output).context("Failed to serialize session start output")?;
    writeln!(out, "{}", json)?;
    Ok(0)
}
