use crate::checks::CheckKind;
use crate::context::HookContext;
use anyhow::Result;
use std::io::Write;

/// What to do with a check's enabled flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Toggle,
    Enable,
    Disable,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Toggle => "toggle",
            Action::Enable => "enable",
            Action::Disable => "disable",
        }
    }
}

/// Change a check's flag and confirm its new state on `out`.
/// A missing or unknown check name is a usage error (exit 1).
pub fn run(
    action: Action,
    args: &[String],
    ctx: &HookContext,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    let Some(name) = args.first() else {
        writeln!(err, "Usage: python-claude {} <check>", action.name())?;
        writeln!(err, "Available checks: {}", CheckKind::gate_names())?;
        return Ok(1);
    };

    let Some(check) = CheckKind::gate_from_name(name) else {
        writeln!(err, "Unknown check: {}", name)?;
        writeln!(err, "Available checks: {}", CheckKind::gate_names())?;
        return Ok(1);
    };

    let state = ctx.state();
    let enabled = match action {
        Action::Toggle => state.toggle(check)?,
        Action::Enable => {
            state.enable(check)?;
            true
        }
        Action::Disable => {
            state.disable(check)?;
            false
        }
    };

    let status = if enabled { "enabled" } else { "disabled" };
    ctx.log(&format!("{} is now {}", check, status));
    writeln!(out, "{} is now {}", check.title(), status)?;
    Ok(0)
}
