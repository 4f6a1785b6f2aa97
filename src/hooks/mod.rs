use crate::checks::{self, runner::CommandRunner};
use crate::context::HookContext;
use anyhow::Result;
use std::io::Write;

pub mod edited;
pub mod git_status;
pub mod session_start;
pub mod toggle;

const BIN_NAME: &str = "python-claude";

/// Entry points Claude Code can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    Edited,
    GitStatus,
    Mypy,
    Pytest,
    RuffCheck,
    RuffFormat,
    SessionStart,
    Toggle(toggle::Action),
}

/// Command words, some of them two words long
const HOOKS: &[(&str, Hook)] = &[
    ("disable", Hook::Toggle(toggle::Action::Disable)),
    ("edited", Hook::Edited),
    ("enable", Hook::Toggle(toggle::Action::Enable)),
    ("format", Hook::RuffFormat),
    ("git status", Hook::GitStatus),
    ("lint", Hook::RuffCheck),
    ("mypy", Hook::Mypy),
    ("pytest", Hook::Pytest),
    ("ruff check", Hook::RuffCheck),
    ("ruff format", Hook::RuffFormat),
    ("session start", Hook::SessionStart),
    ("test", Hook::Pytest),
    ("toggle", Hook::Toggle(toggle::Action::Toggle)),
    ("typecheck", Hook::Mypy),
];

impl Hook {
    /// Tag used in hook log lines
    pub fn name(self) -> &'static str {
        match self {
            Hook::Edited => "edited",
            Hook::GitStatus => "git-status",
            Hook::Mypy => "mypy",
            Hook::Pytest => "pytest",
            Hook::RuffCheck => "ruff-check",
            Hook::RuffFormat => "ruff-format",
            Hook::SessionStart => "session-start",
            Hook::Toggle(action) => action.name(),
        }
    }

    /// Whether this hook runs or queues checks, so a broken config must stop it.
    /// The rest fall back to defaults to stay usable while the config is fixed.
    pub fn needs_config(self) -> bool {
        match self {
            Hook::Edited | Hook::Mypy | Hook::Pytest | Hook::RuffCheck | Hook::RuffFormat => true,
            Hook::GitStatus | Hook::SessionStart | Hook::Toggle(_) => false,
        }
    }
}

/// Outcome of looking up the command words
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch<'a> {
    /// A hook and the arguments left after its command words
    Hook(Hook, &'a [String]),
    /// No command given
    Usage,
    /// Nothing registered under this name
    Unknown(String),
}

fn lookup(name: &str) -> Option<Hook> {
    HOOKS
        .iter()
        .find(|(command, _)| *command == name)
        .map(|(_, hook)| *hook)
}

/// Try the first two words as one command, then the first word alone.
pub fn resolve(args: &[String]) -> Dispatch<'_> {
    let Some(first) = args.first() else {
        return Dispatch::Usage;
    };

    if let Some(second) = args.get(1) {
        if let Some(hook) = lookup(&format!("{} {}", first, second)) {
            return Dispatch::Hook(hook, &args[2..]);
        }
    }

    match lookup(first) {
        Some(hook) => Dispatch::Hook(hook, &args[1..]),
        None => Dispatch::Unknown(first.clone()),
    }
}

/// Sorted, comma-separated command names
pub fn available_hooks() -> String {
    let mut names: Vec<&str> = HOOKS.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names.join(", ")
}

/// Explain a failed lookup on `err`. Always exit code 1.
pub fn write_usage(dispatch: &Dispatch, err: &mut dyn Write) -> Result<i32> {
    match dispatch {
        Dispatch::Unknown(name) => writeln!(err, "Unknown command: {}", name)?,
        _ => writeln!(err, "Usage: {} <command>", BIN_NAME)?,
    }
    writeln!(err, "Available hooks: {}", available_hooks())?;
    Ok(1)
}

/// Run a resolved hook and return the exit code for Claude Code
pub fn run(
    hook: Hook,
    args: &[String],
    ctx: &HookContext,
    runner: &dyn CommandRunner,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    match hook {
        Hook::Edited => edited::run(ctx),
        Hook::GitStatus => git_status::run(ctx, runner, out),
        Hook::Mypy => checks::typecheck::run(ctx, runner),
        Hook::Pytest => checks::unit_tests::run(ctx, runner),
        Hook::RuffCheck => checks::lint::run(ctx, runner),
        Hook::RuffFormat => checks::format::run(ctx, runner),
        Hook::SessionStart => session_start::run(ctx, out),
        Hook::Toggle(action) => toggle::run(action, args, ctx, out, err),
    }
}
