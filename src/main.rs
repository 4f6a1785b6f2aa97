use anyhow::{Context, Result};
use std::io::{self, Read};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod checks;
mod config;
mod context;
mod hooks;
mod input;
mod presets;
mod state;
mod tracking;

use checks::runner::ProcessRunner;
use config::HooksConfig;
use context::HookContext;
use hooks::Dispatch;
use input::HookInput;

/// Diagnostics go to stderr, filtered by this variable (default: warn)
const LOG_ENV: &str = "PYTHON_CLAUDE_LOG";

fn main() -> Result<ExitCode> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let (hook, rest) = match hooks::resolve(&args) {
        Dispatch::Hook(hook, rest) => (hook, rest),
        failed => {
            let code = hooks::write_usage(&failed, &mut stderr)?;
            return Ok(exit_code(code));
        }
    };

    let input = read_input()?;
    let project_dir = context::resolve_project_dir()?;
    let config = if hook.needs_config() {
        config::load_for_project(&project_dir)?
    } else {
        config::load_for_project(&project_dir).unwrap_or_else(|e| {
            tracing::warn!("{:#}; using default config", e);
            HooksConfig::default()
        })
    };
    tracing::debug!(hook = hook.name(), project = %project_dir.display(), "dispatching");

    let ctx = HookContext::new(input, project_dir, config, hook.name());
    let code = hooks::run(hook, rest, &ctx, &ProcessRunner, &mut stdout, &mut stderr)?;
    tracing::debug!(hook = hook.name(), code, "finished");

    Ok(exit_code(code))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn read_input() -> Result<HookInput> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read hook input from stdin")?;
    HookInput::parse(&buffer)
}

/// Process exit status for a hook result; out-of-range codes become 1
fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}
