use crate::checks::CheckKind;
use crate::context::HookContext;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Raw exit code reported when the tool was killed by a signal
pub const SIGNALLED_EXIT: i32 = 128;

/// Exit code telling Claude Code to feed stderr back for correction
pub const FEEDBACK_EXIT: i32 = 2;

/// Where a child process's stdout ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputRoute {
    /// Same stdout as this process
    Inherit,
    /// Redirected to our stderr, the only stream Claude Code feeds back
    Feedback,
}

/// Runs external commands. Tests substitute a fake.
pub trait CommandRunner {
    /// Run `argv` in `cwd` to completion and return its raw exit code
    fn run(&self, argv: &[String], cwd: &Path, output: OutputRoute) -> Result<i32>;
}

/// Spawns real child processes
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, argv: &[String], cwd: &Path, output: OutputRoute) -> Result<i32> {
        let (program, args) = argv.split_first().context("Empty command line")?;

        let mut command = Command::new(program);
        command.args(args).current_dir(cwd);
        if output == OutputRoute::Feedback {
            command.stdout(std::io::stderr());
        }

        let status = command
            .status()
            .with_context(|| format!("Failed to run `{}`", argv.join(" ")))?;
        Ok(status.code().unwrap_or(SIGNALLED_EXIT))
    }
}

/// Map a tool's exit code onto the hook protocol:
/// 0 stays 0, 1 (findings) becomes 2, anything else passes through.
pub fn translate_exit_code(raw: i32) -> i32 {
    match raw {
        1 => FEEDBACK_EXIT,
        other => other,
    }
}

/// How a runner picks what to hand the tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operands {
    /// The source file named in the tool input; no-op otherwise
    EditedFile,
    /// Whole project, only when the tracking list has pending files
    WholeProject { target: Option<&'static str> },
    /// Every tracked file that still exists
    TrackedFiles,
}

/// One quality check invocation
#[derive(Debug, Clone)]
pub struct RunnerSpec {
    pub kind: CheckKind,
    pub operands: Operands,
    /// Delete the tracking list after a clean run
    pub consumes_tracking: bool,
}

/// Run a check and return the translated exit code.
/// Tracking is only cleared when the tool exits 0, so failing files are retried.
pub fn run_check(spec: &RunnerSpec, ctx: &HookContext, runner: &dyn CommandRunner) -> Result<i32> {
    let gate = spec.kind.gate();
    if !ctx.state().is_enabled(gate) {
        ctx.log(&format!("skipped: {} is disabled", gate));
        return Ok(0);
    }

    let tracking = ctx.tracking(spec.kind);

    let operands = match &spec.operands {
        Operands::EditedFile => match ctx.source_file() {
            Some(file_path) => {
                ctx.log(file_path);
                vec![file_path.to_string()]
            }
            None => return Ok(0),
        },
        Operands::WholeProject { target } => {
            if !tracking.is_pending() {
                ctx.log("No edited files since last successful run");
                return Ok(0);
            }
            target.iter().map(|t| t.to_string()).collect()
        }
        Operands::TrackedFiles => {
            let files = tracking.existing_entries()?;
            if files.is_empty() {
                ctx.log("No edited files to check");
                tracking.clear()?;
                return Ok(0);
            }
            ctx.log(&format!("Checking {} files: {}", files.len(), files.join(" ")));
            files
        }
    };

    let argv = ctx.config.command_line(spec.kind, &operands);
    tracing::debug!(check = %spec.kind, ?argv, "running check");

    let raw = runner.run(&argv, &ctx.project_dir, OutputRoute::Feedback)?;
    ctx.log(&format!("exit {}", raw));

    if raw == 0 && spec.consumes_tracking {
        tracking.clear()?;
        tracing::debug!(path = %tracking.path().display(), "cleared tracking list");
    }

    Ok(translate_exit_code(raw))
}
