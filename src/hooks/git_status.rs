use crate::checks::runner::{CommandRunner, OutputRoute};
use crate::context::HookContext;
use anyhow::Result;
use std::io::Write;

/// Show `git status` for the project, passing git's exit code through.
pub fn run(ctx: &HookContext, runner: &dyn CommandRunner, out: &mut dyn Write) -> Result<i32> {
    writeln!(out, "# git status")?;
    out.flush()?;

    let argv = ["git".to_string(), "status".to_string()];
    let code = runner.run(&argv, &ctx.project_dir, OutputRoute::Inherit)?;
    ctx.log(&format!("exit {}", code));
    Ok(code)
}
