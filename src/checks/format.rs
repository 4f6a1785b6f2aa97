use crate::checks::runner::{run_check, CommandRunner, Operands, RunnerSpec};
use crate::checks::CheckKind;
use crate::context::HookContext;
use anyhow::Result;

/// Format the edited file right after an edit, or every tracked file on Stop.
pub fn run(ctx: &HookContext, runner: &dyn CommandRunner) -> Result<i32> {
    run_check(&spec(ctx), ctx, runner)
}

fn spec(ctx: &HookContext) -> RunnerSpec {
    match ctx.input.file_path() {
        Some(path) if !path.is_empty() => RunnerSpec {
            kind: CheckKind::Format,
            operands: Operands::EditedFile,
            consumes_tracking: false,
        },
        _ => RunnerSpec {
            kind: CheckKind::Format,
            operands: Operands::TrackedFiles,
            consumes_tracking: true,
        },
    }
}
