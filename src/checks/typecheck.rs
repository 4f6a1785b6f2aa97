use crate::checks::runner::{run_check, CommandRunner, Operands, RunnerSpec};
use crate::checks::CheckKind;
use crate::context::HookContext;
use anyhow::Result;

/// Type-check the edited file after an edit, or the whole project on Stop
/// when anything was edited since the last clean run.
pub fn run(ctx: &HookContext, runner: &dyn CommandRunner) -> Result<i32> {
    run_check(&spec(ctx), ctx, runner)
}

fn spec(ctx: &HookContext) -> RunnerSpec {
    match ctx.input.file_path() {
        Some(path) if !path.is_empty() => RunnerSpec {
            kind: CheckKind::Typecheck,
            operands: Operands::EditedFile,
            consumes_tracking: false,
        },
        _ => RunnerSpec {
            kind: CheckKind::Typecheck,
            operands: Operands::WholeProject { target: Some(".") },
            consumes_tracking: true,
        },
    }
}
