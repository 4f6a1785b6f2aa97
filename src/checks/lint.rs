use crate::checks::runner::{run_check, CommandRunner, Operands, RunnerSpec};
use crate::checks::CheckKind;
use crate::context::HookContext;
use anyhow::Result;

const SPEC: RunnerSpec = RunnerSpec {
    kind: CheckKind::Lint,
    operands: Operands::TrackedFiles,
    consumes_tracking: true,
};

/// Lint (with autofix) every file edited since the last clean run.
pub fn run(ctx: &HookContext, runner: &dyn CommandRunner) -> Result<i32> {
    run_check(&SPEC, ctx, runner)
}
