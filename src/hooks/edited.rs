use crate::checks::CheckKind;
use crate::context::HookContext;
use anyhow::Result;

/// Queue an edited source file for every deferred check.
/// Anything that is not a source file is ignored without side effects.
pub fn run(ctx: &HookContext) -> Result<i32> {
    let Some(file_path) = ctx.source_file() else {
        return Ok(0);
    };

    // Tracking lists are line-based; such a path could never be matched again
    if file_path.contains(['\n', '\r']) {
        tracing::warn!(file_path, "not tracking a path containing a line break");
        return Ok(0);
    }

    ctx.log(file_path);

    for kind in CheckKind::ALL {
        ctx.tracking(kind).track(file_path)?;
    }

    Ok(0)
}
