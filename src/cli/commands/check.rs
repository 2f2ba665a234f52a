use anyhow::Result;

use super::super::{
    args::CheckCommand,
    context::CliContext,
    exit_status::ExitStatus,
    report::{print_failure, print_success, print_warnings},
};

/// Load the catalog and report every file or entry that was skipped.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = CliContext::new(&cmd.common)?;

    if ctx.warnings.is_empty() {
        print_success(
            ctx.files_loaded,
            ctx.handle.snapshot().len(),
            &ctx.catalog_root,
        );
    } else {
        print_warnings(&ctx.warnings);
        print_failure(ctx.warnings.len(), ctx.files_loaded);
    }

    Ok(ExitStatus::from_problem_count(ctx.warnings.len()))
}
