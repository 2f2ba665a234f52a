use anyhow::Result;

use super::super::{
    args::ListCommand,
    context::CliContext,
    exit_status::ExitStatus,
    report::{print_namespaces, print_warning_hint},
};

pub fn list(cmd: ListCommand) -> Result<ExitStatus> {
    let ctx = CliContext::new(&cmd.common)?;

    print_namespaces(&ctx.handle.snapshot(), cmd.keys);

    print_warning_hint(ctx.warnings.len(), ctx.verbose);
    Ok(ExitStatus::Success)
}
