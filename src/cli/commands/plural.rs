use anyhow::Result;

use super::super::{
    args::PluralCommand, context::CliContext, exit_status::ExitStatus, report::print_warning_hint,
};
use super::parse_value;
use crate::core::Arg;

pub fn plural(cmd: PluralCommand) -> Result<ExitStatus> {
    let ctx = CliContext::new(&cmd.common)?;
    let values: Vec<Arg> = cmd.values.iter().map(|raw| parse_value(raw)).collect();

    let text = ctx
        .translator()
        .plural(cmd.count, &cmd.zero, &cmd.one, &cmd.many, &values);
    println!("{}", text);

    print_warning_hint(ctx.warnings.len(), ctx.verbose);
    Ok(ExitStatus::Success)
}
