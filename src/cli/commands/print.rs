use anyhow::Result;

use super::super::{
    args::PrintCommand, context::CliContext, exit_status::ExitStatus, report::print_warning_hint,
};
use super::parse_value;
use crate::core::Arg;

pub fn print(cmd: PrintCommand) -> Result<ExitStatus> {
    let ctx = CliContext::new(&cmd.common)?;
    let translator = ctx.translator();
    let args: Vec<Arg> = cmd.args.iter().map(|raw| parse_value(raw)).collect();

    let text = match &cmd.target {
        Some(language) => translator.print_in(language, &cmd.key, &args),
        None => translator.print(&cmd.key, &args),
    };
    println!("{}", text);

    print_warning_hint(ctx.warnings.len(), ctx.verbose);
    Ok(ExitStatus::Success)
}
