use super::parse_date;
use crate::{
    libs::{messages::Message, pay_cycle::PayCycle, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

/// Upper bound for `--before`/`--after`, a hundred years of cycles.
pub const MAX_SPAN: i64 = 1200;

#[derive(Debug, Args)]
pub struct CycleArgs {
    /// Reference date, `today` or YYYY-MM-DD.
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Cycles to show before the current one.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(..=MAX_SPAN))]
    before: u16,

    /// Cycles to show after the current one.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(..=MAX_SPAN))]
    after: u16,
}

pub fn cmd(args: CycleArgs) -> Result<()> {
    let today = parse_date(&args.date)?;
    let current = PayCycle::current(today)?;

    let cycles = (-i32::from(args.before)..=i32::from(args.after))
        .map(|offset| PayCycle::by_offset(today, offset))
        .collect::<Result<Vec<_>, _>>()?;

    msg_print!(Message::CycleHeader(current.label()), true);
    View::cycles(&cycles, today)?;

    Ok(())
}
