use crate::{
    libs::{duration::calculate_work_duration, messages::Message},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Check-in time, HH:MM.
    #[arg(long = "in")]
    check_in: String,

    /// Check-out time, HH:MM.
    #[arg(long = "out")]
    check_out: String,

    /// Break start, HH:MM.
    #[arg(long)]
    break_in: Option<String>,

    /// Break end, HH:MM.
    #[arg(long)]
    break_out: Option<String>,

    /// Overtime as H:MM.
    #[arg(long)]
    overtime: Option<String>,
}

pub fn cmd(args: CalcArgs) -> Result<()> {
    let duration = calculate_work_duration(
        Some(&args.check_in),
        args.break_in.as_deref(),
        args.break_out.as_deref(),
        Some(&args.check_out),
        args.overtime.as_deref(),
    );
    msg_print!(Message::WorkDuration(duration));
    Ok(())
}
