use super::{connect, CycleSelection};
use crate::{
    api::resources::RecordQuery,
    libs::{
        aggregate::{summarize_by_employee, sum_break_minutes, AttendanceStats, PenaltyTotals},
        filter::within_cycle,
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    cycle: CycleSelection,

    /// Exact employee id.
    #[arg(short, long)]
    employee: Option<String>,

    /// Also list totals per employee.
    #[arg(long)]
    per_employee: bool,
}

pub async fn cmd(args: StatsArgs) -> Result<()> {
    let (_, api) = connect()?;
    let cycle = args.cycle.resolve()?;
    let query = RecordQuery::for_cycle(&cycle).employee(args.employee.clone());

    let (attendance, breaks, penalties) =
        tokio::try_join!(api.attendance(&query), api.breaks(&query), api.penalties(&query))?;

    let attendance = within_cycle(&attendance, &cycle);
    let breaks = within_cycle(&breaks, &cycle);
    let penalties = within_cycle(&penalties, &cycle);

    msg_print!(Message::StatsHeader(cycle.label()), true);
    if attendance.is_empty() {
        msg_info!(Message::NoRecordsFound);
        return Ok(());
    }

    let stats = AttendanceStats::from_records(attendance.iter().copied());
    let totals = PenaltyTotals::from_penalties(penalties.iter().copied());
    View::stats(&stats, sum_break_minutes(breaks.iter().copied()), &totals)?;

    if args.per_employee {
        msg_print!(Message::EmployeeSummaryHeader, true);
        View::employee_summaries(&summarize_by_employee(attendance.iter().copied()))?;
    }

    Ok(())
}
