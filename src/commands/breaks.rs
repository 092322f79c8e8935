use super::{connect, print_page_info, CycleSelection};
use crate::{
    api::resources::RecordQuery,
    libs::{
        aggregate::sum_break_minutes,
        clock::minutes_to_clock,
        filter::{paginate, within_cycle, RecordFilter},
        messages::Message,
        records::{BreakSession, BreakStatus},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct BreaksArgs {
    #[command(flatten)]
    cycle: CycleSelection,

    /// Exact employee id.
    #[arg(short, long)]
    employee: Option<String>,

    /// Case-insensitive match on employee name or id.
    #[arg(short, long)]
    search: Option<String>,

    /// Only breaks that are still running.
    #[arg(long)]
    active: bool,

    #[arg(short, long, default_value_t = 1)]
    page: usize,

    #[arg(long)]
    per_page: Option<usize>,
}

pub async fn cmd(args: BreaksArgs) -> Result<()> {
    let (config, api) = connect()?;
    let cycle = args.cycle.resolve()?;

    let query = RecordQuery::for_cycle(&cycle).employee(args.employee.clone());
    let fetched = api.breaks(&query).await?;

    let filter = RecordFilter {
        employee_id: args.employee.clone(),
        search: args.search.clone(),
        status: None,
    };
    let mut sessions: Vec<BreakSession> = within_cycle(&fetched, &cycle)
        .into_iter()
        .filter(|s| filter.matches(*s))
        .filter(|s| !args.active || s.status == BreakStatus::Active)
        .cloned()
        .collect();
    sessions.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    msg_print!(Message::BreaksHeader(cycle.label()), true);
    if sessions.is_empty() {
        msg_info!(Message::NoRecordsFound);
        return Ok(());
    }

    let per_page = args.per_page.unwrap_or(config.listing_or_default().per_page);
    let page = paginate(&sessions, args.page, per_page);
    View::breaks(&page.items, Utc::now())?;
    print_page_info(&page);

    let active = sessions.iter().filter(|s| s.status == BreakStatus::Active).count();
    if active > 0 {
        msg_info!(Message::ActiveBreaks(active));
    }
    msg_print!(Message::TotalBreakTime(minutes_to_clock(sum_break_minutes(&sessions))));

    Ok(())
}
