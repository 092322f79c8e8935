use super::{connect, print_page_info, CycleSelection};
use crate::{
    api::resources::RecordQuery,
    libs::{
        filter::{paginate, within_cycle, RecordFilter},
        messages::Message,
        records::{AttendanceRecord, AttendanceStatus},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AttendanceArgs {
    #[command(flatten)]
    cycle: CycleSelection,

    /// Exact employee id.
    #[arg(short, long)]
    employee: Option<String>,

    /// Case-insensitive match on employee name or id.
    #[arg(short, long)]
    search: Option<String>,

    #[arg(long, value_enum)]
    status: Option<AttendanceStatus>,

    #[arg(short, long, default_value_t = 1)]
    page: usize,

    #[arg(long)]
    per_page: Option<usize>,

    /// Show one record together with its edit history.
    #[arg(long, conflicts_with_all = ["employee", "search", "status"])]
    id: Option<String>,
}

pub async fn cmd(args: AttendanceArgs) -> Result<()> {
    let (config, api) = connect()?;

    if let Some(id) = &args.id {
        let record = api.attendance_record(id).await?;
        msg_print!(
            Message::RecordHeader(record.display_name().to_string(), record.date.format("%Y-%m-%d").to_string()),
            true
        );
        View::attendance(std::slice::from_ref(&record))?;

        if record.edit_history.is_empty() {
            msg_info!(Message::NoEditHistory);
        } else {
            msg_print!(Message::EditHistoryHeader, true);
            View::edit_history(&record.edit_history)?;
        }
        return Ok(());
    }

    let cycle = args.cycle.resolve()?;
    let mut query = RecordQuery::for_cycle(&cycle).employee(args.employee.clone());
    query.status = args.status;
    let fetched = api.attendance(&query).await?;

    let filter = RecordFilter {
        employee_id: args.employee.clone(),
        search: args.search.clone(),
        status: args.status,
    };
    let mut records: Vec<AttendanceRecord> = within_cycle(&fetched, &cycle)
        .into_iter()
        .filter(|r| filter.matches_attendance(r))
        .cloned()
        .collect();
    records.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.display_name().cmp(b.display_name())));

    msg_print!(Message::AttendanceHeader(cycle.label()), true);
    if records.is_empty() {
        msg_info!(Message::NoRecordsFound);
        return Ok(());
    }

    let per_page = args.per_page.unwrap_or(config.listing_or_default().per_page);
    let page = paginate(&records, args.page, per_page);
    View::attendance(&page.items)?;
    print_page_info(&page);

    Ok(())
}
