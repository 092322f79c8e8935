use super::{connect, print_page_info, CycleSelection};
use crate::{
    api::resources::RecordQuery,
    libs::{
        aggregate::PenaltyTotals,
        filter::{paginate, within_cycle},
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RecordKind {
    Warnings,
    Penalties,
    Worklogs,
    Flowace,
    Employees,
    Tags,
}

#[derive(Debug, Args)]
pub struct RecordsArgs {
    #[arg(value_enum)]
    kind: RecordKind,

    #[command(flatten)]
    cycle: CycleSelection,

    /// Exact employee id.
    #[arg(short, long)]
    employee: Option<String>,

    #[arg(short, long, default_value_t = 1)]
    page: usize,

    #[arg(long)]
    per_page: Option<usize>,
}

pub async fn cmd(args: RecordsArgs) -> Result<()> {
    let (config, api) = connect()?;
    let per_page = args.per_page.unwrap_or(config.listing_or_default().per_page);

    match args.kind {
        RecordKind::Employees => {
            let employees = api.employees().await?;
            msg_print!(Message::EmployeesHeader, true);
            let page = paginate(&employees, args.page, per_page);
            View::employees(&page.items)?;
            print_page_info(&page);
            return Ok(());
        }
        RecordKind::Tags => {
            msg_print!(Message::TagsHeader, true);
            View::tags(&api.tags().await?)?;
            return Ok(());
        }
        _ => {}
    }

    let cycle = args.cycle.resolve()?;
    let query = RecordQuery::for_cycle(&cycle).employee(args.employee.clone());
    let label = cycle.label();

    match args.kind {
        RecordKind::Warnings => {
            let fetched = api.warnings(&query).await?;
            let items: Vec<_> = within_cycle(&fetched, &cycle).into_iter().cloned().collect();
            msg_print!(Message::WarningsHeader(label), true);
            if items.is_empty() {
                msg_info!(Message::NoRecordsFound);
                return Ok(());
            }
            let page = paginate(&items, args.page, per_page);
            View::warnings(&page.items)?;
            print_page_info(&page);
        }
        RecordKind::Penalties => {
            let fetched = api.penalties(&query).await?;
            let items: Vec<_> = within_cycle(&fetched, &cycle).into_iter().cloned().collect();
            msg_print!(Message::PenaltiesHeader(label), true);
            if items.is_empty() {
                msg_info!(Message::NoRecordsFound);
                return Ok(());
            }
            let page = paginate(&items, args.page, per_page);
            View::penalties(&page.items)?;
            print_page_info(&page);
            let totals = PenaltyTotals::from_penalties(&items);
            msg_print!(Message::PenaltiesTotal(totals.count, format!("{:.2}", totals.amount)));
        }
        RecordKind::Worklogs => {
            let fetched = api.work_logs(&query).await?;
            let items: Vec<_> = within_cycle(&fetched, &cycle).into_iter().cloned().collect();
            msg_print!(Message::WorkLogsHeader(label), true);
            if items.is_empty() {
                msg_info!(Message::NoRecordsFound);
                return Ok(());
            }
            let page = paginate(&items, args.page, per_page);
            View::work_logs(&page.items)?;
            print_page_info(&page);
        }
        RecordKind::Flowace => {
            let fetched = api.flowace(&query).await?;
            let items: Vec<_> = within_cycle(&fetched, &cycle).into_iter().cloned().collect();
            msg_print!(Message::FlowaceHeader(label), true);
            if items.is_empty() {
                msg_info!(Message::NoRecordsFound);
                return Ok(());
            }
            let page = paginate(&items, args.page, per_page);
            View::flowace(&page.items)?;
            print_page_info(&page);
        }
        RecordKind::Employees | RecordKind::Tags => {}
    }

    Ok(())
}
