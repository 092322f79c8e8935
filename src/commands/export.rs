use super::{connect, CycleSelection};
use crate::{
    api::resources::{AdminExport, RecordQuery},
    libs::{
        export::{ExportData, ExportDataset, ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "attendance")]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    cycle: CycleSelection,

    /// Exact employee id.
    #[arg(short, long)]
    employee: Option<String>,

    /// Download the server-generated export instead of building one locally.
    #[arg(long, value_enum, conflicts_with = "format")]
    server: Option<AdminExport>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let (_, api) = connect()?;
    let cycle = args.cycle.resolve()?;
    let query = RecordQuery::for_cycle(&cycle).employee(args.employee.clone());

    if let Some(export) = args.server {
        let bytes = api.admin_export(export, &query).await?;
        let path = args.output.unwrap_or_else(|| {
            PathBuf::from(format!("paydesk_server_{:?}_{}.csv", export, Local::now().format("%Y%m%d_%H%M%S")).to_lowercase())
        });
        fs::write(&path, bytes)?;
        msg_success!(Message::ServerExportSaved(path.display().to_string()));
        return Ok(());
    }

    msg_info!(Message::ExportingData(format!("{:?}", args.data), format!("{:?}", args.format)));

    let mut dataset = ExportDataset::new(cycle);
    match args.data {
        ExportData::Attendance => dataset.attendance = api.attendance(&query).await?,
        ExportData::Breaks => dataset.breaks = api.breaks(&query).await?,
        ExportData::Summary => {
            let (attendance, breaks) = tokio::try_join!(api.attendance(&query), api.breaks(&query))?;
            dataset.attendance = attendance;
            dataset.breaks = breaks;
        }
    }
    dataset.attendance.retain(|r| cycle.contains(r.date));
    dataset.breaks.retain(|b| cycle.contains(b.date));

    let path = Exporter::new(args.format, args.data, args.output).export(&dataset)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
