use super::connect;
use crate::{
    libs::{
        edit::{AttendanceEdit, BreakEdit, DeleteRequest, FieldChange},
        messages::Message,
        records::AttendanceStatus,
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::{Args, Subcommand, ValueEnum};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use tracing::info;

#[derive(Debug, Args)]
pub struct EditArgs {
    #[command(subcommand)]
    target: EditTarget,
}

#[derive(Debug, Subcommand)]
enum EditTarget {
    #[command(about = "Correct clock times, overtime or status of an attendance record")]
    Attendance(AttendanceEditArgs),
    #[command(about = "Correct the start or end of a break")]
    Break(BreakEditArgs),
    #[command(about = "Delete an attendance record or break")]
    Delete(DeleteArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DeleteTarget {
    Attendance,
    Break,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    #[arg(value_enum)]
    target: DeleteTarget,

    /// Attendance record or break id.
    id: String,

    #[arg(short, long)]
    reason: Option<String>,

    #[arg(short, long)]
    yes: bool,
}

#[derive(Debug, Args)]
struct AttendanceEditArgs {
    /// Attendance record id.
    #[arg(required = true)]
    id: String,

    #[arg(long = "in")]
    check_in: Option<String>,

    #[arg(long)]
    break_in: Option<String>,

    #[arg(long)]
    break_out: Option<String>,

    #[arg(long = "out")]
    check_out: Option<String>,

    /// Overtime as H:MM.
    #[arg(long)]
    overtime: Option<String>,

    #[arg(long, value_enum)]
    status: Option<AttendanceStatus>,

    /// Why the record is corrected; asked for when omitted.
    #[arg(short, long)]
    reason: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    yes: bool,
}

#[derive(Debug, Args)]
struct BreakEditArgs {
    /// Break id.
    #[arg(required = true)]
    id: String,

    #[arg(long)]
    start: Option<String>,

    #[arg(long)]
    end: Option<String>,

    #[arg(short, long)]
    reason: Option<String>,

    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    match args.target {
        EditTarget::Attendance(args) => edit_attendance(args).await,
        EditTarget::Break(args) => edit_break(args).await,
        EditTarget::Delete(args) => delete(args).await,
    }
}

async fn edit_attendance(args: AttendanceEditArgs) -> Result<()> {
    let (_, api) = connect()?;
    let record = api.attendance_record(&args.id).await?;

    let edit = AttendanceEdit {
        check_in: args.check_in,
        break_in: args.break_in,
        break_out: args.break_out,
        check_out: args.check_out,
        overtime: args.overtime,
        status: args.status,
        reason: reason_or_prompt(args.reason)?,
    };
    edit.validate(&record)
        .map_err(|e| anyhow!("{}", Message::ValidationFailed(e.to_string())))?;

    if !confirm(&edit.changes(&record), args.yes)? {
        msg_info!(Message::EditCancelled);
        return Ok(());
    }

    api.update_attendance(&record.id, &edit.to_payload(record.date)).await?;
    info!(id = %record.id, "attendance record updated");
    msg_success!(Message::EditApplied(record.id.clone()));
    Ok(())
}

async fn edit_break(args: BreakEditArgs) -> Result<()> {
    let (_, api) = connect()?;
    let session = api.break_session(&args.id).await?;

    let edit = BreakEdit {
        start: args.start,
        end: args.end,
        reason: reason_or_prompt(args.reason)?,
    };
    edit.validate(&session)
        .map_err(|e| anyhow!("{}", Message::ValidationFailed(e.to_string())))?;

    let changes = [
        ("startTime", Some(session.start_time.format("%H:%M").to_string()), edit.start.clone()),
        ("endTime", session.end_time.map(|t| t.format("%H:%M").to_string()), edit.end.clone()),
    ]
    .into_iter()
    .filter(|(_, _, new)| new.is_some())
    .map(|(field, old, new)| FieldChange {
        field: field.to_string(),
        old_value: old,
        new_value: new,
    })
    .collect::<Vec<_>>();

    if !confirm(&changes, args.yes)? {
        msg_info!(Message::EditCancelled);
        return Ok(());
    }

    api.update_break(&session.id, &edit.to_payload(session.date)).await?;
    info!(id = %session.id, "break updated");
    msg_success!(Message::BreakEditApplied(session.id.clone()));
    Ok(())
}

async fn delete(args: DeleteArgs) -> Result<()> {
    let (_, api) = connect()?;

    msg_print!(Message::DeletePreview, true);
    match args.target {
        DeleteTarget::Attendance => View::attendance(&[api.attendance_record(&args.id).await?])?,
        DeleteTarget::Break => View::breaks(&[api.break_session(&args.id).await?], Utc::now())?,
    }

    let request = DeleteRequest {
        reason: reason_or_prompt(args.reason)?,
    };
    request
        .validate()
        .map_err(|e| anyhow!("{}", Message::ValidationFailed(e.to_string())))?;

    if !args.yes
        && !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDelete(args.id.clone()).to_string())
            .default(false)
            .interact()?
    {
        msg_info!(Message::EditCancelled);
        return Ok(());
    }

    match args.target {
        DeleteTarget::Attendance => {
            api.delete_attendance(&args.id, &request.to_payload()).await?;
            info!(id = %args.id, "attendance record deleted");
            msg_success!(Message::AttendanceDeleted(args.id));
        }
        DeleteTarget::Break => {
            api.delete_break(&args.id, &request.to_payload()).await?;
            info!(id = %args.id, "break deleted");
            msg_success!(Message::BreakDeleted(args.id));
        }
    }
    Ok(())
}

fn reason_or_prompt(reason: Option<String>) -> Result<String> {
    match reason {
        Some(reason) => Ok(reason),
        None => Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEditReason.to_string())
            .allow_empty(true)
            .interact_text()?),
    }
}

fn confirm(changes: &[FieldChange], skip: bool) -> Result<bool> {
    msg_print!(Message::EditPreview, true);
    View::changes(changes)?;

    if skip {
        return Ok(true);
    }
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmEdit.to_string())
        .default(false)
        .interact()?)
}
