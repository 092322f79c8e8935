//! Command-line interface.
//!
//! One module per subcommand, each exposing an `Args` struct and an async
//! `cmd` handler. Commands that work on a pay cycle share [`CycleSelection`], so
//! `--cycle previous --date 2025-03-10` resolves the same window everywhere.

pub mod attendance;
pub mod breaks;
pub mod calc;
pub mod convert;
pub mod cycle;
pub mod edit;
pub mod export;
pub mod init;
pub mod records;
pub mod stats;
pub mod upload;

use crate::api::ApiClient;
use crate::libs::config::Config;
use crate::libs::filter::Page;
use crate::libs::messages::Message;
use crate::libs::pay_cycle::{CycleOffset, PayCycle};
use crate::{msg_info, msg_warning};
use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the API connection and store the access token")]
    Init(init::InitArgs),
    #[command(about = "Show pay cycle boundaries")]
    Cycle(cycle::CycleArgs),
    #[command(about = "Calculate net work duration from clock times")]
    Calc(calc::CalcArgs),
    #[command(about = "Convert between decimal hours and HH:MM")]
    Convert(convert::ConvertArgs),
    #[command(about = "List attendance for a pay cycle")]
    Attendance(attendance::AttendanceArgs),
    #[command(about = "List break sessions for a pay cycle")]
    Breaks(breaks::BreaksArgs),
    #[command(about = "Correct or delete an attendance record or break", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Upload an SRP, attendance CSV or Flowace file", arg_required_else_help = true)]
    Upload(upload::UploadArgs),
    #[command(about = "Export cycle data to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Show attendance statistics for a pay cycle")]
    Stats(stats::StatsArgs),
    #[command(about = "List warnings, penalties, work logs and other records")]
    Records(records::RecordsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Cycle(args) => cycle::cmd(args),
            Commands::Calc(args) => calc::cmd(args),
            Commands::Convert(args) => convert::cmd(args),
            Commands::Attendance(args) => attendance::cmd(args).await,
            Commands::Breaks(args) => breaks::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Upload(args) => upload::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Stats(args) => stats::cmd(args).await,
            Commands::Records(args) => records::cmd(args).await,
        }
    }
}

/// Pay cycle selection shared by the cycle-scoped commands.
#[derive(Debug, Clone, Args)]
pub struct CycleSelection {
    /// Cycle relative to the reference date.
    #[arg(long = "cycle", value_enum, default_value = "current")]
    pub offset: CycleOffset,

    /// Reference date, `today` or YYYY-MM-DD.
    #[arg(short, long, default_value = "today")]
    pub date: String,
}

impl CycleSelection {
    pub fn resolve(&self) -> Result<PayCycle> {
        let today = parse_date(&self.date)?;
        Ok(PayCycle::by_offset(today, self.offset.months())?)
    }
}

/// Accepts `today` (any case) or `YYYY-MM-DD`.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    let date_str = date_str.trim();
    if date_str.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| anyhow!("{}", Message::InvalidDate(date_str.to_string())))
    }
}

/// Reads the configuration and builds an API client from it.
pub fn connect() -> Result<(Config, ApiClient)> {
    let config = Config::read()?;
    let client = ApiClient::from_config(&config)?;
    if !client.has_token() {
        msg_warning!(Message::TokenMissing);
    }
    Ok((config, client))
}

/// Prints the position of a page inside a longer list.
pub fn print_page_info<T>(page: &Page<T>) {
    if page.total_pages > 1 {
        msg_info!(Message::PageInfo(page.page, page.total_pages, page.total_items));
    }
}
