use crate::{
    libs::{
        clock::{clock_to_decimal_hours, decimal_hours_to_clock, duration_to_minutes},
        messages::Message,
    },
    msg_print,
};
use anyhow::{anyhow, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Decimal hours (`8.5`) or an H:MM duration (`08:30`).
    #[arg(required = true, allow_hyphen_values = true)]
    value: String,
}

pub fn cmd(args: ConvertArgs) -> Result<()> {
    let value = args.value.trim();

    if value.contains(':') {
        if duration_to_minutes(value).is_none() {
            return Err(anyhow!("{}", Message::InvalidConversionInput(value.to_string())));
        }
        let hours = clock_to_decimal_hours(value);
        msg_print!(Message::ConvertedToDecimal(value.to_string(), format!("{:.2}", hours)));
        return Ok(());
    }

    let hours: f64 = value
        .parse()
        .map_err(|_| anyhow!("{}", Message::InvalidConversionInput(value.to_string())))?;
    msg_print!(Message::ConvertedToClock(value.to_string(), decimal_hours_to_clock(hours)));
    Ok(())
}
