use super::connect;
use crate::{
    libs::{
        messages::Message,
        upload::{UploadFile, UploadKind},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::{anyhow, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct UploadArgs {
    #[arg(value_enum)]
    kind: UploadKind,

    #[arg(required = true)]
    path: PathBuf,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: UploadArgs) -> Result<()> {
    let file = UploadFile::load(&args.path, args.kind)?;

    match &file.preview {
        Some(preview) => {
            msg_print!(Message::UploadChecked(file.file_name.clone(), preview.rows, preview.encoding.to_string()));
            View::upload_preview(preview)?;
        }
        None => msg_print!(Message::UploadOpaque(file.file_name.clone())),
    }

    let (_, api) = connect()?;
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmUpload(file.file_name.clone(), api.url(file.kind.endpoint())).to_string())
            .default(true)
            .interact()?;
        if !confirmed {
            msg_info!(Message::UploadCancelled);
            return Ok(());
        }
    }

    api.upload_file(&file)
        .await
        .map_err(|e| anyhow!("{}", Message::UploadRejected(e.to_string())))?;
    msg_success!(Message::UploadAccepted(file.file_name.clone()));
    Ok(())
}
