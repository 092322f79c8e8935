use crate::{
    api::{TOKEN_FILE, TOKEN_PROMPT},
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
        secret::Secret,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the saved configuration and the stored access token.
    #[arg(short, long)]
    delete: bool,

    /// Only replace the stored access token.
    #[arg(short, long)]
    token: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let secret = Secret::new(TOKEN_FILE, TOKEN_PROMPT);

    if init_args.delete {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_path.exists() {
            fs::remove_file(config_path)?;
        }
        secret.clear()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    if !init_args.token {
        Config::init()?.save()?;
        msg_success!(Message::ConfigSaved);
    }

    // A token is asked for on first setup or when explicitly replaced.
    if init_args.token || secret.get().is_none() {
        secret.prompt()?;
        msg_success!(Message::TokenSaved);
    }

    Ok(())
}
