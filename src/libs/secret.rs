//! Encrypted on-disk storage for the backend access token.
//!
//! The token is encrypted with AES-256-CBC (PKCS7 padding) using the key and
//! IV embedded at build time by `build.rs`, then base64-encoded into a file in
//! the application data directory. It is never written to `config.json`.
//!
//! ```rust,no_run
//! use paydesk::libs::secret::Secret;
//!
//! let secret = Secret::new(".api_token", "Enter your API access token");
//! let token = secret.get_or_prompt()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::{anyhow, Result};
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    prompt: String,
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(secret_name: &str, prompt: &str) -> Self {
        let secret_file_path = DataStorage::new().get_path(secret_name).unwrap_or_else(|_| PathBuf::from(secret_name));

        Self {
            prompt: prompt.to_owned(),
            secret_file_path,
            key: APP_METADATA_ENCRYPTION_KEY.to_vec(),
            iv: APP_METADATA_ENCRYPTION_IV.to_vec(),
        }
    }

    /// Reads the stored value without prompting.
    pub fn get(&self) -> Option<String> {
        if fs::metadata(&self.secret_file_path).is_err() {
            return None;
        }
        self.decrypt().ok()
    }

    /// Returns the stored value, prompting for it when absent or unreadable.
    pub fn get_or_prompt(&self) -> Result<String> {
        match self.get() {
            Some(value) => Ok(value),
            None => self.prompt(),
        }
    }

    /// Prompts interactively and stores the answer.
    pub fn prompt(&self) -> Result<String> {
        let value = Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?;
        self.store(&value)?;
        Ok(value)
    }

    pub fn store(&self, value: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv).map_err(|e| anyhow!("{}", e))?;
        let encoded = BASE64_STANDARD.encode(cipher.encrypt_vec(value.as_bytes()));

        if let Some(parent) = self.secret_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        File::create(&self.secret_file_path)?.write_all(encoded.as_bytes())?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.secret_file_path.exists() {
            fs::remove_file(&self.secret_file_path)?;
        }
        Ok(())
    }

    fn decrypt(&self) -> Result<String> {
        let mut encoded = String::new();
        File::open(&self.secret_file_path)?.read_to_string(&mut encoded)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv).map_err(|e| anyhow!("{}", e))?;
        let plaintext = cipher.decrypt_vec(&ciphertext).map_err(|e| anyhow!("{}", e))?;
        Ok(String::from_utf8(plaintext)?)
    }
}
