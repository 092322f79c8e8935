//! Platform-specific location of the application's own files.
//!
//! Only configuration and the encrypted access token live here; attendance
//! data is never stored on the client.
//!
//! | Platform | Base directory                              |
//! |----------|---------------------------------------------|
//! | Windows  | `%LOCALAPPDATA%\backoffice\paydesk`         |
//! | macOS    | `~/Library/Application Support/backoffice/paydesk` |
//! | Linux    | `~/.local/share/backoffice/paydesk`         |

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "backoffice";
pub const APP_NAME: &str = "paydesk";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    /// Resolves the base directory from the current environment.
    ///
    /// `HOME` and `LOCALAPPDATA` are read on every call so tests can redirect
    /// them to a temporary directory.
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    /// Full path of `file_name`, creating the base directory if needed.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
