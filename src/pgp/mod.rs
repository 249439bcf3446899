//! PGP key flow: collect identity parameters, generate a key pair through
//! gpg's unattended batch mode, and export the public/secret material into
//! the key directory.
//!
//! Generation failures are fatal and propagate out of [`run`]; export
//! failures are reported and swallowed so control returns to the menu.

pub mod batch;
pub mod gpg;

pub use gpg::Gpg;

use std::io;
use std::path::{Path, PathBuf};

use colored::Colorize;
use thiserror::Error;

use crate::constants;
use crate::input::Input;
use crate::workspace;

/// Errors from the PGP flow.
#[derive(Error, Debug)]
pub enum PgpError {
    #[error("gpg command failed: {0}")]
    Gpg(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Export encoding shared by both artifacts of a key pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// ASCII-armored text output.
    Armored,
    /// Raw binary output.
    Binary,
}

impl ExportFormat {
    /// The gpg flag selecting this encoding.
    pub fn flag(self) -> &'static str {
        match self {
            ExportFormat::Armored => "--armor",
            ExportFormat::Binary => "--no-armor",
        }
    }
}

/// Identity parameters for one PGP key pair.
///
/// Collected fresh per flow invocation and discarded afterwards.
#[derive(Debug, Clone)]
pub struct KeyRequest {
    /// Folder and file stem for the generated artifacts.
    pub key_name: String,
    pub real_name: String,
    pub email: String,
    /// Free-form gpg duration ("1y", "2m") or "0" for no expiry.
    pub expire_date: String,
    /// Kept as text; gpg performs the validation.
    pub key_length: String,
    pub format: ExportFormat,
}

impl KeyRequest {
    /// Collect a request from sequential prompts.
    pub async fn prompt(input: &mut Input) -> io::Result<Self> {
        let key_name = input
            .prompt("Enter key name (used for folder/filenames)")
            .await?;
        let real_name = input.prompt("Enter real name").await?;
        let email = input.prompt("Enter email").await?;
        let expire_date = input
            .prompt("Enter key validity (e.g. 1y, 2m, 0 = never)")
            .await?;
        let key_length = input
            .prompt_or("Enter key length (default 2048)", constants::DEFAULT_KEY_LENGTH)
            .await?;
        let armored = input.confirm("Export keys in armored format? (y/n)").await?;

        Ok(Self {
            key_name,
            real_name,
            email,
            expire_date,
            key_length,
            format: if armored {
                ExportFormat::Armored
            } else {
                ExportFormat::Binary
            },
        })
    }

    /// Path of the exported public key inside `key_dir`.
    pub fn public_key_path(&self, key_dir: &Path) -> PathBuf {
        key_dir.join(format!("{}{}", self.key_name, constants::PUBLIC_KEY_SUFFIX))
    }

    /// Path of the exported private key inside `key_dir`.
    pub fn private_key_path(&self, key_dir: &Path) -> PathBuf {
        key_dir.join(format!("{}{}", self.key_name, constants::PRIVATE_KEY_SUFFIX))
    }
}

/// Generate the key pair into the gpg keyring.
///
/// Writes the batch-input file into the key directory, runs
/// `gpg --batch --generate-key`, and returns the key directory. The batch
/// file is removed on every exit path, including generation failure.
pub async fn generate(req: &KeyRequest, gpg: &Gpg, output_root: &Path) -> Result<PathBuf, PgpError> {
    let key_dir = workspace::key_dir(output_root, &req.key_name)?;
    let batch_file = batch::BatchFile::write(&key_dir, &req.key_name, &batch::render(req))?;

    println!("  {} Generating PGP key...", "→".cyan());
    gpg.generate_key(batch_file.path()).await?;

    Ok(key_dir)
}

/// Export the public and secret key material into `key_dir`.
///
/// The request's email is the keyring identity; both exports use the
/// request's single [`ExportFormat`].
pub async fn export(req: &KeyRequest, gpg: &Gpg, key_dir: &Path) -> Result<(), PgpError> {
    gpg.export_public(&req.email, req.format, &req.public_key_path(key_dir))
        .await?;
    gpg.export_secret(&req.email, req.format, &req.private_key_path(key_dir))
        .await?;
    Ok(())
}

/// Run the interactive PGP flow.
///
/// Export failures are caught here and reported; the generated keyring
/// entry and key directory are not rolled back.
pub async fn run(input: &mut Input, gpg: &Gpg, output_root: &Path) -> Result<(), PgpError> {
    let req = KeyRequest::prompt(input).await?;
    let key_dir = generate(&req, gpg, output_root).await?;

    println!("  {} Exporting keys to disk...", "→".cyan());
    match export(&req, gpg, &key_dir).await {
        Ok(()) => println!(
            "  {} PGP keys exported to {}",
            "✔".green().bold(),
            key_dir.display().to_string().bold(),
        ),
        Err(e) => println!(
            "  {} {}",
            "✖".red().bold(),
            format!("Export failed: {e}").red(),
        ),
    }

    Ok(())
}
