//! gpg CLI wrapper.
//!
//! Shells out to `gpg` via `tokio::process::Command`. Generation inherits
//! the parent's stdio so gpg's own progress output stays visible; exports
//! capture stdout and write it to the destination file.

use std::path::Path;

use super::{ExportFormat, PgpError};
use crate::constants;

/// Handle to the external key-management binary.
#[derive(Debug, Clone)]
pub struct Gpg {
    program: String,
}

impl Gpg {
    /// Use the default `gpg` binary from PATH.
    pub fn new() -> Self {
        Self::with_program(constants::GPG_PROGRAM)
    }

    /// Use a specific binary, e.g. an absolute path or a test stub.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `gpg --batch --generate-key <batch_file>`.
    pub async fn generate_key(&self, batch_file: &Path) -> Result<(), PgpError> {
        let status = tokio::process::Command::new(&self.program)
            .arg("--batch")
            .arg("--generate-key")
            .arg(batch_file)
            .status()
            .await
            .map_err(|e| PgpError::Gpg(format!("failed to run {}: {e}", self.program)))?;

        if !status.success() {
            return Err(PgpError::Gpg(format!(
                "key generation failed (exit {status})"
            )));
        }
        Ok(())
    }

    /// Export public key material for `identity` into `dest`.
    pub async fn export_public(
        &self,
        identity: &str,
        format: ExportFormat,
        dest: &Path,
    ) -> Result<(), PgpError> {
        self.export("--export", identity, format, dest).await
    }

    /// Export public+secret key material for `identity` into `dest`.
    pub async fn export_secret(
        &self,
        identity: &str,
        format: ExportFormat,
        dest: &Path,
    ) -> Result<(), PgpError> {
        self.export("--export-secret-keys", identity, format, dest)
            .await
    }

    async fn export(
        &self,
        export_arg: &str,
        identity: &str,
        format: ExportFormat,
        dest: &Path,
    ) -> Result<(), PgpError> {
        let output = tokio::process::Command::new(&self.program)
            .args([format.flag(), export_arg, identity])
            .output()
            .await
            .map_err(|e| PgpError::Gpg(format!("failed to run {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PgpError::Gpg(format!(
                "{export_arg} failed (exit {}): {stderr}",
                output.status
            )));
        }

        tokio::fs::write(dest, &output.stdout).await?;
        Ok(())
    }
}

impl Default for Gpg {
    fn default() -> Self {
        Self::new()
    }
}
