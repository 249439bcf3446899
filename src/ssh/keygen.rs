//! ssh-keygen CLI wrapper.
//!
//! Shells out to `ssh-keygen` via `tokio::process::Command`, inheriting
//! stdio so the tool's own output (fingerprint, randomart) stays visible.

use std::path::Path;

use super::SshError;
use crate::constants;

/// Handle to the external SSH key generator binary.
#[derive(Debug, Clone)]
pub struct SshKeygen {
    program: String,
}

impl SshKeygen {
    /// Use the default `ssh-keygen` binary from PATH.
    pub fn new() -> Self {
        Self::with_program(constants::SSH_KEYGEN_PROGRAM)
    }

    /// Use a specific binary, e.g. an absolute path or a test stub.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `ssh-keygen -t rsa -b 2048 -f <key_path> -N ""`.
    ///
    /// The empty `-N` argument means no passphrase. ssh-keygen writes the
    /// private key at `key_path` and the public key at `key_path.pub`.
    pub async fn generate(&self, key_path: &Path) -> Result<(), SshError> {
        let status = tokio::process::Command::new(&self.program)
            .args(["-t", "rsa", "-b", "2048"])
            .arg("-f")
            .arg(key_path)
            .args(["-N", ""])
            .status()
            .await
            .map_err(|e| SshError::Keygen(format!("failed to run {}: {e}", self.program)))?;

        if !status.success() {
            return Err(SshError::Keygen(format!(
                "key generation failed (exit {status})"
            )));
        }
        Ok(())
    }
}

impl Default for SshKeygen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generate_succeeds_on_zero_exit() {
        let keygen = SshKeygen::with_program("true");
        let dir = tempfile::tempdir().unwrap();
        assert!(keygen.generate(&dir.path().join("key")).await.is_ok());
    }

    #[tokio::test]
    async fn generate_reports_non_zero_exit() {
        let keygen = SshKeygen::with_program("false");
        let dir = tempfile::tempdir().unwrap();

        let err = keygen.generate(&dir.path().join("key")).await.unwrap_err();
        assert!(
            err.to_string().contains("key generation failed"),
            "got: {err}"
        );
    }

    #[tokio::test]
    async fn generate_reports_missing_program() {
        let keygen = SshKeygen::with_program("/nonexistent/keyforge-ssh-keygen-stub");
        let dir = tempfile::tempdir().unwrap();

        let err = keygen.generate(&dir.path().join("key")).await.unwrap_err();
        assert!(err.to_string().contains("failed to run"), "got: {err}");
    }
}
