//! SSH key flow: collect a filename and let ssh-keygen write the pair.
//!
//! Unlike the PGP flow there is no keyring and no export step — the tool
//! writes both files itself at the path we hand it.

pub mod keygen;

pub use keygen::SshKeygen;

use std::io;
use std::path::Path;

use colored::Colorize;
use thiserror::Error;

use crate::input::Input;
use crate::workspace;

/// Errors from the SSH flow.
#[derive(Error, Debug)]
pub enum SshError {
    #[error("ssh-keygen command failed: {0}")]
    Keygen(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Parameters for one SSH key pair.
#[derive(Debug, Clone)]
pub struct SshKeyRequest {
    /// Folder and file stem for the generated pair.
    pub key_name: String,
}

impl SshKeyRequest {
    /// Collect a request from a single prompt.
    pub async fn prompt(input: &mut Input) -> io::Result<Self> {
        let key_name = input
            .prompt("Enter SSH key filename (without extension)")
            .await?;
        Ok(Self { key_name })
    }
}

/// Run the interactive SSH flow.
///
/// RSA 2048-bit with an empty passphrase; ssh-keygen writes the private
/// key at `<dir>/<name>` and the public key at `<dir>/<name>.pub`.
pub async fn run(
    input: &mut Input,
    keygen: &SshKeygen,
    output_root: &Path,
) -> Result<(), SshError> {
    let req = SshKeyRequest::prompt(input).await?;
    let key_dir = workspace::key_dir(output_root, &req.key_name)?;
    let key_path = key_dir.join(&req.key_name);

    println!("  {} Generating SSH key pair...", "→".cyan());
    keygen.generate(&key_path).await?;

    println!("  {} SSH keys generated:", "✔".green().bold());
    println!("    private: {}", key_path.display());
    println!("    public:  {}.pub", key_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prompt_collects_key_name() {
        let mut input = Input::scripted(["  deploy  "]);
        let req = SshKeyRequest::prompt(&mut input).await.unwrap();
        assert_eq!(req.key_name, "deploy");
    }
}
