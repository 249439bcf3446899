//! Clap argument types.
//!
//! The tool is interactive-menu driven; the flags here only override
//! where artifacts land and which external binaries are invoked.

use clap::Parser;
use std::path::PathBuf;

/// Interactive generator for PGP and SSH key pairs.
///
/// Wraps `gpg` (batch-mode generation and export) and `ssh-keygen`,
/// saving each key pair into its own folder under the output root.
#[derive(Parser, Debug)]
#[command(name = "keyforge", version)]
pub struct Cli {
    /// Root directory for generated key folders (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Key-management binary to invoke (default: `gpg` on PATH).
    #[arg(long, value_name = "PROGRAM")]
    pub gpg_bin: Option<String>,

    /// SSH key generator binary to invoke (default: `ssh-keygen` on PATH).
    #[arg(long, value_name = "PROGRAM")]
    pub ssh_keygen_bin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_overrides() {
        let cli = Cli::try_parse_from(["keyforge"]).unwrap();
        assert!(cli.output_dir.is_none());
        assert!(cli.gpg_bin.is_none());
        assert!(cli.ssh_keygen_bin.is_none());
    }

    #[test]
    fn output_dir_parsed_long() {
        let cli = Cli::try_parse_from(["keyforge", "--output-dir", "/tmp/keys"]).unwrap();
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/keys")));
    }

    #[test]
    fn binary_overrides_parsed() {
        let cli = Cli::try_parse_from([
            "keyforge",
            "--gpg-bin",
            "/opt/gnupg/bin/gpg",
            "--ssh-keygen-bin",
            "/usr/local/bin/ssh-keygen",
        ])
        .unwrap();
        assert_eq!(cli.gpg_bin.as_deref(), Some("/opt/gnupg/bin/gpg"));
        assert_eq!(
            cli.ssh_keygen_bin.as_deref(),
            Some("/usr/local/bin/ssh-keygen"),
        );
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["keyforge", "--batch"]).is_err());
    }
}
