//! Main menu: choice parsing and the interactive dispatch loop.
//!
//! The loop lives in the library rather than the binary so it can be
//! driven end-to-end by scripted input in tests.

use std::path::Path;
use std::str::FromStr;

use colored::Colorize;
use thiserror::Error;

use crate::input::Input;
use crate::pgp::{self, Gpg, PgpError};
use crate::ssh::{self, SshError, SshKeygen};

/// Errors surfaced by the menu loop.
///
/// Anything that reaches this type is fatal: export failures are already
/// handled inside the PGP flow and never arrive here.
#[derive(Error, Debug)]
pub enum MenuError {
    #[error(transparent)]
    Pgp(#[from] PgpError),

    #[error(transparent)]
    Ssh(#[from] SshError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    GeneratePgp,
    GenerateSsh,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuChoice::GeneratePgp),
            "2" => Ok(MenuChoice::GenerateSsh),
            "0" => Ok(MenuChoice::Exit),
            other => Err(format!("invalid option: '{other}'")),
        }
    }
}

/// Print the fixed three-option menu.
fn print_menu() {
    println!();
    println!("{}", "=== KEY GENERATION ===".bold());
    println!("  {} Generate PGP key", "1)".cyan());
    println!("  {} Generate SSH key", "2)".cyan());
    println!("  {} Exit", "0)".cyan());
}

/// Run the interactive menu loop until the user chooses to exit.
///
/// Invalid selections are reported and the menu is redisplayed. Key
/// generation failures (gpg batch generation, ssh-keygen) propagate out of
/// the loop and terminate the program at the binary's error boundary.
pub async fn run(
    input: &mut Input,
    gpg: &Gpg,
    keygen: &SshKeygen,
    output_root: &Path,
) -> Result<(), MenuError> {
    loop {
        print_menu();
        let selection = input.prompt("Select an option").await?;

        match selection.parse::<MenuChoice>() {
            Ok(MenuChoice::GeneratePgp) => pgp::run(input, gpg, output_root).await?,
            Ok(MenuChoice::GenerateSsh) => ssh::run(input, keygen, output_root).await?,
            Ok(MenuChoice::Exit) => {
                println!("Exiting...");
                return Ok(());
            }
            Err(e) => {
                println!(
                    "  {} {}",
                    "✖".red().bold(),
                    format!("{e}, try again.").red(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pgp_choice() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::GeneratePgp);
    }

    #[test]
    fn parse_ssh_choice() {
        assert_eq!("2".parse::<MenuChoice>().unwrap(), MenuChoice::GenerateSsh);
    }

    #[test]
    fn parse_exit_choice() {
        assert_eq!("0".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn parse_invalid_choice() {
        let err = "3".parse::<MenuChoice>().unwrap_err();
        assert!(err.contains("invalid option"));
        assert!(err.contains('3'));
    }

    #[test]
    fn parse_is_exact_not_prefix() {
        assert!("10".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }
}
