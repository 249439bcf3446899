//! keyforge — interactive PGP & SSH key pair generator.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use keyforge::constants;
use keyforge::env::Env;
use keyforge::input::Input;
use keyforge::menu;
use keyforge::pgp::Gpg;
use keyforge::ssh::SshKeygen;
use keyforge::workspace;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::Cli;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    let output_root = workspace::resolve_output_root(cli.output_dir, &env)
        .context("could not determine output directory")?;

    // Flag takes priority over the env var, then the PATH default.
    let gpg_program = cli
        .gpg_bin
        .or_else(|| env.var(constants::ENV_GPG).ok())
        .unwrap_or_else(|| constants::GPG_PROGRAM.to_string());
    let keygen_program = cli
        .ssh_keygen_bin
        .or_else(|| env.var(constants::ENV_SSH_KEYGEN).ok())
        .unwrap_or_else(|| constants::SSH_KEYGEN_PROGRAM.to_string());

    cli::print_banner();

    let mut input = Input::real();
    let gpg = Gpg::with_program(gpg_program);
    let keygen = SshKeygen::with_program(keygen_program);

    menu::run(&mut input, &gpg, &keygen, &output_root)
        .await
        .context("key generation aborted")?;

    Ok(())
}
