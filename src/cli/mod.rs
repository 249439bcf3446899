//! CLI argument definitions and startup banner.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// Print the startup banner to stderr.
pub fn print_banner() {
    use colored::Colorize;
    use std::io::Write;
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "  {} {}",
        "keyforge".bold(),
        "· PGP & SSH key pair generation via gpg and ssh-keygen".dimmed(),
    );
    let _ = writeln!(handle);
    let _ = handle.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_banner_does_not_panic() {
        print_banner();
    }
}
