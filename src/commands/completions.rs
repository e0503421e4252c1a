//! Completions command handler

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

/// Handle completions command.
///
/// Generates a shell completion script for the given shell on stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle<C: CommandFactory>(shell: Option<CompletionShell>) -> Result<()> {
    let Some(shell) = shell else {
        eprintln!("Usage: agx completions --shell <bash|zsh|fish|powershell>");
        std::process::exit(1);
    };

    let mut cmd = C::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
