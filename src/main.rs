//! Agent Session Extractor (AGX) - CLI entry point

use anyhow::Result;
use clap::Parser;

use agx::cli::{Cli, Commands, ConfigCommands, MilestoneCommands};
use agx::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            files,
            output,
            handoffs,
        } => commands::extract::handle(&files, output.as_deref(), handoffs.as_deref()),
        Commands::Milestone(cmd) => match cmd {
            MilestoneCommands::Create { name, dir } => {
                commands::milestone::handle_create(&name, dir.as_deref())
            }
            MilestoneCommands::List { dir } => commands::milestone::handle_list(dir.as_deref()),
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
