//! CLI definitions for AGX
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::version;

/// Build clap styles using our theme colors.
///
/// Maps theme colors to clap's styling system for consistent CLI appearance.
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default()) // Light gray for descriptions
        .valid(AnsiColor::White.on_default()) // Light gray for valid values
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "agx")]
#[command(about = "[ Agent Session Extractor ] - condense exported agent conversations for reuse!")]
#[command(
    long_about = "Agent Session Extractor (AGX) - Condense exported AI agent conversations.

AGX strips tool invocations, tool output, file dumps and duplicated
paragraphs from Roo-Code/Cline style transcript exports, keeping only the
dialogue and reasoning. The condensed file is safe to hand back to another
model without biasing it with stale file contents.

QUICK START:
    agx extract session.md         Clean one exported transcript
    agx extract a.md b.md c.md     Clean several exports in parallel
    agx milestone create auth-v1   Archive numbered transcripts
    agx milestone list             Show existing milestones

HANDOFF WORKFLOW:
    agx extract export.md --handoffs handoffs
                                   Write to the next numbered slot
                                   (handoffs/N-chat_transcript.md)

For more information, see: https://github.com/simon/agent-session-extractor"
)]
#[command(version = version::version_string())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the conversation from exported transcripts
    #[command(long_about = "Extract the core conversation from exported transcript files.

Removes tool calls, tool results, file contents, environment metadata and
repeated paragraphs while preserving user prompts, assistant answers and
thinking sections. Without --output, the cleaned file lands next to the
input with the configured suffix (default: '_clean').

EXAMPLES:
    agx extract session.md                     Write session_clean.md
    agx extract session.md -o condensed.md     Explicit output path
    agx extract a.md b.md                      Clean both, in parallel
    agx extract export.md --handoffs handoffs  Write handoffs/N-chat_transcript.md
    agx extract --handoffs handoffs            Clean every export waiting in
                                               handoffs/0-system/chat_history")]
    Extract {
        /// Transcript files to clean
        #[arg(help = "Exported transcript files to clean")]
        files: Vec<String>,
        /// Output path (single input only)
        #[arg(long, short, help = "Output path (only with a single input)")]
        output: Option<String>,
        /// Write numbered output into a handoff directory
        #[arg(long, help = "Handoff directory for numbered output")]
        handoffs: Option<String>,
    },

    /// Organize cleaned transcripts into milestone folders
    #[command(
        subcommand,
        long_about = "Archive numbered transcripts into milestone folders.

A milestone moves every numbered transcript file at the root of the
handoff directory into the next numbered folder, keeping the directory
ready for the next batch.

EXAMPLES:
    agx milestone create auth-refactor
    agx milestone create \"login flow\" --dir my-handoffs
    agx milestone list"
    )]
    Milestone(MilestoneCommands),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Option<CompletionShell>,
    },
}

#[derive(Subcommand)]
pub enum MilestoneCommands {
    /// Create a milestone folder from the current numbered transcripts
    Create {
        /// Milestone name (sanitized into the folder name)
        name: String,
        /// Handoff directory (defaults to the configured one)
        #[arg(long)]
        dir: Option<String>,
    },
    /// List existing milestone folders
    List {
        /// Handoff directory (defaults to the configured one)
        #[arg(long)]
        dir: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in editor
    Edit,
}
