//! Milestone command handlers.

use anyhow::Result;

use crate::commands::truncate_string;
use crate::config::Config;
use crate::milestone::{HandoffDir, MilestoneError};

/// Handle `milestone create`.
#[cfg(not(tarpaulin_include))]
pub fn handle_create(name: &str, dir: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let dir = dir.unwrap_or(&config.handoffs.directory);
    let handoffs = HandoffDir::new(dir);

    match handoffs.create_milestone(name) {
        Ok(report) => {
            println!("Created milestone: {}", report.path.display());
            for file in &report.moved {
                if let Some(name) = file.file_name() {
                    println!("  Archived: {}", name.to_string_lossy());
                }
            }
            println!();
            println!("Moved {} transcript files.", report.moved.len());
            Ok(())
        }
        Err(MilestoneError::NoNumberedFiles { path }) => {
            println!(
                "No numbered transcripts in {} - nothing to archive.",
                path.display()
            );
            println!("Run 'agx extract --handoffs {}' first.", dir);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Handle `milestone list`.
#[cfg(not(tarpaulin_include))]
pub fn handle_list(dir: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let dir = dir.unwrap_or(&config.handoffs.directory);
    let milestones = HandoffDir::new(dir).list_milestones()?;

    if milestones.is_empty() {
        println!("No milestones found in {}.", dir);
        return Ok(());
    }

    println!("Milestones: {} total", milestones.len());
    println!();
    println!("  #  | Age  | Files | Size       | Milestone");
    println!("-----+------+-------+------------+---------------------------");
    for milestone in &milestones {
        println!(
            "{:>3}  | {:>3}d | {:>5} | {:>10} | {}",
            milestone.number,
            milestone.age_days,
            milestone.file_count,
            milestone.size_human(),
            truncate_string(&milestone.name, 40)
        );
    }

    Ok(())
}
