//! Extract command handler.
//!
//! Thin I/O glue around the extraction pipeline: read whole file, run the
//! core, write whole file, report counts and size reduction. Each input is
//! an independent unit of work, so multiple files run through rayon.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rayon::prelude::*;

use crate::config::Config;
use crate::extractor::{ConversationExtractor, ExtractionStats};
use crate::files::filename::derive_output_path;
use crate::milestone::HandoffDir;

/// Result of cleaning one file, for reporting.
pub struct ExtractOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub messages: usize,
    pub stats: ExtractionStats,
}

/// Handle the extract command.
#[cfg(not(tarpaulin_include))]
pub fn handle(files: &[String], output: Option<&str>, handoffs: Option<&str>) -> Result<()> {
    let config = Config::load()?;

    let inputs = resolve_inputs(files, handoffs)?;
    if inputs.is_empty() {
        bail!(
            "No transcript files to process.\nPass one or more exported files, or use --handoffs with pending exports in <dir>/0-system/chat_history."
        );
    }
    if output.is_some() && inputs.len() > 1 {
        bail!(
            "--output only works with a single input file ({} given)",
            inputs.len()
        );
    }

    let jobs = plan_outputs(&inputs, output, handoffs, &config)?;

    let outcomes: Vec<(PathBuf, Result<ExtractOutcome>)> = if jobs.len() == 1 {
        jobs.iter()
            .map(|(input, out)| (input.clone(), process_file(input, out)))
            .collect()
    } else {
        // Independent, side-effect-free units of work - safe to fan out.
        jobs.par_iter()
            .map(|(input, out)| (input.clone(), process_file(input, out)))
            .collect()
    };

    let mut failed = 0;
    for (input, outcome) in &outcomes {
        match outcome {
            Ok(outcome) => report(outcome),
            Err(e) => {
                eprintln!("Failed: {}: {:#}", input.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed", failed, outcomes.len());
    }
    Ok(())
}

/// Expand CLI arguments into the list of input files.
///
/// With no explicit files but a handoff directory, every export waiting in
/// its chat_history area is processed.
fn resolve_inputs(files: &[String], handoffs: Option<&str>) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return Ok(files.iter().map(PathBuf::from).collect());
    }

    let Some(dir) = handoffs else {
        return Ok(Vec::new());
    };

    let history = HandoffDir::new(dir).chat_history_dir();
    if !history.is_dir() {
        return Ok(Vec::new());
    }

    let mut exports: Vec<PathBuf> = fs::read_dir(&history)
        .with_context(|| format!("Failed to read {}", history.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && matches!(
                    p.extension().and_then(|e| e.to_str()),
                    Some("md") | Some("txt")
                )
        })
        .collect();
    exports.sort();
    Ok(exports)
}

/// Pair each input with its output path.
///
/// Priority: explicit --output, then the next numbered slot in the handoff
/// directory, then the configured suffix next to the input.
fn plan_outputs(
    inputs: &[PathBuf],
    output: Option<&str>,
    handoffs: Option<&str>,
    config: &Config,
) -> Result<Vec<(PathBuf, PathBuf)>> {
    if let Some(out) = output {
        let input = inputs[0].clone();
        return Ok(vec![(input, PathBuf::from(out))]);
    }

    if let Some(dir) = handoffs {
        let handoff_dir = HandoffDir::new(dir);
        let base = handoff_dir.next_handoff_number()?;
        return Ok(inputs
            .iter()
            .enumerate()
            .map(|(i, input)| {
                let number = base + i as u32;
                let out = handoff_dir
                    .root()
                    .join(format!("{}-chat_transcript.md", number));
                (input.clone(), out)
            })
            .collect());
    }

    let suffix = &config.extract.output_suffix;
    Ok(inputs
        .iter()
        .map(|input| (input.clone(), derive_output_path(input, suffix)))
        .collect())
}

/// Clean one transcript file.
///
/// Fails before writing anything when the input cannot be read or decoded,
/// so a failed run never leaves a partial output behind.
fn process_file(input: &Path, output: &Path) -> Result<ExtractOutcome> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read transcript: {}", input.display()))?;

    let mut extractor = ConversationExtractor::new();
    let extraction = extractor.extract(&raw);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    fs::write(output, &extraction.rendered)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    Ok(ExtractOutcome {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        messages: extraction.conversation.len(),
        stats: extraction.stats,
    })
}

fn report(outcome: &ExtractOutcome) {
    if outcome.messages == 0 {
        println!(
            "No messages extracted from {} (no speaker headers matched)",
            outcome.input.display()
        );
        return;
    }
    println!(
        "Extracted {} messages -> {}",
        outcome.messages,
        outcome.output.display()
    );
    println!("{}", outcome.stats.summary());
}
