//! Handoff directory organization.
//!
//! Cleaned transcripts accumulate at the root of a handoff directory as
//! numbered files (`1-chat_transcript.md`, `2-fix-auth.md`, ...). A
//! milestone archives the current batch: the numbered files move into the
//! next numbered folder (`5-auth-refactor/`), and numbering continues from
//! there. The `0-` prefix is reserved for the system area and is never
//! archived.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use humansize::{format_size, BINARY};
use thiserror::Error;
use tracing::debug;

use crate::files::filename::sanitize_name;

/// Errors from handoff directory operations.
#[derive(Debug, Error)]
pub enum MilestoneError {
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("No numbered transcript files to archive in {}", path.display())]
    NoNumberedFiles { path: PathBuf },

    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A milestone folder and its contents.
#[derive(Debug, Clone)]
pub struct MilestoneInfo {
    pub path: PathBuf,
    pub name: String,
    pub number: u32,
    pub file_count: usize,
    pub total_size: u64,
    pub modified: DateTime<Local>,
    pub age_days: i64,
}

impl MilestoneInfo {
    /// Get human-readable size
    pub fn size_human(&self) -> String {
        format_size(self.total_size, BINARY)
    }
}

/// Result of creating a milestone.
#[derive(Debug, Clone)]
pub struct MilestoneReport {
    pub path: PathBuf,
    pub moved: Vec<PathBuf>,
}

/// A handoff directory holding numbered transcripts and milestone folders.
pub struct HandoffDir {
    root: PathBuf,
}

impl HandoffDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the surrounding tooling drops raw conversation exports.
    pub fn chat_history_dir(&self) -> PathBuf {
        self.root.join("0-system").join("chat_history")
    }

    /// Leading integer of a file or folder name, if it has one.
    fn leading_number(name: &str) -> Option<u32> {
        let digits: String = name.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            None
        } else {
            digits.parse().ok()
        }
    }

    /// Numbered transcript files at the root, sorted by number.
    ///
    /// Only plain `.md` files with a leading number count; the reserved
    /// `0-` prefix is skipped.
    pub fn numbered_files(&self) -> Result<Vec<PathBuf>, MilestoneError> {
        if !self.root.is_dir() {
            return Err(MilestoneError::NotADirectory {
                path: self.root.clone(),
            });
        }

        let mut numbered: Vec<(u32, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            match Self::leading_number(&name) {
                Some(0) | None => continue,
                Some(n) => numbered.push((n, path)),
            }
        }

        numbered.sort_by_key(|(n, _)| *n);
        Ok(numbered.into_iter().map(|(_, p)| p).collect())
    }

    /// Next free number for a transcript file.
    ///
    /// One past the highest leading number among the root's `.md` files;
    /// an empty or missing directory starts at 1.
    pub fn next_handoff_number(&self) -> Result<u32, MilestoneError> {
        if !self.root.exists() {
            return Ok(1);
        }
        let highest = self
            .numbered_files()?
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).and_then(Self::leading_number))
            .max()
            .unwrap_or(0);
        Ok(highest + 1)
    }

    /// Path for the next numbered cleaned transcript.
    pub fn next_transcript_path(&self) -> Result<PathBuf, MilestoneError> {
        let n = self.next_handoff_number()?;
        Ok(self.root.join(format!("{}-chat_transcript.md", n)))
    }

    /// Next free milestone number: one past the highest leading number of
    /// any root entry, files and folders alike, so transcripts and
    /// milestones share one sequence.
    pub fn next_milestone_number(&self) -> Result<u32, MilestoneError> {
        if !self.root.is_dir() {
            return Err(MilestoneError::NotADirectory {
                path: self.root.clone(),
            });
        }
        let mut highest = 0;
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(n) = Self::leading_number(&name) {
                highest = highest.max(n);
            }
        }
        Ok(highest + 1)
    }

    /// Archive the current numbered transcripts into a new milestone folder.
    pub fn create_milestone(&self, name: &str) -> Result<MilestoneReport, MilestoneError> {
        let files = self.numbered_files()?;
        if files.is_empty() {
            return Err(MilestoneError::NoNumberedFiles {
                path: self.root.clone(),
            });
        }

        let number = self.next_milestone_number()?;
        let folder = self
            .root
            .join(format!("{}-{}", number, sanitize_name(name)));
        fs::create_dir_all(&folder)?;

        let mut moved = Vec::with_capacity(files.len());
        for file in files {
            let file_name = file.file_name().map(PathBuf::from).unwrap_or_default();
            let target = folder.join(file_name);
            fs::rename(&file, &target)?;
            debug!(from = %file.display(), to = %target.display(), "archived transcript");
            moved.push(target);
        }

        Ok(MilestoneReport {
            path: folder,
            moved,
        })
    }

    /// Existing milestone folders, sorted by number.
    pub fn list_milestones(&self) -> Result<Vec<MilestoneInfo>, MilestoneError> {
        if !self.root.is_dir() {
            return Err(MilestoneError::NotADirectory {
                path: self.root.clone(),
            });
        }

        let mut milestones = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let number = match Self::leading_number(&name) {
                Some(0) | None => continue,
                Some(n) => n,
            };

            let mut file_count = 0;
            let mut total_size = 0;
            for file in fs::read_dir(&path)? {
                let file = file?;
                if file.path().is_file() {
                    file_count += 1;
                    total_size += file.metadata()?.len();
                }
            }

            let modified: DateTime<Local> = entry.metadata()?.modified()?.into();
            let age_days = (Local::now() - modified).num_days();

            milestones.push(MilestoneInfo {
                path,
                name,
                number,
                file_count,
                total_size,
                modified,
                age_days,
            });
        }

        milestones.sort_by_key(|m| m.number);
        Ok(milestones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, "content").unwrap();
    }

    #[test]
    fn next_handoff_number_starts_at_one() {
        let dir = tempfile::tempdir().unwrap();
        let handoffs = HandoffDir::new(dir.path());
        assert_eq!(handoffs.next_handoff_number().unwrap(), 1);
    }

    #[test]
    fn missing_directory_starts_at_one() {
        let dir = tempfile::tempdir().unwrap();
        let handoffs = HandoffDir::new(dir.path().join("does-not-exist"));
        assert_eq!(handoffs.next_handoff_number().unwrap(), 1);
    }

    #[test]
    fn next_handoff_number_is_one_past_highest() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("3-foo.md"));
        touch(&dir.path().join("12-bar.md"));
        touch(&dir.path().join("notes.md")); // unnumbered, ignored

        let handoffs = HandoffDir::new(dir.path());
        assert_eq!(handoffs.next_handoff_number().unwrap(), 13);
        assert_eq!(
            handoffs.next_transcript_path().unwrap(),
            dir.path().join("13-chat_transcript.md")
        );
    }

    #[test]
    fn zero_prefix_is_reserved() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("0-system.md"));

        let handoffs = HandoffDir::new(dir.path());
        assert!(handoffs.numbered_files().unwrap().is_empty());
        assert_eq!(handoffs.next_handoff_number().unwrap(), 1);
    }

    #[test]
    fn create_milestone_moves_numbered_files_only() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("1-first.md"));
        touch(&dir.path().join("2-second.md"));
        touch(&dir.path().join("README.md"));

        let handoffs = HandoffDir::new(dir.path());
        let report = handoffs.create_milestone("auth refactor").unwrap();

        assert_eq!(report.path, dir.path().join("3-auth-refactor"));
        assert_eq!(report.moved.len(), 2);
        assert!(report.path.join("1-first.md").is_file());
        assert!(report.path.join("2-second.md").is_file());
        assert!(dir.path().join("README.md").is_file());
        assert!(!dir.path().join("1-first.md").exists());
    }

    #[test]
    fn milestone_numbering_continues_past_existing_folders() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("4-older-milestone")).unwrap();
        touch(&dir.path().join("5-next.md"));

        let handoffs = HandoffDir::new(dir.path());
        let report = handoffs.create_milestone("newer").unwrap();

        assert_eq!(report.path, dir.path().join("6-newer"));
    }

    #[test]
    fn create_milestone_with_nothing_to_archive_fails() {
        let dir = tempfile::tempdir().unwrap();
        let handoffs = HandoffDir::new(dir.path());

        let err = handoffs.create_milestone("empty").unwrap_err();
        assert!(matches!(err, MilestoneError::NoNumberedFiles { .. }));
    }

    #[test]
    fn list_milestones_reports_counts_and_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let handoffs = HandoffDir::new(dir.path());
        touch(&dir.path().join("1-a.md"));
        touch(&dir.path().join("2-b.md"));
        handoffs.create_milestone("first batch").unwrap();
        fs::create_dir_all(dir.path().join("0-system")).unwrap();

        let milestones = handoffs.list_milestones().unwrap();

        assert_eq!(milestones.len(), 1);
        assert_eq!(milestones[0].number, 3);
        assert_eq!(milestones[0].file_count, 2);
        assert!(milestones[0].total_size > 0);
        assert_eq!(milestones[0].name, "3-first-batch");
    }
}
