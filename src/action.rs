//! Terminal actions and their rendering
//!
//! Each invocation produces exactly one `Action`, rendered once to the
//! process streams. Stdout is the protocol channel consumed by the shell
//! wrapper: a line starting with `cd ` means "change directory and open an
//! editor there", anything else is informational text. Keeping the action a
//! tagged value keeps the dispatch logic testable without spawning a shell.

use anyhow::Result;
use colored::Colorize;
use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::git::worktree::WorktreeRecord;

/// Output format for the worktree listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Plain,
    Json,
}

/// The single terminal result of a command.
#[derive(Debug)]
pub enum Action {
    /// Emit the `cd <path> && <editor> .` protocol line.
    ChangeDirectory(PathBuf),
    /// Print the worktree listing.
    Listing {
        records: Vec<WorktreeRecord>,
        format: ListFormat,
    },
    /// A creation conflict where the worktree directory already exists: the
    /// conflict is reported, but the path is still surfaced so the caller
    /// can jump there.
    ConflictingWorktree { message: String, path: PathBuf },
}

impl Action {
    /// Render to the given streams and return the process exit code.
    pub fn render(
        &self,
        config: &Config,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<i32> {
        match self {
            Self::ChangeDirectory(path) => {
                writeln!(out, "{}", change_directory_line(path, config))?;
                Ok(0)
            }
            Self::Listing { records, format } => {
                match format {
                    ListFormat::Json => {
                        writeln!(out, "{}", serde_json::to_string_pretty(records)?)?;
                    }
                    ListFormat::Plain => {
                        if records.is_empty() {
                            writeln!(out, "(no worktrees)")?;
                        } else {
                            writeln!(out, "Worktrees:")?;
                            for record in records {
                                let branch = record.branch.as_deref().unwrap_or("(detached)");
                                writeln!(out, "  {}  {}", record.path.display(), branch)?;
                            }
                        }
                    }
                }
                Ok(0)
            }
            Self::ConflictingWorktree { message, path } => {
                writeln!(err, "{} {message}", "✗".red().bold())?;
                writeln!(out, "{}", change_directory_line(path, config))?;
                Ok(1)
            }
        }
    }
}

/// Build the `cd <path> && <editor> .` protocol line.
fn change_directory_line(path: &Path, config: &Config) -> String {
    let escaped = shell_escape::escape(Cow::from(path.to_string_lossy().into_owned()));
    format!("cd {} && {} .", escaped, config.editor)
}
