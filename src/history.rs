//! Shell history loading.
//!
//! Reads a zsh-style extended history file (`: <time>:<elapsed>;<command>`)
//! and turns it into a list of unique commands, most recent first.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Read and parse the history file at `path`.
///
/// A missing or unreadable file is an error; the tool has nothing to search
/// without it.
pub fn load_history(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read(path)
        .with_context(|| format!("Failed to read history file {}", path.display()))?;
    // zsh may store non-UTF-8 bytes; keep what decodes
    let text = String::from_utf8_lossy(&raw);
    let entries = parse_history(&text);
    info!("Loaded {} unique commands from {}", entries.len(), path.display());
    Ok(entries)
}

/// Extract unique commands from history text.
///
/// The command is everything after the first `;` on a line, trimmed. Lines
/// without a `;` or with an empty command are skipped. A repeated command
/// keeps the position of its first occurrence, and the result is reversed so
/// the newest commands come first.
pub fn parse_history(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut commands: Vec<String> = text
        .lines()
        .filter_map(extract_command)
        .filter(|cmd| seen.insert(*cmd))
        .map(str::to_string)
        .collect();
    commands.reverse();
    commands
}

fn extract_command(line: &str) -> Option<&str> {
    let (_, command) = line.split_once(';')?;
    let command = command.trim();
    (!command.is_empty()).then_some(command)
}
