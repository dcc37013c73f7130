use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Reads newline-delimited prompts from `path`.
///
/// Each line is trimmed of surrounding whitespace; lines that end up empty
/// are dropped. The relative order of the remaining prompts is preserved.
/// A missing or unreadable file is an error; an empty result is not.
pub fn load_prompts(path: &Path) -> Result<Vec<String>> {
    debug!("Reading prompts from {}", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Input file '{}' not found or unreadable", path.display()))?;

    let prompts: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if prompts.is_empty() {
        warn!("No prompts found in '{}'", path.display());
    } else {
        debug!("Loaded {} prompts", prompts.len());
    }

    Ok(prompts)
}
