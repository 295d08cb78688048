//! Init command handler
//!
//! Handles `cmkgen init`, which writes a starter `cmkgen.toml`.

use anyhow::{Context, Result, bail};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{CONFIG_FILE, starter_config};

/// Project name derived from a directory, falling back to `app`.
pub fn default_project_name(root: &Path) -> String {
    let dir = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let name: String = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || "_.+-".contains(c) {
                c
            } else {
                '_'
            }
        })
        .collect();

    match name.chars().next() {
        None => "app".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", name),
        Some(_) => name,
    }
}

/// Run the `cmkgen init` command. Returns the written path.
pub fn init_project(root: &Path, name: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    let name = name
        .map(str::to_string)
        .unwrap_or_else(|| default_project_name(root));

    // Reject names the loader would refuse.
    crate::config::parse_config(&starter_config(&name))
        .with_context(|| format!("Cannot initialize project '{}'", name))?;

    fs::write(&path, starter_config(&name))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} Created {} for project {}",
        "✓".green(),
        path.display(),
        name.bold()
    );
    println!("   Next: {}", "cmkgen generate".bold().white());

    Ok(path)
}
