//! Modules command handler
//!
//! Handles `cmkgen modules`, printing the resolved include list and the
//! search paths the generated `CMakeLists.txt` will register.

use anyhow::Result;
use colored::*;
use std::path::Path;

use super::generate::load_project;
use crate::generate::{cmake_module_path, module_search_paths};

pub fn list_modules(root: &Path, explicit_config: Option<&Path>) -> Result<()> {
    let (config, modules) = load_project(root, explicit_config)?;
    let relative_path = &config.setup.relative_path;

    if modules.is_empty() {
        println!("{} No modules configured.", "!".yellow());
    } else {
        println!("{} Included modules ({}):", "📦".blue(), modules.len());
        for m in &modules {
            println!(
                "   {} {}",
                m.include_name().bold(),
                format!("({})", cmake_module_path(relative_path, &m.path)).dimmed()
            );
        }
    }

    println!("{} Module search paths:", "📂".blue());
    for path in module_search_paths(relative_path, &modules) {
        println!("   {}", path);
    }

    Ok(())
}
