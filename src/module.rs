//! CMake module records and resolution.
//!
//! A module is a `*.cmake` fragment that the generated `CMakeLists.txt`
//! includes. Modules come from two places in `cmkgen.toml`:
//!
//! - `modules.files` - explicit paths, included in the listed order
//! - `modules.scan` - directories walked for `*.cmake` files
//!
//! All paths are relative to `setup.relative_path`.

use crate::config::GenConfig;
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use walkdir::WalkDir;

/// An includable CMake module: its file name and the directory holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub path: String,
}

impl Module {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Split a relative module file path into directory and file name.
    pub fn from_file(file: &str) -> Self {
        let p = Path::new(file);
        let name = p
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let path = p
            .parent()
            .map(|d| d.to_string_lossy().replace('\\', "/"))
            .unwrap_or_default();
        Self { name, path }
    }

    /// Name passed to `include()`: the file name without its last extension.
    pub fn include_name(&self) -> String {
        Path::new(&self.name)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// Collect the modules declared in `config`, scanning directories under
/// `root/<relative_path>`.
pub fn resolve_modules(root: &Path, config: &GenConfig) -> Result<Vec<Module>> {
    let mut modules: Vec<Module> = Vec::new();
    let mut push = |module: Module| {
        if !modules.contains(&module) {
            modules.push(module);
        }
    };

    for file in &config.modules.files {
        push(Module::from_file(file));
    }

    let base = root.join(&config.setup.relative_path);
    for dir in &config.modules.scan {
        for module in scan_dir(&base, dir)? {
            push(module);
        }
    }

    Ok(modules)
}

/// Walk `base/dir` for `*.cmake` files in file-name order.
///
/// Returned module paths are relative to `base`.
pub fn scan_dir(base: &Path, dir: &str) -> Result<Vec<Module>> {
    let scan_root = base.join(dir);
    if !scan_root.is_dir() {
        println!(
            "{} Module directory {} not found, skipping.",
            "!".yellow(),
            scan_root.display()
        );
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(&scan_root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
    {
        let entry =
            entry.with_context(|| format!("Failed to scan {}", scan_root.display()))?;
        let p = entry.path();
        if !entry.file_type().is_file() || p.extension().is_none_or(|ext| ext != "cmake") {
            continue;
        }
        let rel = p
            .strip_prefix(base)
            .with_context(|| format!("{} is outside {}", p.display(), base.display()))?;
        found.push(Module::from_file(&rel.to_string_lossy()));
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use std::fs;

    #[test]
    fn test_from_file_splits_dir_and_name() {
        let module = Module::from_file("custom/math/blas.cmake");
        assert_eq!(module.name, "blas.cmake");
        assert_eq!(module.path, "custom/math");
        assert_eq!(module.include_name(), "blas");
    }

    #[test]
    fn test_from_file_without_dir() {
        let module = Module::from_file("top.cmake");
        assert_eq!(module.name, "top.cmake");
        assert_eq!(module.path, "");
    }

    #[test]
    fn test_include_name_strips_only_last_extension() {
        assert_eq!(Module::new("a.b.cmake", "x").include_name(), "a.b");
        assert_eq!(Module::new("noext", "x").include_name(), "noext");
    }

    #[test]
    fn test_resolve_scans_in_name_order_and_dedups() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let custom = dir.path().join("cmake").join("custom");
        fs::create_dir_all(custom.join("nested"))?;
        fs::write(custom.join("zeta.cmake"), "")?;
        fs::write(custom.join("alpha.cmake"), "")?;
        fs::write(custom.join("notes.txt"), "")?;
        fs::write(custom.join("nested").join("mid.cmake"), "")?;

        let config = parse_config(
            r#"
[project]
name = "Foo"

[modules]
files = ["custom/zeta.cmake", "extra/first.cmake"]
scan = ["custom", "missing"]
"#,
        )?;

        let modules = resolve_modules(dir.path(), &config)?;
        let names: Vec<_> = modules
            .iter()
            .map(|m| format!("{}/{}", m.path, m.name))
            .collect();
        assert_eq!(
            names,
            vec![
                "custom/zeta.cmake",
                "extra/first.cmake",
                "custom/alpha.cmake",
                "custom/nested/mid.cmake",
            ]
        );
        Ok(())
    }
}
