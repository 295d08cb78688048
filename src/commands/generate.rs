//! Generate command handler
//!
//! Handles `cmkgen generate`: loads `cmkgen.toml`, resolves modules and
//! writes `CMakeLists.txt` plus the setup script into the project root.

use anyhow::{Context, Result, bail};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{self, GenConfig};
use crate::generate::{Generator, is_notice_line};
use crate::module::{self, Module};

pub const CMAKELISTS_FILE: &str = "CMakeLists.txt";

#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateOptions {
    /// Print the artifacts instead of writing them.
    pub show: bool,
    /// Fail if the files on disk differ from what would be generated.
    pub check: bool,
    pub verbose: bool,
}

/// A generated file and its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
    pub executable: bool,
}

/// Resolve the project file path: explicit, or `cmkgen.toml` under `root`.
pub fn config_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => root.join(p),
        None => root.join(config::CONFIG_FILE),
    }
}

/// Load the project at `root` and resolve its modules.
pub fn load_project(root: &Path, explicit: Option<&Path>) -> Result<(GenConfig, Vec<Module>)> {
    let config = config::load_config(&config_path(root, explicit))?;
    let modules = module::resolve_modules(root, &config)?;
    Ok((config, modules))
}

/// Render both artifacts for a loaded project.
pub fn render_artifacts<C: crate::clock::Clock>(
    generator: &Generator<C>,
    root: &Path,
    config: &GenConfig,
    modules: &[Module],
) -> Vec<Artifact> {
    let (cmakelists, setup) = generator.project(config, modules);
    vec![
        Artifact {
            path: root.join(CMAKELISTS_FILE),
            content: cmakelists,
            executable: false,
        },
        Artifact {
            path: root.join(&config.setup.script),
            content: setup,
            executable: true,
        },
    ]
}

/// Drop notice lines so files generated in different years compare equal.
///
/// Splits on `\n` only: line endings and the final newline must match.
fn without_notice(text: &str) -> Vec<&str> {
    text.split('\n').filter(|l| !is_notice_line(l)).collect()
}

/// Artifacts whose on-disk contents are missing or differ.
pub fn stale_artifacts(artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
    let mut stale = Vec::new();
    for artifact in artifacts {
        if !artifact.path.exists() {
            stale.push(artifact.path.clone());
            continue;
        }
        let existing = fs::read_to_string(&artifact.path)
            .with_context(|| format!("Failed to read {}", artifact.path.display()))?;
        if without_notice(&existing) != without_notice(&artifact.content) {
            stale.push(artifact.path.clone());
        }
    }
    Ok(stale)
}

pub fn write_artifact(artifact: &Artifact) -> Result<()> {
    fs::write(&artifact.path, &artifact.content)
        .with_context(|| format!("Failed to write {}", artifact.path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if artifact.executable {
            fs::set_permissions(&artifact.path, fs::Permissions::from_mode(0o755)).with_context(
                || format!("Failed to mark {} executable", artifact.path.display()),
            )?;
        }
    }

    Ok(())
}

/// Run the `cmkgen generate` command
pub fn handle_generate_command(
    root: &Path,
    explicit_config: Option<&Path>,
    options: &GenerateOptions,
) -> Result<()> {
    let (config, modules) = load_project(root, explicit_config)?;

    if options.verbose {
        println!(
            "{} Project {} (cmake >= {}), {} module(s)",
            "ℹ".blue(),
            config.project.name.bold(),
            config.project.min_cmake_version,
            modules.len()
        );
        for m in &modules {
            println!("   {} {}/{}", "-".dimmed(), m.path, m.name);
        }
    }

    let generator = Generator::new().configured(&config);
    let artifacts = render_artifacts(&generator, root, &config, &modules);

    if options.show {
        for artifact in &artifacts {
            println!("{} {}", "==>".cyan(), artifact.path.display());
            print!("{}", artifact.content);
        }
        return Ok(());
    }

    if options.check {
        let stale = stale_artifacts(&artifacts)?;
        if stale.is_empty() {
            println!("{} Generated files are up to date.", "✓".green());
            return Ok(());
        }
        for path in &stale {
            println!("{} {} is out of date", "x".red(), path.display());
        }
        bail!(
            "{} generated file(s) out of date. Run 'cmkgen generate' to refresh them.",
            stale.len()
        );
    }

    println!("{} Generating CMake files...", "⚙️".cyan());
    for artifact in &artifacts {
        write_artifact(artifact)?;
        println!("{} Wrote {}", "✓".green(), artifact.path.display());
    }
    println!(
        "   Configure with: ./{} <builddir>",
        config.setup.script.bold()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    const PROJECT: &str = r#"
[project]
name = "Foo"
min_cmake_version = "3.0"

[modules]
files = ["custom/mpi.cmake"]
"#;

    fn setup_project() -> Result<tempfile::TempDir> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join(config::CONFIG_FILE), PROJECT)?;
        Ok(dir)
    }

    #[test]
    fn test_config_path_resolution() {
        let root = Path::new("/work/proj");
        assert_eq!(config_path(root, None), root.join("cmkgen.toml"));
        assert_eq!(
            config_path(root, Some(Path::new("alt.toml"))),
            root.join("alt.toml")
        );
        assert_eq!(
            config_path(root, Some(Path::new("/etc/x.toml"))),
            PathBuf::from("/etc/x.toml")
        );
    }

    #[test]
    fn test_write_then_check_is_clean() -> Result<()> {
        let dir = setup_project()?;
        let (config, modules) = load_project(dir.path(), None)?;
        let generator = Generator::with_clock(FixedClock::at_year(2026).unwrap()).configured(&config);
        let artifacts = render_artifacts(&generator, dir.path(), &config, &modules);

        assert_eq!(stale_artifacts(&artifacts)?.len(), 2);
        for artifact in &artifacts {
            write_artifact(artifact)?;
        }
        assert!(stale_artifacts(&artifacts)?.is_empty());

        let cmakelists = fs::read_to_string(dir.path().join(CMAKELISTS_FILE))?;
        assert!(cmakelists.contains("include(mpi)"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(dir.path().join("setup"))?.permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
        Ok(())
    }

    #[test]
    fn test_check_ignores_notice_year() -> Result<()> {
        let dir = setup_project()?;
        let (config, modules) = load_project(dir.path(), None)?;

        let old = Generator::with_clock(FixedClock::at_year(2020).unwrap()).configured(&config);
        for artifact in render_artifacts(&old, dir.path(), &config, &modules) {
            write_artifact(&artifact)?;
        }

        let new = Generator::with_clock(FixedClock::at_year(2026).unwrap()).configured(&config);
        let artifacts = render_artifacts(&new, dir.path(), &config, &modules);
        assert!(stale_artifacts(&artifacts)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_check_detects_edits() -> Result<()> {
        let dir = setup_project()?;
        let (config, modules) = load_project(dir.path(), None)?;
        let generator = Generator::with_clock(FixedClock::at_year(2026).unwrap()).configured(&config);
        let artifacts = render_artifacts(&generator, dir.path(), &config, &modules);
        for artifact in &artifacts {
            write_artifact(artifact)?;
        }

        let path = dir.path().join(CMAKELISTS_FILE);
        let edited = fs::read_to_string(&path)?.replace("project(Foo)", "project(Bar)");
        fs::write(&path, edited)?;

        assert_eq!(stale_artifacts(&artifacts)?, vec![path]);
        Ok(())
    }

    #[test]
    fn test_check_detects_line_ending_changes() -> Result<()> {
        let dir = setup_project()?;
        let (config, modules) = load_project(dir.path(), None)?;
        let generator = Generator::with_clock(FixedClock::at_year(2026).unwrap()).configured(&config);
        let artifacts = render_artifacts(&generator, dir.path(), &config, &modules);

        let cmakelists = &artifacts[0];
        fs::write(&cmakelists.path, cmakelists.content.replace('\n', "\r\n"))?;
        let setup = &artifacts[1];
        fs::write(&setup.path, setup.content.trim_end_matches('\n'))?;

        assert_eq!(
            stale_artifacts(&artifacts)?,
            vec![cmakelists.path.clone(), setup.path.clone()]
        );
        Ok(())
    }
}
