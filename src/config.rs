use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default project file name, looked up in the project root.
pub const CONFIG_FILE: &str = "cmkgen.toml";

#[derive(Deserialize, Debug, Default)]
pub struct GenConfig {
    pub project: ProjectConfig,
    #[serde(default)]
    pub setup: SetupConfig,
    #[serde(default)]
    pub command: CommandConfig,
    #[serde(default)]
    pub modules: ModulesConfig,
    #[serde(default)]
    pub extension: ExtensionConfig,
}

#[derive(Deserialize, Debug, Default)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default = "default_min_cmake_version")]
    pub min_cmake_version: String,
}

#[derive(Deserialize, Debug)]
pub struct SetupConfig {
    #[serde(default = "default_script")]
    pub script: String,
    #[serde(default = "default_relative_path")]
    pub relative_path: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            script: default_script(),
            relative_path: default_relative_path(),
        }
    }
}

/// Expressions and option lines spliced into the generated setup script.
///
/// `export` and `define` entries are script expressions appended to the
/// command list as-is; `docopt` entries are option lines of the form
/// `--flag=<VALUE> Help text.`.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct CommandConfig {
    #[serde(default)]
    pub export: Vec<String>,
    #[serde(default)]
    pub define: Vec<String>,
    #[serde(default)]
    pub docopt: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ModulesConfig {
    /// Module files, relative to `setup.relative_path`.
    #[serde(default)]
    pub files: Vec<String>,
    /// Directories under `setup.relative_path` searched for `*.cmake` files.
    #[serde(default)]
    pub scan: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct ExtensionConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_extension_module")]
    pub module: String,
    #[serde(default = "default_extension_hook")]
    pub hook: String,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            module: default_extension_module(),
            hook: default_extension_hook(),
        }
    }
}

fn default_min_cmake_version() -> String {
    "3.14".to_string()
}

fn default_script() -> String {
    "setup".to_string()
}

fn default_relative_path() -> String {
    "cmake".to_string()
}

fn default_true() -> bool {
    true
}

fn default_extension_module() -> String {
    "extensions".to_string()
}

fn default_extension_hook() -> String {
    "postprocess_args".to_string()
}

/// Read, parse and validate a project file.
pub fn load_config(path: &Path) -> Result<GenConfig> {
    if !path.exists() {
        bail!(
            "{} not found.\n\n\
            💡 Tip: Run 'cmkgen init' to create one.",
            path.display()
        );
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid project file {}", path.display()))
}

/// Parse and validate project file contents.
pub fn parse_config(content: &str) -> Result<GenConfig> {
    let config: GenConfig =
        toml::from_str(content).context("Failed to parse TOML - check for syntax errors")?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &GenConfig) -> Result<()> {
    let name_re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_.+-]*$")?;
    let version_re = Regex::new(r"^\d+(\.\d+){0,3}$")?;

    let name = &config.project.name;
    if name.is_empty() {
        bail!("project.name must not be empty");
    }
    if !name_re.is_match(name) {
        bail!(
            "project.name '{}' is not a valid CMake project name (letters, digits, '_', '.', '+', '-')",
            name
        );
    }

    let version = &config.project.min_cmake_version;
    if !version_re.is_match(version) {
        bail!(
            "project.min_cmake_version '{}' must look like MAJOR[.MINOR[.PATCH[.TWEAK]]]",
            version
        );
    }

    let script = &config.setup.script;
    if script.is_empty() || script.contains(['/', '\\']) {
        bail!("setup.script '{}' must be a plain file name", script);
    }

    Ok(())
}

/// Starter project file written by `cmkgen init`.
pub fn starter_config(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
min_cmake_version = "3.14"

[setup]
# Name of the generated configure script.
script = "setup"
# Directory holding the runtime package and the cmake modules.
relative_path = "cmake"

[command]
# Expressions appended to the cmake command before the executable.
export = []
# Expressions appended to the cmake command after the executable.
define = []
# Extra script options, e.g. "--omp Enable OpenMP parallelization [default: False]."
docopt = []

[modules]
# Module files relative to `relative_path`, included in this order.
files = []
# Directories under `relative_path` scanned for *.cmake files.
scan = []

[extension]
enabled = true
module = "extensions"
hook = "postprocess_args"
"#
    )
}
