//! Text generation for `CMakeLists.txt` and the setup script.
//!
//! Everything here returns plain strings; writing files is left to the
//! caller (see [`crate::commands::generate`]). Given the same inputs and the
//! same clock, output is byte-for-byte identical.
//!
//! ## Example
//!
//! ```rust
//! use cmkgen::clock::FixedClock;
//! use cmkgen::generate::Generator;
//! use cmkgen::module::Module;
//!
//! let generator = Generator::with_clock(FixedClock::at_year(2026).unwrap());
//! let text = generator.cmakelists("Foo", "3.0", "cmake", &[Module::new("mpi.cmake", "custom")]);
//! assert!(text.contains("project(Foo)"));
//! assert!(text.contains("include(mpi)"));
//! ```

mod cmakelists;
mod command;
mod notice;
mod options;
mod setup;

pub use cmakelists::{DOWNLOADED_DIR, build_cmakelists_text, cmake_module_path, module_search_paths};
pub use command::{COMMAND_FN, build_command_source};
pub use notice::{FIRST_YEAR, autogenerated_notice, is_notice_line};
pub use options::{CliOption, align_options, builtin_options};
pub use setup::{Extension, RUNTIME_PACKAGE, build_setup_script, collect_options};

use crate::clock::{Clock, SystemClock};
use crate::config::{CommandConfig, GenConfig};
use crate::module::Module;

/// Produces the generated artifacts with an injected clock and optional
/// argument post-processing extension.
#[derive(Debug, Clone)]
pub struct Generator<C: Clock = SystemClock> {
    clock: C,
    extension: Option<Extension>,
}

impl Generator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Generator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Generator<C> {
    /// Generator using `clock`, with the default `extensions` hook enabled.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            extension: Some(Extension::default()),
        }
    }

    /// Replace the extension hook; `None` omits it from the setup script.
    pub fn extension(mut self, extension: Option<Extension>) -> Self {
        self.extension = extension;
        self
    }

    /// Apply the `[extension]` table of a project file.
    pub fn configured(self, config: &GenConfig) -> Self {
        let ext = &config.extension;
        let extension = ext
            .enabled
            .then(|| Extension::new(ext.module.clone(), ext.hook.clone()));
        self.extension(extension)
    }

    pub fn command_source(&self, config: &CommandConfig) -> String {
        build_command_source(config)
    }

    pub fn setup_script(
        &self,
        config: &CommandConfig,
        relative_path: &str,
        script_name: &str,
    ) -> String {
        build_setup_script(
            config,
            relative_path,
            script_name,
            self.extension.as_ref(),
            &self.clock,
        )
    }

    pub fn cmakelists(
        &self,
        project_name: &str,
        min_version: &str,
        relative_path: &str,
        modules: &[Module],
    ) -> String {
        build_cmakelists_text(
            project_name,
            min_version,
            relative_path,
            modules,
            &self.clock,
        )
    }

    /// Both artifacts for a loaded project: `(CMakeLists.txt, setup script)`.
    pub fn project(&self, config: &GenConfig, modules: &[Module]) -> (String, String) {
        let cmakelists = self.cmakelists(
            &config.project.name,
            &config.project.min_cmake_version,
            &config.setup.relative_path,
            modules,
        );
        let setup = self.setup_script(
            &config.command,
            &config.setup.relative_path,
            &config.setup.script,
        );
        (cmakelists, setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::parse_config;

    #[test]
    fn test_configured_disables_extension() {
        let config =
            parse_config("[project]\nname = \"Foo\"\n[extension]\nenabled = false\n").unwrap();
        let generator = Generator::with_clock(FixedClock::at_year(2026).unwrap()).configured(&config);
        let (_, setup) = generator.project(&config, &[]);
        assert!(!setup.contains("module_exists"));
    }

    #[test]
    fn test_project_artifacts() {
        let config = parse_config(
            r#"
[project]
name = "Foo"
min_cmake_version = "3.0"

[setup]
script = "setup"

[extension]
module = "my_ext"
"#,
        )
        .unwrap();
        let generator = Generator::with_clock(FixedClock::at_year(2026).unwrap()).configured(&config);
        let modules = vec![Module::new("mpi.cmake", "custom")];
        let (cmakelists, setup) = generator.project(&config, &modules);

        assert!(cmakelists.contains("cmake_minimum_required(VERSION 3.0 FATAL_ERROR)"));
        assert!(cmakelists.contains("${PROJECT_SOURCE_DIR}/cmake/custom)"));
        assert!(setup.contains("  ./setup [options] [<builddir>]"));
        assert!(setup.contains("    arguments = my_ext.postprocess_args(sys.argv, arguments)"));
        assert!(setup.contains("# Copyright (c) 2015-2026"));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let config = parse_config("[project]\nname = \"Foo\"\n").unwrap();
        let modules = vec![
            Module::new("b.cmake", "y"),
            Module::new("a.cmake", "x"),
            Module::new("c.cmake", "x"),
        ];
        let generator = Generator::with_clock(FixedClock::at_year(2026).unwrap());
        assert_eq!(
            generator.project(&config, &modules),
            generator.project(&config, &modules)
        );
    }

    #[test]
    fn test_command_source_embedded_in_setup() {
        let config = CommandConfig {
            define: vec!["'-DFOO=ON'".to_string()],
            ..Default::default()
        };
        let generator = Generator::with_clock(FixedClock::at_year(2026).unwrap());
        let setup = generator.setup_script(&config, "cmake", "setup");
        assert!(setup.contains(&generator.command_source(&config)));
    }
}
