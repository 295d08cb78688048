//! Setup script generation.
//!
//! The generated script parses its own arguments with the `docopt` package
//! shipped next to it, optionally hands them to a user extension, and then
//! calls the runtime `configure` routine with the assembled cmake command.

use super::command::{COMMAND_FN, build_command_source};
use super::notice::autogenerated_notice;
use super::options::{CliOption, align_options, builtin_options};
use crate::clock::Clock;
use crate::config::CommandConfig;

/// Runtime package the generated script imports `configure` and `docopt` from.
pub const RUNTIME_PACKAGE: &str = "autocmake";

/// Optional user module whose hook post-processes the parsed arguments.
///
/// The script only calls the hook when the module can be imported at run
/// time, so enabling it for projects without the module is harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub module: String,
    pub hook: String,
}

impl Extension {
    pub fn new(module: impl Into<String>, hook: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            hook: hook.into(),
        }
    }
}

impl Default for Extension {
    fn default() -> Self {
        Self::new("extensions", "postprocess_args")
    }
}

/// User options from `docopt` lines followed by the built-in ones.
pub fn collect_options(config: &CommandConfig) -> Vec<CliOption> {
    let mut options: Vec<CliOption> = config
        .docopt
        .iter()
        .filter_map(|line| CliOption::parse(line))
        .collect();
    options.extend(builtin_options());
    options
}

pub fn build_setup_script(
    config: &CommandConfig,
    relative_path: &str,
    script_name: &str,
    extension: Option<&Extension>,
    clock: &impl Clock,
) -> String {
    let relative_path = relative_path.replace('\\', "/");
    let mut s: Vec<String> = Vec::new();

    s.push("#!/usr/bin/env python3".to_string());
    s.push(String::new());
    s.push(autogenerated_notice(clock));
    s.push(String::new());
    s.push("import os".to_string());
    s.push("import sys".to_string());
    s.push("assert sys.version_info >= (3, 6), 'Python >= 3.6 is required'".to_string());
    s.push(String::new());
    s.push(format!("sys.path.insert(0, '{}')", relative_path));
    s.push(format!("from {} import configure", RUNTIME_PACKAGE));
    s.push(format!("from {}.external import docopt", RUNTIME_PACKAGE));
    s.push(String::new());
    s.push(String::new());

    // usage block
    s.push("options = \"\"\"".to_string());
    s.push("Usage:".to_string());
    s.push(format!("  ./{} [options] [<builddir>]", script_name));
    s.push(format!("  ./{} (-h | --help)", script_name));
    s.push(String::new());
    s.push("Options:".to_string());
    s.push(align_options(&collect_options(config)));
    s.push("\"\"\"".to_string());
    s.push(String::new());
    s.push(String::new());

    s.push(build_command_source(config));
    s.push(String::new());
    s.push(String::new());

    s.push("# parse command line args".to_string());
    s.push("try:".to_string());
    s.push("    arguments = docopt.docopt(options, argv=None)".to_string());
    s.push("except docopt.DocoptExit:".to_string());
    s.push(r"    sys.stderr.write('ERROR: bad input to {0}\n'.format(sys.argv[0]))".to_string());
    s.push("    sys.stderr.write(options)".to_string());
    s.push("    sys.exit(-1)".to_string());
    s.push(String::new());

    if let Some(ext) = extension {
        s.push("# use extensions to validate/post-process args".to_string());
        s.push(format!("if configure.module_exists('{}'):", ext.module));
        s.push(format!("    import {}", ext.module));
        s.push(format!(
            "    arguments = {}.{}(sys.argv, arguments)",
            ext.module, ext.hook
        ));
        s.push(String::new());
    }

    s.push("root_directory = os.path.dirname(os.path.realpath(__file__))".to_string());
    s.push(String::new());
    s.push("build_path = arguments['<builddir>']".to_string());
    s.push(String::new());
    s.push("# create cmake command".to_string());
    s.push(format!(
        "cmake_command = '{{0}} {{1}}'.format({}(options, arguments), root_directory)",
        COMMAND_FN
    ));
    s.push(String::new());
    s.push("# run cmake".to_string());
    s.push(
        "configure.configure(root_directory, build_path, cmake_command, arguments['--show'])"
            .to_string(),
    );

    let mut text = s.join("\n");
    text.push('\n');
    text
}
