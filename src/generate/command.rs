//! Source of the `gen_cmake_command` function embedded in the setup script.
//!
//! The function receives the parsed script arguments and returns the cmake
//! invocation as one string. Entries are appended in a fixed order:
//!
//! 1. `export` expressions (environment prefixes such as `FC=gfortran`)
//! 2. the cmake executable
//! 3. `define` expressions (`-D` cache entries)
//! 4. `-DCMAKE_BUILD_TYPE`
//! 5. `-G <generator>`
//! 6. `--cmake-options`, when not the empty default
//! 7. `-DCMAKE_INSTALL_PREFIX`, when `--prefix` is given
//!
//! Expressions are spliced in verbatim. A malformed one only shows up when
//! the generated script is run.

use crate::config::CommandConfig;

/// Name of the generated function.
pub const COMMAND_FN: &str = "gen_cmake_command";

pub fn build_command_source(config: &CommandConfig) -> String {
    let mut s = Vec::new();
    s.push(format!("def {}(options, arguments):", COMMAND_FN));
    s.push("    \"\"\"".to_string());
    s.push("    Generate CMake command based on options and arguments.".to_string());
    s.push("    \"\"\"".to_string());
    s.push("    command = []".to_string());

    for env in &config.export {
        s.push(format!("    command.append({})", env));
    }

    s.push("    command.append(arguments['--cmake-executable'])".to_string());

    for definition in &config.define {
        s.push(format!("    command.append({})", definition));
    }

    s.push("    command.append('-DCMAKE_BUILD_TYPE={0}'.format(arguments['--type']))".to_string());
    s.push("    command.append('-G \"{0}\"'.format(arguments['--generator']))".to_string());
    s.push("    if arguments['--cmake-options'] != \"''\":".to_string());
    s.push("        command.append(arguments['--cmake-options'])".to_string());
    s.push("    if arguments['--prefix']:".to_string());
    s.push(
        "        command.append('-DCMAKE_INSTALL_PREFIX=\"{0}\"'.format(arguments['--prefix']))"
            .to_string(),
    );
    s.push(String::new());
    s.push("    return ' '.join(command)".to_string());

    s.join("\n")
}
