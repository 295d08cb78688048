use super::notice::autogenerated_notice;
use crate::clock::Clock;
use crate::module::Module;
use std::collections::BTreeSet;
use std::path::Path;

/// Search-path entry always added so fetched modules resolve in tests.
pub const DOWNLOADED_DIR: &str = "downloaded";

/// Module search paths as written to `CMakeLists.txt`: `relative_path`
/// joined with each module directory and [`DOWNLOADED_DIR`], normalized,
/// deduplicated and sorted.
pub fn module_search_paths(relative_path: &str, modules: &[Module]) -> Vec<String> {
    let paths: BTreeSet<String> = modules
        .iter()
        .map(|m| m.path.as_str())
        .chain(std::iter::once(DOWNLOADED_DIR))
        .map(|dir| cmake_module_path(relative_path, dir))
        .collect();
    paths.into_iter().collect()
}

/// `relative_path/dir` with forward slashes, as CMake expects on every host.
pub fn cmake_module_path(relative_path: &str, dir: &str) -> String {
    let joined = if dir.is_empty() {
        Path::new(relative_path).to_path_buf()
    } else {
        Path::new(relative_path).join(dir)
    };
    joined.to_string_lossy().replace('\\', "/")
}

pub fn build_cmakelists_text(
    project_name: &str,
    min_version: &str,
    relative_path: &str,
    modules: &[Module],
    clock: &impl Clock,
) -> String {
    let mut s: Vec<String> = Vec::new();

    s.push(autogenerated_notice(clock));

    s.push(String::new());
    s.push("# set minimum cmake version".to_string());
    s.push(format!(
        "cmake_minimum_required(VERSION {} FATAL_ERROR)",
        min_version
    ));

    s.push(String::new());
    s.push("# project name".to_string());
    s.push(format!("project({})", project_name));

    s.push(String::new());
    s.push("# do not rebuild if rules (compiler flags) change".to_string());
    s.push("set(CMAKE_SKIP_RULE_DEPENDENCY TRUE)".to_string());

    s.push(String::new());
    s.push("# if CMAKE_BUILD_TYPE undefined, we set it to Debug".to_string());
    s.push("if(NOT CMAKE_BUILD_TYPE)".to_string());
    s.push("    set(CMAKE_BUILD_TYPE \"Debug\")".to_string());
    s.push("endif()".to_string());

    if !modules.is_empty() {
        s.push(String::new());
        s.push("# directories which hold included cmake modules".to_string());
    }
    for path in module_search_paths(relative_path, modules) {
        s.push(format!(
            "set(CMAKE_MODULE_PATH ${{CMAKE_MODULE_PATH}} ${{PROJECT_SOURCE_DIR}}/{})",
            path
        ));
    }

    if !modules.is_empty() {
        s.push(String::new());
        s.push("# included cmake modules".to_string());
    }
    for module in modules {
        s.push(format!("include({})", module.include_name()));
    }

    let mut text = s.join("\n");
    text.push('\n');
    text
}
