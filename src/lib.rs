//! # cmkgen - CMake boilerplate generator
//!
//! cmkgen turns a small `cmkgen.toml` into a `CMakeLists.txt` and an
//! executable `setup` script that drives the cmake configure step.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a starter project file
//! cmkgen init myproject
//!
//! # Write CMakeLists.txt and ./setup
//! cmkgen generate
//!
//! # Configure a build directory
//! ./setup --type=release build
//! ```
//!
//! ## Module Organization
//!
//! - [`generate`] - Text generation (the core)
//! - [`config`] - Project file parsing (`cmkgen.toml`)
//! - [`module`] - CMake module records and directory scanning
//! - [`clock`] - Injected time source for the generated notice
//! - [`commands`] - CLI command handlers

/// Injected clock for the copyright notice.
pub mod clock;

/// CLI command handlers extracted from main.
pub mod commands;

/// Project file parsing (`cmkgen.toml`).
pub mod config;

/// Text generation for `CMakeLists.txt` and the setup script.
pub mod generate;

/// CMake module records and resolution.
pub mod module;
