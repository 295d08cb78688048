//! CLI Command handlers
//!
//! This module contains the implementation of CLI command handlers
//! extracted from main.rs for better organization.

pub mod generate;
pub mod init;
pub mod modules;
