//! # cmkgen CLI Entry Point
//!
//! This is the main executable for the `cmkgen` command-line tool.
//! It parses CLI arguments using clap and routes commands to the appropriate handlers.
//!
//! ## Commands
//!
//! - `generate` - write `CMakeLists.txt` and the setup script
//! - `init` - create a starter `cmkgen.toml`
//! - `modules` - list resolved modules and search paths
//! - `completion` - shell completion scripts

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use cmkgen::commands;

#[derive(Parser)]
#[command(name = "cmkgen")]
#[command(about = "Generate CMake boilerplate from cmkgen.toml", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
    dir: PathBuf,
    /// Project file, relative to the project root [default: cmkgen.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write CMakeLists.txt and the setup script
    Generate {
        /// Print the generated files instead of writing them
        #[arg(long, conflicts_with = "check")]
        show: bool,
        /// Fail if the generated files on disk are out of date
        #[arg(long)]
        check: bool,
        /// Show resolved project details
        #[arg(short, long)]
        verbose: bool,
    },
    /// Create a starter cmkgen.toml
    Init {
        /// Project name (defaults to the directory name)
        name: Option<String>,
        /// Overwrite an existing cmkgen.toml
        #[arg(long)]
        force: bool,
    },
    /// List resolved modules and their search paths
    Modules,
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match &cli.command {
        Commands::Generate {
            show,
            check,
            verbose,
        } => {
            let options = commands::generate::GenerateOptions {
                show: *show,
                check: *check,
                verbose: *verbose,
            };
            commands::generate::handle_generate_command(&cli.dir, config, &options)
        }
        Commands::Init { name, force } => {
            commands::init::init_project(&cli.dir, name.as_deref(), *force).map(|_| ())
        }
        Commands::Modules => commands::modules::list_modules(&cli.dir, config),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}
