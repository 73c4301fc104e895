//! `open-in`: open files and directories with configurable external programs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::config::ConfigAction;
use open_in::{logging, EntryKind};

#[derive(Parser)]
#[command(
    name = "open-in",
    version,
    about = "Open files and directories with external programs"
)]
struct Cli {
    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the selected item, else the active document, else the workspace root
    Open {
        /// File or directory to open
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Treat PATH as this kind instead of checking the file system
        #[arg(long, value_enum, requires = "path")]
        kind: Option<EntryKind>,

        /// Document open in the calling editor, used when PATH is absent
        #[arg(long, value_name = "FILE")]
        active: Option<PathBuf>,

        /// Workspace root [default: current directory]
        #[arg(long, value_name = "DIR")]
        workspace: Option<PathBuf>,

        /// Launch this program instead of asking
        #[arg(short, long, value_name = "NAME")]
        program: Option<String>,
    },

    /// Open the workspace root with a program that handles directories
    Root {
        /// Workspace root [default: current directory]
        #[arg(long, value_name = "DIR")]
        workspace: Option<PathBuf>,

        /// Launch this program instead of asking
        #[arg(short, long, value_name = "NAME")]
        program: Option<String>,
    },

    /// List configured programs, optionally only those for one kind of target
    List {
        /// Only show programs offered for this kind
        #[arg(long, value_enum)]
        kind: Option<EntryKind>,
    },

    /// Manage open-in configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Open {
            path,
            kind,
            active,
            workspace,
            program,
        } => commands::open::cmd_open(
            commands::open::OpenRequest {
                path,
                kind,
                active,
                workspace,
            },
            program.as_deref(),
        ),

        Commands::Root { workspace, program } => {
            commands::open::cmd_root(workspace, program.as_deref())
        }

        Commands::List { kind } => {
            commands::list::cmd_list(kind)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Config { action } => {
            commands::config::cmd_config(action)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
