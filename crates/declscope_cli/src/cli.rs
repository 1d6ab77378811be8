//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// declscope - Report template specializations and calls in C++ sources
#[derive(Parser)]
#[command(name = "declscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print specializations and calls under matching declarations
    Print {
        /// Source files to read (stdin when empty or `-`)
        files: Vec<PathBuf>,

        /// Regular expression matched against qualified names
        #[arg(short, long, value_name = "REGEX")]
        filter: Option<String>,

        /// Dump the subtree of every reported call
        #[arg(long)]
        dump_calls: bool,
    },

    /// Check that sources parse
    Check {
        /// Source files to read (stdin when empty or `-`)
        files: Vec<PathBuf>,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}
