//! CLI argument definitions for the VoxPop binary.

use clap::{Parser, Subcommand};
use voxpop::settings::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE};

/// VoxPop comment feed server
///
/// Runs the server when no subcommand is given.
#[derive(Parser, Debug)]
#[command(name = "voxpop")]
#[command(about = "VoxPop: a tiny public feed of positive and negative comments")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the VoxPop server
    Serve(ServeArgs),
    /// Check health of a running VoxPop server
    Health(HealthArgs),
}

/// Arguments for the serve command
#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8000, env = "VOXPOP_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(long, default_value = "127.0.0.1", env = "VOXPOP_HOST")]
    pub host: String,

    /// Comments per page when a request does not specify `page_size`
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, env = "VOXPOP_PAGE_SIZE")]
    pub page_size: usize,

    /// Upper bound for a requested `page_size`; larger requests are clamped
    #[arg(long, default_value_t = DEFAULT_MAX_PAGE_SIZE, env = "VOXPOP_MAX_PAGE_SIZE")]
    pub max_page_size: usize,
}

/// Arguments for the health command
#[derive(clap::Args, Debug)]
pub struct HealthArgs {
    /// Port of the server to check
    #[arg(short, long, default_value_t = 8000, env = "VOXPOP_PORT")]
    pub port: u16,

    /// Host of the server to check
    #[arg(long, default_value = "127.0.0.1", env = "VOXPOP_HOST")]
    pub host: String,

    /// Timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    pub timeout: u64,
}
