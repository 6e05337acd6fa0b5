//! Command line interface
//!
//! Flags override values from the config file and the environment.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "jsonserve")]
#[command(version, about = "Serve static JSON files over HTTP", long_about = None)]
pub struct Cli {
    /// Config file (default: jsonserve.toml in the working directory, if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory to serve JSON files from
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Number of Tokio worker threads
    #[arg(short, long)]
    pub workers: Option<usize>,
}
