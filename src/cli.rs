//! Command-line interface argument parsing for lft-dash.
//!
//! Every flag is optional; running `lft-dash` with no arguments serves the
//! dashboard for `assets/operations.db` on `127.0.0.1:8050`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Default location of the operations database, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "assets/operations.db";

/// Default HTTP port (the port Dash apps listen on out of the box)
pub const DEFAULT_PORT: u16 = 8050;

/// A small web dashboard for the LFT manufacturing operations database.
#[derive(Parser, Debug)]
#[command(name = "lft-dash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite operations database
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Address to bind the HTTP server to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind the HTTP server to
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub addr: SocketAddr,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Self {
        AppConfig {
            db_path: cli.db_path,
            addr: SocketAddr::new(cli.host, cli.port),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
        }
    }
}
