// config.rs - Command line / environment configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use conway::DEFAULT_GRID_SIZE;

use crate::pace::{DEFAULT_PACE_MS, MAX_PACE_MS, MIN_PACE_MS};

pub const DEFAULT_PORT: u16 = 3000;
pub const MAX_GRID_SIZE: u32 = 100;

/// Serve an asynchronous, per-cell Game of Life board over HTTP.
#[derive(Debug, Clone, Parser)]
#[command(name = "conway_coro", about = "Per-cell asynchronous Game of Life server")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, short, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Width and height of the board.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE,
          value_parser = clap::value_parser!(u32).range(1..=MAX_GRID_SIZE as i64))]
    pub grid_size: u32,

    /// Initial delay before each cell answers, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_PACE_MS,
          value_parser = clap::value_parser!(u64).range(MIN_PACE_MS..=MAX_PACE_MS))]
    pub pace_ms: u64,

    /// Directory served for any path no route matches, if it exists.
    #[arg(long, default_value = "public")]
    pub static_dir: PathBuf,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            grid_size: DEFAULT_GRID_SIZE,
            pace_ms: DEFAULT_PACE_MS,
            static_dir: PathBuf::from("public"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags() {
        let config = Config::try_parse_from([
            "conway_coro", "--port", "8080", "--grid-size", "30", "--pace-ms", "250",
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.grid_size, 30);
        assert_eq!(config.pace_ms, 250);
    }

    #[test]
    fn pace_outside_range_is_rejected() {
        assert!(Config::try_parse_from(["conway_coro", "--pace-ms", "49"]).is_err());
        assert!(Config::try_parse_from(["conway_coro", "--pace-ms", "5001"]).is_err());
    }

    #[test]
    fn grid_size_bounds() {
        assert!(Config::try_parse_from(["conway_coro", "--grid-size", "0"]).is_err());
        assert!(Config::try_parse_from(["conway_coro", "--grid-size", "101"]).is_err());
    }

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.pace_ms, 1000);
        assert_eq!(config.addr(), "127.0.0.1:3000".parse().unwrap());
    }
}
