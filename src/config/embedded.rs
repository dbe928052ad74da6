//! Puzzle definitions compiled into the binary

/// Demo puzzle used by `--demo`
pub const DEMO: &str = include_str!("demo.toml");
