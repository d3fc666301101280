use std::path::PathBuf;

use clap::Parser;

/// Previews a bezel style document by rendering every item state.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "bezel-studio", version)]
pub struct StudioConfig {
    /// Style document to load (`.bstyle`).
    pub file: PathBuf,

    /// Width of one item cell in surface units.
    #[arg(long, default_value_t = StudioConfig::DEFAULT_WIDTH, value_parser = positive)]
    pub width: f32,

    /// Height of one item cell in surface units.
    #[arg(long, default_value_t = StudioConfig::DEFAULT_HEIGHT, value_parser = positive)]
    pub height: f32,

    /// `env_logger` filter; falls back to `RUST_LOG`.
    #[arg(long)]
    pub filter: Option<String>,

    /// Echo the canonical form of the loaded document to stdout.
    #[arg(long)]
    pub print: bool,
}

impl StudioConfig {
    pub const DEFAULT_WIDTH: f32 = 120.0;
    pub const DEFAULT_HEIGHT: f32 = 32.0;
}

fn positive(value: &str) -> Result<f32, String> {
    let n: f32 = value.parse().map_err(|_| format!("{value:?} is not a number"))?;
    if n.is_finite() && n > 0.0 {
        Ok(n)
    } else {
        Err(format!("must be positive, got {n}"))
    }
}
