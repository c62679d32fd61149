//! CLI argument parsing with clap.

use clap::Parser;

/// Minecraft skin avatar server - serves outlined player heads as PNG.
#[derive(Parser, Debug)]
#[command(name = "skinface", version, about)]
pub struct Cli {
    /// Listen address (default 0.0.0.0:5000).
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Skin API base URL; skins are fetched from `<URL>/raw/<uuid>?size=64`.
    #[arg(short, long)]
    pub upstream: Option<String>,

    /// Upscale factor applied to the 12x12 avatar (default 16).
    #[arg(short, long)]
    pub scale: Option<u32>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
