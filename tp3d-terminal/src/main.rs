//! TP3D Terminal - rotating painter-cube demo
//!
//! Draws a perspective-projected cube, depth-sorted back to front, onto
//! the terminal. Controls: P/Space pause, Q/Esc quit.

use clap::Parser;
use std::io;
use tp3d_terminal::{AppConfig, TerminalApp};

#[derive(Debug, Parser)]
#[command(
    name = "tp3d-terminal",
    about = "Painter's-algorithm cube renderer for the terminal"
)]
struct Args {
    /// Projection distance (focal length); larger is flatter
    #[arg(long, default_value_t = 400.0)]
    distance: f32,

    /// Spin step per frame, in radians
    #[arg(long, default_value_t = 0.01)]
    step: f32,

    /// Target frame rate
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Model scale in cells; defaults to min(width, height) / 4
    #[arg(long)]
    scale: Option<f32>,

    /// Start with the spin paused
    #[arg(long)]
    paused: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = AppConfig {
        distance: args.distance,
        step: args.step,
        fps: args.fps,
        scale: args.scale,
        start_paused: args.paused,
    };

    let mut app = TerminalApp::new(config)?;
    app.run()
}
