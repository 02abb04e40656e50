mod app;
mod config;

use std::path::PathBuf;

use clap::Parser;
use frameless_ui::{EventLoop, FramelessWindowBuilder};

use crate::app::App;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "frameless", about = "Borderless window with edge resizing and a drag bar")]
struct Cli {
    /// Path to the TOML configuration
    #[arg(short, long, default_value = "frameless.toml")]
    config: PathBuf,
    /// Width of the resize bands in pixels (overrides the config file)
    #[arg(long)]
    resizable_area: Option<u32>,
    /// Only allow resizing from the left and right edges
    #[arg(long)]
    horizontal_only: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config)?
        .with_overrides(cli.resizable_area, cli.horizontal_only);

    let event_loop = EventLoop::new();

    let window = FramelessWindowBuilder::new()
        .with_config(config.window)
        .build(&event_loop)?;

    log::info!(
        "Primary display {}x{}",
        window.controller().screen_width(),
        window.controller().screen_height()
    );

    // Run the event loop
    frameless_ui::run_with_app(window, event_loop, App::new());
    Ok(())
}
