#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use contentdesk_core::RenderMode;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::{AppConfig, StartPage};

/// Global app configuration, set from command line
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app configuration (set from command line or default)
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

/// Content Desk - content authoring admin
#[derive(Parser, Debug)]
#[command(name = "contentdesk-desktop")]
#[command(about = "Content Desk - author articles, tips, collections and HTML cards")]
struct Args {
    /// How the card preview treats markup: sanitized, escaped or raw
    #[arg(long, default_value_t = RenderMode::Sanitized)]
    render_mode: RenderMode,

    /// Write card downloads straight into this directory instead of asking
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Page shown at launch
    #[arg(long, value_enum, default_value_t = StartPage::Library)]
    start: StartPage,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Some(dir) = &args.export_dir {
        if !dir.is_dir() {
            tracing::warn!("Export directory {:?} does not exist; downloads will fail", dir);
        }
    }
    if args.render_mode == RenderMode::Raw {
        tracing::warn!("Raw preview enabled: card markup is rendered without sanitization");
    }

    let config = AppConfig {
        render_mode: args.render_mode,
        export_dir: args.export_dir,
        start: args.start,
    };
    tracing::info!(
        "Starting Content Desk (preview: {}, start: {:?})",
        config.render_mode,
        config.start
    );
    let _ = CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Content Desk")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
