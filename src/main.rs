#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use soon_core::{HexColor, ScreenConfig};

/// Global screen configuration, set from command line
static SCREEN_CONFIG: OnceLock<ScreenConfig> = OnceLock::new();

/// Get the screen configuration (set from command line or default)
pub fn get_screen_config() -> ScreenConfig {
    SCREEN_CONFIG.get().cloned().unwrap_or_default()
}

/// Soon - placeholder landing screen
#[derive(Parser, Debug)]
#[command(name = "soon-desktop")]
#[command(about = "Soon - a placeholder landing screen with falling snow")]
struct Args {
    /// JSON config file (any field may be omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Heading text
    #[arg(long)]
    headline: Option<String>,

    /// First gradient stop
    #[arg(long)]
    dark: Option<HexColor>,

    /// Second gradient stop
    #[arg(long)]
    accent: Option<HexColor>,

    /// Heading color
    #[arg(long)]
    text_color: Option<HexColor>,

    /// Number of snowflakes
    #[arg(long)]
    snowflakes: Option<u32>,

    /// Seed for snowflake placement
    #[arg(long)]
    seed: Option<u64>,

    /// Render without the snowfall overlay
    #[arg(long)]
    no_snow: bool,

    /// Write the page as static HTML instead of opening a window ("-" for stdout)
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Defaults, then the config file, then individual flags.
    fn screen_config(&self) -> Result<ScreenConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading config from {:?}", path);
                ScreenConfig::load(path)
                    .with_context(|| format!("Failed to load config {:?}", path))?
            }
            None => ScreenConfig::default(),
        };

        if let Some(ref headline) = self.headline {
            config.headline = headline.clone();
        }
        if let Some(ref dark) = self.dark {
            config.palette.dark = dark.clone();
        }
        if let Some(ref accent) = self.accent {
            config.palette.accent = accent.clone();
        }
        if let Some(ref text_color) = self.text_color {
            config.text_color = text_color.clone();
        }
        if let Some(count) = self.snowflakes {
            config.snowfall.count = count;
        }
        if let Some(seed) = self.seed {
            config.snowfall.seed = seed;
        }
        if self.no_snow {
            config.snowfall.enabled = false;
        }

        config.validate().context("Invalid screen configuration")?;
        Ok(config)
    }
}

fn export(config: &ScreenConfig, target: &Path) -> Result<()> {
    let html = soon_ui::render_document(config);

    if target == Path::new("-") {
        tracing::info!("Exporting page to stdout");
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        stdout.flush()?;
    } else {
        std::fs::write(target, html)
            .with_context(|| format!("Failed to write {:?}", target))?;
        tracing::info!("Exported page to {:?}", target);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    soon_core::logging::init(args.verbose);

    let config = args.screen_config()?;

    if let Some(ref target) = args.export {
        return export(&config, target);
    }

    // Window size: half width, nearly full height
    let window_width = 700.0;
    let window_height = 900.0;

    let title = config.headline.clone();

    tracing::info!(
        "Starting '{}' with {} snowflakes",
        title,
        config.snowfall.visible_count()
    );

    // Store config globally
    let _ = SCREEN_CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
