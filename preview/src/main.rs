//! Preview the festive overlay without a browser
//!
//! Run with: cargo run -p festive-preview -- --date 2025-12-24 --seconds 30

mod simulate;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use festive_core::{
    Clock, ConfigError, EffectsConfig, HostEnv, SystemClock, TextMode, Viewport,
    default_config_path, load_config, load_or_default,
};
use tracing_subscriber::filter::EnvFilter;

use simulate::{PreviewOptions, run_preview};

#[derive(Clone, Copy, ValueEnum)]
enum TextModeArg {
    Static,
    Entrance,
    Scatter,
}

impl From<TextModeArg> for TextMode {
    fn from(arg: TextModeArg) -> Self {
        match arg {
            TextModeArg::Static => TextMode::Static,
            TextModeArg::Entrance => TextMode::Entrance,
            TextModeArg::Scatter => TextMode::Scatter,
        }
    }
}

#[derive(Parser)]
#[command(version, about = "Run the festive overlay on a simulated clock")]
struct Cli {
    /// TOML config file (defaults to the user config location)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Date to simulate, e.g. 2025-12-24 (defaults to today)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Simulated duration
    #[arg(short, long, default_value_t = 30)]
    seconds: u64,

    /// Simulated time between frame checks
    #[arg(long, default_value_t = 100)]
    step_ms: u64,

    /// Bypass the date check
    #[arg(long)]
    force: bool,

    /// Simulate an environment without a clock or viewport
    #[arg(long)]
    headless: bool,

    #[arg(long)]
    reduced_motion: bool,

    #[arg(long, requires = "height")]
    width: Option<f32>,

    #[arg(long, requires = "width")]
    height: Option<f32>,

    #[arg(long, value_enum)]
    text_mode: Option<TextModeArg>,

    #[arg(long)]
    interval_ms: Option<u32>,
}

impl Cli {
    fn load_config(&self) -> Result<EffectsConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => match default_config_path() {
                Some(path) => load_or_default(&path)?,
                None => EffectsConfig::default(),
            },
        };

        // Command line flags win over the file
        if self.force {
            config.force = true;
        }
        if let Some(mode) = self.text_mode {
            config.text_mode = mode.into();
        }
        if let Some(interval) = self.interval_ms {
            config.firework_interval_ms = interval;
        }
        Ok(config)
    }

    fn options(&self) -> PreviewOptions {
        let (today, viewport) = if self.headless {
            (None, None)
        } else {
            let viewport = match (self.width, self.height) {
                (Some(width), Some(height)) => Some(Viewport { width, height }),
                _ => None,
            };
            (self.date.or_else(|| SystemClock.today()), viewport)
        };

        PreviewOptions {
            today,
            env: HostEnv {
                viewport,
                reduced_motion: self.reduced_motion,
            },
            duration_ms: self.seconds * 1000,
            step_ms: self.step_ms,
        }
    }
}

/// Initialize logging to stderr, INFO unless RUST_LOG says otherwise.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = run_preview(&config, &cli.options());
    tracing::info!(
        bursts = report.bursts.len(),
        frames = report.frames.len(),
        phase = ?report.phase,
        "preview finished"
    );
    ExitCode::SUCCESS
}
