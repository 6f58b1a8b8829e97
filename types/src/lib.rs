//! Shared configuration types for the festive overlay.
//!
//! Everything here is plain data: the overlay configuration accepted by the
//! web component and the preview tool, and the fixed burst recipe handed to
//! the confetti renderer. Both serialize in camelCase so they can cross the
//! JS boundary unchanged.

pub mod formatting;
mod recipe;

pub use recipe::{BurstOrigin, BurstRecipe};

use serde::{Deserialize, Serialize};

/// Default greeting shown while the overlay is active.
pub const DEFAULT_TEXT: &str = "🎄 Merry Christmas 🎄";

/// Default number of snowflakes in the snow layer.
pub const DEFAULT_SNOWFLAKE_COUNT: u32 = 200;

/// Default period between bursts, in milliseconds.
pub const DEFAULT_FIREWORK_INTERVAL_MS: u32 = 12_000;

// ─────────────────────────────────────────────────────────────────────────────
// Text Mode
// ─────────────────────────────────────────────────────────────────────────────

/// How the greeting layer is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMode {
    /// Plain heading, no animation
    #[default]
    Static,
    /// Single fade/slide-in, played once per mount
    Entrance,
    /// Per-character spans that scatter outward on every burst
    Scatter,
}

impl TextMode {
    pub fn label(&self) -> &'static str {
        match self {
            TextMode::Static => "static",
            TextMode::Entrance => "entrance",
            TextMode::Scatter => "scatter",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Effects Config
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration for one mounted effects overlay.
///
/// All fields are optional when deserializing; missing keys take the
/// defaults below. Values are not validated: an inverted day range or a zero
/// snowflake count simply produce an empty window or an empty snow layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectsConfig {
    /// Greeting content
    pub text: String,
    /// Snow density
    pub snowflake_count: u32,
    /// Toggles the greeting layer
    pub show_text: bool,
    /// Toggles the burst cycle
    #[serde(alias = "fireworks")]
    pub fireworks_enabled: bool,
    /// Period between bursts in milliseconds
    #[serde(alias = "fireworkInterval")]
    pub firework_interval_ms: u32,
    /// First day of December in the active window (inclusive)
    pub start_day: u32,
    /// Last day of December in the active window (inclusive)
    pub end_day: u32,
    /// Bypass the date check entirely
    pub force: bool,
    /// Presentation of the greeting layer
    pub text_mode: TextMode,
    /// Base seed for scatter and snow placement
    pub scatter_seed: Option<u64>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            snowflake_count: DEFAULT_SNOWFLAKE_COUNT,
            show_text: true,
            fireworks_enabled: true,
            firework_interval_ms: DEFAULT_FIREWORK_INTERVAL_MS,
            start_day: 1,
            end_day: 31,
            force: false,
            text_mode: TextMode::Static,
            scatter_seed: None,
        }
    }
}

impl EffectsConfig {
    /// The day-range and override fields, as consumed by the date check.
    pub fn window(&self) -> ActiveWindow {
        ActiveWindow {
            start_day: self.start_day,
            end_day: self.end_day,
            force: self.force,
        }
    }

    /// Base seed for randomized placement (0 when unset).
    pub fn seed(&self) -> u64 {
        self.scatter_seed.unwrap_or(0)
    }
}

/// Date window in December during which effects render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveWindow {
    pub start_day: u32,
    pub end_day: u32,
    pub force: bool,
}
