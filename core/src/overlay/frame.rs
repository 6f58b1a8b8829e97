//! Render description produced by the overlay.
//!
//! A frame is plain data. Hosts map it onto their own elements; nothing
//! here knows about the DOM.

use festive_types::TextMode;

use crate::env::HostEnv;
use crate::scatter::{ScatterArea, ScatterOffset, scatter_offset};

/// Vertical slide distance of the entrance animation, in pixels.
pub const ENTRANCE_OFFSET_PX: f32 = 24.0;

/// Duration of the entrance animation.
pub const ENTRANCE_DURATION_MS: u32 = 1200;

/// Visible layers of an active overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    pub snowflake_count: u32,
    /// Seed for snow placement
    pub snow_seed: u64,
    /// `None` when the greeting is hidden
    pub greeting: Option<GreetingLayer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GreetingLayer {
    pub text: String,
    pub style: GreetingStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GreetingStyle {
    /// Plain heading
    Static,
    /// One-time fade/slide-in
    Entrance(EntranceAnimation),
    /// One span per character
    Scatter {
        exploding: bool,
        letters: Vec<ScatterLetter>,
    },
}

/// Fade/slide-in parameters.
///
/// With reduced motion the slide distance is zero and only the opacity
/// transition remains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceAnimation {
    pub offset_px: f32,
    pub duration_ms: u32,
}

impl EntranceAnimation {
    pub fn for_env(env: &HostEnv) -> Self {
        Self {
            offset_px: if env.reduced_motion {
                0.0
            } else {
                ENTRANCE_OFFSET_PX
            },
            duration_ms: ENTRANCE_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterLetter {
    pub ch: char,
    /// Present only while exploding
    pub offset: Option<ScatterOffset>,
}

/// Build the greeting style for `mode`.
pub(super) fn greeting_style(
    mode: TextMode,
    text: &str,
    exploding: bool,
    seed: u64,
    env: &HostEnv,
) -> GreetingStyle {
    match mode {
        TextMode::Static => GreetingStyle::Static,
        TextMode::Entrance => GreetingStyle::Entrance(EntranceAnimation::for_env(env)),
        TextMode::Scatter => {
            let area = ScatterArea::from_viewport(env.viewport);
            // Reduced motion keeps letters in place.
            let moving = exploding && !env.reduced_motion;
            let letters = text
                .chars()
                .enumerate()
                .map(|(i, ch)| ScatterLetter {
                    ch,
                    offset: moving.then(|| scatter_offset(i, seed, area)),
                })
                .collect();
            GreetingStyle::Scatter { exploding, letters }
        }
    }
}
