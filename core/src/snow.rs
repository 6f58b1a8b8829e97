//! Snow layer placement.
//!
//! The web snow layer renders one CSS-animated element per flake; this
//! module decides where each flake starts and how it falls. Placement is
//! seeded so re-renders do not reshuffle the snow.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Keeps snow streams apart from scatter streams under the same seed.
const SNOW_SALT: u64 = 0x5a0f_1a4e;

/// Placement and motion of one snowflake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowflake {
    /// Horizontal start position, percent of container width
    pub left_pct: f32,
    /// Diameter in pixels
    pub size_px: f32,
    /// Time to fall the full height
    pub fall_secs: f32,
    /// Animation delay; negative so flakes start mid-fall
    pub delay_secs: f32,
    /// Horizontal sway amplitude
    pub drift_px: f32,
    pub opacity: f32,
}

/// Layout of the flake at `index` under `seed`.
pub fn snowflake_layout(index: usize, seed: u64) -> Snowflake {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ SNOW_SALT);
    rng.set_stream(index as u64);

    let fall_secs = rng.gen_range(6.0..14.0);
    Snowflake {
        left_pct: rng.gen_range(0.0..100.0),
        size_px: rng.gen_range(1.0..6.0),
        fall_secs,
        delay_secs: -rng.gen_range(0.0..fall_secs),
        drift_px: rng.gen_range(-40.0..40.0),
        opacity: rng.gen_range(0.4..1.0),
    }
}

/// Layouts for a whole snow layer.
pub fn snow_layer(count: u32, seed: u64) -> Vec<Snowflake> {
    (0..count as usize)
        .map(|i| snowflake_layout(i, seed))
        .collect()
}
