//! Per-character scatter placement for the exploding greeting.
//!
//! Offsets are a pure function of the character index and a seed, so the
//! same burst always scatters the same way. Each character draws from its
//! own ChaCha stream, which keeps an offset independent of the text length.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::env::Viewport;

/// Half extent of the scatter box when no viewport is available, in pixels.
pub const FALLBACK_HALF_EXTENT_PX: f32 = 300.0;

/// Letters rotate within `[-MAX_ROTATION_DEG, MAX_ROTATION_DEG)`.
pub const MAX_ROTATION_DEG: f32 = 180.0;

/// Displacement and rotation of one scattered character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterOffset {
    pub x: f32,
    pub y: f32,
    /// Degrees
    pub rotation: f32,
}

/// Box that scatter offsets are drawn from, centred on the letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterArea {
    pub half_width: f32,
    pub half_height: f32,
}

impl ScatterArea {
    /// Half the viewport in each direction, or the fixed ±300px box when
    /// there is no viewport.
    pub fn from_viewport(viewport: Option<Viewport>) -> Self {
        match viewport {
            Some(v) => Self {
                half_width: (v.width / 2.0).max(0.0),
                half_height: (v.height / 2.0).max(0.0),
            },
            None => Self::fallback(),
        }
    }

    pub fn fallback() -> Self {
        Self {
            half_width: FALLBACK_HALF_EXTENT_PX,
            half_height: FALLBACK_HALF_EXTENT_PX,
        }
    }

    pub fn contains(&self, offset: &ScatterOffset) -> bool {
        offset.x.abs() <= self.half_width && offset.y.abs() <= self.half_height
    }
}

/// Scatter offset for the character at `char_index` under `seed`.
pub fn scatter_offset(char_index: usize, seed: u64, area: ScatterArea) -> ScatterOffset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(char_index as u64);

    ScatterOffset {
        x: rng.gen_range(-area.half_width..=area.half_width),
        y: rng.gen_range(-area.half_height..=area.half_height),
        rotation: rng.gen_range(-MAX_ROTATION_DEG..MAX_ROTATION_DEG),
    }
}
