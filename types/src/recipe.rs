//! Burst recipe passed to the confetti renderer.

use serde::Serialize;

/// Screen origin of a burst, as fractions of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BurstOrigin {
    pub y: f32,
}

/// Physics and palette for one particle burst.
///
/// Serializes to the option object accepted by `canvas-confetti`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstRecipe {
    pub particle_count: u32,
    /// Spread angle in degrees
    pub spread: u32,
    pub start_velocity: u32,
    pub gravity: f32,
    /// Particle lifetime in animation ticks
    pub ticks: u32,
    pub origin: BurstOrigin,
    pub colors: Vec<&'static str>,
}

impl BurstRecipe {
    /// The firecracker recipe: red, white and green, launched from 70% down.
    pub fn firecracker() -> Self {
        Self {
            particle_count: 120,
            spread: 90,
            start_velocity: 45,
            gravity: 1.2,
            ticks: 200,
            origin: BurstOrigin { y: 0.7 },
            colors: vec!["#ff0000", "#ffffff", "#00ff00"],
        }
    }
}
