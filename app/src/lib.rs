//! Dioxus front end for the festive overlay.
//!
//! Mount [`ChristmasEffects`] anywhere in an app; it positions itself over
//! the whole viewport and ignores pointer events. Bursts need the
//! `canvas-confetti` browser script on the page (`window.confetti`).

pub mod components;
pub mod host;
pub mod timers;

pub use components::{ChristmasEffects, Snowfall};
pub use festive_types::{EffectsConfig, TextMode};
