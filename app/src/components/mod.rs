//! UI Components

pub mod christmas_effects;
pub mod snowfall;

pub use christmas_effects::ChristmasEffects;
pub use snowfall::Snowfall;
