pub mod burst;
pub mod config;
pub mod env;
pub mod overlay;
pub mod scatter;
pub mod snow;
pub mod timer;
pub mod window;

// Re-exports for convenience
pub use burst::{BurstRenderer, fire_crackers};
pub use config::{ConfigError, default_config_path, load_config, load_or_default};
pub use env::{Clock, FixedClock, HostEnv, SystemClock, Viewport};
pub use festive_types::{ActiveWindow, BurstRecipe, EffectsConfig, TextMode};
pub use overlay::{EffectsOverlay, GreetingLayer, GreetingStyle, OverlayFrame, OverlayPhase};
pub use scatter::{ScatterArea, ScatterOffset, scatter_offset};
pub use timer::{ManualHandle, ManualTimers, TimerDriver};
pub use window::{is_active, is_december};
