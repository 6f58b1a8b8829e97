//! Demo page for the festive overlay
//!
//! Run with: dx serve -p festive-web

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use festive_web::{ChristmasEffects, EffectsConfig, TextMode};

const CONFETTI_SCRIPT: &str =
    "https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js";

fn main() {
    // launch installs its own logger if this one could not be set
    let _ = dioxus_logger::init(Level::INFO);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut scatter = use_signal(|| false);

    let config = EffectsConfig {
        force: true,
        firework_interval_ms: 6000,
        text_mode: if scatter() {
            TextMode::Scatter
        } else {
            TextMode::Entrance
        },
        ..Default::default()
    };

    rsx! {
        document::Script { src: CONFETTI_SCRIPT }
        main { style: "min-height: 100vh; background: #0b1a2e;",
            button {
                style: "position: relative; z-index: 10000; margin: 1rem;",
                onclick: move |_| scatter.toggle(),
                if scatter() { "Use entrance text" } else { "Use scatter text" }
            }
        }
        ChristmasEffects { config }
    }
}
