//! Seasonal effects overlay component.
//!
//! Wraps a [`EffectsOverlay`] for the lifetime of the component: every
//! render re-syncs it with the current props and date, and timer callbacks
//! bump a generation signal so bursts and explosion resets re-render.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use festive_core::{
    BurstRenderer, Clock, EffectsOverlay, GreetingLayer, GreetingStyle, ScatterOffset,
};
use festive_types::EffectsConfig;
use festive_types::formatting::{css_px, css_translate_rotate};

use super::snowfall::Snowfall;
use crate::host::{ConfettiRenderer, JsClock, host_env};
use crate::timers::TaskTimers;

const STYLES: &str = r#"
.christmas-container { position: fixed; inset: 0; pointer-events: none; overflow: hidden; z-index: 9999; }
.snowfall { position: absolute; inset: 0; }
.snowflake { position: absolute; top: -10px; border-radius: 50%; background: #fff; animation-name: festive-fall; animation-timing-function: linear; animation-iteration-count: infinite; }
@keyframes festive-fall { from { transform: translate(0, -10vh); } to { transform: translate(var(--drift), 110vh); } }
.christmas-text { position: absolute; top: 40%; width: 100%; text-align: center; margin: 0; color: #fff; font-size: 3rem; text-shadow: 0 0 12px rgba(255, 0, 0, 0.8); }
.christmas-entrance { animation-name: festive-enter; animation-timing-function: ease-out; animation-fill-mode: both; }
@keyframes festive-enter { from { opacity: 0; transform: translateY(var(--entrance-offset)); } to { opacity: 1; transform: none; } }
.christmas-letter { display: inline-block; white-space: pre; transition: transform 0.6s ease-out, opacity 0.6s ease-out; }
.christmas-text.exploding .christmas-letter { opacity: 0.85; }
"#;

/// `transform` for one scatter letter; identity when at rest.
fn letter_transform(offset: Option<ScatterOffset>) -> String {
    match offset {
        Some(o) => css_translate_rotate(o.x, o.y, o.rotation),
        None => css_translate_rotate(0.0, 0.0, 0.0),
    }
}

/// Seasonal snow, greeting and firecracker overlay.
///
/// Renders nothing outside the configured December window unless `force`
/// is set.
#[component]
pub fn ChristmasEffects(#[props(default)] config: EffectsConfig) -> Element {
    let generation = use_signal(|| 0u64);

    let overlay = use_hook(|| {
        let renderer: Rc<dyn BurstRenderer> = Rc::new(ConfettiRenderer);
        let mut overlay = EffectsOverlay::new(TaskTimers, renderer);
        overlay.set_listener(move || {
            let mut generation = generation;
            generation += 1;
        });
        Rc::new(RefCell::new(overlay))
    });

    use_drop({
        let overlay = Rc::clone(&overlay);
        move || overlay.borrow_mut().unmount()
    });

    // Subscribe to timer-driven animation changes
    let _ = generation();

    let frame = {
        let mut overlay = overlay.borrow_mut();
        overlay.sync(&config, JsClock.today(), host_env());
        overlay.frame()
    };
    let Some(frame) = frame else {
        return rsx! {};
    };

    rsx! {
        div { class: "christmas-container",
            style { {STYLES} }
            Snowfall { count: frame.snowflake_count, seed: frame.snow_seed }
            if let Some(layer) = frame.greeting {
                Greeting { layer }
            }
        }
    }
}

/// Greeting text in its configured presentation.
#[component]
fn Greeting(layer: GreetingLayer) -> Element {
    match layer.style {
        GreetingStyle::Static => rsx! {
            h1 { class: "christmas-text", "{layer.text}" }
        },
        GreetingStyle::Entrance(anim) => {
            let style = format!(
                "--entrance-offset: {}; animation-duration: {}ms;",
                css_px(anim.offset_px),
                anim.duration_ms
            );
            let entrance_key = "entrance";
            rsx! {
                h1 { key: "{entrance_key}", class: "christmas-text christmas-entrance", style: "{style}",
                    "{layer.text}"
                }
            }
        }
        GreetingStyle::Scatter { exploding, letters } => {
            let spans: Vec<(String, String)> = letters
                .iter()
                .map(|l| (l.ch.to_string(), letter_transform(l.offset)))
                .collect();
            rsx! {
                h1 {
                    class: if exploding { "christmas-text exploding" } else { "christmas-text" },
                    for (i, (ch, transform)) in spans.into_iter().enumerate() {
                        span { key: "{i}", class: "christmas-letter", style: "transform: {transform};", "{ch}" }
                    }
                }
            }
        }
    }
}
