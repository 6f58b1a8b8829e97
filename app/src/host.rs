//! Browser host bindings
//!
//! Everything the overlay reads from or sends to the page goes through here:
//! the confetti renderer on `window.confetti`, the local date from JS
//! `Date`, the viewport size, and the reduced-motion media query. Missing
//! pieces (no window, script not loaded) degrade to inert values.

use chrono::NaiveDate;
use festive_core::{BurstRenderer, Clock, HostEnv, Viewport};
use festive_types::BurstRecipe;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ─────────────────────────────────────────────────────────────────────────────
// Helper Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Serialize a value into a plain JS object
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(value).map_err(|e| e.to_string())
}

/// Look up a global function on `window` by name
fn window_function(name: &str) -> Result<js_sys::Function, String> {
    let window = web_sys::window().ok_or("No window")?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|_| format!("No window.{}", name))?;
    value
        .dyn_into()
        .map_err(|_| format!("window.{} is not a function", name))
}

// ─────────────────────────────────────────────────────────────────────────────
// Confetti
// ─────────────────────────────────────────────────────────────────────────────

/// Fires bursts through `canvas-confetti`.
///
/// Failures are logged and swallowed; a page without the script simply gets
/// no particles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfettiRenderer;

impl ConfettiRenderer {
    fn try_fire(recipe: &BurstRecipe) -> Result<(), String> {
        let confetti = window_function("confetti")?;
        let options = to_js(recipe)?;
        confetti
            .call1(&JsValue::NULL, &options)
            .map_err(|e| format!("confetti call failed: {:?}", e))?;
        Ok(())
    }
}

impl BurstRenderer for ConfettiRenderer {
    fn fire(&self, recipe: &BurstRecipe) {
        if let Err(e) = Self::try_fire(recipe) {
            dioxus::logger::tracing::warn!("Burst skipped: {}", e);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Environment
// ─────────────────────────────────────────────────────────────────────────────

/// Local date from JS `Date`; `None` when there is no window.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn today(&self) -> Option<NaiveDate> {
        web_sys::window()?;
        let now = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
    }
}

/// Current viewport size in CSS pixels
pub fn viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport {
        width: width as f32,
        height: height as f32,
    })
}

/// Whether the user asked for reduced motion
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|mql| mql.matches())
}

/// Snapshot of the host environment for one render
pub fn host_env() -> HostEnv {
    HostEnv {
        viewport: viewport(),
        reduced_motion: prefers_reduced_motion(),
    }
}
