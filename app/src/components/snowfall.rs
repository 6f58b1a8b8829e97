//! Background snow layer.

use dioxus::prelude::*;
use festive_core::snow::{Snowflake, snow_layer};
use festive_types::formatting::{css_pct, css_px, css_secs, format_trimmed};

/// Inline style for one flake
fn flake_style(flake: &Snowflake) -> String {
    let size = css_px(flake.size_px);
    format!(
        "left: {}; width: {}; height: {}; opacity: {}; animation-duration: {}; animation-delay: {}; --drift: {};",
        css_pct(flake.left_pct),
        size,
        size,
        format_trimmed(flake.opacity, 2),
        css_secs(flake.fall_secs),
        css_secs(flake.delay_secs),
        css_px(flake.drift_px),
    )
}

/// Falling snow, `count` flakes placed from `seed`.
#[component]
pub fn Snowfall(count: u32, seed: u64) -> Element {
    let styles: Vec<String> = snow_layer(count, seed).iter().map(flake_style).collect();

    rsx! {
        div { class: "snowfall",
            for (i, style) in styles.into_iter().enumerate() {
                div { key: "{i}", class: "snowflake", style: "{style}" }
            }
        }
    }
}
