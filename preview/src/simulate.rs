//! Headless overlay simulation.
//!
//! Mounts an [`EffectsOverlay`] on a virtual clock, steps time forward and
//! logs every burst and every change in what would be rendered.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use festive_core::{
    BurstRecipe, EffectsConfig, EffectsOverlay, GreetingStyle, HostEnv, ManualTimers,
    OverlayFrame, OverlayPhase,
};
use festive_types::formatting::format_clock_ms;

/// How many scattered letters to include in a frame description.
const LETTERS_SHOWN: usize = 3;

#[derive(Debug, Clone)]
pub struct PreviewOptions {
    pub today: Option<NaiveDate>,
    pub env: HostEnv,
    pub duration_ms: u64,
    pub step_ms: u64,
}

#[derive(Debug, Clone)]
pub struct PreviewReport {
    /// Virtual times of every burst
    pub bursts: Vec<u64>,
    /// Distinct frame descriptions in the order they appeared
    pub frames: Vec<String>,
    pub phase: OverlayPhase,
}

/// One-line summary of a frame.
pub fn describe_frame(frame: Option<&OverlayFrame>) -> String {
    let Some(frame) = frame else {
        return "nothing rendered".to_string();
    };

    let text = match &frame.greeting {
        None => "no text".to_string(),
        Some(layer) => match &layer.style {
            GreetingStyle::Static => format!("static \"{}\"", layer.text),
            GreetingStyle::Entrance(anim) => format!(
                "entrance \"{}\" (slide {}px, {}ms)",
                layer.text, anim.offset_px, anim.duration_ms
            ),
            GreetingStyle::Scatter { exploding, letters } => {
                let shown: Vec<String> = letters
                    .iter()
                    .take(LETTERS_SHOWN)
                    .map(|l| match l.offset {
                        Some(o) => format!("{}({:.0},{:.0},{:.0}°)", l.ch, o.x, o.y, o.rotation),
                        None => l.ch.to_string(),
                    })
                    .collect();
                let state = if *exploding { "exploding" } else { "at rest" };
                format!("scatter {} [{}]", state, shown.join(" "))
            }
        },
    };

    format!("snow={} {}", frame.snowflake_count, text)
}

/// Run the overlay for `options.duration_ms` of virtual time.
pub fn run_preview(config: &EffectsConfig, options: &PreviewOptions) -> PreviewReport {
    let timers = ManualTimers::new();
    let bursts = Rc::new(RefCell::new(Vec::new()));

    let clock = timers.clone();
    let log = Rc::clone(&bursts);
    let renderer = move |recipe: &BurstRecipe| {
        let at = clock.now_ms();
        tracing::info!(
            at = %format_clock_ms(at),
            particles = recipe.particle_count,
            "burst"
        );
        log.borrow_mut().push(at);
    };

    let mut overlay = EffectsOverlay::new(timers.clone(), Rc::new(renderer));
    overlay.sync(config, options.today, options.env);
    tracing::info!(phase = ?overlay.phase(), today = ?options.today, "mounted");

    let mut frames = Vec::new();
    let mut record = |overlay: &EffectsOverlay<ManualTimers>| {
        let description = describe_frame(overlay.frame().as_ref());
        if frames.last() != Some(&description) {
            tracing::info!(at = %format_clock_ms(timers.now_ms()), "{}", description);
            frames.push(description);
        }
    };
    record(&overlay);

    let step = options.step_ms.max(1);
    while timers.now_ms() < options.duration_ms {
        let remaining = options.duration_ms - timers.now_ms();
        timers.advance(step.min(remaining));
        record(&overlay);
    }

    let phase = overlay.phase();
    overlay.unmount();
    drop(overlay);

    let bursts = bursts.borrow().clone();
    PreviewReport {
        bursts,
        frames,
        phase,
    }
}
