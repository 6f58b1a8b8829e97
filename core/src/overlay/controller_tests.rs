//! Tests for the effects overlay controller
//!
//! Timing is driven by a virtual clock; bursts are recorded with the virtual
//! time at which they fired.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::NaiveDate;
use festive_types::{BurstRecipe, EffectsConfig, TextMode};

use super::controller::{EXPLODE_WINDOW_MS, EffectsOverlay, OverlayPhase};
use super::frame::{ENTRANCE_OFFSET_PX, GreetingStyle};
use crate::env::{HostEnv, Viewport};
use crate::timer::ManualTimers;

fn christmas_eve() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 12, 24)
}

fn midsummer() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 6, 21)
}

/// Overlay wired to a virtual clock, recording burst times.
struct Harness {
    timers: ManualTimers,
    bursts: Rc<RefCell<Vec<u64>>>,
    overlay: EffectsOverlay<ManualTimers>,
}

impl Harness {
    fn new() -> Self {
        let timers = ManualTimers::new();
        let bursts = Rc::new(RefCell::new(Vec::new()));

        let clock = timers.clone();
        let log = Rc::clone(&bursts);
        let renderer = move |_: &BurstRecipe| log.borrow_mut().push(clock.now_ms());

        let overlay = EffectsOverlay::new(timers.clone(), Rc::new(renderer));
        Self {
            timers,
            bursts,
            overlay,
        }
    }

    fn mount(config: &EffectsConfig, today: Option<NaiveDate>) -> Self {
        let mut h = Self::new();
        h.overlay.sync(config, today, HostEnv::default());
        h
    }

    fn bursts(&self) -> Vec<u64> {
        self.bursts.borrow().clone()
    }
}

fn fireworks_every(interval_ms: u32) -> EffectsConfig {
    EffectsConfig {
        firework_interval_ms: interval_ms,
        ..Default::default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Activation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_inactive_renders_nothing_and_schedules_nothing() {
    let h = Harness::mount(&EffectsConfig::default(), midsummer());

    assert_eq!(h.overlay.phase(), OverlayPhase::Inactive);
    assert!(h.overlay.frame().is_none());
    assert_eq!(h.timers.pending(), 0);
    assert!(h.bursts().is_empty());
}

#[test]
fn test_headless_is_inactive() {
    let h = Harness::mount(&EffectsConfig::default(), None);
    assert_eq!(h.overlay.phase(), OverlayPhase::Inactive);
    assert!(h.bursts().is_empty());
}

#[test]
fn test_force_activates_outside_december() {
    let config = EffectsConfig {
        force: true,
        ..Default::default()
    };
    let h = Harness::mount(&config, midsummer());

    assert_eq!(h.overlay.phase(), OverlayPhase::Cycling);
    let frame = h.overlay.frame().expect("forced overlay renders");
    assert_eq!(frame.snowflake_count, 200);
}

#[test]
fn test_inverted_window_is_inactive_in_december() {
    let config = EffectsConfig {
        start_day: 26,
        end_day: 20,
        ..Default::default()
    };
    let h = Harness::mount(&config, christmas_eve());
    assert_eq!(h.overlay.phase(), OverlayPhase::Inactive);
}

// ─────────────────────────────────────────────────────────────────────────────
// Burst cycle
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_fireworks_disabled_never_bursts() {
    let config = EffectsConfig {
        fireworks_enabled: false,
        ..Default::default()
    };
    let h = Harness::mount(&config, christmas_eve());

    h.timers.advance(30_000);

    assert_eq!(h.overlay.phase(), OverlayPhase::Idle);
    assert!(h.bursts().is_empty());
    assert_eq!(h.timers.pending(), 0);
    assert!(h.overlay.frame().is_some());
}

#[test]
fn test_first_burst_immediate_then_each_interval() {
    let h = Harness::mount(&fireworks_every(1000), christmas_eve());
    assert_eq!(h.bursts(), vec![0]);

    h.timers.advance(999);
    assert_eq!(h.bursts(), vec![0]);

    h.timers.advance(1);
    assert_eq!(h.bursts(), vec![0, 1000]);

    h.timers.advance(2000);
    assert_eq!(h.bursts(), vec![0, 1000, 2000, 3000]);
    assert_eq!(h.overlay.burst_count(), 4);
}

#[test]
fn test_resync_with_same_deps_keeps_schedule() {
    let mut h = Harness::mount(&fireworks_every(1000), christmas_eve());
    h.timers.advance(400);

    let mut config = fireworks_every(1000);
    config.text = "Happy Holidays".to_string();
    config.snowflake_count = 50;
    h.overlay.sync(&config, christmas_eve(), HostEnv::default());

    h.timers.advance(600);
    assert_eq!(h.bursts(), vec![0, 1000]);
    assert_eq!(h.timers.pending_repeating(), 1);
    assert_eq!(h.overlay.frame().unwrap().snowflake_count, 50);
}

#[test]
fn test_at_most_one_repeating_timer() {
    let mut h = Harness::mount(&fireworks_every(1000), christmas_eve());
    for interval in [500, 700, 1000, 700] {
        h.overlay.sync(&fireworks_every(interval), christmas_eve(), HostEnv::default());
        assert_eq!(h.timers.pending_repeating(), 1);
    }
}

#[test]
fn test_unmount_prevents_next_burst() {
    let mut h = Harness::mount(&fireworks_every(1000), christmas_eve());
    h.timers.advance(500);

    h.overlay.unmount();
    h.timers.advance(10_000);

    assert_eq!(h.bursts(), vec![0]);
    assert_eq!(h.timers.pending(), 0);
    assert!(h.overlay.frame().is_none());
}

#[test]
fn test_dropping_overlay_cancels_cycle() {
    let h = Harness::mount(&fireworks_every(1000), christmas_eve());
    let Harness {
        timers,
        bursts,
        overlay,
    } = h;

    drop(overlay);
    timers.advance(5000);

    assert_eq!(*bursts.borrow(), vec![0]);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn test_deactivation_stops_bursts() {
    let mut h = Harness::mount(&fireworks_every(1000), christmas_eve());
    h.timers.advance(1500);

    let new_year = NaiveDate::from_ymd_opt(2026, 1, 1);
    h.overlay.sync(&fireworks_every(1000), new_year, HostEnv::default());
    h.timers.advance(5000);

    assert_eq!(h.overlay.phase(), OverlayPhase::Inactive);
    assert_eq!(h.bursts(), vec![0, 1000]);
}

#[test]
fn test_disabling_fireworks_stops_bursts() {
    let mut h = Harness::mount(&fireworks_every(1000), christmas_eve());

    let config = EffectsConfig {
        fireworks_enabled: false,
        firework_interval_ms: 1000,
        ..Default::default()
    };
    h.overlay.sync(&config, christmas_eve(), HostEnv::default());
    h.timers.advance(5000);

    assert_eq!(h.overlay.phase(), OverlayPhase::Idle);
    assert_eq!(h.bursts(), vec![0]);
}

#[test]
fn test_interval_change_restarts_from_reconfiguration() {
    let mut h = Harness::mount(&fireworks_every(1000), christmas_eve());
    h.timers.advance(700);

    h.overlay.sync(&fireworks_every(3000), christmas_eve(), HostEnv::default());
    assert_eq!(h.overlay.cycle_interval_ms(), Some(3000));

    h.timers.advance(2999);
    assert_eq!(h.bursts(), vec![0, 700]);

    h.timers.advance(1);
    assert_eq!(h.bursts(), vec![0, 700, 3700]);
}

#[test]
fn test_reactivation_bursts_again_immediately() {
    let mut h = Harness::mount(&fireworks_every(1000), christmas_eve());
    h.overlay.sync(&fireworks_every(1000), midsummer(), HostEnv::default());
    h.timers.advance(250);
    h.overlay.sync(&fireworks_every(1000), christmas_eve(), HostEnv::default());

    assert_eq!(h.bursts(), vec![0, 250]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Greeting layer
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_show_text_false_never_renders_greeting() {
    for text_mode in [TextMode::Static, TextMode::Entrance, TextMode::Scatter] {
        let config = EffectsConfig {
            show_text: false,
            text_mode,
            force: true,
            ..Default::default()
        };
        let h = Harness::mount(&config, midsummer());
        h.timers.advance(100);
        assert!(h.overlay.frame().unwrap().greeting.is_none());
    }
}

#[test]
fn test_static_greeting() {
    let h = Harness::mount(&EffectsConfig::default(), christmas_eve());
    let greeting = h.overlay.frame().unwrap().greeting.unwrap();
    assert_eq!(greeting.text, "🎄 Merry Christmas 🎄");
    assert_eq!(greeting.style, GreetingStyle::Static);
}

#[test]
fn test_entrance_plays_once_per_mount() {
    let config = EffectsConfig {
        text_mode: TextMode::Entrance,
        firework_interval_ms: 1000,
        ..Default::default()
    };
    let h = Harness::mount(&config, christmas_eve());

    assert!(h.overlay.has_played());
    let first = h.overlay.frame().unwrap().greeting.unwrap();
    let GreetingStyle::Entrance(anim) = first.style else {
        panic!("expected entrance style");
    };
    assert_eq!(anim.offset_px, ENTRANCE_OFFSET_PX);

    h.timers.advance(3000);
    let later = h.overlay.frame().unwrap().greeting.unwrap();
    assert_eq!(later.style, first.style);
    assert!(h.overlay.has_played());
}

#[test]
fn test_entrance_survives_reconfiguration() {
    let config = EffectsConfig {
        text_mode: TextMode::Entrance,
        ..Default::default()
    };
    let mut h = Harness::mount(&config, midsummer());
    assert!(!h.overlay.has_played());

    h.overlay.sync(&config, christmas_eve(), HostEnv::default());
    assert!(h.overlay.has_played());

    h.overlay.sync(&config, midsummer(), HostEnv::default());
    assert!(h.overlay.has_played());
}

#[test]
fn test_entrance_without_fireworks_shows_text() {
    let config = EffectsConfig {
        text_mode: TextMode::Entrance,
        fireworks_enabled: false,
        ..Default::default()
    };
    let h = Harness::mount(&config, christmas_eve());
    assert!(h.overlay.frame().unwrap().greeting.is_some());
}

#[test]
fn test_entrance_reduced_motion() {
    let config = EffectsConfig {
        text_mode: TextMode::Entrance,
        ..Default::default()
    };
    let mut h = Harness::new();
    let env = HostEnv {
        viewport: None,
        reduced_motion: true,
    };
    h.overlay.sync(&config, christmas_eve(), env);

    let GreetingStyle::Entrance(anim) = h.overlay.frame().unwrap().greeting.unwrap().style else {
        panic!("expected entrance style");
    };
    assert_eq!(anim.offset_px, 0.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Scatter
// ─────────────────────────────────────────────────────────────────────────────

fn scatter_config() -> EffectsConfig {
    EffectsConfig {
        text: "Noel".to_string(),
        text_mode: TextMode::Scatter,
        firework_interval_ms: 5000,
        scatter_seed: Some(9),
        ..Default::default()
    }
}

fn scatter_offsets(overlay: &EffectsOverlay<ManualTimers>) -> Vec<Option<(f32, f32)>> {
    match overlay.frame().unwrap().greeting.unwrap().style {
        GreetingStyle::Scatter { letters, .. } => letters
            .iter()
            .map(|l| l.offset.map(|o| (o.x, o.y)))
            .collect(),
        other => panic!("expected scatter style, got {other:?}"),
    }
}

#[test]
fn test_scatter_explodes_then_resets_after_window() {
    let h = Harness::mount(&scatter_config(), christmas_eve());
    assert!(h.overlay.is_exploding());
    assert!(scatter_offsets(&h.overlay).iter().all(Option::is_some));

    h.timers.advance(u64::from(EXPLODE_WINDOW_MS) - 1);
    assert!(h.overlay.is_exploding());

    h.timers.advance(1);
    assert!(!h.overlay.is_exploding());
    assert!(scatter_offsets(&h.overlay).iter().all(Option::is_none));
}

#[test]
fn test_scatter_recomputes_on_every_burst() {
    let h = Harness::mount(&scatter_config(), christmas_eve());
    let first = scatter_offsets(&h.overlay);

    h.timers.advance(5000);
    assert!(h.overlay.is_exploding());
    let second = scatter_offsets(&h.overlay);

    assert_eq!(first.len(), 4);
    assert_ne!(first, second);
}

#[test]
fn test_scatter_is_deterministic_for_seed() {
    let a = Harness::mount(&scatter_config(), christmas_eve());
    let b = Harness::mount(&scatter_config(), christmas_eve());
    assert_eq!(scatter_offsets(&a.overlay), scatter_offsets(&b.overlay));
}

#[test]
fn test_scatter_stays_in_viewport() {
    let mut h = Harness::new();
    let env = HostEnv {
        viewport: Some(Viewport {
            width: 200.0,
            height: 100.0,
        }),
        reduced_motion: false,
    };
    h.overlay.sync(&scatter_config(), christmas_eve(), env);

    for (x, y) in scatter_offsets(&h.overlay).into_iter().flatten() {
        assert!(x.abs() <= 100.0 && y.abs() <= 50.0);
    }
}

#[test]
fn test_unmount_cancels_pending_reset() {
    let mut h = Harness::mount(&scatter_config(), christmas_eve());
    assert_eq!(h.timers.pending(), 2);

    h.overlay.unmount();
    assert_eq!(h.timers.pending(), 0);
    assert!(!h.overlay.is_exploding());
}

#[test]
fn test_new_burst_replaces_pending_reset() {
    let config = EffectsConfig {
        firework_interval_ms: 1000,
        ..scatter_config()
    };
    let h = Harness::mount(&config, christmas_eve());

    // Each burst re-arms the reset, so letters stay scattered.
    h.timers.advance(1000);
    assert_eq!(h.timers.pending(), 2);
    h.timers.advance(1300);
    assert!(h.overlay.is_exploding());
    h.timers.advance(100);
    assert!(h.overlay.is_exploding());
    assert_eq!(h.bursts(), vec![0, 1000, 2000]);
}

#[test]
fn test_listener_notified_by_timers_only() {
    let mut h = Harness::new();
    let calls = Rc::new(Cell::new(0));
    let c = Rc::clone(&calls);
    h.overlay.set_listener(move || c.set(c.get() + 1));

    h.overlay.sync(&scatter_config(), christmas_eve(), HostEnv::default());
    assert_eq!(calls.get(), 0);

    // Reset at 1400, burst at 5000.
    h.timers.advance(5000);
    assert_eq!(calls.get(), 2);
}
