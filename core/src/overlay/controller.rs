//! Effects overlay controller.
//!
//! [`EffectsOverlay`] is the host-independent half of the component. The
//! host calls [`sync`](EffectsOverlay::sync) whenever it renders with a
//! configuration and [`frame`](EffectsOverlay::frame) to learn what to draw.
//! Timer work is delegated to a [`TimerDriver`]; the only timer state kept
//! here is the handles, so cancelling a cycle is dropping its handles.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use festive_types::{EffectsConfig, TextMode};

use super::frame::{GreetingLayer, OverlayFrame, greeting_style};
use crate::burst::{BurstRenderer, fire_crackers};
use crate::env::HostEnv;
use crate::timer::TimerDriver;
use crate::window::is_active;

/// How long letters stay scattered after a burst.
pub const EXPLODE_WINDOW_MS: u32 = 1400;

/// Lifecycle phase of a mounted overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Outside the active window: nothing rendered, no timers
    Inactive,
    /// Active with fireworks disabled: snow and text only
    Idle,
    /// Active with a live burst cycle
    Cycling,
}

/// Inputs that decide whether the burst cycle must be rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CycleDeps {
    active: bool,
    fireworks_enabled: bool,
    interval_ms: u32,
}

/// A running burst cycle. Dropping it cancels the repeating timer.
struct BurstCycle<H> {
    _interval: H,
    interval_ms: u32,
}

/// Animation state shared with timer callbacks.
struct AnimationState<H> {
    text_mode: TextMode,
    exploding: bool,
    /// Set by the first burst of a mount, never cleared
    has_played: bool,
    burst_count: u64,
    /// Pending end of the current explosion
    reset: Option<H>,
    listener: Option<Rc<dyn Fn()>>,
}

impl<H> AnimationState<H> {
    fn new() -> Self {
        Self {
            text_mode: TextMode::default(),
            exploding: false,
            has_played: false,
            burst_count: 0,
            reset: None,
            listener: None,
        }
    }
}

type SharedAnimation<H> = Rc<RefCell<AnimationState<H>>>;

/// Seasonal effects overlay for one mounted component instance.
pub struct EffectsOverlay<D: TimerDriver> {
    driver: D,
    renderer: Rc<dyn BurstRenderer>,
    config: EffectsConfig,
    env: HostEnv,
    active: bool,
    deps: Option<CycleDeps>,
    cycle: Option<BurstCycle<D::Handle>>,
    animation: SharedAnimation<D::Handle>,
}

impl<D> EffectsOverlay<D>
where
    D: TimerDriver + Clone + 'static,
    D::Handle: 'static,
{
    pub fn new(driver: D, renderer: Rc<dyn BurstRenderer>) -> Self {
        Self {
            driver,
            renderer,
            config: EffectsConfig::default(),
            env: HostEnv::default(),
            active: false,
            deps: None,
            cycle: None,
            animation: Rc::new(RefCell::new(AnimationState::new())),
        }
    }

    /// Register a callback run whenever a timer changes the animation state.
    ///
    /// Bursts fired from inside [`sync`](Self::sync) do not notify; the
    /// caller reads the frame afterwards anyway.
    pub fn set_listener(&mut self, listener: impl Fn() + 'static) {
        self.animation.borrow_mut().listener = Some(Rc::new(listener));
    }

    /// Apply a configuration for the current date and host environment.
    ///
    /// The burst cycle is rebuilt only when activation, the fireworks toggle
    /// or the interval changed; any other change leaves the running timers
    /// alone.
    pub fn sync(&mut self, config: &EffectsConfig, today: Option<NaiveDate>, env: HostEnv) {
        let active = is_active(today, &config.window());
        if active != self.active {
            tracing::debug!(active, ?today, force = config.force, "overlay activation changed");
        }

        self.config = config.clone();
        self.env = env;
        self.active = active;
        self.animation.borrow_mut().text_mode = config.text_mode;

        let deps = CycleDeps {
            active,
            fireworks_enabled: config.fireworks_enabled,
            interval_ms: config.firework_interval_ms,
        };
        if self.deps == Some(deps) {
            return;
        }

        self.teardown();
        self.deps = Some(deps);

        if !active {
            return;
        }
        if config.fireworks_enabled {
            self.start_cycle(config.firework_interval_ms);
        } else {
            // No bursts will come; the entrance plays as soon as text shows.
            self.animation.borrow_mut().has_played = true;
        }
    }

    /// Cancel all timers and render nothing until the next sync.
    pub fn unmount(&mut self) {
        self.teardown();
        self.deps = None;
        self.active = false;
        tracing::debug!("overlay unmounted");
    }

    pub fn phase(&self) -> OverlayPhase {
        match (self.active, self.cycle.is_some()) {
            (false, _) => OverlayPhase::Inactive,
            (true, false) => OverlayPhase::Idle,
            (true, true) => OverlayPhase::Cycling,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_exploding(&self) -> bool {
        self.animation.borrow().exploding
    }

    pub fn has_played(&self) -> bool {
        self.animation.borrow().has_played
    }

    /// Bursts fired since this overlay was created.
    pub fn burst_count(&self) -> u64 {
        self.animation.borrow().burst_count
    }

    /// Interval of the running cycle, if any.
    pub fn cycle_interval_ms(&self) -> Option<u32> {
        self.cycle.as_ref().map(|c| c.interval_ms)
    }

    /// Visible layers, or `None` when inactive.
    pub fn frame(&self) -> Option<OverlayFrame> {
        if !self.active {
            return None;
        }

        let greeting = if self.config.show_text {
            let animation = self.animation.borrow();
            let hidden = animation.text_mode == TextMode::Entrance && !animation.has_played;
            (!hidden).then(|| GreetingLayer {
                text: self.config.text.clone(),
                style: greeting_style(
                    animation.text_mode,
                    &self.config.text,
                    animation.exploding,
                    self.scatter_seed(animation.burst_count),
                    &self.env,
                ),
            })
        } else {
            None
        };

        Some(OverlayFrame {
            snowflake_count: self.config.snowflake_count,
            snow_seed: self.config.seed(),
            greeting,
        })
    }

    fn scatter_seed(&self, burst_count: u64) -> u64 {
        self.config.seed().wrapping_add(burst_count)
    }

    fn start_cycle(&mut self, interval_ms: u32) {
        tracing::debug!(interval_ms, "starting burst cycle");
        run_burst(&self.renderer, &self.animation, &self.driver, false);

        let renderer = Rc::clone(&self.renderer);
        let animation = Rc::clone(&self.animation);
        let driver = self.driver.clone();
        let interval = self.driver.every(
            interval_ms,
            Box::new(move || run_burst(&renderer, &animation, &driver, true)),
        );

        self.cycle = Some(BurstCycle {
            _interval: interval,
            interval_ms,
        });
    }

    fn teardown(&mut self) {
        if self.cycle.take().is_some() {
            tracing::debug!("burst cycle cancelled");
        }
        let pending_reset = {
            let mut animation = self.animation.borrow_mut();
            animation.exploding = false;
            animation.reset.take()
        };
        drop(pending_reset);
    }
}

impl<D: TimerDriver> Drop for EffectsOverlay<D> {
    fn drop(&mut self) {
        self.cycle = None;
        let pending_reset = self.animation.borrow_mut().reset.take();
        drop(pending_reset);
    }
}

/// Fire one burst and advance the animation state.
fn run_burst<D>(
    renderer: &Rc<dyn BurstRenderer>,
    animation: &SharedAnimation<D::Handle>,
    driver: &D,
    notify: bool,
) where
    D: TimerDriver,
    D::Handle: 'static,
{
    fire_crackers(renderer.as_ref());

    let (replaced, listener) = {
        let mut state = animation.borrow_mut();
        state.burst_count += 1;
        state.has_played = true;

        let mut replaced = None;
        if state.text_mode == TextMode::Scatter {
            state.exploding = true;
            let target = Rc::clone(animation);
            let reset = driver.once(
                EXPLODE_WINDOW_MS,
                Box::new(move || end_explosion(&target)),
            );
            replaced = state.reset.replace(reset);
        }
        tracing::debug!(burst = state.burst_count, exploding = state.exploding, "burst");
        (replaced, state.listener.clone())
    };
    drop(replaced);

    if notify && let Some(listener) = listener {
        listener();
    }
}

fn end_explosion<H>(animation: &SharedAnimation<H>) {
    // The handle of this timer stays in `reset` until the next burst or
    // teardown replaces it.
    let listener = {
        let mut state = animation.borrow_mut();
        state.exploding = false;
        state.listener.clone()
    };
    if let Some(listener) = listener {
        listener();
    }
}
