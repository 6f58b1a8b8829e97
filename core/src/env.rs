//! Host environment inputs: wall clock, viewport size and motion preference.
//!
//! The overlay never reads ambient state itself. Hosts hand it a date from a
//! [`Clock`] and a [`HostEnv`] snapshot on every sync, which keeps the date
//! check and the scatter generator pure.

use chrono::{Local, NaiveDate};

/// Source of the current local calendar date.
pub trait Clock {
    /// Today's date, or `None` when the environment has no definable "now"
    /// (headless rendering, no window object).
    fn today(&self) -> Option<NaiveDate>;
}

/// Local system time via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Option<NaiveDate> {
        Some(Local::now().date_naive())
    }
}

/// A clock pinned to one date (or to no date at all).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedClock(pub Option<NaiveDate>);

impl FixedClock {
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(year, month, day))
    }

    /// A clock for an environment where "now" cannot be read.
    pub fn headless() -> Self {
        Self(None)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Option<NaiveDate> {
        self.0
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Snapshot of host-provided presentation inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HostEnv {
    /// `None` when no viewport exists (headless)
    pub viewport: Option<Viewport>,
    /// User prefers reduced motion
    pub reduced_motion: bool,
}
