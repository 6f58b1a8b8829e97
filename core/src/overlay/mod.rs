//! Seasonal effects overlay
//!
//! This module provides:
//! - **Controller**: the [`EffectsOverlay`] state machine that decides
//!   activation and owns the burst cycle
//! - **Frame**: a description of the visible layers for the host to render
//!
//! # Lifecycle
//!
//! ```text
//!            sync: inactive                 sync: active, fireworks off
//!  ┌──────────┐ ◄──────────────── ┌──────┐ ◄──────────────── ┌─────────┐
//!  │ Inactive │                   │ Idle │                   │ Cycling │
//!  └──────────┘ ────────────────► └──────┘ ────────────────► └─────────┘
//!               sync: active                sync: fireworks on
//!                                           (burst now, then every interval)
//!
//!  Cycling ──(unmount / active, fireworks or interval change)──► cycle dropped
//! ```

mod controller;
mod frame;

#[cfg(test)]
mod controller_tests;

pub use controller::{EXPLODE_WINDOW_MS, EffectsOverlay, OverlayPhase};
pub use frame::{
    ENTRANCE_DURATION_MS, ENTRANCE_OFFSET_PX, EntranceAnimation, GreetingLayer, GreetingStyle,
    OverlayFrame, ScatterLetter,
};
