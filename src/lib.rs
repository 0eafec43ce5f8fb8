//! Viewport presentation layout: letterboxing, stretching, and orientation
//! tracking for fixed-resolution rendering surfaces.
//!
//! Pure geometry plus a thin host seam: no windowing dependency, no
//! allocations in the core, `no_std` compatible.
//!
//! # Modules
//!
//! - [`scale`] — presentation-frame computation (fit, stretch, centering)
//! - [`orientation`] — landscape/portrait classification and change detection
//! - `manager` — host stitching, observers, event routing (`alloc`)
//! - `svg` — frame visualization for debugging (`svg` feature)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod orientation;
pub mod scale;

#[cfg(feature = "alloc")]
pub mod manager;

#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types from scale and orientation modules
pub use orientation::{Orientation, OrientationTracker};
pub use scale::{Frame, ScaleError, ScalePolicy, Size};

#[cfg(feature = "alloc")]
pub use manager::{
    OrientationObserver, ResizeMetrics, ResizeObserver, ScaleHost, ScaleManager, ScaleOptions,
    ViewportEvent,
};
