//! Stitches the geometry core to a host application and its observers.
//!
//! The host is abstract: anything that can report its viewport and accept
//! surface placement implements [`ScaleHost`]. The embedder owns the event
//! wiring; it routes the host's resize / orientation notifications to
//! [`ScaleManager::handle_event`], which re-queries the current dimensions
//! and calls the pure geometry. No registration is retained anywhere, so
//! dropping the manager releases both observers and nothing can leak.
//!
//! # Example
//!
//! ```
//! use zenview::{ScaleHost, ScaleManager, ScaleOptions, Size, ViewportEvent};
//!
//! struct Host {
//!     viewport: Size,
//!     surface: (f64, f64, f64, f64),
//!     backing: (f64, f64),
//! }
//!
//! impl ScaleHost for Host {
//!     fn viewport(&self) -> Size {
//!         self.viewport
//!     }
//!     fn set_surface_size(&mut self, width: f64, height: f64) {
//!         (self.surface.0, self.surface.1) = (width, height);
//!     }
//!     fn place_surface(&mut self, left: f64, top: f64) {
//!         (self.surface.2, self.surface.3) = (left, top);
//!     }
//!     fn resize_backing(&mut self, width: f64, height: f64) {
//!         self.backing = (width, height);
//!     }
//! }
//!
//! let mut host = Host {
//!     viewport: Size::new(1000.0, 600.0),
//!     surface: (0.0, 0.0, 0.0, 0.0),
//!     backing: (0.0, 0.0),
//! };
//! let mut manager = ScaleManager::new(&mut host, ScaleOptions::default()).unwrap();
//!
//! // The construction pass already letterboxed the surface.
//! assert_eq!(host.surface, (960.0, 600.0, 20.0, 0.0));
//! assert_eq!(host.backing, (800.0, 500.0));
//!
//! host.viewport = Size::new(500.0, 900.0);
//! manager.handle_event(&mut host, ViewportEvent::Resized).unwrap();
//! manager.handle_event(&mut host, ViewportEvent::OrientationChanged).unwrap();
//! assert!(manager.orientation().is_portrait());
//! ```

use alloc::boxed::Box;

use crate::orientation::{Orientation, OrientationTracker};
use crate::scale::{Frame, ScaleError, ScalePolicy, Size};

/// Host integration seam: what the manager needs from the embedding
/// application.
///
/// Surface placement is overlay-style: offsets position the surface
/// relative to the viewport origin, independent of any layout flow the
/// host may have.
pub trait ScaleHost {
    /// Current viewport dimensions, in pixels. Re-queried on every event;
    /// notifications carry no payload.
    fn viewport(&self) -> Size;

    /// Set the on-screen size of the surface's presentation box.
    fn set_surface_size(&mut self, width: f64, height: f64);

    /// Place the presentation box at an absolute offset from the viewport
    /// origin.
    fn place_surface(&mut self, left: f64, top: f64);

    /// Resize the renderer's backing buffer. The manager always passes the
    /// fixed logical resolution; presentation scaling never re-renders at
    /// a new resolution.
    fn resize_backing(&mut self, width: f64, height: f64);
}

/// Snapshot handed to the resize observer after a pass completes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeMetrics {
    /// On-screen width of the surface.
    pub scaled_width: f64,
    /// On-screen height of the surface.
    pub scaled_height: f64,
    /// Viewport width at the time of the pass.
    pub viewport_width: f64,
    /// Viewport height at the time of the pass.
    pub viewport_height: f64,
}

impl ResizeMetrics {
    fn from_frame(frame: &Frame) -> Self {
        Self {
            scaled_width: frame.size.width,
            scaled_height: frame.size.height,
            viewport_width: frame.viewport.width,
            viewport_height: frame.viewport.height,
        }
    }
}

/// Observer of completed resize passes.
pub type ResizeObserver = Box<dyn FnMut(ResizeMetrics)>;

/// Observer of orientation transitions.
pub type OrientationObserver = Box<dyn FnMut(Orientation)>;

/// Configuration for a [`ScaleManager`].
///
/// Defaults: 800×500 logical resolution, bars on, stretch off, no
/// observers.
#[derive(Default)]
pub struct ScaleOptions {
    policy: ScalePolicy,
    on_resize: Option<ResizeObserver>,
    on_orientation_change: Option<OrientationObserver>,
}

impl ScaleOptions {
    /// Options with the given policy and no observers.
    pub fn new(policy: ScalePolicy) -> Self {
        Self {
            policy,
            on_resize: None,
            on_orientation_change: None,
        }
    }

    /// Set the logical resolution.
    pub fn logical_size(mut self, width: f64, height: f64) -> Self {
        self.policy.game_width = width;
        self.policy.game_height = height;
        self
    }

    /// Set whether to fill the viewport exactly, ignoring aspect ratio.
    pub fn stretch(mut self, stretch: bool) -> Self {
        self.policy.stretch = stretch;
        self
    }

    /// Set whether to center the content and pad the leftover space.
    pub fn bars(mut self, bars: bool) -> Self {
        self.policy.bars = bars;
        self
    }

    /// Observer invoked after every resize pass.
    pub fn on_resize(mut self, observer: impl FnMut(ResizeMetrics) + 'static) -> Self {
        self.on_resize = Some(Box::new(observer));
        self
    }

    /// Observer invoked only when the orientation actually flips.
    pub fn on_orientation_change(mut self, observer: impl FnMut(Orientation) + 'static) -> Self {
        self.on_orientation_change = Some(Box::new(observer));
        self
    }
}

/// A host notification, routed by the embedder.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViewportEvent {
    /// The viewport was resized.
    Resized,
    /// The host reports a possible orientation change.
    OrientationChanged,
}

/// Adapts a fixed-resolution rendering surface to the host viewport.
///
/// Construction captures the starting orientation and performs one
/// immediate resize pass. Afterwards the embedder routes host
/// notifications through [`handle_event`](Self::handle_event), or calls
/// [`resize`](Self::resize) and
/// [`handle_orientation_change`](Self::handle_orientation_change)
/// directly.
///
/// A plain resize never updates the stored orientation: "size changed"
/// and "orientation changed" stay distinct signals.
pub struct ScaleManager {
    policy: ScalePolicy,
    tracker: OrientationTracker,
    on_resize: Option<ResizeObserver>,
    on_orientation_change: Option<OrientationObserver>,
}

impl ScaleManager {
    /// Create a manager and perform the initial resize pass.
    pub fn new<H: ScaleHost>(host: &mut H, options: ScaleOptions) -> Result<Self, ScaleError> {
        let ScaleOptions {
            policy,
            on_resize,
            on_orientation_change,
        } = options;
        let mut manager = Self {
            policy,
            tracker: OrientationTracker::new(host.viewport()),
            on_resize,
            on_orientation_change,
        };
        manager.resize(host)?;
        Ok(manager)
    }

    /// Recompute the presentation frame from the current viewport and
    /// apply it: surface size, absolute placement, backing buffer at the
    /// fixed logical resolution, then the resize observer. Returns the
    /// applied frame.
    ///
    /// Idempotent: repeated calls with an unchanged viewport apply
    /// identical geometry and hand the observer identical metrics.
    pub fn resize<H: ScaleHost>(&mut self, host: &mut H) -> Result<Frame, ScaleError> {
        let frame = self.policy.compute(host.viewport())?;
        host.set_surface_size(frame.size.width, frame.size.height);
        host.place_surface(frame.left, frame.top);
        host.resize_backing(self.policy.game_width, self.policy.game_height);
        if let Some(observer) = self.on_resize.as_mut() {
            observer(ResizeMetrics::from_frame(&frame));
        }
        Ok(frame)
    }

    /// Re-classify the current viewport; on an actual flip, store the new
    /// orientation and notify the observer. Redundant host events are
    /// dropped silently. Never touches the surface.
    pub fn handle_orientation_change<H: ScaleHost>(&mut self, host: &H) -> Option<Orientation> {
        let changed = self.tracker.observe(host.viewport())?;
        if let Some(observer) = self.on_orientation_change.as_mut() {
            observer(changed);
        }
        Some(changed)
    }

    /// Route a host notification to the matching handler.
    pub fn handle_event<H: ScaleHost>(
        &mut self,
        host: &mut H,
        event: ViewportEvent,
    ) -> Result<(), ScaleError> {
        match event {
            ViewportEvent::Resized => {
                self.resize(host)?;
            }
            ViewportEvent::OrientationChanged => {
                self.handle_orientation_change(host);
            }
        }
        Ok(())
    }

    /// The orientation as of the last processed orientation event (or
    /// construction).
    pub fn orientation(&self) -> Orientation {
        self.tracker.current()
    }

    /// The active presentation policy.
    pub fn policy(&self) -> &ScalePolicy {
        &self.policy
    }
}
