//! Presentation-frame computation for fixed-resolution surfaces.
//!
//! Computes the on-screen size and placement of a fixed logical resolution
//! inside a variable-size viewport. Pure geometry — no host calls, no
//! allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zenview::{ScalePolicy, Size};
//!
//! let frame = ScalePolicy::new(800.0, 500.0)
//!     .compute(Size::new(1000.0, 600.0))
//!     .unwrap();
//!
//! // Height is the limiting dimension: scale = min(1.25, 1.2) = 1.2.
//! assert_eq!(frame.size, Size::new(960.0, 600.0));
//! assert_eq!((frame.left, frame.top), (20.0, 0.0));
//! ```

/// Width × height in pixels.
///
/// Dimensions are floats: presentation boxes accept fractional pixel sizes
/// and the scale factor is continuous.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Whether either dimension is zero or smaller.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Both components clamped to ≥ 0. NaN also lands on 0: `f64::max`
    /// returns the non-NaN operand.
    fn clamped(self) -> Self {
        Self {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
        }
    }
}

/// How a fixed logical resolution is presented inside a viewport.
///
/// Immutable once handed to a manager. Defaults: 800×500 logical pixels,
/// letterbox bars on, stretch off.
///
/// # Example
///
/// ```
/// use zenview::{ScalePolicy, Size};
///
/// let policy = ScalePolicy::new(320.0, 240.0).stretch(true);
/// let frame = policy.compute(Size::new(1000.0, 600.0)).unwrap();
/// assert_eq!(frame.size, Size::new(1000.0, 600.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScalePolicy {
    /// Fixed logical width of the rendered content.
    pub game_width: f64,
    /// Fixed logical height of the rendered content.
    pub game_height: f64,
    /// Center the content and pad the leftover space when not stretching.
    pub bars: bool,
    /// Fill the viewport exactly, ignoring aspect ratio.
    pub stretch: bool,
}

impl Default for ScalePolicy {
    fn default() -> Self {
        Self::new(800.0, 500.0)
    }
}

impl ScalePolicy {
    /// Create a policy for the given logical resolution, bars on, stretch off.
    pub const fn new(game_width: f64, game_height: f64) -> Self {
        Self {
            game_width,
            game_height,
            bars: true,
            stretch: false,
        }
    }

    /// Set whether to fill the viewport exactly, ignoring aspect ratio.
    pub const fn stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }

    /// Set whether to center the content and pad the leftover space.
    pub const fn bars(mut self, bars: bool) -> Self {
        self.bars = bars;
        self
    }

    /// The logical resolution as a [`Size`].
    pub const fn logical_size(&self) -> Size {
        Size::new(self.game_width, self.game_height)
    }

    /// Check the logical resolution without computing a frame.
    pub fn validate(&self) -> Result<(), ScaleError> {
        if !self.game_width.is_finite() || !self.game_height.is_finite() {
            return Err(ScaleError::NonFiniteLogicalDimension);
        }
        if self.game_width <= 0.0 || self.game_height <= 0.0 {
            return Err(ScaleError::ZeroLogicalDimension);
        }
        Ok(())
    }

    /// Compute the presentation frame for the given viewport.
    ///
    /// When stretching, the frame fills the viewport exactly. Otherwise the
    /// content is scaled by the limiting dimension so it fits entirely
    /// within the viewport at the logical aspect ratio, and, with bars
    /// enabled, centered with half the leftover space on each side.
    ///
    /// Negative or NaN viewport dimensions are clamped to 0 (an empty
    /// viewport yields a zero-size frame); the logical resolution itself is
    /// validated.
    pub fn compute(&self, viewport: Size) -> Result<Frame, ScaleError> {
        self.validate()?;
        let viewport = viewport.clamped();

        let size = if self.stretch {
            viewport
        } else {
            fit_scaled(self.logical_size(), viewport)
        };

        let (left, top) = if !self.stretch && self.bars {
            centered_offset(viewport, size)
        } else {
            (0.0, 0.0)
        };

        Ok(Frame {
            size,
            left,
            top,
            viewport,
        })
    }
}

/// Computed presentation box: where the surface sits and how large it is
/// on screen.
///
/// Offsets are absolute: measured from the viewport origin, independent of
/// any layout flow the host may have.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// On-screen size of the surface, in pixels.
    pub size: Size,
    /// Horizontal offset of the surface from the viewport origin.
    pub left: f64,
    /// Vertical offset of the surface from the viewport origin.
    pub top: f64,
    /// The viewport the frame was computed for.
    pub viewport: Size,
}

impl Frame {
    /// Whether the surface covers the whole viewport (no bars visible).
    pub fn fills_viewport(&self) -> bool {
        self.size == self.viewport
    }

    /// Total leftover space per axis: `(horizontal, vertical)`. Split
    /// across the two bars when the frame is centered; zero on the axis the
    /// content spans fully.
    pub fn bar_extents(&self) -> (f64, f64) {
        (
            (self.viewport.width - self.size.width).max(0.0),
            (self.viewport.height - self.size.height).max(0.0),
        )
    }

    /// This frame with every component rounded to whole pixels, for hosts
    /// that only place surfaces on integer boundaries.
    pub fn snapped(&self) -> Frame {
        Frame {
            size: Size::new(round(self.size.width), round(self.size.height)),
            left: round(self.left),
            top: round(self.top),
            viewport: self.viewport,
        }
    }
}

/// Presentation-frame computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScaleError {
    /// Logical width or height is zero or negative.
    ZeroLogicalDimension,
    /// Logical width or height is NaN or infinite.
    NonFiniteLogicalDimension,
}

// ============================================================================
// Internal geometry
// ============================================================================

/// Scale `logical` so it fits entirely inside `viewport` at its own aspect
/// ratio. The limiting dimension constrains; the other is ≤ the viewport.
fn fit_scaled(logical: Size, viewport: Size) -> Size {
    let scale = (viewport.width / logical.width).min(viewport.height / logical.height);
    Size::new(logical.width * scale, logical.height * scale)
}

/// Offset that centers `inner` within `outer`: half the leftover on each axis.
fn centered_offset(outer: Size, inner: Size) -> (f64, f64) {
    (
        (outer.width - inner.width) / 2.0,
        (outer.height - inner.height) / 2.0,
    )
}

/// `f64::round` lives in `std`; route through `num_traits` so snapping also
/// works under `no_std`.
fn round(v: f64) -> f64 {
    num_traits::Float::round(v)
}
