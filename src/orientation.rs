//! Viewport orientation classification and change detection.

use crate::scale::Size;

/// Coarse classification of viewport shape.
///
/// A viewport is landscape only when strictly wider than tall; a square
/// viewport classifies as portrait.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Wider than tall.
    Landscape,
    /// At least as tall as wide.
    Portrait,
}

impl Orientation {
    /// Classify a viewport by its dimensions.
    pub fn classify(viewport: Size) -> Self {
        if viewport.width > viewport.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// The other orientation.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Landscape => Self::Portrait,
            Self::Portrait => Self::Landscape,
        }
    }

    /// Stable lowercase name, suitable for logs and host-facing strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }

    /// Whether this is [`Landscape`](Self::Landscape).
    pub const fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape)
    }

    /// Whether this is [`Portrait`](Self::Portrait).
    pub const fn is_portrait(self) -> bool {
        matches!(self, Self::Portrait)
    }
}

/// Change detection over a stream of viewport observations.
///
/// Holds the orientation as of the last processed observation. Host
/// environments can deliver orientation events without an actual flip
/// (transient dimension jitter during rotation); [`observe`](Self::observe)
/// filters those out so downstream observers only hear real transitions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OrientationTracker {
    current: Orientation,
}

impl OrientationTracker {
    /// Start tracking from the current viewport.
    pub fn new(viewport: Size) -> Self {
        Self {
            current: Orientation::classify(viewport),
        }
    }

    /// The orientation as of the last observation.
    pub const fn current(&self) -> Orientation {
        self.current
    }

    /// Process one observation. Returns the new orientation only when it
    /// differs from the stored one; otherwise leaves state untouched.
    pub fn observe(&mut self, viewport: Size) -> Option<Orientation> {
        let next = Orientation::classify(viewport);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }
}
