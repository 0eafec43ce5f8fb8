//! Brute-force sweeps of the presentation-frame geometry.
//!
//! Every combination of a logical-resolution table and a viewport grid is
//! pushed through the frame computation and checked against the geometric
//! invariants: aspect preservation, containment, centering, stretch
//! exactness.

use zenview::{ScaleError, ScalePolicy, Size};

const LOGICAL: [(f64, f64); 5] = [
    (800.0, 500.0),
    (320.0, 240.0),
    (123.0, 7.0),
    (500.0, 1000.0),
    (1.0, 1.0),
];

const VIEWPORT_WIDTHS: [f64; 7] = [1.0, 37.5, 320.0, 799.0, 800.0, 1366.0, 3840.0];
const VIEWPORT_HEIGHTS: [f64; 7] = [1.0, 99.0, 240.0, 500.0, 768.0, 1080.0, 2160.0];

fn viewports() -> impl Iterator<Item = Size> {
    VIEWPORT_WIDTHS
        .iter()
        .flat_map(|&w| VIEWPORT_HEIGHTS.iter().map(move |&h| Size::new(w, h)))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn aspect_ratio_preserved_without_stretch() {
    for (gw, gh) in LOGICAL {
        let policy = ScalePolicy::new(gw, gh);
        for viewport in viewports() {
            let frame = policy.compute(viewport).unwrap();
            assert!(
                approx(frame.size.width * gh, frame.size.height * gw),
                "{gw}×{gh} into {}×{}: got {}×{}",
                viewport.width,
                viewport.height,
                frame.size.width,
                frame.size.height
            );
        }
    }
}

#[test]
fn content_never_overflows_viewport() {
    for (gw, gh) in LOGICAL {
        let policy = ScalePolicy::new(gw, gh);
        for viewport in viewports() {
            let frame = policy.compute(viewport).unwrap();
            let slack_w = viewport.width.abs() * 1e-12 + 1e-9;
            let slack_h = viewport.height.abs() * 1e-12 + 1e-9;
            assert!(frame.size.width <= viewport.width + slack_w);
            assert!(frame.size.height <= viewport.height + slack_h);
            assert!(frame.size.width >= 0.0 && frame.size.height >= 0.0);
        }
    }
}

#[test]
fn centering_splits_leftover_space_evenly() {
    for (gw, gh) in LOGICAL {
        let policy = ScalePolicy::new(gw, gh);
        for viewport in viewports() {
            let frame = policy.compute(viewport).unwrap();
            assert_eq!(frame.left, (viewport.width - frame.size.width) / 2.0);
            assert_eq!(frame.top, (viewport.height - frame.size.height) / 2.0);
        }
    }
}

#[test]
fn stretch_matches_viewport_exactly() {
    for (gw, gh) in LOGICAL {
        let policy = ScalePolicy::new(gw, gh).stretch(true);
        for viewport in viewports() {
            let frame = policy.compute(viewport).unwrap();
            assert_eq!(frame.size, viewport);
            assert_eq!((frame.left, frame.top), (0.0, 0.0));
        }
    }
}

#[test]
fn disabled_bars_zero_both_offsets() {
    for (gw, gh) in LOGICAL {
        let policy = ScalePolicy::new(gw, gh).bars(false);
        for viewport in viewports() {
            let frame = policy.compute(viewport).unwrap();
            assert_eq!((frame.left, frame.top), (0.0, 0.0));
        }
    }
}

#[test]
fn snapped_frames_are_integral() {
    for (gw, gh) in LOGICAL {
        let policy = ScalePolicy::new(gw, gh);
        for viewport in viewports() {
            let frame = policy.compute(viewport).unwrap().snapped();
            assert_eq!(frame.size.width.fract(), 0.0);
            assert_eq!(frame.size.height.fract(), 0.0);
            assert_eq!(frame.left.fract(), 0.0);
            assert_eq!(frame.top.fract(), 0.0);
        }
    }
}

#[test]
fn degenerate_viewports_degrade_to_empty() {
    let policy = ScalePolicy::default();
    for viewport in [
        Size::new(0.0, 0.0),
        Size::new(-10.0, 600.0),
        Size::new(800.0, -0.5),
        Size::new(f64::NAN, 480.0),
    ] {
        let frame = policy.compute(viewport).unwrap();
        assert_eq!(frame.size, Size::new(0.0, 0.0), "{viewport:?}");
    }
}

#[test]
fn degenerate_logical_resolutions_error() {
    let viewport = Size::new(800.0, 600.0);
    for (gw, gh, expected) in [
        (0.0, 500.0, ScaleError::ZeroLogicalDimension),
        (800.0, 0.0, ScaleError::ZeroLogicalDimension),
        (-800.0, 500.0, ScaleError::ZeroLogicalDimension),
        (f64::NAN, 500.0, ScaleError::NonFiniteLogicalDimension),
        (800.0, f64::INFINITY, ScaleError::NonFiniteLogicalDimension),
    ] {
        assert_eq!(
            ScalePolicy::new(gw, gh).compute(viewport),
            Err(expected),
            "{gw}×{gh}"
        );
    }
}
