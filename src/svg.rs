//! SVG visualization of a presentation frame.
//!
//! Generates a single annotated panel showing the viewport box, the placed
//! content box, and any letterbox bars. Debugging aid for host
//! integrations.
//!
//! # Example
//!
//! ```
//! use zenview::svg::render_frame_svg;
//! use zenview::{ScalePolicy, Size};
//!
//! let frame = ScalePolicy::new(800.0, 500.0)
//!     .compute(Size::new(1000.0, 600.0))
//!     .unwrap();
//!
//! let svg = render_frame_svg(&frame);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::scale::{Frame, Size};

/// Maximum pixel width of the rendered panel.
const MAX_PANEL_W: f64 = 360.0;
/// Maximum pixel height of the rendered panel.
const MAX_PANEL_H: f64 = 240.0;
/// Margin around the panel.
const MARGIN: f64 = 40.0;
/// Height of the label text area above the panel.
const LABEL_H: f64 = 22.0;
/// Height of the annotation text area below the panel.
const ANNOTATION_H: f64 = 22.0;
/// Bars thinner than this (after panel scaling) are not drawn.
const MIN_BAR_PX: f64 = 0.5;

/// Render a complete SVG document showing a frame within its viewport.
pub fn render_frame_svg(frame: &Frame) -> String {
    let (panel_w, panel_h, scale) = scale_to_fit(frame.viewport);
    let total_w = panel_w + 2.0 * MARGIN;
    let total_h = panel_h + LABEL_H + ANNOTATION_H + 2.0 * MARGIN;

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Style — light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .inner { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .bar { fill: #c9c9c9; stroke: #9e9e9e; stroke-width: 1; stroke-dasharray: 4,2; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .inner { fill: #3a72a4; stroke: #5a9fd4; }
    .bar { fill: #1f1f1f; stroke: #4a4a4a; }
  }
</style>
"##,
    );

    let panel_x = MARGIN;
    let panel_y = MARGIN + LABEL_H;
    let center_x = total_w / 2.0;

    // Label
    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN + 14.0,
        escape_xml(&format!(
            "Viewport  {}×{}",
            fmt_px(frame.viewport.width),
            fmt_px(frame.viewport.height)
        ))
    ));
    svg.push('\n');

    // Viewport box
    push_rect(&mut svg, panel_x, panel_y, panel_w, panel_h, "outer");

    // Letterbox bars: the viewport area the content does not cover.
    let content_x = panel_x + frame.left * scale;
    let content_y = panel_y + frame.top * scale;
    let content_w = frame.size.width * scale;
    let content_h = frame.size.height * scale;

    let left_bar = content_x - panel_x;
    let right_bar = panel_w - (content_x - panel_x) - content_w;
    let top_bar = content_y - panel_y;
    let bottom_bar = panel_h - (content_y - panel_y) - content_h;

    if left_bar > MIN_BAR_PX {
        push_rect(&mut svg, panel_x, panel_y, left_bar, panel_h, "bar");
    }
    if right_bar > MIN_BAR_PX {
        push_rect(
            &mut svg,
            content_x + content_w,
            panel_y,
            right_bar,
            panel_h,
            "bar",
        );
    }
    if top_bar > MIN_BAR_PX {
        push_rect(&mut svg, panel_x, panel_y, panel_w, top_bar, "bar");
    }
    if bottom_bar > MIN_BAR_PX {
        push_rect(
            &mut svg,
            panel_x,
            content_y + content_h,
            panel_w,
            bottom_bar,
            "bar",
        );
    }

    // Content box
    push_rect(&mut svg, content_x, content_y, content_w, content_h, "inner");

    // Annotation
    let annotation = if frame.fills_viewport() {
        String::from("fills viewport")
    } else {
        format!(
            "content {}×{} at ({}, {})",
            fmt_px(frame.size.width),
            fmt_px(frame.size.height),
            fmt_px(frame.left),
            fmt_px(frame.top)
        )
    };
    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        panel_y + panel_h + 14.0,
        escape_xml(&annotation)
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

/// Scale viewport dimensions to fit the panel box, preserving aspect ratio.
fn scale_to_fit(viewport: Size) -> (f64, f64, f64) {
    if viewport.is_empty() {
        return (MAX_PANEL_W, MAX_PANEL_H, 1.0);
    }
    let scale = (MAX_PANEL_W / viewport.width).min(MAX_PANEL_H / viewport.height);
    (viewport.width * scale, viewport.height * scale, scale)
}

fn push_rect(svg: &mut String, x: f64, y: f64, w: f64, h: f64, class: &str) {
    svg.push_str(&format!(
        r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="{class}"/>"#
    ));
    svg.push('\n');
}

/// Format a pixel dimension, dropping a trailing `.0`.
fn fmt_px(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScalePolicy;

    #[test]
    fn svg_letterboxed_frame() {
        let frame = ScalePolicy::new(800.0, 500.0)
            .compute(Size::new(1000.0, 600.0))
            .unwrap();
        let svg = render_frame_svg(&frame);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("1000×600"));
        assert!(svg.contains("960×600"));
        assert!(svg.contains(r#"class="bar""#));
    }

    #[test]
    fn svg_stretch_has_no_bars() {
        let frame = ScalePolicy::default()
            .stretch(true)
            .compute(Size::new(640.0, 480.0))
            .unwrap();
        let svg = render_frame_svg(&frame);
        assert!(svg.contains("fills viewport"));
        assert!(!svg.contains(r#"class="bar""#));
    }

    #[test]
    fn svg_empty_viewport_still_renders() {
        let frame = ScalePolicy::default().compute(Size::new(0.0, 0.0)).unwrap();
        let svg = render_frame_svg(&frame);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
    }
}
