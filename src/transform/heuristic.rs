use crate::parser::{parse_float, Element};
use crate::types::CanvasSize;

/// How far from (0, 0) a background rectangle may sit, in user units
///
/// Absorbs rounding and sub-pixel offsets from export tools.
const ORIGIN_TOLERANCE: f64 = 2.0;

/// Fraction of the canvas a rectangle must cover on both axes
///
/// Background rects are often slightly inset, or the declared canvas size is
/// slightly stale, so exact-match comparison would miss them.
const CANVAS_COVERAGE: f64 = 0.95;

/// Absolute width threshold when the canvas size is unknown
const FALLBACK_MIN_WIDTH: f64 = 500.0;

/// Absolute height threshold when the canvas size is unknown
const FALLBACK_MIN_HEIGHT: f64 = 300.0;

/// Decide whether an element is likely a full-canvas background rectangle
///
/// All checks must pass:
/// 1. the local tag name is `rect` (no other shape is ever a candidate);
/// 2. the `style` attribute does not declare `fill:none` (any spacing/casing) -
///    an explicitly unfilled rectangle cannot be a visible background;
/// 3. `width` and `height` parse as numbers (`x`/`y` default to 0);
/// 4. the rect sits near the origin (both offsets within ±2 units);
/// 5. it is near canvas sized: at least 95% of both known canvas dimensions,
///    or wider than 500 and taller than 300 units when the canvas is unknown.
///
/// Pure function of its inputs; attribute values that fail numeric parsing are
/// treated as absent, never as errors.
///
/// # Examples
/// ```
/// use svg2transparent::parser::Element;
/// use svg2transparent::transform::is_background_candidate;
/// use svg2transparent::types::CanvasSize;
///
/// let mut rect = Element::new("rect");
/// rect.set_attr("width", "960");
/// rect.set_attr("height", "760");
/// assert!(is_background_candidate(&rect, &CanvasSize::known(1000.0, 800.0)));
/// ```
pub fn is_background_candidate(element: &Element, canvas: &CanvasSize) -> bool {
    if element.local_name() != "rect" {
        return false;
    }

    let style = element.attr("style").unwrap_or("");
    let normalized: String = style
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    if normalized.contains("fill:none") {
        return false;
    }

    let x = element.attr("x").and_then(parse_float).unwrap_or(0.0);
    let y = element.attr("y").and_then(parse_float).unwrap_or(0.0);
    let (Some(width), Some(height)) = (
        element.attr("width").and_then(parse_float),
        element.attr("height").and_then(parse_float),
    ) else {
        return false;
    };

    let near_origin = x.abs() <= ORIGIN_TOLERANCE && y.abs() <= ORIGIN_TOLERANCE;

    // A declared but zero-sized canvas is as useless as an absent one, so it
    // falls back to the absolute thresholds too.
    let near_canvas = match (canvas.width, canvas.height) {
        (Some(canvas_width), Some(canvas_height))
            if canvas_width != 0.0 && canvas_height != 0.0 =>
        {
            width >= CANVAS_COVERAGE * canvas_width && height >= CANVAS_COVERAGE * canvas_height
        }
        _ => width > FALLBACK_MIN_WIDTH && height > FALLBACK_MIN_HEIGHT,
    };

    near_origin && near_canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(attrs: &[(&str, &str)]) -> Element {
        let mut element = Element::new("rect");
        for (key, value) in attrs {
            element.set_attr(key, value);
        }
        element
    }

    #[test]
    fn test_full_canvas_rect_is_candidate() {
        let r = rect(&[("x", "0"), ("y", "0"), ("width", "960"), ("height", "760")]);
        assert!(is_background_candidate(
            &r,
            &CanvasSize::known(1000.0, 800.0)
        ));
    }

    #[test]
    fn test_non_rect_is_never_candidate() {
        let mut circle = Element::new("circle");
        circle.set_attr("width", "1000");
        circle.set_attr("height", "800");
        assert!(!is_background_candidate(
            &circle,
            &CanvasSize::known(1000.0, 800.0)
        ));
    }

    #[test]
    fn test_namespaced_rect_is_candidate() {
        let mut r = Element::new("svg:rect");
        r.set_attr("width", "1000");
        r.set_attr("height", "800");
        assert!(is_background_candidate(
            &r,
            &CanvasSize::known(1000.0, 800.0)
        ));
    }

    #[test]
    fn test_fill_none_is_rejected_regardless_of_geometry() {
        for style in ["fill:none", "fill: none", "FILL : NONE;", "stroke:red; fill :none"] {
            let r = rect(&[("width", "1000"), ("height", "800"), ("style", style)]);
            assert!(
                !is_background_candidate(&r, &CanvasSize::known(1000.0, 800.0)),
                "style {style:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_filled_style_is_still_candidate() {
        let r = rect(&[("width", "1000"), ("height", "800"), ("style", "fill:#fff")]);
        assert!(is_background_candidate(
            &r,
            &CanvasSize::known(1000.0, 800.0)
        ));
    }

    #[test]
    fn test_missing_width_or_height_is_rejected() {
        let no_height = rect(&[("width", "1000")]);
        assert!(!is_background_candidate(
            &no_height,
            &CanvasSize::known(1000.0, 800.0)
        ));

        let no_width = rect(&[("height", "800")]);
        assert!(!is_background_candidate(
            &no_width,
            &CanvasSize::known(1000.0, 800.0)
        ));
    }

    #[test]
    fn test_unparseable_size_is_rejected() {
        let r = rect(&[("width", "100%"), ("height", "auto")]);
        // "100%" strips to a number, "auto" does not
        assert!(!is_background_candidate(
            &r,
            &CanvasSize::known(1000.0, 800.0)
        ));
    }

    #[test]
    fn test_coverage_threshold_boundary() {
        // 96% on both axes: candidate
        let covering = rect(&[("width", "960"), ("height", "760")]);
        assert!(is_background_candidate(
            &covering,
            &CanvasSize::known(1000.0, 800.0)
        ));

        // 90% width coverage: below the 95% bar
        let narrow = rect(&[("width", "900"), ("height", "760")]);
        assert!(!is_background_candidate(
            &narrow,
            &CanvasSize::known(1000.0, 800.0)
        ));
    }

    #[test]
    fn test_off_origin_rect_is_rejected() {
        let shifted = rect(&[("x", "50"), ("y", "0"), ("width", "1000"), ("height", "800")]);
        assert!(!is_background_candidate(
            &shifted,
            &CanvasSize::known(1000.0, 800.0)
        ));
    }

    #[test]
    fn test_sub_pixel_offsets_are_tolerated() {
        let r = rect(&[
            ("x", "-1.5"),
            ("y", "2"),
            ("width", "1000"),
            ("height", "800"),
        ]);
        assert!(is_background_candidate(
            &r,
            &CanvasSize::known(1000.0, 800.0)
        ));
    }

    #[test]
    fn test_unknown_canvas_uses_absolute_fallback() {
        let big = rect(&[("x", "1"), ("y", "1"), ("width", "800"), ("height", "400")]);
        assert!(is_background_candidate(&big, &CanvasSize::unknown()));

        let small = rect(&[("width", "400"), ("height", "400")]);
        assert!(!is_background_candidate(&small, &CanvasSize::unknown()));
    }

    #[test]
    fn test_zero_canvas_uses_absolute_fallback() {
        let big = rect(&[("width", "800"), ("height", "400")]);
        assert!(is_background_candidate(&big, &CanvasSize::known(0.0, 0.0)));
    }

    #[test]
    fn test_unit_suffixes_are_stripped() {
        let r = rect(&[("width", "1000px"), ("height", "800px")]);
        assert!(is_background_candidate(
            &r,
            &CanvasSize::known(1000.0, 800.0)
        ));
    }
}
