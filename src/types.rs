/// Declared rendering viewport of an SVG document
///
/// Either dimension may be unknown: the root element is free to omit `width`,
/// `height` and `viewBox`, or to carry values that do not parse as numbers.
/// Resolved once per document and held immutable for the whole transform pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    /// Canvas width in user units, if declared and parseable
    pub width: Option<f64>,
    /// Canvas height in user units, if declared and parseable
    pub height: Option<f64>,
}

impl CanvasSize {
    /// Create a fully known canvas size
    pub fn known(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Create a canvas size with both dimensions unknown
    pub fn unknown() -> Self {
        Self {
            width: None,
            height: None,
        }
    }
}
