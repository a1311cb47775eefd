//! Lenient attribute-string-to-number coercion
//!
//! SVG exporters write numeric attributes with unit suffixes (`"100px"`,
//! `"2.5mm"`) or stray whitespace. Everything in this module collapses a failed
//! parse to `None` instead of an error: a value that cannot be read as a number
//! is treated as absent by the rest of the pipeline.

/// Parse an attribute value as a float, ignoring non-numeric characters
///
/// Strips every character except ASCII digits, `.`, `-` and the exponent
/// markers `e`/`E` before parsing. A minus is only accepted where a float
/// grammar allows one (leading, or after an exponent marker), so mangled input
/// like `"1-2"` still yields `None`.
///
/// # Examples
/// ```
/// use svg2transparent::parser::parse_float;
///
/// assert_eq!(parse_float("100px"), Some(100.0));
/// assert_eq!(parse_float(" -2.5 "), Some(-2.5));
/// assert_eq!(parse_float("1e3"), Some(1000.0));
/// assert_eq!(parse_float("auto"), None);
/// ```
pub fn parse_float(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|&c| c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E'))
        .collect();
    cleaned.parse::<f64>().ok()
}

/// Extract the width/height components of a `viewBox` attribute
///
/// A viewBox is a whitespace or comma separated 4-tuple
/// `min-x min-y width height`. Returns `None` unless exactly four components
/// are present; each returned dimension is independently nullable since a
/// component may itself fail to parse.
pub fn view_box_size(raw: &str) -> Option<(Option<f64>, Option<f64>)> {
    let normalized = raw.replace(',', " ");
    let parts: Vec<&str> = normalized.split_whitespace().collect();
    if parts.len() != 4 {
        return None;
    }
    Some((parse_float(parts[2]), parse_float(parts[3])))
}
