/// Inline-style properties that paint the canvas and must not survive cleaning
const STRIPPED_PROPERTIES: [&str; 3] = ["background", "background-color", "fill"];

/// Strip background-related declarations from an inline `style` value
///
/// Drops every `background`, `background-color` and top-level `fill`
/// declaration (property names matched case-insensitively), then rejoins the
/// survivors with single `;` separators, so repeated or dangling separators do
/// not accumulate. May return an empty string.
///
/// # Examples
/// ```
/// use svg2transparent::transform::strip_background_declarations;
///
/// let cleaned = strip_background_declarations("background: #fff; stroke: red");
/// assert_eq!(cleaned, "stroke: red");
/// ```
pub fn strip_background_declarations(style: &str) -> String {
    style
        .split(';')
        .map(str::trim)
        .filter(|declaration| !declaration.is_empty())
        .filter(|declaration| {
            let property = declaration
                .split(':')
                .next()
                .unwrap_or("")
                .trim()
                .to_ascii_lowercase();
            !STRIPPED_PROPERTIES.contains(&property.as_str())
        })
        .collect::<Vec<_>>()
        .join(";")
}
