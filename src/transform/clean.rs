//! # Document cleaning pipeline
//!
//! Parses an SVG file, removes every rectangle the heuristic flags as a
//! full-canvas background, scrubs background styling off the root element,
//! injects a transparency override, and writes the result back out.

use crate::error::Result;
use crate::parser::{parse_document, parse_float, view_box_size, write_document, Element, XmlNode};
use crate::transform::heuristic::is_background_candidate;
use crate::transform::style::strip_background_declarations;
use crate::types::CanvasSize;
use std::fs;
use std::path::Path;

/// Canonical SVG namespace, re-declared as the default on every output root
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Stylesheet rule injected into `<defs>` to force a transparent canvas
///
/// Covers background mechanisms the rect removal cannot reach (CSS set by the
/// rendering host, missed non-rect backdrops).
const TRANSPARENCY_OVERRIDE: &str = "svg{background:none !important;}";

/// Clean one SVG file and write the transparent version to `output_path`
///
/// Returns the number of background rectangles removed. Zero removals is not
/// an error: the document is still written through with its root styling
/// scrubbed and the transparency override in place.
///
/// # Errors
/// * [`crate::SvgError::IoError`] - Input unreadable or output unwritable
/// * [`crate::SvgError::Xml`] and friends - Input is not well-formed XML
///
/// # Examples
/// ```no_run
/// use svg2transparent::transform::clean_document;
/// use std::path::Path;
///
/// let removed = clean_document(Path::new("logo.svg"), Path::new("logo_transparent.svg")).unwrap();
/// println!("removed {removed} background rects");
/// ```
pub fn clean_document(input_path: &Path, output_path: &Path) -> Result<usize> {
    let xml = fs::read_to_string(input_path)?;
    let mut root = parse_document(&xml)?;

    let canvas = resolve_canvas_size(&root);
    let removed = remove_background_rects(&mut root, &canvas);

    clean_root_style(&mut root);
    strip_background_attributes(&mut root);
    ensure_transparency_override(&mut root);
    root.set_attr("xmlns", SVG_NAMESPACE);

    let bytes = write_document(&root)?;
    fs::write(output_path, bytes)?;
    Ok(removed)
}

/// Resolve the document canvas size from the root element
///
/// Explicit `width`/`height` attributes win; if either is absent or
/// unparseable, both dimensions are re-derived from the 3rd/4th viewBox
/// components. With neither source usable, both stay unknown and the
/// heuristic's absolute fallback thresholds apply.
pub fn resolve_canvas_size(root: &Element) -> CanvasSize {
    let mut width = root.attr("width").and_then(parse_float);
    let mut height = root.attr("height").and_then(parse_float);

    if width.is_none() || height.is_none() {
        if let Some((view_width, view_height)) = root.attr("viewBox").and_then(view_box_size) {
            width = view_width;
            height = view_height;
        }
    }

    CanvasSize { width, height }
}

/// Remove background-candidate rects everywhere in the tree, depth first
///
/// Each parent filters a snapshot of its own children, so removal never skips
/// or revisits siblings. A removed rect's subtree goes with it and is not
/// descended into.
fn remove_background_rects(element: &mut Element, canvas: &CanvasSize) -> usize {
    let mut removed = 0;
    element.children.retain(|child| match child {
        XmlNode::Element(e) if is_background_candidate(e, canvas) => {
            removed += 1;
            false
        }
        _ => true,
    });

    for child in &mut element.children {
        if let XmlNode::Element(e) = child {
            removed += remove_background_rects(e, canvas);
        }
    }
    removed
}

/// Scrub background declarations from the root `style` attribute, if present
fn clean_root_style(root: &mut Element) {
    let cleaned = root.attr("style").map(strip_background_declarations);
    if let Some(cleaned) = cleaned {
        root.set_attr("style", &cleaned);
    }
}

/// Drop root attributes literally named `background` / `background-color`
fn strip_background_attributes(root: &mut Element) {
    root.attributes.retain(|(name, _)| {
        let lowered = name.to_ascii_lowercase();
        lowered != "background" && lowered != "background-color"
    });
}

/// Guarantee the transparency override stylesheet exists under `<defs>`
///
/// Finds the first `defs` element at any depth, creating one as a direct root
/// child when the document has none, then appends a `<style>` carrying the
/// override rule. Duplicate-safe: a `style` child already holding exactly the
/// override text makes this a no-op, so repeated cleaning runs do not stack
/// copies. Pre-existing stylesheets are left alone.
fn ensure_transparency_override(root: &mut Element) {
    if find_element_mut(root, "defs").is_none() {
        root.children.push(XmlNode::Element(Element::new("defs")));
    }

    if let Some(defs) = find_element_mut(root, "defs") {
        let already_present = defs.child_elements().any(|child| {
            child.local_name() == "style" && child.text() == TRANSPARENCY_OVERRIDE
        });
        if !already_present {
            let mut style = Element::new("style");
            style
                .children
                .push(XmlNode::Text(TRANSPARENCY_OVERRIDE.to_string()));
            defs.children.push(XmlNode::Element(style));
        }
    }
}

/// Depth-first search for the first descendant element with the given local name
fn find_element_mut<'a>(element: &'a mut Element, local_name: &str) -> Option<&'a mut Element> {
    for child in &mut element.children {
        if let XmlNode::Element(e) = child {
            if e.local_name() == local_name {
                return Some(e);
            }
            if let Some(found) = find_element_mut(e, local_name) {
                return Some(found);
            }
        }
    }
    None
}
