//! # svg2transparent
//!
//! A library for removing full-canvas background rectangles from SVG files
//! and forcing a transparent canvas.
//!
//! ## Example
//!
//! ```no_run
//! use svg2transparent::transform::clean_document;
//! use std::path::Path;
//!
//! let removed = clean_document(
//!     Path::new("drawing.svg"),
//!     Path::new("drawing_transparent.svg"),
//! )
//! .unwrap();
//! println!("Removed {removed} background rects");
//! ```
//!
//! The heuristic behind the removal is exposed separately:
//!
//! ```
//! use svg2transparent::parser::Element;
//! use svg2transparent::transform::is_background_candidate;
//! use svg2transparent::types::CanvasSize;
//!
//! let mut rect = Element::new("rect");
//! rect.set_attr("width", "1000");
//! rect.set_attr("height", "800");
//! assert!(is_background_candidate(&rect, &CanvasSize::known(1000.0, 800.0)));
//! ```

pub mod error;
pub mod parser;
pub mod transform;
pub mod types;

// Re-export commonly used items
pub use error::{Result, SvgError};
pub use transform::{clean_document, is_background_candidate};
pub use types::CanvasSize;
