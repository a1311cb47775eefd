pub mod clean;
pub mod heuristic;
pub mod style;

// Re-export commonly used items
pub use clean::{clean_document, resolve_canvas_size, SVG_NAMESPACE};
pub use heuristic::is_background_candidate;
pub use style::strip_background_declarations;
