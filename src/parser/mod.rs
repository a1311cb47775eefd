pub mod dom;
pub mod numeric;

// Re-export commonly used items
pub use dom::{parse_document, write_document, Element, XmlNode};
pub use numeric::{parse_float, view_box_size};
