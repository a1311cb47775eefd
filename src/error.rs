use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Document has no root element")]
    MissingRoot,

    #[error("Unexpected closing tag </{0}> with no matching opening tag")]
    UnexpectedClosingTag(String),

    #[error("Unexpected end of input: <{0}> is never closed")]
    UnclosedTag(String),

    #[error("Content found after the root element: <{0}>")]
    TrailingContent(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SvgError>;
