//! doc
//!
//! Codec for Advanced Output documents.
//!
//! # Responsibilities
//!
//! - Parse an XML export into an owned [`Element`] tree
//! - Serialize elements back to indented XML text
//!
//! # Design
//!
//! The rest of the tool only needs named child collections and
//! string/numeric attribute access, so the tree is deliberately plain: no
//! namespaces, no DTD handling, processing instructions and comments are
//! dropped. Parse failures are fatal for the file being processed.

mod element;
mod reader;

pub use element::Element;
pub use reader::{parse_file, parse_str};

use thiserror::Error;

/// Errors from document parsing.
#[derive(Debug, Error)]
pub enum DocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("invalid escape sequence: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("document contains no root element")]
    NoRoot,

    #[error("unexpected closing tag </{0}>")]
    UnexpectedClose(String),
}
