//! doc::reader
//!
//! Event-driven XML parsing into [`Element`] trees.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{DocError, Element};

/// Parse an XML document from a file.
pub fn parse_file(path: &Path) -> Result<Element, DocError> {
    let file = File::open(path)?;
    let reader = BufReader::with_capacity(64 * 1024, file);
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);
    parse_tree(&mut xml)
}

/// Parse an XML document from an in-memory string.
pub fn parse_str(input: &str) -> Result<Element, DocError> {
    let mut xml = Reader::from_reader(BufReader::new(input.as_bytes()));
    xml.config_mut().trim_text(true);
    parse_tree(&mut xml)
}

fn parse_tree<R: BufRead>(xml: &mut Reader<R>) -> Result<Element, DocError> {
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::with_capacity(4096);

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                stack.push(element_from_start(e)?);
            }
            Event::Empty(ref e) => {
                let el = element_from_start(e)?;
                attach(&mut stack, &mut root, el);
            }
            Event::End(ref e) => {
                let el = stack.pop().ok_or_else(|| {
                    DocError::UnexpectedClose(String::from_utf8_lossy(e.name().as_ref()).to_string())
                })?;
                attach(&mut stack, &mut root, el);
            }
            Event::Text(ref e) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push_text(&e.unescape()?);
                }
            }
            Event::CData(ref e) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push_text(&String::from_utf8_lossy(e));
                }
            }
            // Declarations, comments, PIs and doctypes carry nothing we keep.
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
        buf.clear();
    }

    root.ok_or(DocError::NoRoot)
}

fn element_from_start(e: &BytesStart<'_>) -> Result<Element, DocError> {
    let mut el = Element::new(String::from_utf8_lossy(e.name().as_ref()).to_string());
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value()?.to_string();
        el.push_attr(key, value);
    }
    Ok(el)
}

/// Hand a finished element to its parent, or record it as the root.
///
/// Only the first top-level element becomes the root; anything after it
/// is ignored, matching the permissive read posture of the rest of the
/// codec.
fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, el: Element) {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(el);
    } else if root.is_none() {
        *root = Some(el);
    }
}
