//! XML decoding for `config.xml`
//!
//! Only the shape we report on is read: `<pipelines>` elements directly
//! under `<cruise>`, and `<pipeline>` elements directly under a group.
//! Everything else in the document is skipped.
//!
//! Decoding streams through the document and stops at the first error.
//! Groups whose closing tag was reached before that point are kept; the
//! group being read when the error hit is dropped.

use crate::core::{Cruise, Pipeline, PipelineGroup};
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;
use tracing::{debug, warn};

const ROOT_TAG: &[u8] = b"cruise";
const GROUP_TAG: &[u8] = b"pipelines";
const PIPELINE_TAG: &[u8] = b"pipeline";

/// Error types for configuration decoding
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    #[error("{0}")]
    Attribute(#[from] AttrError),

    #[error("expected element type <cruise> but have <{found}>")]
    UnexpectedRoot { found: String },

    #[error("document has no root element")]
    MissingRoot,

    #[error("unexpected end of document")]
    UnexpectedEof,
}

/// Result of lenient decoding: whatever was recovered, plus the failure if any
#[derive(Debug, Default)]
pub struct ParsedConfig {
    pub config: Cruise,
    pub error: Option<ParseError>,
}

impl Cruise {
    /// Decode a configuration document, failing on malformed input
    pub fn from_xml(data: &[u8]) -> Result<Self, ParseError> {
        let mut groups = Vec::new();
        decode_groups(data, &mut groups)?;
        Ok(Cruise::new(groups))
    }
}

/// Decode a configuration document without ever failing
///
/// Malformed input degrades to the groups recovered before the error; the
/// error is handed back so the caller can report it.
pub fn parse_config(data: &[u8]) -> ParsedConfig {
    let mut groups = Vec::new();
    let error = match decode_groups(data, &mut groups) {
        Ok(()) => {
            debug!("Decoded {} pipeline groups", groups.len());
            None
        }
        Err(e) => {
            warn!(
                "Failed to decode config: {} ({} groups recovered)",
                e,
                groups.len()
            );
            Some(e)
        }
    };

    ParsedConfig {
        config: Cruise::new(groups),
        error,
    }
}

/// Walk the document, pushing each group onto `groups` once it is closed
fn decode_groups(data: &[u8], groups: &mut Vec<PipelineGroup>) -> Result<(), ParseError> {
    let mut reader = Reader::from_reader(data);
    let mut in_root = false;
    // Element depth below the root: 1 is a group, 2 is a pipeline
    let mut depth = 0usize;
    let mut current: Option<PipelineGroup> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) if !in_root => {
                expect_root(&e)?;
                in_root = true;
            }
            Event::Empty(e) if !in_root => {
                return expect_root(&e);
            }
            Event::Start(e) => {
                depth += 1;
                open_element(&e, depth, &mut current)?;
            }
            Event::Empty(e) => {
                open_element(&e, depth + 1, &mut current)?;
                if depth == 0 {
                    if let Some(group) = current.take() {
                        groups.push(group);
                    }
                }
            }
            Event::End(_) if in_root => {
                if depth == 0 {
                    return Ok(());
                }
                if depth == 1 {
                    if let Some(group) = current.take() {
                        groups.push(group);
                    }
                }
                depth -= 1;
            }
            Event::Eof if in_root => return Err(ParseError::UnexpectedEof),
            Event::Eof => return Err(ParseError::MissingRoot),
            _ => {}
        }
    }
}

fn expect_root(e: &BytesStart<'_>) -> Result<(), ParseError> {
    if e.local_name().as_ref() == ROOT_TAG {
        Ok(())
    } else {
        Err(ParseError::UnexpectedRoot {
            found: String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
        })
    }
}

/// Handle an element opened at `depth` below the root
fn open_element(
    e: &BytesStart<'_>,
    depth: usize,
    current: &mut Option<PipelineGroup>,
) -> Result<(), ParseError> {
    let name = e.local_name();
    if depth == 1 && name.as_ref() == GROUP_TAG {
        *current = Some(PipelineGroup::new(attr(e, "group")?, Vec::new()));
    } else if depth == 2 && name.as_ref() == PIPELINE_TAG {
        if let Some(group) = current.as_mut() {
            group
                .pipelines
                .push(Pipeline::new(attr(e, "name")?, attr(e, "template")?));
        }
    }
    Ok(())
}

/// Unescaped attribute value, empty when absent
fn attr(e: &BytesStart<'_>, name: &str) -> Result<String, ParseError> {
    for attribute in e.attributes() {
        let attribute = attribute?;
        if attribute.key.local_name().as_ref() == name.as_bytes() {
            return Ok(attribute.unescape_value()?.into_owned());
        }
    }
    Ok(String::new())
}
