//! Exchange-document rendering.
//!
//! Renders a validated entity bundle as the XACML-style target document:
//! root `Policy`, a single `Target` child, and `Subject` / `Resource` /
//! `Action` / `Condition` leaves each holding the comma-joined text of its
//! category's entity list, in extraction order.  The document is a rendering
//! of already-validated data and carries no decision logic; pretty-printing
//! is cosmetic, round-trip parseability is the hard requirement.

use entity_extract::EntityBundle;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::PolicyError;

/// Two-space indentation, matching the pretty-printed original documents.
const INDENT: u8 = b' ';
const INDENT_WIDTH: usize = 2;

/// Render the exchange document for `bundle`.
pub fn render(bundle: &EntityBundle) -> Result<String, PolicyError> {
    let mut writer = Writer::new_with_indent(Vec::new(), INDENT, INDENT_WIDTH);

    writer.write_event(Event::Start(BytesStart::new("Policy")))?;
    writer.write_event(Event::Start(BytesStart::new("Target")))?;

    // Child order matches the original document layout.
    write_leaf(&mut writer, "Subject", &bundle.subjects)?;
    write_leaf(&mut writer, "Resource", &bundle.resources)?;
    write_leaf(&mut writer, "Action", &bundle.actions)?;
    write_leaf(&mut writer, "Condition", &bundle.conditions)?;

    writer.write_event(Event::End(BytesEnd::new("Target")))?;
    writer.write_event(Event::End(BytesEnd::new("Policy")))?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Write one `<Tag>joined, entities</Tag>` leaf element.
fn write_leaf(
    writer: &mut Writer<Vec<u8>>,
    tag: &str,
    entities: &[String],
) -> Result<(), PolicyError> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(&entities.join(", "))))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
