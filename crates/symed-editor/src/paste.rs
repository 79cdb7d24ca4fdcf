//! Paste reconciliation.
//!
//! A snapshot pasted into a document has to be reconciled with what is
//! already there: element ids survive only when pasting back into the very
//! document they were copied from and the id is free again (it was cut),
//! otherwise they are regenerated. Pin names must stay unique, so colliding
//! names get their trailing numeric suffix incremented until a free name is
//! found. The result is a single atomic group of inserts; nothing touches
//! the document until the caller executes it.

use crate::clipboard::ClipboardSnapshot;
use crate::commands::Command;
use symed_core::{
    increment_numeric_suffix, Document, EditorError, Element, ElementId, Point,
};

/// Upper bound on name-disambiguation attempts per pin.
const MAX_NAME_ATTEMPTS: usize = 1000;

/// Build the command that pastes `snapshot` into `doc`, every element
/// translated by `offset`. The returned group inserts elements in snapshot
/// order; executing it is all-or-nothing.
pub fn paste_commands(
    snapshot: &ClipboardSnapshot,
    doc: &Document,
    offset: Point,
) -> Result<Command, EditorError> {
    let same_document = doc.id() == snapshot.symbol;
    // Names handed out earlier in this same paste also count as taken.
    let mut reserved: Vec<String> = Vec::with_capacity(snapshot.pins.len());
    let mut children = Vec::new();

    for mut element in snapshot.elements() {
        if !(same_document && !doc.contains(element.reference())) {
            element.set_id(ElementId::random());
        }
        if let Element::Pin(pin) = &mut element {
            pin.name = free_pin_name(doc, &reserved, &pin.name)?;
            reserved.push(pin.name.clone());
        }
        element.translate(offset);
        children.push(Command::Insert { element });
    }

    log::debug!(
        "paste: {} element(s), offset ({}, {})",
        children.len(),
        offset.x,
        offset.y
    );
    Ok(Command::group("paste", children))
}

fn free_pin_name(
    doc: &Document,
    reserved: &[String],
    wanted: &str,
) -> Result<String, EditorError> {
    let taken = |name: &str| doc.contains_pin_name(name) || reserved.iter().any(|r| r == name);

    let mut name = wanted.to_string();
    for _ in 0..MAX_NAME_ATTEMPTS {
        if !taken(&name) {
            return Ok(name);
        }
        name = increment_numeric_suffix(&name);
    }
    Err(EditorError::NameExhaustion {
        name: wanted.to_string(),
    })
}
