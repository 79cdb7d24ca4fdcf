//! Clipboard transfer of symbol elements.
//!
//! A copy captures the selection into an immutable [`ClipboardSnapshot`]
//! together with the id of the document it came from, then serializes it to
//! a root-tagged JSON payload written under a dedicated MIME type (plus the
//! same text as human-readable fallback). Paste parses that payload back;
//! anything without the expected root tag is rejected as a format error and
//! never yields a partial snapshot.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use symed_core::{
    Circle, Document, EditorError, Element, ElementKind, ElementRef, Pin, Polygon, SymbolId, Text,
};

/// MIME type of the symbol clipboard payload.
pub const SYMBOL_CLIPBOARD_MIME: &str = "application/x-symed-symbol";

/// Root tag every payload must carry.
const ROOT_TAG: &str = "symed_clipboard_symbol";

/// An immutable copy of a set of selected elements, plus the identifier of
/// the document they were copied from. Geometry and identifiers are kept
/// exactly as captured; no offset is applied until paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardSnapshot {
    pub symbol: SymbolId,
    pub pins: Vec<Pin>,
    pub circles: Vec<Circle>,
    pub polygons: Vec<Polygon>,
    pub texts: Vec<Text>,
}

impl ClipboardSnapshot {
    /// Deep-copy the referenced elements out of `doc`, in document order.
    pub fn capture(doc: &Document, selection: &[ElementRef]) -> Self {
        Self {
            symbol: doc.id(),
            pins: doc
                .pins()
                .iter()
                .filter(|p| selection.contains(&ElementRef::new(ElementKind::Pin, p.id)))
                .cloned()
                .collect(),
            circles: doc
                .circles()
                .iter()
                .filter(|c| selection.contains(&ElementRef::new(ElementKind::Circle, c.id)))
                .cloned()
                .collect(),
            polygons: doc
                .polygons()
                .iter()
                .filter(|p| selection.contains(&ElementRef::new(ElementKind::Polygon, p.id)))
                .cloned()
                .collect(),
            texts: doc
                .texts()
                .iter()
                .filter(|t| selection.contains(&ElementRef::new(ElementKind::Text, t.id)))
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
            && self.circles.is_empty()
            && self.polygons.is_empty()
            && self.texts.is_empty()
    }

    /// All elements of the snapshot, pins first, in captured order.
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.pins
            .iter()
            .cloned()
            .map(Element::Pin)
            .chain(self.circles.iter().cloned().map(Element::Circle))
            .chain(self.polygons.iter().cloned().map(Element::Polygon))
            .chain(self.texts.iter().cloned().map(Element::Text))
    }

    /// Serialize to the root-tagged textual payload.
    pub fn serialize(&self) -> Result<String, EditorError> {
        let root = serde_json::json!({ ROOT_TAG: self });
        serde_json::to_string_pretty(&root)
            .map_err(|e| EditorError::Format(format!("clipboard serialize: {e}")))
    }

    /// Parse a root-tagged payload back into a snapshot.
    pub fn deserialize(payload: &str) -> Result<Self, EditorError> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| EditorError::Format(format!("clipboard payload: {e}")))?;
        let node = value
            .get(ROOT_TAG)
            .ok_or_else(|| EditorError::Format(format!("missing root tag {ROOT_TAG:?}")))?;
        serde_json::from_value(node.clone())
            .map_err(|e| EditorError::Format(format!("clipboard payload: {e}")))
    }

    /// Wrap into a typed payload for the clipboard service.
    pub fn to_payload(&self) -> Result<ClipboardPayload, EditorError> {
        let data = self.serialize()?;
        Ok(ClipboardPayload {
            mime: SYMBOL_CLIPBOARD_MIME.to_string(),
            text: data.clone(),
            data,
        })
    }

    /// Read a snapshot back out of a typed payload.
    pub fn from_payload(payload: &ClipboardPayload) -> Result<Self, EditorError> {
        if payload.mime != SYMBOL_CLIPBOARD_MIME {
            return Err(EditorError::Format(format!(
                "unexpected clipboard type {:?}",
                payload.mime
            )));
        }
        Self::deserialize(&payload.data)
    }
}

/// What actually lands on the system clipboard: typed data plus a plain
/// text fallback for foreign applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    pub mime: String,
    pub data: String,
    pub text: String,
}

/// Injected clipboard capability. Production wires the host toolkit's
/// clipboard behind this; tests use [`MemoryClipboard`].
pub trait ClipboardAccess {
    fn set_contents(&mut self, payload: ClipboardPayload) -> Result<(), EditorError>;
    fn contents(&self) -> Option<ClipboardPayload>;
}

/// In-memory clipboard fake.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    payload: Option<ClipboardPayload>,
}

impl ClipboardAccess for MemoryClipboard {
    fn set_contents(&mut self, payload: ClipboardPayload) -> Result<(), EditorError> {
        self.payload = Some(payload);
        Ok(())
    }

    fn contents(&self) -> Option<ClipboardPayload> {
        self.payload.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;
    use symed_core::{Align, Angle, ElementId, Length, Point};

    fn sample_snapshot() -> ClipboardSnapshot {
        ClipboardSnapshot {
            symbol: SymbolId::random(),
            pins: vec![Pin {
                id: ElementId::random(),
                name: "A".into(),
                position: Point::from_mm(1, 0),
                length: Length::from_mm(2),
                rotation: Angle::deg90(),
            }],
            circles: vec![Circle {
                id: ElementId::random(),
                center: Point::from_mm(0, 0),
                diameter: Length::from_mm(5),
                line_width: Length::nm(200_000),
                filled: false,
            }],
            polygons: vec![Polygon {
                id: ElementId::random(),
                vertices: smallvec![Point::ZERO, Point::from_mm(1, 0), Point::from_mm(1, 1)],
                line_width: Length::nm(200_000),
                filled: true,
            }],
            texts: vec![Text {
                id: ElementId::random(),
                position: Point::from_mm(-2, 3),
                rotation: Angle::ZERO,
                height: Length::from_mm(3),
                align: Align::default(),
                content: ">NAME".into(),
            }],
        }
    }

    #[test]
    fn roundtrip_covers_all_variants() {
        let snapshot = sample_snapshot();
        let payload = snapshot.serialize().unwrap();
        let back = ClipboardSnapshot::deserialize(&payload).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn missing_root_tag_is_a_format_error() {
        let err = ClipboardSnapshot::deserialize(r#"{"something_else": {}}"#).unwrap_err();
        assert!(matches!(err, EditorError::Format(_)));
    }

    #[test]
    fn malformed_payload_is_a_format_error() {
        for payload in ["not json at all", "[1,2,3]", r#"{"symed_clipboard_symbol": 42}"#] {
            let err = ClipboardSnapshot::deserialize(payload).unwrap_err();
            assert!(matches!(err, EditorError::Format(_)), "payload: {payload}");
        }
    }

    #[test]
    fn payload_carries_mime_and_text_fallback() {
        let snapshot = sample_snapshot();
        let payload = snapshot.to_payload().unwrap();
        assert_eq!(payload.mime, SYMBOL_CLIPBOARD_MIME);
        assert_eq!(payload.text, payload.data);
        assert_eq!(ClipboardSnapshot::from_payload(&payload).unwrap(), snapshot);
    }

    #[test]
    fn foreign_mime_type_is_rejected() {
        let snapshot = sample_snapshot();
        let mut payload = snapshot.to_payload().unwrap();
        payload.mime = "text/plain".into();
        let err = ClipboardSnapshot::from_payload(&payload).unwrap_err();
        assert!(matches!(err, EditorError::Format(_)));
    }

    #[test]
    fn memory_clipboard_roundtrip() {
        let snapshot = sample_snapshot();
        let mut clipboard = MemoryClipboard::default();
        assert!(clipboard.contents().is_none());

        clipboard.set_contents(snapshot.to_payload().unwrap()).unwrap();
        let stored = clipboard.contents().unwrap();
        assert_eq!(ClipboardSnapshot::from_payload(&stored).unwrap(), snapshot);
    }
}
