//! The symbol document: owner of all elements.
//!
//! Elements are kept in per-variant vectors ordered by insertion, keyed by
//! their identifier. All mutations are checked so that commands can rely on
//! them being all-or-nothing.

use crate::element::{Circle, Element, ElementKind, ElementRef, Pin, Polygon, Text};
use crate::error::EditorError;
use crate::geometry::{Angle, Point};
use crate::id::SymbolId;

/// A symbol document owning an insertion-ordered collection per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: SymbolId,
    pins: Vec<Pin>,
    circles: Vec<Circle>,
    polygons: Vec<Polygon>,
    texts: Vec<Text>,
}

impl Document {
    pub fn new(id: SymbolId) -> Self {
        Self {
            id,
            pins: Vec::new(),
            circles: Vec::new(),
            polygons: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn id(&self) -> SymbolId {
        self.id
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn texts(&self) -> &[Text] {
        &self.texts
    }

    pub fn element_count(&self) -> usize {
        self.pins.len() + self.circles.len() + self.polygons.len() + self.texts.len()
    }

    /// Whether an element with the referenced variant and id exists.
    pub fn contains(&self, reference: ElementRef) -> bool {
        match reference.kind {
            ElementKind::Pin => self.pins.iter().any(|p| p.id == reference.id),
            ElementKind::Circle => self.circles.iter().any(|c| c.id == reference.id),
            ElementKind::Polygon => self.polygons.iter().any(|p| p.id == reference.id),
            ElementKind::Text => self.texts.iter().any(|t| t.id == reference.id),
        }
    }

    /// Whether any pin carries `name`.
    pub fn contains_pin_name(&self, name: &str) -> bool {
        self.pins.iter().any(|p| p.name == name)
    }

    /// A copy of the referenced element, if present.
    pub fn element(&self, reference: ElementRef) -> Option<Element> {
        match reference.kind {
            ElementKind::Pin => self
                .pins
                .iter()
                .find(|p| p.id == reference.id)
                .cloned()
                .map(Element::Pin),
            ElementKind::Circle => self
                .circles
                .iter()
                .find(|c| c.id == reference.id)
                .cloned()
                .map(Element::Circle),
            ElementKind::Polygon => self
                .polygons
                .iter()
                .find(|p| p.id == reference.id)
                .cloned()
                .map(Element::Polygon),
            ElementKind::Text => self
                .texts
                .iter()
                .find(|t| t.id == reference.id)
                .cloned()
                .map(Element::Text),
        }
    }

    /// Insert an element. Fails without modification if an element of the
    /// same variant already carries its identifier.
    pub fn insert(&mut self, element: Element) -> Result<(), EditorError> {
        let reference = element.reference();
        if self.contains(reference) {
            return Err(EditorError::Precondition(format!(
                "duplicate {:?} id {}",
                reference.kind, reference.id
            )));
        }
        match element {
            Element::Pin(p) => self.pins.push(p),
            Element::Circle(c) => self.circles.push(c),
            Element::Polygon(p) => self.polygons.push(p),
            Element::Text(t) => self.texts.push(t),
        }
        Ok(())
    }

    /// Remove the referenced element, returning it.
    pub fn remove(&mut self, reference: ElementRef) -> Result<Element, EditorError> {
        match reference.kind {
            ElementKind::Pin => {
                let i = self
                    .pins
                    .iter()
                    .position(|p| p.id == reference.id)
                    .ok_or_else(|| missing(reference))?;
                Ok(Element::Pin(self.pins.remove(i)))
            }
            ElementKind::Circle => {
                let i = self
                    .circles
                    .iter()
                    .position(|c| c.id == reference.id)
                    .ok_or_else(|| missing(reference))?;
                Ok(Element::Circle(self.circles.remove(i)))
            }
            ElementKind::Polygon => {
                let i = self
                    .polygons
                    .iter()
                    .position(|p| p.id == reference.id)
                    .ok_or_else(|| missing(reference))?;
                Ok(Element::Polygon(self.polygons.remove(i)))
            }
            ElementKind::Text => {
                let i = self
                    .texts
                    .iter()
                    .position(|t| t.id == reference.id)
                    .ok_or_else(|| missing(reference))?;
                Ok(Element::Text(self.texts.remove(i)))
            }
        }
    }

    /// Translate the referenced element in place.
    pub fn translate(&mut self, reference: ElementRef, delta: Point) -> Result<(), EditorError> {
        match reference.kind {
            ElementKind::Pin => self.pin_mut(reference)?.translate(delta),
            ElementKind::Circle => self.circle_mut(reference)?.translate(delta),
            ElementKind::Polygon => self.polygon_mut(reference)?.translate(delta),
            ElementKind::Text => self.text_mut(reference)?.translate(delta),
        }
        Ok(())
    }

    /// Rotate the referenced element in place.
    pub fn rotate(
        &mut self,
        reference: ElementRef,
        angle: Angle,
        center: Point,
    ) -> Result<(), EditorError> {
        match reference.kind {
            ElementKind::Pin => self.pin_mut(reference)?.rotate(angle, center),
            ElementKind::Circle => self.circle_mut(reference)?.rotate(angle, center),
            ElementKind::Polygon => self.polygon_mut(reference)?.rotate(angle, center),
            ElementKind::Text => self.text_mut(reference)?.rotate(angle, center),
        }
        Ok(())
    }

    fn pin_mut(&mut self, reference: ElementRef) -> Result<&mut Pin, EditorError> {
        self.pins
            .iter_mut()
            .find(|p| p.id == reference.id)
            .ok_or_else(|| missing(reference))
    }

    fn circle_mut(&mut self, reference: ElementRef) -> Result<&mut Circle, EditorError> {
        self.circles
            .iter_mut()
            .find(|c| c.id == reference.id)
            .ok_or_else(|| missing(reference))
    }

    fn polygon_mut(&mut self, reference: ElementRef) -> Result<&mut Polygon, EditorError> {
        self.polygons
            .iter_mut()
            .find(|p| p.id == reference.id)
            .ok_or_else(|| missing(reference))
    }

    fn text_mut(&mut self, reference: ElementRef) -> Result<&mut Text, EditorError> {
        self.texts
            .iter_mut()
            .find(|t| t.id == reference.id)
            .ok_or_else(|| missing(reference))
    }
}

fn missing(reference: ElementRef) -> EditorError {
    EditorError::Precondition(format!(
        "no {:?} with id {}",
        reference.kind, reference.id
    ))
}
