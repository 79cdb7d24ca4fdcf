//! Hit-test query results.
//!
//! The engine does not do geometry itself: the rendering collaborator
//! answers "which elements are under this point", ordered topmost first
//! within each variant, and the engine only picks the winner.

use symed_core::{ElementId, ElementKind, ElementRef};

/// Ordered candidate elements under one point, per variant, topmost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitCandidates {
    pub pins: Vec<ElementId>,
    pub texts: Vec<ElementId>,
    pub polygons: Vec<ElementId>,
    pub circles: Vec<ElementId>,
}

impl HitCandidates {
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
            && self.texts.is_empty()
            && self.polygons.is_empty()
            && self.circles.is_empty()
    }

    pub fn count(&self) -> usize {
        self.pins.len() + self.texts.len() + self.polygons.len() + self.circles.len()
    }

    /// The topmost candidate across variants, in the fixed stacking priority
    /// Pin > Text > Polygon > Circle.
    pub fn topmost(&self) -> Option<ElementRef> {
        if let Some(&id) = self.pins.first() {
            Some(ElementRef::new(ElementKind::Pin, id))
        } else if let Some(&id) = self.texts.first() {
            Some(ElementRef::new(ElementKind::Text, id))
        } else if let Some(&id) = self.polygons.first() {
            Some(ElementRef::new(ElementKind::Polygon, id))
        } else if let Some(&id) = self.circles.first() {
            Some(ElementRef::new(ElementKind::Circle, id))
        } else {
            None
        }
    }
}
