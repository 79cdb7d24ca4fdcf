//! Symbol elements: the closed set of primitives a document can own.
//!
//! Every variant carries its own identifier and geometry; `Element` is the
//! tagged union used wherever code must handle "any element" (clipboard,
//! commands) without runtime type inspection.

use crate::geometry::{Angle, Length, Point};
use crate::id::ElementId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A connection point with a human-readable name, unique among the pins of
/// one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    pub id: ElementId,
    pub name: String,
    pub position: Point,
    pub length: Length,
    pub rotation: Angle,
}

impl Pin {
    pub fn translate(&mut self, delta: Point) {
        self.position += delta;
    }

    pub fn rotate(&mut self, angle: Angle, center: Point) {
        self.position = self.position.rotated(angle, center);
        self.rotation = self.rotation + angle;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub id: ElementId,
    pub center: Point,
    pub diameter: Length,
    pub line_width: Length,
    pub filled: bool,
}

impl Circle {
    pub fn translate(&mut self, delta: Point) {
        self.center += delta;
    }

    pub fn rotate(&mut self, angle: Angle, center: Point) {
        self.center = self.center.rotated(angle, center);
    }
}

/// An open or closed polygon outline. Translation moves every vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polygon {
    pub id: ElementId,
    pub vertices: SmallVec<[Point; 4]>,
    pub line_width: Length,
    pub filled: bool,
}

impl Polygon {
    pub fn translate(&mut self, delta: Point) {
        for v in &mut self.vertices {
            *v += delta;
        }
    }

    pub fn rotate(&mut self, angle: Angle, center: Point) {
        for v in &mut self.vertices {
            *v = v.rotated(angle, center);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Align {
    pub h: HAlign,
    pub v: VAlign,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub id: ElementId,
    pub position: Point,
    pub rotation: Angle,
    pub height: Length,
    pub align: Align,
    pub content: String,
}

impl Text {
    pub fn translate(&mut self, delta: Point) {
        self.position += delta;
    }

    pub fn rotate(&mut self, angle: Angle, center: Point) {
        self.position = self.position.rotated(angle, center);
        self.rotation = self.rotation + angle;
    }
}

/// Discriminant of the element variants. Doubles as the stacking priority
/// used when picking the topmost hit candidate: Pin > Text > Polygon > Circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Pin,
    Text,
    Polygon,
    Circle,
}

/// Addresses one element of a document. Identifiers are only required to be
/// unique within a variant, so a reference carries the variant too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub kind: ElementKind,
    pub id: ElementId,
}

impl ElementRef {
    pub const fn new(kind: ElementKind, id: ElementId) -> Self {
        Self { kind, id }
    }
}

/// Any symbol element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Pin(Pin),
    Circle(Circle),
    Polygon(Polygon),
    Text(Text),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Pin(p) => p.id,
            Element::Circle(c) => c.id,
            Element::Polygon(p) => p.id,
            Element::Text(t) => t.id,
        }
    }

    /// Replace the element's identifier, e.g. when pasting a copy.
    pub fn set_id(&mut self, id: ElementId) {
        match self {
            Element::Pin(p) => p.id = id,
            Element::Circle(c) => c.id = id,
            Element::Polygon(p) => p.id = id,
            Element::Text(t) => t.id = id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Pin(_) => ElementKind::Pin,
            Element::Circle(_) => ElementKind::Circle,
            Element::Polygon(_) => ElementKind::Polygon,
            Element::Text(_) => ElementKind::Text,
        }
    }

    pub fn reference(&self) -> ElementRef {
        ElementRef::new(self.kind(), self.id())
    }

    /// The element's name, for variants that have one (pins only).
    pub fn name(&self) -> Option<&str> {
        match self {
            Element::Pin(p) => Some(&p.name),
            _ => None,
        }
    }

    /// Translate the element (every vertex for polygons) by `delta`.
    pub fn translate(&mut self, delta: Point) {
        match self {
            Element::Pin(p) => p.translate(delta),
            Element::Circle(c) => c.translate(delta),
            Element::Polygon(p) => p.translate(delta),
            Element::Text(t) => t.translate(delta),
        }
    }

    /// Rotate the element ccw by `angle` around `center`. Variants with an
    /// intrinsic rotation attribute accumulate the angle as well.
    pub fn rotate(&mut self, angle: Angle, center: Point) {
        match self {
            Element::Pin(p) => p.rotate(angle, center),
            Element::Circle(c) => c.rotate(angle, center),
            Element::Polygon(p) => p.rotate(angle, center),
            Element::Text(t) => t.rotate(angle, center),
        }
    }
}

impl From<Pin> for Element {
    fn from(pin: Pin) -> Self {
        Element::Pin(pin)
    }
}

impl From<Circle> for Element {
    fn from(circle: Circle) -> Self {
        Element::Circle(circle)
    }
}

impl From<Polygon> for Element {
    fn from(polygon: Polygon) -> Self {
        Element::Polygon(polygon)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::Text(text)
    }
}
