pub mod document;
pub mod element;
pub mod error;
pub mod geometry;
pub mod id;
pub mod names;
pub mod settings;

pub use document::Document;
pub use element::{Align, Circle, Element, ElementKind, ElementRef, HAlign, Pin, Polygon, Text, VAlign};
pub use error::EditorError;
pub use geometry::{Angle, Length, Point};
pub use id::{ElementId, SymbolId};
pub use names::increment_numeric_suffix;
pub use settings::{AllowedSlots, RuleCheckSettings};
