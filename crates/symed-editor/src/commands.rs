//! Reversible document mutations.
//!
//! Every edit is a `Command` that knows how to apply itself and how to
//! exactly reverse itself. A `Group` composes an ordered sequence of child
//! commands into one atomic, one-step-undoable action: if any child fails to
//! apply, the children already applied are reversed before the error is
//! reported, so the document is never left half-mutated.

use symed_core::{Angle, Document, EditorError, Element, ElementRef, Point};

/// A single reversible mutation, or an ordered group of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert an element. Undo removes it again.
    Insert { element: Element },
    /// Remove an element. The full element is captured at construction so
    /// undo can re-insert it unchanged.
    Remove { element: Element },
    /// Translate a set of elements by one displacement.
    Move {
        targets: Vec<ElementRef>,
        delta: Point,
    },
    /// Rotate a set of elements ccw around a common center.
    Rotate {
        targets: Vec<ElementRef>,
        center: Point,
        angle: Angle,
    },
    /// Ordered composite, applied as one unit.
    Group {
        description: String,
        children: Vec<Command>,
    },
}

impl Command {
    pub fn group(description: impl Into<String>, children: Vec<Command>) -> Self {
        Command::Group {
            description: description.into(),
            children,
        }
    }

    pub fn description(&self) -> String {
        match self {
            Command::Insert { element } => format!("insert {:?}", element.kind()),
            Command::Remove { element } => format!("remove {:?}", element.kind()),
            Command::Move { targets, .. } => format!("move {} element(s)", targets.len()),
            Command::Rotate { targets, .. } => format!("rotate {} element(s)", targets.len()),
            Command::Group { description, .. } => description.clone(),
        }
    }

    /// Apply the mutation. All-or-nothing: on error the document is exactly
    /// as it was before the call.
    pub fn apply(&self, doc: &mut Document) -> Result<(), EditorError> {
        match self {
            Command::Insert { element } => doc.insert(element.clone()),
            Command::Remove { element } => doc.remove(element.reference()).map(drop),
            Command::Move { targets, delta } => {
                check_targets(doc, targets)?;
                for target in targets {
                    // cannot fail after the presence check
                    doc.translate(*target, *delta)?;
                }
                Ok(())
            }
            Command::Rotate {
                targets,
                center,
                angle,
            } => {
                check_targets(doc, targets)?;
                for target in targets {
                    doc.rotate(*target, *angle, *center)?;
                }
                Ok(())
            }
            Command::Group { children, .. } => {
                for (applied, child) in children.iter().enumerate() {
                    if let Err(err) = child.apply(doc) {
                        rollback(doc, &children[..applied]);
                        return Err(err);
                    }
                }
                Ok(())
            }
        }
    }

    /// Exactly reverse a previously applied mutation.
    pub fn undo(&self, doc: &mut Document) -> Result<(), EditorError> {
        match self {
            Command::Insert { element } => doc.remove(element.reference()).map(drop),
            Command::Remove { element } => doc.insert(element.clone()),
            Command::Move { targets, delta } => Command::Move {
                targets: targets.clone(),
                delta: -*delta,
            }
            .apply(doc),
            Command::Rotate {
                targets,
                center,
                angle,
            } => Command::Rotate {
                targets: targets.clone(),
                center: *center,
                angle: -*angle,
            }
            .apply(doc),
            Command::Group { children, .. } => {
                for child in children.iter().rev() {
                    child.undo(doc)?;
                }
                Ok(())
            }
        }
    }
}

fn check_targets(doc: &Document, targets: &[ElementRef]) -> Result<(), EditorError> {
    for target in targets {
        if !doc.contains(*target) {
            return Err(EditorError::Precondition(format!(
                "no {:?} with id {}",
                target.kind, target.id
            )));
        }
    }
    Ok(())
}

/// Reverse already-applied children of a failing group, in reverse order.
fn rollback(doc: &mut Document, applied: &[Command]) {
    for child in applied.iter().rev() {
        if let Err(err) = child.undo(doc) {
            // The child applied cleanly moments ago, so its undo must too.
            debug_assert!(false, "rollback failed: {err}");
            log::error!("rollback of partially applied group failed: {err}");
        }
    }
}
