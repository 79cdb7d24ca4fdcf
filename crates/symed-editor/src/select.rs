//! The selection tool: a finite-state machine turning pointer and keyboard
//! events into selection changes and undoable commands.
//!
//! Three states: `Idle` (nothing in progress), `Selecting` (rubber-band
//! rectangle being dragged over empty space) and `Moving` (selected elements
//! being dragged). Hit-testing and marquee-to-selection resolution belong to
//! the rendering collaborator; the tool consumes [`HitCandidates`] and lets
//! the collaborator push the resolved marquee selection via
//! [`SelectTool::set_selection`]. Clipboard and rotate/remove commands are
//! accepted only while idle.

use crate::clipboard::{ClipboardAccess, ClipboardSnapshot};
use crate::commands::Command;
use crate::hit::HitCandidates;
use crate::history::UndoStack;
use crate::input::Modifiers;
use crate::paste::paste_commands;
use symed_core::{Angle, Document, EditorError, Element, ElementRef, Point};

/// How the tool responded to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// The event does not apply in the current state; the host may route it
    /// elsewhere.
    Ignored,
    /// The event was consumed (possibly with no document effect).
    Handled,
    /// A double-click asked for the properties view of this element.
    OpenProperties(ElementRef),
}

/// Externally visible state of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Selecting,
    Moving,
}

/// A move gesture in progress. `start` is the pointer-down position, and
/// `current` tracks how far the targets have actually been displaced so the
/// gesture can be reverted or committed as one total delta.
#[derive(Debug, Clone)]
struct MoveGesture {
    targets: Vec<ElementRef>,
    start: Point,
    current: Point,
}

#[derive(Debug, Clone)]
enum State {
    Idle,
    Selecting {
        start: Point,
        current: Point,
    },
    Moving {
        down: Point,
        // created lazily on the first pointer-move
        gesture: Option<MoveGesture>,
    },
}

/// The selection/move tool.
pub struct SelectTool {
    state: State,
    selected: Vec<ElementRef>,
}

impl Default for SelectTool {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectTool {
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            selected: Vec::new(),
        }
    }

    pub fn interaction_state(&self) -> InteractionState {
        match self.state {
            State::Idle => InteractionState::Idle,
            State::Selecting { .. } => InteractionState::Selecting,
            State::Moving { .. } => InteractionState::Moving,
        }
    }

    pub fn selection(&self) -> &[ElementRef] {
        &self.selected
    }

    /// Replace the selection, e.g. after the collaborator resolved a marquee
    /// rectangle to the elements it covers.
    pub fn set_selection(&mut self, selection: Vec<ElementRef>) {
        self.selected = selection;
    }

    /// The rubber-band rectangle corners while a marquee drag is in
    /// progress, `None` otherwise.
    pub fn marquee(&self) -> Option<(Point, Point)> {
        match self.state {
            State::Selecting { start, current } => Some((start, current)),
            _ => None,
        }
    }

    /// Pointer pressed. Only meaningful while idle; a press during another
    /// gesture is a contract violation by the host.
    pub fn process_pointer_down(
        &mut self,
        pos: Point,
        modifiers: Modifiers,
        hits: &HitCandidates,
    ) -> Response {
        if !matches!(self.state, State::Idle) {
            debug_assert!(false, "pointer-down while a gesture is in progress");
            return Response::Ignored;
        }

        match hits.topmost() {
            None => {
                self.state = State::Selecting {
                    start: pos,
                    current: pos,
                };
                Response::Handled
            }
            Some(hit) => {
                if modifiers.toggles_selection() {
                    if let Some(i) = self.selected.iter().position(|r| *r == hit) {
                        self.selected.remove(i);
                    } else {
                        self.selected.push(hit);
                    }
                } else if !self.selected.contains(&hit) {
                    self.selected.clear();
                    self.selected.push(hit);
                }
                self.state = State::Moving {
                    down: pos,
                    gesture: None,
                };
                Response::Handled
            }
        }
    }

    /// Pointer moved. Updates the marquee while selecting; while moving,
    /// drags the selected elements live (the document is mutated as the
    /// pointer moves, but nothing is committed to history yet).
    pub fn process_pointer_move(
        &mut self,
        pos: Point,
        doc: &mut Document,
    ) -> Result<Response, EditorError> {
        match &mut self.state {
            State::Idle => Ok(Response::Ignored),
            State::Selecting { current, .. } => {
                *current = pos;
                Ok(Response::Handled)
            }
            State::Moving { down, gesture } => {
                // a toggle-off click can leave nothing selected to drag
                if gesture.is_none() && (pos == *down || self.selected.is_empty()) {
                    return Ok(Response::Handled);
                }
                let gesture = gesture.get_or_insert_with(|| MoveGesture {
                    targets: self.selected.clone(),
                    start: *down,
                    current: *down,
                });
                let step = pos - gesture.current;
                let step_cmd = Command::Move {
                    targets: gesture.targets.clone(),
                    delta: step,
                };
                if let Err(err) = step_cmd.apply(doc) {
                    // a target vanished mid-gesture; put everything back
                    log::warn!("move gesture aborted: {err}");
                    let applied = gesture.current - gesture.start;
                    revert_displacement(doc, &gesture.targets, applied);
                    self.state = State::Idle;
                    return Err(err);
                }
                gesture.current = pos;
                Ok(Response::Handled)
            }
        }
    }

    /// Pointer released. Ends the gesture and returns to idle; a move with
    /// nonzero total displacement is committed to history as one command.
    pub fn process_pointer_up(
        &mut self,
        pos: Point,
        doc: &mut Document,
        history: &mut UndoStack,
    ) -> Result<Response, EditorError> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => Ok(Response::Ignored),
            // resulting selection is whatever the collaborator resolved from
            // the marquee via set_selection
            State::Selecting { .. } => Ok(Response::Handled),
            State::Moving { gesture, .. } => {
                let Some(mut gesture) = gesture else {
                    // click without drag, selection change already happened
                    return Ok(Response::Handled);
                };
                // final step up to the release position
                let step = pos - gesture.current;
                if step != Point::ZERO {
                    let step_cmd = Command::Move {
                        targets: gesture.targets.clone(),
                        delta: step,
                    };
                    if let Err(err) = step_cmd.apply(doc) {
                        log::warn!("move gesture aborted on release: {err}");
                        let applied = gesture.current - gesture.start;
                        revert_displacement(doc, &gesture.targets, applied);
                        return Err(err);
                    }
                    gesture.current = pos;
                }
                let total = gesture.current - gesture.start;
                if total != Point::ZERO {
                    history.commit_performed(Command::Move {
                        targets: gesture.targets,
                        delta: total,
                    });
                }
                Ok(Response::Handled)
            }
        }
    }

    /// Double-click: ask for the properties view of the topmost hit element.
    /// No state change.
    pub fn process_double_click(&self, hits: &HitCandidates) -> Response {
        if !matches!(self.state, State::Idle) {
            return Response::Ignored;
        }
        match hits.topmost() {
            Some(hit) => Response::OpenProperties(hit),
            None => Response::Handled,
        }
    }

    /// Copy the current selection to the clipboard.
    pub fn process_copy(
        &self,
        doc: &Document,
        clipboard: &mut dyn ClipboardAccess,
    ) -> Result<Response, EditorError> {
        if !matches!(self.state, State::Idle) {
            return Ok(Response::Ignored);
        }
        if self.selected.is_empty() {
            return Ok(Response::Handled);
        }
        let snapshot = ClipboardSnapshot::capture(doc, &self.selected);
        clipboard.set_contents(snapshot.to_payload()?)?;
        Ok(Response::Handled)
    }

    /// Copy, then remove, the current selection. The removal is skipped if
    /// the copy failed, so nothing is lost.
    pub fn process_cut(
        &mut self,
        doc: &mut Document,
        history: &mut UndoStack,
        clipboard: &mut dyn ClipboardAccess,
    ) -> Result<Response, EditorError> {
        if !matches!(self.state, State::Idle) {
            return Ok(Response::Ignored);
        }
        if self.selected.is_empty() {
            return Ok(Response::Handled);
        }
        self.process_copy(doc, clipboard)?;
        self.process_remove(doc, history)
    }

    /// Paste the clipboard content at `offset` and select what was pasted.
    pub fn process_paste(
        &mut self,
        doc: &mut Document,
        history: &mut UndoStack,
        clipboard: &dyn ClipboardAccess,
        offset: Point,
    ) -> Result<Response, EditorError> {
        if !matches!(self.state, State::Idle) {
            return Ok(Response::Ignored);
        }
        let Some(payload) = clipboard.contents() else {
            return Ok(Response::Handled);
        };
        let snapshot = ClipboardSnapshot::from_payload(&payload)?;
        if snapshot.is_empty() {
            return Ok(Response::Handled);
        }
        let group = paste_commands(&snapshot, doc, offset)?;
        let pasted = pasted_references(&group);
        history.execute(doc, group)?;
        self.selected = pasted;
        Ok(Response::Handled)
    }

    /// Rotate the selection ccw by `angle` around its bounding-box center.
    pub fn process_rotate(
        &mut self,
        doc: &mut Document,
        history: &mut UndoStack,
        angle: Angle,
    ) -> Result<Response, EditorError> {
        if !matches!(self.state, State::Idle) {
            return Ok(Response::Ignored);
        }
        if self.selected.is_empty() {
            return Ok(Response::Handled);
        }
        let center = selection_center(doc, &self.selected);
        let cmd = Command::Rotate {
            targets: self.selected.clone(),
            center,
            angle,
        };
        history.execute(doc, cmd)?;
        Ok(Response::Handled)
    }

    /// Remove the selection as one atomic group and clear it.
    pub fn process_remove(
        &mut self,
        doc: &mut Document,
        history: &mut UndoStack,
    ) -> Result<Response, EditorError> {
        if !matches!(self.state, State::Idle) {
            return Ok(Response::Ignored);
        }
        if self.selected.is_empty() {
            return Ok(Response::Handled);
        }
        let mut children = Vec::with_capacity(self.selected.len());
        for target in &self.selected {
            let element = doc
                .element(*target)
                .ok_or_else(|| EditorError::Precondition(format!("no {:?} with id {}", target.kind, target.id)))?;
            children.push(Command::Remove { element });
        }
        history.execute(doc, Command::group("remove selection", children))?;
        self.selected.clear();
        Ok(Response::Handled)
    }

    /// Abort any gesture in progress: a live move is reverted without ever
    /// touching history, a marquee is simply dropped.
    pub fn cancel(&mut self, doc: &mut Document) {
        if let State::Moving {
            gesture: Some(gesture),
            ..
        } = std::mem::replace(&mut self.state, State::Idle)
        {
            let applied = gesture.current - gesture.start;
            revert_displacement(doc, &gesture.targets, applied);
        }
    }
}

/// Translate `targets` back by `applied`. Used on gesture abort, where the
/// elements were present moments ago.
fn revert_displacement(doc: &mut Document, targets: &[ElementRef], applied: Point) {
    if applied == Point::ZERO {
        return;
    }
    for target in targets {
        if let Err(err) = doc.translate(*target, -applied) {
            debug_assert!(false, "gesture revert failed: {err}");
            log::error!("gesture revert failed: {err}");
        }
    }
}

/// Center of the bounding box of the selected elements' anchor points.
fn selection_center(doc: &Document, selection: &[ElementRef]) -> Point {
    let mut min = Point::new(i64::MAX, i64::MAX);
    let mut max = Point::new(i64::MIN, i64::MIN);
    let mut extend = |p: Point| {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    };
    let mut any = false;
    for target in selection {
        let Some(element) = doc.element(*target) else {
            continue;
        };
        any = true;
        match element {
            Element::Pin(p) => extend(p.position),
            Element::Circle(c) => extend(c.center),
            Element::Text(t) => extend(t.position),
            Element::Polygon(p) => {
                for v in &p.vertices {
                    extend(*v);
                }
            }
        }
    }
    if !any {
        return Point::ZERO;
    }
    Point::new((min.x + max.x) / 2, (min.y + max.y) / 2)
}

/// References of the elements a paste group will insert.
fn pasted_references(group: &Command) -> Vec<ElementRef> {
    match group {
        Command::Group { children, .. } => children
            .iter()
            .filter_map(|child| match child {
                Command::Insert { element } => Some(element.reference()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use pretty_assertions::assert_eq;
    use symed_core::{ElementId, ElementKind, Length, Pin, SymbolId};

    fn pin(name: &str, x_mm: i64) -> Pin {
        Pin {
            id: ElementId::random(),
            name: name.into(),
            position: Point::from_mm(x_mm, 0),
            length: Length::from_mm(2),
            rotation: Angle::ZERO,
        }
    }

    fn doc_with(pins: &[Pin]) -> Document {
        let mut doc = Document::new(SymbolId::random());
        for p in pins {
            doc.insert(Element::Pin(p.clone())).unwrap();
        }
        doc
    }

    fn hit_on(pin: &Pin) -> HitCandidates {
        HitCandidates {
            pins: vec![pin.id],
            ..Default::default()
        }
    }

    #[test]
    fn empty_click_enters_and_leaves_selecting_without_touching_selection() {
        let mut doc = doc_with(&[]);
        let mut history = UndoStack::default();
        let mut tool = SelectTool::new();
        let a = ElementRef::new(ElementKind::Pin, ElementId::random());
        tool.set_selection(vec![a]);

        let down = Point::from_mm(1, 1);
        assert_eq!(
            tool.process_pointer_down(down, Modifiers::NONE, &HitCandidates::default()),
            Response::Handled
        );
        assert_eq!(tool.interaction_state(), InteractionState::Selecting);
        assert_eq!(tool.marquee(), Some((down, down)));

        tool.process_pointer_move(Point::from_mm(5, 4), &mut doc).unwrap();
        assert_eq!(tool.marquee(), Some((down, Point::from_mm(5, 4))));

        tool.process_pointer_up(Point::from_mm(5, 4), &mut doc, &mut history)
            .unwrap();
        assert_eq!(tool.interaction_state(), InteractionState::Idle);
        assert_eq!(tool.marquee(), None);
        assert_eq!(tool.selection(), &[a]);
        assert!(!history.can_undo());
    }

    #[test]
    fn clicking_an_unselected_element_selects_only_it_and_enters_moving() {
        let a = pin("A", 1);
        let b = pin("B", 2);
        let _doc = doc_with(&[a.clone(), b.clone()]);
        let mut tool = SelectTool::new();
        tool.set_selection(vec![ElementRef::new(ElementKind::Pin, b.id)]);

        tool.process_pointer_down(Point::from_mm(1, 0), Modifiers::NONE, &hit_on(&a));
        assert_eq!(tool.interaction_state(), InteractionState::Moving);
        assert_eq!(tool.selection(), &[ElementRef::new(ElementKind::Pin, a.id)]);
    }

    #[test]
    fn modifier_click_toggles_membership() {
        let a = pin("A", 1);
        let mut tool = SelectTool::new();
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };

        tool.process_pointer_down(Point::from_mm(1, 0), ctrl, &hit_on(&a));
        assert_eq!(tool.selection(), &[ElementRef::new(ElementKind::Pin, a.id)]);

        // release and toggle off again
        let mut doc = doc_with(&[a.clone()]);
        let mut history = UndoStack::default();
        tool.process_pointer_up(Point::from_mm(1, 0), &mut doc, &mut history)
            .unwrap();
        tool.process_pointer_down(Point::from_mm(1, 0), ctrl, &hit_on(&a));
        assert!(tool.selection().is_empty());
    }

    #[test]
    fn dragging_after_toggling_off_the_last_element_commits_nothing() {
        let a = pin("A", 1);
        let mut doc = doc_with(&[a.clone()]);
        let pristine = doc.clone();
        let mut history = UndoStack::default();
        let mut tool = SelectTool::new();
        tool.set_selection(vec![ElementRef::new(ElementKind::Pin, a.id)]);
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };

        // toggle the only selected element off, then drag anyway
        tool.process_pointer_down(Point::from_mm(1, 0), ctrl, &hit_on(&a));
        assert!(tool.selection().is_empty());
        assert_eq!(tool.interaction_state(), InteractionState::Moving);

        tool.process_pointer_move(Point::from_mm(4, 4), &mut doc).unwrap();
        tool.process_pointer_up(Point::from_mm(4, 4), &mut doc, &mut history)
            .unwrap();

        assert_eq!(tool.interaction_state(), InteractionState::Idle);
        assert_eq!(doc, pristine);
        assert!(!history.can_undo(), "empty drag must not reach history");
    }

    #[test]
    fn drag_commits_exactly_one_move_with_the_total_displacement() {
        let a = pin("A", 1);
        let mut doc = doc_with(&[a.clone()]);
        let mut history = UndoStack::default();
        let mut tool = SelectTool::new();

        tool.process_pointer_down(Point::from_mm(1, 0), Modifiers::NONE, &hit_on(&a));
        tool.process_pointer_move(Point::from_mm(2, 1), &mut doc).unwrap();
        tool.process_pointer_move(Point::from_mm(4, 2), &mut doc).unwrap();
        tool.process_pointer_up(Point::from_mm(6, 3), &mut doc, &mut history)
            .unwrap();

        assert_eq!(tool.interaction_state(), InteractionState::Idle);
        assert_eq!(doc.pins()[0].position, Point::from_mm(6, 3));
        assert_eq!(history.undo_count(), 1);

        history.undo(&mut doc).unwrap();
        assert_eq!(doc.pins()[0].position, Point::from_mm(1, 0));
    }

    #[test]
    fn click_without_drag_commits_nothing() {
        let a = pin("A", 1);
        let mut doc = doc_with(&[a.clone()]);
        let mut history = UndoStack::default();
        let mut tool = SelectTool::new();

        tool.process_pointer_down(Point::from_mm(1, 0), Modifiers::NONE, &hit_on(&a));
        tool.process_pointer_up(Point::from_mm(1, 0), &mut doc, &mut history)
            .unwrap();
        assert!(!history.can_undo());
        assert_eq!(doc.pins()[0].position, Point::from_mm(1, 0));
    }

    #[test]
    fn cancel_reverts_a_live_drag_without_history() {
        let a = pin("A", 1);
        let mut doc = doc_with(&[a.clone()]);
        let mut tool = SelectTool::new();

        tool.process_pointer_down(Point::from_mm(1, 0), Modifiers::NONE, &hit_on(&a));
        tool.process_pointer_move(Point::from_mm(4, 4), &mut doc).unwrap();
        assert_eq!(doc.pins()[0].position, Point::from_mm(4, 4));

        tool.cancel(&mut doc);
        assert_eq!(tool.interaction_state(), InteractionState::Idle);
        assert_eq!(doc.pins()[0].position, Point::from_mm(1, 0));
    }

    #[test]
    fn edit_commands_are_ignored_outside_idle() {
        let a = pin("A", 1);
        let mut doc = doc_with(&[a.clone()]);
        let pristine = doc.clone();
        let mut history = UndoStack::default();
        let mut clipboard = MemoryClipboard::default();
        let mut tool = SelectTool::new();
        tool.set_selection(vec![ElementRef::new(ElementKind::Pin, a.id)]);

        tool.process_pointer_down(Point::from_mm(9, 9), Modifiers::NONE, &HitCandidates::default());
        assert_eq!(tool.interaction_state(), InteractionState::Selecting);

        assert_eq!(
            tool.process_rotate(&mut doc, &mut history, Angle::deg90()).unwrap(),
            Response::Ignored
        );
        assert_eq!(
            tool.process_remove(&mut doc, &mut history).unwrap(),
            Response::Ignored
        );
        assert_eq!(
            tool.process_cut(&mut doc, &mut history, &mut clipboard).unwrap(),
            Response::Ignored
        );
        assert_eq!(doc, pristine);
        assert!(!history.can_undo());
        assert!(clipboard.contents().is_none());
    }

    #[test]
    fn empty_selection_commands_are_consumed_without_effect() {
        let mut doc = doc_with(&[pin("A", 1)]);
        let pristine = doc.clone();
        let mut history = UndoStack::default();
        let mut clipboard = MemoryClipboard::default();
        let mut tool = SelectTool::new();

        assert_eq!(
            tool.process_rotate(&mut doc, &mut history, Angle::deg90()).unwrap(),
            Response::Handled
        );
        assert_eq!(tool.process_remove(&mut doc, &mut history).unwrap(), Response::Handled);
        assert_eq!(
            tool.process_cut(&mut doc, &mut history, &mut clipboard).unwrap(),
            Response::Handled
        );
        assert_eq!(doc, pristine);
        assert!(!history.can_undo());
        assert!(clipboard.contents().is_none());
    }

    #[test]
    fn remove_is_one_undoable_group() {
        let a = pin("A", 1);
        let b = pin("B", 2);
        let mut doc = doc_with(&[a.clone(), b.clone()]);
        let pristine = doc.clone();
        let mut history = UndoStack::default();
        let mut tool = SelectTool::new();
        tool.set_selection(vec![
            ElementRef::new(ElementKind::Pin, a.id),
            ElementRef::new(ElementKind::Pin, b.id),
        ]);

        tool.process_remove(&mut doc, &mut history).unwrap();
        assert_eq!(doc.element_count(), 0);
        assert!(tool.selection().is_empty());
        assert_eq!(history.undo_count(), 1);

        history.undo(&mut doc).unwrap();
        assert_eq!(doc, pristine);
    }

    #[test]
    fn rotate_keeps_relative_positions_and_undoes_exactly() {
        let a = pin("A", 0);
        let b = pin("B", 2);
        let mut doc = doc_with(&[a.clone(), b.clone()]);
        let pristine = doc.clone();
        let mut history = UndoStack::default();
        let mut tool = SelectTool::new();
        tool.set_selection(vec![
            ElementRef::new(ElementKind::Pin, a.id),
            ElementRef::new(ElementKind::Pin, b.id),
        ]);

        tool.process_rotate(&mut doc, &mut history, Angle::deg90()).unwrap();
        // center is (1mm, 0); a rotates to (1, -1), b to (1, 1)
        assert_eq!(doc.pins()[0].position, Point::from_mm(1, -1));
        assert_eq!(doc.pins()[1].position, Point::from_mm(1, 1));

        history.undo(&mut doc).unwrap();
        assert_eq!(doc, pristine);
    }

    #[test]
    fn double_click_opens_properties_for_the_topmost_hit() {
        let a = pin("A", 1);
        let tool = SelectTool::new();
        assert_eq!(
            tool.process_double_click(&hit_on(&a)),
            Response::OpenProperties(ElementRef::new(ElementKind::Pin, a.id))
        );
        assert_eq!(
            tool.process_double_click(&HitCandidates::default()),
            Response::Handled
        );
    }

    #[test]
    fn cut_copy_paste_round_trip_selects_the_pasted_elements() {
        let a = pin("A", 1);
        let mut doc = doc_with(&[a.clone()]);
        let mut history = UndoStack::default();
        let mut clipboard = MemoryClipboard::default();
        let mut tool = SelectTool::new();
        tool.set_selection(vec![ElementRef::new(ElementKind::Pin, a.id)]);

        tool.process_cut(&mut doc, &mut history, &mut clipboard).unwrap();
        assert_eq!(doc.element_count(), 0);

        tool.process_paste(&mut doc, &mut history, &clipboard, Point::from_mm(1, 1))
            .unwrap();
        assert_eq!(doc.pins().len(), 1);
        // cut then paste back into the same document keeps the identifier
        assert_eq!(doc.pins()[0].id, a.id);
        assert_eq!(doc.pins()[0].position, Point::from_mm(2, 1));
        assert_eq!(tool.selection(), &[ElementRef::new(ElementKind::Pin, a.id)]);
    }

    #[test]
    fn paste_with_an_empty_clipboard_is_a_noop() {
        let mut doc = doc_with(&[]);
        let mut history = UndoStack::default();
        let clipboard = MemoryClipboard::default();
        let mut tool = SelectTool::new();

        assert_eq!(
            tool.process_paste(&mut doc, &mut history, &clipboard, Point::ZERO)
                .unwrap(),
            Response::Handled
        );
        assert_eq!(doc.element_count(), 0);
        assert!(!history.can_undo());
    }

    #[test]
    fn foreign_clipboard_payload_fails_with_a_format_error() {
        use crate::clipboard::ClipboardPayload;

        let mut doc = doc_with(&[]);
        let mut history = UndoStack::default();
        let mut clipboard = MemoryClipboard::default();
        clipboard
            .set_contents(ClipboardPayload {
                mime: "text/plain".into(),
                data: "hello".into(),
                text: "hello".into(),
            })
            .unwrap();
        let mut tool = SelectTool::new();

        let err = tool
            .process_paste(&mut doc, &mut history, &clipboard, Point::ZERO)
            .unwrap_err();
        assert!(matches!(err, EditorError::Format(_)));
        assert_eq!(tool.interaction_state(), InteractionState::Idle);
        assert_eq!(doc.element_count(), 0);
    }
}
