//! Undo/redo history.
//!
//! The stack is the sole mutator of the document once a tool commits an
//! action: commands go through [`UndoStack::execute`], which applies them
//! and records them for undo. A command whose apply fails records nothing.

use crate::commands::Command;
use symed_core::{Document, EditorError};

/// Default maximum undo depth.
pub const MAX_HISTORY_DEPTH: usize = 100;

/// Ordered history of executed commands with a redo tail.
pub struct UndoStack {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
    max_depth: usize,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(MAX_HISTORY_DEPTH)
    }
}

impl UndoStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(64)),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Apply `command` and push it onto the history, discarding any redo
    /// tail. If apply fails the history and document are unchanged.
    pub fn execute(&mut self, doc: &mut Document, command: Command) -> Result<(), EditorError> {
        command.apply(doc)?;
        log::debug!("executed: {}", command.description());
        self.push(command);
        Ok(())
    }

    /// Push a command whose effect is already present in the document
    /// (a live drag gesture that mutated the document while in progress).
    pub fn commit_performed(&mut self, command: Command) {
        log::debug!("committed: {}", command.description());
        self.push(command);
    }

    fn push(&mut self, command: Command) {
        self.redo_stack.clear();
        self.undo_stack.push(command);
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
    }

    /// Reverse the most recent command, moving it to the redo tail.
    /// Returns its description, or `None` if there is nothing to undo.
    pub fn undo(&mut self, doc: &mut Document) -> Result<Option<String>, EditorError> {
        let Some(command) = self.undo_stack.pop() else {
            return Ok(None);
        };
        if let Err(err) = command.undo(doc) {
            self.undo_stack.push(command);
            return Err(err);
        }
        let description = command.description();
        self.redo_stack.push(command);
        Ok(Some(description))
    }

    /// Reapply the most recently undone command. Returns its description,
    /// or `None` if there is nothing to redo.
    pub fn redo(&mut self, doc: &mut Document) -> Result<Option<String>, EditorError> {
        let Some(command) = self.redo_stack.pop() else {
            return Ok(None);
        };
        if let Err(err) = command.apply(doc) {
            self.redo_stack.push(command);
            return Err(err);
        }
        let description = command.description();
        self.undo_stack.push(command);
        Ok(Some(description))
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }
}
