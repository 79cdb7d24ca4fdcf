//! Interactive editing engine for symbol documents.
//!
//! Event-driven and single-threaded: the host feeds pointer and keyboard
//! events into [`SelectTool`], which turns them into reversible
//! [`Command`]s executed through the [`UndoStack`]. Copy/cut/paste go
//! through a serialized [`ClipboardSnapshot`] behind the injected
//! [`ClipboardAccess`] capability. Hit-testing and marquee resolution are
//! supplied by the rendering collaborator.

pub mod clipboard;
pub mod commands;
pub mod history;
pub mod hit;
pub mod input;
pub mod paste;
pub mod select;
pub mod shortcuts;

pub use clipboard::{
    ClipboardAccess, ClipboardPayload, ClipboardSnapshot, MemoryClipboard, SYMBOL_CLIPBOARD_MIME,
};
pub use commands::Command;
pub use history::{UndoStack, MAX_HISTORY_DEPTH};
pub use hit::HitCandidates;
pub use input::Modifiers;
pub use paste::paste_commands;
pub use select::{InteractionState, Response, SelectTool};
pub use shortcuts::{ShortcutAction, ShortcutMap};
