//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s the host feeds
//! into the select tool and the undo history. Lives here so every frontend
//! shares one binding table.

use crate::input::Modifiers;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    RotateCcw,
    RotateCw,
    Remove,
    SelectAll,
    /// Escape: abort the gesture in progress, else clear the selection.
    Cancel,
}

/// Resolves key events into shortcut actions.
///
/// Platform-aware: ⌘ on macOS and Ctrl elsewhere both act as the command
/// modifier (see [`Modifiers::command`]).
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        let cmd = modifiers.command();

        // ── Modifier combos first (most specific) ──
        if cmd && modifiers.shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "x" | "X" => Some(ShortcutAction::Cut),
                "c" | "C" => Some(ShortcutAction::Copy),
                "v" | "V" => Some(ShortcutAction::Paste),
                "a" | "A" => Some(ShortcutAction::SelectAll),
                _ => None,
            };
        }

        if modifiers.shift {
            return match key {
                // Shift+R rotates the other way round
                "r" | "R" => Some(ShortcutAction::RotateCw),
                _ => None,
            };
        }

        // ── Single keys (no modifiers) ──
        match key {
            "r" | "R" => Some(ShortcutAction::RotateCcw),
            "Delete" | "Backspace" => Some(ShortcutAction::Remove),
            "Escape" => Some(ShortcutAction::Cancel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mods(ctrl: bool, shift: bool, meta: bool) -> Modifiers {
        Modifiers {
            ctrl,
            shift,
            alt: false,
            meta,
        }
    }

    #[test]
    fn resolve_undo_redo() {
        // Ctrl+Z and Cmd+Z both undo
        assert_eq!(
            ShortcutMap::resolve("z", mods(true, false, false)),
            Some(ShortcutAction::Undo)
        );
        assert_eq!(
            ShortcutMap::resolve("z", mods(false, false, true)),
            Some(ShortcutAction::Undo)
        );
        // Cmd+Shift+Z and Cmd+Y both redo
        assert_eq!(
            ShortcutMap::resolve("z", mods(false, true, true)),
            Some(ShortcutAction::Redo)
        );
        assert_eq!(
            ShortcutMap::resolve("y", mods(true, false, false)),
            Some(ShortcutAction::Redo)
        );
    }

    #[test]
    fn resolve_clipboard() {
        assert_eq!(
            ShortcutMap::resolve("x", mods(true, false, false)),
            Some(ShortcutAction::Cut)
        );
        assert_eq!(
            ShortcutMap::resolve("c", mods(true, false, false)),
            Some(ShortcutAction::Copy)
        );
        assert_eq!(
            ShortcutMap::resolve("v", mods(true, false, false)),
            Some(ShortcutAction::Paste)
        );
    }

    #[test]
    fn resolve_rotate() {
        assert_eq!(
            ShortcutMap::resolve("r", Modifiers::NONE),
            Some(ShortcutAction::RotateCcw)
        );
        assert_eq!(
            ShortcutMap::resolve("r", mods(false, true, false)),
            Some(ShortcutAction::RotateCw)
        );
    }

    #[test]
    fn resolve_remove_and_cancel() {
        assert_eq!(
            ShortcutMap::resolve("Delete", Modifiers::NONE),
            Some(ShortcutAction::Remove)
        );
        assert_eq!(
            ShortcutMap::resolve("Backspace", Modifiers::NONE),
            Some(ShortcutAction::Remove)
        );
        assert_eq!(
            ShortcutMap::resolve("Escape", Modifiers::NONE),
            Some(ShortcutAction::Cancel)
        );
    }

    #[test]
    fn resolve_unknown_key() {
        assert_eq!(ShortcutMap::resolve("q", Modifiers::NONE), None);
        assert_eq!(ShortcutMap::resolve("z", Modifiers::NONE), None);
    }
}
