//! Input primitives shared by the tools and the shortcut map.

/// Keyboard modifier state accompanying a pointer or key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };

    /// The platform-neutral "command" modifier: ⌘ on macOS, Ctrl elsewhere.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }

    /// The modifier that toggles an element in and out of the selection.
    pub fn toggles_selection(&self) -> bool {
        self.command()
    }
}
