//! Input events whose default handling can be suppressed.

use crossterm::event::KeyEvent;

/// An input event that carries a "default action" the receiver may suppress.
pub trait Cancelable {
    /// Suppress the default action for this event.
    fn prevent_default(&mut self);

    /// Whether [`Cancelable::prevent_default`] has been called.
    fn is_default_prevented(&self) -> bool;
}

/// Keyboard input as seen by the terminal host.
///
/// The default action of a key is the host's key-binding dispatch; a control
/// that consumes the key calls [`Cancelable::prevent_default`] so the host
/// skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    key: KeyEvent,
    default_prevented: bool,
}

impl InputEvent {
    /// Wrap a key event.
    pub fn new(key: KeyEvent) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    /// The underlying key event.
    pub fn key(&self) -> KeyEvent {
        self.key
    }
}

impl Cancelable for InputEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
