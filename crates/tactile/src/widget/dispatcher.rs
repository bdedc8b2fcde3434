//! Activation dispatch for button-like widgets.
//!
//! Every widget in the button family funnels mouse and keyboard input
//! through an [`ActivationDispatcher`], which turns raw events into a single
//! [`Activation`] verdict. This keeps the activation rules (left click,
//! Enter/Space, Escape handling, the disabled no-op) in one place.

use crate::widget::{Key, KeyPressEvent, MouseButton, MousePressEvent};

/// The verdict for one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Activate the widget and suppress the event's default handling.
    Fire,
    /// Suppress the event's default handling without activating.
    Suppress,
    /// Leave the event alone; it propagates to the surrounding UI.
    Ignore,
}

/// Maps input events to activation verdicts.
///
/// Disabled widgets never fire and never error; a press on a disabled
/// widget is a silent no-op.
#[derive(Debug, Clone, Copy)]
pub struct ActivationDispatcher {
    /// Whether the widget is disabled.
    disabled: bool,
    /// Whether keyboard activation is intercepted at all.
    capture_keys: bool,
}

impl ActivationDispatcher {
    /// Create a dispatcher.
    pub fn new(disabled: bool, capture_keys: bool) -> Self {
        Self {
            disabled,
            capture_keys,
        }
    }

    /// Decide what a mouse press does.
    ///
    /// Only the left button activates. A press on a disabled widget is
    /// ignored outright so the surrounding UI still sees it.
    pub fn on_mouse_press(&self, event: &MousePressEvent) -> Activation {
        if event.button != MouseButton::Left {
            return Activation::Ignore;
        }
        if self.disabled {
            tracing::trace!(target: "tactile::widget", "press on disabled widget ignored");
            return Activation::Ignore;
        }
        Activation::Fire
    }

    /// Decide what a key press does.
    ///
    /// Enter and Space activate; Escape is swallowed so focus control
    /// returns to the surrounding layout; everything else passes through.
    /// With `capture_keys` off, no key is intercepted at all.
    pub fn on_key_press(&self, event: &KeyPressEvent) -> Activation {
        if !self.capture_keys {
            return Activation::Ignore;
        }

        match event.key {
            Key::Enter | Key::Space => {
                if self.disabled {
                    Activation::Suppress
                } else {
                    Activation::Fire
                }
            }
            Key::Escape => Activation::Suppress,
            _ => Activation::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> ActivationDispatcher {
        ActivationDispatcher::new(false, true)
    }

    fn disabled() -> ActivationDispatcher {
        ActivationDispatcher::new(true, true)
    }

    #[test]
    fn test_left_press_fires() {
        let event = MousePressEvent::new(MouseButton::Left);
        assert_eq!(enabled().on_mouse_press(&event), Activation::Fire);
    }

    #[test]
    fn test_right_press_ignored() {
        let event = MousePressEvent::new(MouseButton::Right);
        assert_eq!(enabled().on_mouse_press(&event), Activation::Ignore);
    }

    #[test]
    fn test_disabled_press_is_silent_noop() {
        let event = MousePressEvent::new(MouseButton::Left);
        assert_eq!(disabled().on_mouse_press(&event), Activation::Ignore);
    }

    #[test]
    fn test_enter_and_space_fire() {
        assert_eq!(
            enabled().on_key_press(&KeyPressEvent::new(Key::Enter)),
            Activation::Fire
        );
        assert_eq!(
            enabled().on_key_press(&KeyPressEvent::new(Key::Space)),
            Activation::Fire
        );
    }

    #[test]
    fn test_enter_on_disabled_suppressed() {
        assert_eq!(
            disabled().on_key_press(&KeyPressEvent::new(Key::Enter)),
            Activation::Suppress
        );
    }

    #[test]
    fn test_escape_suppressed_without_firing() {
        assert_eq!(
            enabled().on_key_press(&KeyPressEvent::new(Key::Escape)),
            Activation::Suppress
        );
    }

    #[test]
    fn test_other_keys_pass_through() {
        assert_eq!(
            enabled().on_key_press(&KeyPressEvent::new(Key::A)),
            Activation::Ignore
        );
    }

    #[test]
    fn test_capture_keys_off_ignores_everything() {
        let dispatcher = ActivationDispatcher::new(false, false);
        assert_eq!(
            dispatcher.on_key_press(&KeyPressEvent::new(Key::Enter)),
            Activation::Ignore
        );
        assert_eq!(
            dispatcher.on_key_press(&KeyPressEvent::new(Key::Escape)),
            Activation::Ignore
        );
        // Mouse activation is unaffected.
        let event = MousePressEvent::new(MouseButton::Left);
        assert_eq!(dispatcher.on_mouse_press(&event), Activation::Fire);
    }
}
