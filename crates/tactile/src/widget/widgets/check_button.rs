//! Checkbox-style button.
//!
//! [`CheckButton`] maps a caller-supplied `checked` flag onto a checkbox
//! presentation: a `check-square-o` or `square-o` icon, the SELECTED flag,
//! and a transparent surface. Toggling is the caller's responsibility; the
//! widget only re-emits `clicked` and the caller flips its own state.

use tactile_core::{Object, ObjectId, Signal};

use crate::widget::{Element, IconSpec, VisualFlags, Widget, WidgetBase, WidgetEvent};

use super::Button;

/// Icon shown when checked.
const CHECKED_ICON: &str = "check-square-o";
/// Icon shown when unchecked.
const UNCHECKED_ICON: &str = "square-o";

/// A button presented as a checkbox.
pub struct CheckButton {
    /// The underlying button; all interaction is delegated to it.
    button: Button,

    /// Caller-supplied checked state.
    checked: bool,
}

impl CheckButton {
    /// Create a new check button with the specified text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            button: Button::new(text),
            checked: false,
        }
    }

    /// Check if the box is shown checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the displayed checked state.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.widget_base_mut().update();
        }
    }

    /// Set the checked state using builder pattern.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set enabled state using builder pattern.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.button.widget_base_mut().set_enabled(enabled);
        self
    }

    /// The activation signal.
    pub fn clicked(&self) -> &Signal<()> {
        &self.button.clicked
    }
}

impl Object for CheckButton {
    fn object_id(&self) -> ObjectId {
        self.button.object_id()
    }
}

impl Widget for CheckButton {
    fn widget_base(&self) -> &WidgetBase {
        self.button.widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.button.widget_base_mut()
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        self.button.event(event)
    }

    fn build(&self) -> Element {
        let icon = IconSpec::new(if self.checked {
            CHECKED_ICON
        } else {
            UNCHECKED_ICON
        });
        let flags = if self.checked {
            VisualFlags::SELECTED
        } else {
            VisualFlags::NONE
        };
        self.button
            .compose(self.button.text(), Some(&icon), Some("transparent"), flags)
    }
}

static_assertions::assert_impl_all!(CheckButton: Send, Sync);
