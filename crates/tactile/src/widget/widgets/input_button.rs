//! Button that flips into an inline text editor.
//!
//! [`InputButton`] shows a button until activated, then swaps to a focused,
//! fully-selected text input. The session ends in one of three ways:
//!
//! - Enter or blur commits: a non-empty buffer is emitted through
//!   `committed`; an empty buffer falls back to the configured default
//!   value; with neither, nothing is emitted.
//! - Escape discards the buffer without committing.
//!
//! A session commits at most once; the editing flag is checked and cleared
//! before any emit.

use tactile_core::{Object, ObjectId, Signal};

use crate::widget::{
    Activation, ActivationDispatcher, Element, IconSpec, Key, TooltipSpec, VisualFlags, Widget,
    WidgetBase, WidgetEvent,
};

/// A button with an inline edit session.
pub struct InputButton {
    /// Widget base.
    base: WidgetBase,

    /// Button content shown while not editing.
    text: String,

    /// Optional icon.
    icon: Option<IconSpec>,

    /// Optional tooltip.
    tooltip: Option<TooltipSpec>,

    /// Color token.
    color: Option<String>,

    /// Whether the surface stretches to fill its container.
    fluid: bool,

    /// Externally supplied current value, used to seed the edit buffer.
    value: String,

    /// Fallback committed when the session ends with an empty buffer.
    default_value: Option<String>,

    /// Maximum buffer length in characters.
    max_length: Option<usize>,

    /// Whether an edit session is active.
    editing: bool,

    /// The session's edit buffer.
    buffer: String,

    /// Whether the buffer is fully selected (first keystroke replaces it).
    select_all: bool,

    /// Signal emitted with the committed value.
    pub committed: Signal<String>,
}

impl InputButton {
    /// Create a new input button with the specified text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.into(),
            icon: None,
            tooltip: None,
            color: None,
            fluid: false,
            value: String::new(),
            default_value: None,
            max_length: None,
            editing: false,
            buffer: String::new(),
            select_all: false,
            committed: Signal::new(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Get the externally supplied current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the current value. Seeds the buffer of the next edit session.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.base.update();
    }

    /// Set the current value using builder pattern.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the fallback value using builder pattern.
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set the maximum buffer length using builder pattern.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set the icon using builder pattern.
    pub fn with_icon(mut self, icon: IconSpec) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the tooltip using builder pattern.
    pub fn with_tooltip(mut self, tooltip: TooltipSpec) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Set the color token using builder pattern.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Make the surface fluid using builder pattern.
    pub fn with_fluid(mut self) -> Self {
        self.fluid = true;
        self
    }

    /// Set enabled state using builder pattern.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.base.set_enabled(enabled);
        self
    }

    // =========================================================================
    // Edit Session
    // =========================================================================

    /// Check if an edit session is active.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Get the session buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    fn dispatcher(&self) -> ActivationDispatcher {
        ActivationDispatcher::new(!self.base.is_enabled(), true)
    }

    /// Begin an edit session: seed the buffer from the current value,
    /// select it fully, take focus.
    fn enter_editing(&mut self) {
        if self.editing || !self.base.is_enabled() {
            return;
        }
        self.editing = true;
        self.buffer = self.value.clone();
        self.select_all = true;
        self.base.set_focused(true);
        self.base.update();
        tracing::trace!(target: "tactile::widget", "edit session started");
    }

    /// End the session with a commit attempt.
    ///
    /// The editing flag is cleared before any emit, so reentrant blur
    /// during a commit callback cannot commit twice.
    fn commit_and_exit(&mut self) {
        if !self.editing {
            return;
        }
        self.editing = false;
        self.select_all = false;
        self.base.set_focused(false);
        self.base.update();

        let buffer = std::mem::take(&mut self.buffer);
        if !buffer.is_empty() {
            tracing::trace!(target: "tactile::widget", value = %buffer, "edit committed");
            self.committed.emit(buffer);
        } else if let Some(default) = self.default_value.clone() {
            tracing::trace!(target: "tactile::widget", value = %default, "edit committed default");
            self.committed.emit(default);
        }
    }

    /// End the session without committing.
    fn discard_and_exit(&mut self) {
        if !self.editing {
            return;
        }
        self.editing = false;
        self.select_all = false;
        self.buffer.clear();
        self.base.set_focused(false);
        self.base.update();
        tracing::trace!(target: "tactile::widget", "edit discarded");
    }

    /// Apply one keystroke to the buffer. Returns `true` if handled.
    fn edit_key(&mut self, key: Key, text: Option<char>) -> bool {
        match key {
            Key::Enter => {
                self.commit_and_exit();
                true
            }
            Key::Escape => {
                self.discard_and_exit();
                true
            }
            Key::Backspace => {
                if self.select_all {
                    self.buffer.clear();
                    self.select_all = false;
                } else {
                    self.buffer.pop();
                }
                self.base.update();
                true
            }
            _ => {
                let Some(ch) = text else {
                    return false;
                };
                if self.select_all {
                    self.buffer.clear();
                    self.select_all = false;
                }
                if self.max_length.is_none_or(|max| self.buffer.chars().count() < max) {
                    self.buffer.push(ch);
                }
                self.base.update();
                true
            }
        }
    }
}

impl Object for InputButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for InputButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(e) => {
                if self.editing {
                    // Clicks inside the editor keep the session alive.
                    return false;
                }
                match self.dispatcher().on_mouse_press(e) {
                    Activation::Fire => {
                        self.enter_editing();
                        event.accept();
                        true
                    }
                    Activation::Suppress => {
                        event.accept();
                        true
                    }
                    Activation::Ignore => false,
                }
            }
            WidgetEvent::KeyPress(e) => {
                if self.editing {
                    let (key, text) = (e.key, e.text);
                    if self.edit_key(key, text) {
                        event.accept();
                        return true;
                    }
                    return false;
                }
                match self.dispatcher().on_key_press(e) {
                    Activation::Fire => {
                        self.enter_editing();
                        event.accept();
                        true
                    }
                    Activation::Suppress => {
                        event.accept();
                        true
                    }
                    Activation::Ignore => false,
                }
            }
            WidgetEvent::FocusOut(_) => {
                // Blur commits.
                self.commit_and_exit();
                true
            }
            WidgetEvent::FocusIn(_) => {
                self.base.set_focused(true);
                true
            }
            _ => false,
        }
    }

    fn build(&self) -> Element {
        let mut flags = VisualFlags::NONE;
        if self.fluid {
            flags |= VisualFlags::FLUID;
        }
        if !self.base.is_enabled() {
            flags |= VisualFlags::DISABLED;
        }
        if self.editing {
            flags |= VisualFlags::SELECTED;
        }

        let mut children = Vec::new();
        if let Some(icon) = &self.icon {
            children.push(Element::Icon(icon.clone()));
        }
        if !self.editing {
            children.push(Element::Text(self.text.clone()));
        }
        // The input is always part of the tree; it is hidden while idle so
        // the presentation layer can keep focus bookkeeping stable.
        children.push(Element::Input {
            visible: self.editing,
            value: self.buffer.clone(),
        });

        let surface = Element::Surface {
            flags,
            color: self.color.clone(),
            focusable: self.base.is_focusable(),
            children,
        };
        match &self.tooltip {
            Some(tooltip) => Element::Tooltip {
                spec: tooltip.clone(),
                child: Box::new(surface),
            },
            None => surface,
        }
    }
}

static_assertions::assert_impl_all!(InputButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{
        FocusOutEvent, FocusReason, KeyPressEvent, MouseButton, MousePressEvent,
    };
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn press() -> WidgetEvent {
        WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left))
    }

    fn blur() -> WidgetEvent {
        WidgetEvent::FocusOut(FocusOutEvent::new(FocusReason::Mouse))
    }

    fn key(k: Key) -> WidgetEvent {
        WidgetEvent::KeyPress(KeyPressEvent::new(k))
    }

    fn typed(k: Key, ch: char) -> WidgetEvent {
        WidgetEvent::KeyPress(KeyPressEvent::new(k).with_text(ch))
    }

    fn commit_log(button: &InputButton) -> Arc<Mutex<Vec<String>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_clone = log.clone();
        button.committed.connect(move |value: &String| {
            log_clone.lock().push(value.clone());
        });
        log
    }

    #[test]
    fn test_activation_enters_editing() {
        let mut button = InputButton::new("Rename").with_value("old");

        button.event(&mut press());
        assert!(button.is_editing());
        assert_eq!(button.buffer(), "old");
        assert!(button.has_focus());
    }

    #[test]
    fn test_first_keystroke_replaces_selection() {
        let mut button = InputButton::new("Rename").with_value("old");
        button.event(&mut press());

        button.event(&mut typed(Key::A, 'a'));
        assert_eq!(button.buffer(), "a");

        button.event(&mut typed(Key::B, 'b'));
        assert_eq!(button.buffer(), "ab");
    }

    #[test]
    fn test_blur_commits_buffer() {
        let mut button = InputButton::new("Set count");
        let log = commit_log(&button);

        button.event(&mut press());
        button.event(&mut typed(Key::Digit4, '4'));
        button.event(&mut typed(Key::Digit2, '2'));
        button.event(&mut blur());

        assert_eq!(*log.lock(), vec!["42".to_string()]);
        assert!(!button.is_editing());
    }

    #[test]
    fn test_enter_commits_once() {
        let mut button = InputButton::new("Set count").with_value("7");
        let log = commit_log(&button);

        button.event(&mut press());
        button.event(&mut key(Key::Enter));
        // A blur arriving after the session ended must not commit again.
        button.event(&mut blur());

        assert_eq!(*log.lock(), vec!["7".to_string()]);
    }

    #[test]
    fn test_empty_buffer_falls_back_to_default() {
        let mut button = InputButton::new("Set count").with_default_value("1");
        let log = commit_log(&button);

        button.event(&mut press());
        button.event(&mut blur());

        assert_eq!(*log.lock(), vec!["1".to_string()]);
    }

    #[test]
    fn test_empty_buffer_without_default_commits_nothing() {
        let mut button = InputButton::new("Set count");
        let log = commit_log(&button);

        button.event(&mut press());
        button.event(&mut blur());

        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_escape_always_discards() {
        let mut button = InputButton::new("Set count").with_default_value("1");
        let log = commit_log(&button);

        button.event(&mut press());
        button.event(&mut typed(Key::Digit9, '9'));
        button.event(&mut key(Key::Escape));

        assert!(log.lock().is_empty());
        assert!(!button.is_editing());
    }

    #[test]
    fn test_backspace() {
        let mut button = InputButton::new("Rename").with_value("abc");
        button.event(&mut press());

        // Selection intact: backspace clears everything.
        button.event(&mut key(Key::Backspace));
        assert_eq!(button.buffer(), "");

        button.event(&mut typed(Key::X, 'x'));
        button.event(&mut typed(Key::Y, 'y'));
        button.event(&mut key(Key::Backspace));
        assert_eq!(button.buffer(), "x");
    }

    #[test]
    fn test_max_length() {
        let mut button = InputButton::new("Code").with_max_length(2);
        button.event(&mut press());

        button.event(&mut typed(Key::A, 'a'));
        button.event(&mut typed(Key::B, 'b'));
        button.event(&mut typed(Key::C, 'c'));
        assert_eq!(button.buffer(), "ab");
    }

    #[test]
    fn test_disabled_never_enters_editing() {
        let mut button = InputButton::new("Rename").with_enabled(false);
        button.event(&mut press());
        assert!(!button.is_editing());
    }

    #[test]
    fn test_build_hides_input_while_idle() {
        let mut button = InputButton::new("Rename");

        let idle = button.build();
        let children = idle.surface_children().unwrap();
        assert!(children.contains(&Element::Input {
            visible: false,
            value: String::new(),
        }));
        assert!(children.contains(&Element::Text("Rename".into())));

        button.event(&mut press());
        let editing = button.build();
        let children = editing.surface_children().unwrap();
        assert!(children.contains(&Element::Input {
            visible: true,
            value: String::new(),
        }));
        assert!(editing.surface_flags().unwrap().has(VisualFlags::SELECTED));
    }
}
