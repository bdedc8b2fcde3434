//! Confirm-gated button.
//!
//! [`ConfirmButton`] requires two activations: the first arms the button
//! and swaps its presentation to the confirm content (default `"Confirm?"`
//! in the `bad` color); the second fires `clicked` and returns to idle. A
//! press anywhere outside the widget while armed disarms it silently.
//!
//! The outside-click watch is installed through a deferred task, so it goes
//! live only after the arming event finishes dispatching; the arming click
//! itself can never disarm the button.

use std::sync::Arc;

use tactile_core::{Object, ObjectId, Signal};

use crate::widget::{
    Activation, ClickWatchGuard, Element, IconSpec, InputContext, VisualFlags, Widget, WidgetBase,
    WidgetEvent,
};

use super::Button;

/// A button that arms on the first activation and fires on the second.
pub struct ConfirmButton {
    /// The underlying button configuration.
    button: Button,

    /// Shared input context, needed for the outside-click watch.
    ctx: Arc<InputContext>,

    /// Content shown while armed.
    confirm_text: String,

    /// Color token while armed.
    confirm_color: Option<String>,

    /// Icon while armed. When unset, the armed state shows no icon.
    confirm_icon: Option<IconSpec>,

    /// The outside-click watch. `Some` means armed.
    watch: Option<ClickWatchGuard>,

    /// Signal emitted on the confirming activation.
    pub clicked: Signal<()>,
}

impl ConfirmButton {
    /// Create a new confirm button with the specified text.
    pub fn new(text: impl Into<String>, ctx: &Arc<InputContext>) -> Self {
        Self {
            button: Button::new(text),
            ctx: Arc::clone(ctx),
            confirm_text: "Confirm?".to_string(),
            confirm_color: Some("bad".to_string()),
            confirm_icon: None,
            watch: None,
            clicked: Signal::new(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Get the underlying button for idle-state configuration.
    pub fn button(&self) -> &Button {
        &self.button
    }

    /// Get the underlying button mutably.
    pub fn button_mut(&mut self) -> &mut Button {
        &mut self.button
    }

    /// Set the armed content using builder pattern.
    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    /// Set the armed color token using builder pattern.
    pub fn with_confirm_color(mut self, color: impl Into<String>) -> Self {
        self.confirm_color = Some(color.into());
        self
    }

    /// Set the armed icon using builder pattern.
    pub fn with_confirm_icon(mut self, icon: IconSpec) -> Self {
        self.confirm_icon = Some(icon);
        self
    }

    /// Set the idle icon using builder pattern.
    pub fn with_icon(mut self, icon: IconSpec) -> Self {
        self.button = self.button.with_icon(icon);
        self
    }

    /// Set enabled state using builder pattern.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.button.widget_base_mut().set_enabled(enabled);
        self
    }

    // =========================================================================
    // Arm / Fire / Disarm
    // =========================================================================

    /// Check if the button is armed.
    pub fn is_armed(&self) -> bool {
        self.watch.is_some()
    }

    /// One activation step: arm when idle, fire when armed.
    fn activate(&mut self) {
        if self.watch.is_some() {
            // Dropping the guard releases the watch (or neutralizes the
            // pending install).
            self.watch = None;
            tracing::trace!(target: "tactile::widget", "confirm fired");
            self.clicked.emit(());
        } else {
            tracing::trace!(target: "tactile::widget", "confirm armed");
            self.watch = Some(ClickWatchGuard::deferred(&self.ctx, self.object_id()));
        }
        self.widget_base_mut().update();
    }

    /// Return to idle without firing. Idempotent.
    pub fn disarm(&mut self) {
        if self.watch.take().is_some() {
            tracing::trace!(target: "tactile::widget", "confirm disarmed");
            self.widget_base_mut().update();
        }
    }
}

impl Object for ConfirmButton {
    fn object_id(&self) -> ObjectId {
        self.button.object_id()
    }
}

impl Widget for ConfirmButton {
    fn widget_base(&self) -> &WidgetBase {
        self.button.widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.button.widget_base_mut()
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(e) => match self.button.dispatcher().on_mouse_press(e) {
                Activation::Fire => {
                    self.activate();
                    event.accept();
                    true
                }
                Activation::Suppress => {
                    event.accept();
                    true
                }
                Activation::Ignore => false,
            },
            WidgetEvent::KeyPress(e) => match self.button.dispatcher().on_key_press(e) {
                Activation::Fire => {
                    self.activate();
                    event.accept();
                    true
                }
                Activation::Suppress => {
                    event.accept();
                    true
                }
                Activation::Ignore => false,
            },
            WidgetEvent::ClickOutside(_) => {
                self.disarm();
                event.accept();
                true
            }
            WidgetEvent::FocusIn(_) => {
                self.widget_base_mut().set_focused(true);
                true
            }
            WidgetEvent::FocusOut(_) => {
                self.widget_base_mut().set_focused(false);
                true
            }
            _ => false,
        }
    }

    fn build(&self) -> Element {
        if self.is_armed() {
            self.button.compose(
                &self.confirm_text,
                self.confirm_icon.as_ref(),
                self.confirm_color.as_deref(),
                VisualFlags::NONE,
            )
        } else {
            self.button.build()
        }
    }
}

static_assertions::assert_impl_all!(ConfirmButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{ClickOutsideEvent, MouseButton, MousePressEvent};
    use parking_lot::Mutex;

    fn press() -> WidgetEvent {
        WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left))
    }

    fn fire_counter(button: &ConfirmButton) -> Arc<Mutex<u32>> {
        let count = Arc::new(Mutex::new(0));
        let count_clone = count.clone();
        button.clicked.connect(move |_| *count_clone.lock() += 1);
        count
    }

    #[test]
    fn test_two_activations_fire_once() {
        let ctx = InputContext::new();
        let mut button = ConfirmButton::new("Self-destruct", &ctx);
        let count = fire_counter(&button);

        button.event(&mut press());
        assert!(button.is_armed());
        assert_eq!(*count.lock(), 0);

        ctx.process_deferred();

        button.event(&mut press());
        assert!(!button.is_armed());
        assert_eq!(*count.lock(), 1);
        assert!(!ctx.is_watching_clicks(button.object_id()));
    }

    #[test]
    fn test_outside_click_disarms_silently() {
        let ctx = InputContext::new();
        let mut button = ConfirmButton::new("Self-destruct", &ctx);
        let count = fire_counter(&button);

        button.event(&mut press());
        ctx.process_deferred();
        assert!(ctx.is_watching_clicks(button.object_id()));

        let mut outside = WidgetEvent::ClickOutside(ClickOutsideEvent::new());
        assert!(button.event(&mut outside));
        assert!(!button.is_armed());
        assert_eq!(*count.lock(), 0);
        assert!(!ctx.is_watching_clicks(button.object_id()));
    }

    #[test]
    fn test_watch_installed_only_after_drain() {
        // The arming click is still in flight when the watch is created;
        // it must not be live until the deferred queue runs.
        let ctx = InputContext::new();
        let mut button = ConfirmButton::new("Purge", &ctx);

        button.event(&mut press());
        assert!(button.is_armed());
        assert!(!ctx.is_watching_clicks(button.object_id()));

        ctx.process_deferred();
        assert!(ctx.is_watching_clicks(button.object_id()));
    }

    #[test]
    fn test_fire_before_drain_neutralizes_install() {
        let ctx = InputContext::new();
        let mut button = ConfirmButton::new("Purge", &ctx);
        let count = fire_counter(&button);

        button.event(&mut press());
        button.event(&mut press());
        assert_eq!(*count.lock(), 1);

        // The pending install must not resurrect the watch.
        ctx.process_deferred();
        assert!(!ctx.is_watching_clicks(button.object_id()));
    }

    #[test]
    fn test_disarm_idempotent() {
        let ctx = InputContext::new();
        let mut button = ConfirmButton::new("Purge", &ctx);

        button.disarm();
        button.event(&mut press());
        button.disarm();
        button.disarm();
        assert!(!button.is_armed());
    }

    #[test]
    fn test_drop_releases_watch() {
        let ctx = InputContext::new();
        let id;
        {
            let mut button = ConfirmButton::new("Purge", &ctx);
            id = button.object_id();
            button.event(&mut press());
            ctx.process_deferred();
            assert!(ctx.is_watching_clicks(id));
        }
        assert!(!ctx.is_watching_clicks(id));
    }

    #[test]
    fn test_armed_presentation() {
        let ctx = InputContext::new();
        let mut button = ConfirmButton::new("Purge", &ctx).with_icon(IconSpec::new("trash"));

        let idle = button.build();
        assert_eq!(
            idle.surface_children().unwrap().last(),
            Some(&Element::Text("Purge".into()))
        );

        button.event(&mut press());
        let armed = button.build();
        let children = armed.surface_children().unwrap();
        // Armed state shows the confirm content and drops the idle icon.
        assert_eq!(children, &[Element::Text("Confirm?".into())]);
        if let Element::Surface { color, .. } = &armed {
            assert_eq!(color.as_deref(), Some("bad"));
        } else {
            panic!("expected surface");
        }
    }

    #[test]
    fn test_disabled_never_arms() {
        let ctx = InputContext::new();
        let mut button = ConfirmButton::new("Purge", &ctx).with_enabled(false);

        let mut event = press();
        assert!(!button.event(&mut event));
        assert!(!button.is_armed());
    }
}
