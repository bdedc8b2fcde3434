//! Core widget trait.

use tactile_core::Object;

use crate::widget::{Element, WidgetBase, WidgetEvent};

/// The trait implemented by all widgets.
///
/// A widget owns a [`WidgetBase`], reacts to [`WidgetEvent`]s, and describes
/// its appearance as an [`Element`] tree. The default `event` implementation
/// ignores everything.
pub trait Widget: Object {
    /// Get a reference to the widget base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Handle an event.
    ///
    /// Returns `true` if the event was handled. Handlers that consume an
    /// event should also call `event.accept()` so it stops propagating.
    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let _ = event;
        false
    }

    /// Describe the widget's current appearance.
    fn build(&self) -> Element;

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Check if the widget can currently receive focus.
    fn is_focusable(&self) -> bool {
        self.widget_base().is_focusable()
    }

    /// Check if the widget currently has keyboard focus.
    fn has_focus(&self) -> bool {
        self.widget_base().has_focus()
    }
}
