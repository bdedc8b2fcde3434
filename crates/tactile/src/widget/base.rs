//! Widget base functionality.
//!
//! [`WidgetBase`] holds the state every widget shares: object identity,
//! enabled/visible flags, focus, hover, and the repaint request flag.
//! Concrete widgets embed a `WidgetBase` and delegate to it.

use tactile_core::ObjectId;

/// Common state embedded in every widget.
#[derive(Debug)]
pub struct WidgetBase {
    /// Process-unique identity, used to route timers and click watches.
    id: ObjectId,

    /// Whether the widget responds to input.
    enabled: bool,

    /// Whether the widget is shown.
    visible: bool,

    /// Whether the widget participates in focus traversal at all.
    focusable: bool,

    /// Whether the widget currently has keyboard focus.
    focused: bool,

    /// Whether the pointer is currently over the widget.
    hovered: bool,

    /// Whether the widget needs to be rebuilt/redrawn.
    needs_repaint: bool,
}

impl WidgetBase {
    /// Create a new widget base.
    pub fn new() -> Self {
        Self {
            id: ObjectId::next(),
            enabled: true,
            visible: true,
            focusable: true,
            focused: false,
            hovered: false,
            needs_repaint: true,
        }
    }

    /// Get this widget's unique object ID.
    pub fn object_id(&self) -> ObjectId {
        self.id
    }

    // =========================================================================
    // Enabled / Visible
    // =========================================================================

    /// Check if the widget is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget responds to input.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.update();
        }
    }

    /// Check if the widget is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is shown.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.update();
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Check if the widget can currently receive focus.
    ///
    /// A disabled or hidden widget is excluded from focus traversal even if
    /// it is nominally focusable.
    pub fn is_focusable(&self) -> bool {
        self.focusable && self.enabled && self.visible
    }

    /// Set whether the widget participates in focus traversal.
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    /// Check if the widget currently has keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Update the focus flag. Called from widget event handling.
    pub(crate) fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.update();
        }
    }

    // =========================================================================
    // Hover
    // =========================================================================

    /// Check if the pointer is currently over the widget.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Update the hover flag. Called from widget event handling.
    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.update();
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Request a rebuild of the widget's element tree.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Check if a rebuild has been requested.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Clear and return the rebuild request flag. The host calls this after
    /// rebuilding.
    pub fn take_needs_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(WidgetBase: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let base = WidgetBase::new();
        assert!(base.is_enabled());
        assert!(base.is_visible());
        assert!(base.is_focusable());
        assert!(!base.has_focus());
        assert!(!base.is_hovered());
    }

    #[test]
    fn test_disabled_excluded_from_focus() {
        let mut base = WidgetBase::new();
        base.set_enabled(false);
        assert!(!base.is_focusable());

        base.set_enabled(true);
        base.set_visible(false);
        assert!(!base.is_focusable());
    }

    #[test]
    fn test_update_flag() {
        let mut base = WidgetBase::new();
        assert!(base.take_needs_repaint());
        assert!(!base.needs_repaint());

        base.set_enabled(false);
        assert!(base.needs_repaint());
        assert!(base.take_needs_repaint());
        assert!(!base.take_needs_repaint());
    }
}
