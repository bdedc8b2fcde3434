//! Basic button implementation.
//!
//! This module provides [`Button`], the base of the button family. A button
//! is a pure function of its configuration: text and/or child elements, an
//! optional icon and tooltip, a color token, and visual flags. Activation
//! goes through the [`ActivationDispatcher`] and emits the `clicked` signal.
//!
//! # Example
//!
//! ```
//! use tactile::prelude::*;
//!
//! let mut button = Button::new("Eject")
//!     .with_icon(IconSpec::new("eject"))
//!     .with_color("average");
//!
//! button.clicked.connect(|_| {
//!     println!("ejected");
//! });
//!
//! let mut event = WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left));
//! button.event(&mut event);
//! ```

use tactile_core::{Object, ObjectId, Signal};

use crate::widget::{
    Activation, ActivationDispatcher, Element, IconPosition, IconSpec, TooltipSpec, VisualFlags,
    Widget, WidgetBase, WidgetEvent,
};

/// A clickable button.
pub struct Button {
    /// Widget base for common widget functionality.
    base: WidgetBase,

    /// The button's text content.
    text: String,

    /// Extra child elements shown after the text.
    children: Vec<Element>,

    /// Optional icon.
    icon: Option<IconSpec>,

    /// Position of the icon relative to the content.
    icon_position: IconPosition,

    /// Optional tooltip.
    tooltip: Option<TooltipSpec>,

    /// Color token, resolved by the presentation layer.
    color: Option<String>,

    /// Presentation hints.
    flags: VisualFlags,

    /// Whether Enter/Space/Escape are intercepted while focused.
    capture_keys: bool,

    /// Signal emitted when the button is activated.
    pub clicked: Signal<()>,
}

impl Button {
    /// Create a new button with the specified text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.into(),
            children: Vec::new(),
            icon: None,
            icon_position: IconPosition::Left,
            tooltip: None,
            color: None,
            flags: VisualFlags::NONE,
            capture_keys: true,
            clicked: Signal::new(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Get the button's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the button's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let new_text = text.into();
        if self.text != new_text {
            self.text = new_text;
            self.base.update();
        }
    }

    /// Set the text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Append a child element using builder pattern.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Get the button's icon, if any.
    pub fn icon(&self) -> Option<&IconSpec> {
        self.icon.as_ref()
    }

    /// Set the button's icon.
    pub fn set_icon(&mut self, icon: Option<IconSpec>) {
        self.icon = icon;
        self.base.update();
    }

    /// Set the icon using builder pattern.
    pub fn with_icon(mut self, icon: IconSpec) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the icon position using builder pattern.
    pub fn with_icon_position(mut self, position: IconPosition) -> Self {
        self.icon_position = position;
        self
    }

    /// Set the tooltip using builder pattern.
    pub fn with_tooltip(mut self, tooltip: TooltipSpec) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Set the tooltip.
    pub fn set_tooltip(&mut self, tooltip: Option<TooltipSpec>) {
        self.tooltip = tooltip;
        self.base.update();
    }

    /// Get the color token, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Set the color token using builder pattern.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the color token.
    pub fn set_color(&mut self, color: Option<String>) {
        self.color = color;
        self.base.update();
    }

    /// Get the presentation flags.
    pub fn flags(&self) -> VisualFlags {
        self.flags
    }

    /// Set the presentation flags using builder pattern.
    pub fn with_flags(mut self, flags: VisualFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the presentation flags.
    pub fn set_flags(&mut self, flags: VisualFlags) {
        if self.flags != flags {
            self.flags = flags;
            self.base.update();
        }
    }

    /// Set enabled state using builder pattern.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.base.set_enabled(enabled);
        self
    }

    /// Check if keyboard activation is intercepted.
    pub fn captures_keys(&self) -> bool {
        self.capture_keys
    }

    /// Set whether Enter/Space/Escape are intercepted while focused.
    ///
    /// Turning this off is the embedding escape hatch for hosts that handle
    /// keyboard activation themselves.
    pub fn set_capture_keys(&mut self, capture: bool) {
        self.capture_keys = capture;
    }

    /// Set key capture using builder pattern.
    pub fn with_capture_keys(mut self, capture: bool) -> Self {
        self.capture_keys = capture;
        self
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// The dispatcher reflecting the current configuration.
    pub(crate) fn dispatcher(&self) -> ActivationDispatcher {
        ActivationDispatcher::new(!self.base.is_enabled(), self.capture_keys)
    }

    /// Programmatically click the button.
    ///
    /// Emits `clicked` unless the button is disabled.
    pub fn click(&mut self) {
        if !self.base.is_enabled() {
            return;
        }
        self.clicked.emit(());
        self.base.update();
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Compose the element tree with the given content overrides.
    ///
    /// Shared with the confirm variant, which swaps text, icon and color
    /// while armed but keeps the rest of the configuration.
    pub(crate) fn compose(
        &self,
        text: &str,
        icon: Option<&IconSpec>,
        color: Option<&str>,
        extra_flags: VisualFlags,
    ) -> Element {
        let mut flags = self.flags | extra_flags;
        if !self.base.is_enabled() {
            flags |= VisualFlags::DISABLED;
        }

        let mut children = Vec::new();
        if let (Some(icon), IconPosition::Left) = (icon, self.icon_position) {
            children.push(Element::Icon(icon.clone()));
        }
        if !text.is_empty() {
            children.push(Element::Text(text.to_string()));
        }
        children.extend(self.children.iter().cloned());
        if let (Some(icon), IconPosition::Right) = (icon, self.icon_position) {
            children.push(Element::Icon(icon.clone()));
        }

        let surface = Element::Surface {
            flags,
            color: color.map(str::to_string),
            focusable: self.base.is_focusable(),
            children,
        };

        // A surface without a tooltip is not wrapped.
        match &self.tooltip {
            Some(tooltip) => Element::Tooltip {
                spec: tooltip.clone(),
                child: Box::new(surface),
            },
            None => surface,
        }
    }
}

impl Object for Button {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for Button {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(e) => match self.dispatcher().on_mouse_press(e) {
                Activation::Fire => {
                    self.click();
                    event.accept();
                    true
                }
                Activation::Suppress => {
                    event.accept();
                    true
                }
                Activation::Ignore => false,
            },
            WidgetEvent::KeyPress(e) => match self.dispatcher().on_key_press(e) {
                Activation::Fire => {
                    self.click();
                    event.accept();
                    true
                }
                Activation::Suppress => {
                    event.accept();
                    true
                }
                Activation::Ignore => false,
            },
            WidgetEvent::FocusIn(_) => {
                self.base.set_focused(true);
                true
            }
            WidgetEvent::FocusOut(_) => {
                self.base.set_focused(false);
                true
            }
            _ => false,
        }
    }

    fn build(&self) -> Element {
        self.compose(
            &self.text,
            self.icon.as_ref(),
            self.color.as_deref(),
            VisualFlags::NONE,
        )
    }
}

static_assertions::assert_impl_all!(Button: Send, Sync);
