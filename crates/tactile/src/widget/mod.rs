//! Widget system for Tactile.
//!
//! This module contains the event types, the widget base and trait, the
//! activation dispatcher, the visual boundary descriptors, the input
//! context, and the button family under [`widgets`].

mod base;
mod dispatcher;
mod events;
mod input_context;
mod keyboard;
mod traits;
mod visual;
mod widget_timer;

pub mod widgets;


pub use base::WidgetBase;
pub use dispatcher::{Activation, ActivationDispatcher};
pub use events::{
    ClickOutsideEvent, EventBase, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent,
    KeyReleaseEvent, KeyboardModifiers, MouseButton, MousePressEvent, MouseReleaseEvent,
    TimerEvent, WidgetEvent,
};
pub use input_context::{ClickWatchGuard, InputContext};
pub use keyboard::{FilterId, KeyFilterGuard, KeyboardBus};
pub use traits::Widget;
pub use visual::{Element, IconPosition, IconSpec, TooltipPosition, TooltipSpec, VisualFlags};
pub use widget_timer::OwnedTimer;
