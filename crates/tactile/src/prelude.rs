//! Convenient re-exports for typical use.
//!
//! ```
//! use tactile::prelude::*;
//! ```

pub use tactile_core::{Object, ObjectId, Signal, TimerId};

pub use crate::widget::widgets::{
    Button, CheckButton, ConfirmButton, InputButton, KeybindButton,
};
pub use crate::widget::{
    ClickOutsideEvent, Element, FocusInEvent, FocusOutEvent, FocusReason, IconPosition, IconSpec,
    InputContext, Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers, MouseButton,
    MousePressEvent, MouseReleaseEvent, TimerEvent, TooltipSpec, VisualFlags, Widget, WidgetBase,
    WidgetEvent,
};
