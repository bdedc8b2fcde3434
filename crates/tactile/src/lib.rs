//! Tactile is a renderer-agnostic toolkit for interactive button widgets.
//!
//! The widget layer covers the interaction patterns of a typical control
//! strip: plain and checkable buttons, buttons gated behind a confirmation
//! step, buttons that flip into an inline text editor, and buttons that
//! record a key combination.
//!
//! Widgets consume [`widget::WidgetEvent`]s and describe their appearance
//! as a [`widget::Element`] tree. The hosting UI runtime owns the drawing,
//! the clock, and the dispatch loop; see [`widget::InputContext`] for the
//! three host duties that happen between events (timer advance, deferred
//! task drain, outside-click delivery).
//!
//! # Example
//!
//! ```
//! use tactile::prelude::*;
//!
//! let mut button = Button::new("Launch");
//! button.clicked.connect(|_| {
//!     println!("launched");
//! });
//!
//! let mut event = WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left));
//! button.event(&mut event);
//! assert!(event.is_accepted());
//! ```

pub mod prelude;
pub mod widget;

pub use tactile_core as core;
