//! Widget-specific event types.
//!
//! This module defines the input events widgets consume: mouse press and
//! release, focus changes, key press and release, timer fires, and the
//! outside-click notification used by confirm gating. Events carry an
//! [`EventBase`] with an accepted flag; accepting an event stops it from
//! propagating to the surrounding UI.

use tactile_core::TimerId;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Keyboard keys.
///
/// The numpad block is kept distinct from the digit row so key capture can
/// tell `1` and `Numpad1` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
    Enter,
    Tab,
    Space,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    Left,
    Right,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    MetaLeft,
    MetaRight,
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadDecimal,
    NumpadEnter,
}

impl Key {
    /// Check if this key is a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Self::ShiftLeft
                | Self::ShiftRight
                | Self::ControlLeft
                | Self::ControlRight
                | Self::AltLeft
                | Self::AltRight
                | Self::MetaLeft
                | Self::MetaRight
        )
    }

    /// Check if this key belongs to the numpad block.
    pub fn is_numpad(&self) -> bool {
        matches!(
            self,
            Self::Numpad0
                | Self::Numpad1
                | Self::Numpad2
                | Self::Numpad3
                | Self::Numpad4
                | Self::Numpad5
                | Self::Numpad6
                | Self::Numpad7
                | Self::Numpad8
                | Self::Numpad9
                | Self::NumpadAdd
                | Self::NumpadSubtract
                | Self::NumpadMultiply
                | Self::NumpadDivide
                | Self::NumpadDecimal
                | Self::NumpadEnter
        )
    }

    /// Get the display name of this key.
    ///
    /// Left/right variants of a modifier share one name. Numpad keys carry
    /// a `Numpad` prefix so they never collide with the digit row.
    pub fn name(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::I => "I",
            Self::J => "J",
            Self::K => "K",
            Self::L => "L",
            Self::M => "M",
            Self::N => "N",
            Self::O => "O",
            Self::P => "P",
            Self::Q => "Q",
            Self::R => "R",
            Self::S => "S",
            Self::T => "T",
            Self::U => "U",
            Self::V => "V",
            Self::W => "W",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::Digit0 => "0",
            Self::Digit1 => "1",
            Self::Digit2 => "2",
            Self::Digit3 => "3",
            Self::Digit4 => "4",
            Self::Digit5 => "5",
            Self::Digit6 => "6",
            Self::Digit7 => "7",
            Self::Digit8 => "8",
            Self::Digit9 => "9",
            Self::Enter => "Enter",
            Self::Tab => "Tab",
            Self::Space => "Space",
            Self::Backspace => "Backspace",
            Self::Delete => "Delete",
            Self::Escape => "Escape",
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::ShiftLeft | Self::ShiftRight => "Shift",
            Self::ControlLeft | Self::ControlRight => "Ctrl",
            Self::AltLeft | Self::AltRight => "Alt",
            Self::MetaLeft | Self::MetaRight => "Meta",
            Self::Numpad0 => "Numpad0",
            Self::Numpad1 => "Numpad1",
            Self::Numpad2 => "Numpad2",
            Self::Numpad3 => "Numpad3",
            Self::Numpad4 => "Numpad4",
            Self::Numpad5 => "Numpad5",
            Self::Numpad6 => "Numpad6",
            Self::Numpad7 => "Numpad7",
            Self::Numpad8 => "Numpad8",
            Self::Numpad9 => "Numpad9",
            Self::NumpadAdd => "NumpadAdd",
            Self::NumpadSubtract => "NumpadSubtract",
            Self::NumpadMultiply => "NumpadMultiply",
            Self::NumpadDivide => "NumpadDivide",
            Self::NumpadDecimal => "NumpadDecimal",
            Self::NumpadEnter => "NumpadEnter",
        }
    }
}

/// The reason a widget gained or lost focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusReason {
    /// Focus changed because of a mouse click.
    Mouse,
    /// Focus changed because of keyboard navigation (Tab).
    Keyboard,
    /// Focus changed programmatically.
    Program,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Modifiers held during the press.
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton) -> Self {
        Self {
            base: EventBase::new(),
            button,
            modifiers: KeyboardModifiers::NONE,
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton) -> Self {
        Self {
            base: EventBase::new(),
            button,
        }
    }
}

/// Outside-click notification.
///
/// The host delivers this to a widget that registered an outside-click
/// watch when a press lands anywhere outside that widget's tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickOutsideEvent {
    /// Base event data.
    pub base: EventBase,
}

impl ClickOutsideEvent {
    /// Create a new outside-click event.
    pub fn new() -> Self {
        Self {
            base: EventBase::new(),
        }
    }
}

/// Focus-in event, sent when a widget gains keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusInEvent {
    /// Base event data.
    pub base: EventBase,
    /// Why focus changed.
    pub reason: FocusReason,
}

impl FocusInEvent {
    /// Create a new focus-in event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Focus-out event, sent when a widget loses keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusOutEvent {
    /// Base event data.
    pub base: EventBase,
    /// Why focus changed.
    pub reason: FocusReason,
}

impl FocusOutEvent {
    /// Create a new focus-out event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Key press event.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Modifiers held during the press.
    pub modifiers: KeyboardModifiers,
    /// The character this press produces, if it is printable.
    pub text: Option<char>,
    /// Whether this press comes from keyboard autorepeat.
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers: KeyboardModifiers::NONE,
            text: None,
            is_repeat: false,
        }
    }

    /// Set the printable character using builder pattern.
    pub fn with_text(mut self, text: char) -> Self {
        self.text = Some(text);
        self
    }

    /// Mark this press as autorepeat using builder pattern.
    pub fn with_repeat(mut self) -> Self {
        self.is_repeat = true;
        self
    }
}

/// Key release event.
#[derive(Debug, Clone, Copy)]
pub struct KeyReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was released.
    pub key: Key,
}

impl KeyReleaseEvent {
    /// Create a new key release event.
    pub fn new(key: Key) -> Self {
        Self {
            base: EventBase::new(),
            key,
        }
    }
}

/// Timer event, sent to the widget that owns the fired timer.
#[derive(Debug, Clone, Copy)]
pub struct TimerEvent {
    /// Base event data.
    pub base: EventBase,
    /// The timer that fired.
    pub id: TimerId,
}

impl TimerEvent {
    /// Create a new timer event.
    pub fn new(id: TimerId) -> Self {
        Self {
            base: EventBase::new(),
            id,
        }
    }
}

/// The set of events a widget can receive.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// Mouse button pressed over the widget.
    MousePress(MousePressEvent),
    /// Mouse button released over the widget.
    MouseRelease(MouseReleaseEvent),
    /// A press landed outside the widget (watch registered).
    ClickOutside(ClickOutsideEvent),
    /// Widget gained keyboard focus.
    FocusIn(FocusInEvent),
    /// Widget lost keyboard focus.
    FocusOut(FocusOutEvent),
    /// Key pressed while the widget has focus (or via a key filter).
    KeyPress(KeyPressEvent),
    /// Key released while the widget has focus (or via a key filter).
    KeyRelease(KeyReleaseEvent),
    /// A timer owned by the widget fired.
    Timer(TimerEvent),
}

impl WidgetEvent {
    /// Get the base event data.
    pub fn base(&self) -> &EventBase {
        match self {
            Self::MousePress(e) => &e.base,
            Self::MouseRelease(e) => &e.base,
            Self::ClickOutside(e) => &e.base,
            Self::FocusIn(e) => &e.base,
            Self::FocusOut(e) => &e.base,
            Self::KeyPress(e) => &e.base,
            Self::KeyRelease(e) => &e.base,
            Self::Timer(e) => &e.base,
        }
    }

    /// Get the base event data mutably.
    pub fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::MousePress(e) => &mut e.base,
            Self::MouseRelease(e) => &mut e.base,
            Self::ClickOutside(e) => &mut e.base,
            Self::FocusIn(e) => &mut e.base,
            Self::FocusOut(e) => &mut e.base,
            Self::KeyPress(e) => &mut e.base,
            Self::KeyRelease(e) => &mut e.base,
            Self::Timer(e) => &mut e.base,
        }
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Check if the event should continue propagating to surrounding UI.
    pub fn should_propagate(&self) -> bool {
        !self.is_accepted()
    }
}
