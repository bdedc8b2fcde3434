//! Visual boundary descriptors.
//!
//! Tactile widgets do not paint. Each widget's [`crate::widget::Widget::build`]
//! produces an [`Element`] tree describing what to show; the hosting
//! presentation layer turns that into pixels, resolves color tokens and icon
//! names, and positions tooltips. The types here are the vocabulary of that
//! boundary.

use std::ops::{BitAnd, BitOr, BitOrAssign};

// ============================================================================
// Visual Flags
// ============================================================================

/// Presentation hints for a widget surface.
///
/// These flags can be combined using bitwise OR operations.
///
/// # Example
///
/// ```
/// use tactile::widget::VisualFlags;
///
/// let flags = VisualFlags::FLUID | VisualFlags::COMPACT;
/// assert!(flags.has(VisualFlags::FLUID));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualFlags(u16);

impl VisualFlags {
    /// No special flags.
    pub const NONE: VisualFlags = VisualFlags(0);

    /// Surface stretches to fill its container's width.
    pub const FLUID: VisualFlags = VisualFlags(1 << 0);

    /// Surface is shown in its disabled style and ignores input.
    pub const DISABLED: VisualFlags = VisualFlags(1 << 1);

    /// Surface is shown in its selected/active style.
    pub const SELECTED: VisualFlags = VisualFlags(1 << 2);

    /// Surface uses reduced padding.
    pub const COMPACT: VisualFlags = VisualFlags(1 << 3);

    /// Surface is drawn as a circle.
    pub const CIRCULAR: VisualFlags = VisualFlags(1 << 4);

    /// Overflowing content is truncated with an ellipsis.
    pub const ELLIPSIS: VisualFlags = VisualFlags(1 << 5);

    /// Check if a flag is set.
    pub fn has(&self, flag: VisualFlags) -> bool {
        (self.0 & flag.0) == flag.0
    }

    /// Check if no flags are set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Return these flags with `flag` added.
    pub fn with(self, flag: VisualFlags) -> Self {
        Self(self.0 | flag.0)
    }

    /// Return these flags with `flag` removed.
    pub fn without(self, flag: VisualFlags) -> Self {
        Self(self.0 & !flag.0)
    }
}

impl BitOr for VisualFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        VisualFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for VisualFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for VisualFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        VisualFlags(self.0 & rhs.0)
    }
}

// ============================================================================
// Icons and Tooltips
// ============================================================================

/// A named icon reference, resolved by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    /// Icon name in the host's icon set (e.g. `"check-square-o"`).
    pub name: String,
    /// Optional color token override for the icon.
    pub color: Option<String>,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Whether the icon spins continuously.
    pub spin: bool,
}

impl IconSpec {
    /// Create an icon reference by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            rotation: 0.0,
            spin: false,
        }
    }

    /// Set the icon color token using builder pattern.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the rotation using builder pattern.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Make the icon spin using builder pattern.
    pub fn with_spin(mut self) -> Self {
        self.spin = true;
        self
    }
}

/// Position of an icon relative to the surface content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconPosition {
    /// Icon before the content.
    #[default]
    Left,
    /// Icon after the content.
    Right,
}

/// Where the tooltip is placed relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipPosition {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    #[default]
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

/// A tooltip attached to a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipSpec {
    /// Tooltip text.
    pub content: String,
    /// Placement relative to the anchor.
    pub position: TooltipPosition,
}

impl TooltipSpec {
    /// Create a tooltip with default placement.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            position: TooltipPosition::default(),
        }
    }

    /// Set the placement using builder pattern.
    pub fn with_position(mut self, position: TooltipPosition) -> Self {
        self.position = position;
        self
    }
}

// ============================================================================
// Element Tree
// ============================================================================

/// A node in the visual description a widget produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// An interactive surface with presentation hints and children.
    Surface {
        /// Presentation hints.
        flags: VisualFlags,
        /// Color token, resolved by the presentation layer.
        color: Option<String>,
        /// Whether the surface participates in focus traversal.
        focusable: bool,
        /// Content in display order.
        children: Vec<Element>,
    },
    /// A run of text.
    Text(String),
    /// A named icon.
    Icon(IconSpec),
    /// A text input field.
    Input {
        /// Whether the input is shown (an inline editor hides it while idle).
        visible: bool,
        /// Current buffer contents.
        value: String,
    },
    /// A tooltip wrapped around a child element.
    ///
    /// Surfaces with no tooltip configured are not wrapped; this node only
    /// appears when a tooltip exists.
    Tooltip {
        /// The tooltip to show.
        spec: TooltipSpec,
        /// The wrapped element.
        child: Box<Element>,
    },
}

impl Element {
    /// Create an empty surface with the given flags.
    pub fn surface(flags: VisualFlags) -> Self {
        Self::Surface {
            flags,
            color: None,
            focusable: false,
            children: Vec::new(),
        }
    }

    /// Get the surface children if this element is a surface, unwrapping a
    /// tooltip if present.
    pub fn surface_children(&self) -> Option<&[Element]> {
        match self {
            Self::Surface { children, .. } => Some(children),
            Self::Tooltip { child, .. } => child.surface_children(),
            _ => None,
        }
    }

    /// Get the surface flags, unwrapping a tooltip if present.
    pub fn surface_flags(&self) -> Option<VisualFlags> {
        match self {
            Self::Surface { flags, .. } => Some(*flags),
            Self::Tooltip { child, .. } => child.surface_flags(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_combination() {
        let flags = VisualFlags::FLUID | VisualFlags::SELECTED;
        assert!(flags.has(VisualFlags::FLUID));
        assert!(flags.has(VisualFlags::SELECTED));
        assert!(!flags.has(VisualFlags::COMPACT));
    }

    #[test]
    fn test_flag_without() {
        let flags = (VisualFlags::FLUID | VisualFlags::SELECTED).without(VisualFlags::SELECTED);
        assert!(flags.has(VisualFlags::FLUID));
        assert!(!flags.has(VisualFlags::SELECTED));
    }

    #[test]
    fn test_surface_accessors_unwrap_tooltip() {
        let inner = Element::Surface {
            flags: VisualFlags::COMPACT,
            color: None,
            focusable: true,
            children: vec![Element::Text("hi".into())],
        };
        let wrapped = Element::Tooltip {
            spec: TooltipSpec::new("help"),
            child: Box::new(inner),
        };

        assert_eq!(wrapped.surface_flags(), Some(VisualFlags::COMPACT));
        assert_eq!(
            wrapped.surface_children(),
            Some(&[Element::Text("hi".into())][..])
        );
    }
}
