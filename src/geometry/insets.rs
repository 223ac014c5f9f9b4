//! Insets: Per-edge padding applied inside a container's bounds.

/// Padding on each edge of a rectangle, in pixels.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    /// Left padding.
    pub left: i32,
    /// Top padding.
    pub top: i32,
    /// Right padding.
    pub right: i32,
    /// Bottom padding.
    pub bottom: i32,
}

impl Insets {
    /// Create insets with explicit values for each edge.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Uniform insets on all edges.
    #[inline]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// No padding.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Combined left + right padding.
    #[inline]
    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Combined top + bottom padding.
    #[inline]
    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}
