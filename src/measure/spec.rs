//! MeasureSpec: A size constraint offered to an element during measurement.

/// How strictly the size carried by a [`MeasureSpec`] must be honored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureMode {
    /// The element must be exactly this size.
    Exactly,
    /// The element may be any size up to this limit.
    AtMost,
    /// The element may be any size it wants.
    #[default]
    Unspecified,
}

/// A size constraint for one axis: a pixel value plus a [`MeasureMode`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasureSpec {
    size: i32,
    mode: MeasureMode,
}

impl MeasureSpec {
    /// Create a spec with an explicit size and mode.
    #[inline]
    pub const fn new(size: i32, mode: MeasureMode) -> Self {
        Self { size, mode }
    }

    /// The element must be exactly `size` pixels.
    #[inline]
    pub const fn exactly(size: i32) -> Self {
        Self::new(size, MeasureMode::Exactly)
    }

    /// The element may be at most `size` pixels.
    #[inline]
    pub const fn at_most(size: i32) -> Self {
        Self::new(size, MeasureMode::AtMost)
    }

    /// The element is unconstrained.
    #[inline]
    pub const fn unspecified() -> Self {
        Self::new(0, MeasureMode::Unspecified)
    }

    /// The pixel value carried by this spec.
    #[inline]
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// The constraint mode.
    #[inline]
    pub const fn mode(&self) -> MeasureMode {
        self.mode
    }
}

impl std::fmt::Debug for MeasureSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mode {
            MeasureMode::Exactly => write!(f, "Exactly({})", self.size),
            MeasureMode::AtMost => write!(f, "AtMost({})", self.size),
            MeasureMode::Unspecified => write!(f, "Unspecified"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_constructors() {
        assert_eq!(MeasureSpec::exactly(100).size(), 100);
        assert_eq!(MeasureSpec::exactly(100).mode(), MeasureMode::Exactly);
        assert_eq!(MeasureSpec::at_most(50).mode(), MeasureMode::AtMost);
        assert_eq!(MeasureSpec::unspecified().mode(), MeasureMode::Unspecified);
        assert_eq!(MeasureSpec::unspecified().size(), 0);
    }
}
