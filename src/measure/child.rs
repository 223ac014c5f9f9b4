//! Child declarations: size preference and visibility.

/// A child's declared size preference for one axis, set before measurement.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizePreference {
    /// A fixed pixel size.
    Fixed(i32),
    /// Fill whatever space the parent offers.
    FillParent,
    /// Size to the child's own content.
    #[default]
    WrapContent,
}

/// Whether a child participates in layout and drawing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Laid out and drawn.
    #[default]
    Visible,
    /// Laid out (occupies space) but not drawn.
    Hidden,
    /// Skipped entirely: takes no space and joins no row.
    Collapsed,
}

impl Visibility {
    /// Whether the child takes part in the layout passes at all.
    #[inline]
    pub const fn occupies_space(self) -> bool {
        !matches!(self, Self::Collapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_occupies_space() {
        assert!(Visibility::Visible.occupies_space());
        assert!(Visibility::Hidden.occupies_space());
        assert!(!Visibility::Collapsed.occupies_space());
    }
}
