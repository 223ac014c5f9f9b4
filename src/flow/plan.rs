//! LayoutPlan: The immutable product of a measurement pass.
//!
//! A plan records which children landed on which row and the size each one
//! measured at, so the positioning pass is a pure translation with no
//! re-measurement. Plans are rebuilt from scratch on every measurement pass;
//! a plan is invalidated by any child-set or constraint change and must not
//! be reused across them.

use crate::geometry::Size;

/// One placed child: its index in the container's child list and the size it
/// measured at during the pass that produced the plan.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Slot {
    /// Index into the container's child list.
    pub index: usize,
    /// The child's measured size.
    pub size: Size,
}

/// A contiguous run of children assigned to the same visual line.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Row {
    /// Members in traversal order.
    pub slots: Vec<Slot>,
    /// Max measured height over the members.
    pub height: i32,
    /// Accumulated width at the moment the row closed, including each
    /// member's trailing item spacing.
    pub width: i32,
}

impl Row {
    /// Number of children on this row.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the row holds no children.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// The full result of a measurement pass: rows plus the container's desired
/// size.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct LayoutPlan {
    /// Rows in the order they were formed.
    pub rows: Vec<Row>,
    /// The container's resulting desired size.
    pub desired: Size,
}

impl LayoutPlan {
    /// A plan with no rows and zero desired size.
    pub const EMPTY: Self = Self { rows: Vec::new(), desired: Size::ZERO };

    /// Whether the plan places any children at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of placed children across all rows.
    pub fn placed_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan() {
        let plan = LayoutPlan::EMPTY;
        assert!(plan.is_empty());
        assert_eq!(plan.placed_count(), 0);
        assert_eq!(plan.desired, Size::ZERO);
    }

    #[test]
    fn test_placed_count_sums_rows() {
        let slot = |index| Slot { index, size: Size::new(10, 10) };
        let plan = LayoutPlan {
            rows: vec![
                Row { slots: vec![slot(0), slot(1)], height: 10, width: 30 },
                Row { slots: vec![slot(2)], height: 10, width: 15 },
            ],
            desired: Size::new(30, 30),
        };
        assert_eq!(plan.placed_count(), 3);
        assert!(!plan.is_empty());
    }
}
