//! FlowContainer: The wrap-around layout container.

use log::{debug, trace};

use crate::geometry::{Insets, Rect, Size};
use crate::host::{LayoutError, LayoutHost};
use crate::measure::MeasureSpec;

use super::plan::{LayoutPlan, Row, Slot};

/// Spacing configuration for a [`FlowContainer`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowConfig {
    /// Horizontal gap inserted after each child within a row, in pixels.
    pub item_spacing: i32,
    /// Vertical gap inserted after each row, in pixels.
    pub row_spacing: i32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self { item_spacing: 50, row_spacing: 30 }
    }
}

/// A container that lays out children left-to-right with line wrapping.
///
/// The container owns an ordered list of opaque child handles and two
/// operations that the host invokes during a render pass:
///
/// 1. [`measure`](Self::measure) packs children into rows bounded by the
///    available width and returns a [`LayoutPlan`] with the desired size.
/// 2. [`position`](Self::position) translates a plan into absolute bounds,
///    committed through the host.
///
/// Both passes run synchronously on the caller's thread and touch no state
/// outside the container and the host.
#[derive(Clone, Debug, Default)]
pub struct FlowContainer<C> {
    children: Vec<C>,
    config: FlowConfig,
    padding: Insets,
}

impl<C> FlowContainer<C> {
    /// Create an empty container with default spacing and no padding.
    pub fn new() -> Self {
        Self::with_config(FlowConfig::default())
    }

    /// Create an empty container with the given spacing configuration.
    pub const fn with_config(config: FlowConfig) -> Self {
        Self { children: Vec::new(), config, padding: Insets::ZERO }
    }

    /// Set the container's padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// The spacing configuration.
    pub const fn config(&self) -> FlowConfig {
        self.config
    }

    /// Replace the spacing configuration.
    pub const fn set_config(&mut self, config: FlowConfig) {
        self.config = config;
    }

    /// The container's padding.
    pub const fn padding(&self) -> Insets {
        self.padding
    }

    /// Replace the container's padding.
    pub const fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    /// Append a child at the end of the traversal order.
    pub fn push(&mut self, child: C) {
        self.children.push(child);
    }

    /// Insert a child at `index` in the traversal order.
    pub fn insert(&mut self, index: usize, child: C) {
        self.children.insert(index, child);
    }

    /// Remove and return the child at `index`.
    pub fn remove(&mut self, index: usize) -> C {
        self.children.remove(index)
    }

    /// Remove all children.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the container has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The children in traversal order.
    pub fn children(&self) -> &[C] {
        &self.children
    }

    /// Measurement pass: measure every child and pack the results into rows.
    ///
    /// Children are visited in traversal order; children whose visibility is
    /// [`Collapsed`](crate::Visibility::Collapsed) are skipped entirely. A
    /// child is moved to a new row when adding it (plus its trailing item
    /// spacing) would push the accumulated row width past the numeric value
    /// of `width_spec`. The sizing modes themselves are forwarded opaquely
    /// into the host's constraint derivation and not interpreted here.
    ///
    /// Returns a fresh [`LayoutPlan`]; nothing from any previous pass is
    /// consulted or retained. The desired width is the largest accumulated
    /// row width, which includes one trailing `item_spacing` per row; the
    /// desired height is the sum of `row height + row_spacing` over all rows.
    pub fn measure<H>(
        &self,
        host: &mut H,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
    ) -> Result<LayoutPlan, LayoutError>
    where
        H: LayoutHost<Child = C>,
    {
        let available_width = width_spec.size();
        let FlowConfig { item_spacing, row_spacing } = self.config;

        let mut rows: Vec<Row> = Vec::new();
        let mut slots: Vec<Slot> = Vec::new();
        let mut row_width = 0;
        let mut row_height = 0;
        let mut total_height = 0;
        let mut max_width = 0;

        // Folds the open row into the plan and resets the row accumulators.
        let mut close_row =
            |slots: &mut Vec<Slot>, row_width: &mut i32, row_height: &mut i32| {
                max_width = max_width.max(*row_width);
                total_height += *row_height + row_spacing;
                rows.push(Row {
                    slots: std::mem::take(slots),
                    height: *row_height,
                    width: *row_width,
                });
                *row_width = 0;
                *row_height = 0;
            };

        for (index, child) in self.children.iter().enumerate() {
            if !host.visibility(child).occupies_space() {
                continue;
            }

            let (width_pref, height_pref) = host.size_preference(child);
            let child_width =
                host.derive_constraints(width_spec, self.padding.horizontal(), width_pref);
            let child_height =
                host.derive_constraints(height_spec, self.padding.vertical(), height_pref);

            let size = host
                .measure(child, child_width, child_height)
                .map_err(|err| err.for_child(index))?;
            trace!("measured child {index}: {size:?} under {child_width:?} x {child_height:?}");

            // Wrap before adding when the child no longer fits. An oversized
            // child on an empty row stays put: it forms a row of its own.
            if row_width + size.width + item_spacing > available_width && !slots.is_empty() {
                close_row(&mut slots, &mut row_width, &mut row_height);
            }

            slots.push(Slot { index, size });
            row_width += size.width + item_spacing;
            row_height = row_height.max(size.height);
        }

        // The last row never triggers a wrap for itself.
        if !slots.is_empty() {
            close_row(&mut slots, &mut row_width, &mut row_height);
        }

        let desired = Size::new(max_width, total_height);
        debug!("measured {} children into {} rows, desired {desired:?}", self.children.len(), rows.len());
        Ok(LayoutPlan { rows, desired })
    }

    /// Positioning pass: translate a plan into absolute child bounds.
    ///
    /// Walks the plan's rows in order, placing each member at the running
    /// cursor and committing its bounds through the host. The cursor starts
    /// at `bounds` origin offset by the container's padding; each member
    /// advances it by `width + item_spacing`, and each finished row resets
    /// it to the left padding and advances it by `row height + row_spacing`.
    ///
    /// No re-measurement occurs. An empty plan positions nothing. Slots
    /// whose index no longer names a child (the list shrank since the plan
    /// was measured) are skipped.
    pub fn position<H>(&self, host: &mut H, plan: &LayoutPlan, bounds: Rect)
    where
        H: LayoutHost<Child = C>,
    {
        let FlowConfig { item_spacing, row_spacing } = self.config;
        let mut cursor_y = bounds.y + self.padding.top;

        for row in &plan.rows {
            let mut cursor_x = bounds.x + self.padding.left;
            for slot in &row.slots {
                let Some(child) = self.children.get(slot.index) else {
                    continue;
                };
                let child_bounds =
                    Rect::new(cursor_x, cursor_y, slot.size.width, slot.size.height);
                trace!("positioned child {}: {child_bounds:?}", slot.index);
                host.commit_bounds(child, child_bounds);
                cursor_x += slot.size.width + item_spacing;
            }
            cursor_y += row.height + row_spacing;
        }
    }
}
