//! Flow module: Greedy row-packing layout.
//!
//! [`FlowContainer`] arranges children left-to-right and wraps to a new row
//! when a child would push the accumulated row width past the available
//! width. A measurement pass produces an immutable [`LayoutPlan`]; a
//! positioning pass translates that plan into absolute bounds. No state is
//! shared between passes other than the plan itself.

mod container;
mod plan;

pub use container::{FlowConfig, FlowContainer};
pub use plan::{LayoutPlan, Row, Slot};
