//! # Flowbox
//!
//! A wrap-around flow layout container for pixel-based UI trees.
//!
//! Flowbox arranges child elements left-to-right and wraps to a new row
//! whenever the accumulated row width would exceed the available width, with
//! fixed horizontal and vertical gaps between elements.
//!
//! ## Core Concepts
//!
//! - **Two passes**: a measurement pass packs children into rows and yields
//!   an immutable [`LayoutPlan`]; a positioning pass translates that plan
//!   into absolute bounds. Plans are rebuilt from scratch every pass.
//! - **Host boundary**: constraint derivation, child measurement, and bounds
//!   commits all go through the [`LayoutHost`] trait, so the row-packing
//!   arithmetic never depends on a real UI runtime.
//! - **Synchronous**: both passes run on the caller's thread with no
//!   blocking, spawning, or suspension; nested containers recurse on the
//!   ordinary call stack.
//!
//! ## Example
//!
//! ```rust
//! use flowbox::{Element, FlowContainer, HeadlessHost, MeasureSpec, Rect};
//!
//! let mut host = HeadlessHost::new();
//! let mut container = FlowContainer::new();
//! container.push(host.insert(Element::new(200, 40)));
//! container.push(host.insert(Element::new(200, 40)));
//!
//! let plan = container
//!     .measure(&mut host, MeasureSpec::at_most(500), MeasureSpec::unspecified())
//!     .unwrap();
//! container.position(&mut host, &plan, Rect::from_size(plan.desired));
//! ```

pub mod flow;
pub mod geometry;
pub mod host;
pub mod measure;

// Re-exports for convenience
pub use flow::{FlowConfig, FlowContainer, LayoutPlan, Row, Slot};
pub use geometry::{Insets, Rect, Size};
pub use host::{Element, ElementId, HeadlessHost, LayoutError, LayoutHost};
pub use measure::{MeasureMode, MeasureSpec, SizePreference, Visibility};
