//! Measure module: The measurement contract between a container and its host.
//!
//! A parent offers each child a [`MeasureSpec`] per axis: a pixel value
//! tagged with how strictly it must be honored. Children declare a
//! [`SizePreference`] per axis and a [`Visibility`]; the host combines the
//! parent's spec with those declarations to derive the child's own spec.

mod child;
mod spec;

pub use child::{SizePreference, Visibility};
pub use spec::{MeasureMode, MeasureSpec};
