//! Host module: The capability boundary between the container and its UI host.
//!
//! The flow algorithm never measures or draws anything itself. Everything it
//! needs from the surrounding UI framework is expressed as the [`LayoutHost`]
//! trait: constraint derivation, child measurement, and bounds commits. This
//! keeps the row-packing arithmetic testable without a real UI runtime;
//! [`HeadlessHost`] is a complete in-memory implementation used by the tests,
//! benches, and demos.

mod headless;

use crate::geometry::{Rect, Size};
use crate::measure::{MeasureSpec, SizePreference, Visibility};

pub use headless::{Element, ElementId, HeadlessHost};

/// Error raised across the host boundary during a layout pass.
///
/// The container performs no recovery: a failing child measurement aborts the
/// pass and propagates up the ordinary call stack, annotated with the index
/// of the child that failed.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// A child element failed to measure itself.
    #[error("measurement of child {index} failed")]
    ChildMeasure {
        /// Traversal index of the failing child.
        index: usize,
        /// The host's underlying failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// A host operation failed outside any particular child.
    #[error("host failure")]
    Host(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LayoutError {
    /// Wrap a host-side failure.
    pub fn host(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Host(Box::new(source))
    }

    /// Attribute this error to the child at `index`, if not already attributed.
    #[must_use]
    pub fn for_child(self, index: usize) -> Self {
        match self {
            Self::Host(source) => Self::ChildMeasure { index, source },
            other => other,
        }
    }
}

/// Capabilities a UI host provides to the container during layout passes.
///
/// `Child` is an opaque handle to an element owned by the host's view tree;
/// the container references children only for the duration of a pass and
/// never manages their lifecycle.
pub trait LayoutHost {
    /// Opaque handle to a child element.
    type Child;

    /// The child's current visibility state.
    fn visibility(&self, child: &Self::Child) -> Visibility;

    /// The child's declared (horizontal, vertical) size preferences.
    fn size_preference(&self, child: &Self::Child) -> (SizePreference, SizePreference);

    /// Combine a parent constraint, the parent's padding along that axis, and
    /// a child's declared preference into the child's own constraint.
    ///
    /// This is the host framework's standard derivation rule; the container
    /// invokes it once per axis per child and does not interpret the result.
    fn derive_constraints(
        &self,
        parent: MeasureSpec,
        padding: i32,
        preference: SizePreference,
    ) -> MeasureSpec;

    /// Measure a child under the given constraints and return its size.
    ///
    /// May recurse into the child's own layout if it is itself a container.
    fn measure(
        &mut self,
        child: &Self::Child,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<Size, LayoutError>;

    /// Commit a child's final absolute bounds.
    ///
    /// After this call the position is observable to drawing and hit-testing.
    fn commit_bounds(&mut self, child: &Self::Child, bounds: Rect);
}
