//! HeadlessHost: An in-memory host for tests, benches, and offline layout.
//!
//! Elements are plain records with an intrinsic content size. Constraint
//! derivation follows the conventional parent-mode x child-preference table
//! used by mobile view toolkits.

use crate::geometry::{Rect, Size};
use crate::measure::{MeasureMode, MeasureSpec, SizePreference, Visibility};

use super::{LayoutError, LayoutHost};

/// Handle to an element stored in a [`HeadlessHost`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ElementId(usize);

/// An element record: declared preferences plus an intrinsic content size.
#[derive(Clone, Debug)]
pub struct Element {
    /// Size the element reports when unconstrained.
    pub intrinsic: Size,
    /// Declared horizontal size preference.
    pub width_preference: SizePreference,
    /// Declared vertical size preference.
    pub height_preference: SizePreference,
    /// Visibility state.
    pub visibility: Visibility,
    /// Size resolved by the most recent measurement, if any.
    pub measured: Option<Size>,
    /// Absolute bounds committed by the most recent positioning, if any.
    pub bounds: Option<Rect>,
}

impl Element {
    /// Create a visible element with the given intrinsic size, preferring to
    /// wrap its content on both axes.
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            intrinsic: Size::new(width, height),
            width_preference: SizePreference::WrapContent,
            height_preference: SizePreference::WrapContent,
            visibility: Visibility::Visible,
            measured: None,
            bounds: None,
        }
    }

    /// Set the declared size preferences.
    #[must_use]
    pub const fn with_preference(
        mut self,
        width: SizePreference,
        height: SizePreference,
    ) -> Self {
        self.width_preference = width;
        self.height_preference = height;
        self
    }

    /// Set the visibility state.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// An in-memory element store implementing [`LayoutHost`].
#[derive(Clone, Debug, Default)]
pub struct HeadlessHost {
    elements: Vec<Element>,
}

impl HeadlessHost {
    /// Create an empty host.
    pub const fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Add an element, returning its handle.
    pub fn insert(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(element);
        id
    }

    /// Read an element record.
    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    /// Mutably access an element record.
    pub fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    /// Bounds committed for an element by the last positioning pass.
    pub fn bounds(&self, id: ElementId) -> Option<Rect> {
        self.elements[id.0].bounds
    }

    /// Size resolved for an element by the last measurement pass.
    pub fn measured(&self, id: ElementId) -> Option<Size> {
        self.elements[id.0].measured
    }

    /// Forget measured sizes and committed bounds on every element.
    pub fn reset_pass_results(&mut self) {
        for element in &mut self.elements {
            element.measured = None;
            element.bounds = None;
        }
    }
}

impl LayoutHost for HeadlessHost {
    type Child = ElementId;

    fn visibility(&self, child: &ElementId) -> Visibility {
        self.elements[child.0].visibility
    }

    fn size_preference(&self, child: &ElementId) -> (SizePreference, SizePreference) {
        let element = &self.elements[child.0];
        (element.width_preference, element.height_preference)
    }

    fn derive_constraints(
        &self,
        parent: MeasureSpec,
        padding: i32,
        preference: SizePreference,
    ) -> MeasureSpec {
        let available = (parent.size() - padding).max(0);
        match (parent.mode(), preference) {
            // A fixed declaration wins regardless of the parent's mode.
            (_, SizePreference::Fixed(px)) => MeasureSpec::exactly(px),
            (MeasureMode::Exactly, SizePreference::FillParent) => MeasureSpec::exactly(available),
            (MeasureMode::Exactly | MeasureMode::AtMost, SizePreference::WrapContent)
            | (MeasureMode::AtMost, SizePreference::FillParent) => MeasureSpec::at_most(available),
            (MeasureMode::Unspecified, _) => MeasureSpec::unspecified(),
        }
    }

    fn measure(
        &mut self,
        child: &ElementId,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<Size, LayoutError> {
        let element = &mut self.elements[child.0];
        let resolve = |spec: MeasureSpec, intrinsic: i32| match spec.mode() {
            MeasureMode::Exactly => spec.size(),
            MeasureMode::AtMost => intrinsic.min(spec.size()),
            MeasureMode::Unspecified => intrinsic,
        };
        let size = Size::new(
            resolve(width, element.intrinsic.width),
            resolve(height, element.intrinsic.height),
        );
        element.measured = Some(size);
        Ok(size)
    }

    fn commit_bounds(&mut self, child: &ElementId, bounds: Rect) {
        self.elements[child.0].bounds = Some(bounds);
    }
}
