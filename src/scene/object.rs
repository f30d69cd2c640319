use crate::constants::{ShapeKind, SurfaceKind};
use std::fmt;

/// Handle to a registered shape: its kind and its slot index within that kind.
///
/// Handles are plain data. They never own the shape and stay valid for the lifetime of
/// the scene, since records are never removed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShapeRef {
    pub kind: ShapeKind,
    pub index: usize,
}

impl ShapeRef {
    pub fn new(kind: ShapeKind, index: usize) -> Self {
        Self { kind, index }
    }
}

impl fmt::Display for ShapeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind, self.index)
    }
}

/// Handle to a registered surface: its kind and its slot index within that kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceRef {
    pub kind: SurfaceKind,
    pub index: usize,
}

impl SurfaceRef {
    pub fn new(kind: SurfaceKind, index: usize) -> Self {
        Self { kind, index }
    }
}

impl fmt::Display for SurfaceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind, self.index)
    }
}

/// A visible entity: one shape combined with one surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SceneObject {
    pub visible: bool,
    pub shape: ShapeRef,
    pub surface: SurfaceRef,
}

impl SceneObject {
    pub fn new(visible: bool, shape: ShapeRef, surface: SurfaceRef) -> Self {
        Self {
            visible,
            shape,
            surface,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
