//! Distance-based level-of-detail object selection.
//!
//! A [`BoundingBoxLod`] holds a set of renderables, each tagged with an
//! activation distance, and decides per update which single one should be
//! visible for the current camera pose. Distances are measured from the
//! camera to the surface of a world-space bounding box and normalized by
//! the camera's digital zoom, so LOD transitions stay visually consistent
//! whether the viewer moves the camera or zooms it.

mod camera;
mod distance;
mod renderable;
mod selector;

pub use camera::{CameraPose, Projection};
pub use distance::{DEFAULT_SCALE_FACTOR, level_distance, level_distance_with_scale};
pub use renderable::Renderable;
pub use selector::{BoundingBoxLod, LodLevel};
