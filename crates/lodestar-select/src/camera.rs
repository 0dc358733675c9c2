//! Camera pose input for LOD selection.

use glam::{Mat4, Vec3};

/// Projection kind, as far as LOD selection cares about it.
///
/// Only perspective cameras carry a digital zoom; every other projection
/// behaves as zoom 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection with a digital zoom factor (1.0 = no zoom).
    Perspective { zoom: f32 },
    /// Orthographic projection.
    Orthographic,
}

/// The per-frame camera state consumed by [`BoundingBoxLod::update`].
///
/// Holds the camera's world transform rather than a position so callers can
/// pass the scene graph's matrix directly; the translation column is used
/// as the world-space position.
///
/// [`BoundingBoxLod::update`]: crate::BoundingBoxLod::update
#[derive(Debug, Clone, Copy)]
pub struct CameraPose {
    /// World transform of the camera node.
    pub world_transform: Mat4,
    /// Projection kind.
    pub projection: Projection,
}

impl CameraPose {
    /// A perspective camera at the given world transform.
    pub fn perspective(world_transform: Mat4, zoom: f32) -> Self {
        Self {
            world_transform,
            projection: Projection::Perspective { zoom },
        }
    }

    /// An orthographic camera at the given world transform.
    pub fn orthographic(world_transform: Mat4) -> Self {
        Self {
            world_transform,
            projection: Projection::Orthographic,
        }
    }

    /// World-space position: the translation column of the world transform.
    pub fn world_position(&self) -> Vec3 {
        self.world_transform.w_axis.truncate()
    }

    /// The zoom factor used to normalize viewing distance.
    /// 1.0 for anything that is not a perspective camera.
    pub fn zoom_factor(&self) -> f32 {
        match self.projection {
            Projection::Perspective { zoom } => zoom,
            Projection::Orthographic => 1.0,
        }
    }
}
