//! The bounding-box LOD selector.

use glam::Mat4;
use lodestar_math::Aabb;
use tracing::debug;

use crate::camera::CameraPose;
use crate::renderable::Renderable;

/// One registered level: a renderable and the viewing distance at which it
/// becomes the preferred representation.
#[derive(Debug)]
pub struct LodLevel<R> {
    distance: f32,
    renderable: R,
}

impl<R> LodLevel<R> {
    /// The stored (absolute) activation distance.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// The registered renderable handle.
    pub fn renderable(&self) -> &R {
        &self.renderable
    }
}

/// Selects which of several renderables should be visible based on the
/// camera's distance to a bounding box.
///
/// The selector does not own a place in the scene graph; the caller passes
/// the owning node's world transform into [`update`](Self::update) each
/// frame, and the bounding box is interpreted in that node's local space.
/// After any update with at least one level registered, exactly one level's
/// renderable is visible.
pub struct BoundingBoxLod<R> {
    bounding_box: Aabb,
    levels: Vec<LodLevel<R>>,
    current_level: usize,
    name: Option<String>,
}

impl<R: Renderable> BoundingBoxLod<R> {
    /// Create a selector around the given local-space bounding box.
    pub fn new(bounding_box: Aabb) -> Self {
        Self {
            bounding_box,
            levels: Vec::new(),
            current_level: 0,
            name: None,
        }
    }

    /// Attach a name used in log events.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the stored bounding box. Takes effect on the next
    /// [`update`](Self::update); visibility is not recomputed here.
    pub fn set_bounding_box(&mut self, bounding_box: Aabb) {
        self.bounding_box = bounding_box;
    }

    /// The stored local-space bounding box.
    pub fn bounding_box(&self) -> Aabb {
        self.bounding_box
    }

    /// Register a renderable that becomes the preferred representation at
    /// viewing distance `distance`.
    ///
    /// The distance's sign is discarded. Levels are kept sorted ascending
    /// by stored distance; equal distances keep their insertion order.
    /// Any distance is accepted, including NaN — a NaN threshold sorts
    /// last and never wins a comparison, so it is only selected as the
    /// level-0 fallback.
    pub fn add_level(&mut self, renderable: R, distance: f32) {
        self.levels.push(LodLevel {
            distance: distance.abs(),
            renderable,
        });
        // Vec::sort_by is stable; total_cmp gives a total order over f32.
        self.levels
            .sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }

    /// Index (into the distance-sorted levels) of the level most recently
    /// made visible. 0 before the first effective update.
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// Number of registered levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// True if no levels have been registered.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The registered levels, sorted ascending by activation distance.
    pub fn levels(&self) -> &[LodLevel<R>] {
        &self.levels
    }

    /// Recompute which level is visible for the current camera pose.
    ///
    /// `world_transform` is the world matrix of the scene node this
    /// selector augments; the bounding box is transformed by it before the
    /// camera distance is measured. The distance is divided by the
    /// camera's zoom factor, so zooming in selects higher-detail levels
    /// without moving the camera.
    ///
    /// With no registered levels this is a no-op. Otherwise the selected
    /// level is the highest-index one whose activation distance does not
    /// exceed the normalized camera distance (level 0 if none does), its
    /// renderable is made visible, and every other level is hidden.
    pub fn update(&mut self, world_transform: Mat4, camera: &CameraPose) {
        if self.levels.is_empty() {
            return;
        }

        let world_box = self.bounding_box.transformed(&world_transform);
        let distance = world_box.distance_to_point(camera.world_position()) / camera.zoom_factor();

        // A NaN distance fails every comparison and falls through to
        // level 0, the safest default for a per-frame visual utility.
        let mut selected = 0;
        for (i, level) in self.levels.iter().enumerate() {
            if level.distance <= distance {
                selected = i;
            } else {
                break;
            }
        }

        for (i, level) in self.levels.iter_mut().enumerate() {
            level.renderable.set_visible(i == selected);
        }

        if selected != self.current_level {
            debug!(
                name = self.name.as_deref().unwrap_or("<unnamed>"),
                from = self.current_level,
                to = selected,
                distance,
                "lod level changed"
            );
        }
        self.current_level = selected;
    }
}
