//! f32 geometry primitives for level-of-detail selection.

mod aabb;

pub use aabb::Aabb;
