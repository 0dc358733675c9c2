//! End-to-end selection scenario: a selector built up incrementally while
//! a perspective camera watches from a fixed pose.

use glam::{Mat4, Vec3};
use lodestar_math::Aabb;
use lodestar_select::{BoundingBoxLod, CameraPose, Renderable, level_distance};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct SceneObject {
    visible: bool,
}

impl Renderable for SceneObject {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

type Handle = Rc<RefCell<SceneObject>>;

fn object() -> Handle {
    Rc::new(RefCell::new(SceneObject::default()))
}

#[test]
fn incremental_level_registration() {
    // Unit-ish cube [-1,1]^3, camera at (10,0,0): 9 from the surface.
    let mut lod = BoundingBoxLod::new(Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)))
        .with_name("scenario");
    let camera = CameraPose::perspective(Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)), 1.0);

    // No levels: update is a no-op.
    lod.update(Mat4::IDENTITY, &camera);
    assert_eq!(lod.current_level(), 0);

    // One level at distance 10: visible even though the camera is closer.
    let coarse = object();
    lod.add_level(Rc::clone(&coarse), 10.0);
    lod.update(Mat4::IDENTITY, &camera);
    assert!(coarse.borrow().visible);
    assert_eq!(lod.current_level(), 0);

    // Baseline at 0 and a mid level at 5: the camera distance of 9 lands
    // on the mid level, index 1 in sorted order [0, 5, 10].
    let fine = object();
    let mid = object();
    lod.add_level(Rc::clone(&fine), 0.0);
    lod.add_level(Rc::clone(&mid), 5.0);
    lod.update(Mat4::IDENTITY, &camera);
    assert_eq!(lod.current_level(), 1);
    assert!(mid.borrow().visible);
    assert!(!fine.borrow().visible);
    assert!(!coarse.borrow().visible);
}

#[test]
fn geometric_ladder_walkthrough() {
    // Ladder built the way callers do it: from the biggest primitive size.
    let size = 2.0;
    let mut lod = BoundingBoxLod::new(Aabb::from_center_half_extents(
        Vec3::ZERO,
        Vec3::splat(size / 2.0),
    ));

    let handles: Vec<Handle> = (0..3).map(|_| object()).collect();
    for (level, h) in handles.iter().enumerate() {
        lod.add_level(Rc::clone(h), level_distance(size, level));
    }
    // Thresholds: [0, 10, 50].

    let mut seen = Vec::new();
    for x in [200.0, 30.0, 5.0] {
        let camera = CameraPose::perspective(Mat4::from_translation(Vec3::new(x, 0.0, 0.0)), 1.0);
        lod.update(Mat4::IDENTITY, &camera);
        seen.push(lod.current_level());
        let visible_count = handles.iter().filter(|h| h.borrow().visible).count();
        assert_eq!(visible_count, 1);
    }
    assert_eq!(seen, vec![2, 1, 0]);
}
