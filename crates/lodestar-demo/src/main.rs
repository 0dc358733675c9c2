//! Demo binary that sweeps a camera toward an object with a LOD ladder and
//! logs every level transition.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p lodestar-demo` for the default sweep, or
//! `cargo run -p lodestar-demo -- --levels 5 --zoom 2.0` to override.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use glam::{Mat4, Vec3};
use lodestar_config::{CliArgs, Config, SweepConfig};
use lodestar_math::Aabb;
use lodestar_select::{BoundingBoxLod, CameraPose, Renderable, level_distance_with_scale};
use tracing::info;

/// Stand-in for a scene object: remembers its visibility and name.
#[derive(Debug)]
struct DemoMesh {
    name: String,
    visible: bool,
}

impl DemoMesh {
    fn new(name: impl Into<String>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            name: name.into(),
            visible: false,
        }))
    }
}

impl Renderable for DemoMesh {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

type Handle = Rc<RefCell<DemoMesh>>;

fn config_dir(args: &CliArgs) -> PathBuf {
    args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .map(|dir| dir.join("lodestar"))
            .unwrap_or_else(|| PathBuf::from("."))
    })
}

/// Index of the single visible mesh, if any is visible.
fn visible_index(meshes: &[Handle]) -> Option<usize> {
    meshes.iter().position(|m| m.borrow().visible)
}

/// Fly the camera from `start_distance` to `end_distance` along +X,
/// updating the selector at each step. Returns the sequence of selected
/// levels, one entry per transition.
///
/// With no registered levels the selector's update is a no-op, so the
/// sweep produces no transitions and touches no mesh.
fn run_sweep(
    lod: &mut BoundingBoxLod<Handle>,
    meshes: &[Handle],
    sweep: &SweepConfig,
    zoom: f32,
) -> Vec<usize> {
    let steps = sweep.steps.max(1);
    let mut transitions = Vec::new();
    let mut previous = None;

    for step in 0..=steps {
        let t = step as f32 / steps as f32;
        let x = sweep.start_distance + (sweep.end_distance - sweep.start_distance) * t;
        let camera =
            CameraPose::perspective(Mat4::from_translation(Vec3::new(x, 0.0, 0.0)), zoom);

        lod.update(Mat4::IDENTITY, &camera);

        let selected = lod.current_level();
        if meshes.is_empty() || previous == Some(selected) {
            continue;
        }
        let name = meshes[visible_index(meshes).unwrap_or(selected)]
            .borrow()
            .name
            .clone();
        info!(step, camera_x = x, level = selected, mesh = %name, "level transition");
        transitions.push(selected);
        previous = Some(selected);
    }

    transitions
}

fn main() {
    let args = CliArgs::parse();

    let dir = config_dir(&args);
    let mut config = match Config::load_or_create(&dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error ({}), using defaults: {err}", dir.display());
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    lodestar_log::init_logging(Some(&config));

    let half = config.lod.base_size / 2.0;
    let mut lod = BoundingBoxLod::new(Aabb::from_center_half_extents(
        Vec3::ZERO,
        Vec3::splat(half),
    ))
    .with_name("demo object");

    let mut meshes = Vec::new();
    for level in 0..config.lod.levels as usize {
        let distance =
            level_distance_with_scale(config.lod.base_size, level, config.lod.scale_factor);
        let mesh = DemoMesh::new(format!("mesh-lod-{level}"));
        lod.add_level(Rc::clone(&mesh), distance);
        info!(level, distance, "registered LOD level");
        meshes.push(mesh);
    }

    let transitions = run_sweep(&mut lod, &meshes, &config.sweep, config.lod.zoom);

    match visible_index(&meshes) {
        Some(index) => {
            println!(
                "sweep finished at level {} ({}) after {} transitions",
                lod.current_level(),
                meshes[index].borrow().name,
                transitions.len()
            );
        }
        None => println!("no LOD levels registered; nothing to sweep"),
    }
}
