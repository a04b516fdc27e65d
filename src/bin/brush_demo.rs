//! Brush demo: carves and paints a small in-memory terrain.
//!
//! Usage: cargo run --release --bin brush_demo -- [OPTIONS]
//!
//! Options:
//!   --radius <R>      Ball radius (default: from config, 3.0)
//!   --seed <SEED>     Fixed random seed (default: fresh entropy)
//!   --config <PATH>   Brush defaults JSON file

use std::path::PathBuf;
use std::time::Instant;

use glam::IVec3;

use voxcarve::brush::{BrushContext, BrushRegistry, Messenger, StepOutcome, execute_step};
use voxcarve::config::BrushDefaults;
use voxcarve::core::types::Result;
use voxcarve::material::{MaterialShape, StandardMaterials};
use voxcarve::shape::Shape;
use voxcarve::world::GridWorld;

const GROUND_HALF: i32 = 16;
const GROUND_TOP: i32 = 8;

/// Prints brush feedback to stdout.
struct Console;

impl Messenger for Console {
    fn send_message(&self, text: &str) {
        println!("  ! {}", text);
    }
}

fn main() {
    voxcarve::core::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let mut defaults = match parse_str_arg(&args, "--config") {
        Some(path) => match BrushDefaults::load(&PathBuf::from(&path)) {
            Ok(defaults) => defaults,
            Err(err) => {
                eprintln!("Failed to load {}: {}", path, err);
                std::process::exit(1);
            }
        },
        None => BrushDefaults::default(),
    };
    if let Some(radius) = parse_f64_arg(&args, "--radius") {
        defaults.radius = radius;
    }
    if let Some(seed) = parse_u64_arg(&args, "--seed") {
        defaults.seed = Some(seed);
    }

    println!("=== Voxcarve Brush Demo ===");
    println!("Radius: {}", defaults.radius);
    match defaults.seed {
        Some(seed) => println!("Seed:   {}", seed),
        None => println!("Seed:   random"),
    }
    println!();

    if let Err(err) = run(defaults) {
        eprintln!("Brush chain failed: {}", err);
        std::process::exit(1);
    }
}

fn run(defaults: BrushDefaults) -> Result<()> {
    let mut world = build_terrain();
    println!("Terrain: {} solid voxels", world.len());

    let registry = BrushRegistry::with_builtins();
    let console = Console;
    let target = IVec3::new(0, GROUND_TOP, 0);

    // Carve: ball -> splattermask -> erode
    let start = Instant::now();
    let mut ctx = BrushContext::new(target, defaults.clone());
    ctx.arg("erode", "erode", 2).arg("erode", "fill", 4);
    for name in ["ball", "splattermask", "erode"] {
        let brush = registry.resolve(name)?;
        match execute_step(brush, &mut ctx, &world, &console)? {
            StepOutcome::Completed => {
                let selected = ctx.shape().map_or(0, |s| s.count_set());
                println!("  {:<13} {:>6} voxels selected", name, selected);
            }
            StepOutcome::Aborted(_) => return Ok(()),
        }
    }
    if let Some(result) = ctx.material_shape() {
        world.apply(target, result);
        report("Carve", result, start);
    }
    println!("Terrain: {} solid voxels", world.len());

    // Paint: cuboid -> overlay
    let start = Instant::now();
    let mut ctx = BrushContext::new(target, defaults);
    let size = (GROUND_HALF as u32) + 1;
    ctx.arg("cuboid", "width", size)
        .arg("cuboid", "length", size)
        .arg("cuboid", "height", (GROUND_TOP as u32) * 2);
    for name in ["cuboid", "overlay"] {
        let brush = registry.resolve(name)?;
        if let StepOutcome::Aborted(_) = execute_step(brush, &mut ctx, &world, &console)? {
            return Ok(());
        }
    }
    if let Some(result) = ctx.material_shape() {
        world.apply(target, result);
        report("Overlay", result, start);
    }
    println!("Terrain: {} solid voxels", world.len());
    Ok(())
}

/// Stone bedrock under a dirt layer, with a sand strip along +x.
fn build_terrain() -> GridWorld {
    let mut world = GridWorld::new();
    let (min, max) = (IVec3::new(-GROUND_HALF, 0, -GROUND_HALF), IVec3::new(GROUND_HALF, GROUND_TOP - 1, GROUND_HALF));
    world.fill_box(min, max, StandardMaterials::DIRT);
    world.fill_box(min, IVec3::new(max.x, GROUND_TOP / 2, max.z), StandardMaterials::STONE);
    world.fill_box(
        IVec3::new(GROUND_HALF / 2, GROUND_TOP - 2, -GROUND_HALF),
        max,
        StandardMaterials::SAND,
    );
    world
}

fn report(label: &str, result: &dyn MaterialShape, start: Instant) {
    let shape = result.shape();
    println!(
        "{}: {} voxels written in a {}x{}x{} box ({:.2}ms)",
        label,
        shape.count_set(),
        shape.width(),
        shape.height(),
        shape.length(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    println!();
}

fn parse_f64_arg(args: &[String], flag: &str) -> Option<f64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u64_arg(args: &[String], flag: &str) -> Option<u64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
