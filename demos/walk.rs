//! Headless click-to-walk demo.
//!
//! Replays a scripted sequence of clicks (including a re-target mid-walk,
//! an unreachable wall tile and an off-map click) followed by a few seeded
//! random destinations, printing the map as the agent moves.
//!
//! Run: cargo run --bin walk [config.json]
//!
//! The optional config is a JSON `FollowerConfig`, e.g.
//! `{"speed": 2.0, "tile_size": 8.0}`; missing fields take their defaults.

use rand::SeedableRng;
use tilewalk_core::Point;
use tilewalk_demos::{ClickOutcome, MAP, SPAWN, Scene};
use tilewalk_paths::{FollowerConfig, FollowerStatus, PassMap};

const MAX_TICKS: usize = 10_000;
const RANDOM_TRIPS: usize = 3;

fn load_config() -> Result<FollowerConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(FollowerConfig::default()),
    }
}

fn click(scene: &mut Scene, target: Point) -> Result<(), Box<dyn std::error::Error>> {
    match scene.click(target)? {
        ClickOutcome::Routed { waypoints } => {
            println!("click {target}: route with {waypoints} waypoints");
        }
        ClickOutcome::NoRoute => println!("click {target}: no route"),
        ClickOutcome::OffMap => println!("click {target}: off the map"),
    }
    Ok(())
}

fn walk(scene: &mut Scene) {
    let mut ticks = 0;
    while ticks < MAX_TICKS {
        ticks += 1;
        match scene.tick() {
            FollowerStatus::Arrived => {
                println!("arrived after {ticks} ticks");
                break;
            }
            FollowerStatus::Idle => break,
            FollowerStatus::Moving { .. } => {}
        }
    }
    println!("{}", scene.status_line());
    print!("{}", scene.render());
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let map = PassMap::from_ascii(MAP)?;
    let mut scene = Scene::new(map, SPAWN, config)?;

    println!("spawned at {} ({})", SPAWN, scene.status_line());
    print!("{}", scene.render());

    // Head for the far corner, then change our mind halfway.
    click(&mut scene, Point::new(19, 14))?;
    for _ in 0..(config.tile_size / config.speed).ceil() as usize * 6 {
        scene.tick();
    }
    println!("{}", scene.status_line());
    print!("{}", scene.render());
    click(&mut scene, Point::new(0, 0))?;
    walk(&mut scene);

    click(&mut scene, Point::new(4, 2))?;
    click(&mut scene, Point::new(25, 3))?;

    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    for _ in 0..RANDOM_TRIPS {
        let Some(target) = scene.random_floor(&mut rng) else {
            println!("no walkable tiles, skipping random trips");
            break;
        };
        click(&mut scene, target)?;
        walk(&mut scene);
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
