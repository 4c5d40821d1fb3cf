use brickwork::Scene;
use std::env;
use std::fs;

/// Lays out a JSON scene in memory and prints the resulting positions.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Lays out the items of a JSON scene and prints their positions.");
        eprintln!();
        eprintln!("Usage: {} <path/to/scene.json>", args[0]);
        eprintln!();
        eprintln!("A scene holds the container size, optional padding, options and items:");
        eprintln!(r#"  {{ "container": {{ "width": 300, "height": 0 }}, "options": {{ "layoutMode": "masonry" }},"#);
        eprintln!(r#"    "items": [ {{ "id": 1, "width": 100, "height": 50, "tags": ["red"] }} ] }}"#);
        std::process::exit(1);
    }

    let scene_path = &args[1];
    log::info!("loading scene from {}", scene_path);
    let scene = Scene::from_json(&fs::read_to_string(scene_path)?)?;

    let report = scene.run()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
