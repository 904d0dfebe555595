//! raypick CLI - ray picking against scene documents
//!
//! Loads a JSON scene, casts a ray through it and prints the hits.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use raypick_math::{Point3, Vec3};
use raypick_scene::{Document, Pick, Scene};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "raypick")]
#[command(about = "Cast picking rays into a scene document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a ray and list the objects it hits, nearest first
    Pick {
        /// Scene document (.json)
        scene: PathBuf,
        /// Ray origin as x,y,z
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        origin: [f64; 3],
        /// Ray direction as x,y,z
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        direction: [f64; 3],
        /// Override the scene's parallel-plane precision
        #[arg(long)]
        precision: Option<f64>,
        /// Only test the object with this name
        #[arg(long)]
        object: Option<String>,
        /// Print only the nearest hit
        #[arg(long)]
        nearest: bool,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Display information about a scene document
    Info {
        /// Scene document (.json)
        scene: PathBuf,
    },
}

#[derive(Serialize)]
struct PickReport<'a> {
    origin: [f64; 3],
    direction: [f64; 3],
    precision: f64,
    hits: &'a [Pick],
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Pick {
            scene,
            origin,
            direction,
            precision,
            object,
            nearest,
            json,
        } => {
            let loaded = load_scene(&scene)?;
            let mut ray = loaded.ray(
                Point3::new(origin[0], origin[1], origin[2]),
                Vec3::new(direction[0], direction[1], direction[2]),
            );
            if let Some(eps) = precision {
                ray.set_precision(eps);
            }

            let mut hits = match object.as_deref() {
                Some(name) => loaded.pick_object(name, &ray)?,
                None => loaded.pick(&ray),
            };
            if nearest {
                hits.truncate(1);
            }

            if json {
                let report = PickReport {
                    origin,
                    direction,
                    precision: ray.precision(),
                    hits: &hits,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_hits(&hits);
            }
        }
        Commands::Info { scene } => {
            show_info(&scene)?;
        }
    }

    Ok(())
}

fn load_scene(path: &Path) -> Result<Scene> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let doc = Document::from_json(&json)?;
    let scene = doc.build()?;
    info!("loaded {} objects from {}", scene.objects().len(), path.display());
    Ok(scene)
}

fn print_hits(hits: &[Pick]) {
    if hits.is_empty() {
        println!("No hits");
        return;
    }
    for (i, hit) in hits.iter().enumerate() {
        let face = hit
            .face
            .map(|f| format!("face {}", f))
            .unwrap_or_else(|| "no face".to_string());
        println!(
            "  {}: {} (#{}) at distance {:.4}, point ({:.4}, {:.4}, {:.4}), {}",
            i + 1,
            hit.object,
            hit.index,
            hit.distance,
            hit.point[0],
            hit.point[1],
            hit.point[2],
            face
        );
    }
}

fn show_info(path: &Path) -> Result<()> {
    let scene = load_scene(path)?;
    let stats = scene.stats();

    println!("raypick scene: {}", path.display());
    println!("  Precision: {}", scene.settings().precision);
    println!("  Parallel: {}", scene.settings().parallel);
    println!("  Objects: {}", scene.objects().len());
    println!("    Particles: {}", stats.particles);
    println!("    Meshes: {}", stats.meshes);
    println!("    Helpers: {}", stats.helpers);
    println!("  Total faces: {}", stats.faces);
    println!("  Total vertices: {}", stats.vertices);

    if !scene.names().is_empty() {
        println!("\nObjects:");
        for (i, name) in scene.names().iter().enumerate() {
            println!("  {}: {}", i, name);
        }
    }

    Ok(())
}

fn parse_triple(s: &str) -> std::result::Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got {:?}", s));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid number {:?}: {}", part, e))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_triple_accepts_signed_values() {
        assert_eq!(parse_triple("0, -1.5,2e1").unwrap(), [0.0, -1.5, 20.0]);
    }

    #[test]
    fn parse_triple_rejects_bad_input() {
        assert!(parse_triple("1,2").is_err());
        assert!(parse_triple("1,2,3,4").is_err());
        assert!(parse_triple("1,x,3").is_err());
    }

    #[test]
    fn cli_parses_pick() {
        let cli = Cli::try_parse_from([
            "raypick",
            "pick",
            "scene.json",
            "--origin",
            "0,0,0",
            "--direction",
            "0,0,-1",
            "--nearest",
        ])
        .unwrap();
        match cli.command {
            Commands::Pick {
                direction, nearest, json, precision, ..
            } => {
                assert_eq!(direction, [0.0, 0.0, -1.0]);
                assert!(nearest);
                assert!(!json);
                assert!(precision.is_none());
            }
            Commands::Info { .. } => panic!("expected pick"),
        }
    }
}
