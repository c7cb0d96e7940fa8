mod store;

use anyhow::{bail, Result};
use basegeom::geom2::rand::bounding_box;
use basegeom::geom2::{CircleCfg, CircleSweep, CIRCLE_VERTICES};
use basegeom::{GeomCfg, Point};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "bases")]
#[command(about = "Inspect and edit saved base regions")]
struct Cmd {
    /// Base record file (one `name|x,y;x,y;...` line per base)
    #[arg(long, global = true, default_value = "bases.txt")]
    bases: PathBuf,

    /// Collinearity tolerance for containment queries (0 = exact)
    #[arg(long, global = true, default_value_t = 0.0)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print every saved base with its vertex count and bounds
    List,
    /// Print the names of the bases containing a point
    Inside {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Add a circular base and save the file
    Circle {
        #[arg(long)]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long)]
        radius: f64,
        #[arg(long, default_value_t = CIRCLE_VERTICES)]
        vertices: usize,
        /// Sweep the full turn instead of the legacy half turn
        #[arg(long)]
        full_turn: bool,
    },
    /// Remove a base by name and save the file
    Remove {
        #[arg(long)]
        name: String,
    },
}

#[derive(Debug, Serialize)]
struct BaseSummary {
    index: usize,
    name: String,
    vertices: usize,
    bounds: Option<[[f64; 2]; 2]>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = GeomCfg::with_eps(cmd.eps);
    let out = match cmd.action {
        Action::List => list(&cmd.bases)?,
        Action::Inside { x, y } => inside(&cmd.bases, Point::new(x, y), cfg)?,
        Action::Circle {
            name,
            x,
            y,
            radius,
            vertices,
            full_turn,
        } => {
            let sweep = if full_turn {
                CircleSweep::FullTurn
            } else {
                CircleSweep::HalfTurn
            };
            circle(
                &cmd.bases,
                name,
                Point::new(x, y),
                radius,
                CircleCfg { vertices, sweep },
            )?
        }
        Action::Remove { name } => remove(&cmd.bases, &name)?,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn list(path: &Path) -> Result<serde_json::Value> {
    let reg = store::load_registry(path, GeomCfg::default())?;
    let rows: Vec<BaseSummary> = reg
        .iter()
        .map(|p| BaseSummary {
            index: p.index(),
            name: p.name.clone(),
            vertices: p.len(),
            bounds: bounding_box(p.points()).map(|(lo, hi)| [[lo.x, lo.y], [hi.x, hi.y]]),
        })
        .collect();
    Ok(serde_json::to_value(rows)?)
}

fn inside(path: &Path, p: Point, cfg: GeomCfg) -> Result<serde_json::Value> {
    let reg = store::load_registry(path, cfg)?;
    let names: Vec<&str> = reg
        .containing(p)
        .into_iter()
        .filter_map(|id| reg.get(id))
        .map(|poly| poly.name.as_str())
        .collect();
    tracing::info!(x = p.x, y = p.y, hits = names.len(), "inside");
    Ok(serde_json::json!(names))
}

fn circle(
    path: &Path,
    name: String,
    center: Point,
    radius: f64,
    cfg: CircleCfg,
) -> Result<serde_json::Value> {
    if !(radius.is_finite() && radius > 0.0) {
        bail!("radius must be positive, got {radius}");
    }
    let mut reg = store::load_registry(path, GeomCfg::default())?;
    if reg.find_by_name(&name).is_some() {
        bail!("a base named {name:?} already exists");
    }
    let id = reg.create_circle_with(center, radius, cfg);
    reg.set_name(id, name.clone());
    store::save_registry(path, &reg)?;
    tracing::info!(name, radius, vertices = cfg.vertices, "circle base added");
    Ok(serde_json::json!({ "name": name, "index": reg.index_of(id) }))
}

fn remove(path: &Path, name: &str) -> Result<serde_json::Value> {
    let mut reg = store::load_registry(path, GeomCfg::default())?;
    let Some(id) = reg.find_by_name(name) else {
        bail!("no base named {name:?}");
    };
    reg.destroy(id);
    store::save_registry(path, &reg)?;
    tracing::info!(name, remaining = reg.count(), "base removed");
    Ok(serde_json::json!({ "removed": name, "remaining": reg.count() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn circle_inside_remove_flow() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bases.txt");
        let full = CircleCfg {
            vertices: 12,
            sweep: CircleSweep::FullTurn,
        };
        circle(&path, "keep".into(), Point::new(0.0, 0.0), 100.0, full).unwrap();
        circle(&path, "tower".into(), Point::new(50.0, 0.0), 20.0, full).unwrap();
        assert!(circle(&path, "keep".into(), Point::new(0.0, 0.0), 5.0, full).is_err());
        assert!(circle(&path, "bad".into(), Point::new(0.0, 0.0), -1.0, full).is_err());

        let hits = inside(&path, Point::new(45.0, 3.0), GeomCfg::default()).unwrap();
        assert_eq!(hits, serde_json::json!(["keep", "tower"]));

        let rows = list(&path).unwrap();
        assert_eq!(rows[1]["name"], "tower");
        assert_eq!(rows[1]["vertices"], 12);

        let out = remove(&path, "keep").unwrap();
        assert_eq!(out["remaining"], 1);
        assert!(remove(&path, "keep").is_err());
        let hits = inside(&path, Point::new(-80.0, 3.0), GeomCfg::default()).unwrap();
        assert_eq!(hits, serde_json::json!([]));

        // 12-gon vertex at (70, 0): just past it only the tolerance admits the point
        let beyond = Point::new(70.0 + 1e-12, 0.0);
        let hits = inside(&path, beyond, GeomCfg::default()).unwrap();
        assert_eq!(hits, serde_json::json!([]));
        let hits = inside(&path, beyond, GeomCfg::with_eps(1e-6)).unwrap();
        assert_eq!(hits, serde_json::json!(["tower"]));
    }
}
