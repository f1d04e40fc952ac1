use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use polyprim::{fmt_guard::Output, Point, PointLocator, Polygon, Polygons};

/// Decimals used when printing areas.
const AREA_PRECISION: usize = 1;

#[derive(Parser)]
#[command(name = "polyprim")]
#[command(about = "Queries over a file of polygons, one `n (x;y) ...` polygon per line")]
struct Cmd {
    /// File listing the polygons
    file: PathBuf,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the total area of all polygons
    Area,
    /// Print the polygon with the largest area, and that area
    Largest,
    /// Print the polygon with the smallest area, and that area
    Smallest,
    /// Count the polygons containing a point written as `(x;y)`
    Contains { point: Point },
    /// Count the polygons intersecting the given polygon
    Intersections { polygon: Polygon },
    /// Count the polygons with the same vertices as the given polygon
    Same { polygon: Polygon },
    /// Print, for each point, the index of the first polygon containing it
    Locate {
        #[arg(required = true)]
        points: Vec<Point>,
        /// Locate the points in parallel
        #[arg(long)]
        parallel: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cmd = Cmd::parse();

    let file = File::open(&cmd.file)
        .with_context(|| format!("Cannot open {}", cmd.file.display()))?;
    let polygons = Polygons::from_reader(BufReader::new(file))
        .with_context(|| format!("Cannot read {}", cmd.file.display()))?;
    info!("{} polygons read from {}", polygons.len(), cmd.file.display());

    let mut out = Output::new(io::stdout().lock());
    run(cmd.action, &polygons, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run<W: Write>(action: Action, polygons: &Polygons, out: &mut Output<W>) -> Result<()> {
    match action {
        Action::Area => {
            write_area(out, polygons.total_area())?;
            out.newline()?;
        }
        Action::Largest | Action::Smallest => {
            let extreme = if matches!(action, Action::Largest) {
                polygons.largest()
            } else {
                polygons.smallest()
            };
            let polygon = extreme.context("No polygon to compare")?;
            out.write_display(polygon)?;
            out.write_str(" ")?;
            write_area(out, polygon.area())?;
            out.newline()?;
        }
        Action::Contains { point } => {
            out.write_display(polygons.count_containing(&point))?;
            out.newline()?;
        }
        Action::Intersections { polygon } => {
            out.write_display(polygons.count_intersecting(&polygon))?;
            out.newline()?;
        }
        Action::Same { polygon } => {
            out.write_display(polygons.count_equal(&polygon))?;
            out.newline()?;
        }
        Action::Locate { points, parallel } => {
            let locations = if parallel {
                polygons.par_locate_many(&points)
            } else {
                polygons.locate_many(&points)
            };
            for (point, location) in points.iter().zip(locations) {
                out.write_display(point)?;
                out.write_str(" ")?;
                match location {
                    Some(idx) => out.write_display(idx)?,
                    None => out.write_str("-")?,
                }
                out.newline()?;
            }
        }
    }
    Ok(())
}

fn write_area<W: Write>(out: &mut Output<W>, area: f64) -> io::Result<()> {
    let mut guard = out.guard();
    guard.set_precision(AREA_PRECISION);
    guard.write_f64(area)
}
