//! Projection Information Tool
//!
//! Prints the window geometry a viewer would use for a given anchor,
//! magnification and viewport, and optionally measures great-circle
//! distances and segment crossings on a named body.
//!
//! Usage:
//!   cargo run --bin proj_info -- --ppd 8 --anchor 350,10 --measure 0,0,90,0 --body mars

use clap::Parser;
use nalgebra::Point2;
use planetproj::geometry::{Rect, Segment};
use planetproj::{
    Body, BodyShape, CoordinateProjection, Equirectangular, ProjectionState, SpatialProjection,
    ViewConfig, WorldRegion,
};
use serde::Serialize;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Projection Information Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Shows screen/world window geometry and spherical measurements for a map view",
    long_about = None
)]
struct Args {
    /// JSON view configuration; command line values override it
    #[arg(short, long)]
    config: Option<String>,

    /// View centre in world coordinates, as "x,y"
    #[arg(short, long, value_parser = parse_pair, allow_hyphen_values = true)]
    anchor: Option<[f64; 2]>,

    /// Magnification in pixels per degree
    #[arg(short, long)]
    ppd: Option<i64>,

    /// Viewport width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Great-circle distance between two lon/lat points, as "lon1,lat1,lon2,lat2"
    #[arg(short, long, value_parser = parse_quad, allow_hyphen_values = true)]
    measure: Option<[f64; 4]>,

    /// Hit test two lon/lat segments, as "lon1,lat1,lon2,lat2" given twice
    #[arg(long, num_args = 2, value_parser = parse_quad, allow_hyphen_values = true)]
    hit: Option<Vec<[f64; 4]>>,

    /// Body used for kilometer distances
    #[arg(short, long, default_value = "mars")]
    body: String,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn parse_floats<const N: usize>(s: &str) -> std::result::Result<[f64; N], String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|e| format!("'{}': {}", v, e)))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    values
        .try_into()
        .map_err(|v: Vec<f64>| format!("expected {} comma-separated numbers, got {}", N, v.len()))
}

fn parse_pair(s: &str) -> std::result::Result<[f64; 2], String> {
    parse_floats::<2>(s)
}

fn parse_quad(s: &str) -> std::result::Result<[f64; 4], String> {
    parse_floats::<4>(s)
}

#[derive(Debug, Serialize)]
struct Measurement {
    from: [f64; 2],
    to: [f64; 2],
    degrees: f64,
    kilometers: f64,
    body: &'static str,
}

#[derive(Debug, Serialize)]
struct Report {
    ppd: u32,
    ppd_log2: i32,
    pixel_size: f64,
    screen_window: Rect,
    world_window: Rect,
    world_window_mod: WorldRegion,
    center_spatial: [f64; 2],
    measurement: Option<Measurement>,
    hit: Option<bool>,
}

/// Applies command line overrides on top of the loaded configuration
fn build_state(args: &Args, mut config: ViewConfig) -> Result<ProjectionState> {
    if let Some(anchor) = args.anchor {
        config.anchor = anchor;
    }
    if let Some(ppd) = args.ppd {
        config.ppd = ppd;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    Ok(config.to_state()?)
}

fn report<B: BodyShape>(args: &Args, state: &ProjectionState, shape: &B) -> Result<Report> {
    let body = Body::from_name(&args.body).ok_or_else(|| format!("unknown body '{}'", args.body))?;
    let spatial = SpatialProjection::new(state, shape);
    let center = shape.world_to_spatial(&state.anchor());

    let measurement = args.measure.map(|[lon1, lat1, lon2, lat2]| {
        let a = Point2::new(lon1, lat1);
        let b = Point2::new(lon2, lat2);
        Measurement {
            from: [lon1, lat1],
            to: [lon2, lat2],
            degrees: spatial.distance_points(&a, &b),
            kilometers: spatial.distance_km(&a, &b, body),
            body: body.name(),
        }
    });

    let hit = args.hit.as_ref().map(|segments| {
        let [a, b] = [segments[0], segments[1]]
            .map(|[x1, y1, x2, y2]| Segment::from_coords(x1, y1, x2, y2));
        spatial.hit_test(&a, &b)
    });

    Ok(Report {
        ppd: state.ppd(),
        ppd_log2: state.ppd_log2(),
        pixel_size: state.pixel_size(),
        screen_window: state.screen_window(),
        world_window: state.world_window(),
        world_window_mod: state.world_window_mod(),
        center_spatial: [center.x, center.y],
        measurement,
        hit,
    })
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn format_rect(r: &Rect) -> String {
    format!(
        "x [{}, {}), y [{}, {}) ({} x {})",
        r.min_x(),
        r.max_x(),
        r.min_y(),
        r.max_y(),
        r.width,
        r.height
    )
}

fn print_report(report: &Report) {
    print_section_header("Magnification");
    println!("Pixels per degree: {} (level {})", report.ppd, report.ppd_log2);
    println!("Pixel size: {} deg", report.pixel_size);

    print_section_header("Windows");
    println!("Screen: {}", format_rect(&report.screen_window));
    println!("World:  {}", format_rect(&report.world_window));
    match &report.world_window_mod {
        WorldRegion::Single(r) => println!("Canonical: {}", format_rect(r)),
        WorldRegion::Split(a, b) => {
            println!("Canonical (split at seam):");
            println!("  {}", format_rect(a));
            println!("  {}", format_rect(b));
        }
    }
    println!(
        "Centre: lon {:.6}, lat {:.6}",
        report.center_spatial[0], report.center_spatial[1]
    );

    if let Some(m) = &report.measurement {
        print_section_header("Measurement");
        println!(
            "({}, {}) -> ({}, {}): {:.6} deg, {:.3} km on {}",
            m.from[0], m.from[1], m.to[0], m.to[1], m.degrees, m.kilometers, m.body
        );
    }

    if let Some(hit) = report.hit {
        print_section_header("Hit test");
        println!("Segments {}", if hit { "cross" } else { "do not cross" });
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ViewConfig::load(path)?,
        None => ViewConfig::default(),
    };
    let oblique = config.oblique_shape();
    let state = build_state(&args, config)?;

    let report = match oblique {
        Some(shape) => report(&args, &state, &shape)?,
        None => report(&args, &state, &Equirectangular)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}
