//! Prints mesh statistics for a few reference strokes.
//!
//! Usage:
//! ```text
//! cargo run --example dump
//! RUST_LOG=strokeline=trace cargo run --example dump
//! ```

use strokeline::math::Point2;
use strokeline::tessellation::{StrokeLine, StrokeStyle, TessellateGrid};

fn main() -> strokeline::Result<()> {
    // Default: WARN for everything, DEBUG for strokeline.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("strokeline=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let shapes: &[(&str, &[Point2], f64, bool)] = &[
        (
            "straight",
            &[
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(20.0, 0.0),
            ],
            2.0,
            false,
        ),
        (
            "square loop",
            &[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
            0.2,
            true,
        ),
        (
            "reversal",
            &[
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(0.0, 0.0),
            ],
            2.0,
            false,
        ),
        (
            "zigzag",
            &[
                Point2::new(-2.0, -3.0),
                Point2::new(-1.0, 0.0),
                Point2::new(0.0, -3.0),
                Point2::new(1.0, 0.0),
                Point2::new(2.0, -3.0),
            ],
            0.25,
            false,
        ),
    ];

    let mut line = StrokeLine::default();
    for &(name, points, thickness, is_loop) in shapes {
        line.set_points(points);
        line.set_thickness(thickness)?;
        line.set_loop(is_loop);

        let geometry = line.geometry();
        let bounds = geometry
            .mesh
            .bounds()
            .map_or_else(String::new, |(lo, hi)| format!(" bounds=({lo}) .. ({hi})"));
        println!(
            "{name}: connecting={} corners={} end_caps={} vertices={} triangles={}{bounds}",
            geometry.connecting.len(),
            geometry.corners.len(),
            geometry.end_caps.len(),
            geometry.mesh.vertices.len(),
            geometry.mesh.indices.len(),
        );
    }

    let style = StrokeStyle::new(1.0)?;
    let grid = TessellateGrid::new(Point2::origin(), 200.0, 100.0, 10, 5)
        .with_line_thickness(style.thickness())
        .execute()?;
    println!("grid: vertices={} triangles={}", grid.vertices.len(), grid.indices.len());

    Ok(())
}
