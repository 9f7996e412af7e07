//! Draws one of everything into an SVG file.
//!
//! cargo run --example showcase --features tracing -- out.svg

use std::path::PathBuf;

use gridsketch::{
    Arrow, Graph, GraphLine, GraphMode, GraphVector, OriginAnchor, Point, RotatableRectangle, Shape, SvgRenderer,
};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let out = std::env::args().nth(1).map(PathBuf::from);

    let mut canvas = SvgRenderer::new(640.0, 480.0);

    let graph = Graph::new(12, 16, "gainsboro", OriginAnchor::Center, GraphMode::Lines, &canvas)?;
    graph.draw(&mut canvas);

    GraphVector::new(&graph, 3.0, 2.0, "blue")?.draw(&mut canvas);
    GraphVector::from_tail(&graph, -4.0, -1.0, 0.0, -3.0, "purple")?.draw(&mut canvas);
    GraphLine::new(&graph, -1.0, -1.0, 1.0, 2.0, "green")?.draw(&mut canvas);

    Arrow::new(Point::new(40.0, 440.0), Point::new(160.0, 380.0), "black", 3.0, 2)?.draw(&mut canvas);

    for (i, degrees) in [0.0, 30.0, 60.0].into_iter().enumerate() {
        let center = Point::new(480.0 + 50.0 * i as f64, 100.0);
        RotatableRectangle::new(center, 40.0, 24.0, "orange", 4.0, 2, degrees)?.draw(&mut canvas);
    }

    let dots = SvgRenderer::new(320.0, 240.0);
    let dotted = Graph::from_names(6, 8, "slategray", "bottom_left", "dots", &dots)?;
    tracing::info!(count = dotted.primitives().len(), "dotted graph primitives");

    let path = canvas.screenshot(out.as_deref())?;
    println!("{}", path.display());
    Ok(())
}
