use gridsketch::{
    AnyShape, Arrow, Color, Graph, GraphLine, GraphMode, GraphVector, Grid, OriginAnchor, Point, Primitive,
    RecordingRenderer, RotatableRectangle, Shape, SurfaceSize, SvgRenderer,
};

const EPS: f64 = 1e-9;

// =============================================================================
// Grid
// =============================================================================

#[test]
fn grid_draws_rows_then_cols() {
    let mut canvas = RecordingRenderer::new(300.0, 200.0);
    Grid::new(2, 3, "black", &canvas).unwrap().draw(&mut canvas);

    insta::assert_snapshot!(canvas.dump().trim_end(), @r"
    line (0, 0) -> (300, 0) width=1 color=black z=0
    line (0, 100) -> (300, 100) width=1 color=black z=0
    line (0, 0) -> (0, 200) width=1 color=lime z=0
    line (100, 0) -> (100, 200) width=1 color=lime z=0
    line (200, 0) -> (200, 200) width=1 color=lime z=0
    ");
}

#[test]
fn grid_line_counts_hold_for_many_sizes() {
    let surfaces = [(640.0, 480.0), (101.0, 57.0), (1920.0, 1080.0)];
    for (w, h) in surfaces {
        for rows in 1..=9 {
            for cols in 1..=9 {
                let mut canvas = RecordingRenderer::new(w, h);
                Grid::new(rows, cols, "black", &canvas).unwrap().draw(&mut canvas);

                let horizontal: Vec<_> = canvas.lines().filter(|l| l.start.x == 0.0 && l.end.x == w).collect();
                let vertical: Vec<_> = canvas.lines().filter(|l| l.start.y == 0.0 && l.end.y == h).collect();
                assert_eq!(horizontal.len(), rows as usize, "{w}x{h} rows={rows}");
                assert_eq!(vertical.len(), cols as usize, "{w}x{h} cols={cols}");
            }
        }
    }
}

// =============================================================================
// Graph
// =============================================================================

#[test]
fn graph_dots_snapshot() {
    let mut canvas = RecordingRenderer::new(100.0, 100.0);
    Graph::new(1, 1, "navy", OriginAnchor::TopLeft, GraphMode::Dots, &canvas)
        .unwrap()
        .draw(&mut canvas);

    insta::assert_snapshot!(canvas.dump().trim_end(), @r"
    square (-2, -2) size=4 color=navy z=0
    square (98, -2) size=4 color=navy z=0
    square (198, -2) size=4 color=navy z=0
    square (-2, 98) size=4 color=navy z=0
    square (98, 98) size=4 color=navy z=0
    square (198, 98) size=4 color=navy z=0
    square (-2, 198) size=4 color=navy z=0
    square (98, 198) size=4 color=navy z=0
    square (198, 198) size=4 color=navy z=0
    circle (0, 0) r=5 color=red z=1
    ");
}

#[test]
fn graph_lines_span_surface() {
    let (w, h) = (640.0, 480.0);
    for rows in 1..=6 {
        for cols in 1..=6 {
            let mut canvas = RecordingRenderer::new(w, h);
            Graph::new(rows, cols, "black", OriginAnchor::Center, GraphMode::Lines, &canvas)
                .unwrap()
                .draw(&mut canvas);

            let horizontal = canvas.lines().filter(|l| l.start.x == 0.0 && l.end.x == w).count();
            let vertical = canvas.lines().filter(|l| l.start.y == 0.0 && l.end.y == h).count();
            assert_eq!(horizontal, rows as usize + 2);
            assert_eq!(vertical, cols as usize + 2);
            assert_eq!(canvas.circles().count(), 1);
        }
    }
}

#[test]
fn graph_center_anchor_formula() {
    let surface = SurfaceSize::try_new(700.0, 500.0).unwrap();
    for rows in 1..=7u32 {
        for cols in 1..=7u32 {
            let graph = Graph::new(rows, cols, "black", OriginAnchor::Center, GraphMode::Dots, &surface).unwrap();
            let grid = graph.grid();
            let expected = Point::new(
                f64::from(cols.div_ceil(2)) * grid.box_width(),
                f64::from(rows.div_ceil(2)) * grid.box_height(),
            );
            assert_eq!(graph.origin(), expected);
            assert_eq!(graph.origin_marker().center, expected);
        }
    }
}

#[test]
fn unknown_origin_draws_nothing() {
    let mut canvas = RecordingRenderer::new(640.0, 480.0);
    let result = Graph::from_names(4, 4, "black", "diagonal", "lines", &canvas).map(|g| g.draw(&mut canvas));

    let err = result.unwrap_err();
    assert!(err.is_invalid_configuration());
    assert!(err.to_string().contains("diagonal"));
    assert!(canvas.is_empty());
}

#[test]
fn zero_rows_draw_nothing() {
    let mut canvas = RecordingRenderer::new(640.0, 480.0);
    let result = Graph::new(0, 4, "black", OriginAnchor::Center, GraphMode::Lines, &canvas).map(|g| g.draw(&mut canvas));
    assert!(result.unwrap_err().is_invalid_configuration());
    assert!(canvas.is_empty());
}

#[test]
fn oversized_graph_draws_nothing() {
    let mut canvas = RecordingRenderer::new(640.0, 480.0);
    for mode in [GraphMode::Lines, GraphMode::Dots] {
        let result = Graph::new(u32::MAX, 1, "black", OriginAnchor::Center, mode, &canvas).map(|g| g.draw(&mut canvas));
        assert!(result.unwrap_err().is_invalid_configuration());
    }
    assert!(canvas.is_empty());
}
// =============================================================================

#[test]
fn arrow_emits_shaft_and_accent_head() {
    let mut canvas = RecordingRenderer::new(640.0, 480.0);
    Arrow::new(Point::new(10.0, 10.0), Point::new(110.0, 10.0), "blue", 3.0, 2)
        .unwrap()
        .draw(&mut canvas);

    insta::assert_snapshot!(canvas.dump().trim_end(), @r"
    line (10, 10) -> (110, 10) width=3 color=blue z=2
    triangle (113, 10) (100, 20) (100, 0) color=red z=2
    ");
}

#[test]
fn degenerate_arrow_draws_nothing() {
    let mut canvas = RecordingRenderer::new(640.0, 480.0);
    let p = Point::new(42.0, 42.0);
    let result = Arrow::new(p, p, "blue", 3.0, 2).map(|a| a.draw(&mut canvas));
    assert!(result.unwrap_err().is_degenerate_geometry());
    assert!(canvas.is_empty());
}

#[test]
fn arrows_over_extreme_spans_stay_finite() {
    let cases = [
        (Point::new(0.0, 0.0), Point::new(1e-200, 0.0)),
        (Point::new(-1e200, 0.0), Point::new(1e200, 0.0)),
        (Point::new(0.0, 1e-300), Point::new(1e-300, 0.0)),
    ];
    for (origin, finish) in cases {
        let mut canvas = RecordingRenderer::new(640.0, 480.0);
        Arrow::new(origin, finish, "blue", 1.0, 0).unwrap().draw(&mut canvas);
        let head = canvas.triangles().next().unwrap();
        assert!(head.points().iter().all(|p| p.is_finite()), "{origin} -> {finish}");
    }
}

#[test]
fn non_finite_builder_values_are_rejected() {
    let arrow = Arrow::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), "blue", 1.0, 0).unwrap();
    assert!(arrow.with_arrowhead_length(f64::NAN).unwrap_err().is_degenerate_geometry());

    let surface = SurfaceSize::try_new(200.0, 200.0).unwrap();
    let graph = Graph::new(4, 4, "gray", OriginAnchor::Center, GraphMode::Lines, &surface).unwrap();
    assert!(GraphVector::new(&graph, 1.0, 1.0, "blue")
        .unwrap()
        .with_line_width(f64::NAN)
        .unwrap_err()
        .is_degenerate_geometry());
    assert!(graph.with_line_width(f64::INFINITY).unwrap_err().is_degenerate_geometry());
}

// =============================================================================
// RotatableRectangle
// =============================================================================

#[test]
fn rectangle_example_quarter_turn() {
    let rect = RotatableRectangle::new(Point::new(100.0, 100.0), 40.0, 20.0, "black", 2.0, 0, 90.0).unwrap();
    assert!(rect.corners()[0].approx_eq(Point::new(110.0, 80.0), EPS));

    let mut canvas = RecordingRenderer::new(200.0, 200.0);
    rect.draw(&mut canvas);
    assert_eq!(canvas.lines().count(), 7);
}

#[test]
fn rectangle_full_turns_repeat() {
    for degrees in [0.0, 15.0, 90.0, 211.0] {
        let a = RotatableRectangle::new(Point::new(5.0, -5.0), 30.0, 12.0, "black", 4.0, 0, degrees).unwrap();
        let b = RotatableRectangle::new(Point::new(5.0, -5.0), 30.0, 12.0, "black", 4.0, 0, degrees + 360.0).unwrap();
        for (p, q) in a.corners().iter().zip(b.corners()) {
            assert!(p.approx_eq(*q, 1e-9), "{degrees}: {p} != {q}");
        }
    }
}

// =============================================================================
// Graph overlays
// =============================================================================

#[test]
fn vector_and_line_on_graph() {
    let mut canvas = RecordingRenderer::new(400.0, 400.0);
    let graph = Graph::new(10, 10, "gray", OriginAnchor::BottomLeft, GraphMode::Lines, &canvas).unwrap();
    let vector = GraphVector::new(&graph, 3.0, 4.0, "blue").unwrap();
    let line = GraphLine::new(&graph, 0.0, 5.0, 10.0, 5.0, "green").unwrap();

    graph.draw(&mut canvas);
    vector.draw(&mut canvas);
    line.draw(&mut canvas);

    let overlay: Vec<_> = canvas.lines().filter(|l| l.layer == 1).collect();
    assert_eq!(overlay.len(), 2);
    assert_eq!(overlay[0].start, Point::new(0.0, 400.0));
    assert_eq!(overlay[0].end, Point::new(120.0, 240.0));
    assert_eq!(overlay[1].start, Point::new(0.0, 200.0));
    assert_eq!(overlay[1].end, Point::new(400.0, 200.0));
    assert_eq!(canvas.triangles().count(), 1);
}

// =============================================================================
// Dispatch and SVG
// =============================================================================

#[test]
fn any_shape_dispatches_to_each_kind() {
    let surface = SurfaceSize::try_new(200.0, 100.0).unwrap();
    let graph = Graph::new(2, 2, "gray", OriginAnchor::Center, GraphMode::Dots, &surface).unwrap();
    let shapes: Vec<AnyShape> = vec![
        Grid::new(2, 2, "gray", &surface).unwrap().into(),
        Arrow::new(Point::new(0.0, 0.0), Point::new(50.0, 50.0), "blue", 1.0, 0).unwrap().into(),
        RotatableRectangle::new(Point::new(50.0, 50.0), 20.0, 10.0, "black", 1.0, 0, 30.0).unwrap().into(),
        GraphVector::new(&graph, 1.0, 0.0, "blue").unwrap().into(),
        GraphLine::new(&graph, 0.0, 0.0, 1.0, 0.0, "green").unwrap().into(),
        graph.into(),
    ];
    let counts: Vec<usize> = shapes.iter().map(|s| s.primitives().len()).collect();
    assert_eq!(counts, vec![4, 2, 7, 2, 1, 17]);

    let mut canvas = RecordingRenderer::new(200.0, 100.0);
    for shape in &shapes {
        shape.draw(&mut canvas);
    }
    assert_eq!(canvas.primitives().len(), counts.iter().sum::<usize>());
}

#[test]
fn svg_document_contains_every_primitive() {
    let mut svg = SvgRenderer::new(300.0, 200.0);
    let graph = Graph::new(2, 3, Color::Rgb(200, 200, 200), OriginAnchor::BottomLeft, GraphMode::Lines, &svg).unwrap();
    graph.draw(&mut svg);
    Arrow::new(Point::new(10.0, 190.0), Point::new(150.0, 50.0), "blue", 2.0, 2)
        .unwrap()
        .draw(&mut svg);

    let out = svg.to_svg_string();
    // 4 horizontal + 5 vertical + shaft
    assert_eq!(out.matches("<line").count(), 10);
    assert_eq!(out.matches("<polygon").count(), 1);
    assert_eq!(out.matches("<circle").count(), 1);
    assert!(out.contains("rgb(200,200,200)"));
    assert!(out.contains("lime"));
}

#[test]
fn primitives_match_what_draw_emits() {
    let surface = SurfaceSize::try_new(320.0, 240.0).unwrap();
    let graph = Graph::new(3, 4, "gray", OriginAnchor::TopRight, GraphMode::Lines, &surface).unwrap();
    let mut canvas = RecordingRenderer::new(320.0, 240.0);
    graph.draw(&mut canvas);
    assert_eq!(canvas.primitives(), graph.primitives().as_slice());
    assert!(matches!(canvas.primitives().last(), Some(Primitive::Circle(_))));
}
