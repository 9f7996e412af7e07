//! Default sizes, layers and the fixed accent colors

/// Stroke width of grid and graph lines
pub const GRID_LINE_WIDTH: f64 = 1.0;
/// Layer of grid and graph lines
pub const GRID_LAYER: i32 = 0;
/// Vertical grid lines always use this color, whatever the caller asked for
pub const GRID_ACCENT: &str = "lime";

/// Arrowhead length when the caller does not give one
pub const ARROWHEAD_LENGTH: f64 = 10.0;
/// Arrowheads are always painted in this color
pub const ARROWHEAD_ACCENT: &str = "red";

/// Side length of a graph lattice dot
pub const DOT_SIZE: f64 = 4.0;
/// Radius of the graph origin marker
pub const ORIGIN_MARKER_RADIUS: f64 = 5.0;
pub const ORIGIN_MARKER_ACCENT: &str = "red";

/// Stroke width of graph vectors and graph lines
pub const GRAPH_OVERLAY_WIDTH: f64 = 2.0;
/// Layer of graph vectors and graph lines, above the lattice
pub const GRAPH_OVERLAY_LAYER: i32 = 1;

/// Background fill of SVG documents
pub const SVG_BACKGROUND: &str = "white";
