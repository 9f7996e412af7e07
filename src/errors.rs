//! Error types with diagnostics using miette
//!
//! Every error is raised at construction time, before any primitive reaches a
//! renderer.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Invalid construction parameters for a grid or graph
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("grid needs at least one row")]
    #[diagnostic(code(gridsketch::config::zero_rows))]
    ZeroRows,

    #[error("grid needs at least one column")]
    #[diagnostic(code(gridsketch::config::zero_cols))]
    ZeroCols,

    #[error("unknown origin anchor: {value}")]
    #[diagnostic(
        code(gridsketch::config::unknown_origin),
        help("expected one of: bottom_left, top_left, top_right, bottom_right, center")
    )]
    UnknownOrigin { value: String },

    #[error("unknown graph mode: {value}")]
    #[diagnostic(
        code(gridsketch::config::unknown_mode),
        help("expected one of: lines, dots")
    )]
    UnknownMode { value: String },

    #[error("graph lattice for {rows} rows and {cols} columns is too large")]
    #[diagnostic(
        code(gridsketch::config::lattice_too_large),
        help("a graph draws one more line past each edge, so counts must leave room for two extra")
    )]
    LatticeTooLarge { rows: u32, cols: u32 },

    #[error("invalid surface {dimension}: {reason}")]
    #[diagnostic(code(gridsketch::config::invalid_surface))]
    InvalidSurface {
        dimension: &'static str,
        reason: NumericError,
    },
}

// ============================================================================
// Geometry Errors
// ============================================================================

/// Inputs whose geometry is undefined
#[derive(Error, Diagnostic, Debug)]
pub enum GeometryError {
    #[error("arrow origin and finish coincide at ({x}, {y})")]
    #[diagnostic(
        code(gridsketch::geometry::coincident_endpoints),
        help("an arrow needs two distinct points to have a direction")
    )]
    CoincidentEndpoints { x: f64, y: f64 },

    #[error("graph line points coincide at ({x}, {y})")]
    #[diagnostic(
        code(gridsketch::geometry::coincident_line_points),
        help("two distinct points are needed to define a line")
    )]
    CoincidentLinePoints { x: f64, y: f64 },

    #[error("graph vector has zero length")]
    #[diagnostic(code(gridsketch::geometry::zero_vector))]
    ZeroVector,

    #[error("non-finite {what}")]
    #[diagnostic(code(gridsketch::geometry::non_finite))]
    NonFinite { what: &'static str },
}

// ============================================================================
// Capture Errors
// ============================================================================

/// Errors while writing a rendered surface to disk
#[derive(Error, Diagnostic, Debug)]
pub enum CaptureError {
    #[error("failed to write screenshot to {}", path.display())]
    #[diagnostic(code(gridsketch::capture::write_failed))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Crate Error
// ============================================================================

/// Any error produced by this crate
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Capture(#[from] CaptureError),
}

impl Error {
    /// True for invalid row/column counts, anchors, modes and surfaces
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// True when the requested shape has no defined direction or extent
    pub fn is_degenerate_geometry(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
