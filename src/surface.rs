//! Surface dimensions.
//!
//! Every shape is computed against an explicit surface so no global window
//! state is needed; renderers are surfaces, and so is a bare [`SurfaceSize`].

use crate::errors::{ConfigError, Result};
use crate::types::check_positive;

/// Something with a queryable drawing area
pub trait Surface {
    fn surface_width(&self) -> f64;
    fn surface_height(&self) -> f64;
}

/// Plain surface dimensions, for computing geometry without a renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    /// Create surface dimensions with validation (finite and positive)
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        let size = SurfaceSize { width, height };
        validate(&size)?;
        Ok(size)
    }
}

impl Surface for SurfaceSize {
    fn surface_width(&self) -> f64 {
        self.width
    }

    fn surface_height(&self) -> f64 {
        self.height
    }
}

impl<S: Surface + ?Sized> Surface for &S {
    fn surface_width(&self) -> f64 {
        (**self).surface_width()
    }

    fn surface_height(&self) -> f64 {
        (**self).surface_height()
    }
}

/// Query both dimensions, rejecting NaN, infinite, zero or negative values.
pub(crate) fn validate(surface: &dyn Surface) -> Result<(f64, f64)> {
    let width = check_positive(surface.surface_width()).map_err(|reason| ConfigError::InvalidSurface {
        dimension: "width",
        reason,
    })?;
    let height = check_positive(surface.surface_height()).map_err(|reason| ConfigError::InvalidSurface {
        dimension: "height",
        reason,
    })?;
    Ok((width, height))
}
