#[cfg(test)]
#[path = "../tests/unit/projection_test.rs"]
mod projection_test;

use vrp_viewer_core::models::Dataset;

/// A point in canvas pixels, y axis points down.
pub type CanvasPoint = (f64, f64);

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;
/// Default amount of pixels per logical unit.
pub const DEFAULT_SCALE: f64 = 4.;

const FIT_MARGIN: f64 = 20.;

/// Maps a logical coordinate (y up) to canvas pixels (y down).
pub fn project(x: f64, y: f64, scale: f64, canvas_height: f64) -> CanvasPoint {
    (x * scale, canvas_height - y * scale)
}

/// Maps canvas pixels back to a logical coordinate. The inverse of [`project`].
pub fn unproject(px: f64, py: f64, scale: f64, canvas_height: f64) -> (f64, f64) {
    (px / scale, (canvas_height - py) / scale)
}

/// Keeps projection parameters of a canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Pixels per logical unit.
    pub scale: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
}

impl Projection {
    /// Creates a new instance of `Projection`.
    pub fn new(scale: f64, canvas_height: f64) -> Self {
        Self { scale, canvas_height }
    }

    /// Picks the largest scale which keeps every customer of the dataset inside the canvas with a small margin.
    ///
    /// Only positive extents are considered as the projection has no offset. Falls back to the default scale
    /// when nothing has a positive coordinate.
    pub fn fit(dataset: &Dataset, width: u32, height: u32) -> Self {
        let (max_x, max_y) = dataset
            .customers
            .iter()
            .fold((0_f64, 0_f64), |(max_x, max_y), customer| (max_x.max(customer.x), max_y.max(customer.y)));

        let limit = |extent: f64, size: u32| (extent > 0.).then(|| (size as f64 - FIT_MARGIN).max(1.) / extent);

        let scale = match (limit(max_x, width), limit(max_y, height)) {
            (Some(scale_x), Some(scale_y)) => scale_x.min(scale_y),
            (Some(scale), None) | (None, Some(scale)) => scale,
            (None, None) => DEFAULT_SCALE,
        };

        Self { scale, canvas_height: height as f64 }
    }

    /// Projects a logical coordinate.
    pub fn project(&self, (x, y): (f64, f64)) -> CanvasPoint {
        project(x, y, self.scale, self.canvas_height)
    }

    /// Converts canvas pixels into a logical coordinate.
    pub fn unproject(&self, (px, py): CanvasPoint) -> (f64, f64) {
        unproject(px, py, self.scale, self.canvas_height)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self { scale: DEFAULT_SCALE, canvas_height: DEFAULT_CANVAS_HEIGHT as f64 }
    }
}
