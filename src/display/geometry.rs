//! Display geometry.

pub use burn::config::Config;

use std::ops::Mul;

#[derive(Config, Debug, PartialEq)]
pub struct DisplayGeometry {
    /// The diagonal size of the screen in inches.
    pub diagonal_inches: f64,

    /// The viewing distance in meters.
    pub distance_meters: f64,

    /// `[width, height]` in pixels.
    pub resolution: [usize; 2],
}

impl DisplayGeometry {
    /// The physical width of the screen in meters.
    pub fn width_meters(&self) -> f64 {
        const METERS_PER_INCH: f64 = 0.0254;

        let [width, height] = self.resolution.map(|size| size as f64);
        self.diagonal_inches * METERS_PER_INCH * width / width.hypot(height)
    }

    /// The angular resolution in pixels per visual degree,
    /// averaged over the screen width.
    pub fn pixels_per_degree(&self) -> f64 {
        let width = self.resolution[0] as f64;
        let field_of_view_x = (self.width_meters() / 2.0)
            .atan2(self.distance_meters)
            .mul(2.0)
            .to_degrees();
        width / field_of_view_x
    }
}

impl Default for DisplayGeometry {
    #[inline]
    fn default() -> Self {
        Self::new(30.0, 0.7472, [3840, 2160])
    }
}
