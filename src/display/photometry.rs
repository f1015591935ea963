//! Gain-offset-gamma display photometry.

pub use super::*;
pub use burn::config::Config;

use std::f64::consts::PI;

/// The electro-optical transfer function of a display.
#[derive(Config, Copy, Debug, PartialEq)]
pub enum Eotf {
    /// Piecewise sRGB curve on display-encoded values in `[0, 1]`.
    Srgb,
    /// Power curve on display-encoded values in `[0, 1]`.
    Gamma(f64),
    /// SMPTE ST 2084 on display-encoded values in `[0, 1]`.
    Pq,
    /// Absolute linear values in cd/m^2.
    Linear,
}

#[derive(Config, Debug, PartialEq)]
pub struct DisplayPhotometryConfig {
    /// The ambient illuminance in lux.
    #[config(default = "250.0")]
    pub ambient_illuminance: f64,

    /// The ratio of peak luminance to black level in a dark room.
    pub contrast: f64,

    #[config(default = "Eotf::Srgb")]
    pub eotf: Eotf,

    /// The peak luminance in cd/m^2.
    pub peak_luminance: f64,

    /// The reflectivity of the screen surface.
    #[config(default = "0.005")]
    pub reflectivity: f64,
}

/// The gain-offset-gamma (GOG) display model:
///
/// `L = (L_peak - L_black) * EOTF(V) + L_black + L_refl`
///
/// ## Details
///
/// - `L_black = L_peak / contrast`
/// - `L_refl = E_ambient / pi * reflectivity`
#[derive(Clone, Debug, PartialEq)]
pub struct GainOffsetGamma {
    pub config: DisplayPhotometryConfig,
    pub luminance_black: f64,
    pub luminance_reflected: f64,
}

impl DisplayPhotometryConfig {
    pub fn init(&self) -> Result<GainOffsetGamma, Error> {
        if !(self.peak_luminance > 0.0 && self.peak_luminance.is_finite()) {
            return Err(Error::Config(format!(
                "peak_luminance should be positive, but got {}",
                self.peak_luminance
            )));
        }
        if !(self.contrast > 1.0 && self.contrast.is_finite()) {
            return Err(Error::Config(format!(
                "contrast should be greater than 1, but got {}",
                self.contrast
            )));
        }
        if !(self.ambient_illuminance >= 0.0 && self.reflectivity >= 0.0) {
            return Err(Error::Config(
                "ambient_illuminance and reflectivity should be non-negative"
                    .into(),
            ));
        }
        if let Eotf::Gamma(gamma) = self.eotf {
            if !(gamma > 0.0) {
                return Err(Error::Config(format!(
                    "gamma should be positive, but got {gamma}"
                )));
            }
        }

        Ok(GainOffsetGamma {
            config: self.to_owned(),
            luminance_black: self.peak_luminance / self.contrast,
            luminance_reflected: self.ambient_illuminance / PI
                * self.reflectivity,
        })
    }
}

impl<B: Backend> DisplayPhotometry<B> for GainOffsetGamma {
    #[inline]
    fn black_level(&self) -> f64 {
        self.luminance_black + self.luminance_reflected
    }

    #[inline]
    fn peak_luminance(&self) -> f64 {
        self.config.peak_luminance
    }

    fn forward(
        &self,
        pixels: Tensor<B, 5>,
    ) -> Tensor<B, 5> {
        let peak = self.config.peak_luminance;
        let black = self.luminance_black;
        let reflected = self.luminance_reflected;

        match self.config.eotf {
            Eotf::Srgb => srgb_to_linear(pixels.clamp(0.0, 1.0))
                .mul_scalar(peak - black)
                .add_scalar(black + reflected),
            Eotf::Gamma(gamma) => pixels
                .clamp(0.0, 1.0)
                .powf_scalar(gamma)
                .mul_scalar(peak - black)
                .add_scalar(black + reflected),
            Eotf::Pq => pq_to_linear(pixels.clamp(0.0, 1.0))
                .clamp(black, peak)
                .add_scalar(reflected),
            Eotf::Linear => pixels.clamp(black, peak).add_scalar(reflected),
        }
    }
}

pub fn srgb_to_linear<B: Backend, const D: usize>(
    values: Tensor<B, D>
) -> Tensor<B, D> {
    let mask = values.to_owned().lower_equal_elem(0.04045);
    let low = values.to_owned().div_scalar(12.92);
    let high = values.add_scalar(0.055).div_scalar(1.055).powf_scalar(2.4);
    high.mask_where(mask, low)
}

/// SMPTE ST 2084 to absolute luminance in cd/m^2.
pub fn pq_to_linear<B: Backend, const D: usize>(
    values: Tensor<B, D>
) -> Tensor<B, D> {
    const M1: f64 = 2610.0 / 16384.0;
    const M2: f64 = 2523.0 / 4096.0 * 128.0;
    const C1: f64 = 3424.0 / 4096.0;
    const C2: f64 = 2413.0 / 4096.0 * 32.0;
    const C3: f64 = 2392.0 / 4096.0 * 32.0;
    const LUMINANCE_MAX: f64 = 10000.0;

    let values_m2 = values.powf_scalar(M2.recip());
    let numerator = values_m2.to_owned().sub_scalar(C1).clamp_min(0.0);
    let denominator = values_m2.mul_scalar(-C3).add_scalar(C2);
    numerator
        .div(denominator)
        .powf_scalar(M1.recip())
        .mul_scalar(LUMINANCE_MAX)
}

impl Default for DisplayPhotometryConfig {
    #[inline]
    fn default() -> Self {
        Self::new(1000.0, 200.0)
    }
}
