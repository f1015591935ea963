//! Perceptually uniform (PU21) encoding of absolute luminance.

pub use super::*;

/// The variants of PU21 fitting.
///
/// *Mantiuk, R. K., & Azimi, M. (2021). PU21: A novel perceptually uniform encoding for adapting existing quality metrics for HDR. Picture Coding Symposium.*
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Pu21Type {
    Banding,
    #[default]
    BandingGlare,
    Peaks,
    PeaksGlare,
}

impl Pu21Type {
    /// The fitting parameters `[p0, p1, p2, p3, p4, p5, p6]`.
    pub const fn parameters(&self) -> [f64; 7] {
        match self {
            Self::Banding => [
                1.070275272,
                0.4088273932,
                0.153224308,
                0.2520326168,
                1.063512885,
                1.14115047,
                521.4527484,
            ],
            Self::BandingGlare => [
                0.353487901,
                0.3734658629,
                8.277049286e-05,
                0.9062562627,
                0.09150303166,
                0.9099517204,
                596.3148142,
            ],
            Self::Peaks => [
                1.043882782,
                0.6459495343,
                0.3194584211,
                0.374025247,
                1.114783422,
                1.095360363,
                384.9217577,
            ],
            Self::PeaksGlare => [
                816.885024,
                1479.463946,
                0.001253215609,
                0.9329636822,
                0.06746643971,
                1.573435413,
                419.6006374,
            ],
        }
    }
}

/// Encoding absolute luminance (cd/m^2) into PU21 code values:
///
/// `V = p6 * (((p0 + p1 * Y^p3) / (1 + p2 * Y^p3))^p4 - p5)`
///
/// ## Details
///
/// - The luminance is clamped to `[luminance_min, luminance_max]` before encoding.
/// - `peak` is the code value of `luminance_max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pu21Encoder {
    pub luminance_max: f64,
    pub luminance_min: f64,
    pub parameters: [f64; 7],
    pub peak: f64,
    pub r#type: Pu21Type,
}

impl Pu21Encoder {
    /// Initialize the encoder with [`Pu21Type::BandingGlare`].
    #[inline]
    pub fn init(
        luminance_min: f64,
        luminance_max: f64,
    ) -> Result<Self, Error> {
        Self::init_with_type(luminance_min, luminance_max, Default::default())
    }

    pub fn init_with_type(
        luminance_min: f64,
        luminance_max: f64,
        r#type: Pu21Type,
    ) -> Result<Self, Error> {
        if !luminance_min.is_finite()
            || !luminance_max.is_finite()
            || luminance_min <= 0.0
            || luminance_min >= luminance_max
        {
            return Err(Error::Config(format!(
                "PU21 luminance range should satisfy 0 < min < max, \
                 but got [{luminance_min}, {luminance_max}]"
            )));
        }

        let parameters = r#type.parameters();
        let peak = encode(&parameters, luminance_max);

        Ok(Self {
            luminance_max,
            luminance_min,
            parameters,
            peak,
            r#type,
        })
    }

    /// ## Arguments
    ///
    /// * `luminance` - Absolute luminance in cd/m^2 with any shape.
    ///
    /// ## Returns
    ///
    /// The PU21 code values with the same shape.
    pub fn encode<B: Backend, const D: usize>(
        &self,
        luminance: Tensor<B, D>,
    ) -> Tensor<B, D> {
        let [p0, p1, p2, p3, p4, p5, p6] = self.parameters;

        // Y^p3
        let y_p3 = luminance
            .clamp(self.luminance_min, self.luminance_max)
            .powf_scalar(p3);
        // (p0 + p1 * Y^p3) / (1 + p2 * Y^p3)
        let ratio = y_p3
            .to_owned()
            .mul_scalar(p1)
            .add_scalar(p0)
            .div(y_p3.mul_scalar(p2).add_scalar(1.0));

        ratio.powf_scalar(p4).sub_scalar(p5).mul_scalar(p6)
    }

    /// The inverse of [`Pu21Encoder::encode`] within the luminance range.
    pub fn decode<B: Backend, const D: usize>(
        &self,
        values: Tensor<B, D>,
    ) -> Tensor<B, D> {
        let [p0, p1, p2, p3, p4, p5, p6] = self.parameters;

        let ratio = values
            .div_scalar(p6)
            .add_scalar(p5)
            .clamp_min(0.0)
            .powf_scalar(p4.recip());
        let y_p3 = ratio
            .to_owned()
            .sub_scalar(p0)
            .clamp_min(0.0)
            .div(ratio.mul_scalar(-p2).add_scalar(p1));

        y_p3.powf_scalar(p3.recip())
    }

    #[inline]
    pub fn encode_scalar(
        &self,
        luminance: f64,
    ) -> f64 {
        encode(
            &self.parameters,
            luminance.clamp(self.luminance_min, self.luminance_max),
        )
    }

    pub fn decode_scalar(
        &self,
        value: f64,
    ) -> f64 {
        let [p0, p1, p2, p3, p4, p5, p6] = self.parameters;
        let ratio = (value / p6 + p5).max(0.0).powf(p4.recip());
        ((ratio - p0).max(0.0) / (p1 - p2 * ratio)).powf(p3.recip())
    }
}

fn encode(
    parameters: &[f64; 7],
    luminance: f64,
) -> f64 {
    let [p0, p1, p2, p3, p4, p5, p6] = *parameters;
    let y_p3 = luminance.powf(p3);
    p6 * (((p0 + p1 * y_p3) / (1.0 + p2 * y_p3)).powf(p4) - p5)
}
