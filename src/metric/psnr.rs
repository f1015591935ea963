//! Peak signal-to-noise ratio (PSNR) metric.

pub use super::*;

/// Computing the peak signal-to-noise ratio (PSNR) between the inputs:
///
/// `20 * log10(peak / sqrt(MSE)) = 20 * log10(peak) - 10 / log(10) * log(MSE)`
///
/// ## Details
///
/// - It relies on [`MSE`](MeanSquareError).
/// - It is positive infinity if `MSE` is zero.
/// - It is computed in the float precision of the backend, which bounds
///   the precision of the score.
#[derive(Clone, Debug)]
pub struct PeakSignalNoiseRatio<B: Backend> {
    /// Coefficient for `log(MSE)`.
    pub coefficient: Tensor<B, 1>,
    /// Inner metric.
    pub mse: MeanSquareError,
    /// The peak value of the inputs.
    pub peak: f64,
}

impl<B: Backend> PeakSignalNoiseRatio<B> {
    /// Initialize the metric.
    pub fn init(
        peak: f64,
        device: &B::Device,
    ) -> Self {
        let ten = Tensor::<B, 1>::from_floats([10.0], device);
        let coefficient = ten.clone().neg().div(ten.log());
        let mse = MeanSquareError::init();
        Self {
            coefficient,
            mse,
            peak,
        }
    }
}

impl<B: Backend> Metric<B> for PeakSignalNoiseRatio<B> {
    /// ## Returns
    ///
    /// The peak signal-to-noise ratio (PSNR) in dB with shape `[1]`.
    #[inline]
    fn evaluate<const D: usize>(
        &self,
        value: Tensor<B, D>,
        target: Tensor<B, D>,
    ) -> Tensor<B, 1> {
        let mse = self.mse.evaluate(value, target);
        self.coefficient
            .to_owned()
            .mul(mse.log())
            .add_scalar(20.0 * self.peak.log10())
    }
}

impl<B: Backend> Default for PeakSignalNoiseRatio<B> {
    fn default() -> Self {
        Self::init(1.0, &Default::default())
    }
}
