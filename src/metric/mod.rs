pub mod mse;
pub mod psnr;
pub mod pu_psnr;

pub use mse::*;
pub use psnr::*;
pub use pu_psnr::*;

pub use burn::tensor::{backend::Backend, Tensor};

pub trait Metric<B: Backend> {
    /// Evaluate the value against the target.
    ///
    /// ## Returns
    ///
    /// The metric value with shape `[1]`.
    fn evaluate<const D: usize>(
        &self,
        value: Tensor<B, D>,
        target: Tensor<B, D>,
    ) -> Tensor<B, 1>;
}
