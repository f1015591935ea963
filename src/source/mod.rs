pub mod array;
pub mod dim_order;
pub mod padding;

pub use crate::{color::ColorSpace, display::DisplayPhotometry, error::Error};
pub use array::*;
pub use burn::tensor::{backend::Backend, Tensor, TensorData};
pub use dim_order::*;
pub use padding::*;

/// The size of a video.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct VideoSize {
    pub frames: usize,
    pub height: usize,
    pub width: usize,
}

/// A source of paired test and reference frames.
///
/// ## Details
///
/// Each frame contains absolute linear luminance in cd/m^2 with shape `[1, 1, 1, H, W]`.
pub trait VideoSource<B: Backend> {
    fn video_size(&self) -> VideoSize;

    /// `0.0` for images.
    fn frames_per_second(&self) -> f64;

    fn test_frame(
        &self,
        index: usize,
        device: &B::Device,
    ) -> Result<Tensor<B, 5>, Error>;

    fn reference_frame(
        &self,
        index: usize,
        device: &B::Device,
    ) -> Result<Tensor<B, 5>, Error>;

    /// The test frame at any signed index, padded with `padding`.
    fn test_frame_padded(
        &self,
        index: isize,
        padding: FramePadding,
        device: &B::Device,
    ) -> Result<Tensor<B, 5>, Error> {
        let count = self.video_size().frames;
        if count == 0 {
            return Err(Error::EmptyVideo);
        }
        self.test_frame(padding.frame_index(index, count), device)
    }

    /// The reference frame at any signed index, padded with `padding`.
    fn reference_frame_padded(
        &self,
        index: isize,
        padding: FramePadding,
        device: &B::Device,
    ) -> Result<Tensor<B, 5>, Error> {
        let count = self.video_size().frames;
        if count == 0 {
            return Err(Error::EmptyVideo);
        }
        self.reference_frame(padding.frame_index(index, count), device)
    }
}
