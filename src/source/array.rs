//! Video source of raw arrays.

pub use super::*;
pub use burn::tensor::{f16, DType};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// A [`VideoSource`] of raw test and reference arrays.
///
/// ## Details
///
/// - `test` and `reference` hold absolute luminance with shape `[1, 1, F, H, W]`.
#[derive(Clone, Debug)]
pub struct ArrayVideoSource<B: Backend> {
    pub frames_per_second: f64,
    pub reference: Tensor<B, 5>,
    pub test: Tensor<B, 5>,
}

impl<B: Backend> ArrayVideoSource<B> {
    /// ## Arguments
    ///
    /// * `test` - The test content ordered by `dim_order`.
    /// * `reference` - The reference content ordered by `dim_order`.
    /// * `frames_per_second` - `0.0` for images.
    /// * `dim_order` - The order of axes in the contents.
    /// * `photometry` - The display model mapping pixel values to luminance.
    /// * `color_space` - The color space of 3-channel contents.
    /// * `device` - The device to store the frames.
    ///
    /// ## Details
    ///
    /// - The supported data types are `u8` (scaled by `1 / 255`), `f16`, and `f32`.
    /// - The batch size should be `1`, and the channel count should be `1` or `3`.
    pub fn init(
        test: TensorData,
        reference: TensorData,
        frames_per_second: f64,
        dim_order: &DimOrder,
        photometry: &dyn DisplayPhotometry<B>,
        color_space: ColorSpace,
        device: &B::Device,
    ) -> Result<Self, Error> {
        if !(frames_per_second >= 0.0 && frames_per_second.is_finite()) {
            return Err(Error::InvalidFrameRate(frames_per_second));
        }

        let shape_test = dim_order.shape_canonical(&test.shape)?;
        let shape_reference = dim_order.shape_canonical(&reference.shape)?;
        if shape_test != shape_reference {
            return Err(Error::MismatchedShape(
                shape_test.into(),
                shape_reference.into(),
            ));
        }

        let [batch, channels, frames, height, width] = shape_test;
        if batch != 1 {
            return Err(Error::UnsupportedBatch(batch));
        }
        if channels != 1 && channels != 3 {
            return Err(Error::UnsupportedChannels(channels));
        }
        if frames == 0 || height == 0 || width == 0 {
            return Err(Error::EmptyVideo);
        }

        let into_canonical = |data: TensorData| -> Result<Vec<f32>, Error> {
            let shape = data.shape.to_owned();
            dim_order.to_canonical(&into_samples(data)?, &shape)
        };
        let (test, reference) = rayon::join(
            || into_canonical(test),
            || into_canonical(reference),
        );

        let into_luminance = |samples: Vec<f32>| {
            let pixels = Tensor::<B, 5>::from_data(
                TensorData::new(samples, shape_test),
                device,
            );
            let luminance = photometry.forward(pixels);

            if channels == 1 {
                return luminance;
            }

            // Y = w_r * R + w_g * G + w_b * B
            let [w_r, w_g, w_b] = color_space.luminance_weights();
            let channel = |index: usize| {
                luminance.to_owned().slice([
                    0..1,
                    index..index + 1,
                    0..frames,
                    0..height,
                    0..width,
                ])
            };
            channel(0).mul_scalar(w_r)
                + channel(1).mul_scalar(w_g)
                + channel(2).mul_scalar(w_b)
        };

        let test = into_luminance(test?);
        let reference = into_luminance(reference?);

        #[cfg(all(debug_assertions, not(test)))]
        log::debug!(
            target: "pu21_psnr::source::array",
            "ArrayVideoSource::init > [{frames}, {height}, {width}] from {dim_order}",
        );

        Ok(Self {
            frames_per_second,
            reference,
            test,
        })
    }
}

impl<B: Backend> VideoSource<B> for ArrayVideoSource<B> {
    #[inline]
    fn video_size(&self) -> VideoSize {
        let [_, _, frames, height, width] = self.test.dims();
        VideoSize {
            frames,
            height,
            width,
        }
    }

    #[inline]
    fn frames_per_second(&self) -> f64 {
        self.frames_per_second
    }

    #[inline]
    fn test_frame(
        &self,
        index: usize,
        device: &B::Device,
    ) -> Result<Tensor<B, 5>, Error> {
        get_frame(&self.test, index, device)
    }

    #[inline]
    fn reference_frame(
        &self,
        index: usize,
        device: &B::Device,
    ) -> Result<Tensor<B, 5>, Error> {
        get_frame(&self.reference, index, device)
    }
}

fn get_frame<B: Backend>(
    video: &Tensor<B, 5>,
    index: usize,
    device: &B::Device,
) -> Result<Tensor<B, 5>, Error> {
    let [_, _, frames, height, width] = video.dims();
    if index >= frames {
        return Err(Error::FrameOutOfRange(index, frames));
    }

    Ok(video
        .to_owned()
        .slice([0..1, 0..1, index..index + 1, 0..height, 0..width])
        .to_device(device))
}

fn into_samples(data: TensorData) -> Result<Vec<f32>, Error> {
    let samples = match data.dtype {
        DType::U8 => data.as_slice::<u8>().map(|values| {
            values.par_iter().map(|&value| value as f32 / 255.0).collect()
        }),
        DType::F16 => data.as_slice::<f16>().map(|values| {
            values.par_iter().map(|value| value.to_f32()).collect()
        }),
        DType::F32 => data.as_slice::<f32>().map(<[f32]>::to_vec),
        dtype => {
            return Err(Error::UnsupportedDataType(format!("{dtype:?}")));
        },
    };

    samples.map_err(|error| Error::UnsupportedDataType(format!("{error:?}")))
}
