//! Perceptually uniform peak signal-to-noise ratio (PU21-PSNR) metric.

pub use super::*;
pub use crate::{
    color::ColorSpace,
    device::{DefaultDeviceProvider, DeviceProvider, DeviceSelection},
    display::{Display, DisplaySelection},
    encode::Pu21Encoder,
    error::Error,
    parameter::{ParameterTable, PuPsnrParameters},
    source::{
        ArrayVideoSource, DimOrder, FramePadding, VideoSize, VideoSource,
    },
};
pub use burn::tensor::{ElementConversion, TensorData};

use std::fmt;

/// A full-reference quality metric of images and videos.
pub trait VideoQualityMetric<B: Backend> {
    /// Predicting the quality of the test frames against the reference frames.
    fn predict_video_source(
        &self,
        source: &dyn VideoSource<B>,
        fixation_point: Option<[f64; 2]>,
        frame_padding: FramePadding,
    ) -> Result<Prediction<B>, Error>;

    /// The label of the metric.
    fn short_name(&self) -> &'static str;

    /// The unit of the predicted score.
    fn quality_unit(&self) -> &'static str;

    /// The supplementary information of the metric.
    fn info_string(&self) -> Option<String>;
}

/// The output of [`VideoQualityMetric`].
#[derive(Clone, Debug)]
pub struct Prediction<B: Backend> {
    /// The quality score.
    pub score: f64,
    /// The per-pixel distortion map with shape `[1, 1, F, H, W]`, if any.
    pub map: Option<Tensor<B, 5>>,
}

/// The options to initialize [`PuPsnr`].
#[derive(Clone, Debug)]
pub struct PuPsnrOptions<B: Backend> {
    pub color_space: ColorSpace,
    pub device: DeviceSelection<B>,
    pub display: DisplaySelection<B>,
    pub parameters: ParameterTable,
}

/// Computing the PSNR between the inputs encoded by PU21:
///
/// `20 * log10(PU(L_peak) / sqrt(mean((PU(L_test) - PU(L_reference)) ^ 2)))`
///
/// ## Details
///
/// - The luminance range of PU21 is the black level and the peak luminance of the display.
/// - Identical inputs score positive infinity.
/// - [`PuPsnrParameters`] are loaded but not applied to the score.
#[derive(Clone)]
pub struct PuPsnr<B: Backend> {
    pub color_space: ColorSpace,
    pub device: B::Device,
    pub display: Display<B>,
    pub encoder: Pu21Encoder,
    pub parameters: PuPsnrParameters,
    pub psnr: PeakSignalNoiseRatio<B>,
}

impl<B: Backend> PuPsnrOptions<B> {
    #[inline]
    pub fn new() -> Self {
        Self {
            color_space: Default::default(),
            device: Default::default(),
            display: Default::default(),
            parameters: Default::default(),
        }
    }

    #[inline]
    pub fn with_color_space(
        mut self,
        color_space: ColorSpace,
    ) -> Self {
        self.color_space = color_space;
        self
    }

    #[inline]
    pub fn with_device(
        mut self,
        device: DeviceSelection<B>,
    ) -> Self {
        self.device = device;
        self
    }

    #[inline]
    pub fn with_display(
        mut self,
        display: DisplaySelection<B>,
    ) -> Self {
        self.display = display;
        self
    }

    #[inline]
    pub fn with_parameters(
        mut self,
        parameters: ParameterTable,
    ) -> Self {
        self.parameters = parameters;
        self
    }

    #[inline]
    pub fn init<P: DeviceProvider<B> + ?Sized>(
        self,
        provider: &P,
    ) -> Result<PuPsnr<B>, Error> {
        PuPsnr::init(self, provider)
    }
}

impl<B: Backend> PuPsnr<B> {
    pub const QUALITY_UNIT: &'static str = "dB";
    pub const SHORT_NAME: &'static str = "PU21-PSNR";

    /// Initialize the metric.
    ///
    /// ## Details
    ///
    /// The display, the parameters, and the device are resolved once here.
    pub fn init<P: DeviceProvider<B> + ?Sized>(
        options: PuPsnrOptions<B>,
        provider: &P,
    ) -> Result<Self, Error> {
        let display = options.display.resolve()?;
        let parameters = PuPsnrParameters::load(&options.parameters)?;
        let device = options.device.select(provider)?;
        let encoder = Pu21Encoder::init(
            display.photometry.black_level(),
            display.photometry.peak_luminance(),
        )?;
        let psnr = PeakSignalNoiseRatio::init(encoder.peak, &device);

        #[cfg(all(debug_assertions, not(test)))]
        log::debug!(
            target: "pu21_psnr::metric::pu_psnr",
            "PuPsnr::init > luminance [{}, {}] on {device:?}",
            encoder.luminance_min,
            encoder.luminance_max,
        );

        Ok(Self {
            color_space: options.color_space,
            device,
            display,
            encoder,
            parameters,
            psnr,
        })
    }

    /// Predicting the quality of raw test and reference contents.
    ///
    /// ## Arguments
    ///
    /// * `test` - The test content with data type `u8`, `f16`, or `f32`.
    /// * `reference` - The reference content with the same shape as `test`.
    /// * `dim_order` - The order of axes in the contents, e.g. `"HW"`, `"HWC"`, or `"BCFHW"`.
    /// * `frames_per_second` - `0.0` for images.
    /// * `fixation_point` - Not used by this metric.
    /// * `frame_padding` - The policy to pad frames before the first frame.
    ///
    /// ## Details
    ///
    /// Depending on the display model, the pixel values should be either
    /// display-encoded or absolute linear.
    pub fn predict(
        &self,
        test: TensorData,
        reference: TensorData,
        dim_order: &str,
        frames_per_second: f64,
        fixation_point: Option<[f64; 2]>,
        frame_padding: FramePadding,
    ) -> Result<Prediction<B>, Error> {
        let source = ArrayVideoSource::init(
            test,
            reference,
            frames_per_second,
            &dim_order.parse::<DimOrder>()?,
            self.display.photometry.as_ref(),
            self.color_space,
            &self.device,
        )?;

        self.predict_video_source(&source, fixation_point, frame_padding)
    }

    /// Encoding all frames of the source into the PU21 domain.
    ///
    /// ## Returns
    ///
    /// The encoded test and reference frames with shape `[1, 1, F, H, W]`.
    pub fn encode_video_source(
        &self,
        source: &dyn VideoSource<B>,
        frame_padding: FramePadding,
    ) -> Result<(Tensor<B, 5>, Tensor<B, 5>), Error> {
        let VideoSize {
            frames,
            height,
            width,
        } = source.video_size();
        if frames == 0 {
            return Err(Error::EmptyVideo);
        }

        let shape = [1, 1, 1, height, width];
        let check_shape = |frame: Tensor<B, 5>| {
            let dims = frame.dims();
            if dims != shape {
                return Err(Error::MismatchedShape(dims.into(), shape.into()));
            }
            Ok(frame)
        };

        let test = (0..frames as isize)
            .map(|index| {
                source
                    .test_frame_padded(index, frame_padding, &self.device)
                    .and_then(check_shape)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let reference = (0..frames as isize)
            .map(|index| {
                source
                    .reference_frame_padded(index, frame_padding, &self.device)
                    .and_then(check_shape)
            })
            .collect::<Result<Vec<_>, _>>()?;

        // [1, 1, F, H, W]
        let test = Tensor::cat(test, 2);
        let reference = Tensor::cat(reference, 2);

        Ok((self.encoder.encode(test), self.encoder.encode(reference)))
    }
}

impl<B: Backend> VideoQualityMetric<B> for PuPsnr<B> {
    fn predict_video_source(
        &self,
        source: &dyn VideoSource<B>,
        fixation_point: Option<[f64; 2]>,
        frame_padding: FramePadding,
    ) -> Result<Prediction<B>, Error> {
        let _ = fixation_point;

        let (test, reference) =
            self.encode_video_source(source, frame_padding)?;
        let score = self
            .psnr
            .evaluate(test, reference)
            .into_scalar()
            .elem::<f64>();

        #[cfg(all(debug_assertions, not(test)))]
        log::debug!(
            target: "pu21_psnr::metric::pu_psnr",
            "PuPsnr::predict_video_source > {score} {}",
            Self::QUALITY_UNIT,
        );

        Ok(Prediction { score, map: None })
    }

    #[inline]
    fn short_name(&self) -> &'static str {
        Self::SHORT_NAME
    }

    #[inline]
    fn quality_unit(&self) -> &'static str {
        Self::QUALITY_UNIT
    }

    #[inline]
    fn info_string(&self) -> Option<String> {
        None
    }
}

impl<B: Backend> fmt::Debug for PuPsnr<B> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("PuPsnr")
            .field("color_space", &self.color_space)
            .field("device", &self.device)
            .field("display", &self.display)
            .field("encoder", &self.encoder)
            .field("parameters", &self.parameters)
            .finish()
    }
}

impl<B: Backend> Default for PuPsnrOptions<B> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
