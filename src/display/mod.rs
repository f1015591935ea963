pub mod geometry;
pub mod models;
pub mod photometry;

pub use crate::error::Error;
pub use burn::tensor::{backend::Backend, Tensor};
pub use geometry::*;
pub use models::*;
pub use photometry::*;

use std::{fmt, sync::Arc};

/// The photometric model of a display.
pub trait DisplayPhotometry<B: Backend>: fmt::Debug + Send + Sync {
    /// The luminance floor in cd/m^2, including the reflected ambient light.
    fn black_level(&self) -> f64;

    /// The luminance ceiling in cd/m^2.
    fn peak_luminance(&self) -> f64;

    /// Mapping the pixel values to absolute linear luminance in cd/m^2.
    ///
    /// ## Arguments
    ///
    /// * `pixels` - The pixel values with shape `[B, C, F, H, W]`.
    fn forward(
        &self,
        pixels: Tensor<B, 5>,
    ) -> Tensor<B, 5>;
}

/// A resolved display.
#[derive(Clone, Debug)]
pub struct Display<B: Backend> {
    pub geometry: DisplayGeometry,
    pub photometry: Arc<dyn DisplayPhotometry<B>>,
}

/// Selecting a display either by name or by explicit models.
#[derive(Clone, Debug)]
pub enum DisplaySelection<B: Backend> {
    /// A named model looked up in `models`,
    /// or in [`DisplayModels::default`] if `models` is `None`.
    Preset {
        name: String,
        models: Option<DisplayModels>,
    },
    Explicit {
        geometry: DisplayGeometry,
        photometry: Arc<dyn DisplayPhotometry<B>>,
    },
}

impl<B: Backend> DisplaySelection<B> {
    #[inline]
    pub fn preset(name: impl Into<String>) -> Self {
        Self::Preset {
            name: name.into(),
            models: None,
        }
    }

    #[inline]
    pub fn preset_with_models(
        name: impl Into<String>,
        models: DisplayModels,
    ) -> Self {
        Self::Preset {
            name: name.into(),
            models: Some(models),
        }
    }

    #[inline]
    pub fn explicit(
        geometry: DisplayGeometry,
        photometry: impl DisplayPhotometry<B> + 'static,
    ) -> Self {
        Self::Explicit {
            geometry,
            photometry: Arc::new(photometry),
        }
    }

    pub fn resolve(self) -> Result<Display<B>, Error> {
        let display = match self {
            Self::Preset { name, models } => {
                let models = models.unwrap_or_default();
                let model = models.get(&name)?;
                Display {
                    geometry: model.geometry.to_owned(),
                    photometry: Arc::new(model.photometry.init()?),
                }
            },
            Self::Explicit {
                geometry,
                photometry,
            } => Display {
                geometry,
                photometry,
            },
        };

        #[cfg(all(debug_assertions, not(test)))]
        log::debug!(
            target: "pu21_psnr::display",
            "DisplaySelection::resolve > {:?}",
            display.photometry,
        );

        Ok(display)
    }
}

impl<B: Backend> Default for DisplaySelection<B> {
    #[inline]
    fn default() -> Self {
        Self::preset("standard_4k")
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn resolve_preset() {
        use super::*;
        use burn::backend::NdArray;

        let display = DisplaySelection::<NdArray>::default().resolve().unwrap();
        assert_eq!(display.photometry.peak_luminance(), 200.0);
        assert!(display.photometry.black_level() > 0.2);
        assert_eq!(display.geometry.resolution, [3840, 2160]);

        let error = DisplaySelection::<NdArray>::preset("standard_crt")
            .resolve()
            .unwrap_err();
        assert!(matches!(error, Error::UnknownDisplay(_)), "{error:?}");
    }

    #[test]
    fn resolve_preset_with_models() {
        use super::*;
        use burn::backend::NdArray;

        let mut models = DisplayModels::new();
        models.insert(
            "dim",
            DisplayModelConfig::new(
                DisplayGeometry::default(),
                DisplayPhotometryConfig::new(100.0, 50.0)
                    .with_ambient_illuminance(0.0),
            ),
        );

        let display =
            DisplaySelection::<NdArray>::preset_with_models("dim", models.to_owned())
                .resolve()
                .unwrap();
        assert_eq!(display.photometry.peak_luminance(), 50.0);
        assert_eq!(display.photometry.black_level(), 0.5);

        DisplaySelection::<NdArray>::preset_with_models("standard_4k", models)
            .resolve()
            .unwrap_err();

        let mut models = DisplayModels::new();
        models.insert(
            "invalid",
            DisplayModelConfig::new(
                DisplayGeometry::default(),
                DisplayPhotometryConfig::new(0.5, 50.0),
            ),
        );
        let error =
            DisplaySelection::<NdArray>::preset_with_models("invalid", models)
                .resolve()
                .unwrap_err();
        assert!(matches!(error, Error::Config(_)), "{error:?}");
    }

    #[test]
    fn resolve_explicit() {
        use super::*;
        use burn::backend::NdArray;

        let photometry = DisplayPhotometryConfig::new(200.0, 100.0)
            .with_ambient_illuminance(0.0)
            .with_eotf(Eotf::Linear)
            .init()
            .unwrap();
        let display = DisplaySelection::<NdArray>::explicit(
            DisplayGeometry::default(),
            photometry,
        )
        .resolve()
        .unwrap();
        assert_eq!(display.photometry.black_level(), 0.5);
        assert_eq!(display.photometry.peak_luminance(), 100.0);
    }
}
