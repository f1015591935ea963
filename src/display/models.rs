//! Named display models.

pub use super::*;

use std::collections::BTreeMap;

#[derive(Config, Debug, PartialEq)]
pub struct DisplayModelConfig {
    pub geometry: DisplayGeometry,
    pub photometry: DisplayPhotometryConfig,
}

/// A map of display names to [`DisplayModelConfig`].
///
/// ## Details
///
/// [`DisplayModels::default`] holds the built-in models:
///
/// - `standard_4k`: 30-inch 4K SDR monitor seen from 0.7472 m
/// - `standard_fhd`: 24-inch full HD SDR monitor seen from 0.6 m
/// - `standard_hdr_pq`: 30-inch 4K HDR monitor with PQ-encoded input
/// - `standard_hdr_linear`: 30-inch 4K HDR monitor with absolute linear input
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayModels {
    pub models: BTreeMap<String, DisplayModelConfig>,
}

impl DisplayModels {
    /// An empty map without built-in models.
    #[inline]
    pub fn new() -> Self {
        Self {
            models: Default::default(),
        }
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Result<&DisplayModelConfig, Error> {
        self.models
            .get(name)
            .ok_or_else(|| Error::UnknownDisplay(name.into()))
    }

    #[inline]
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        model: DisplayModelConfig,
    ) -> &mut Self {
        self.models.insert(name.into(), model);
        self
    }

    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }
}

impl Default for DisplayModels {
    fn default() -> Self {
        let geometry_4k = DisplayGeometry::new(30.0, 0.7472, [3840, 2160]);
        let geometry_fhd = DisplayGeometry::new(24.0, 0.6, [1920, 1080]);
        let photometry_sdr = DisplayPhotometryConfig::new(1000.0, 200.0);
        let photometry_hdr = DisplayPhotometryConfig::new(1e6, 1500.0)
            .with_ambient_illuminance(10.0);

        let mut models = Self::new();
        models
            .insert(
                "standard_4k",
                DisplayModelConfig::new(
                    geometry_4k.to_owned(),
                    photometry_sdr.to_owned(),
                ),
            )
            .insert(
                "standard_fhd",
                DisplayModelConfig::new(geometry_fhd, photometry_sdr),
            )
            .insert(
                "standard_hdr_pq",
                DisplayModelConfig::new(
                    geometry_4k.to_owned(),
                    photometry_hdr.to_owned().with_eotf(Eotf::Pq),
                ),
            )
            .insert(
                "standard_hdr_linear",
                DisplayModelConfig::new(
                    geometry_4k,
                    photometry_hdr.with_eotf(Eotf::Linear),
                ),
            );
        models
    }
}
