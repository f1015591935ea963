pub use crate::error::Error;

use std::collections::BTreeMap;

/// A static table of named calibration constants.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterTable {
    pub values: BTreeMap<String, f64>,
}

/// The calibration constants of PU21-PSNR.
///
/// ## Details
///
/// They map the score linearly to the JOD scale as `score * scale + shift`,
/// which is not applied to the reported score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuPsnrParameters {
    pub scale: f64,
    pub shift: f64,
}

impl ParameterTable {
    /// An empty table.
    #[inline]
    pub fn new() -> Self {
        Self {
            values: Default::default(),
        }
    }

    pub fn get(
        &self,
        key: &str,
    ) -> Result<f64, Error> {
        self.values
            .get(key)
            .copied()
            .ok_or_else(|| Error::MissingParameter(key.into()))
    }

    #[inline]
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: f64,
    ) -> &mut Self {
        self.values.insert(key.into(), value);
        self
    }
}

impl PuPsnrParameters {
    pub const KEY_SCALE: &'static str = "pu_psnr_scale";
    pub const KEY_SHIFT: &'static str = "pu_psnr_shift";

    pub fn load(table: &ParameterTable) -> Result<Self, Error> {
        Ok(Self {
            scale: table.get(Self::KEY_SCALE)?,
            shift: table.get(Self::KEY_SHIFT)?,
        })
    }
}

impl Default for ParameterTable {
    /// The built-in table.
    fn default() -> Self {
        let mut table = Self::new();
        table
            .insert(PuPsnrParameters::KEY_SCALE, 0.1758)
            .insert(PuPsnrParameters::KEY_SHIFT, 3.2064);
        table
    }
}
