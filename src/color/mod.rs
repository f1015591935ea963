pub use crate::error::Error;

use std::{fmt, str::FromStr};

/// The color space of display-encoded RGB content.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ColorSpace {
    #[default]
    Srgb,
    Bt709,
    Bt2020,
}

impl ColorSpace {
    /// The `Y` row of the linear RGB to XYZ matrix.
    pub const fn luminance_weights(&self) -> [f64; 3] {
        match self {
            Self::Srgb | Self::Bt709 => [0.2126729, 0.7151522, 0.0721750],
            Self::Bt2020 => [0.2627002, 0.6779981, 0.0593017],
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Srgb => "sRGB",
            Self::Bt709 => "BT.709",
            Self::Bt2020 => "BT.2020",
        }
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.to_ascii_lowercase().as_str() {
            "srgb" => Ok(Self::Srgb),
            "bt.709" | "bt709" => Ok(Self::Bt709),
            "bt.2020" | "bt2020" => Ok(Self::Bt2020),
            _ => Err(Error::UnknownColorSpace(label.into())),
        }
    }
}

impl fmt::Display for ColorSpace {
    #[inline]
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
