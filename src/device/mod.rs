pub use crate::error::Error;
pub use burn::tensor::backend::Backend;

/// The devices a backend can run on.
pub trait DeviceProvider<B: Backend> {
    /// The preferred hardware-accelerated device, if any.
    fn accelerated(&self) -> Option<B::Device>;

    /// The device used when no accelerated device is available.
    #[inline]
    fn fallback(&self) -> B::Device {
        Default::default()
    }

    fn is_available(
        &self,
        device: &B::Device,
    ) -> bool;
}

/// No accelerated device, and only the default device is available.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DefaultDeviceProvider;

/// An explicit list of available devices.
///
/// ## Details
///
/// The first device of `accelerated` is preferred.
#[derive(Clone, Debug)]
pub struct DeviceList<B: Backend> {
    pub accelerated: Vec<B::Device>,
    pub fallback: B::Device,
}

#[derive(Clone, Debug, Default)]
pub enum DeviceSelection<B: Backend> {
    /// The accelerated device if available, otherwise the fallback device.
    #[default]
    Auto,
    /// The given device, which should be available.
    Explicit(B::Device),
}

impl<B: Backend> DeviceProvider<B> for DefaultDeviceProvider {
    #[inline]
    fn accelerated(&self) -> Option<B::Device> {
        None
    }

    #[inline]
    fn is_available(
        &self,
        device: &B::Device,
    ) -> bool {
        *device == B::Device::default()
    }
}

impl<B: Backend> DeviceProvider<B> for DeviceList<B> {
    #[inline]
    fn accelerated(&self) -> Option<B::Device> {
        self.accelerated.first().cloned()
    }

    #[inline]
    fn fallback(&self) -> B::Device {
        self.fallback.to_owned()
    }

    fn is_available(
        &self,
        device: &B::Device,
    ) -> bool {
        self.fallback == *device || self.accelerated.contains(device)
    }
}

impl<B: Backend> DeviceSelection<B> {
    pub fn select<P: DeviceProvider<B> + ?Sized>(
        self,
        provider: &P,
    ) -> Result<B::Device, Error> {
        let device = match self {
            Self::Auto => {
                provider.accelerated().unwrap_or_else(|| provider.fallback())
            },
            Self::Explicit(device) => {
                if !provider.is_available(&device) {
                    return Err(Error::UnavailableDevice(format!("{device:?}")));
                }
                device
            },
        };

        #[cfg(all(debug_assertions, not(test)))]
        log::debug!(
            target: "pu21_psnr::device",
            "DeviceSelection::select > {device:?}",
        );

        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn select_default() {
        use super::*;
        use burn::backend::{ndarray::NdArrayDevice, NdArray};

        let device = DeviceSelection::<NdArray>::Auto
            .select(&DefaultDeviceProvider)
            .unwrap();
        assert_eq!(device, NdArrayDevice::Cpu);

        let device = DeviceSelection::<NdArray>::Explicit(NdArrayDevice::Cpu)
            .select(&DefaultDeviceProvider)
            .unwrap();
        assert_eq!(device, NdArrayDevice::Cpu);
    }

    #[test]
    fn select_list() {
        use super::*;
        use burn::backend::{ndarray::NdArrayDevice, NdArray};

        let provider = DeviceList::<NdArray> {
            accelerated: vec![],
            fallback: NdArrayDevice::Cpu,
        };
        let device = DeviceSelection::Auto.select(&provider).unwrap();
        assert_eq!(device, NdArrayDevice::Cpu);

        let provider = DeviceList::<NdArray> {
            accelerated: vec![NdArrayDevice::Cpu],
            fallback: NdArrayDevice::Cpu,
        };
        let device = DeviceSelection::Auto.select(&provider).unwrap();
        assert_eq!(device, NdArrayDevice::Cpu);
    }

    #[test]
    fn select_unavailable() {
        use super::*;
        use burn::backend::{ndarray::NdArrayDevice, NdArray};

        #[derive(Debug)]
        struct Unavailable;

        impl DeviceProvider<NdArray> for Unavailable {
            fn accelerated(&self) -> Option<NdArrayDevice> {
                None
            }

            fn is_available(
                &self,
                _: &NdArrayDevice,
            ) -> bool {
                false
            }
        }

        let error = DeviceSelection::<NdArray>::Explicit(NdArrayDevice::Cpu)
            .select(&Unavailable)
            .unwrap_err();
        assert!(matches!(error, Error::UnavailableDevice(_)), "{error:?}");

        let device = DeviceSelection::<NdArray>::Auto.select(&Unavailable).unwrap();
        assert_eq!(device, NdArrayDevice::Cpu);
    }
}
