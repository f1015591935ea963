//! A library to compute the perceptually uniform PSNR (PU21-PSNR) of images and videos

#![deny(rustdoc::broken_intra_doc_links)]
#![allow(clippy::excessive_precision)]

pub mod color;
pub mod device;
pub mod display;
pub mod encode;
pub mod error;
pub mod metric;
pub mod parameter;
pub mod source;

pub use metric::{PuPsnr, PuPsnrOptions, VideoQualityMetric};
