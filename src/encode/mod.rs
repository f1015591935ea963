pub mod pu21;

pub use crate::error::Error;
pub use burn::tensor::{backend::Backend, Tensor};
pub use pu21::*;
