//! Dimension order of raw content.

pub use super::*;

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::{fmt, str::FromStr};

/// An axis of raw content.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Axis {
    Batch,
    Channel,
    Frame,
    Height,
    Width,
}

/// The order of axes in raw content, e.g. `"HW"`, `"HWC"`, or `"FCHW"`.
///
/// ## Details
///
/// - The letters are `B`, `C`, `F`, `H`, and `W`, each at most once.
/// - `H` and `W` are required.
/// - The canonical order is `"BCFHW"`, which is the default.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DimOrder {
    pub axes: Vec<Axis>,
}

impl Axis {
    pub const CANONICAL: [Axis; 5] = [
        Axis::Batch,
        Axis::Channel,
        Axis::Frame,
        Axis::Height,
        Axis::Width,
    ];

    #[inline]
    pub const fn canonical_index(&self) -> usize {
        match self {
            Self::Batch => 0,
            Self::Channel => 1,
            Self::Frame => 2,
            Self::Height => 3,
            Self::Width => 4,
        }
    }

    #[inline]
    pub const fn letter(&self) -> char {
        match self {
            Self::Batch => 'B',
            Self::Channel => 'C',
            Self::Frame => 'F',
            Self::Height => 'H',
            Self::Width => 'W',
        }
    }

    #[inline]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::CANONICAL
            .into_iter()
            .find(|axis| axis.letter() == letter.to_ascii_uppercase())
    }
}

impl DimOrder {
    #[inline]
    pub fn rank(&self) -> usize {
        self.axes.len()
    }

    /// The axes in the given order followed by the missing axes in canonical order.
    pub fn axes_extended(&self) -> [Axis; 5] {
        let mut axes = Axis::CANONICAL;
        let missing = Axis::CANONICAL
            .into_iter()
            .filter(|axis| !self.axes.contains(axis));
        self.axes
            .iter()
            .copied()
            .chain(missing)
            .zip(axes.iter_mut())
            .for_each(|(axis, target)| *target = axis);
        axes
    }

    /// The shape of content with the missing axes appended as singletons.
    pub fn shape_extended(
        &self,
        shape: &[usize],
    ) -> Result<[usize; 5], Error> {
        self.check_rank(shape)?;

        let mut shape_extended = [1; 5];
        shape_extended[..shape.len()].copy_from_slice(shape);
        Ok(shape_extended)
    }

    /// The shape of content in canonical order `[B, C, F, H, W]`.
    pub fn shape_canonical(
        &self,
        shape: &[usize],
    ) -> Result<[usize; 5], Error> {
        self.check_rank(shape)?;

        let mut shape_canonical = [1; 5];
        self.axes.iter().zip(shape).for_each(|(axis, &size)| {
            shape_canonical[axis.canonical_index()] = size;
        });
        Ok(shape_canonical)
    }

    /// The permutation from the extended shape to the canonical shape.
    ///
    /// ## Details
    ///
    /// The `i`-th canonical axis is the `permutation[i]`-th extended axis.
    pub fn permutation(&self) -> [usize; 5] {
        let axes_extended = self.axes_extended();
        Axis::CANONICAL.map(|axis| {
            axes_extended
                .iter()
                .position(|&axis_extended| axis_extended == axis)
                .unwrap_or(axis.canonical_index())
        })
    }

    /// Reordering the row-major values of content into canonical order.
    ///
    /// ## Returns
    ///
    /// The row-major values with shape [`DimOrder::shape_canonical`].
    pub fn to_canonical<T: Copy + Send + Sync>(
        &self,
        values: &[T],
        shape: &[usize],
    ) -> Result<Vec<T>, Error> {
        let shape_extended = self.shape_extended(shape)?;
        if values.len() != shape_extended.iter().product::<usize>() {
            return Err(Error::MismatchedShape(
                vec![values.len()],
                shape.to_vec(),
            ));
        }

        let mut strides_extended = [1; 5];
        (0..4).rev().for_each(|axis| {
            strides_extended[axis] =
                strides_extended[axis + 1] * shape_extended[axis + 1];
        });

        let permutation = self.permutation();
        let shape_canonical = permutation.map(|axis| shape_extended[axis]);
        let strides = permutation.map(|axis| strides_extended[axis]);

        Ok((0..values.len())
            .into_par_iter()
            .map(|index| {
                let (offset, _) = (0..5).rev().fold(
                    (0, index),
                    |(offset, rest), axis| {
                        let size = shape_canonical[axis];
                        (offset + rest % size * strides[axis], rest / size)
                    },
                );
                values[offset]
            })
            .collect())
    }

    fn check_rank(
        &self,
        shape: &[usize],
    ) -> Result<(), Error> {
        if shape.len() != self.rank() {
            return Err(Error::MismatchedRank(self.to_string(), shape.to_vec()));
        }
        Ok(())
    }
}

impl FromStr for DimOrder {
    type Err = Error;

    fn from_str(order: &str) -> Result<Self, Self::Err> {
        let axes = order
            .chars()
            .map(|letter| {
                Axis::from_letter(letter)
                    .ok_or_else(|| Error::InvalidDimOrder(order.into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let is_unique = axes
            .iter()
            .enumerate()
            .all(|(index, axis)| !axes[..index].contains(axis));
        let has_plane =
            axes.contains(&Axis::Height) && axes.contains(&Axis::Width);
        if !is_unique || !has_plane {
            return Err(Error::InvalidDimOrder(order.into()));
        }

        Ok(Self { axes })
    }
}

impl fmt::Display for DimOrder {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        self.axes
            .iter()
            .try_for_each(|axis| fmt::Write::write_char(f, axis.letter()))
    }
}

impl Default for DimOrder {
    #[inline]
    fn default() -> Self {
        Self {
            axes: Axis::CANONICAL.to_vec(),
        }
    }
}
