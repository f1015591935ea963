//! Temporal padding of frame indices.

pub use super::*;

use std::{fmt, str::FromStr};

/// The policy to synthesize frames outside of a video.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FramePadding {
    /// Repeating the first and the last frame.
    #[default]
    Replicate,
    /// Tiling the video, so that frame `-1` is the last frame.
    Circular,
    /// Mirroring the video at both ends, so that frame `-1` is frame `1`.
    Pingpong,
}

impl FramePadding {
    /// Mapping any signed frame index into `[0, count)`.
    ///
    /// ## Details
    ///
    /// It returns `0` if `count` is no more than `1`.
    pub fn frame_index(
        &self,
        index: isize,
        count: usize,
    ) -> usize {
        if count <= 1 {
            return 0;
        }

        let count = count as isize;
        let index = match self {
            Self::Replicate => index.clamp(0, count - 1),
            Self::Circular => index.rem_euclid(count),
            Self::Pingpong => {
                let period = 2 * (count - 1);
                let index = index.rem_euclid(period);
                if index < count {
                    index
                } else {
                    period - index
                }
            },
        };
        index as usize
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Replicate => "replicate",
            Self::Circular => "circular",
            Self::Pingpong => "pingpong",
        }
    }
}

impl FromStr for FramePadding {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.to_ascii_lowercase().as_str() {
            "replicate" => Ok(Self::Replicate),
            "circular" => Ok(Self::Circular),
            "pingpong" => Ok(Self::Pingpong),
            _ => Err(Error::UnknownFramePadding(label.into())),
        }
    }
}

impl fmt::Display for FramePadding {
    #[inline]
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn frame_index_boundary() {
        use super::*;

        [2, 3, 7].into_iter().for_each(|count| {
            let last = count - 1;
            assert_eq!(FramePadding::Replicate.frame_index(-1, count), 0);
            assert_eq!(FramePadding::Pingpong.frame_index(-1, count), 1);
            assert_eq!(FramePadding::Circular.frame_index(-1, count), last);
        });
    }

    #[test]
    fn frame_index_in_range() {
        use super::*;

        [
            FramePadding::Replicate,
            FramePadding::Circular,
            FramePadding::Pingpong,
        ]
        .into_iter()
        .for_each(|padding| {
            (0..5).for_each(|index| {
                assert_eq!(padding.frame_index(index, 5), index as usize);
            });
            assert_eq!(padding.frame_index(-3, 1), 0);
            assert_eq!(padding.frame_index(3, 0), 0);
        });
    }

    #[test]
    fn frame_index_sequence() {
        use super::*;

        let count = 3;
        let output = (-5..8)
            .map(|index| FramePadding::Pingpong.frame_index(index, count))
            .collect::<Vec<_>>();
        let target = [1, 0, 1, 2, 1, 0, 1, 2, 1, 0, 1, 2, 1];
        assert_eq!(output, target);

        let output = (-5..8)
            .map(|index| FramePadding::Circular.frame_index(index, count))
            .collect::<Vec<_>>();
        let target = [1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1];
        assert_eq!(output, target);

        let output = (-5..8)
            .map(|index| FramePadding::Replicate.frame_index(index, count))
            .collect::<Vec<_>>();
        let target = [0, 0, 0, 0, 0, 0, 1, 2, 2, 2, 2, 2, 2];
        assert_eq!(output, target);
    }

    #[test]
    fn from_str() {
        use super::*;

        assert_eq!(
            "replicate".parse::<FramePadding>().unwrap(),
            FramePadding::Replicate
        );
        assert_eq!(
            "Circular".parse::<FramePadding>().unwrap(),
            FramePadding::Circular
        );
        assert_eq!(
            "pingpong".parse::<FramePadding>().unwrap(),
            FramePadding::Pingpong
        );
        "mirror".parse::<FramePadding>().unwrap_err();
    }
}
