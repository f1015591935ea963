#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Empty video: there should be at least one frame")]
    EmptyVideo,

    #[error("Frame index out of range: {0} (frame count: {1})")]
    FrameOutOfRange(usize, usize),

    #[error("Invalid dimension order: {0:?}")]
    InvalidDimOrder(String),

    #[error("Invalid frame rate: {0}")]
    InvalidFrameRate(f64),

    #[error("Mismatched rank: dimension order {0:?} but content shape {1:?}")]
    MismatchedRank(String, Vec<usize>),

    #[error("Mismatched shape: test {0:?} but reference {1:?}")]
    MismatchedShape(Vec<usize>, Vec<usize>),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Unavailable device: {0}")]
    UnavailableDevice(String),

    #[error("Unknown color space: {0}")]
    UnknownColorSpace(String),

    #[error("Unknown display: {0}")]
    UnknownDisplay(String),

    #[error("Unknown frame padding: {0}")]
    UnknownFramePadding(String),

    #[error("Unsupported batch size: {0} (should be 1)")]
    UnsupportedBatch(usize),

    #[error("Unsupported channel count: {0} (should be 1 or 3)")]
    UnsupportedChannels(usize),

    #[error("Unsupported data type: {0}")]
    UnsupportedDataType(String),
}
