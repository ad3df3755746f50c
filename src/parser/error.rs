//! Error type for bounding-box parsing failures.

use thiserror::Error;

/// Errors surfaced by the parser.
///
/// Every variant is an input-contract violation: the parser performs no I/O,
/// so nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The raw output tensor holds fewer floats than the anchor layout needs.
    #[error("output tensor too short: expected at least {expected} floats, got {actual}")]
    TensorTooShort { expected: usize, actual: usize },

    /// A stride is zero or larger than the network input size.
    #[error("invalid stride {stride} for target size {target_size}")]
    InvalidStride { stride: u32, target_size: u32 },

    /// The network input is not square.
    #[error("network input must be square, got {width}x{height}")]
    NonSquareInput { width: u32, height: u32 },

    /// A threshold is not a finite value in [0, 1].
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },

    /// The source image has a zero dimension.
    #[error("invalid image size {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },

    /// The model is configured with no classes.
    #[error("number of classes must be non-zero")]
    NoClasses,

    /// The anchor list and the tensor disagree on the number of rows.
    #[error("anchor count mismatch: {anchors} anchors but {rows} tensor rows")]
    AnchorCountMismatch { anchors: usize, rows: usize },

    /// The host supplied no output layers.
    #[error("no output layer to parse")]
    NoOutputLayer,

    /// The tensor could not be viewed with the requested shape.
    #[error("tensor shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
