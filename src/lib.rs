//! YOLOX bounding-box parsing for DeepStream-style inference pipelines.
//!
//! Turns the raw `[anchors][5 + classes]` output of a YOLOX detector into
//! confidence-ordered, non-overlapping detections clipped to the source
//! image. See [`YoloxParser`] for repeated use and [`parse_detections`] for
//! one-off calls.

pub mod integration;
pub mod parser;

pub use integration::{BboxParser, OutputLayer, parse_custom_yolox};
pub use parser::{
    Candidate, Detection, DetectionParams, GridAnchor, NetworkInfo, ParseError, PixelBox, Rect,
    YoloxParser, parse_detections,
};
