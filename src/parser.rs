mod config;
mod detection;
mod error;
mod grid;
mod nms;
mod proposal;
mod rect;
mod sort;
mod tensor;
mod yolox;

pub use config::{DEFAULT_STRIDES, DetectionParams, NetworkInfo};
pub use detection::{Detection, PixelBox, clamp};
pub use error::ParseError;
pub use grid::{GridAnchor, anchor_count, generate_anchors};
pub use nms::suppress;
pub use proposal::{Candidate, decode};
pub use rect::Rect;
pub use sort::{sort_descending, sort_descending_in_place};
pub use tensor::{BOX_FIELDS, RawTensor};
pub use yolox::{YoloxParser, parse_detections};
