//! Integration module for plugging the parser into an inference host.
//!
//! The host (a DeepStream `nvinfer` element or any other runtime that owns
//! model execution) hands over named output layers; this module selects the
//! right one and runs a [`BboxParser`] over it.

mod custom_parser;
mod layer;

pub use custom_parser::{BboxParser, parse_custom_yolox};
pub use layer::{OUTPUT_BLOB_NAME, OutputLayer, select_output_layer};
