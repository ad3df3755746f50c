//! Trait for bounding-box parsers driven by an inference host.

use crate::parser::{Detection, DetectionParams, NetworkInfo, ParseError, YoloxParser};

use super::layer::{OUTPUT_BLOB_NAME, OutputLayer, select_output_layer};

/// Trait for turning raw output layers into detections.
///
/// Implement this trait to plug a model-specific decoder into the host.
///
/// # Example
///
/// ```ignore
/// use yolox_bbox_rs::{BboxParser, Detection, OutputLayer};
///
/// struct MyParser;
///
/// impl BboxParser for MyParser {
///     type Error = std::convert::Infallible;
///
///     fn parse_layers(&self, layers: &[OutputLayer<'_>]) -> Result<Vec<Detection>, Self::Error> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait BboxParser {
    /// Error type for parsing failures.
    type Error;

    /// Parse the output layers of one inference call.
    fn parse_layers(&self, layers: &[OutputLayer<'_>]) -> Result<Vec<Detection>, Self::Error>;
}

impl BboxParser for YoloxParser {
    type Error = ParseError;

    fn parse_layers(&self, layers: &[OutputLayer<'_>]) -> Result<Vec<Detection>, Self::Error> {
        let layer = select_output_layer(layers, OUTPUT_BLOB_NAME)?;
        self.parse(layer.buffer)
    }
}

/// Entry point matching the host's custom-parse callback shape.
///
/// Parses the `output` layer (or the first layer) with a parser built from
/// `network_info` and `detection_params`.
pub fn parse_custom_yolox(
    layers: &[OutputLayer<'_>],
    network_info: &NetworkInfo,
    detection_params: &DetectionParams,
) -> Result<Vec<Detection>, ParseError> {
    YoloxParser::new(*network_info, detection_params.clone())?.parse_layers(layers)
}
