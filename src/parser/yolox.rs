//! YOLOX output parsing: decode, sort, suppress and clip.

use tracing::debug;

use crate::parser::config::{DetectionParams, NetworkInfo};
use crate::parser::detection::{Detection, clamp};
use crate::parser::error::ParseError;
use crate::parser::grid::{GridAnchor, generate_anchors};
use crate::parser::nms::suppress;
use crate::parser::proposal::decode;
use crate::parser::sort::sort_descending;
use crate::parser::tensor::{BOX_FIELDS, RawTensor};

/// Parser for one network geometry and parameter set.
///
/// Validates its configuration once and keeps the anchor grid, so per-frame
/// calls only touch the tensor. Holds no mutable state and can be shared
/// across streams.
#[derive(Debug, Clone)]
pub struct YoloxParser {
    network: NetworkInfo,
    params: DetectionParams,
    anchors: Vec<GridAnchor>,
}

impl YoloxParser {
    pub fn new(network: NetworkInfo, params: DetectionParams) -> Result<Self, ParseError> {
        let target_size = network.target_size()?;
        params.validate(target_size)?;
        let anchors = generate_anchors(target_size, &params.strides);
        debug!(
            target_size,
            strides = ?params.strides,
            anchors = anchors.len(),
            "built yolox anchor grid"
        );
        Ok(Self {
            network,
            params,
            anchors,
        })
    }

    /// Create a parser with the YOLOX-s defaults (640x640 input, 80 classes).
    pub fn with_default_config() -> Result<Self, ParseError> {
        Self::new(NetworkInfo::default(), DetectionParams::default())
    }

    pub fn network(&self) -> &NetworkInfo {
        &self.network
    }

    pub fn params(&self) -> &DetectionParams {
        &self.params
    }

    pub fn anchors(&self) -> &[GridAnchor] {
        &self.anchors
    }

    /// Number of floats a raw output tensor must at least hold.
    pub fn expected_tensor_len(&self) -> usize {
        self.anchors.len() * (BOX_FIELDS + self.params.num_classes as usize)
    }

    /// Turn one raw output tensor into clipped detections, highest
    /// confidence first.
    pub fn parse(&self, tensor: &[f32]) -> Result<Vec<Detection>, ParseError> {
        let tensor = RawTensor::new(tensor, self.anchors.len(), self.params.num_classes as usize)?;

        let proposals = decode(&self.anchors, &tensor, self.params.confidence_threshold)?;
        debug!(proposals = proposals.len(), "boxes before nms");

        let proposals = sort_descending(proposals);
        let picked = suppress(&proposals, self.params.iou_threshold);
        debug!(boxes = picked.len(), "boxes after nms");

        Ok(picked
            .into_iter()
            .map(|i| {
                clamp(
                    &proposals[i],
                    self.params.image_width,
                    self.params.image_height,
                )
            })
            .collect())
    }
}

/// Parse a raw YOLOX output tensor in a single call.
///
/// Builds a throwaway [`YoloxParser`]; keep one around instead when parsing
/// many frames with the same configuration.
pub fn parse_detections(
    tensor: &[f32],
    network_info: &NetworkInfo,
    detection_params: &DetectionParams,
) -> Result<Vec<Detection>, ParseError> {
    YoloxParser::new(*network_info, detection_params.clone())?.parse(tensor)
}
