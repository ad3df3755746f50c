//! Decoding of raw anchor rows into candidate boxes.

use crate::parser::error::ParseError;
use crate::parser::grid::GridAnchor;
use crate::parser::rect::Rect;
use crate::parser::tensor::{BOX_FIELDS, RawTensor};

/// A decoded box that cleared the confidence threshold, before suppression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Box in network-input pixel space (TLWH)
    pub bbox: Rect,
    pub class_id: u32,
    /// Objectness times class score
    pub confidence: f32,
}

impl Candidate {
    pub fn new(bbox: Rect, class_id: u32, confidence: f32) -> Self {
        Self {
            bbox,
            class_id,
            confidence,
        }
    }
}

/// Decode every anchor row of `tensor` into candidates.
///
/// Anchor `i` is paired with row `i`; the anchor list must match the
/// tensor's row count exactly. An anchor emits one candidate for each
/// class whose `objectness * score` is strictly greater than
/// `confidence_threshold`, so a single anchor may yield several labels.
/// Coordinates stay in floating point.
pub fn decode(
    anchors: &[GridAnchor],
    tensor: &RawTensor<'_>,
    confidence_threshold: f32,
) -> Result<Vec<Candidate>, ParseError> {
    if anchors.len() != tensor.num_anchors() {
        return Err(ParseError::AnchorCountMismatch {
            anchors: anchors.len(),
            rows: tensor.num_anchors(),
        });
    }

    let mut candidates = Vec::new();

    for (anchor, row) in anchors.iter().zip(tensor.rows()) {
        let stride = anchor.stride as f32;

        // yolox/models/yolo_head.py decode logic
        let cx = (row[0] + anchor.grid_x as f32) * stride;
        let cy = (row[1] + anchor.grid_y as f32) * stride;
        let width = row[2].exp() * stride;
        let height = row[3].exp() * stride;
        let bbox = Rect::from_center(cx, cy, width, height);

        let objectness = row[4];
        for (class_id, &class_score) in row.iter().skip(BOX_FIELDS).enumerate() {
            let confidence = objectness * class_score;
            if confidence > confidence_threshold {
                candidates.push(Candidate::new(bbox, class_id as u32, confidence));
            }
        }
    }

    Ok(candidates)
}
