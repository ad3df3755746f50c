//! Final detections clipped to the source image.

use crate::parser::proposal::Candidate;
use crate::parser::rect::Rect;

/// A detection handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// Box clipped to `[0, image_width - 1] x [0, image_height - 1]`
    pub bbox: Rect,
    pub class_id: u32,
    pub confidence: f32,
}

/// Integer pixel box produced by [`Detection::quantized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelBox {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Detection {
    /// Convert to whole pixels.
    ///
    /// Both corners are floored and the size is recomputed from the floored
    /// corners. This is the only place coordinates leave floating point.
    pub fn quantized(&self) -> PixelBox {
        let [x1, y1, x2, y2] = self.bbox.to_tlbr().map(|v| v.floor().max(0.0) as u32);
        PixelBox {
            left: x1,
            top: y1,
            width: x2.saturating_sub(x1),
            height: y2.saturating_sub(y1),
        }
    }
}

/// Clip a candidate to an `image_width` x `image_height` image.
pub fn clamp(candidate: &Candidate, image_width: u32, image_height: u32) -> Detection {
    let max_x = image_width.saturating_sub(1) as f32;
    let max_y = image_height.saturating_sub(1) as f32;
    Detection {
        bbox: candidate.bbox.clamp(max_x, max_y),
        class_id: candidate.class_id,
        confidence: candidate.confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_top_left_corner() {
        let candidate = Candidate::new(Rect::new(-4.0, -4.0, 8.0, 8.0), 0, 0.9);
        let detection = clamp(&candidate, 1920, 1080);
        assert_eq!(detection.bbox, Rect::new(0.0, 0.0, 4.0, 4.0));
        assert_eq!(detection.class_id, 0);
        assert_eq!(detection.confidence, 0.9);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let candidate = Candidate::new(Rect::new(1800.5, 1000.0, 300.0, 200.0), 3, 0.5);
        let once = clamp(&candidate, 1920, 1080);
        let as_candidate = Candidate::new(once.bbox, once.class_id, once.confidence);
        assert_eq!(clamp(&as_candidate, 1920, 1080), once);
        assert!(once.bbox.width >= 0.0 && once.bbox.height >= 0.0);
    }

    #[test]
    fn test_quantized_floors_corners() {
        let detection = Detection {
            bbox: Rect::new(10.75, 3.5, 20.5, 6.0),
            class_id: 1,
            confidence: 0.7,
        };
        // corners (10.75, 3.5) and (31.25, 9.5)
        assert_eq!(
            detection.quantized(),
            PixelBox {
                left: 10,
                top: 3,
                width: 21,
                height: 6
            }
        );
    }
}
