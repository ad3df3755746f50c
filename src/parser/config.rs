//! Network metadata and detection parameters.

use crate::parser::error::ParseError;

/// Strides of the three YOLOX detection heads.
pub const DEFAULT_STRIDES: [u32; 3] = [8, 16, 32];

/// Input geometry of the network that produced the output tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkInfo {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
}

impl Default for NetworkInfo {
    fn default() -> Self {
        Self {
            width: 640,
            height: 640,
            channels: 3,
        }
    }
}

impl NetworkInfo {
    pub fn new(width: u32, height: u32, channels: u32) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Side length of the square network input.
    pub fn target_size(&self) -> Result<u32, ParseError> {
        if self.width != self.height {
            return Err(ParseError::NonSquareInput {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.width)
    }
}

/// Configuration for YOLOX post-processing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DetectionParams {
    pub num_classes: u32,
    pub confidence_threshold: f32,
    pub iou_threshold: f32,
    pub strides: Vec<u32>,
    /// Width of the source image detections are clipped to.
    pub image_width: u32,
    /// Height of the source image detections are clipped to.
    pub image_height: u32,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            num_classes: 80,
            confidence_threshold: 0.3,
            iou_threshold: 0.65,
            strides: DEFAULT_STRIDES.to_vec(),
            image_width: 1920,
            image_height: 1080,
        }
    }
}

impl DetectionParams {
    pub fn with_num_classes(mut self, num_classes: u32) -> Self {
        self.num_classes = num_classes;
        self
    }

    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub fn with_iou_threshold(mut self, threshold: f32) -> Self {
        self.iou_threshold = threshold;
        self
    }

    pub fn with_strides(mut self, strides: impl Into<Vec<u32>>) -> Self {
        self.strides = strides.into();
        self
    }

    pub fn with_image_size(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Check the parameters against a square network input of `target_size`.
    pub fn validate(&self, target_size: u32) -> Result<(), ParseError> {
        if self.num_classes == 0 {
            return Err(ParseError::NoClasses);
        }
        check_threshold("confidence_threshold", self.confidence_threshold)?;
        check_threshold("iou_threshold", self.iou_threshold)?;

        if self.image_width == 0 || self.image_height == 0 {
            return Err(ParseError::InvalidImageSize {
                width: self.image_width,
                height: self.image_height,
            });
        }

        for &stride in &self.strides {
            if stride == 0 || stride > target_size {
                return Err(ParseError::InvalidStride {
                    stride,
                    target_size,
                });
            }
        }
        Ok(())
    }
}

fn check_threshold(name: &'static str, value: f32) -> Result<(), ParseError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParseError::InvalidThreshold { name, value })
    }
}
