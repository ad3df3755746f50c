//! Anchor grid generation for the strided YOLOX detection heads.

use tracing::trace;

/// One spatial decoding position of the output tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridAnchor {
    pub grid_x: u32,
    pub grid_y: u32,
    pub stride: u32,
}

/// Number of anchors `generate_anchors` yields for the same inputs.
pub fn anchor_count(target_size: u32, strides: &[u32]) -> usize {
    strides
        .iter()
        .filter_map(|&stride| target_size.checked_div(stride))
        .map(|num_grid| num_grid as usize * num_grid as usize)
        .sum()
}

/// Build the anchor list in the order the model head flattens its output.
///
/// Strides are visited in the given order; within a stride anchors are
/// row-major with `grid_x` varying fastest. Anchor `i` describes row `i` of
/// the output tensor. Zero strides contribute nothing.
pub fn generate_anchors(target_size: u32, strides: &[u32]) -> Vec<GridAnchor> {
    let mut anchors = Vec::with_capacity(anchor_count(target_size, strides));
    for &stride in strides {
        let Some(num_grid) = target_size.checked_div(stride) else {
            continue;
        };
        trace!(stride, num_grid, "generating anchor grid");
        for grid_y in 0..num_grid {
            for grid_x in 0..num_grid {
                anchors.push(GridAnchor {
                    grid_x,
                    grid_y,
                    stride,
                });
            }
        }
    }
    anchors
}
