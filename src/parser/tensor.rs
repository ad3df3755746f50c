//! Bounds-checked view over the raw detection output.

use ndarray::{ArrayView1, ArrayView2, Axis};
use tracing::debug;

use crate::parser::error::ParseError;

/// Fixed per-anchor fields preceding the class scores:
/// center offset x, center offset y, log width, log height, objectness.
pub const BOX_FIELDS: usize = 5;

/// Read-only view of a `[num_anchors][5 + num_classes]` float tensor.
///
/// The buffer is borrowed from the inference layer and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct RawTensor<'a> {
    view: ArrayView2<'a, f32>,
}

impl<'a> RawTensor<'a> {
    /// Validate `data` against the anchor/class layout and view it as rows.
    ///
    /// Trailing floats beyond the layout are ignored.
    pub fn new(data: &'a [f32], num_anchors: usize, num_classes: usize) -> Result<Self, ParseError> {
        let row_len = BOX_FIELDS + num_classes;
        let expected = num_anchors.saturating_mul(row_len);
        if data.len() < expected {
            return Err(ParseError::TensorTooShort {
                expected,
                actual: data.len(),
            });
        }
        if data.len() > expected {
            debug!(
                expected,
                actual = data.len(),
                "output tensor is longer than the anchor layout; ignoring trailing data"
            );
        }

        let view = ArrayView2::from_shape((num_anchors, row_len), &data[..expected])?;
        Ok(Self { view })
    }

    pub fn num_anchors(&self) -> usize {
        self.view.nrows()
    }

    pub fn num_classes(&self) -> usize {
        self.view.ncols() - BOX_FIELDS
    }

    /// Fields of anchor `index`; `None` past the end.
    pub fn row(&self, index: usize) -> Option<ArrayView1<'a, f32>> {
        (index < self.num_anchors()).then(|| self.view.index_axis_move(Axis(0), index))
    }

    /// Iterate the per-anchor rows in tensor order.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'a, f32>> + '_ {
        (0..self.num_anchors()).map(|index| self.view.index_axis_move(Axis(0), index))
    }
}
