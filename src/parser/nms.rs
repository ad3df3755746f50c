//! Greedy non-maximum suppression over confidence-sorted candidates.

use crate::parser::proposal::Candidate;

/// Pick the candidates that survive suppression.
///
/// `sorted` must already be in descending confidence order. A candidate is
/// kept when its IoU with every previously kept candidate is at most
/// `iou_threshold`. Suppression is class-agnostic. Returns strictly
/// increasing indices into `sorted`.
pub fn suppress(sorted: &[Candidate], iou_threshold: f32) -> Vec<usize> {
    let mut picked: Vec<usize> = Vec::new();

    for (i, candidate) in sorted.iter().enumerate() {
        let keep = picked
            .iter()
            .all(|&p| candidate.bbox.iou(&sorted[p].bbox) <= iou_threshold);
        if keep {
            picked.push(i);
        }
    }

    picked
}
