//! Descending-confidence partition sort.
//!
//! Hoare-style quicksort with the middle element as pivot, which keeps
//! inputs with many equal confidences balanced. With the `parallel` feature
//! the two partitions of large slices are sorted through `rayon::join`; each
//! side only ever sees its own half of the slice.

use crate::parser::proposal::Candidate;

#[cfg(feature = "parallel")]
const PARALLEL_CUTOFF: usize = 1024;

/// Return `candidates` ordered by confidence, highest first.
///
/// Ties end up in no particular order.
pub fn sort_descending(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    sort_descending_in_place(&mut candidates);
    candidates
}

/// In-place variant of [`sort_descending`].
pub fn sort_descending_in_place(candidates: &mut [Candidate]) {
    quicksort(candidates);
}

/// Recurses into the smaller partition and loops on the larger one, so the
/// sequential path stays O(log n) deep whatever the confidence pattern.
fn quicksort(mut items: &mut [Candidate]) {
    while items.len() > 1 {
        let (left_len, right_start) = partition(items);
        let (left, rest) = std::mem::take(&mut items).split_at_mut(left_len);
        let right = &mut rest[right_start - left_len..];

        #[cfg(feature = "parallel")]
        {
            if left.len() + right.len() >= PARALLEL_CUTOFF {
                rayon::join(|| quicksort(left), || quicksort(right));
                return;
            }
        }

        if left.len() < right.len() {
            quicksort(left);
            items = right;
        } else {
            quicksort(right);
            items = left;
        }
    }
}

/// Partition around the middle element's confidence.
///
/// Returns `(left_len, right_start)`: `items[..left_len]` holds confidences
/// `>=` the pivot, `items[right_start..]` holds confidences `<=` it and
/// everything between is equal to the pivot.
fn partition(items: &mut [Candidate]) -> (usize, usize) {
    let pivot = items[(items.len() - 1) / 2].confidence;
    let mut i: isize = 0;
    let mut j: isize = items.len() as isize - 1;

    while i <= j {
        while items[i as usize].confidence > pivot {
            i += 1;
        }
        while items[j as usize].confidence < pivot {
            j -= 1;
        }
        if i <= j {
            items.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    ((j + 1) as usize, i as usize)
}
