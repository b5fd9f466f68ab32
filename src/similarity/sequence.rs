//! Alignment primitives over chord sequences.
//!
//! Everything here is generic over the element type so the same code serves
//! chord names and structured chord events.

/// Length of the longest common subsequence (ordered, not necessarily
/// contiguous).
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Two rows instead of the full table
    let mut prev_row: Vec<usize> = vec![0; b.len() + 1];
    let mut curr_row: Vec<usize> = vec![0; b.len() + 1];

    for a_item in a {
        for (j, b_item) in b.iter().enumerate() {
            curr_row[j + 1] = if a_item == b_item {
                prev_row[j] + 1
            } else {
                prev_row[j + 1].max(curr_row[j])
            };
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Length of the longest run of elements appearing contiguously in both
/// sequences, at any pair of offsets.
pub fn longest_common_run<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev_row: Vec<usize> = vec![0; b.len() + 1];
    let mut curr_row: Vec<usize> = vec![0; b.len() + 1];
    let mut longest = 0;

    for a_item in a {
        for (j, b_item) in b.iter().enumerate() {
            curr_row[j + 1] = if a_item == b_item { prev_row[j] + 1 } else { 0 };
            longest = longest.max(curr_row[j + 1]);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    longest
}

/// Number of positions holding the same element in both sequences.
pub fn exact_matches<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x == y).count()
}

/// Number of query elements, repeats included, found anywhere in `candidate`.
pub fn contained_matches<T: PartialEq>(query: &[T], candidate: &[T]) -> usize {
    query.iter().filter(|item| candidate.contains(item)).count()
}
