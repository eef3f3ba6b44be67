//! Similarity metrics
//!
//! - Dice-style overlap of matched syntax-tree nodes (structural score)
//! - Ratcliff/Obershelp ratio over character sequences (textual comparison)

use std::collections::HashMap;
use std::hash::Hash;

/// Dice-style percentage
///
/// `2 * matches / (nodes_left + nodes_right) * 100`, with an empty
/// denominator scoring 0.
pub fn dice_percentage(matches: usize, nodes_left: usize, nodes_right: usize) -> f64 {
    let total = nodes_left + nodes_right;
    if total == 0 {
        return 0.0;
    }
    (2.0 * matches as f64) / total as f64 * 100.0
}

/// Sequences at least this long have their popular elements left out of
/// the block index
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// Ratcliff/Obershelp ratio in [0.0, 1.0], with the autojunk heuristic
///
/// Finds the longest common contiguous block, then recurses on the pieces
/// left and right of it; `ratio = 2 * M / T` where `M` is the total size of
/// the blocks found and `T` the combined length. Ties resolve to the
/// earliest block in `a`, then in `b`.
///
/// When `b` has [`AUTOJUNK_MIN_LEN`] or more elements, any element occurring
/// more than `len(b) / 100 + 1` times (typically the space character in
/// source text) cannot seed a block; it only extends a block found from
/// rarer elements. Scores on long inputs are therefore lower than the plain
/// algorithm gives, see [`ratcliff_obershelp_ratio_with`].
pub fn ratcliff_obershelp_ratio<T>(a: &[T], b: &[T]) -> f64
where
    T: Eq + Hash,
{
    ratcliff_obershelp_ratio_with(a, b, true)
}

/// Ratcliff/Obershelp ratio with the autojunk heuristic switchable
pub fn ratcliff_obershelp_ratio_with<T>(a: &[T], b: &[T], autojunk: bool) -> f64
where
    T: Eq + Hash,
{
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0; // Both empty = identical
    }

    let b2j = index_positions(b, autojunk);

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = find_longest_match(a, b, &b2j, (alo, ahi), (blo, bhi));
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    2.0 * matched as f64 / total as f64
}

/// Positions of every element of `b`, minus popular ones under autojunk
fn index_positions<T>(b: &[T], autojunk: bool) -> HashMap<&T, Vec<usize>>
where
    T: Eq + Hash,
{
    let mut b2j: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, item) in b.iter().enumerate() {
        b2j.entry(item).or_default().push(j);
    }

    if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
        let limit = b.len() / 100 + 1;
        b2j.retain(|_, positions| positions.len() <= limit);
    }
    b2j
}

/// Longest block `a[i..i+k] == b[j..j+k]` inside the given window
fn find_longest_match<T>(
    a: &[T],
    b: &[T],
    b2j: &HashMap<&T, Vec<usize>>,
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize)
where
    T: Eq + Hash,
{
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // j2len[j] = length of the match ending at a[i - 1], b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for (i, item) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(item) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next.insert(j, k);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }
        j2len = next;
    }

    // Unindexed (popular) elements still grow the block at both edges.
    // Without autojunk the block is already maximal and these loops stop at once.
    while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
        best_i -= 1;
        best_j -= 1;
        best_size += 1;
    }
    while best_i + best_size < ahi
        && best_j + best_size < bhi
        && a[best_i + best_size] == b[best_j + best_size]
    {
        best_size += 1;
    }

    (best_i, best_j, best_size)
}

/// Character-level ratio as a percentage, symmetric in its arguments
pub fn text_ratio(left: &str, right: &str) -> f64 {
    let a: Vec<char> = left.chars().collect();
    let b: Vec<char> = right.chars().collect();
    // block choice depends on argument order, the larger reading wins
    ratcliff_obershelp_ratio(&a, &b).max(ratcliff_obershelp_ratio(&b, &a)) * 100.0
}
