//! Ratcliff/Obershelp sequence similarity
//!
//! The ratio is `2 * M / T`, where `T` is the combined length of both strings
//! and `M` is the number of characters covered by matching blocks. Blocks are
//! found by taking the longest common substring and recursing on the pieces
//! to its left and right. Unlike edit distance this rewards a keyword that
//! appears in pieces inside a slug such as `admision-form`.

use std::collections::HashMap;

/// A run of `size` equal characters starting at `a[a_start]` and `b[b_start]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchingBlock {
    a_start: usize,
    b_start: usize,
    size: usize,
}

/// Returns the similarity ratio of two strings in `[0.0, 1.0]`
///
/// Comparison is case-sensitive and works on Unicode scalar values. Two
/// empty strings are identical and score 1.0.
///
/// # Examples
///
/// ```
/// use campus_crawl::relevance::similarity_ratio;
///
/// assert_eq!(similarity_ratio("abcd", "bcde"), 0.75);
/// assert_eq!(similarity_ratio("fee", "fee"), 1.0);
/// assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
/// ```
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched: usize = matching_blocks(&a, &b).iter().map(|m| m.size).sum();
    2.0 * matched as f64 / total as f64
}

/// Collects the non-overlapping matching blocks of `a` and `b`
fn matching_blocks(a: &[char], b: &[char]) -> Vec<MatchingBlock> {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, c) in b.iter().enumerate() {
        positions.entry(*c).or_default().push(j);
    }

    let mut blocks = Vec::new();
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let block = longest_match(a, &positions, a_lo, a_hi, b_lo, b_hi);
        if block.size == 0 {
            continue;
        }

        if a_lo < block.a_start && b_lo < block.b_start {
            pending.push((a_lo, block.a_start, b_lo, block.b_start));
        }
        let a_end = block.a_start + block.size;
        let b_end = block.b_start + block.size;
        if a_end < a_hi && b_end < b_hi {
            pending.push((a_end, a_hi, b_end, b_hi));
        }

        blocks.push(block);
    }

    blocks.sort_by_key(|m| (m.a_start, m.b_start));
    blocks
}

/// Finds the longest block shared by `a[a_lo..a_hi]` and `b[b_lo..b_hi]`
///
/// Ties go to the block that starts earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    positions: &HashMap<char, Vec<usize>>,
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> MatchingBlock {
    let mut best = MatchingBlock {
        a_start: a_lo,
        b_start: b_lo,
        size: 0,
    };

    // run_len[j] = length of the match ending at a[i - 1] and b[j]
    let mut run_len: HashMap<usize, usize> = HashMap::new();

    for (i, c) in a.iter().enumerate().take(a_hi).skip(a_lo) {
        let mut next_run_len = HashMap::new();

        if let Some(js) = positions.get(c) {
            for &j in js {
                if j < b_lo {
                    continue;
                }
                if j >= b_hi {
                    break;
                }

                let k = j
                    .checked_sub(1)
                    .and_then(|prev| run_len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_run_len.insert(j, k);

                if k > best.size {
                    best = MatchingBlock {
                        a_start: i + 1 - k,
                        b_start: j + 1 - k,
                        size: k,
                    };
                }
            }
        }

        run_len = next_run_len;
    }

    best
}
