//! Approximate substring distance.
//!
//! Finds the smallest number of edits that turns the query into some
//! contiguous substring of the text. Edits are optimal string alignment
//! operations: insertion, deletion, substitution and transposition of two
//! adjacent characters, each costing 1.
//!
//! The DP runs one text column at a time with a free starting row (a match
//! may begin anywhere in the text), keeping three columns of `query.len() + 1`
//! cells so transpositions can look two columns back. Rows below the deepest
//! cell still within `max` are never computed: a cell is never smaller than
//! the cell diagonally above-left of it, so the active region grows by at
//! most one row per column.

use smallvec::{SmallVec, smallvec};

type Column = SmallVec<[usize; 32]>;

/// Smallest edit distance between `query` and any substring of `text`,
/// or `None` when it exceeds `max`. An empty query matches with distance 0.
pub fn substring_distance(query: &[char], text: &str, max: usize) -> Option<usize> {
    let m = query.len();
    if m == 0 {
        return Some(0);
    }

    // no alignment costs more than deleting the whole query
    let max = max.min(m);
    // rows past a column's computed top hold stale values and read as out of bound
    let over = max + 1;
    let read = |column: &Column, top: usize, row: usize| if row <= top { column[row] } else { over };

    let mut before_prev: Column = (0..=m).collect();
    let mut prev: Column = (0..=m).collect();
    let mut cur: Column = smallvec![0; m + 1];
    let (mut before_prev_top, mut prev_top) = (m, m);
    // deepest row of the previous column within `max`
    let mut active = max;
    let mut prev_text_char: Option<char> = None;
    // deleting the whole query always matches the empty substring
    let mut best = m;

    for text_char in text.chars() {
        let top = (active + 1).min(m);
        cur[0] = 0;
        for i in 1..=top {
            let query_char = query[i - 1];
            let cost = usize::from(query_char != text_char);
            let mut cell = (read(&prev, prev_top, i - 1) + cost)
                .min(read(&prev, prev_top, i) + 1)
                .min(cur[i - 1] + 1);

            if i > 1
                && let Some(prev_char) = prev_text_char
                && query_char == prev_char
                && query[i - 2] == text_char
            {
                cell = cell.min(read(&before_prev, before_prev_top, i - 2) + 1);
            }
            cur[i] = cell;
        }

        active = top;
        while active > 0 && cur[active] > max {
            active -= 1;
        }

        if top == m {
            best = best.min(cur[m]);
            if best == 0 {
                return Some(0);
            }
        }

        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut cur);
        before_prev_top = prev_top;
        prev_top = top;
        prev_text_char = Some(text_char);
    }

    (best <= max).then_some(best)
}
