//! Natural-order string comparison and sorting.
//!
//! Orders strings the way a human reading embedded numbers expects: digit
//! runs compare by numeric value rather than character by character, so
//! `z2` precedes `z11`. Runs with equal value but different padding
//! (`"001"` vs `"1"`) are never equal; the shorter run sorts first.

use std::cmp::Ordering;

/// Sequences at or above this size are sorted on the rayon pool.
const PARALLEL_THRESHOLD: usize = 8192;

/// Reports whether `c` belongs to a digit run.
///
/// Unicode numeric characters count, not just ASCII, so records like
/// `"世界3"` scan correctly. This is `char::is_numeric`, which admits every
/// numeric category (decimal digits plus numeric letters like `Ⅻ` and
/// forms like `½`) — broader than decimal-only classification, but fixed,
/// locale-independent, and still a strict total order since runs compare
/// as code-point strings. The complement of this predicate marks the end
/// of a run; both directions must come from this one function.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_numeric()
}

/// Compare two strings in natural order.
///
/// Pure and total over all string pairs: the result is a strict total
/// order, which the sort below relies on.
pub fn compare(a: &str, b: &str) -> Ordering {
    // Quick check: an empty record always sorts first.
    if a.is_empty() || b.is_empty() {
        return a.len().cmp(&b.len());
    }

    let mut x = a;
    let mut y = b;

    // Walk both strings segment by segment: match the non-digit prefixes,
    // then rank the digit runs that follow, until something differs.
    loop {
        let (x_pos, y_pos) = match (x.find(is_digit), y.find(is_digit)) {
            // No numeric content left on either side.
            (None, None) => return x.cmp(y),
            // A suffix that ran out of digits sorts after one that still
            // has numeric content ahead.
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(x_pos), Some(y_pos)) => (x_pos, y_pos),
        };

        // Non-digit prefixes settle the order unless they match exactly.
        let (x_seg, y_seg) = (&x[..x_pos], &y[..y_pos]);
        if x_seg != y_seg {
            return x_seg.cmp(y_seg);
        }

        x = &x[x_pos..];
        y = &y[y_pos..];

        let x_end = x.find(|c| !is_digit(c)).unwrap_or(x.len());
        let y_end = y.find(|c| !is_digit(c)).unwrap_or(y.len());

        let ord = compare_digit_runs(&x[..x_end], &y[..y_end]);
        if ord != Ordering::Equal {
            return ord;
        }

        // Equal value but different padding: `1` ranks before `001`.
        if x_end != y_end {
            return x_end.cmp(&y_end);
        }

        x = &x[x_end..];
        y = &y[y_end..];
    }
}

/// Compare two digit runs by numeric value without fixed-width parsing.
///
/// Leading zeros are stripped and the remainders ranked by length, then
/// code point by code point. Arbitrarily long runs therefore never
/// overflow, where an integer conversion would.
fn compare_digit_runs(x: &str, y: &str) -> Ordering {
    // Both runs come from a digit scan and start with a digit.
    debug_assert!(
        !x.is_empty() && !y.is_empty(),
        "digit scan produced an empty run"
    );

    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');

    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

/// Sort records in place into natural order.
///
/// Large sequences are handed to rayon when more than one CPU is
/// available; the comparator holds no shared state, so independent
/// sequences may be sorted concurrently.
pub fn sort(records: &mut [String]) {
    use rayon::prelude::*;

    if records.len() >= PARALLEL_THRESHOLD && num_cpus::get() > 1 {
        records.par_sort_unstable_by(|a, b| compare(a, b));
    } else {
        records.sort_unstable_by(|a, b| compare(a, b));
    }
}
