//! Natural version ordering and the compatible-release successor bound.
//!
//! Versions are never parsed into a structured type. Ordering works directly
//! on the strings:
//! - Maximal runs of ASCII digits compare as unsigned integers by value
//! - Any other byte compares byte-wise against the byte at the same position
//! - When one string runs out first, it sorts first
//!
//! so `1.9` < `1.10` and `1.0` == `1.00`. Exact equality (the `=` operator)
//! is a separate notion and uses plain byte comparison.

use std::cmp::Ordering;

/// Number of `9`s written after the last separator by [`successor`].
pub const SUCCESSOR_WIDTH: usize = 10;

/// Compare two version strings with natural (numeric-run aware) ordering.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let a_end = digit_run_end(a, i);
            let b_end = digit_run_end(b, j);
            let ord = compare_numeric(&a[i..a_end], &b[j..b_end]);
            if ord != Ordering::Equal {
                return ord;
            }
            i = a_end;
            j = b_end;
        } else {
            let ord = a[i].cmp(&b[j]);
            if ord != Ordering::Equal {
                return ord;
            }
            i += 1;
            j += 1;
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run_end(s: &[u8], start: usize) -> usize {
    s[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(s.len(), |n| start + n)
}

/// Compare two digit runs by value without converting them to integers,
/// so runs of any length are handled.
fn compare_numeric(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(run: &[u8]) -> &[u8] {
    let zeros = run.iter().take_while(|&&c| c == b'0').count();
    &run[zeros..]
}

/// Compute the exclusive upper bound used by the compatible-release operator.
///
/// Everything after the last `.` is replaced with [`SUCCESSOR_WIDTH`] nines;
/// a version without any `.` gets one appended first. `1.2.3` becomes
/// `1.2.9999999999` and `2` becomes `2.9999999999`.
///
/// This is an approximation: it sorts above any plausible increment of the
/// last segment and below the next increment of the one before it, without
/// doing arithmetic on the version.
pub fn successor(version: &str) -> String {
    let base = match version.rfind('.') {
        Some(dot) => &version[..dot],
        None => version,
    };
    let mut next = String::with_capacity(base.len() + 1 + SUCCESSOR_WIDTH);
    next.push_str(base);
    next.push('.');
    next.extend(std::iter::repeat('9').take(SUCCESSOR_WIDTH));
    next
}
