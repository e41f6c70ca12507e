//! Tie-break rules for ordering scored bonds.
//!
//! Bonds are ordered by the first rule that tells them apart:
//!
//! 1. After-tax yield, higher first (equal within 0.001)
//! 2. Liquidity score, higher first (equal within 0.05)
//! 3. Stability score, higher first (equal within 0.05)
//! 4. Duration, shorter first (unknown counts as 10 years)
//!
//! Tolerance comparisons are not transitive, so ordering goes through
//! [`stable_sort_by`], which is stable and never rejects a comparator.

use std::cmp::Ordering;

use yieldrank_tax::EQUIVALENT_YIELD_TOLERANCE;

use crate::candidate::RankedBond;

/// After-tax yields closer than this are tied.
pub const ATYTW_TOLERANCE: f64 = EQUIVALENT_YIELD_TOLERANCE;

/// Liquidity scores closer than this are tied.
pub const LIQUIDITY_TOLERANCE: f64 = 0.05;

/// Stability scores closer than this are tied.
pub const STABILITY_TOLERANCE: f64 = 0.05;

/// Duration assumed for bonds without one.
pub const DEFAULT_DURATION: f64 = 10.0;

/// A single ordering rule.
pub type RankingRule = fn(&RankedBond, &RankedBond) -> Ordering;

/// The rule chain in priority order, with display names.
pub const RANKING_RULES: [(&str, RankingRule); 4] = [
    ("after-tax yield", by_after_tax_yield),
    ("liquidity", by_liquidity),
    ("stability", by_stability),
    ("duration", by_duration),
];

/// Higher after-tax yield first.
pub fn by_after_tax_yield(a: &RankedBond, b: &RankedBond) -> Ordering {
    descending_with_tolerance(a.atytw, b.atytw, ATYTW_TOLERANCE)
}

/// Higher liquidity first.
pub fn by_liquidity(a: &RankedBond, b: &RankedBond) -> Ordering {
    descending_with_tolerance(a.liquidity_score, b.liquidity_score, LIQUIDITY_TOLERANCE)
}

/// Higher stability first.
pub fn by_stability(a: &RankedBond, b: &RankedBond) -> Ordering {
    descending_with_tolerance(a.stability_score, b.stability_score, STABILITY_TOLERANCE)
}

/// Shorter duration first.
pub fn by_duration(a: &RankedBond, b: &RankedBond) -> Ordering {
    let da = a.duration().unwrap_or(DEFAULT_DURATION);
    let db = b.duration().unwrap_or(DEFAULT_DURATION);
    da.partial_cmp(&db).unwrap_or(Ordering::Equal)
}

/// Applies [`RANKING_RULES`] in order, returning the first decisive result.
pub fn compare_ranked(a: &RankedBond, b: &RankedBond) -> Ordering {
    RANKING_RULES
        .iter()
        .map(|(_, rule)| rule(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Name of the rule that decides between `a` and `b`, if any does.
pub fn deciding_rule(a: &RankedBond, b: &RankedBond) -> Option<&'static str> {
    RANKING_RULES
        .iter()
        .find(|(_, rule)| rule(a, b).is_ne())
        .map(|(name, _)| *name)
}

fn descending_with_tolerance(a: f64, b: f64, tolerance: f64) -> Ordering {
    if (a - b).abs() < tolerance {
        Ordering::Equal
    } else {
        b.partial_cmp(&a).unwrap_or(Ordering::Equal)
    }
}

/// Stable merge sort, `O(n log n)` comparisons.
///
/// A merge takes from the right run only when it compares strictly less,
/// so equal elements keep their input order. Any comparator is accepted;
/// an intransitive one yields some permutation rather than a panic.
pub fn stable_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }

    let mut order: Vec<usize> = (0..items.len()).collect();
    let mut scratch = order.clone();
    merge_sort(&mut order, &mut scratch, &mut |a, b| compare(&items[a], &items[b]));
    apply_order(items, &order);
}

fn merge_sort<F>(order: &mut [usize], scratch: &mut [usize], compare: &mut F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    let len = order.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    merge_sort(&mut order[..mid], &mut scratch[..mid], compare);
    merge_sort(&mut order[mid..], &mut scratch[mid..], compare);

    let (mut left, mut right) = (0, mid);
    for slot in scratch[..len].iter_mut() {
        let take_right =
            left == mid || (right < len && compare(order[right], order[left]) == Ordering::Less);
        if take_right {
            *slot = order[right];
            right += 1;
        } else {
            *slot = order[left];
            left += 1;
        }
    }
    order.copy_from_slice(&scratch[..len]);
}

/// Moves `items[order[k]]` to position `k` in place.
fn apply_order<T>(items: &mut [T], order: &[usize]) {
    for k in 0..order.len() {
        // earlier swaps moved the element at `src` further along its chain
        let mut src = order[k];
        while src < k {
            src = order[src];
        }
        items.swap(k, src);
    }
}
