use itertools::Itertools;
use tracing::debug;

pub const TARGET: i64 = 2020;

// Combinations are taken over positions, not values:
// two equal values at different positions may pair,
// but no position is ever used twice.
// Results come out in lexicographic order of positions,
// so the first match is the one with the smallest (i, j[, k]).
// Sums are compared in i128, so no i64 input can overflow them.

pub fn find_pair(nums: &[i64], target: i64) -> Option<(i64, i64)> {
    let found = nums
        .iter()
        .tuple_combinations()
        .find(|&(&a, &b)| i128::from(a) + i128::from(b) == i128::from(target))
        .map(|(&a, &b)| (a, b));
    debug!(k = 2, sum = target, found = found.is_some(), "search done");
    found
}

pub fn find_triple(nums: &[i64], target: i64) -> Option<(i64, i64, i64)> {
    let found = nums
        .iter()
        .tuple_combinations()
        .find(|&(&a, &b, &c)| {
            i128::from(a) + i128::from(b) + i128::from(c) == i128::from(target)
        })
        .map(|(&a, &b, &c)| (a, b, c));
    debug!(k = 3, sum = target, found = found.is_some(), "search done");
    found
}

/// Any k. The empty combination sums to 0, so k == 0 only matches a target of 0.
pub fn find_combination(nums: &[i64], k: usize, target: i64) -> Option<Vec<i64>> {
    let found = nums
        .iter()
        .copied()
        .combinations(k)
        .find(|combo| {
            combo.iter().map(|&x| i128::from(x)).sum::<i128>() == i128::from(target)
        });
    debug!(k, sum = target, found = found.is_some(), "search done");
    found
}

/// `None` if the product does not fit in an i64.
pub fn product(nums: &[i64]) -> Option<i64> {
    nums.iter().try_fold(1_i64, |acc, &x| acc.checked_mul(x))
}
