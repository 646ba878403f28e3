//! Elite selection.
//!
//! Elites are chosen by a single left-to-right scan with first-match
//! replacement, not by a stable top-k sort. The shortlist is seeded with the
//! first `k` individuals in order; every later challenger is compared with
//! the shortlist entries in order and replaces the *first* entry it strictly
//! beats (that entry is removed and the challenger appended). A challenger
//! replaces at most one entry.
//!
//! Because the comparison slot is whichever entry comes first, a weak entry
//! that sits behind a stronger one can survive while the stronger one is
//! displaced:
//!
//! ```
//! use u_evolve::evolve::scan_replace;
//!
//! let distances = [3u64, 10, 2];
//! let elites = scan_replace(&distances, 2, |a, b| a < b);
//! assert_eq!(elites, vec![10, 2]);
//! ```

/// Selects exactly `k` items from `items` by scan-and-replace.
///
/// `is_fitter(a, b)` must return `true` iff `a` is strictly fitter than `b`.
///
/// # Panics
/// Panics if `k` exceeds `items.len()`.
pub fn scan_replace<T, F>(items: &[T], k: usize, is_fitter: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    assert!(
        k <= items.len(),
        "cannot select {k} elites from {} individuals",
        items.len()
    );

    let mut shortlist: Vec<T> = items[..k].to_vec();

    for challenger in &items[k..] {
        if let Some(pos) = shortlist.iter().position(|held| is_fitter(challenger, held)) {
            shortlist.remove(pos);
            shortlist.push(challenger.clone());
        }
    }

    shortlist
}
