//! Conflict resolution between overlapping intervals.
//!
//! # Algorithm Summary
//!
//! 1. Sort intervals by [`Interval::sort_key`] (stable).
//! 2. Seed the current winner with the first interval.
//! 3. Compare the current winner with each following interval in turn. The
//!    pairwise decision updates the [`ResultStore`] and picks the winner
//!    carried into the next comparison.
//!
//! The fold is order dependent: each step depends on the winner of the
//! previous one, so it runs strictly sequentially.
//!
//! Two behaviors of the fold are easy to miss:
//!
//! - With fewer than two intervals no comparison happens and the store stays
//!   empty, so a lone interval is never emitted.
//! - "Close" is judged on the sort key, not on real overlap, see [`is_close`].

use crate::interval::Interval;
use crate::store::ResultStore;

/// Maximum sort-key distance at which two intervals may conflict.
pub const CLOSENESS_WINDOW: u32 = 59;

/// Result of comparing the current winner with the next interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The current winner survives and is committed to the store.
    KeepCurrent,
    /// The next interval replaces the current winner's slot.
    Supersede,
    /// No conflict: the next interval is added alongside earlier winners.
    Append,
}

/// Resolves conflicts in an unsorted batch of intervals.
pub fn resolve_conflicts(mut intervals: Vec<Interval>) -> ResultStore {
    intervals.sort_by_key(Interval::sort_key);
    fold_sorted(&intervals)
}

/// Folds intervals already sorted by sort key into a fresh store.
pub fn fold_sorted(sorted: &[Interval]) -> ResultStore {
    let mut store = ResultStore::new();

    let [first, rest @ ..] = sorted else {
        return store;
    };
    if rest.is_empty() {
        tracing::debug!(interval = %first, "single interval, nothing to compare against");
        return store;
    }

    let mut current = first.clone();
    for next in rest {
        current = resolve_pair(current, next.clone(), &mut store);
    }

    tracing::debug!(
        intervals = sorted.len(),
        kept = store.len(),
        "conflict resolution finished"
    );
    store
}

/// Decides between `current` and `next`, applies the decision to `store`
/// and returns the winner.
pub fn resolve_pair(current: Interval, next: Interval, store: &mut ResultStore) -> Interval {
    let outcome = classify(&current, &next);
    tracing::trace!(%current, %next, ?outcome, "resolved pair");

    match outcome {
        Outcome::KeepCurrent => {
            store.insert(current.clone());
            current
        }
        Outcome::Supersede => {
            store.remove_by_start(current.start_of_day());
            store.insert(next.clone());
            next
        }
        Outcome::Append => {
            store.insert(next.clone());
            next
        }
    }
}

/// Pure tie-break between the current winner and the next interval.
///
/// Rules are tried in order:
///
/// 1. Identical shape: the lower priority value wins. Equal priorities go to
///    `next`.
/// 2. Same start: the earlier end wins.
/// 3. Same end: the later start wins.
/// 4. `next` strictly inside `current`: `next` wins.
///
/// Anything else, including pairs that are not [close](is_close), appends.
pub fn classify(current: &Interval, next: &Interval) -> Outcome {
    if !is_close(current, next) {
        return Outcome::Append;
    }

    let (cur_start, cur_end) = (current.start_of_day(), current.end_of_day());
    let (next_start, next_end) = (next.start_of_day(), next.end_of_day());

    if cur_start == next_start && cur_end == next_end {
        return if current.priority() < next.priority() {
            Outcome::KeepCurrent
        } else {
            Outcome::Supersede
        };
    }

    if cur_start == next_start {
        return if cur_end < next_end {
            Outcome::KeepCurrent
        } else {
            Outcome::Supersede
        };
    }

    if cur_end == next_end {
        return if cur_start < next_start {
            Outcome::Supersede
        } else {
            Outcome::KeepCurrent
        };
    }

    if next_start > cur_start && next_end < cur_end {
        return Outcome::Supersede;
    }

    Outcome::Append
}

/// Loose proximity test on sort keys.
///
/// This is not an overlap test. It can flag intervals that do not overlap
/// and miss ones that do.
pub fn is_close(current: &Interval, next: &Interval) -> bool {
    let (a, b) = (current.sort_key(), next.sort_key());
    a == b || a + CLOSENESS_WINDOW >= b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::tests::interval;

    fn rendered(store: &ResultStore) -> Vec<String> {
        store.iter().map(ToString::to_string).collect()
    }

    // ========== Fold Edge Cases ==========

    #[test]
    fn empty_input_yields_empty_store() {
        assert!(resolve_conflicts(Vec::new()).is_empty());
    }

    #[test]
    fn single_interval_is_never_committed() {
        let store = resolve_conflicts(vec![interval("Posh", 0, "09:00", "09:30")]);
        assert!(store.is_empty());
    }

    #[test]
    fn two_unrelated_intervals_keep_only_the_second() {
        // The seed is only ever committed by a KeepCurrent or by being
        // appended as someone's `next`.
        let store = resolve_conflicts(vec![
            interval("Posh", 0, "09:00", "09:30"),
            interval("Posh", 0, "14:00", "14:20"),
        ]);
        assert_eq!(rendered(&store), ["Posh 14:00 14:20"]);
    }

    // ========== Closeness ==========

    #[test]
    fn closeness_window_boundary() {
        let a = interval("Posh", 0, "09:00", "09:30"); // key 1110
        let b = interval("Posh", 0, "09:29", "10:00"); // key 1169
        let c = interval("Posh", 0, "09:30", "10:00"); // key 1170
        assert!(is_close(&a, &b));
        assert!(!is_close(&a, &c));
    }

    #[test]
    fn closeness_can_flag_disjoint_intervals() {
        let a = interval("Posh", 0, "09:00", "09:10");
        let b = interval("Posh", 0, "09:15", "09:20");
        assert!(is_close(&a, &b));
        assert_eq!(classify(&a, &b), Outcome::Append);
    }

    #[test]
    fn closeness_can_miss_real_overlap() {
        let a = interval("Posh", 0, "09:00", "10:00"); // key 1140
        let b = interval("Grotty", 1, "09:59", "10:30"); // key 1229
        assert!(!is_close(&a, &b));
        assert_eq!(classify(&a, &b), Outcome::Append);
    }

    // ========== Rule 1: identical shape ==========

    #[test]
    fn identical_shape_lower_priority_value_wins() {
        let posh = interval("Posh", 0, "10:00", "10:30");
        let grotty = interval("Grotty", 1, "10:00", "10:30");

        assert_eq!(classify(&posh, &grotty), Outcome::KeepCurrent);
        assert_eq!(classify(&grotty, &posh), Outcome::Supersede);

        for input in [
            vec![posh.clone(), grotty.clone()],
            vec![grotty, posh],
        ] {
            let store = resolve_conflicts(input);
            assert_eq!(rendered(&store), ["Posh 10:00 10:30"]);
        }
    }

    #[test]
    fn identical_shape_equal_priority_goes_to_next() {
        let a = interval("Posh", 0, "10:00", "10:30");
        let b = interval("Posh", 0, "10:00", "10:30");
        assert_eq!(classify(&a, &b), Outcome::Supersede);
    }

    // ========== Rule 2: same start ==========

    #[test]
    fn same_start_shorter_wins() {
        let short = interval("Grotty", 1, "09:00", "09:30");
        let long = interval("Posh", 0, "09:00", "09:45");
        assert_eq!(classify(&short, &long), Outcome::KeepCurrent);
        assert_eq!(classify(&long, &short), Outcome::Supersede);

        let store = resolve_conflicts(vec![long, short]);
        assert_eq!(rendered(&store), ["Grotty 09:00 09:30"]);
    }

    // ========== Rule 3: same end ==========

    #[test]
    fn same_end_later_start_wins() {
        let early = interval("Posh", 0, "09:00", "09:45");
        let late = interval("Grotty", 1, "09:15", "09:45");
        assert_eq!(classify(&early, &late), Outcome::Supersede);
        assert_eq!(classify(&late, &early), Outcome::KeepCurrent);

        let store = resolve_conflicts(vec![late, early]);
        assert_eq!(rendered(&store), ["Grotty 09:15 09:45"]);
    }

    // ========== Rule 4: nesting ==========

    #[test]
    fn nested_interval_replaces_container() {
        let outer = interval("Posh", 0, "10:00", "10:50");
        let inner = interval("Grotty", 1, "10:10", "10:40");
        assert_eq!(classify(&outer, &inner), Outcome::Supersede);

        let store = resolve_conflicts(vec![outer, inner]);
        assert_eq!(rendered(&store), ["Grotty 10:10 10:40"]);
    }

    #[test]
    fn nested_same_source() {
        let store = resolve_conflicts(vec![
            interval("Posh", 0, "10:00", "10:50"),
            interval("Posh", 0, "10:10", "10:40"),
        ]);
        assert_eq!(rendered(&store), ["Posh 10:10 10:40"]);
    }

    #[test]
    fn container_after_nested_is_appended() {
        // Only `next` inside `current` is a nesting; the reverse falls through.
        let inner = interval("Posh", 0, "10:10", "10:40");
        let outer = interval("Posh", 0, "10:00", "10:50");
        assert_eq!(classify(&inner, &outer), Outcome::Append);
    }

    // ========== Rule 5: partial overlap ==========

    #[test]
    fn partial_overlap_appends() {
        let a = interval("Posh", 0, "09:00", "09:40");
        let b = interval("Grotty", 1, "09:20", "10:00");
        assert_eq!(classify(&a, &b), Outcome::Append);
    }

    // ========== Store Interaction ==========

    #[test]
    fn keep_current_is_noop_when_slot_taken() {
        let mut store = ResultStore::new();
        store.insert(interval("Grotty", 1, "09:00", "09:50"));

        let current = interval("Posh", 0, "09:00", "09:30");
        let next = interval("Posh", 0, "09:00", "09:40");
        let winner = resolve_pair(current, next, &mut store);

        assert_eq!(winner.to_string(), "Posh 09:00 09:30");
        assert_eq!(rendered(&store), ["Grotty 09:00 09:50"]);
    }

    #[test]
    fn supersede_vacates_by_start_time() {
        let mut store = ResultStore::new();
        store.insert(interval("Grotty", 1, "09:00", "09:50"));

        let current = interval("Posh", 0, "09:00", "09:45");
        let next = interval("Posh", 0, "09:10", "09:40");
        let winner = resolve_pair(current, next, &mut store);

        assert_eq!(winner.to_string(), "Posh 09:10 09:40");
        assert_eq!(rendered(&store), ["Posh 09:10 09:40"]);
    }

    #[test]
    fn separate_clusters_all_survive() {
        let store = resolve_conflicts(vec![
            interval("Posh", 0, "09:00", "09:30"),
            interval("Grotty", 1, "09:00", "09:45"),
            interval("Posh", 0, "12:00", "12:40"),
            interval("Grotty", 1, "12:10", "12:30"),
            interval("Grotty", 1, "16:00", "16:30"),
        ]);
        assert_eq!(
            rendered(&store),
            [
                "Posh 09:00 09:30",
                "Grotty 12:10 12:30",
                "Grotty 16:00 16:30"
            ]
        );
    }

    #[test]
    fn winner_carries_into_next_comparison() {
        // 09:00-09:50 is replaced by the nested 09:10-09:40, which is then
        // replaced by 09:15-09:40 on the shared end.
        let store = resolve_conflicts(vec![
            interval("Posh", 0, "09:00", "09:50"),
            interval("Posh", 0, "09:10", "09:40"),
            interval("Grotty", 1, "09:15", "09:40"),
        ]);
        assert_eq!(rendered(&store), ["Grotty 09:15 09:40"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        // Same key, different shapes: input order decides which is `current`.
        let a = interval("Posh", 0, "09:00", "10:00");
        let b = interval("Grotty", 1, "09:20", "09:40");
        assert_eq!(a.sort_key(), b.sort_key());

        let store = resolve_conflicts(vec![a.clone(), b.clone()]);
        assert_eq!(rendered(&store), ["Grotty 09:20 09:40"]);

        // Reversed, the container is not nested in `current`, so it appends.
        let store = resolve_conflicts(vec![b, a]);
        assert_eq!(rendered(&store), ["Posh 09:00 10:00"]);
    }
}
