//! Step partitioning — split a total length into positive parts.
//!
//! Purpose
//! -------
//! Provide the single partitioner used for both process orders and
//! parameter-drift sub-parts.
//!
//! Key behaviors
//! -------------
//! - Strict mode divides evenly; the remainder goes to the last part before
//!   the order is shuffled.
//! - Non-strict (stick-breaking) mode draws each part uniformly from
//!   `[1, remaining)`; the last allowed part takes whatever remains, the loop
//!   stops early once `remaining <= 1`, and a corrective part restores the
//!   exact total. The result is shuffled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every returned part is `>= 1` and the parts sum to `num_max`.
//! - Strict mode returns `min(num_parts, num_max)` parts: more parts than
//!   steps cannot all be positive.
//! - Non-strict mode returns at most `num_parts` parts.
//! - `num_max == 0` yields an empty list; `num_parts <= 1` yields
//!   `[num_max]`.
use rand::{Rng, RngCore, seq::SliceRandom};

/// Split `num_max` into positive parts; see the module docs for the modes.
pub fn generate_steps_number(
    num_max: usize, num_parts: usize, strict_num_parts: bool, rng: &mut dyn RngCore,
) -> Vec<usize> {
    if num_max == 0 {
        return Vec::new();
    }
    if num_parts <= 1 {
        return vec![num_max];
    }
    let mut steps = if strict_num_parts {
        strict_parts(num_max, num_parts)
    } else {
        stick_breaking_parts(num_max, num_parts, rng)
    };
    steps.shuffle(rng);
    steps
}

fn strict_parts(num_max: usize, num_parts: usize) -> Vec<usize> {
    let parts = num_parts.min(num_max);
    let mut steps = vec![num_max / parts; parts];
    if let Some(last) = steps.last_mut() {
        *last += num_max % parts;
    }
    steps
}

fn stick_breaking_parts(num_max: usize, num_parts: usize, rng: &mut dyn RngCore) -> Vec<usize> {
    let mut steps = Vec::with_capacity(num_parts);
    let mut remaining = num_max;
    while remaining > 1 && steps.len() < num_parts {
        let part =
            if steps.len() == num_parts - 1 { remaining } else { rng.gen_range(1..remaining) };
        remaining -= part;
        steps.push(part);
    }
    // Early stop leaves a single step unassigned.
    if remaining > 0 {
        steps.push(remaining);
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Degenerate inputs (zero total, a single part).
    // - Exact strict division with remainder placement.
    // - Sum / positivity / length properties of both modes (proptest).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify degenerate inputs.
    //
    // Expect
    // ------
    // - num_max = 0 → []; num_parts ∈ {0, 1} → [num_max].
    fn degenerate_inputs() {
        let mut rng = StdRng::seed_from_u64(1);

        assert!(generate_steps_number(0, 3, true, &mut rng).is_empty());
        assert_eq!(generate_steps_number(9, 1, false, &mut rng), vec![9]);
        assert_eq!(generate_steps_number(9, 0, true, &mut rng), vec![9]);
    }

    #[test]
    // Purpose
    // -------
    // Verify strict division puts the remainder on one part.
    //
    // Given
    // -----
    // - num_max = 10, num_parts = 3 → [3, 3, 4] before shuffling.
    //
    // Expect
    // ------
    // - Sorted result equals [3, 3, 4].
    fn strict_division_places_remainder() {
        let mut rng = StdRng::seed_from_u64(2);

        let mut steps = generate_steps_number(10, 3, true, &mut rng);
        steps.sort_unstable();

        assert_eq!(steps, vec![3, 3, 4]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a strict request for more parts than steps still yields
    // positive parts.
    fn strict_clamps_parts_to_total() {
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(generate_steps_number(3, 8, true, &mut rng), vec![1, 1, 1]);
    }

    proptest! {
        #[test]
        fn strict_parts_are_exact(
            (num_max, num_parts) in (1usize..500).prop_flat_map(|m| (Just(m), 1..=m)),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);

            let steps = generate_steps_number(num_max, num_parts, true, &mut rng);

            prop_assert_eq!(steps.len(), num_parts);
            prop_assert!(steps.iter().all(|&s| s >= 1));
            prop_assert_eq!(steps.iter().sum::<usize>(), num_max);
        }

        #[test]
        fn stick_breaking_parts_sum_to_total(
            num_max in 1usize..500, num_parts in 1usize..100, seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);

            let steps = generate_steps_number(num_max, num_parts, false, &mut rng);

            prop_assert!(!steps.is_empty());
            prop_assert!(steps.len() <= num_parts);
            prop_assert!(steps.iter().all(|&s| s >= 1));
            prop_assert_eq!(steps.iter().sum::<usize>(), num_max);
        }
    }
}
