//! Neighborhood moves over candidate schedules.
//!
//! Three moves drive both search drivers: a cross-slot swap, an
//! earlier-slot relocation, and a size-matched one-for-many swap. A move
//! may leave the candidate violating capacity or precedence; the drivers
//! discard such candidates rather than repairing them. Every move keeps
//! the global task multiset intact by construction.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::Rng;

use crate::problem::Problem;
use crate::schedule::Schedule;

/// Upper bound on random group draws in the one-for-many swap.
const GROUP_TRIES: usize = 50;

/// Applies one uniformly selected move to `schedule` in place.
///
/// Returns `false` when the sampled move cannot be applied (empty slot,
/// identical slots, no matching group); the caller treats that as a spent
/// iteration.
pub(crate) fn apply_random_move(
    schedule: &mut Schedule,
    problem: &Problem,
    rng: &mut StdRng,
) -> bool {
    if schedule.num_slots() == 0 {
        return false;
    }
    let choice: f64 = rng.gen();
    if choice < 1.0 / 3.0 {
        swap(schedule, rng)
    } else if choice < 2.0 / 3.0 {
        relocate(schedule, rng)
    } else {
        group_swap(schedule, problem, rng)
    }
}

/// Swaps one entry between two distinct slots.
fn swap(schedule: &mut Schedule, rng: &mut StdRng) -> bool {
    let slots = schedule.slots_mut();
    let t1 = rng.gen_range(0..slots.len());
    let t2 = rng.gen_range(0..slots.len());
    if t1 == t2 || slots[t1].is_empty() || slots[t2].is_empty() {
        return false;
    }

    let i1 = rng.gen_range(0..slots[t1].len());
    let i2 = rng.gen_range(0..slots[t2].len());
    let tmp = slots[t1][i1];
    slots[t1][i1] = slots[t2][i2];
    slots[t2][i2] = tmp;
    true
}

/// Moves one entry from a later slot to a random position in an earlier one.
fn relocate(schedule: &mut Schedule, rng: &mut StdRng) -> bool {
    let slots = schedule.slots_mut();
    if slots.len() < 2 {
        return false;
    }
    let t_from = rng.gen_range(1..slots.len());
    if slots[t_from].is_empty() {
        return false;
    }

    let idx = rng.gen_range(0..slots[t_from].len());
    let entry = slots[t_from].remove(idx);
    let t_to = rng.gen_range(0..t_from);
    let insert_at = rng.gen_range(0..=slots[t_to].len());
    slots[t_to].insert(insert_at, entry);
    true
}

/// Swaps one entry against a group of at least two entries of equal total
/// size taken from another slot.
fn group_swap(schedule: &mut Schedule, problem: &Problem, rng: &mut StdRng) -> bool {
    let slots = schedule.slots_mut();
    let t_from = rng.gen_range(0..slots.len());
    if slots[t_from].is_empty() {
        return false;
    }
    let idx_from = rng.gen_range(0..slots[t_from].len());
    let entry = slots[t_from][idx_from];
    let target = u64::from(problem.size_of(entry));

    let valid_to: Vec<usize> = (0..slots.len())
        .filter(|&t| t != t_from && slots[t].len() >= 2)
        .collect();
    if valid_to.is_empty() {
        return false;
    }
    let t_to = valid_to[rng.gen_range(0..valid_to.len())];

    // Draw random subsets of the destination slot until one matches the
    // target size.
    let mut group: Option<Vec<usize>> = None;
    for _ in 0..GROUP_TRIES {
        let group_size = rng.gen_range(2..=slots[t_to].len());
        let picked = index::sample(rng, slots[t_to].len(), group_size).into_vec();
        let total: u64 = picked
            .iter()
            .map(|&i| u64::from(problem.size_of(slots[t_to][i])))
            .sum();
        if total == target {
            group = Some(picked);
            break;
        }
    }
    let Some(mut picked) = group else {
        return false;
    };

    // Pop the group at descending positions, then re-insert each popped
    // entry at the vacated position; the group keeps its original relative
    // order in the destination.
    picked.sort_unstable_by(|a, b| b.cmp(a));
    let group_entries: Vec<_> = picked.iter().map(|&i| slots[t_to][i]).collect();
    for &i in &picked {
        slots[t_to].remove(i);
    }
    slots[t_from].remove(idx_from);
    for &moved in &group_entries {
        slots[t_from].insert(idx_from, moved);
    }
    let insert_at = rng.gen_range(0..=slots[t_to].len());
    slots[t_to].insert(insert_at, entry);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    use crate::algorithms::{Greedy, Solver};
    use crate::problem::Problem;
    use crate::test_utils::{benchmark_problem, placement_multiset, tr};

    #[test]
    fn moves_preserve_the_placement_multiset() {
        let p = benchmark_problem();
        let mut s = Greedy.solve(&p).unwrap();
        let reference = placement_multiset(&s);
        let slot_count = s.num_slots();

        let mut rng = StdRng::seed_from_u64(9);
        let mut applied = 0;
        for _ in 0..500 {
            if apply_random_move(&mut s, &p, &mut rng) {
                applied += 1;
            }
            assert_eq!(placement_multiset(&s), reference);
            assert_eq!(s.num_slots(), slot_count);
        }
        assert!(applied > 0);
    }

    #[test]
    fn single_slot_schedule_admits_no_move() {
        let p = Problem::new(vec![3], vec![vec![1, 2]], vec![vec![vec![], vec![]]]).unwrap();
        let mut s = Greedy.solve(&p).unwrap();
        let frozen = s.clone();

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(!apply_random_move(&mut s, &p, &mut rng));
        }
        assert_eq!(s, frozen);
    }

    #[test]
    fn empty_horizon_admits_no_move() {
        let p = Problem::new(vec![], vec![], vec![]).unwrap();
        let mut s = Schedule::with_slots(0);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!apply_random_move(&mut s, &p, &mut rng));
    }

    #[test]
    fn all_empty_slots_admit_no_move() {
        let p = Problem::new(vec![2, 2, 2], vec![], vec![]).unwrap();
        let mut s = Schedule::with_slots(3);
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            assert!(!apply_random_move(&mut s, &p, &mut rng));
        }
        assert!(s.is_empty());
    }

    #[test]
    fn moves_stay_within_existing_slots() {
        let p = Problem::new(
            vec![4, 4, 4],
            vec![vec![1, 1, 2], vec![2, 1]],
            vec![vec![vec![], vec![], vec![]], vec![vec![], vec![]]],
        )
        .unwrap();
        let mut s = Greedy.solve(&p).unwrap();
        let reference = placement_multiset(&s);
        assert_eq!(reference.len(), 5);
        assert!(reference.contains(&tr(1, 1)));

        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..300 {
            apply_random_move(&mut s, &p, &mut rng);
            assert_eq!(s.num_slots(), 3);
            assert_eq!(placement_multiset(&s), reference);
        }
    }
}
