//! Single trial evaluation
use rand::Rng;

use crate::door::generate_doors;
use crate::reveal::resolve_reveal;
use crate::rng::RngBundle;
use crate::strategy::Strategy;

/// Play one full trial and report whether the contestant wins the car.
///
/// Car placement, the contestant pick, and the host reveal each consume their
/// own stream from the bundle, so draws in one concern never shift the others.
///
/// # Panics
///
/// Panics if `door_count` is zero.
#[must_use]
pub fn play_trial(door_count: usize, strategy: Strategy, rng: &RngBundle) -> bool {
    let doors = generate_doors(door_count, &mut *rng.placement());
    let pick = rng.pick().gen_range(0..door_count);
    let reveal = resolve_reveal(pick, &doors, &mut *rng.reveal());

    reveal.is_some_and(|reveal| {
        let final_pick = if strategy.switches() {
            reveal.remaining.id
        } else {
            reveal.picked.id
        };
        final_pick == reveal.car.id
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_door_always_wins() {
        for strategy in [Strategy::Stay, Strategy::Switch] {
            let bundle = RngBundle::from_user_seed(11);
            assert!(play_trial(1, strategy, &bundle));
        }
    }

    #[test]
    fn stay_outcome_matches_replayed_pick() {
        for seed in 0..32_u64 {
            let bundle = RngBundle::from_user_seed(seed);
            let won = play_trial(3, Strategy::Stay, &bundle);

            let replay = RngBundle::from_user_seed(seed);
            let doors = generate_doors(3, &mut *replay.placement());
            let pick = replay.pick().gen_range(0..3);
            assert_eq!(won, doors[pick].has_car, "seed {seed}");
        }
    }

    #[test]
    fn switch_outcome_matches_replayed_reveal() {
        for seed in 0..32_u64 {
            let bundle = RngBundle::from_user_seed(seed);
            let won = play_trial(3, Strategy::Switch, &bundle);

            let replay = RngBundle::from_user_seed(seed);
            let doors = generate_doors(3, &mut *replay.placement());
            let pick = replay.pick().gen_range(0..3);
            let reveal =
                resolve_reveal(pick, &doors, &mut *replay.reveal()).expect("pick in lineup");
            assert_eq!(won, reveal.remaining.has_car, "seed {seed}");
        }
    }

    #[test]
    fn reveal_draws_happen_only_when_the_pick_lands_on_the_car() {
        // Range sampling may reject and redraw, so placement and pick
        // counts are lower bounds.
        let mut forced = 0_u32;
        let mut redrawn = 0_u32;
        for seed in 0..200_u64 {
            let bundle = RngBundle::from_user_seed(seed);
            let won = play_trial(3, Strategy::Stay, &bundle);
            assert!(bundle.placement().draws() >= 1, "seed {seed}");
            assert!(bundle.pick().draws() >= 1, "seed {seed}");
            if won {
                redrawn += 1;
                assert!(bundle.reveal().draws() >= 1, "seed {seed}");
            } else {
                forced += 1;
                assert_eq!(bundle.reveal().draws(), 0, "seed {seed}");
            }
        }
        assert!(forced > 0, "some trial must take the forced-hand branch");
        assert!(redrawn > 0, "some trial must take the redraw branch");
    }
}
