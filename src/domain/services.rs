//! Step transition service for the lemonade cycle.
//!
//! This module provides the single piece of real logic in the application:
//! the advance transition over [`LemonadeState`], including the random
//! draw of the required squeeze count.

use super::models::{LemonadeState, Step};
use rand::Rng;
use std::ops::RangeInclusive;

/// How many squeezes a freshly picked lemon can take, drawn uniformly
/// when the cycle enters [`Step::Squeeze`].
pub const SQUEEZE_RANGE: RangeInclusive<u32> = 2..=6;

/// The four-step cycle controller.
///
/// One externally triggered event exists: advance ("tap"). The transition
/// is total over all four steps and never fails; randomness is injected so
/// callers decide between the thread generator and a seeded one.
///
/// | Current step | Side effect | Next step |
/// |---|---|---|
/// | SelectLemon | draw squeeze count from [2, 6] | Squeeze |
/// | Squeeze | squeeze count -= 1 | Squeeze while count > 0, else Drink |
/// | Drink | none | EmptyGlass |
/// | EmptyGlass | none | SelectLemon |
///
/// # Examples
///
/// ```
/// use lemonade::domain::{LemonadeState, Step, StepController};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let state = StepController::advance(LemonadeState::default(), &mut rng);
/// assert_eq!(state.step(), Step::Squeeze);
/// assert!((2..=6).contains(&state.squeeze_count()));
/// ```
pub struct StepController;

impl StepController {
    /// Advances the cycle by one tap, returning the next state.
    ///
    /// Takes the state by value and returns the successor; the caller
    /// re-renders keyed on the returned `(step, squeeze_count)` pair.
    ///
    /// # Arguments
    ///
    /// * `state` - Current position in the cycle
    /// * `rng` - Generator for the squeeze-count draw on entering Squeeze
    pub fn advance(state: LemonadeState, rng: &mut impl Rng) -> LemonadeState {
        match state.step() {
            Step::SelectLemon => {
                LemonadeState::new(Step::Squeeze, rng.gen_range(SQUEEZE_RANGE))
            }
            Step::Squeeze => {
                // Saturating keeps the transition total even for a
                // hand-built (Squeeze, 0) state.
                let remaining = state.squeeze_count().saturating_sub(1);
                if remaining > 0 {
                    LemonadeState::new(Step::Squeeze, remaining)
                } else {
                    LemonadeState::new(Step::Drink, 0)
                }
            }
            Step::Drink => LemonadeState::new(Step::EmptyGlass, 0),
            Step::EmptyGlass => LemonadeState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_first_advance_enters_squeeze_with_count_in_range() {
        for seed in 0..64 {
            let mut rng = rng(seed);
            let state = StepController::advance(LemonadeState::default(), &mut rng);
            assert_eq!(state.step(), Step::Squeeze);
            assert!(
                (2..=6).contains(&state.squeeze_count()),
                "seed {}: drew {}",
                seed,
                state.squeeze_count()
            );
        }
    }

    #[test]
    fn test_every_squeeze_count_is_reachable() {
        let mut seen = HashSet::new();
        for seed in 0..200 {
            let mut rng = rng(seed);
            let state = StepController::advance(LemonadeState::default(), &mut rng);
            seen.insert(state.squeeze_count());
        }
        assert_eq!(seen, HashSet::from([2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_squeeze_counts_down_then_drinks() {
        let mut rng = rng(7);
        let mut state = StepController::advance(LemonadeState::default(), &mut rng);
        let mut expected = state.squeeze_count();

        // Strictly decreasing while more than one squeeze remains
        while expected > 1 {
            state = StepController::advance(state, &mut rng);
            expected -= 1;
            assert_eq!(state.step(), Step::Squeeze);
            assert_eq!(state.squeeze_count(), expected);
        }

        // The squeeze that reaches zero moves on to drinking
        state = StepController::advance(state, &mut rng);
        assert_eq!(state.step(), Step::Drink);
        assert_eq!(state.squeeze_count(), 0);
    }

    #[test]
    fn test_drink_advances_to_empty_glass() {
        let mut rng = rng(1);
        let state = StepController::advance(LemonadeState::new(Step::Drink, 0), &mut rng);
        assert_eq!(state.step(), Step::EmptyGlass);
        assert_eq!(state.squeeze_count(), 0);
    }

    #[test]
    fn test_empty_glass_restarts_cycle() {
        let mut rng = rng(1);
        let state = StepController::advance(LemonadeState::new(Step::EmptyGlass, 0), &mut rng);
        assert_eq!(state, LemonadeState::default());
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut rng = rng(42);
        let mut state = LemonadeState::default();

        state = StepController::advance(state, &mut rng);
        let squeezes = state.squeeze_count();
        assert_eq!(state.step(), Step::Squeeze);

        for _ in 0..squeezes {
            state = StepController::advance(state, &mut rng);
        }
        assert_eq!(state.step(), Step::Drink);

        state = StepController::advance(state, &mut rng);
        assert_eq!(state.step(), Step::EmptyGlass);

        state = StepController::advance(state, &mut rng);
        assert_eq!(state, LemonadeState::default());
    }

    #[test]
    fn test_long_walk_keeps_count_invariant() {
        let mut rng = rng(99);
        let mut state = LemonadeState::default();
        for _ in 0..10_000 {
            state = StepController::advance(state, &mut rng);
            assert!(state.squeeze_count() <= 6);
            if state.step() != Step::Squeeze {
                assert_eq!(state.squeeze_count(), 0);
            }
        }
    }

    #[test]
    fn test_advance_is_total_for_stale_squeeze_state() {
        // (Squeeze, 0) cannot arise from advances, but the transition
        // still handles it without underflow
        let mut rng = rng(1);
        let state = StepController::advance(LemonadeState::new(Step::Squeeze, 0), &mut rng);
        assert_eq!(state.step(), Step::Drink);
        assert_eq!(state.squeeze_count(), 0);
    }
}
