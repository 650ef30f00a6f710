//! Dice rollers.
//!
//! The engine never touches randomness directly; it asks a `DiceRoller`
//! for a pair. Real games use `GameRng`, tests use `ScriptedDice`.

use std::collections::VecDeque;

use super::DicePair;
use crate::core::GameRng;

/// Source of dice throws.
pub trait DiceRoller {
    /// Throw two independent six-sided dice.
    fn roll(&mut self) -> DicePair;
}

impl DiceRoller for GameRng {
    fn roll(&mut self) -> DicePair {
        let first = self.gen_die();
        let second = self.gen_die();
        DicePair::new(first, second)
    }
}

impl<R: DiceRoller + ?Sized> DiceRoller for &mut R {
    fn roll(&mut self) -> DicePair {
        (**self).roll()
    }
}

/// Replays a fixed list of throws in order.
///
/// Running past the end is a bug in the calling test and panics.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    throws: VecDeque<DicePair>,
}

impl ScriptedDice {
    /// Create a roller from `(first, second)` pairs.
    pub fn new(throws: impl IntoIterator<Item = (u8, u8)>) -> Self {
        Self {
            throws: throws.into_iter().map(DicePair::from).collect(),
        }
    }

    /// Queue one more throw.
    pub fn push(&mut self, pair: DicePair) {
        self.throws.push_back(pair);
    }

    /// Throws not yet used.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.throws.len()
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self) -> DicePair {
        self.throws
            .pop_front()
            .expect("scripted dice ran out of throws")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_roller_in_range() {
        let mut rng = GameRng::new(42);
        for _ in 0..500 {
            let pair = rng.roll();
            assert!((1..=6).contains(&pair.first));
            assert!((1..=6).contains(&pair.second));
        }
    }

    #[test]
    fn test_rng_roller_is_deterministic() {
        let mut a = GameRng::new(5);
        let mut b = GameRng::new(5);
        for _ in 0..50 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_scripted_order() {
        let mut dice = ScriptedDice::new([(3, 4), (5, 5)]);
        dice.push(DicePair::new(6, 1));

        assert_eq!(dice.remaining(), 3);
        assert_eq!(dice.roll(), DicePair::new(3, 4));
        assert_eq!(dice.roll(), DicePair::new(5, 5));
        assert_eq!(dice.roll(), DicePair::new(6, 1));
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "scripted dice ran out of throws")]
    fn test_scripted_exhausted() {
        let mut dice = ScriptedDice::default();
        dice.roll();
    }

    #[test]
    fn test_roller_by_reference() {
        fn throw_twice(mut roller: impl DiceRoller) -> (DicePair, DicePair) {
            (roller.roll(), roller.roll())
        }

        let mut dice = ScriptedDice::new([(1, 1), (2, 2)]);
        let (a, b) = throw_twice(&mut dice);
        assert_eq!(a, DicePair::new(1, 1));
        assert_eq!(b, DicePair::new(2, 2));
        assert_eq!(dice.remaining(), 0);
    }
}
