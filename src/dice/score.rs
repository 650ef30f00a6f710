//! Ranking a pair of dice.
//!
//! Higher is better; ranks are only compared within one round.
//!
//! - Mexico ({1,2}): 21 or `MEXICO`, depending on `MexicoRule`
//! - Double: `11 * face` (6,6 -> 66)
//! - Anything else: high face in the tens, low face in the ones (6,1 -> 61)

use super::DicePair;
use crate::core::config::{MexicoRule, MEXICO};

/// Is this the unordered pair {1,2}?
#[must_use]
pub fn is_mexico(pair: DicePair) -> bool {
    pair.high() == 2 && pair.low() == 1
}

/// Rank a pair under the given Mexico rule.
///
/// The unrolled sentinel (0,0) ranks 0, below every real throw.
#[must_use]
pub fn score(pair: DicePair, rule: MexicoRule) -> u32 {
    let hi = u32::from(pair.high());
    let lo = u32::from(pair.low());

    if is_mexico(pair) && rule == MexicoRule::Special {
        MEXICO
    } else if pair.is_double() {
        hi * 11
    } else {
        hi * 10 + lo
    }
}
