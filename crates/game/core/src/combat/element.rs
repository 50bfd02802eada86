//! Cyclic element matchup.
//!
//! ```text
//! Fire > Grass > Water > Fire
//! ```
//!
//! With the elements ordered `Fire = 0, Grass = 1, Water = 2`, an element beats
//! the one whose ordinal is exactly one step after it modulo 3. This is the
//! only matchup definition in the crate.

use crate::action::Element;

/// Outcome of pitting one element against another, from the first side's view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Matchup {
    Win,
    Loss,
    Draw,
}

impl Matchup {
    /// The same matchup seen from the other side.
    pub const fn reversed(self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::Draw => Self::Draw,
        }
    }
}

impl Element {
    /// Returns true if `self` has the advantage over `other`.
    pub const fn beats(self, other: Element) -> bool {
        (other.ordinal() + Element::COUNT - self.ordinal()) % Element::COUNT == 1
    }

    pub const fn versus(self, other: Element) -> Matchup {
        if self.ordinal() == other.ordinal() {
            Matchup::Draw
        } else if self.beats(other) {
            Matchup::Win
        } else {
            Matchup::Loss
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn canonical_cycle() {
        assert!(Element::Fire.beats(Element::Grass));
        assert!(Element::Grass.beats(Element::Water));
        assert!(Element::Water.beats(Element::Fire));

        assert!(!Element::Grass.beats(Element::Fire));
        assert!(!Element::Water.beats(Element::Grass));
        assert!(!Element::Fire.beats(Element::Water));
    }

    #[test]
    fn exactly_one_side_wins_distinct_pairs() {
        for a in Element::iter() {
            for b in Element::iter() {
                if a == b {
                    assert!(!a.beats(b));
                    assert_eq!(a.versus(b), Matchup::Draw);
                } else {
                    assert!(a.beats(b) ^ b.beats(a), "{a} vs {b}");
                    assert_eq!(a.versus(b), b.versus(a).reversed());
                }
            }
        }
    }

    #[test]
    fn every_element_wins_and_loses_once() {
        for a in Element::iter() {
            let wins = Element::iter().filter(|b| a.beats(*b)).count();
            let losses = Element::iter().filter(|b| b.beats(a)).count();
            assert_eq!((wins, losses), (1, 1));
        }
    }
}
