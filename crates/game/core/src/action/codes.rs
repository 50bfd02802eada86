//! Discrete codes carried by an action entry.

/// What a player does in a round.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionCode {
    /// Idle; cannot block and is hit by any attack.
    #[default]
    None,
    /// Elemental strike.
    Attack,
    /// Elemental parry.
    Defend,
}

impl ActionCode {
    /// Single-character wire code.
    pub const fn code(self) -> char {
        match self {
            Self::None => 'N',
            Self::Attack => 'P',
            Self::Defend => 'D',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'N' => Some(Self::None),
            'P' => Some(Self::Attack),
            'D' => Some(Self::Defend),
            _ => None,
        }
    }

    /// True for the actions that must carry an element.
    pub const fn is_elemental(self) -> bool {
        matches!(self, Self::Attack | Self::Defend)
    }
}

/// Element attached to an attack or defense.
///
/// The discriminants are the cyclic order used by [`Element::beats`]:
/// each element beats the one that follows it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Element {
    Fire = 0,
    Grass = 1,
    Water = 2,
}

impl Element {
    /// Number of elements in the cycle.
    pub const COUNT: u8 = 3;

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Single-character wire code.
    pub const fn code(self) -> char {
        match self {
            Self::Fire => 'F',
            Self::Grass => 'G',
            Self::Water => 'W',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'F' => Some(Self::Fire),
            'G' => Some(Self::Grass),
            'W' => Some(Self::Water),
            _ => None,
        }
    }

    /// Wire code for an optional element (`N` when absent).
    pub const fn code_of(element: Option<Self>) -> char {
        match element {
            Some(element) => element.code(),
            None => 'N',
        }
    }
}

/// Lean of the hand when the entry was committed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    #[default]
    Straight,
}

impl Direction {
    /// Single-character wire code.
    pub const fn code(self) -> char {
        match self {
            Self::Left => '-',
            Self::Right => '+',
            Self::Straight => '=',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            '-' => Some(Self::Left),
            '+' => Some(Self::Right),
            '=' => Some(Self::Straight),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn codes_are_unique_per_enum() {
        let actions: Vec<char> = ActionCode::iter().map(ActionCode::code).collect();
        assert_eq!(actions, vec!['N', 'P', 'D']);

        for element in Element::iter() {
            assert_eq!(Element::from_code(element.code()), Some(element));
        }
        for direction in Direction::iter() {
            assert_eq!(Direction::from_code(direction.code()), Some(direction));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(ActionCode::from_code('X'), None);
        assert_eq!(Element::from_code('N'), None);
        assert_eq!(Direction::from_code('0'), None);
    }

    #[test]
    fn only_attack_and_defend_are_elemental() {
        assert!(!ActionCode::None.is_elemental());
        assert!(ActionCode::Attack.is_elemental());
        assert!(ActionCode::Defend.is_elemental());
    }
}
