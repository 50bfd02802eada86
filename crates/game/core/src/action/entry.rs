//! One player's committed action for one round.

use core::fmt;
use core::str::FromStr;

use crate::error::{DuelError, ErrorSeverity};

use super::codes::{ActionCode, Direction, Element};

/// Errors raised while building or decoding an [`ActionEntry`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("entry code must be exactly 5 characters, got {len}")]
    InvalidLength { len: usize },

    #[error("unknown action code {code:?}")]
    UnknownAction { code: char },

    #[error("unknown element code {code:?}")]
    UnknownElement { code: char },

    #[error("unknown direction code {code:?}")]
    UnknownDirection { code: char },

    #[error("angle must be two decimal digits, got {text:?}")]
    InvalidAngle { text: String },

    #[error("angle {angle} exceeds the two-digit maximum of 99")]
    AngleOutOfRange { angle: u32 },
}

impl DuelError for EntryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownAction { .. } | Self::UnknownElement { .. } => {
                ErrorSeverity::Configuration
            }
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "ENTRY_INVALID_LENGTH",
            Self::UnknownAction { .. } => "ENTRY_UNKNOWN_ACTION",
            Self::UnknownElement { .. } => "ENTRY_UNKNOWN_ELEMENT",
            Self::UnknownDirection { .. } => "ENTRY_UNKNOWN_DIRECTION",
            Self::InvalidAngle { .. } => "ENTRY_INVALID_ANGLE",
            Self::AngleOutOfRange { .. } => "ENTRY_ANGLE_OUT_OF_RANGE",
        }
    }
}

/// A resolved round action: what, with which element, leaning where, how far.
///
/// Entries are immutable once built. The angle is kept private so the
/// two-digit invariant (`0..=99`) holds for every constructed value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ActionEntry {
    pub action: ActionCode,
    pub element: Option<Element>,
    pub direction: Direction,
    angle: u8,
}

impl ActionEntry {
    /// Largest encodable angle.
    pub const MAX_ANGLE: u8 = 99;
    /// Length of the wire encoding.
    pub const ENCODED_LEN: usize = 5;

    /// Builds an entry, rejecting angles that do not fit two digits.
    pub fn new(
        action: ActionCode,
        element: Option<Element>,
        direction: Direction,
        angle: u32,
    ) -> Result<Self, EntryError> {
        if angle > u32::from(Self::MAX_ANGLE) {
            return Err(EntryError::AngleOutOfRange { angle });
        }

        Ok(Self {
            action,
            element,
            direction,
            angle: angle as u8,
        })
    }

    /// The neutral entry used for rounds a player never committed.
    pub const fn neutral() -> Self {
        Self {
            action: ActionCode::None,
            element: None,
            direction: Direction::Straight,
            angle: 0,
        }
    }

    pub const fn attack(element: Element, direction: Direction, angle: u8) -> Self {
        Self::elemental(ActionCode::Attack, element, direction, angle)
    }

    pub const fn defend(element: Element, direction: Direction, angle: u8) -> Self {
        Self::elemental(ActionCode::Defend, element, direction, angle)
    }

    const fn elemental(action: ActionCode, element: Element, direction: Direction, angle: u8) -> Self {
        let angle = if angle > Self::MAX_ANGLE {
            Self::MAX_ANGLE
        } else {
            angle
        };

        Self {
            action,
            element: Some(element),
            direction,
            angle,
        }
    }

    pub const fn angle(&self) -> u8 {
        self.angle
    }

    pub const fn is_neutral(&self) -> bool {
        matches!(self.action, ActionCode::None)
    }
}

impl fmt::Display for ActionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{:02}",
            self.action.code(),
            Element::code_of(self.element),
            self.direction.code(),
            self.angle
        )
    }
}

impl FromStr for ActionEntry {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != Self::ENCODED_LEN {
            return Err(EntryError::InvalidLength { len: chars.len() });
        }

        let action =
            ActionCode::from_code(chars[0]).ok_or(EntryError::UnknownAction { code: chars[0] })?;
        let element = match chars[1] {
            'N' => None,
            code => Some(Element::from_code(code).ok_or(EntryError::UnknownElement { code })?),
        };
        let direction = Direction::from_code(chars[2])
            .ok_or(EntryError::UnknownDirection { code: chars[2] })?;

        let (tens, ones) = (chars[3], chars[4]);
        let angle = match (tens.to_digit(10), ones.to_digit(10)) {
            (Some(tens), Some(ones)) => tens * 10 + ones,
            _ => {
                return Err(EntryError::InvalidAngle {
                    text: [tens, ones].iter().collect(),
                });
            }
        };

        Self::new(action, element, direction, angle)
    }
}

impl TryFrom<String> for ActionEntry {
    type Error = EntryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ActionEntry> for String {
    fn from(entry: ActionEntry) -> Self {
        entry.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixture_codes() {
        let entry: ActionEntry = "PF+45".parse().unwrap();
        assert_eq!(entry.action, ActionCode::Attack);
        assert_eq!(entry.element, Some(Element::Fire));
        assert_eq!(entry.direction, Direction::Right);
        assert_eq!(entry.angle(), 45);

        let entry: ActionEntry = "DW-07".parse().unwrap();
        assert_eq!(entry.action, ActionCode::Defend);
        assert_eq!(entry.element, Some(Element::Water));
        assert_eq!(entry.direction, Direction::Left);
        assert_eq!(entry.angle(), 7);
    }

    #[test]
    fn display_keeps_field_order_and_digit_width() {
        let entry = ActionEntry::defend(Element::Grass, Direction::Straight, 3);
        assert_eq!(entry.to_string(), "DG=03");
        assert_eq!(ActionEntry::neutral().to_string(), "NN=00");
    }

    #[test]
    fn rejects_malformed_codes() {
        assert_eq!(
            "PF+4".parse::<ActionEntry>(),
            Err(EntryError::InvalidLength { len: 4 })
        );
        assert_eq!(
            "XF+45".parse::<ActionEntry>(),
            Err(EntryError::UnknownAction { code: 'X' })
        );
        assert_eq!(
            "PL+45".parse::<ActionEntry>(),
            Err(EntryError::UnknownElement { code: 'L' })
        );
        assert_eq!(
            "PF*45".parse::<ActionEntry>(),
            Err(EntryError::UnknownDirection { code: '*' })
        );
        assert!(matches!(
            "PF+4a".parse::<ActionEntry>(),
            Err(EntryError::InvalidAngle { .. })
        ));
    }

    #[test]
    fn angle_is_bounded_to_two_digits() {
        assert_eq!(
            ActionEntry::new(ActionCode::Attack, Some(Element::Fire), Direction::Left, 100),
            Err(EntryError::AngleOutOfRange { angle: 100 })
        );
        assert_eq!(ActionEntry::attack(Element::Fire, Direction::Left, 250).angle(), 99);
    }

    #[test]
    fn unknown_codes_are_configuration_errors() {
        let err = "PZ+10".parse::<ActionEntry>().unwrap_err();
        assert!(err.severity().is_configuration());
        assert_eq!(err.error_code(), "ENTRY_UNKNOWN_ELEMENT");
    }
}
