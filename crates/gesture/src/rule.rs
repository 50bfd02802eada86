//! Gesture rules and the ordered rule table.

use duel_core::{ActionCode, Element};

use crate::constraint::Constraint;
use crate::error::RuleError;
use crate::features::{Finger, FingerState};

/// The five recognisable gestures.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GestureCode {
    Defend,
    Attack,
    Fire,
    Grass,
    Water,
}

impl GestureCode {
    pub const fn symbol(self) -> char {
        match self {
            Self::Defend => 'D',
            Self::Attack => 'P',
            Self::Fire => 'F',
            Self::Grass => 'G',
            Self::Water => 'W',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'D' => Some(Self::Defend),
            'P' => Some(Self::Attack),
            'F' => Some(Self::Fire),
            'G' => Some(Self::Grass),
            'W' => Some(Self::Water),
            _ => None,
        }
    }

    /// The action this gesture arms, if it is an action gesture.
    pub const fn action(self) -> Option<ActionCode> {
        match self {
            Self::Defend => Some(ActionCode::Defend),
            Self::Attack => Some(ActionCode::Attack),
            _ => None,
        }
    }

    /// The element this gesture selects, if it is an element gesture.
    pub const fn element(self) -> Option<Element> {
        match self {
            Self::Fire => Some(Element::Fire),
            Self::Grass => Some(Element::Grass),
            Self::Water => Some(Element::Water),
            _ => None,
        }
    }
}

/// Shape constraints for one finger.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FingerCondition {
    pub stretched: Constraint<bool>,
    pub up: Constraint<bool>,
}

impl FingerCondition {
    pub const fn stretched(stretched: bool) -> Self {
        Self {
            stretched: Constraint::Equals(stretched),
            up: Constraint::Unset,
        }
    }

    pub const fn stretched_up(stretched: bool, up: bool) -> Self {
        Self {
            stretched: Constraint::Equals(stretched),
            up: Constraint::Equals(up),
        }
    }
}

/// Predicate over a [`FingerState`]. Inert data; see [`Condition::matches`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Condition {
    pub index: FingerCondition,
    pub middle: FingerCondition,
    pub ring: FingerCondition,
    pub pinky: FingerCondition,
    /// Maximum angle to the thumb, applied to every stretched finger.
    pub thumb_angle: Constraint<f32>,
    /// Maximum mean hand angle to the vertical.
    pub hand_angle: Constraint<f32>,
}

impl Condition {
    /// Same condition for each finger, `[index, middle, ring, pinky]`.
    pub const fn fingers(fingers: [FingerCondition; 4]) -> Self {
        let [index, middle, ring, pinky] = fingers;
        Self {
            index,
            middle,
            ring,
            pinky,
            thumb_angle: Constraint::Unset,
            hand_angle: Constraint::Unset,
        }
    }

    pub const fn thumb_angle_at_most(mut self, max: f32) -> Self {
        self.thumb_angle = Constraint::AtMost(max);
        self
    }

    pub const fn hand_angle_at_most(mut self, max: f32) -> Self {
        self.hand_angle = Constraint::AtMost(max);
        self
    }

    pub fn finger(&self, finger: Finger) -> &FingerCondition {
        match finger {
            Finger::Index => &self.index,
            Finger::Middle => &self.middle,
            Finger::Ring => &self.ring,
            Finger::Pinky => &self.pinky,
        }
    }

    /// Evaluates the condition.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// stretched flags, up flags, thumb angle, hand angle.
    pub fn matches(&self, state: &FingerState) -> bool {
        let stretched = Finger::ALL.iter().all(|&finger| {
            self.finger(finger)
                .stretched
                .satisfied_by(state.finger(finger).stretched)
        });
        if !stretched {
            return false;
        }

        let up = Finger::ALL
            .iter()
            .all(|&finger| self.finger(finger).up.satisfied_by(state.finger(finger).up));
        if !up {
            return false;
        }

        let thumb = Finger::ALL.iter().all(|&finger| {
            let features = state.finger(finger);
            !features.stretched || self.thumb_angle.satisfied_by(features.angle_to_thumb)
        });
        if !thumb {
            return false;
        }

        self.hand_angle.satisfied_by(state.hand_angle_to_y_axis)
    }

    fn validate(&self, name: &str) -> Result<(), RuleError> {
        let invalid = |field: &'static str| RuleError::InvalidConstraint {
            name: name.to_owned(),
            field,
        };

        for finger in Finger::ALL {
            let condition = self.finger(finger);
            if matches!(condition.stretched, Constraint::AtMost(_)) {
                return Err(invalid("stretched"));
            }
            if matches!(condition.up, Constraint::AtMost(_)) {
                return Err(invalid("up"));
            }
        }
        if matches!(self.thumb_angle, Constraint::Equals(_)) {
            return Err(invalid("thumb_angle"));
        }
        if matches!(self.hand_angle, Constraint::Equals(_)) {
            return Err(invalid("hand_angle"));
        }
        Ok(())
    }
}

/// A named condition and the code it yields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureRule {
    pub name: String,
    pub condition: Condition,
    #[cfg_attr(feature = "serde", serde(default))]
    pub action: ActionCode,
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Option<Element>,
}

impl GestureRule {
    pub fn action(name: impl Into<String>, condition: Condition, action: ActionCode) -> Self {
        Self {
            name: name.into(),
            condition,
            action,
            element: None,
        }
    }

    pub fn element(name: impl Into<String>, condition: Condition, element: Element) -> Self {
        Self {
            name: name.into(),
            condition,
            action: ActionCode::None,
            element: Some(element),
        }
    }

    /// The rule's gesture code, `None` unless exactly one of action/element is set.
    pub fn code(&self) -> Option<GestureCode> {
        match (self.action, self.element) {
            (ActionCode::Defend, None) => Some(GestureCode::Defend),
            (ActionCode::Attack, None) => Some(GestureCode::Attack),
            (ActionCode::None, Some(Element::Fire)) => Some(GestureCode::Fire),
            (ActionCode::None, Some(Element::Grass)) => Some(GestureCode::Grass),
            (ActionCode::None, Some(Element::Water)) => Some(GestureCode::Water),
            _ => None,
        }
    }
}

/// Ordered, validated list of gesture rules. The first matching rule wins.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<GestureRule>", into = "Vec<GestureRule>")
)]
pub struct RuleTable {
    rules: Vec<GestureRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<GestureRule>) -> Result<Self, RuleError> {
        if rules.is_empty() {
            return Err(RuleError::EmptyTable);
        }

        for (index, rule) in rules.iter().enumerate() {
            if rule.name.trim().is_empty() {
                return Err(RuleError::EmptyName { index });
            }
            if rules[..index].iter().any(|earlier| earlier.name == rule.name) {
                return Err(RuleError::DuplicateName {
                    name: rule.name.clone(),
                });
            }
            if rule.code().is_none() {
                return Err(RuleError::AmbiguousCode {
                    name: rule.name.clone(),
                });
            }
            rule.condition.validate(&rule.name)?;
        }

        Ok(Self { rules })
    }

    /// The built-in table: defend, attack, fire, grass, water, in that order.
    pub fn canonical() -> Self {
        use FingerCondition as F;

        let (yes, no) = (true, false);
        Self {
            rules: vec![
                GestureRule::action(
                    "defend",
                    Condition::fingers([F::stretched(no), F::stretched(yes), F::stretched(no), F::stretched(no)])
                        .hand_angle_at_most(20.0),
                    ActionCode::Defend,
                ),
                GestureRule::action(
                    "attack",
                    Condition::fingers([F::stretched(yes), F::stretched(no), F::stretched(no), F::stretched(yes)])
                        .hand_angle_at_most(20.0),
                    ActionCode::Attack,
                ),
                GestureRule::element(
                    "fire",
                    Condition::fingers([F::stretched(yes), F::stretched(yes), F::stretched(no), F::stretched(no)])
                        .hand_angle_at_most(45.0),
                    Element::Fire,
                ),
                GestureRule::element(
                    "grass",
                    Condition::fingers([F::stretched_up(yes, yes); 4])
                        .thumb_angle_at_most(30.0)
                        .hand_angle_at_most(20.0),
                    Element::Grass,
                ),
                GestureRule::element(
                    "water",
                    Condition::fingers([F::stretched_up(no, no); 4]).thumb_angle_at_most(14.0),
                    Element::Water,
                ),
            ],
        }
    }

    pub fn rules(&self) -> &[GestureRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule matching `state`, if any.
    pub fn classify(&self, state: &FingerState) -> Option<&GestureRule> {
        crate::classifier::classify(state, &self.rules)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::canonical()
    }
}

impl TryFrom<Vec<GestureRule>> for RuleTable {
    type Error = RuleError;

    fn try_from(rules: Vec<GestureRule>) -> Result<Self, Self::Error> {
        Self::new(rules)
    }
}

impl From<RuleTable> for Vec<GestureRule> {
    fn from(table: RuleTable) -> Self {
        table.rules
    }
}
