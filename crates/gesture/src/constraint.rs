/// A single optional check inside a gesture condition.
///
/// `Unset` always passes. Booleans use `Equals`; angle maxima use `AtMost`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constraint<T> {
    #[default]
    Unset,
    Equals(T),
    AtMost(T),
}

impl<T: PartialOrd + Copy> Constraint<T> {
    pub fn satisfied_by(&self, value: T) -> bool {
        match *self {
            Self::Unset => true,
            Self::Equals(expected) => value == expected,
            Self::AtMost(max) => value <= max,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub fn bound(&self) -> Option<T> {
        match *self {
            Self::AtMost(max) => Some(max),
            _ => None,
        }
    }
}

impl Constraint<f32> {
    /// Bound used when an angle check is requested without a maximum.
    pub const UNBOUNDED_ANGLE: f32 = 180.0;

    /// An angle check, falling back to [`Self::UNBOUNDED_ANGLE`] without a maximum.
    pub fn angle_check(max: Option<f32>) -> Self {
        Self::AtMost(max.unwrap_or(Self::UNBOUNDED_ANGLE))
    }
}
