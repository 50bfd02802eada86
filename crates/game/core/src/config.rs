/// Duel configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DuelConfig {
    /// Number of rounds played per match and capacity of each action sequence.
    pub max_actions: usize,
    /// Health every player starts the match with.
    pub max_health: f32,
    /// Hit charge every player starts the match with.
    pub initial_hit_charge: u32,
    /// Hit charge a player is reset to after taking a hit.
    pub charge_after_hit: u32,
    /// Duration of the base action clip placed every round.
    pub action_clip_duration: f64,
    /// Duration of the hit-reaction clip appended for the side that was hit.
    pub hit_clip_duration: f64,
    /// Entries with an angle below this limit use the straight clip variant.
    pub straight_angle_limit: u8,
}

impl DuelConfig {
    // ===== compile-time constants used as type parameters =====
    /// Upper bound for `max_actions`; sizes the inline action buffers.
    pub const MAX_ACTIONS_CAP: usize = 16;
    /// Capacity of the per-player recognised gesture queue.
    pub const GESTURE_QUEUE_CAPACITY: usize = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ACTIONS: usize = 5;
    pub const DEFAULT_MAX_HEALTH: f32 = 100.0;
    pub const DEFAULT_HIT_CHARGE: u32 = 1;
    pub const DEFAULT_CLIP_DURATION: f64 = 2.0;
    pub const DEFAULT_STRAIGHT_ANGLE_LIMIT: u8 = 20;

    pub fn new() -> Self {
        Self {
            max_actions: Self::DEFAULT_MAX_ACTIONS,
            max_health: Self::DEFAULT_MAX_HEALTH,
            initial_hit_charge: Self::DEFAULT_HIT_CHARGE,
            charge_after_hit: Self::DEFAULT_HIT_CHARGE,
            action_clip_duration: Self::DEFAULT_CLIP_DURATION,
            hit_clip_duration: Self::DEFAULT_CLIP_DURATION,
            straight_angle_limit: Self::DEFAULT_STRAIGHT_ANGLE_LIMIT,
        }
    }

    pub fn with_max_actions(max_actions: usize) -> Self {
        Self {
            max_actions,
            ..Self::new()
        }
    }

    /// Overrides the post-hit charge reset value (builder pattern).
    #[must_use]
    pub fn charge_after_hit(mut self, charge: u32) -> Self {
        self.charge_after_hit = charge;
        self
    }

    /// Overrides both clip durations (builder pattern).
    #[must_use]
    pub fn clip_durations(mut self, action: f64, hit: f64) -> Self {
        self.action_clip_duration = action;
        self.hit_clip_duration = hit;
        self
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self::new()
    }
}
