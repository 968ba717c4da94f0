/// Default damping coefficient applied to raw finger displacement.
pub const DEFAULT_DAMPING_COEFFICIENT: f32 = 0.3;

/// Configuration for a [`crate::DragGestureController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureOptions {
    /// Multiplier applied to raw pointer displacement (perceived drag resistance).
    ///
    /// Expected in `[0, 1]`. Values outside that range are not rejected; they simply make the
    /// edge feel lighter than the finger (or invert it).
    pub damping_coefficient: f32,

    /// When `false` the edge is elastic only: it follows the finger and bounces back, but
    /// never reaches [`crate::RevealStatus::Triggering`].
    pub trigger_enabled: bool,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            damping_coefficient: DEFAULT_DAMPING_COEFFICIENT,
            trigger_enabled: true,
        }
    }
}

impl GestureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping_coefficient(mut self, coefficient: f32) -> Self {
        self.damping_coefficient = coefficient;
        self
    }

    pub fn with_trigger_enabled(mut self, enabled: bool) -> Self {
        self.trigger_enabled = enabled;
        self
    }
}
