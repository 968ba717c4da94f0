use edgereveal::GestureOptions;

/// Configuration for an [`crate::EdgeRevealView`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EdgeRevealOptions {
    /// Shared by both edges. `trigger_enabled` is the initial value for each edge; it can be
    /// changed per edge afterwards.
    pub gesture: GestureOptions,

    /// Whether header/footer slots span a full grid row when the host reports a grid layout
    /// through [`crate::EdgeRevealView::set_layout`].
    pub adjust_grid_span: bool,
}

impl Default for EdgeRevealOptions {
    fn default() -> Self {
        Self {
            gesture: GestureOptions::default(),
            adjust_grid_span: true,
        }
    }
}

impl EdgeRevealOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gesture(mut self, gesture: GestureOptions) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn with_damping_coefficient(mut self, coefficient: f32) -> Self {
        self.gesture.damping_coefficient = coefficient;
        self
    }

    pub fn with_adjust_grid_span(mut self, enabled: bool) -> Self {
        self.adjust_grid_span = enabled;
        self
    }
}
