/// Identifies one finger/pointer for the duration of its contact.
pub type PointerId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerAction {
    /// First pointer touches down; starts a gesture.
    Down,
    Move,
    /// Another pointer touches down while at least one is already down.
    SecondaryDown,
    /// A pointer lifts while at least one other stays down.
    SecondaryUp,
    /// The last pointer lifts.
    Up,
    /// The platform aborted the gesture. Handled like [`PointerAction::Up`].
    Cancel,
}

/// One event of the abstract pointer stream.
///
/// `y` is the raw (screen) vertical coordinate of `pointer`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub action: PointerAction,
    pub pointer: PointerId,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(action: PointerAction, pointer: PointerId, y: f32) -> Self {
        Self { action, pointer, y }
    }

    pub fn down(pointer: PointerId, y: f32) -> Self {
        Self::new(PointerAction::Down, pointer, y)
    }

    pub fn moved(pointer: PointerId, y: f32) -> Self {
        Self::new(PointerAction::Move, pointer, y)
    }

    pub fn secondary_down(pointer: PointerId, y: f32) -> Self {
        Self::new(PointerAction::SecondaryDown, pointer, y)
    }

    pub fn secondary_up(pointer: PointerId, y: f32) -> Self {
        Self::new(PointerAction::SecondaryUp, pointer, y)
    }

    pub fn up(pointer: PointerId, y: f32) -> Self {
        Self::new(PointerAction::Up, pointer, y)
    }

    pub fn cancel(pointer: PointerId, y: f32) -> Self {
        Self::new(PointerAction::Cancel, pointer, y)
    }

    /// `true` for the events that end a gesture.
    pub fn is_release(&self) -> bool {
        matches!(self.action, PointerAction::Up | PointerAction::Cancel)
    }
}
