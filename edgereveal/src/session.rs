use alloc::vec::Vec;

use crate::PointerId;

/// Bookkeeping of one pointer-down-to-release cycle.
///
/// The distance is edge-normalized: positive means "pulled away from the edge".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragSession {
    tracked: Option<PointerId>,
    reference_y: f32,
    carried: i32,
    current: i32,
    engaged: bool,
    handoff_armed: bool,
    /// Pointers currently down, in press order, with their last known `y`.
    pointers: Vec<(PointerId, f32)>,
}

impl DragSession {
    pub(crate) fn start(pointer: PointerId, y: f32) -> Self {
        let mut pointers = Vec::with_capacity(2);
        pointers.push((pointer, y));
        Self {
            tracked: Some(pointer),
            reference_y: y,
            pointers,
            ..Self::default()
        }
    }

    /// The pointer whose movement drives the distance.
    pub fn tracked_pointer(&self) -> Option<PointerId> {
        self.tracked
    }

    pub fn reference_y(&self) -> f32 {
        self.reference_y
    }

    /// Distance accumulated before the last re-base.
    pub fn carried_distance(&self) -> i32 {
        self.carried
    }

    pub fn current_distance(&self) -> i32 {
        self.current
    }

    /// Whether the edge is currently being pulled (as opposed to the list scrolling).
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn is_handoff_armed(&self) -> bool {
        self.handoff_armed
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub(crate) fn is_tracking(&self, pointer: PointerId) -> bool {
        self.tracked == Some(pointer)
    }

    pub(crate) fn press(&mut self, pointer: PointerId, y: f32) {
        self.pointers.retain(|(p, _)| *p != pointer);
        self.pointers.push((pointer, y));
    }

    pub(crate) fn record_move(&mut self, pointer: PointerId, y: f32) {
        if let Some(entry) = self.pointers.iter_mut().find(|(p, _)| *p == pointer) {
            entry.1 = y;
        }
    }

    pub(crate) fn distance_at(&self, y: f32, sign: f32, coefficient: f32) -> i32 {
        let delta = (y - self.reference_y) * sign * coefficient;
        self.carried.saturating_add(delta as i32)
    }

    pub(crate) fn engage(&mut self) {
        self.engaged = true;
        // Fingers already down when the pull starts count as hand-off candidates.
        if self.pointers.len() > 1 {
            self.handoff_armed = true;
        }
    }

    /// Ends the pull but keeps the reference, so the distance keeps tracking the finger.
    pub(crate) fn disengage(&mut self) {
        self.engaged = false;
        self.handoff_armed = false;
        self.current = 0;
    }

    pub(crate) fn arm_handoff(&mut self) {
        if self.engaged {
            self.handoff_armed = true;
        }
    }

    pub(crate) fn set_current(&mut self, distance: i32) {
        self.current = distance;
    }

    /// Restarts the distance from zero at `y`.
    pub(crate) fn rebase(&mut self, y: f32) {
        self.reference_y = y;
        self.carried = 0;
        self.current = 0;
    }

    /// Forgets a lifted pointer. If it was the tracked one, tracking moves to the most recently
    /// pressed remaining pointer, re-based at its last position; the current distance is carried
    /// over when hand-off was armed.
    ///
    /// Returns `true` when tracking moved to another pointer.
    pub(crate) fn lift(&mut self, pointer: PointerId) -> bool {
        self.pointers.retain(|(p, _)| *p != pointer);
        if !self.is_tracking(pointer) {
            return false;
        }
        let Some(&(next, y)) = self.pointers.last() else {
            self.tracked = None;
            return false;
        };
        self.tracked = Some(next);
        self.reference_y = y;
        self.carried = if self.handoff_armed { self.current } else { 0 };
        self.current = self.carried;
        self.handoff_armed = self.engaged && self.pointers.len() > 1;
        true
    }
}
