use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::{
    ConfigError, DragSession, Edge, EdgeWidget, EdgeWidgetCreator, GestureOptions,
    GestureOutcome, HeightSpec, PointerAction, PointerEvent, Result, RevealStatus, ScrollProbe,
    Tween,
};

/// Callback run once each time an edge is released past its threshold.
pub type RevealListener = Box<dyn FnMut()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingRestore {
    due_ms: u64,
    generation: u64,
}

/// Drag state machine for one list edge.
///
/// Turns the pointer stream into a damped reveal distance, moves the edge widget's margin with
/// it, and runs `Idle -> Dragging -> ReadyToTrigger -> Triggering -> Idle`.
///
/// The controller holds no timers. The adapter drives it by calling:
/// - `on_layout` once layout information is available (measures the edge widget),
/// - `on_pointer` for every pointer event,
/// - `tick(now_ms)` each frame/timer tick (bounce-back tweens, delayed restores).
pub struct DragGestureController<W> {
    edge: Edge,
    options: GestureOptions,
    creator: Box<dyn EdgeWidgetCreator<W>>,
    widget: Rc<W>,
    listener: Option<RevealListener>,

    edge_size: Option<u32>,
    status: RevealStatus,
    session: DragSession,
    offset: i32,
    tween: Option<Tween>,

    generation: u64,
    restores: Vec<PendingRestore>,
}

impl<W: EdgeWidget> DragGestureController<W> {
    /// Creates a controller and its edge widget.
    ///
    /// Fails with [`ConfigError::MissingEdgeWidget`] when the creator yields no widget.
    pub fn new(
        edge: Edge,
        creator: impl EdgeWidgetCreator<W> + 'static,
        options: GestureOptions,
    ) -> Result<Self> {
        let mut creator: Box<dyn EdgeWidgetCreator<W>> = Box::new(creator);
        let Some(widget) = creator.create_widget() else {
            vwarn!(%edge, "edge widget creator returned no widget");
            return Err(ConfigError::MissingEdgeWidget { edge });
        };
        vdebug!(%edge, damping = options.damping_coefficient, "DragGestureController::new");
        Ok(Self {
            edge,
            options,
            creator,
            widget,
            listener: None,
            edge_size: None,
            status: RevealStatus::Idle,
            session: DragSession::default(),
            offset: 0,
            tween: None,
            generation: 0,
            restores: Vec::new(),
        })
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn widget(&self) -> &Rc<W> {
        &self.widget
    }

    pub fn options(&self) -> &GestureOptions {
        &self.options
    }

    pub fn status(&self) -> RevealStatus {
        self.status
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// The measured edge widget height; `None` until `on_layout` measured it.
    pub fn edge_size(&self) -> Option<u32> {
        self.edge_size
    }

    /// The current reveal offset (the widget's margin facing the edge).
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// The fully hidden offset, `-edge_size + 1`.
    pub fn hidden_offset(&self) -> i32 {
        self.edge_size.map_or(0, |size| 1 - size as i32)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn has_pending_restore(&self) -> bool {
        self.restores
            .iter()
            .any(|r| r.generation == self.generation)
    }

    pub fn set_damping_coefficient(&mut self, coefficient: f32) {
        self.options.damping_coefficient = coefficient;
    }

    pub fn set_trigger_enabled(&mut self, enabled: bool) {
        self.options.trigger_enabled = enabled;
    }

    pub fn set_options(&mut self, options: GestureOptions) {
        self.options = options;
    }

    pub fn set_listener(&mut self, listener: Option<impl FnMut() + 'static>) {
        self.listener = listener.map(|f| Box::new(f) as _);
    }

    /// Removes and returns the reveal listener.
    pub fn take_listener(&mut self) -> Option<RevealListener> {
        self.listener.take()
    }

    /// Measures the edge widget on the first layout pass that yields a positive height, then
    /// hides it. Later calls are no-ops.
    pub fn on_layout(&mut self, available_width: u32) -> Result<()> {
        if self.edge_size.is_some() {
            return Ok(());
        }
        let size = match self.widget.height_spec() {
            HeightSpec::Exact(h) => h,
            HeightSpec::WrapContent => self.widget.measure(available_width),
            HeightSpec::MatchParent => {
                vwarn!(edge = %self.edge, "edge widget height must not match its parent");
                return Err(ConfigError::NonExactEdgeHeight { edge: self.edge });
            }
        };
        if size == 0 {
            return Ok(());
        }
        vdebug!(edge = %self.edge, size, "edge widget measured");
        self.edge_size = Some(size);
        self.apply_offset(self.hidden_offset());
        Ok(())
    }

    fn apply_offset(&mut self, offset: i32) {
        let offset = offset.max(self.hidden_offset());
        self.offset = offset;
        self.widget.set_reveal_margin(self.edge, offset);
    }

    fn set_status(&mut self, status: RevealStatus) {
        if self.status != status {
            vtrace!(edge = %self.edge, from = ?self.status, to = ?status, "status");
            self.status = status;
        }
    }

    fn animate_to(&mut self, target: i32, now_ms: u64) {
        self.tween = Some(Tween::by_distance(self.offset, target, now_ms));
    }

    /// Feeds one pointer event.
    ///
    /// `probe` answers whether the list can still scroll toward this edge; the gesture only
    /// engages when it cannot.
    pub fn on_pointer(
        &mut self,
        event: PointerEvent,
        probe: &dyn ScrollProbe,
        now_ms: u64,
    ) -> GestureOutcome {
        vtrace!(edge = %self.edge, action = ?event.action, pointer = event.pointer, y = event.y, "on_pointer");
        match event.action {
            PointerAction::Down => self.on_down(event),
            PointerAction::SecondaryDown => {
                self.session.press(event.pointer, event.y);
                self.session.arm_handoff();
                self.engaged_outcome()
            }
            PointerAction::Move => self.on_move(event, probe),
            PointerAction::SecondaryUp => {
                if self.session.lift(event.pointer) {
                    vtrace!(
                        edge = %self.edge,
                        carried = self.session.carried_distance(),
                        "pointer hand-off"
                    );
                }
                self.engaged_outcome()
            }
            PointerAction::Up | PointerAction::Cancel => self.on_release(now_ms),
        }
    }

    fn engaged_outcome(&self) -> GestureOutcome {
        if self.session.is_engaged() {
            GestureOutcome::Consumed
        } else {
            GestureOutcome::PassThrough
        }
    }

    fn on_down(&mut self, event: PointerEvent) -> GestureOutcome {
        if self.status == RevealStatus::Triggering {
            self.session = DragSession::default();
            return GestureOutcome::PassThrough;
        }
        self.generation = self.generation.wrapping_add(1);
        self.session = DragSession::start(event.pointer, event.y);
        GestureOutcome::PassThrough
    }

    fn on_move(&mut self, event: PointerEvent, probe: &dyn ScrollProbe) -> GestureOutcome {
        self.session.record_move(event.pointer, event.y);
        if !self.session.is_tracking(event.pointer) {
            return self.engaged_outcome();
        }
        let Some(size) = self.edge_size else {
            return GestureOutcome::PassThrough;
        };
        if self.status == RevealStatus::Triggering {
            return GestureOutcome::PassThrough;
        }

        let distance = self.session.distance_at(
            event.y,
            self.edge.pull_sign(),
            self.options.damping_coefficient,
        );

        if !self.session.is_engaged() {
            if probe.can_scroll_toward(self.edge) {
                // The list scrolls; keep the reference under the finger so a pull starts at 0.
                self.session.rebase(event.y);
                return GestureOutcome::PassThrough;
            }
            if distance <= 0 {
                return GestureOutcome::PassThrough;
            }
            self.session.engage();
            self.tween = None;
        }

        if distance <= 0 {
            // Pushed back past the starting point: hand the gesture back to the list.
            self.session.disengage();
            self.set_status(RevealStatus::Idle);
            self.creator.on_pulling(&self.widget, 0, size);
            self.apply_offset(self.hidden_offset());
            return GestureOutcome::PassThrough;
        }

        self.session.set_current(distance);
        let status = if distance < size as i32 {
            RevealStatus::Dragging
        } else {
            RevealStatus::ReadyToTrigger
        };
        self.set_status(status);
        self.creator.on_pulling(&self.widget, distance, size);
        self.apply_offset(distance - size as i32);
        GestureOutcome::Consumed
    }

    fn on_release(&mut self, now_ms: u64) -> GestureOutcome {
        let engaged = self.session.is_engaged();
        self.session = DragSession::default();
        if !engaged {
            return GestureOutcome::PassThrough;
        }

        if self.status == RevealStatus::ReadyToTrigger && self.options.trigger_enabled {
            self.set_status(RevealStatus::Triggering);
            self.creator.on_active(&self.widget);
            if let Some(listener) = self.listener.as_mut() {
                listener();
            }
            self.animate_to(0, now_ms);
        } else {
            self.set_status(RevealStatus::Idle);
            self.animate_to(self.hidden_offset(), now_ms);
        }
        GestureOutcome::Consumed
    }

    /// Reports that the triggered action finished.
    ///
    /// Honored only while [`RevealStatus::Triggering`]: calls the creator's `on_complete` with
    /// `result` right away and schedules the widget to hide `delay_ms` later. Returns `false`
    /// (and does nothing) in any other status.
    pub fn notify_complete(&mut self, result: &str, delay_ms: u64, now_ms: u64) -> bool {
        if self.status != RevealStatus::Triggering {
            vdebug!(edge = %self.edge, status = ?self.status, "notify_complete ignored");
            return false;
        }
        self.creator.on_complete(&self.widget, result);
        self.generation = self.generation.wrapping_add(1);
        self.restores.push(PendingRestore {
            due_ms: now_ms.saturating_add(delay_ms),
            generation: self.generation,
        });
        true
    }

    /// Aborts any gesture, animation or pending restore and hides the widget.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.session = DragSession::default();
        self.tween = None;
        self.set_status(RevealStatus::Idle);
        if self.edge_size.is_some() {
            self.apply_offset(self.hidden_offset());
        }
    }

    /// Advances delayed restores and the running tween.
    ///
    /// Returns the new offset while a tween is running, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<i32> {
        self.run_due_restores(now_ms);

        let tween = self.tween?;
        self.apply_offset(tween.sample(now_ms));
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(self.offset)
    }

    fn run_due_restores(&mut self, now_ms: u64) {
        if self.restores.is_empty() {
            return;
        }
        let mut current_due = false;
        let generation = self.generation;
        self.restores.retain(|r| {
            if r.due_ms > now_ms {
                return true;
            }
            if r.generation == generation {
                current_due = true;
            } else {
                vdebug!(generation = r.generation, "stale restore dropped");
            }
            false
        });
        if current_due && self.status == RevealStatus::Triggering {
            self.set_status(RevealStatus::Idle);
            self.animate_to(self.hidden_offset(), now_ms);
        }
    }
}

impl<W> core::fmt::Debug for DragGestureController<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragGestureController")
            .field("edge", &self.edge)
            .field("options", &self.options)
            .field("edge_size", &self.edge_size)
            .field("status", &self.status)
            .field("offset", &self.offset)
            .field("session", &self.session)
            .field("tween", &self.tween)
            .finish_non_exhaustive()
    }
}
