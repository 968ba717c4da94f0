use alloc::boxed::Box;
use alloc::rc::Rc;

use edgereveal::{
    DragGestureController, Edge, EdgeWidget, EdgeWidgetCreator, GestureOutcome, GridLayout,
    ListAdapter, ListChange, ListDecorator, PointerEvent, Result, RevealListener, RevealStatus,
    ScrollProbe, SlotHolder, ViewKind,
};

use crate::EdgeRevealOptions;

struct EdgeSlot<W> {
    controller: Option<DragGestureController<W>>,
    /// Listener set before a creator was installed.
    listener: Option<RevealListener>,
    trigger_enabled: bool,
}

impl<W> EdgeSlot<W> {
    fn new(trigger_enabled: bool) -> Self {
        Self {
            controller: None,
            listener: None,
            trigger_enabled,
        }
    }
}

/// A decorated list with a pull-to-refresh top edge and a pull-to-load-more bottom edge.
///
/// Owns one [`ListDecorator`] and up to two [`DragGestureController`]s. Installing a creator
/// builds the edge widget and registers it in the decorator: the refresh widget as the first
/// header, the load widget as the last footer.
///
/// Like the controllers it wraps, this type holds no timers. The host calls:
/// - `on_layout` when the list has a width,
/// - `on_pointer` for every pointer event (both edges see every event),
/// - `tick(now_ms)` each frame/timer tick.
pub struct EdgeRevealView<A, W> {
    list: ListDecorator<A, W>,
    options: EdgeRevealOptions,
    layout_width: Option<u32>,
    top: EdgeSlot<W>,
    bottom: EdgeSlot<W>,
}

impl<A: ListAdapter, W: EdgeWidget> Default for EdgeRevealView<A, W> {
    fn default() -> Self {
        Self::new(EdgeRevealOptions::default())
    }
}

impl<A: ListAdapter, W: EdgeWidget> EdgeRevealView<A, W> {
    pub fn new(options: EdgeRevealOptions) -> Self {
        let trigger = options.gesture.trigger_enabled;
        Self {
            list: ListDecorator::new(),
            options,
            layout_width: None,
            top: EdgeSlot::new(trigger),
            bottom: EdgeSlot::new(trigger),
        }
    }

    pub fn with_adapter(adapter: A, options: EdgeRevealOptions) -> Self {
        let mut view = Self::new(options);
        view.list.set_adapter(adapter);
        view
    }

    pub fn options(&self) -> &EdgeRevealOptions {
        &self.options
    }

    pub fn list(&self) -> &ListDecorator<A, W> {
        &self.list
    }

    /// Direct access to the decorator.
    ///
    /// Removing an edge widget through it leaves the controller running without a visible slot.
    pub fn list_mut(&mut self) -> &mut ListDecorator<A, W> {
        &mut self.list
    }

    fn slot(&self, edge: Edge) -> &EdgeSlot<W> {
        match edge {
            Edge::Top => &self.top,
            Edge::Bottom => &self.bottom,
        }
    }

    fn slot_mut(&mut self, edge: Edge) -> &mut EdgeSlot<W> {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Bottom => &mut self.bottom,
        }
    }

    pub fn controller(&self, edge: Edge) -> Option<&DragGestureController<W>> {
        self.slot(edge).controller.as_ref()
    }

    pub fn refresh_widget(&self) -> Option<&Rc<W>> {
        self.controller(Edge::Top).map(DragGestureController::widget)
    }

    pub fn load_widget(&self) -> Option<&Rc<W>> {
        self.controller(Edge::Bottom).map(DragGestureController::widget)
    }

    /// Installs the refresh (top edge) creator, replacing any previous one and its widget.
    pub fn set_refresh_creator(
        &mut self,
        creator: impl EdgeWidgetCreator<W> + 'static,
    ) -> Result<()> {
        self.install_creator(Edge::Top, creator)
    }

    /// Installs the load-more (bottom edge) creator, replacing any previous one and its widget.
    pub fn set_load_creator(&mut self, creator: impl EdgeWidgetCreator<W> + 'static) -> Result<()> {
        self.install_creator(Edge::Bottom, creator)
    }

    fn install_creator(
        &mut self,
        edge: Edge,
        creator: impl EdgeWidgetCreator<W> + 'static,
    ) -> Result<()> {
        let slot = match edge {
            Edge::Top => &mut self.top,
            Edge::Bottom => &mut self.bottom,
        };
        let options = self
            .options
            .gesture
            .with_trigger_enabled(slot.trigger_enabled);
        let mut controller = match DragGestureController::new(edge, creator, options) {
            Ok(c) => c,
            Err(err) => {
                vwarn!(%edge, %err, "edge creator rejected");
                return Err(err);
            }
        };
        if let Some(width) = self.layout_width {
            controller.on_layout(width)?;
        }

        let listener = match slot.controller.take() {
            Some(mut old) => {
                let prev = Rc::clone(old.widget());
                self.list.batch_update(|list| {
                    match edge {
                        Edge::Top => list.remove_header(&prev),
                        Edge::Bottom => list.remove_footer(&prev),
                    };
                });
                old.take_listener()
            }
            None => slot.listener.take(),
        };
        controller.set_listener(listener);

        let widget = Rc::clone(controller.widget());
        slot.controller = Some(controller);
        match edge {
            Edge::Top => self.list.insert_header_first(widget),
            Edge::Bottom => self.list.add_footer(widget),
        };
        vdebug!(%edge, "edge creator installed");
        Ok(())
    }

    /// Sets the callback run when the top edge is released past its threshold.
    pub fn set_on_refresh(&mut self, listener: Option<impl FnMut() + 'static>) {
        self.install_listener(Edge::Top, listener.map(|f| Box::new(f) as RevealListener));
    }

    /// Sets the callback run when the bottom edge is released past its threshold.
    pub fn set_on_load_more(&mut self, listener: Option<impl FnMut() + 'static>) {
        self.install_listener(Edge::Bottom, listener.map(|f| Box::new(f) as RevealListener));
    }

    fn install_listener(&mut self, edge: Edge, listener: Option<RevealListener>) {
        let slot = self.slot_mut(edge);
        match slot.controller.as_mut() {
            Some(c) => c.set_listener(listener),
            None => slot.listener = listener,
        }
    }

    /// Reports that the refresh finished; see [`DragGestureController::notify_complete`].
    pub fn notify_refresh_complete(&mut self, result: &str, delay_ms: u64, now_ms: u64) -> bool {
        self.notify_complete(Edge::Top, result, delay_ms, now_ms)
    }

    /// Reports that loading more finished; see [`DragGestureController::notify_complete`].
    pub fn notify_load_complete(&mut self, result: &str, delay_ms: u64, now_ms: u64) -> bool {
        self.notify_complete(Edge::Bottom, result, delay_ms, now_ms)
    }

    fn notify_complete(&mut self, edge: Edge, result: &str, delay_ms: u64, now_ms: u64) -> bool {
        match self.slot_mut(edge).controller.as_mut() {
            Some(c) => c.notify_complete(result, delay_ms, now_ms),
            None => {
                vdebug!(%edge, "notify_complete without a creator");
                false
            }
        }
    }

    pub fn refresh_status(&self) -> RevealStatus {
        self.status(Edge::Top)
    }

    pub fn load_status(&self) -> RevealStatus {
        self.status(Edge::Bottom)
    }

    /// Status of `edge`; `Idle` when it has no creator.
    pub fn status(&self, edge: Edge) -> RevealStatus {
        self.controller(edge)
            .map_or(RevealStatus::Idle, DragGestureController::status)
    }

    /// Applies to both edges.
    pub fn set_damping_coefficient(&mut self, coefficient: f32) {
        self.options.gesture.damping_coefficient = coefficient;
        for slot in [&mut self.top, &mut self.bottom] {
            if let Some(c) = slot.controller.as_mut() {
                c.set_damping_coefficient(coefficient);
            }
        }
    }

    /// `false` makes the top edge elastic only.
    pub fn set_top_trigger_enabled(&mut self, enabled: bool) {
        self.set_trigger_enabled(Edge::Top, enabled);
    }

    /// `false` makes the bottom edge elastic only.
    pub fn set_bottom_trigger_enabled(&mut self, enabled: bool) {
        self.set_trigger_enabled(Edge::Bottom, enabled);
    }

    fn set_trigger_enabled(&mut self, edge: Edge, enabled: bool) {
        let slot = self.slot_mut(edge);
        slot.trigger_enabled = enabled;
        if let Some(c) = slot.controller.as_mut() {
            c.set_trigger_enabled(enabled);
        }
    }

    /// Reports the host's layout; slots span full rows on grids when `adjust_grid_span` is set.
    pub fn set_layout(&mut self, layout: &dyn GridLayout) {
        self.list
            .set_grid_span_adjustment(layout, self.options.adjust_grid_span);
    }

    pub fn set_grid_span_adjustment(&mut self, layout: &dyn GridLayout, enabled: bool) {
        self.options.adjust_grid_span = enabled;
        self.list.set_grid_span_adjustment(layout, enabled);
    }

    /// Measures edge widgets that were not measured yet.
    pub fn on_layout(&mut self, available_width: u32) -> Result<()> {
        self.layout_width = Some(available_width);
        // Both edges are measured even when one fails; the first error is reported.
        let mut result = Ok(());
        for slot in [&mut self.top, &mut self.bottom] {
            if let Some(c) = slot.controller.as_mut() {
                let measured = c.on_layout(available_width);
                if result.is_ok() {
                    result = measured;
                }
            }
        }
        result
    }

    /// Feeds one pointer event to both edges.
    ///
    /// The event is consumed when either edge consumed it.
    pub fn on_pointer(
        &mut self,
        event: PointerEvent,
        probe: &dyn ScrollProbe,
        now_ms: u64,
    ) -> GestureOutcome {
        let top = self
            .top
            .controller
            .as_mut()
            .map_or(GestureOutcome::PassThrough, |c| {
                c.on_pointer(event, probe, now_ms)
            });
        let bottom = self
            .bottom
            .controller
            .as_mut()
            .map_or(GestureOutcome::PassThrough, |c| {
                c.on_pointer(event, probe, now_ms)
            });
        vtrace!(?top, ?bottom, "on_pointer");
        top.or(bottom)
    }

    /// Advances both edges. Returns `true` when an edge offset moved.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut moved = false;
        for slot in [&mut self.top, &mut self.bottom] {
            if let Some(c) = slot.controller.as_mut() {
                moved |= c.tick(now_ms).is_some();
            }
        }
        moved
    }

    pub fn is_animating(&self) -> bool {
        [&self.top, &self.bottom]
            .into_iter()
            .filter_map(|s| s.controller.as_ref())
            .any(DragGestureController::is_animating)
    }

    /// Whether the host should keep calling `tick` (a tween runs or a restore is pending).
    pub fn needs_tick(&self) -> bool {
        [&self.top, &self.bottom]
            .into_iter()
            .filter_map(|s| s.controller.as_ref())
            .any(|c| c.is_animating() || c.has_pending_restore())
    }

    /// Aborts gestures, animations and pending restores on both edges.
    pub fn cancel(&mut self) {
        for slot in [&mut self.top, &mut self.bottom] {
            if let Some(c) = slot.controller.as_mut() {
                c.cancel();
            }
        }
    }

    pub fn set_adapter(&mut self, adapter: A) -> Option<A> {
        self.list.set_adapter(adapter)
    }

    pub fn take_adapter(&mut self) -> Option<A> {
        self.list.take_adapter()
    }

    pub fn adapter(&self) -> Option<&A> {
        self.list.adapter()
    }

    pub fn adapter_mut(&mut self) -> Option<&mut A> {
        self.list.adapter_mut()
    }

    pub fn update_adapter(&mut self, f: impl FnOnce(&mut A) -> ListChange) -> bool {
        self.list.update_adapter(f)
    }

    pub fn notify_adapter_changed(&mut self, change: ListChange) {
        self.list.notify_adapter_changed(change);
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&ListChange) + 'static>) {
        self.list.set_on_change(on_change);
    }

    pub fn add_header(&mut self, widget: Rc<W>) -> bool {
        self.list.add_header(widget)
    }

    pub fn remove_header(&mut self, widget: &Rc<W>) -> bool {
        self.list.remove_header(widget)
    }

    /// Appends a footer before the load-more widget, which stays last.
    pub fn add_footer(&mut self, widget: Rc<W>) -> bool {
        let Some(load) = self.load_widget().cloned() else {
            return self.list.add_footer(widget);
        };
        if Rc::ptr_eq(&load, &widget) || self.list.contains_footer(&widget) {
            return false;
        }
        let mut added = false;
        self.list.batch_update(|list| {
            let reattach = list.remove_footer(&load);
            added = list.add_footer(widget);
            if reattach {
                list.add_footer(load);
            }
        });
        added
    }

    pub fn remove_footer(&mut self, widget: &Rc<W>) -> bool {
        self.list.remove_footer(widget)
    }

    pub fn set_empty_state_view(&mut self, widget: Rc<W>) {
        self.list.set_empty_state_view(widget);
    }

    pub fn clear_empty_state_view(&mut self) -> Option<Rc<W>> {
        self.list.clear_empty_state_view()
    }

    pub fn header_count(&self) -> usize {
        self.list.header_count()
    }

    pub fn footer_count(&self) -> usize {
        self.list.footer_count()
    }

    pub fn item_count(&self) -> usize {
        self.list.item_count()
    }

    pub fn view_kind_at(&self, position: usize) -> Option<ViewKind<A::Kind>> {
        self.list.view_kind_at(position)
    }

    pub fn slot_widget_at(&self, position: usize) -> Option<&Rc<W>> {
        self.list.slot_widget_at(position)
    }

    pub fn span_size_at(&self, position: usize) -> usize {
        self.list.span_size_at(position)
    }
}

impl<A: ListAdapter, W: EdgeWidget> ListAdapter for EdgeRevealView<A, W> {
    type Kind = ViewKind<A::Kind>;
    type Holder = SlotHolder<W, A::Holder>;

    fn item_count(&self) -> usize {
        self.list.item_count()
    }

    fn view_kind_at(&self, index: usize) -> Option<Self::Kind> {
        self.list.view_kind_at(index)
    }

    fn create_view(&mut self, kind: &Self::Kind) -> Option<Self::Holder> {
        self.list.create_view(kind)
    }

    fn bind_view(&mut self, holder: &mut Self::Holder, index: usize) {
        self.list.bind_view(holder, index);
    }

    fn forwards_own_changes(&self) -> bool {
        true
    }
}

impl<A, W> core::fmt::Debug for EdgeRevealView<A, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EdgeRevealView")
            .field("list", &self.list)
            .field("options", &self.options)
            .field("top", &self.top.controller)
            .field("bottom", &self.bottom.controller)
            .finish()
    }
}
